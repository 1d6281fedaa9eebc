//! Core types for the Strata fixed-size array workspace.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! index aliases, the compile-time [`Shape3`] layout that maps index triples
//! onto a flat row-major buffer, and the [`ArrayError`] type returned by the
//! checked accessors of `strata-array`.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod index;
pub mod shape;

pub use error::ArrayError;
pub use index::{Index3, SignedIndex3, DIM_COUNT};
pub use shape::Shape3;
