//! Fixed-size 3D array storage for Strata.
//!
//! [`Array3D`] stores `D3 * D2 * D1` elements in one contiguous, inline,
//! row-major buffer. The shape is a set of const generic parameters, so the
//! strides and the buffer size are compile-time constants and the container
//! never allocates or resizes.
//!
//! # Access tiers
//!
//! - **Unchecked**: [`Array3D::get`], [`Array3D::get_mut`], indexing with an
//!   [`Index3`](strata_core::Index3), [`Array3D::get_l`] and
//!   [`Array3D::assign`]. Out-of-range indices are a caller bug; debug builds
//!   panic on them.
//! - **Default-valued**: [`Array3D::dget`] and friends fall back to a value
//!   the caller owns.
//! - **Checked**: [`Array3D::try_get`] and friends return
//!   [`ArrayError`](strata_core::ArrayError).
//!
//! Range extraction lives in [`subset`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod array;
pub mod subset;

#[cfg(test)]
pub(crate) mod compliance;

pub use array::Array3D;
pub use subset::subset_of;
