//! Strata: fixed-size, compile-time-dimensioned 3D arrays.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the Strata sub-crates. For most users, adding `strata` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use strata::prelude::*;
//!
//! // 3 planes of 4 rows of 2 elements, stored inline.
//! let mut grid: Array3D<u32, 3, 4, 2> = Array3D::new();
//! grid.assign(5, 1, 0, 0);
//! grid[[2, 3, 1]] = 9;
//!
//! assert_eq!(*grid.get(1, 0, 0), 5);
//! assert_eq!(*grid.get_l(Array3D::<u32, 3, 4, 2>::calc_idx_l(2, 3, 1)), 9);
//!
//! // Neighbour lookups with signed offsets fall back to a caller value.
//! let edge = 0;
//! assert_eq!(*grid.dget_signed(&edge, [-1, 0, 0]), 0);
//!
//! // Checked access reports what went wrong.
//! assert_eq!(
//!     grid.try_get(3, 0, 0),
//!     Err(ArrayError::IndexOutOfBounds { index: [3, 0, 0], dims: [3, 4, 2] })
//! );
//!
//! // Inclusive linear ranges.
//! let row = subset_of(&grid, [2, 3, 0], [2, 3, 1]).unwrap();
//! assert_eq!(row, vec![0, 9]);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `strata-core` | Index aliases, `Shape3` layout, `ArrayError` |
//! | [`array`] | `strata-array` | `Array3D` container and `subset_of` |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Index aliases, layout arithmetic and errors (`strata-core`).
///
/// [`types::Shape3`] exposes the stride and bounds arithmetic without a
/// container, for code that only needs offsets.
pub use strata_core as types;

/// The fixed-size container (`strata-array`).
pub use strata_array as array;

pub use strata_array::{subset_of, Array3D};
pub use strata_core::{ArrayError, Index3, Shape3, SignedIndex3};

/// Common imports for typical Strata usage.
///
/// ```rust
/// use strata::prelude::*;
/// ```
pub mod prelude {
    pub use strata_array::{subset_of, Array3D};
    pub use strata_core::{ArrayError, Index3, Shape3, SignedIndex3, DIM_COUNT};
}
