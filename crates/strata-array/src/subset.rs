//! Linear range extraction between two index triples.

use strata_core::{ArrayError, Index3};

use crate::array::Array3D;

/// Clone the elements from `start` through `end`, both inclusive, in
/// linear-offset order.
///
/// The range follows the flat buffer, not a sub-box: from `[0, 1, 1]` to
/// `[1, 0, 0]` in a `3 x 4 x 2` array it covers offsets 3 through 8,
/// crossing row and plane boundaries.
///
/// # Errors
///
/// - [`ArrayError::IndexOutOfBounds`] if either triple is out of bounds
///   (`start` is checked first).
/// - [`ArrayError::InvertedRange`] if `end` lies before `start`.
///
/// # Examples
///
/// ```
/// use strata_array::{subset_of, Array3D};
///
/// let arr: Array3D<usize, 3, 4, 2> = Array3D::from_fn(|[i, j, k]| i * 8 + j * 2 + k);
/// assert_eq!(subset_of(&arr, [0, 1, 1], [1, 0, 0]).unwrap(), vec![3, 4, 5, 6, 7, 8]);
/// assert!(subset_of(&arr, [1, 0, 0], [0, 0, 0]).is_err());
/// ```
pub fn subset_of<T: Clone, const D3: usize, const D2: usize, const D1: usize>(
    arr: &Array3D<T, D3, D2, D1>,
    start: Index3,
    end: Index3,
) -> Result<Vec<T>, ArrayError> {
    for inds in [start, end] {
        if !Array3D::<T, D3, D2, D1>::in_bounds_at(inds) {
            return Err(ArrayError::IndexOutOfBounds {
                index: inds,
                dims: Array3D::<T, D3, D2, D1>::DIMENSIONS,
            });
        }
    }

    let lo = Array3D::<T, D3, D2, D1>::calc_idx_l_at(start);
    let hi = Array3D::<T, D3, D2, D1>::calc_idx_l_at(end);
    if hi < lo {
        return Err(ArrayError::InvertedRange { start: lo, end: hi });
    }

    Ok(arr.as_slice()[lo..=hi].to_vec())
}
