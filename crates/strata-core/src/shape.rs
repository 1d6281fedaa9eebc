//! Compile-time 3D shape and row-major layout arithmetic.
//!
//! [`Shape3`] is a zero-sized type whose const parameters are the three
//! dimension sizes. Everything it exposes is an associated constant or a
//! `const fn`, so the strides, the buffer size and every offset computed from
//! literal indices are resolved at compile time.
//!
//! # Layout
//!
//! A triple `[i3, i2, i1]` maps to the linear offset
//! `i3 * (D2 * D1) + i2 * D1 + i1`. Outer positions have larger strides, and
//! a dimension of size 1 contributes nothing to the offset, so
//! `Shape3<1, 1, N>` indexed by `[0, 0, k]` is a 1D layout of length `N`.

use crate::index::{Index3, SignedIndex3, DIM_COUNT};

/// Compile-time shape of a `D3 x D2 x D1` row-major buffer.
///
/// `D3` counts planes, `D2` rows per plane and `D1` elements per row.
///
/// # Examples
///
/// ```
/// use strata_core::Shape3;
///
/// type S = Shape3<3, 4, 2>;
/// assert_eq!(S::SIZE, 24);
/// assert_eq!(S::OFFSETS, [8, 2, 1]);
/// assert_eq!(S::calc_idx_l(1, 0, 0), 8);
/// assert_eq!(S::unravel(8), [1, 0, 0]);
///
/// assert!(S::in_bounds(2, 3, 1));
/// assert!(!S::in_bounds(3, 0, 0));
/// assert!(!S::in_bounds_signed(-1, 0, 0));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Shape3<const D3: usize, const D2: usize, const D1: usize>;

impl<const D3: usize, const D2: usize, const D1: usize> Shape3<D3, D2, D1> {
    /// Number of index positions (always 3).
    pub const DIM_COUNT: usize = DIM_COUNT;

    /// Dimension sizes `[D3, D2, D1]`.
    pub const DIMENSIONS: Index3 = [D3, D2, D1];

    /// Stride of each index position: `[D2 * D1, D1, 1]`.
    pub const OFFSETS: Index3 = [D2 * D1, D1, 1];

    /// Total number of slots, `D3 * D2 * D1`.
    pub const SIZE: usize = D3 * D2 * D1;

    /// Shape validity check.
    ///
    /// Evaluating this constant fails compilation when a dimension is zero
    /// or when `D3 * D2 * D1` overflows `usize`. Containers evaluate it in
    /// every constructor.
    pub const VALID: () = {
        assert!(
            D3 > 0 && D2 > 0 && D1 > 0,
            "Shape3 dimensions must all be positive"
        );
        assert!(
            match D3.checked_mul(D2) {
                Some(plane) => plane.checked_mul(D1).is_some(),
                None => false,
            },
            "Shape3 size D3 * D2 * D1 overflows usize"
        );
    };

    /// Linear offset of `[i3, i2, i1]`.
    ///
    /// No bounds checking: an out-of-range triple yields an offset that may
    /// alias another slot or lie past [`SIZE`](Self::SIZE).
    #[inline]
    pub const fn calc_idx_l(i3: usize, i2: usize, i1: usize) -> usize {
        i3 * Self::OFFSETS[0] + i2 * Self::OFFSETS[1] + i1 * Self::OFFSETS[2]
    }

    /// Array form of [`calc_idx_l`](Self::calc_idx_l).
    #[inline]
    pub const fn calc_idx_l_at(inds: Index3) -> usize {
        Self::calc_idx_l(inds[0], inds[1], inds[2])
    }

    /// Returns `true` if every index is below its dimension.
    ///
    /// The lower bound is implicit for `usize`.
    #[inline]
    pub const fn in_bounds(i3: usize, i2: usize, i1: usize) -> bool {
        i3 < D3 && i2 < D2 && i1 < D1
    }

    /// Array form of [`in_bounds`](Self::in_bounds).
    #[inline]
    pub const fn in_bounds_at(inds: Index3) -> bool {
        Self::in_bounds(inds[0], inds[1], inds[2])
    }

    /// Returns `true` if every index is non-negative and below its dimension.
    #[inline]
    pub const fn in_bounds_signed(i3: i32, i2: i32, i1: i32) -> bool {
        (i3 >= 0 && (i3 as usize) < D3)
            && (i2 >= 0 && (i2 as usize) < D2)
            && (i1 >= 0 && (i1 as usize) < D1)
    }

    /// Array form of [`in_bounds_signed`](Self::in_bounds_signed).
    #[inline]
    pub const fn in_bounds_signed_at(inds: SignedIndex3) -> bool {
        Self::in_bounds_signed(inds[0], inds[1], inds[2])
    }

    /// Returns `true` if `idx` addresses a slot of the flat buffer.
    #[inline]
    pub const fn in_bounds_l(idx: usize) -> bool {
        idx < Self::SIZE
    }

    /// Convert a signed triple to an unsigned one.
    ///
    /// Returns `None` unless [`in_bounds_signed_at`](Self::in_bounds_signed_at)
    /// holds, so a `Some` result is always a valid triple.
    #[inline]
    pub const fn to_unsigned(inds: SignedIndex3) -> Option<Index3> {
        if Self::in_bounds_signed_at(inds) {
            Some([inds[0] as usize, inds[1] as usize, inds[2] as usize])
        } else {
            None
        }
    }

    /// Inverse of [`calc_idx_l`](Self::calc_idx_l).
    ///
    /// For `idx < SIZE` the result is the unique in-bounds triple whose
    /// offset is `idx`. Larger offsets produce a first component `>= D3`.
    #[inline]
    pub const fn unravel(idx: usize) -> Index3 {
        let () = Self::VALID;
        [
            idx / Self::OFFSETS[0],
            (idx % Self::OFFSETS[0]) / Self::OFFSETS[1],
            idx % Self::OFFSETS[1],
        ]
    }
}
