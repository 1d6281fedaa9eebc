//! The `Array3D` container.

use std::ops::{Index, IndexMut};

use strata_core::{ArrayError, Index3, Shape3, SignedIndex3};

/// A `D3 x D2 x D1` array of `T` held inline in one row-major buffer.
///
/// `D3` counts planes, `D2` rows per plane and `D1` elements per row.
/// Setting a dimension to 1 collapses the array: `Array3D<T, 1, 3, 5>` and
/// `Array3D<T, 3, 1, 5>` are both 3 x 5 grids, `Array3D<T, 1, 1, 5>` is a
/// plain 5-element array.
///
/// All dimensions must be positive; a zero dimension fails to compile at the
/// first constructor call.
///
/// # Examples
///
/// ```
/// use strata_array::Array3D;
///
/// let mut grid: Array3D<u32, 3, 4, 2> = Array3D::new();
/// grid.assign(7, 1, 2, 1);
/// assert_eq!(*grid.get(1, 2, 1), 7);
/// assert_eq!(grid[[1, 2, 1]], 7);
///
/// let off = Array3D::<u32, 3, 4, 2>::calc_idx_l(1, 2, 1);
/// assert_eq!(*grid.get_l(off), 7);
///
/// // Out-of-range reads fall back to a value the caller owns.
/// let fallback = 99;
/// assert_eq!(*grid.dget(&fallback, 3, 0, 0), 99);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Array3D<T, const D3: usize, const D2: usize, const D1: usize> {
    /// Nested inline arrays; contiguous and row-major by construction.
    data: [[[T; D1]; D2]; D3],
}

impl<T, const D3: usize, const D2: usize, const D1: usize> Array3D<T, D3, D2, D1> {
    /// Number of index positions (always 3).
    pub const DIM_COUNT: usize = Shape3::<D3, D2, D1>::DIM_COUNT;

    /// Dimension sizes `[D3, D2, D1]`.
    pub const DIMENSIONS: Index3 = Shape3::<D3, D2, D1>::DIMENSIONS;

    /// Stride of each index position in the linear buffer.
    pub const OFFSETS: Index3 = Shape3::<D3, D2, D1>::OFFSETS;

    /// Total number of elements.
    pub const SIZE: usize = Shape3::<D3, D2, D1>::SIZE;

    // ── Construction ────────────────────────────────────────────

    /// Create an array with every element set to `T::default()`.
    pub fn new() -> Self
    where
        T: Default,
    {
        Self::from_fn(|_| T::default())
    }

    /// Create an array with every element a clone of `value`.
    pub fn filled(value: T) -> Self
    where
        T: Clone,
    {
        Self::from_fn(|_| value.clone())
    }

    /// Create an array by calling `f` with each index triple.
    ///
    /// `f` is called in linear-offset order.
    pub fn from_fn(mut f: impl FnMut(Index3) -> T) -> Self {
        let () = Shape3::<D3, D2, D1>::VALID;
        Self {
            data: std::array::from_fn(|i3| {
                std::array::from_fn(|i2| std::array::from_fn(|i1| f([i3, i2, i1])))
            }),
        }
    }

    // ── Modifiers ───────────────────────────────────────────────

    /// Overwrite the element at `[i3, i2, i1]` with `value`.
    ///
    /// Unchecked tier: the caller guarantees the triple is in bounds.
    /// Pass `value.clone()` to keep the original.
    #[inline]
    pub fn assign(&mut self, value: T, i3: usize, i2: usize, i1: usize) {
        *self.get_mut(i3, i2, i1) = value;
    }

    /// Overwrite every element with a clone of `value`.
    pub fn fill(&mut self, value: T)
    where
        T: Clone,
    {
        self.as_mut_slice().fill(value);
    }

    // ── Element access (unchecked tier) ─────────────────────────

    /// Reference to the element at `[i3, i2, i1]`.
    ///
    /// Equivalent to `self[[i3, i2, i1]]`, for call sites where an array
    /// literal is awkward (macro arguments, closures).
    ///
    /// Unchecked tier: the triple is not validated in release builds. An
    /// out-of-range triple either reads another element or panics if its
    /// offset falls past the buffer. Debug builds assert [`in_bounds`].
    ///
    /// [`in_bounds`]: Self::in_bounds
    #[inline]
    pub fn get(&self, i3: usize, i2: usize, i1: usize) -> &T {
        debug_assert!(
            Self::in_bounds(i3, i2, i1),
            "index [{i3}, {i2}, {i1}] out of bounds for dimensions {:?}",
            Self::DIMENSIONS
        );
        &self.as_slice()[Self::calc_idx_l(i3, i2, i1)]
    }

    /// Mutable reference to the element at `[i3, i2, i1]`.
    ///
    /// Same contract as [`get`](Self::get).
    #[inline]
    pub fn get_mut(&mut self, i3: usize, i2: usize, i1: usize) -> &mut T {
        debug_assert!(
            Self::in_bounds(i3, i2, i1),
            "index [{i3}, {i2}, {i1}] out of bounds for dimensions {:?}",
            Self::DIMENSIONS
        );
        &mut self.as_mut_slice()[Self::calc_idx_l(i3, i2, i1)]
    }

    /// Reference to the element at linear offset `idx`.
    ///
    /// Panics if `idx >= SIZE`.
    #[inline]
    pub fn get_l(&self, idx: usize) -> &T {
        &self.as_slice()[idx]
    }

    /// Mutable reference to the element at linear offset `idx`.
    ///
    /// Panics if `idx >= SIZE`.
    #[inline]
    pub fn get_l_mut(&mut self, idx: usize) -> &mut T {
        &mut self.as_mut_slice()[idx]
    }

    /// The whole linear buffer, in offset order.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        self.data.as_flattened().as_flattened()
    }

    /// The whole linear buffer, mutably.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.data.as_flattened_mut().as_flattened_mut()
    }

    // ── Default-valued access ───────────────────────────────────

    /// The element at `[i3, i2, i1]` if in bounds, otherwise `default`.
    ///
    /// The result borrows from either `self` or `default`, so it can never
    /// outlive the caller's default value.
    #[inline]
    pub fn dget<'a>(&'a self, default: &'a T, i3: usize, i2: usize, i1: usize) -> &'a T {
        self.dget_at(default, [i3, i2, i1])
    }

    /// Array form of [`dget`](Self::dget).
    #[inline]
    pub fn dget_at<'a>(&'a self, default: &'a T, inds: Index3) -> &'a T {
        if Self::in_bounds_at(inds) {
            &self.as_slice()[Self::calc_idx_l_at(inds)]
        } else {
            default
        }
    }

    /// The element at linear offset `idx` if `idx < SIZE`, otherwise `default`.
    #[inline]
    pub fn dget_l<'a>(&'a self, default: &'a T, idx: usize) -> &'a T {
        self.as_slice().get(idx).unwrap_or(default)
    }

    /// Signed form of [`dget_at`](Self::dget_at). Negative components
    /// select `default`.
    #[inline]
    pub fn dget_signed<'a>(&'a self, default: &'a T, inds: SignedIndex3) -> &'a T {
        match Shape3::<D3, D2, D1>::to_unsigned(inds) {
            Some(inds) => &self.as_slice()[Self::calc_idx_l_at(inds)],
            None => default,
        }
    }

    /// Owned form of [`dget`](Self::dget): a clone of the element if in
    /// bounds, otherwise `default` itself.
    #[inline]
    pub fn dget_or(&self, default: T, i3: usize, i2: usize, i1: usize) -> T
    where
        T: Clone,
    {
        if Self::in_bounds(i3, i2, i1) {
            self.as_slice()[Self::calc_idx_l(i3, i2, i1)].clone()
        } else {
            default
        }
    }

    // ── Checked access ──────────────────────────────────────────

    /// Reference to the element at `[i3, i2, i1]`, or
    /// [`ArrayError::IndexOutOfBounds`].
    pub fn try_get(&self, i3: usize, i2: usize, i1: usize) -> Result<&T, ArrayError> {
        let idx = Self::checked_offset([i3, i2, i1])?;
        Ok(&self.as_slice()[idx])
    }

    /// Signed form of [`try_get`](Self::try_get). Negative or too-large
    /// components yield [`ArrayError::SignedIndexOutOfBounds`].
    pub fn try_get_signed(&self, inds: SignedIndex3) -> Result<&T, ArrayError> {
        match Shape3::<D3, D2, D1>::to_unsigned(inds) {
            Some(unsigned) => Ok(&self.as_slice()[Self::calc_idx_l_at(unsigned)]),
            None => Err(ArrayError::SignedIndexOutOfBounds {
                index: inds,
                dims: Self::DIMENSIONS,
            }),
        }
    }

    /// Mutable reference to the element at `[i3, i2, i1]`, or
    /// [`ArrayError::IndexOutOfBounds`].
    pub fn try_get_mut(&mut self, i3: usize, i2: usize, i1: usize) -> Result<&mut T, ArrayError> {
        let idx = Self::checked_offset([i3, i2, i1])?;
        Ok(&mut self.as_mut_slice()[idx])
    }

    /// Checked [`assign`](Self::assign). On error the array is untouched and
    /// `value` is dropped.
    pub fn try_assign(
        &mut self,
        value: T,
        i3: usize,
        i2: usize,
        i1: usize,
    ) -> Result<(), ArrayError> {
        *self.try_get_mut(i3, i2, i1)? = value;
        Ok(())
    }

    /// Reference to the element at linear offset `idx`, or
    /// [`ArrayError::LinearIndexOutOfBounds`].
    pub fn try_get_l(&self, idx: usize) -> Result<&T, ArrayError> {
        self.as_slice()
            .get(idx)
            .ok_or(ArrayError::LinearIndexOutOfBounds {
                index: idx,
                size: Self::SIZE,
            })
    }

    /// Clones of the elements between `start` and `end`, both inclusive, in
    /// linear-offset order. See [`subset_of`](crate::subset::subset_of).
    pub fn subset(&self, start: Index3, end: Index3) -> Result<Vec<T>, ArrayError>
    where
        T: Clone,
    {
        crate::subset::subset_of(self, start, end)
    }

    fn checked_offset(inds: Index3) -> Result<usize, ArrayError> {
        if Self::in_bounds_at(inds) {
            Ok(Self::calc_idx_l_at(inds))
        } else {
            Err(ArrayError::IndexOutOfBounds {
                index: inds,
                dims: Self::DIMENSIONS,
            })
        }
    }

    // ── Attributes ──────────────────────────────────────────────

    /// Total number of elements, `D3 * D2 * D1`.
    #[inline]
    pub const fn size() -> usize {
        Self::SIZE
    }

    /// Number of planes.
    #[inline]
    pub const fn dim3() -> usize {
        D3
    }

    /// Number of rows per plane.
    #[inline]
    pub const fn dim2() -> usize {
        D2
    }

    /// Number of elements per row.
    #[inline]
    pub const fn dim1() -> usize {
        D1
    }

    /// Dimension sizes `[D3, D2, D1]`.
    #[inline]
    pub const fn dimensions() -> &'static Index3 {
        &Self::DIMENSIONS
    }

    // ── Index utilities ─────────────────────────────────────────

    /// Returns `true` if every index is below its dimension.
    #[inline]
    pub const fn in_bounds(i3: usize, i2: usize, i1: usize) -> bool {
        Shape3::<D3, D2, D1>::in_bounds(i3, i2, i1)
    }

    /// Array form of [`in_bounds`](Self::in_bounds).
    #[inline]
    pub const fn in_bounds_at(inds: Index3) -> bool {
        Shape3::<D3, D2, D1>::in_bounds_at(inds)
    }

    /// Returns `true` if every index is non-negative and below its dimension.
    #[inline]
    pub const fn in_bounds_signed(i3: i32, i2: i32, i1: i32) -> bool {
        Shape3::<D3, D2, D1>::in_bounds_signed(i3, i2, i1)
    }

    /// Array form of [`in_bounds_signed`](Self::in_bounds_signed).
    #[inline]
    pub const fn in_bounds_signed_at(inds: SignedIndex3) -> bool {
        Shape3::<D3, D2, D1>::in_bounds_signed_at(inds)
    }

    /// Linear offset of `[i3, i2, i1]` in the inner buffer. Unchecked.
    #[inline]
    pub const fn calc_idx_l(i3: usize, i2: usize, i1: usize) -> usize {
        Shape3::<D3, D2, D1>::calc_idx_l(i3, i2, i1)
    }

    /// Array form of [`calc_idx_l`](Self::calc_idx_l).
    #[inline]
    pub const fn calc_idx_l_at(inds: Index3) -> usize {
        Shape3::<D3, D2, D1>::calc_idx_l_at(inds)
    }
}

impl<T: Default, const D3: usize, const D2: usize, const D1: usize> Default
    for Array3D<T, D3, D2, D1>
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const D3: usize, const D2: usize, const D1: usize> Index<Index3>
    for Array3D<T, D3, D2, D1>
{
    type Output = T;

    #[inline]
    fn index(&self, inds: Index3) -> &T {
        self.get(inds[0], inds[1], inds[2])
    }
}

impl<T, const D3: usize, const D2: usize, const D1: usize> IndexMut<Index3>
    for Array3D<T, D3, D2, D1>
{
    #[inline]
    fn index_mut(&mut self, inds: Index3) -> &mut T {
        self.get_mut(inds[0], inds[1], inds[2])
    }
}
