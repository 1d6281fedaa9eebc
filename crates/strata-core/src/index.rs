//! Index triple aliases.
//!
//! Triples are ordered outermost first: `[i3, i2, i1]` addresses plane `i3`,
//! row `i2`, element `i1`.

/// Number of index positions in a triple.
pub const DIM_COUNT: usize = 3;

/// Unsigned index triple `[i3, i2, i1]`.
pub type Index3 = [usize; DIM_COUNT];

/// Signed index triple `[i3, i2, i1]`.
///
/// Produced by neighbour arithmetic such as `i - 1`, where a negative
/// component means "before the first slot". Only the signed bounds
/// predicates accept it.
pub type SignedIndex3 = [i32; DIM_COUNT];
