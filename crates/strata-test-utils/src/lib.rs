//! Test utilities and fixtures for Strata development.
//!
//! Provides a multi-field [`Probe`] element, a reference offset formula that
//! is independent of [`Shape3`](strata_core::Shape3), and the
//! [`fill_linear`] helper used by the fixtures in [`fixtures`].

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use strata_array::Array3D;
use strata_core::Index3;

/// Non-primitive element type.
///
/// Its `Default` is deliberately not all-zero so that tests can tell a
/// default-initialised slot from a zeroed one, and a stored element from a
/// caller-supplied fallback.
#[derive(Clone, Debug, PartialEq)]
pub struct Probe {
    pub value: f64,
    pub tag: u32,
}

impl Probe {
    pub const DEFAULT_VALUE: f64 = 1.23;
    pub const DEFAULT_TAG: u32 = 7;

    pub fn new(value: f64, tag: u32) -> Self {
        Self { value, tag }
    }
}

impl Default for Probe {
    fn default() -> Self {
        Self {
            value: Self::DEFAULT_VALUE,
            tag: Self::DEFAULT_TAG,
        }
    }
}

/// Row-major offset of `inds` in a buffer of shape `dims`, computed from
/// first principles rather than through the crate under test.
pub fn reference_offset(dims: Index3, inds: Index3) -> usize {
    let plane = dims[1] * dims[2];
    let row = dims[2];
    inds[0] * plane + inds[1] * row + inds[2]
}

/// Assign every slot of `arr` its own [`reference_offset`].
pub fn fill_linear<const D3: usize, const D2: usize, const D1: usize>(
    arr: &mut Array3D<usize, D3, D2, D1>,
) {
    let dims = [D3, D2, D1];
    for i in 0..D3 {
        for j in 0..D2 {
            for k in 0..D1 {
                arr.assign(reference_offset(dims, [i, j, k]), i, j, k);
            }
        }
    }
}

/// A fresh array filled by [`fill_linear`].
pub fn linear_array<const D3: usize, const D2: usize, const D1: usize>(
) -> Array3D<usize, D3, D2, D1> {
    let mut arr = Array3D::new();
    fill_linear(&mut arr);
    arr
}
