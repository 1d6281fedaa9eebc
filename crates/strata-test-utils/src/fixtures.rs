//! Reusable array fixtures.
//!
//! [`LinearFixture`] holds one full 3D array and the three ways of
//! collapsing a 4-element array onto a single axis, each filled with its
//! own linear offsets:
//!
//! - `full`: `3 x 4 x 2`
//! - `planes`: `4 x 1 x 1`
//! - `rows`: `1 x 4 x 1`
//! - `elements`: `1 x 1 x 4`

use strata_array::Array3D;

use crate::linear_array;

/// Linear-filled arrays covering the full and the degenerate shapes.
#[derive(Clone, Debug)]
pub struct LinearFixture {
    pub full: Array3D<usize, 3, 4, 2>,
    pub planes: Array3D<usize, 4, 1, 1>,
    pub rows: Array3D<usize, 1, 4, 1>,
    pub elements: Array3D<usize, 1, 1, 4>,
}

impl LinearFixture {
    pub fn new() -> Self {
        Self {
            full: linear_array(),
            planes: linear_array(),
            rows: linear_array(),
            elements: linear_array(),
        }
    }
}

impl Default for LinearFixture {
    fn default() -> Self {
        Self::new()
    }
}
