//! Benchmark profiles and utilities for Strata arrays.
//!
//! Provides deterministic index workloads shared by the criterion benches:
//!
//! - [`index_sequence`]: pseudo-random in-bounds triples for a shape
//! - [`mixed_sequence`]: triples where roughly half fall outside the shape,
//!   exercising the fallback path of the default-valued accessors
//! - [`signed_sequence`]: signed triples straddling both edges of each axis

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use strata_core::{Index3, SignedIndex3};

/// Multipliers for the three axes (odd 64-bit LCG constants).
const MIX: [u64; 3] = [
    6364136223846793007,
    1442695040888963407,
    2862933555777941757,
];

fn mix(i: u64, seed: u64, axis: usize) -> u64 {
    (i ^ seed).wrapping_add(axis as u64).wrapping_mul(MIX[axis]) >> 17
}

/// `count` deterministic in-bounds triples for a shape of `dims`.
///
/// Every dimension in `dims` must be positive.
pub fn index_sequence(count: usize, dims: Index3, seed: u64) -> Vec<Index3> {
    (0..count as u64)
        .map(|i| {
            [
                (mix(i, seed, 0) % dims[0] as u64) as usize,
                (mix(i, seed, 1) % dims[1] as u64) as usize,
                (mix(i, seed, 2) % dims[2] as u64) as usize,
            ]
        })
        .collect()
}

/// `count` deterministic triples drawn from twice the extent of `dims`, so
/// each axis is out of bounds about half the time.
pub fn mixed_sequence(count: usize, dims: Index3, seed: u64) -> Vec<Index3> {
    index_sequence(count, [dims[0] * 2, dims[1] * 2, dims[2] * 2], seed)
}

/// `count` deterministic signed triples in `[-d, 2d)` per axis.
pub fn signed_sequence(count: usize, dims: Index3, seed: u64) -> Vec<SignedIndex3> {
    index_sequence(count, [dims[0] * 3, dims[1] * 3, dims[2] * 3], seed)
        .into_iter()
        .map(|[a, b, c]| {
            [
                a as i32 - dims[0] as i32,
                b as i32 - dims[1] as i32,
                c as i32 - dims[2] as i32,
            ]
        })
        .collect()
}
