//! Array3D invariant assertions.
//!
//! Each helper checks one layout or access invariant for a concrete shape.
//! Reused across the shape matrix in the `array` tests.

use crate::array::Array3D;
use strata_core::Index3;

type Arr<const D3: usize, const D2: usize, const D1: usize> = Array3D<u64, D3, D2, D1>;

fn triples<const D3: usize, const D2: usize, const D1: usize>() -> Vec<Index3> {
    let mut out = Vec::with_capacity(D3 * D2 * D1);
    for i3 in 0..D3 {
        for i2 in 0..D2 {
            for i1 in 0..D1 {
                out.push([i3, i2, i1]);
            }
        }
    }
    out
}

/// Assert that `calc_idx_l` is a bijection from valid triples onto `[0, SIZE)`.
pub fn assert_offsets_bijective<const D3: usize, const D2: usize, const D1: usize>() {
    let size = Arr::<D3, D2, D1>::size();
    let mut seen = vec![false; size];
    for inds in triples::<D3, D2, D1>() {
        let off = Arr::<D3, D2, D1>::calc_idx_l_at(inds);
        assert!(off < size, "offset {off} for {inds:?} escapes size {size}");
        assert!(!seen[off], "offset {off} for {inds:?} produced twice");
        seen[off] = true;
    }
    assert!(seen.iter().all(|&s| s), "offsets do not cover [0, {size})");
}

/// Assert that a write at each triple reads back at that triple only.
pub fn assert_round_trip<const D3: usize, const D2: usize, const D1: usize>() {
    let mut arr = Arr::<D3, D2, D1>::new();
    for (n, [i3, i2, i1]) in triples::<D3, D2, D1>().into_iter().enumerate() {
        let v = 1000 + n as u64;
        arr.assign(v, i3, i2, i1);
        assert_eq!(*arr.get(i3, i2, i1), v, "round trip at {:?}", [i3, i2, i1]);
    }
    for (n, inds) in triples::<D3, D2, D1>().into_iter().enumerate() {
        assert_eq!(arr[inds], 1000 + n as u64, "slot {inds:?} overwritten");
    }
}

/// Assert that indexed and linear reads agree for every valid triple.
pub fn assert_linear_equivalence<const D3: usize, const D2: usize, const D1: usize>() {
    let arr = Arr::<D3, D2, D1>::from_fn(|[i3, i2, i1]| (i3 * 10_000 + i2 * 100 + i1) as u64);
    for inds in triples::<D3, D2, D1>() {
        let off = Arr::<D3, D2, D1>::calc_idx_l_at(inds);
        assert_eq!(arr[inds], *arr.get_l(off), "indexed != linear at {inds:?}");
        assert_eq!(arr.get(inds[0], inds[1], inds[2]), &arr[inds]);
    }
}

/// Assert the bounds predicates at the edges of the shape.
pub fn assert_bounds_boundary<const D3: usize, const D2: usize, const D1: usize>() {
    assert!(Arr::<D3, D2, D1>::in_bounds(D3 - 1, D2 - 1, D1 - 1));
    assert!(Arr::<D3, D2, D1>::in_bounds(0, 0, 0));
    assert!(!Arr::<D3, D2, D1>::in_bounds(D3, 0, 0));
    assert!(!Arr::<D3, D2, D1>::in_bounds(0, D2, 0));
    assert!(!Arr::<D3, D2, D1>::in_bounds(0, 0, D1));

    assert!(Arr::<D3, D2, D1>::in_bounds_signed(0, 0, 0));
    assert!(!Arr::<D3, D2, D1>::in_bounds_signed(-1, 0, 0));
    assert!(!Arr::<D3, D2, D1>::in_bounds_signed(0, -1, 0));
    assert!(!Arr::<D3, D2, D1>::in_bounds_signed(0, 0, -1));
    assert!(Arr::<D3, D2, D1>::in_bounds_signed(
        D3 as i32 - 1,
        D2 as i32 - 1,
        D1 as i32 - 1
    ));
    assert!(!Arr::<D3, D2, D1>::in_bounds_signed(D3 as i32, 0, 0));
}

/// Assert that `dget` and `dget_l` return the stored value in bounds and the
/// caller's default just past each edge.
pub fn assert_dget_fallback<const D3: usize, const D2: usize, const D1: usize>() {
    let arr = Arr::<D3, D2, D1>::from_fn(|inds| Arr::<D3, D2, D1>::calc_idx_l_at(inds) as u64);
    let def = u64::MAX;
    for inds in triples::<D3, D2, D1>() {
        assert_eq!(*arr.dget_at(&def, inds), arr[inds]);
    }
    assert_eq!(*arr.dget(&def, D3, 0, 0), def);
    assert_eq!(*arr.dget(&def, 0, D2, 0), def);
    assert_eq!(*arr.dget(&def, 0, 0, D1), def);
    assert_eq!(*arr.dget_l(&def, D3 * D2 * D1), def);
    assert_eq!(*arr.dget_signed(&def, [-1, 0, 0]), def);
}

/// Run every compliance check for one shape.
pub fn run_full_compliance<const D3: usize, const D2: usize, const D1: usize>() {
    assert_offsets_bijective::<D3, D2, D1>();
    assert_round_trip::<D3, D2, D1>();
    assert_linear_equivalence::<D3, D2, D1>();
    assert_bounds_boundary::<D3, D2, D1>();
    assert_dget_fallback::<D3, D2, D1>();
}
