//! Equivalence harness for masked-array reductions.
//!
//! A statistic computed over a masked array (respecting the mask) must
//! equal the same statistic computed over the NaN-sentinel rendering of
//! the data with missing-value omission enabled. This module provides
//! the comparison helpers and the seeded fixture generation the test
//! suite uses to check that contract.
//!
//! Comparisons use relative tolerance with an absolute floor for values
//! near zero; NaN positions must match on both sides.
//!
//! # Example
//!
//! ```
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//! use medir::stats::{masked_mean, mean, NanPolicy};
//! use medir::verify::{assert_masked_matches, masked_fixtures, RTOL};
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let fx = &masked_fixtures(1, 7, 8, &mut rng)[0];
//! let res = masked_mean(&fx.masked, None, None).expect("no weights");
//! let reference = mean(&fx.nan, None, None, NanPolicy::Omit).expect("no weights");
//! assert_masked_matches(&res, &reference, RTOL, 0.0, "mean");
//! ```

use rand::rngs::StdRng;
use rand::Rng;

use crate::masked::MaskedArray;
use crate::primitives::Array;

/// Default relative tolerance for masked/NaN equivalence checks.
pub const RTOL: f64 = 1e-7;

/// Fraction of entries masked out by [`masked_fixtures`].
const MISSING_FRACTION: f64 = 0.25;

/// A masked array paired with its NaN-sentinel rendering of the same
/// logical data.
#[derive(Debug, Clone)]
pub struct MaskedFixture {
    /// Mask representation of the data.
    pub masked: MaskedArray,
    /// NaN-sentinel representation of the same data.
    pub nan: Array,
}

/// Generates `count` fixture pairs of shape `(rows, cols)` from an
/// explicit seeded generator. Payloads are uniform in `[0, 1)` and each
/// entry is missing with probability 0.25.
pub fn masked_fixtures(
    count: usize,
    rows: usize,
    cols: usize,
    rng: &mut StdRng,
) -> Vec<MaskedFixture> {
    (0..count)
        .map(|_| {
            let masked = MaskedArray::from_fn(rows, cols, |_, _| {
                let value: f64 = rng.gen();
                let missing = rng.gen::<f64>() < MISSING_FRACTION;
                (value, missing)
            });
            let nan = masked.to_nan_array();
            MaskedFixture { masked, nan }
        })
        .collect()
}

/// Whether two values agree within `rtol` relative tolerance with an
/// `atol` absolute floor. NaN agrees with NaN.
#[must_use]
pub fn close(actual: f64, expected: f64, rtol: f64, atol: f64) -> bool {
    if actual.is_nan() || expected.is_nan() {
        return actual.is_nan() && expected.is_nan();
    }
    if actual == expected {
        return true;
    }
    (actual - expected).abs() <= atol + rtol * expected.abs()
}

/// Asserts two arrays agree elementwise within tolerance.
///
/// # Panics
///
/// Panics with a labeled message on shape mismatch or on the first
/// element outside tolerance (NaN footprints must match).
pub fn assert_allclose(actual: &Array, expected: &Array, rtol: f64, atol: f64, label: &str) {
    assert_eq!(
        actual.shape(),
        expected.shape(),
        "{label}: shape {:?} != {:?}",
        actual.shape(),
        expected.shape()
    );
    let (rows, cols) = actual.shape();
    for i in 0..rows {
        for j in 0..cols {
            let (a, e) = (actual.get(i, j), expected.get(i, j));
            assert!(
                close(a, e, rtol, atol),
                "{label}: mismatch at ({i}, {j}): {a} != {e} (rtol={rtol}, atol={atol})"
            );
        }
    }
}

/// Asserts two boolean masks are identical.
///
/// # Panics
///
/// Panics with a labeled message on the first differing entry.
pub fn assert_mask_eq(actual: &[bool], expected: &[bool], label: &str) {
    assert_eq!(actual.len(), expected.len(), "{label}: mask length differs");
    for (idx, (a, e)) in actual.iter().zip(expected.iter()).enumerate() {
        assert_eq!(a, e, "{label}: mask mismatch at flat index {idx}");
    }
}

/// Asserts a masked reduction result matches its NaN-omission reference:
/// the output mask must equal the NaN footprint of the reference, and
/// the payload must agree within tolerance at unmasked positions.
///
/// # Panics
///
/// Panics with a labeled message on any footprint or value mismatch.
pub fn assert_masked_matches(
    actual: &MaskedArray,
    reference: &Array,
    rtol: f64,
    atol: f64,
    label: &str,
) {
    assert_eq!(
        actual.shape(),
        reference.shape(),
        "{label}: shape {:?} != {:?}",
        actual.shape(),
        reference.shape()
    );
    assert_mask_eq(actual.mask(), &reference.nan_mask(), label);
    let (rows, cols) = actual.shape();
    for i in 0..rows {
        for j in 0..cols {
            let (value, masked) = actual.get(i, j);
            if masked {
                continue;
            }
            let e = reference.get(i, j);
            assert!(
                close(value, e, rtol, atol),
                "{label}: value mismatch at ({i}, {j}): {value} != {e} (rtol={rtol}, atol={atol})"
            );
        }
    }
}
