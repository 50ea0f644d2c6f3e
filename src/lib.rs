//! Medir: masked-array statistics with missing-data equivalence guarantees.
//!
//! Medir provides 2D array reductions over two interchangeable
//! representations of missing data: a [`MaskedArray`](masked::MaskedArray)
//! carrying an explicit boolean mask, and a plain
//! [`Array`](primitives::Array) using NaN sentinels with an omission
//! policy. Every statistic comes in both forms, and the library
//! guarantees they agree: same values within floating-point tolerance,
//! same missingness footprint.
//!
//! # Quick Start
//!
//! ```
//! use medir::prelude::*;
//!
//! // Same logical data, two representations of "missing".
//! let data = Array::from_vec(1, 4, vec![1.0, 2.0, 3.0, 4.0]).unwrap();
//! let masked = MaskedArray::new(data, vec![false, true, false, false]).unwrap();
//! let with_nan = masked.to_nan_array();
//!
//! let a = masked_mean(&masked, None, None).unwrap();
//! let b = mean(&with_nan, None, None, NanPolicy::Omit).unwrap();
//! assert_eq!(a.data().get(0, 0), b.get(0, 0));
//! ```
//!
//! # Modules
//!
//! - [`primitives`]: the core 2D [`Array`](primitives::Array) and reduction axes
//! - [`masked`]: masked arrays and mask-aware arithmetic
//! - [`stats`]: means, moments, z-scores and hypothesis tests in paired forms
//! - [`constants`]: physical constants and unit conversions
//! - [`verify`]: the equivalence harness used by the test suite
//! - [`error`]: the common error type

pub mod constants;
pub mod error;
pub mod masked;
pub mod prelude;
pub mod primitives;
pub mod stats;
pub mod verify;
