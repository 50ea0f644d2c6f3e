//! Distribution helpers used by the p-value and confidence-interval layer.
//!
//! Thin wrappers over `statrs` that map invalid parameters (non-positive
//! or NaN degrees of freedom, out-of-range quantiles) to NaN instead of
//! erroring, since a reduction lane with too few observations must yield
//! a NaN/masked result rather than abort the whole reduction.

use statrs::distribution::{ChiSquared, ContinuousCDF, Normal, StudentsT};

/// Survival function of the Student-t distribution.
pub(crate) fn t_sf(x: f64, df: f64) -> f64 {
    if x.is_nan() {
        return f64::NAN;
    }
    StudentsT::new(0.0, 1.0, df)
        .map(|d| d.sf(x))
        .unwrap_or(f64::NAN)
}

/// Quantile (inverse CDF) of the Student-t distribution.
pub(crate) fn t_ppf(q: f64, df: f64) -> f64 {
    if q.is_nan() {
        return f64::NAN;
    }
    if q <= 0.0 {
        return f64::NEG_INFINITY;
    }
    if q >= 1.0 {
        return f64::INFINITY;
    }
    StudentsT::new(0.0, 1.0, df)
        .map(|d| d.inverse_cdf(q))
        .unwrap_or(f64::NAN)
}

/// Survival function of the chi-squared distribution.
pub(crate) fn chi2_sf(x: f64, df: f64) -> f64 {
    if x.is_nan() {
        return f64::NAN;
    }
    ChiSquared::new(df).map(|d| d.sf(x)).unwrap_or(f64::NAN)
}

/// CDF of the chi-squared distribution.
pub(crate) fn chi2_cdf(x: f64, df: f64) -> f64 {
    if x.is_nan() {
        return f64::NAN;
    }
    ChiSquared::new(df).map(|d| d.cdf(x)).unwrap_or(f64::NAN)
}

/// Survival function of the standard normal distribution.
pub(crate) fn norm_sf(x: f64) -> f64 {
    if x.is_nan() {
        return f64::NAN;
    }
    Normal::new(0.0, 1.0).map(|d| d.sf(x)).unwrap_or(f64::NAN)
}

/// Quantile (inverse CDF) of the standard normal distribution.
pub(crate) fn norm_ppf(q: f64) -> f64 {
    if q.is_nan() {
        return f64::NAN;
    }
    if q <= 0.0 {
        return f64::NEG_INFINITY;
    }
    if q >= 1.0 {
        return f64::INFINITY;
    }
    Normal::new(0.0, 1.0)
        .map(|d| d.inverse_cdf(q))
        .unwrap_or(f64::NAN)
}
