//! Statistical hypothesis testing.
//!
//! Implements classical hypothesis tests for comparing distributions and
//! combining evidence, each in a plain-array form (with a
//! [`NanPolicy`](super::NanPolicy)) and a masked-array form:
//!
//! - **t-tests**: one-sample, paired, independent two-sample, and
//!   independent two-sample from summary statistics
//! - **chi-square family**: power divergence with the Cressie-Read
//!   lambda families, goodness-of-fit chi-square
//! - **normality tests**: D'Agostino skewness, Anscombe-Glynn kurtosis,
//!   the D'Agostino-Pearson omnibus test and Jarque-Bera
//! - **p-value combination**: Fisher, Pearson, Mudholkar-George,
//!   Tippett and Stouffer methods
//!
//! # Example
//!
//! ```
//! use medir::primitives::Array;
//! use medir::stats::{ttest_ind, NanPolicy};
//!
//! let a = Array::from_vec(1, 5, vec![2.3, 2.5, 2.7, 2.9, 3.1]).expect("valid shape");
//! let b = Array::from_vec(1, 5, vec![3.2, 3.4, 3.6, 3.8, 4.0]).expect("valid shape");
//! let res = ttest_ind(&a, &b, true, None, NanPolicy::Omit).expect("matching shapes");
//! assert!(res.pvalue.get(0, 0) < 0.05);
//! ```

use std::f64::consts::PI;

use super::distributions::{chi2_cdf, chi2_sf, norm_ppf, norm_sf, t_ppf, t_sf};
use super::{
    central_moment, mean_of, reduce, reduce2, reduce2_masked, reduce_masked, variance_of,
    NanPolicy,
};
use crate::error::{MedirError, Result};
use crate::masked::MaskedArray;
use crate::primitives::{Array, Axis};

/// Result of a t-test, one entry per reduction lane.
#[derive(Debug, Clone)]
pub struct TTest {
    /// t-statistic
    pub statistic: Array,
    /// p-value (two-tailed)
    pub pvalue: Array,
    /// Degrees of freedom
    pub df: Array,
    estimate: Array,
    standard_error: Array,
}

/// Confidence interval bounds for the estimate underlying a t-test.
#[derive(Debug, Clone)]
pub struct ConfidenceInterval {
    /// Lower bound per lane.
    pub low: Array,
    /// Upper bound per lane.
    pub high: Array,
}

/// Masked-array counterpart of [`TTest`].
#[derive(Debug, Clone)]
pub struct MaskedTTest {
    /// t-statistic
    pub statistic: MaskedArray,
    /// p-value (two-tailed)
    pub pvalue: MaskedArray,
    /// Degrees of freedom
    pub df: MaskedArray,
    estimate: MaskedArray,
    standard_error: MaskedArray,
}

/// Masked-array counterpart of [`ConfidenceInterval`].
#[derive(Debug, Clone)]
pub struct MaskedConfidenceInterval {
    /// Lower bound per lane.
    pub low: MaskedArray,
    /// Upper bound per lane.
    pub high: MaskedArray,
}

impl TTest {
    fn from_parts([statistic, pvalue, df, estimate, standard_error]: [Array; 5]) -> Self {
        Self {
            statistic,
            pvalue,
            df,
            estimate,
            standard_error,
        }
    }

    /// Two-sided confidence interval for the estimated mean (difference).
    ///
    /// # Errors
    ///
    /// Returns an error unless `confidence` lies strictly between 0 and 1.
    pub fn confidence_interval(&self, confidence: f64) -> Result<ConfidenceInterval> {
        check_confidence(confidence)?;
        let q = 0.5 + confidence / 2.0;
        let (rows, cols) = self.statistic.shape();
        let bound = |sign: f64| {
            Array::from_fn(rows, cols, |i, j| {
                let half = t_ppf(q, self.df.get(i, j)) * self.standard_error.get(i, j);
                self.estimate.get(i, j) + sign * half
            })
        };
        Ok(ConfidenceInterval {
            low: bound(-1.0),
            high: bound(1.0),
        })
    }
}

impl MaskedTTest {
    fn from_parts(
        [statistic, pvalue, df, estimate, standard_error]: [MaskedArray; 5],
    ) -> Self {
        Self {
            statistic,
            pvalue,
            df,
            estimate,
            standard_error,
        }
    }

    /// Two-sided confidence interval for the estimated mean (difference).
    /// Output entries are masked where the statistic is masked.
    ///
    /// # Errors
    ///
    /// Returns an error unless `confidence` lies strictly between 0 and 1.
    pub fn confidence_interval(&self, confidence: f64) -> Result<MaskedConfidenceInterval> {
        check_confidence(confidence)?;
        let q = 0.5 + confidence / 2.0;
        let (rows, cols) = self.statistic.shape();
        let bound = |sign: f64| {
            MaskedArray::from_fn(rows, cols, |i, j| {
                let (_, masked) = self.statistic.get(i, j);
                let half = t_ppf(q, self.df.get(i, j).0) * self.standard_error.get(i, j).0;
                let v = self.estimate.get(i, j).0 + sign * half;
                (v, masked || v.is_nan())
            })
        };
        Ok(MaskedConfidenceInterval {
            low: bound(-1.0),
            high: bound(1.0),
        })
    }
}

fn check_confidence(confidence: f64) -> Result<()> {
    if confidence > 0.0 && confidence < 1.0 {
        Ok(())
    } else {
        Err(MedirError::InvalidParameter {
            param: "confidence".to_string(),
            value: format!("{confidence}"),
            constraint: "strictly between 0 and 1".to_string(),
        })
    }
}

// ============================================================================
// t-test kernels
// ============================================================================

fn onesample_kernel(v: &[f64], popmean: f64) -> [f64; 5] {
    let n = v.len();
    if n < 2 || popmean.is_nan() {
        return [f64::NAN; 5];
    }
    let m = mean_of(v);
    let se = (variance_of(v, 1) / n as f64).sqrt();
    let t = (m - popmean) / se;
    let df = (n - 1) as f64;
    [t, 2.0 * t_sf(t.abs(), df), df, m, se]
}

fn ind_kernel(a: &[f64], b: &[f64], equal_var: bool) -> [f64; 5] {
    let n1 = a.len();
    let n2 = b.len();
    if n1 < 2 || n2 < 2 {
        return [f64::NAN; 5];
    }
    let (m1, m2) = (mean_of(a), mean_of(b));
    let (v1, v2) = (variance_of(a, 1), variance_of(b, 1));
    let (fn1, fn2) = (n1 as f64, n2 as f64);
    let (se, df) = if equal_var {
        let df = fn1 + fn2 - 2.0;
        let svar = ((fn1 - 1.0) * v1 + (fn2 - 1.0) * v2) / df;
        ((svar * (1.0 / fn1 + 1.0 / fn2)).sqrt(), df)
    } else {
        // Welch's t-test with Welch-Satterthwaite degrees of freedom.
        let (vn1, vn2) = (v1 / fn1, v2 / fn2);
        let df = (vn1 + vn2).powi(2) / (vn1.powi(2) / (fn1 - 1.0) + vn2.powi(2) / (fn2 - 1.0));
        ((vn1 + vn2).sqrt(), df)
    };
    let t = (m1 - m2) / se;
    [t, 2.0 * t_sf(t.abs(), df), df, m1 - m2, se]
}

fn from_stats_kernel(m1: f64, s1: f64, n1: f64, m2: f64, s2: f64, n2: f64) -> [f64; 5] {
    let finite = [m1, s1, n1, m2, s2, n2].iter().all(|v| v.is_finite());
    if !finite || n1 < 2.0 || n2 < 2.0 {
        return [f64::NAN; 5];
    }
    let df = n1 + n2 - 2.0;
    let svar = ((n1 - 1.0) * s1 * s1 + (n2 - 1.0) * s2 * s2) / df;
    let se = (svar * (1.0 / n1 + 1.0 / n2)).sqrt();
    let t = (m1 - m2) / se;
    [t, 2.0 * t_sf(t.abs(), df), df, m1 - m2, se]
}

// ============================================================================
// t-tests
// ============================================================================

fn popmean_lookup(popmean: &Array, n_lanes: usize) -> Result<Vec<f64>> {
    if popmean.len() == n_lanes {
        Ok(popmean.as_slice().to_vec())
    } else if popmean.len() == 1 {
        Ok(vec![popmean.get(0, 0); n_lanes])
    } else {
        Err(MedirError::DimensionMismatch {
            expected: format!("popmean with 1 or {n_lanes} entries"),
            actual: format!("popmean with {} entries", popmean.len()),
        })
    }
}

/// One-sample t-test of the lane means against `popmean`.
///
/// `popmean` must hold one value per reduction lane (the reduced shape)
/// or a single value applied to every lane.
///
/// # Errors
///
/// Returns an error if `popmean` doesn't match the reduced shape.
pub fn ttest_1samp(
    x: &Array,
    popmean: &Array,
    axis: Option<Axis>,
    policy: NanPolicy,
) -> Result<TTest> {
    let (rows, cols) = Array::reduced_shape(x.shape(), axis);
    let pm = popmean_lookup(popmean, rows * cols)?;
    let parts = reduce(x, axis, policy, |idx, v| onesample_kernel(v, pm[idx]));
    Ok(TTest::from_parts(parts))
}

/// Masked-array counterpart of [`ttest_1samp`]. A masked `popmean` entry
/// masks the whole corresponding output lane.
///
/// # Errors
///
/// Returns an error if `popmean` doesn't match the reduced shape.
pub fn masked_ttest_1samp(
    x: &MaskedArray,
    popmean: &MaskedArray,
    axis: Option<Axis>,
) -> Result<MaskedTTest> {
    let (rows, cols) = Array::reduced_shape(x.shape(), axis);
    let pm = popmean_lookup(&popmean.to_nan_array(), rows * cols)?;
    let parts = reduce_masked(x, axis, |idx, v| onesample_kernel(v, pm[idx]));
    Ok(MaskedTTest::from_parts(parts))
}

/// Paired t-test: tests whether the mean of the paired differences is 0.
/// A pair is dropped when either component is missing.
///
/// # Errors
///
/// Returns an error if the two arrays differ in shape.
pub fn ttest_rel(
    x: &Array,
    y: &Array,
    axis: Option<Axis>,
    policy: NanPolicy,
) -> Result<TTest> {
    let parts = reduce2(x, y, axis, policy, true, |_, a, b| {
        let diffs: Vec<f64> = a.iter().zip(b.iter()).map(|(x, y)| x - y).collect();
        onesample_kernel(&diffs, 0.0)
    })?;
    Ok(TTest::from_parts(parts))
}

/// Masked-array counterpart of [`ttest_rel`].
///
/// # Errors
///
/// Returns an error if the two arrays differ in shape.
pub fn masked_ttest_rel(
    x: &MaskedArray,
    y: &MaskedArray,
    axis: Option<Axis>,
) -> Result<MaskedTTest> {
    let parts = reduce2_masked(x, y, axis, true, |_, a, b| {
        let diffs: Vec<f64> = a.iter().zip(b.iter()).map(|(x, y)| x - y).collect();
        onesample_kernel(&diffs, 0.0)
    })?;
    Ok(MaskedTTest::from_parts(parts))
}

/// Independent two-sample t-test. With `equal_var` the classic pooled
/// test, otherwise Welch's t-test. Missing values are dropped per sample
/// independently.
///
/// # Errors
///
/// Returns an error if the two arrays differ in shape.
pub fn ttest_ind(
    x: &Array,
    y: &Array,
    equal_var: bool,
    axis: Option<Axis>,
    policy: NanPolicy,
) -> Result<TTest> {
    let parts = reduce2(x, y, axis, policy, false, |_, a, b| {
        ind_kernel(a, b, equal_var)
    })?;
    Ok(TTest::from_parts(parts))
}

/// Masked-array counterpart of [`ttest_ind`].
///
/// # Errors
///
/// Returns an error if the two arrays differ in shape.
pub fn masked_ttest_ind(
    x: &MaskedArray,
    y: &MaskedArray,
    equal_var: bool,
    axis: Option<Axis>,
) -> Result<MaskedTTest> {
    let parts = reduce2_masked(x, y, axis, false, |_, a, b| ind_kernel(a, b, equal_var))?;
    Ok(MaskedTTest::from_parts(parts))
}

fn check_same_shape(shape: (usize, usize), arrays: &[&Array]) -> Result<()> {
    for a in arrays {
        if a.shape() != shape {
            return Err(MedirError::shape_mismatch(shape, a.shape()));
        }
    }
    Ok(())
}

/// Independent two-sample t-test from summary statistics, applied
/// elementwise: each position contributes (mean, standard deviation,
/// number of observations) for both groups.
///
/// # Errors
///
/// Returns an error if the six arrays differ in shape.
pub fn ttest_ind_from_stats(
    mean1: &Array,
    std1: &Array,
    nobs1: &Array,
    mean2: &Array,
    std2: &Array,
    nobs2: &Array,
) -> Result<TTest> {
    let shape = mean1.shape();
    check_same_shape(shape, &[std1, nobs1, mean2, std2, nobs2])?;
    let (rows, cols) = shape;
    let results: Vec<[f64; 5]> = (0..rows * cols)
        .map(|idx| {
            let (i, j) = (idx / cols, idx % cols);
            from_stats_kernel(
                mean1.get(i, j),
                std1.get(i, j),
                nobs1.get(i, j),
                mean2.get(i, j),
                std2.get(i, j),
                nobs2.get(i, j),
            )
        })
        .collect();
    let parts = std::array::from_fn(|k| Array::from_fn(rows, cols, |i, j| results[i * cols + j][k]));
    Ok(TTest::from_parts(parts))
}

/// Masked-array counterpart of [`ttest_ind_from_stats`]. The output is
/// masked exactly where any contributing input was masked.
///
/// # Errors
///
/// Returns an error if the six arrays differ in shape.
pub fn masked_ttest_ind_from_stats(
    mean1: &MaskedArray,
    std1: &MaskedArray,
    nobs1: &MaskedArray,
    mean2: &MaskedArray,
    std2: &MaskedArray,
    nobs2: &MaskedArray,
) -> Result<MaskedTTest> {
    let shape = mean1.shape();
    let inputs = [mean1, std1, nobs1, mean2, std2, nobs2];
    check_same_shape(shape, &[std1.data(), nobs1.data(), mean2.data(), std2.data(), nobs2.data()])?;
    let (rows, cols) = shape;
    let results: Vec<([f64; 5], bool)> = (0..rows * cols)
        .map(|idx| {
            let (i, j) = (idx / cols, idx % cols);
            let masked = inputs.iter().any(|a| a.get(i, j).1);
            if masked {
                ([f64::NAN; 5], true)
            } else {
                (
                    from_stats_kernel(
                        mean1.get(i, j).0,
                        std1.get(i, j).0,
                        nobs1.get(i, j).0,
                        mean2.get(i, j).0,
                        std2.get(i, j).0,
                        nobs2.get(i, j).0,
                    ),
                    false,
                )
            }
        })
        .collect();
    let parts = std::array::from_fn(|k| {
        MaskedArray::from_fn(rows, cols, |i, j| {
            let (vals, masked) = &results[i * cols + j];
            (vals[k], *masked)
        })
    });
    Ok(MaskedTTest::from_parts(parts))
}

// ============================================================================
// Chi-square family
// ============================================================================

/// Cressie-Read power divergence families.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Lambda {
    /// Pearson chi-square (lambda = 1)
    Pearson,
    /// Log-likelihood ratio / G-test (lambda = 0)
    LogLikelihood,
    /// Freeman-Tukey (lambda = -1/2)
    FreemanTukey,
    /// Modified log-likelihood (lambda = -1)
    ModLogLikelihood,
    /// Neyman (lambda = -2)
    Neyman,
    /// Arbitrary exponent
    CressieRead(f64),
}

impl Lambda {
    /// The exponent of the power divergence statistic.
    #[must_use]
    pub fn exponent(self) -> f64 {
        match self {
            Lambda::Pearson => 1.0,
            Lambda::LogLikelihood => 0.0,
            Lambda::FreemanTukey => -0.5,
            Lambda::ModLogLikelihood => -1.0,
            Lambda::Neyman => -2.0,
            Lambda::CressieRead(l) => l,
        }
    }
}

/// Result of a power divergence (chi-square family) test.
#[derive(Debug, Clone)]
pub struct PowerDivergence {
    /// Test statistic per lane.
    pub statistic: Array,
    /// p-value per lane.
    pub pvalue: Array,
}

/// Masked-array counterpart of [`PowerDivergence`].
#[derive(Debug, Clone)]
pub struct MaskedPowerDivergence {
    /// Test statistic per lane.
    pub statistic: MaskedArray,
    /// p-value per lane.
    pub pvalue: MaskedArray,
}

fn power_divergence_kernel(obs: &[f64], exp: Option<&[f64]>, lambda: f64, ddof: usize) -> [f64; 2] {
    // Observed and expected totals must agree for the statistic to follow
    // a chi-squared distribution; a mismatched lane yields NaN.
    if let Some(e) = exp {
        let so: f64 = obs.iter().sum();
        let se: f64 = e.iter().sum();
        let denom = so.abs().max(se.abs());
        if denom > 0.0 && ((so - se) / denom).abs() > 1e-8 {
            return [f64::NAN; 2];
        }
    }
    let uniform = mean_of(obs);
    let term = |o: f64, e: f64| -> f64 {
        if lambda == 1.0 {
            (o - e).powi(2) / e
        } else if lambda == 0.0 {
            if o == 0.0 {
                0.0
            } else {
                2.0 * o * (o / e).ln()
            }
        } else if lambda == -1.0 {
            2.0 * e * (e / o).ln()
        } else {
            2.0 / (lambda * (lambda + 1.0)) * o * ((o / e).powf(lambda) - 1.0)
        }
    };
    let stat: f64 = match exp {
        Some(e) => obs.iter().zip(e.iter()).map(|(&o, &e)| term(o, e)).sum(),
        None => obs.iter().map(|&o| term(o, uniform)).sum(),
    };
    let df = obs.len() as f64 - 1.0 - ddof as f64;
    let p = if df > 0.0 { chi2_sf(stat, df) } else { f64::NAN };
    [stat, p]
}

/// Power divergence test of observed frequencies against expected ones
/// (uniform when `f_exp` is `None`). A paired observation is dropped
/// when either side is missing.
///
/// # Errors
///
/// Returns an error if `f_exp` is given with a different shape than `f_obs`.
pub fn power_divergence(
    f_obs: &Array,
    f_exp: Option<&Array>,
    lambda_: Lambda,
    ddof: usize,
    axis: Option<Axis>,
    policy: NanPolicy,
) -> Result<PowerDivergence> {
    let l = lambda_.exponent();
    let [statistic, pvalue] = match f_exp {
        None => reduce(f_obs, axis, policy, |_, o| {
            power_divergence_kernel(o, None, l, ddof)
        }),
        Some(e) => reduce2(f_obs, e, axis, policy, true, |_, o, e| {
            power_divergence_kernel(o, Some(e), l, ddof)
        })?,
    };
    Ok(PowerDivergence { statistic, pvalue })
}

/// Masked-array counterpart of [`power_divergence`].
///
/// # Errors
///
/// Returns an error if `f_exp` is given with a different shape than `f_obs`.
pub fn masked_power_divergence(
    f_obs: &MaskedArray,
    f_exp: Option<&MaskedArray>,
    lambda_: Lambda,
    ddof: usize,
    axis: Option<Axis>,
) -> Result<MaskedPowerDivergence> {
    let l = lambda_.exponent();
    let [statistic, pvalue] = match f_exp {
        None => reduce_masked(f_obs, axis, |_, o| power_divergence_kernel(o, None, l, ddof)),
        Some(e) => reduce2_masked(f_obs, e, axis, true, |_, o, e| {
            power_divergence_kernel(o, Some(e), l, ddof)
        })?,
    };
    Ok(MaskedPowerDivergence { statistic, pvalue })
}

/// Pearson chi-square goodness-of-fit test (power divergence with
/// lambda = 1).
///
/// # Errors
///
/// Returns an error if `f_exp` is given with a different shape than `f_obs`.
pub fn chisquare(
    f_obs: &Array,
    f_exp: Option<&Array>,
    ddof: usize,
    axis: Option<Axis>,
    policy: NanPolicy,
) -> Result<PowerDivergence> {
    power_divergence(f_obs, f_exp, Lambda::Pearson, ddof, axis, policy)
}

/// Masked-array counterpart of [`chisquare`].
///
/// # Errors
///
/// Returns an error if `f_exp` is given with a different shape than `f_obs`.
pub fn masked_chisquare(
    f_obs: &MaskedArray,
    f_exp: Option<&MaskedArray>,
    ddof: usize,
    axis: Option<Axis>,
) -> Result<MaskedPowerDivergence> {
    masked_power_divergence(f_obs, f_exp, Lambda::Pearson, ddof, axis)
}

// ============================================================================
// Normality tests
// ============================================================================

/// Result of a normality test, one entry per reduction lane.
#[derive(Debug, Clone)]
pub struct NormalityTest {
    /// Test statistic per lane.
    pub statistic: Array,
    /// p-value per lane.
    pub pvalue: Array,
}

/// Masked-array counterpart of [`NormalityTest`].
#[derive(Debug, Clone)]
pub struct MaskedNormalityTest {
    /// Test statistic per lane.
    pub statistic: MaskedArray,
    /// p-value per lane.
    pub pvalue: MaskedArray,
}

// D'Agostino (1970). Needs at least 8 observations; shorter lanes yield
// NaN like any other degenerate lane.
fn skewtest_kernel(v: &[f64]) -> [f64; 2] {
    let n = v.len();
    if n < 8 {
        return [f64::NAN; 2];
    }
    let nf = n as f64;
    let m2 = central_moment(v, 2);
    let m3 = central_moment(v, 3);
    let b1 = m3 / m2.powf(1.5);
    let mut y = b1 * (((nf + 1.0) * (nf + 3.0)) / (6.0 * (nf - 2.0))).sqrt();
    let beta2 = 3.0 * (nf * nf + 27.0 * nf - 70.0) * (nf + 1.0) * (nf + 3.0)
        / ((nf - 2.0) * (nf + 5.0) * (nf + 7.0) * (nf + 9.0));
    let w2 = -1.0 + (2.0 * (beta2 - 1.0)).sqrt();
    let delta = 1.0 / (0.5 * w2.ln()).sqrt();
    let alpha = (2.0 / (w2 - 1.0)).sqrt();
    if y == 0.0 {
        y = 1.0;
    }
    let z = delta * (y / alpha + ((y / alpha).powi(2) + 1.0).sqrt()).ln();
    [z, 2.0 * norm_sf(z.abs())]
}

// Anscombe & Glynn (1983). Needs at least 5 observations.
fn kurtosistest_kernel(v: &[f64]) -> [f64; 2] {
    let n = v.len();
    if n < 5 {
        return [f64::NAN; 2];
    }
    let nf = n as f64;
    let m2 = central_moment(v, 2);
    let m4 = central_moment(v, 4);
    let b2 = m4 / (m2 * m2);
    let e = 3.0 * (nf - 1.0) / (nf + 1.0);
    let var_b2 = 24.0 * nf * (nf - 2.0) * (nf - 3.0)
        / ((nf + 1.0) * (nf + 1.0) * (nf + 3.0) * (nf + 5.0));
    let x = (b2 - e) / var_b2.sqrt();
    let sqrt_beta1 = 6.0 * (nf * nf - 5.0 * nf + 2.0) / ((nf + 7.0) * (nf + 9.0))
        * (6.0 * (nf + 3.0) * (nf + 5.0) / (nf * (nf - 2.0) * (nf - 3.0))).sqrt();
    let a = 6.0
        + 8.0 / sqrt_beta1
            * (2.0 / sqrt_beta1 + (1.0 + 4.0 / (sqrt_beta1 * sqrt_beta1)).sqrt());
    let term1 = 1.0 - 2.0 / (9.0 * a);
    let denom = 1.0 + x * (2.0 / (a - 4.0)).sqrt();
    if denom == 0.0 {
        return [f64::NAN; 2];
    }
    let term2 = denom.signum() * ((1.0 - 2.0 / a) / denom.abs()).cbrt();
    let z = (term1 - term2) / (2.0 / (9.0 * a)).sqrt();
    [z, 2.0 * norm_sf(z.abs())]
}

fn normaltest_kernel(v: &[f64]) -> [f64; 2] {
    let [zs, _] = skewtest_kernel(v);
    let [zk, _] = kurtosistest_kernel(v);
    let k2 = zs * zs + zk * zk;
    [k2, chi2_sf(k2, 2.0)]
}

fn jarque_bera_kernel(v: &[f64]) -> [f64; 2] {
    let n = v.len();
    if n < 2 {
        return [f64::NAN; 2];
    }
    let m2 = central_moment(v, 2);
    let g1 = central_moment(v, 3) / m2.powf(1.5);
    let g2 = central_moment(v, 4) / (m2 * m2) - 3.0;
    let stat = n as f64 / 6.0 * (g1 * g1 + g2 * g2 / 4.0);
    [stat, chi2_sf(stat, 2.0)]
}

/// D'Agostino's skewness test: whether the lane skewness is consistent
/// with a normal population. Lanes with fewer than 8 observations yield
/// NaN.
#[must_use]
pub fn skewtest(x: &Array, axis: Option<Axis>, policy: NanPolicy) -> NormalityTest {
    let [statistic, pvalue] = reduce(x, axis, policy, |_, v| skewtest_kernel(v));
    NormalityTest { statistic, pvalue }
}

/// Masked-array counterpart of [`skewtest`].
#[must_use]
pub fn masked_skewtest(x: &MaskedArray, axis: Option<Axis>) -> MaskedNormalityTest {
    let [statistic, pvalue] = reduce_masked(x, axis, |_, v| skewtest_kernel(v));
    MaskedNormalityTest { statistic, pvalue }
}

/// Anscombe-Glynn kurtosis test: whether the lane kurtosis is consistent
/// with a normal population. Lanes with fewer than 5 observations yield
/// NaN.
#[must_use]
pub fn kurtosistest(x: &Array, axis: Option<Axis>, policy: NanPolicy) -> NormalityTest {
    let [statistic, pvalue] = reduce(x, axis, policy, |_, v| kurtosistest_kernel(v));
    NormalityTest { statistic, pvalue }
}

/// Masked-array counterpart of [`kurtosistest`].
#[must_use]
pub fn masked_kurtosistest(x: &MaskedArray, axis: Option<Axis>) -> MaskedNormalityTest {
    let [statistic, pvalue] = reduce_masked(x, axis, |_, v| kurtosistest_kernel(v));
    MaskedNormalityTest { statistic, pvalue }
}

/// D'Agostino-Pearson omnibus normality test: combines [`skewtest`] and
/// [`kurtosistest`] into a chi-squared statistic with 2 degrees of
/// freedom.
#[must_use]
pub fn normaltest(x: &Array, axis: Option<Axis>, policy: NanPolicy) -> NormalityTest {
    let [statistic, pvalue] = reduce(x, axis, policy, |_, v| normaltest_kernel(v));
    NormalityTest { statistic, pvalue }
}

/// Masked-array counterpart of [`normaltest`].
#[must_use]
pub fn masked_normaltest(x: &MaskedArray, axis: Option<Axis>) -> MaskedNormalityTest {
    let [statistic, pvalue] = reduce_masked(x, axis, |_, v| normaltest_kernel(v));
    MaskedNormalityTest { statistic, pvalue }
}

/// Jarque-Bera normality test from the lane skewness and kurtosis,
/// referred to a chi-squared distribution with 2 degrees of freedom.
#[must_use]
pub fn jarque_bera(x: &Array, axis: Option<Axis>, policy: NanPolicy) -> NormalityTest {
    let [statistic, pvalue] = reduce(x, axis, policy, |_, v| jarque_bera_kernel(v));
    NormalityTest { statistic, pvalue }
}

/// Masked-array counterpart of [`jarque_bera`].
#[must_use]
pub fn masked_jarque_bera(x: &MaskedArray, axis: Option<Axis>) -> MaskedNormalityTest {
    let [statistic, pvalue] = reduce_masked(x, axis, |_, v| jarque_bera_kernel(v));
    MaskedNormalityTest { statistic, pvalue }
}

// ============================================================================
// p-value combination
// ============================================================================

/// Methods for combining p-values from independent tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CombineMethod {
    /// Fisher's method (sum of logs)
    Fisher,
    /// Pearson's method
    Pearson,
    /// Mudholkar and George's logit method
    MudholkarGeorge,
    /// Tippett's method (minimum p-value)
    Tippett,
    /// Stouffer's Z-score method (supports weights)
    Stouffer,
}

/// Result of combining p-values.
#[derive(Debug, Clone)]
pub struct CombinedPValues {
    /// Combined statistic per lane.
    pub statistic: Array,
    /// Combined p-value per lane.
    pub pvalue: Array,
}

/// Masked-array counterpart of [`CombinedPValues`].
#[derive(Debug, Clone)]
pub struct MaskedCombinedPValues {
    /// Combined statistic per lane.
    pub statistic: MaskedArray,
    /// Combined p-value per lane.
    pub pvalue: MaskedArray,
}

fn combine_kernel(p: &[f64], w: Option<&[f64]>, method: CombineMethod) -> [f64; 2] {
    let n = p.len() as f64;
    match method {
        CombineMethod::Fisher => {
            let stat = -2.0 * p.iter().map(|x| x.ln()).sum::<f64>();
            [stat, chi2_sf(stat, 2.0 * n)]
        }
        CombineMethod::Pearson => {
            let stat = 2.0 * p.iter().map(|x| (-x).ln_1p()).sum::<f64>();
            [stat, chi2_cdf(-stat, 2.0 * n)]
        }
        CombineMethod::MudholkarGeorge => {
            let stat = p.iter().map(|x| (-x).ln_1p() - x.ln()).sum::<f64>();
            let nu = 5.0 * n + 4.0;
            let normalizing = (3.0 / n).sqrt() / PI;
            let approx = (nu / (nu - 2.0)).sqrt();
            [stat, t_sf(stat * normalizing * approx, nu)]
        }
        CombineMethod::Tippett => {
            let stat = p.iter().copied().fold(f64::INFINITY, f64::min);
            // Survival function of Beta(1, n): P(min p <= stat).
            [stat, 1.0 - (1.0 - stat).powf(n)]
        }
        CombineMethod::Stouffer => {
            let z: Vec<f64> = p.iter().map(|&x| -norm_ppf(x)).collect();
            let stat = match w {
                None => z.iter().sum::<f64>() / n.sqrt(),
                Some(w) => {
                    let num: f64 = w.iter().zip(z.iter()).map(|(wi, zi)| wi * zi).sum();
                    num / w.iter().map(|wi| wi * wi).sum::<f64>().sqrt()
                }
            };
            [stat, norm_sf(stat)]
        }
    }
}

/// Combines the p-values in each lane into a single test.
///
/// `weights` is only meaningful for `CombineMethod::Stouffer`; a weight
/// and its p-value form a paired observation, dropped when either is
/// missing.
///
/// # Errors
///
/// Returns an error if `weights` is given for a method other than
/// Stouffer, or with a different shape than `pvalues`.
pub fn combine_pvalues(
    pvalues: &Array,
    method: CombineMethod,
    weights: Option<&Array>,
    axis: Option<Axis>,
    policy: NanPolicy,
) -> Result<CombinedPValues> {
    check_combine_weights(method, weights.is_some())?;
    let [statistic, pvalue] = match weights {
        None => reduce(pvalues, axis, policy, |_, p| combine_kernel(p, None, method)),
        Some(w) => reduce2(pvalues, w, axis, policy, true, |_, p, w| {
            combine_kernel(p, Some(w), method)
        })?,
    };
    Ok(CombinedPValues { statistic, pvalue })
}

/// Masked-array counterpart of [`combine_pvalues`].
///
/// # Errors
///
/// Returns an error if `weights` is given for a method other than
/// Stouffer, or with a different shape than `pvalues`.
pub fn masked_combine_pvalues(
    pvalues: &MaskedArray,
    method: CombineMethod,
    weights: Option<&MaskedArray>,
    axis: Option<Axis>,
) -> Result<MaskedCombinedPValues> {
    check_combine_weights(method, weights.is_some())?;
    let [statistic, pvalue] = match weights {
        None => reduce_masked(pvalues, axis, |_, p| combine_kernel(p, None, method)),
        Some(w) => reduce2_masked(pvalues, w, axis, true, |_, p, w| {
            combine_kernel(p, Some(w), method)
        })?,
    };
    Ok(MaskedCombinedPValues { statistic, pvalue })
}

fn check_combine_weights(method: CombineMethod, has_weights: bool) -> Result<()> {
    if has_weights && method != CombineMethod::Stouffer {
        return Err(MedirError::InvalidParameter {
            param: "weights".to_string(),
            value: format!("given with method {method:?}"),
            constraint: "weights require CombineMethod::Stouffer".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
#[path = "hypothesis_tests.rs"]
mod tests;

#[cfg(test)]
#[path = "tests_hypothesis_contract.rs"]
mod tests_hypothesis_contract;
