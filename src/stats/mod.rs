//! Statistical reductions under a missing-value policy.
//!
//! Every statistic in this module comes in two forms that must agree:
//!
//! - a plain-array form taking a [`NanPolicy`], where `NanPolicy::Omit`
//!   treats NaN entries as absent from the computation;
//! - a masked form (`masked_*`) taking a [`MaskedArray`], where the mask
//!   marks entries as absent.
//!
//! For the same logical data (a masked array and its NaN-sentinel
//! rendering) the two forms produce numerically identical reductions;
//! the [`verify`](crate::verify) module provides the harness the test
//! suite uses to check this.
//!
//! # Statistics
//!
//! - means: [`mean`], [`gmean`], [`hmean`], [`pmean`] (all optionally weighted)
//! - moments: [`moment`], [`variance`], [`skew`], [`kurtosis`], [`sem`]
//! - summaries: [`describe`]
//! - standardization: [`zscore`], [`gzscore`], [`zmap`]
//! - hypothesis tests: see [`hypothesis`]
//!
//! # Example
//!
//! ```
//! use medir::primitives::{Array, Axis};
//! use medir::stats::{mean, NanPolicy};
//!
//! let x = Array::from_vec(1, 4, vec![1.0, f64::NAN, 3.0, 5.0]).expect("valid shape");
//! let m = mean(&x, None, None, NanPolicy::Omit).expect("no weights");
//! assert_eq!(m.get(0, 0), 3.0);
//! ```

pub mod distributions;
pub mod hypothesis;

pub use hypothesis::{
    chisquare, combine_pvalues, jarque_bera, kurtosistest, masked_chisquare,
    masked_combine_pvalues, masked_jarque_bera, masked_kurtosistest, masked_normaltest,
    masked_power_divergence, masked_skewtest, masked_ttest_1samp, masked_ttest_ind,
    masked_ttest_ind_from_stats, masked_ttest_rel, normaltest, power_divergence, skewtest,
    ttest_1samp, ttest_ind, ttest_ind_from_stats, ttest_rel, CombineMethod, CombinedPValues,
    ConfidenceInterval, Lambda, MaskedCombinedPValues, MaskedConfidenceInterval,
    MaskedNormalityTest, MaskedPowerDivergence, MaskedTTest, NormalityTest, PowerDivergence,
    TTest,
};

use crate::error::{MedirError, Result};
use crate::masked::MaskedArray;
use crate::primitives::{Array, Axis};

/// How reductions treat NaN values in plain arrays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NanPolicy {
    /// A lane containing NaN reduces to NaN.
    Propagate,
    /// NaN entries are treated as absent from the computation.
    Omit,
}

/// Descriptive summary of the observations in each lane.
#[derive(Debug, Clone)]
pub struct Describe {
    /// Number of observations per lane.
    pub nobs: Array,
    /// Per-lane (minimum, maximum).
    pub minmax: (Array, Array),
    /// Arithmetic mean.
    pub mean: Array,
    /// Variance with the requested delta degrees of freedom.
    pub variance: Array,
    /// Biased sample skewness.
    pub skewness: Array,
    /// Biased excess kurtosis (Fisher definition).
    pub kurtosis: Array,
}

/// Masked-array counterpart of [`Describe`].
#[derive(Debug, Clone)]
pub struct MaskedDescribe {
    /// Number of unmasked observations per lane.
    pub nobs: MaskedArray,
    /// Per-lane (minimum, maximum).
    pub minmax: (MaskedArray, MaskedArray),
    /// Arithmetic mean.
    pub mean: MaskedArray,
    /// Variance with the requested delta degrees of freedom.
    pub variance: MaskedArray,
    /// Biased sample skewness.
    pub skewness: MaskedArray,
    /// Biased excess kurtosis (Fisher definition).
    pub kurtosis: MaskedArray,
}

// ============================================================================
// Lane reduction drivers
//
// Every reduction funnels through one of these. A lane with no usable
// observations reduces to NaN in the plain path and to a masked entry in
// the masked path, so the two representations stay equivalent on
// fully-missing slices.
// ============================================================================

fn plain_lane(values: &[f64], policy: NanPolicy) -> Option<Vec<f64>> {
    match policy {
        NanPolicy::Propagate => {
            if values.iter().any(|v| v.is_nan()) {
                None
            } else {
                Some(values.to_vec())
            }
        }
        NanPolicy::Omit => Some(values.iter().copied().filter(|v| !v.is_nan()).collect()),
    }
}

pub(crate) fn reduce<const K: usize>(
    x: &Array,
    axis: Option<Axis>,
    policy: NanPolicy,
    kernel: impl Fn(usize, &[f64]) -> [f64; K],
) -> [Array; K] {
    let (rows, cols) = Array::reduced_shape(x.shape(), axis);
    let mut outs = vec![vec![f64::NAN; rows * cols]; K];
    for (idx, lane) in x.lanes(axis).iter().enumerate() {
        if let Some(vals) = plain_lane(lane, policy) {
            if !vals.is_empty() {
                let res = kernel(idx, &vals);
                for k in 0..K {
                    outs[k][idx] = res[k];
                }
            }
        }
    }
    std::array::from_fn(|k| Array::from_fn(rows, cols, |i, j| outs[k][i * cols + j]))
}

pub(crate) fn reduce_masked<const K: usize>(
    x: &MaskedArray,
    axis: Option<Axis>,
    kernel: impl Fn(usize, &[f64]) -> [f64; K],
) -> [MaskedArray; K] {
    let (rows, cols) = Array::reduced_shape(x.shape(), axis);
    let mut outs = vec![vec![f64::NAN; rows * cols]; K];
    for (idx, lane) in x.lanes(axis).iter().enumerate() {
        let vals: Vec<f64> = lane.iter().filter(|(_, m)| !m).map(|(v, _)| *v).collect();
        if !vals.is_empty() {
            let res = kernel(idx, &vals);
            for k in 0..K {
                outs[k][idx] = res[k];
            }
        }
    }
    std::array::from_fn(|k| {
        MaskedArray::from_fn(rows, cols, |i, j| {
            let v = outs[k][i * cols + j];
            (v, v.is_nan())
        })
    })
}

pub(crate) fn reduce2<const K: usize>(
    x: &Array,
    y: &Array,
    axis: Option<Axis>,
    policy: NanPolicy,
    paired: bool,
    kernel: impl Fn(usize, &[f64], &[f64]) -> [f64; K],
) -> Result<[Array; K]> {
    if x.shape() != y.shape() {
        return Err(MedirError::shape_mismatch(x.shape(), y.shape()));
    }
    let (rows, cols) = Array::reduced_shape(x.shape(), axis);
    let mut outs = vec![vec![f64::NAN; rows * cols]; K];
    for (idx, (la, lb)) in x.lanes(axis).iter().zip(y.lanes(axis).iter()).enumerate() {
        let kept: Option<(Vec<f64>, Vec<f64>)> = if paired {
            match policy {
                NanPolicy::Propagate => {
                    if la.iter().chain(lb.iter()).any(|v| v.is_nan()) {
                        None
                    } else {
                        Some((la.clone(), lb.clone()))
                    }
                }
                // A paired observation is dropped when either component
                // is missing (union of missingness).
                NanPolicy::Omit => Some(
                    la.iter()
                        .zip(lb.iter())
                        .filter(|(a, b)| !a.is_nan() && !b.is_nan())
                        .map(|(&a, &b)| (a, b))
                        .unzip(),
                ),
            }
        } else {
            match (plain_lane(la, policy), plain_lane(lb, policy)) {
                (Some(a), Some(b)) => Some((a, b)),
                _ => None,
            }
        };
        if let Some((a, b)) = kept {
            if !a.is_empty() && !b.is_empty() {
                let res = kernel(idx, &a, &b);
                for k in 0..K {
                    outs[k][idx] = res[k];
                }
            }
        }
    }
    Ok(std::array::from_fn(|k| {
        Array::from_fn(rows, cols, |i, j| outs[k][i * cols + j])
    }))
}

pub(crate) fn reduce2_masked<const K: usize>(
    x: &MaskedArray,
    y: &MaskedArray,
    axis: Option<Axis>,
    paired: bool,
    kernel: impl Fn(usize, &[f64], &[f64]) -> [f64; K],
) -> Result<[MaskedArray; K]> {
    if x.shape() != y.shape() {
        return Err(MedirError::shape_mismatch(x.shape(), y.shape()));
    }
    let (rows, cols) = Array::reduced_shape(x.shape(), axis);
    let mut outs = vec![vec![f64::NAN; rows * cols]; K];
    for (idx, (la, lb)) in x.lanes(axis).iter().zip(y.lanes(axis).iter()).enumerate() {
        let (a, b): (Vec<f64>, Vec<f64>) = if paired {
            la.iter()
                .zip(lb.iter())
                .filter(|((_, ma), (_, mb))| !ma && !mb)
                .map(|(&(a, _), &(b, _))| (a, b))
                .unzip()
        } else {
            (
                la.iter().filter(|(_, m)| !m).map(|(v, _)| *v).collect(),
                lb.iter().filter(|(_, m)| !m).map(|(v, _)| *v).collect(),
            )
        };
        if !a.is_empty() && !b.is_empty() {
            let res = kernel(idx, &a, &b);
            for k in 0..K {
                outs[k][idx] = res[k];
            }
        }
    }
    Ok(std::array::from_fn(|k| {
        MaskedArray::from_fn(rows, cols, |i, j| {
            let v = outs[k][i * cols + j];
            (v, v.is_nan())
        })
    }))
}

pub(crate) fn reduced_index(axis: Option<Axis>, i: usize, j: usize) -> (usize, usize) {
    match axis {
        None => (0, 0),
        Some(Axis::Rows) => (0, j),
        Some(Axis::Columns) => (i, 0),
    }
}

// ============================================================================
// Scalar kernels (operate on the kept observations of one lane)
// ============================================================================

pub(crate) fn mean_of(v: &[f64]) -> f64 {
    v.iter().sum::<f64>() / v.len() as f64
}

fn weighted_mean_of(v: &[f64], w: &[f64]) -> f64 {
    let sw: f64 = w.iter().sum();
    v.iter().zip(w.iter()).map(|(x, wi)| x * wi).sum::<f64>() / sw
}

fn gmean_of(v: &[f64], w: Option<&[f64]>) -> f64 {
    match w {
        None => mean_of(&v.iter().map(|x| x.ln()).collect::<Vec<_>>()).exp(),
        Some(w) => {
            weighted_mean_of(&v.iter().map(|x| x.ln()).collect::<Vec<_>>(), w).exp()
        }
    }
}

fn hmean_of(v: &[f64], w: Option<&[f64]>) -> f64 {
    match w {
        None => v.len() as f64 / v.iter().map(|x| 1.0 / x).sum::<f64>(),
        Some(w) => {
            w.iter().sum::<f64>() / v.iter().zip(w.iter()).map(|(x, wi)| wi / x).sum::<f64>()
        }
    }
}

fn pmean_of(v: &[f64], p: f64, w: Option<&[f64]>) -> f64 {
    if p == 0.0 {
        return gmean_of(v, w);
    }
    let powered: Vec<f64> = v.iter().map(|x| x.powf(p)).collect();
    let m = match w {
        None => mean_of(&powered),
        Some(w) => weighted_mean_of(&powered, w),
    };
    m.powf(1.0 / p)
}

pub(crate) fn central_moment(v: &[f64], order: u32) -> f64 {
    let m = mean_of(v);
    v.iter().map(|x| (x - m).powi(order as i32)).sum::<f64>() / v.len() as f64
}

pub(crate) fn variance_of(v: &[f64], ddof: usize) -> f64 {
    let n = v.len();
    if n <= ddof {
        return f64::NAN;
    }
    let m = mean_of(v);
    v.iter().map(|x| (x - m).powi(2)).sum::<f64>() / (n - ddof) as f64
}

fn skew_of(v: &[f64], bias: bool) -> f64 {
    let n = v.len() as f64;
    let m2 = central_moment(v, 2);
    let m3 = central_moment(v, 3);
    let g1 = m3 / m2.powf(1.5);
    if bias {
        g1
    } else if v.len() < 3 {
        f64::NAN
    } else {
        (n * (n - 1.0)).sqrt() / (n - 2.0) * g1
    }
}

fn kurtosis_of(v: &[f64], bias: bool) -> f64 {
    let n = v.len() as f64;
    let m2 = central_moment(v, 2);
    let m4 = central_moment(v, 4);
    if bias {
        m4 / (m2 * m2) - 3.0
    } else if v.len() < 4 {
        f64::NAN
    } else {
        ((n * n - 1.0) * m4 / (m2 * m2) - 3.0 * (n - 1.0) * (n - 1.0)) / ((n - 2.0) * (n - 3.0))
    }
}

fn sem_of(v: &[f64], ddof: usize) -> f64 {
    (variance_of(v, ddof) / v.len() as f64).sqrt()
}

// ============================================================================
// Means
// ============================================================================

fn weighted_reduce(
    x: &Array,
    weights: Option<&Array>,
    axis: Option<Axis>,
    policy: NanPolicy,
    kernel: impl Fn(&[f64], Option<&[f64]>) -> f64,
) -> Result<Array> {
    match weights {
        None => {
            let [r] = reduce(x, axis, policy, |_, v| [kernel(v, None)]);
            Ok(r)
        }
        Some(w) => {
            let [r] = reduce2(x, w, axis, policy, true, |_, v, wv| [kernel(v, Some(wv))])?;
            Ok(r)
        }
    }
}

fn weighted_reduce_masked(
    x: &MaskedArray,
    weights: Option<&MaskedArray>,
    axis: Option<Axis>,
    kernel: impl Fn(&[f64], Option<&[f64]>) -> f64,
) -> Result<MaskedArray> {
    match weights {
        None => {
            let [r] = reduce_masked(x, axis, |_, v| [kernel(v, None)]);
            Ok(r)
        }
        Some(w) => {
            let [r] = reduce2_masked(x, w, axis, true, |_, v, wv| [kernel(v, Some(wv))])?;
            Ok(r)
        }
    }
}

/// Arithmetic mean along `axis`, optionally weighted.
///
/// A paired observation is dropped under `NanPolicy::Omit` when either
/// the value or its weight is missing.
///
/// # Errors
///
/// Returns an error if `weights` is given with a different shape than `x`.
pub fn mean(
    x: &Array,
    weights: Option<&Array>,
    axis: Option<Axis>,
    policy: NanPolicy,
) -> Result<Array> {
    weighted_reduce(x, weights, axis, policy, |v, w| match w {
        None => mean_of(v),
        Some(w) => weighted_mean_of(v, w),
    })
}

/// Masked-array counterpart of [`mean`].
///
/// # Errors
///
/// Returns an error if `weights` is given with a different shape than `x`.
pub fn masked_mean(
    x: &MaskedArray,
    weights: Option<&MaskedArray>,
    axis: Option<Axis>,
) -> Result<MaskedArray> {
    weighted_reduce_masked(x, weights, axis, |v, w| match w {
        None => mean_of(v),
        Some(w) => weighted_mean_of(v, w),
    })
}

/// Geometric mean along `axis`, optionally weighted.
///
/// # Errors
///
/// Returns an error if `weights` is given with a different shape than `x`.
pub fn gmean(
    x: &Array,
    weights: Option<&Array>,
    axis: Option<Axis>,
    policy: NanPolicy,
) -> Result<Array> {
    weighted_reduce(x, weights, axis, policy, gmean_of)
}

/// Masked-array counterpart of [`gmean`].
///
/// # Errors
///
/// Returns an error if `weights` is given with a different shape than `x`.
pub fn masked_gmean(
    x: &MaskedArray,
    weights: Option<&MaskedArray>,
    axis: Option<Axis>,
) -> Result<MaskedArray> {
    weighted_reduce_masked(x, weights, axis, gmean_of)
}

/// Harmonic mean along `axis`, optionally weighted.
///
/// # Errors
///
/// Returns an error if `weights` is given with a different shape than `x`.
pub fn hmean(
    x: &Array,
    weights: Option<&Array>,
    axis: Option<Axis>,
    policy: NanPolicy,
) -> Result<Array> {
    weighted_reduce(x, weights, axis, policy, hmean_of)
}

/// Masked-array counterpart of [`hmean`].
///
/// # Errors
///
/// Returns an error if `weights` is given with a different shape than `x`.
pub fn masked_hmean(
    x: &MaskedArray,
    weights: Option<&MaskedArray>,
    axis: Option<Axis>,
) -> Result<MaskedArray> {
    weighted_reduce_masked(x, weights, axis, hmean_of)
}

/// Power mean with exponent `p` along `axis`, optionally weighted.
///
/// `p = 1` is the arithmetic mean, `p = 0` the geometric mean and
/// `p = -1` the harmonic mean.
///
/// # Errors
///
/// Returns an error if `weights` is given with a different shape than `x`.
pub fn pmean(
    x: &Array,
    p: f64,
    weights: Option<&Array>,
    axis: Option<Axis>,
    policy: NanPolicy,
) -> Result<Array> {
    weighted_reduce(x, weights, axis, policy, |v, w| pmean_of(v, p, w))
}

/// Masked-array counterpart of [`pmean`].
///
/// # Errors
///
/// Returns an error if `weights` is given with a different shape than `x`.
pub fn masked_pmean(
    x: &MaskedArray,
    p: f64,
    weights: Option<&MaskedArray>,
    axis: Option<Axis>,
) -> Result<MaskedArray> {
    weighted_reduce_masked(x, weights, axis, |v, w| pmean_of(v, p, w))
}

// ============================================================================
// Moments
// ============================================================================

/// Central moment of the given order along `axis`.
#[must_use]
pub fn moment(x: &Array, order: u32, axis: Option<Axis>, policy: NanPolicy) -> Array {
    let [r] = reduce(x, axis, policy, |_, v| [central_moment(v, order)]);
    r
}

/// Masked-array counterpart of [`moment`].
#[must_use]
pub fn masked_moment(x: &MaskedArray, order: u32, axis: Option<Axis>) -> MaskedArray {
    let [r] = reduce_masked(x, axis, |_, v| [central_moment(v, order)]);
    r
}

/// Variance along `axis` with `ddof` delta degrees of freedom.
#[must_use]
pub fn variance(x: &Array, ddof: usize, axis: Option<Axis>, policy: NanPolicy) -> Array {
    let [r] = reduce(x, axis, policy, |_, v| [variance_of(v, ddof)]);
    r
}

/// Masked-array counterpart of [`variance`].
#[must_use]
pub fn masked_variance(x: &MaskedArray, ddof: usize, axis: Option<Axis>) -> MaskedArray {
    let [r] = reduce_masked(x, axis, |_, v| [variance_of(v, ddof)]);
    r
}

/// Sample skewness along `axis`. With `bias = false` the estimate is
/// corrected for statistical bias (requires at least 3 observations).
#[must_use]
pub fn skew(x: &Array, bias: bool, axis: Option<Axis>, policy: NanPolicy) -> Array {
    let [r] = reduce(x, axis, policy, |_, v| [skew_of(v, bias)]);
    r
}

/// Masked-array counterpart of [`skew`].
#[must_use]
pub fn masked_skew(x: &MaskedArray, bias: bool, axis: Option<Axis>) -> MaskedArray {
    let [r] = reduce_masked(x, axis, |_, v| [skew_of(v, bias)]);
    r
}

/// Excess kurtosis (Fisher definition) along `axis`. With `bias = false`
/// the estimate is corrected for statistical bias (requires at least 4
/// observations).
#[must_use]
pub fn kurtosis(x: &Array, bias: bool, axis: Option<Axis>, policy: NanPolicy) -> Array {
    let [r] = reduce(x, axis, policy, |_, v| [kurtosis_of(v, bias)]);
    r
}

/// Masked-array counterpart of [`kurtosis`].
#[must_use]
pub fn masked_kurtosis(x: &MaskedArray, bias: bool, axis: Option<Axis>) -> MaskedArray {
    let [r] = reduce_masked(x, axis, |_, v| [kurtosis_of(v, bias)]);
    r
}

/// Standard error of the mean along `axis`.
#[must_use]
pub fn sem(x: &Array, ddof: usize, axis: Option<Axis>, policy: NanPolicy) -> Array {
    let [r] = reduce(x, axis, policy, |_, v| [sem_of(v, ddof)]);
    r
}

/// Masked-array counterpart of [`sem`].
#[must_use]
pub fn masked_sem(x: &MaskedArray, ddof: usize, axis: Option<Axis>) -> MaskedArray {
    let [r] = reduce_masked(x, axis, |_, v| [sem_of(v, ddof)]);
    r
}

// ============================================================================
// Descriptive summary
// ============================================================================

fn describe_kernel(v: &[f64], ddof: usize) -> [f64; 7] {
    let min = v.iter().copied().fold(f64::INFINITY, f64::min);
    let max = v.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    [
        v.len() as f64,
        min,
        max,
        mean_of(v),
        variance_of(v, ddof),
        skew_of(v, true),
        kurtosis_of(v, true),
    ]
}

/// Descriptive statistics summary along `axis`: number of observations,
/// minimum/maximum, mean, variance, skewness and kurtosis.
#[must_use]
pub fn describe(x: &Array, ddof: usize, axis: Option<Axis>, policy: NanPolicy) -> Describe {
    let [nobs, min, max, mean, variance, skewness, kurtosis] =
        reduce(x, axis, policy, |_, v| describe_kernel(v, ddof));
    Describe {
        nobs,
        minmax: (min, max),
        mean,
        variance,
        skewness,
        kurtosis,
    }
}

/// Masked-array counterpart of [`describe`].
#[must_use]
pub fn masked_describe(x: &MaskedArray, ddof: usize, axis: Option<Axis>) -> MaskedDescribe {
    let [nobs, min, max, mean, variance, skewness, kurtosis] =
        reduce_masked(x, axis, |_, v| describe_kernel(v, ddof));
    MaskedDescribe {
        nobs,
        minmax: (min, max),
        mean,
        variance,
        skewness,
        kurtosis,
    }
}

// ============================================================================
// Standardization
// ============================================================================

fn standardize(
    x: &Array,
    mean: &Array,
    std: &Array,
    axis: Option<Axis>,
) -> Array {
    let (rows, cols) = x.shape();
    Array::from_fn(rows, cols, |i, j| {
        let (ri, rj) = reduced_index(axis, i, j);
        (x.get(i, j) - mean.get(ri, rj)) / std.get(ri, rj)
    })
}

/// Z-scores of `x` relative to its own mean and standard deviation along
/// `axis`. Missing entries stay missing in the output; under
/// `NanPolicy::Omit` the lane statistics ignore them.
#[must_use]
pub fn zscore(x: &Array, ddof: usize, axis: Option<Axis>, policy: NanPolicy) -> Array {
    let [m, s] = reduce(x, axis, policy, |_, v| {
        [mean_of(v), variance_of(v, ddof).sqrt()]
    });
    standardize(x, &m, &s, axis)
}

/// Masked-array counterpart of [`zscore`]. The output mask equals the
/// input mask.
#[must_use]
pub fn masked_zscore(x: &MaskedArray, ddof: usize, axis: Option<Axis>) -> MaskedArray {
    let [m, s] = reduce_masked(x, axis, |_, v| {
        [mean_of(v), variance_of(v, ddof).sqrt()]
    });
    let z = standardize(x.data(), m.data(), s.data(), axis);
    let (rows, cols) = z.shape();
    MaskedArray::from_fn(rows, cols, |i, j| {
        (z.get(i, j), x.get(i, j).1)
    })
}

/// Geometric z-scores: z-scores of the natural log of the data.
#[must_use]
pub fn gzscore(x: &Array, ddof: usize, axis: Option<Axis>, policy: NanPolicy) -> Array {
    zscore(&x.map(f64::ln), ddof, axis, policy)
}

/// Masked-array counterpart of [`gzscore`].
#[must_use]
pub fn masked_gzscore(x: &MaskedArray, ddof: usize, axis: Option<Axis>) -> MaskedArray {
    masked_zscore(&x.map(f64::ln), ddof, axis)
}

/// Z-scores of `scores` relative to the mean and standard deviation of
/// `compare` along `axis`.
///
/// # Errors
///
/// Returns an error if the two arrays differ in shape.
pub fn zmap(
    scores: &Array,
    compare: &Array,
    ddof: usize,
    axis: Option<Axis>,
    policy: NanPolicy,
) -> Result<Array> {
    if scores.shape() != compare.shape() {
        return Err(MedirError::shape_mismatch(scores.shape(), compare.shape()));
    }
    let [m, s] = reduce(compare, axis, policy, |_, v| {
        [mean_of(v), variance_of(v, ddof).sqrt()]
    });
    Ok(standardize(scores, &m, &s, axis))
}

/// Masked-array counterpart of [`zmap`]. The output mask equals the mask
/// of `scores`.
///
/// # Errors
///
/// Returns an error if the two arrays differ in shape.
pub fn masked_zmap(
    scores: &MaskedArray,
    compare: &MaskedArray,
    ddof: usize,
    axis: Option<Axis>,
) -> Result<MaskedArray> {
    if scores.shape() != compare.shape() {
        return Err(MedirError::shape_mismatch(scores.shape(), compare.shape()));
    }
    let [m, s] = reduce_masked(compare, axis, |_, v| {
        [mean_of(v), variance_of(v, ddof).sqrt()]
    });
    let z = standardize(scores.data(), m.data(), s.data(), axis);
    let (rows, cols) = z.shape();
    Ok(MaskedArray::from_fn(rows, cols, |i, j| {
        (z.get(i, j), scores.get(i, j).1)
    }))
}

#[cfg(test)]
#[path = "descriptive_tests.rs"]
mod tests;

#[cfg(test)]
#[path = "tests_descriptive_contract.rs"]
mod tests_descriptive_contract;
