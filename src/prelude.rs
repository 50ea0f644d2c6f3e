//! Convenience re-exports of the most commonly used items.
//!
//! ```
//! use medir::prelude::*;
//!
//! let x = Array::from_vec(1, 3, vec![1.0, 2.0, 3.0]).unwrap();
//! let m = mean(&x, None, None, NanPolicy::Omit).unwrap();
//! assert_eq!(m.get(0, 0), 2.0);
//! ```

pub use crate::constants::{convert_temperature, lambda2nu, nu2lambda, TemperatureScale};
pub use crate::error::{MedirError, Result};
pub use crate::masked::MaskedArray;
pub use crate::primitives::{Array, Axis};
pub use crate::stats::{
    chisquare, combine_pvalues, describe, gmean, gzscore, hmean, jarque_bera, kurtosis,
    kurtosistest, masked_chisquare, masked_combine_pvalues, masked_describe, masked_gmean,
    masked_gzscore, masked_hmean, masked_jarque_bera, masked_kurtosis, masked_kurtosistest,
    masked_mean, masked_moment, masked_normaltest, masked_pmean, masked_power_divergence,
    masked_sem, masked_skew, masked_skewtest, masked_ttest_1samp, masked_ttest_ind,
    masked_ttest_ind_from_stats, masked_ttest_rel, masked_variance, masked_zmap, masked_zscore,
    mean, moment, normaltest, pmean, power_divergence, sem, skew, skewtest, ttest_1samp,
    ttest_ind, ttest_ind_from_stats, ttest_rel, variance, zmap, zscore, CombineMethod, Lambda,
    NanPolicy,
};
