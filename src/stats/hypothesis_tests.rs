use super::*;

fn arr(vals: &[f64]) -> Array {
    Array::from_vec(1, vals.len(), vals.to_vec()).expect("valid shape")
}

#[test]
fn test_ttest_1samp_at_sample_mean() {
    let x = arr(&[1.0, 2.0, 3.0, 4.0, 5.0]);
    let res = ttest_1samp(&x, &Array::scalar(3.0), None, NanPolicy::Omit).expect("valid popmean");
    assert!(res.statistic.get(0, 0).abs() < 1e-12);
    assert!((res.pvalue.get(0, 0) - 1.0).abs() < 1e-12);
    assert_eq!(res.df.get(0, 0), 4.0);
}

#[test]
fn test_ttest_1samp_known_statistic() {
    let x = arr(&[1.0, 2.0, 3.0, 4.0, 5.0]);
    let res = ttest_1samp(&x, &Array::scalar(0.0), None, NanPolicy::Omit).expect("valid popmean");
    // t = 3 / sqrt(2.5 / 5)
    let expected = 3.0 / (2.5f64 / 5.0).sqrt();
    assert!((res.statistic.get(0, 0) - expected).abs() < 1e-10);
    let p = res.pvalue.get(0, 0);
    assert!(p > 0.0 && p < 0.05);
}

#[test]
fn test_ttest_1samp_confidence_interval_brackets_mean() {
    let x = arr(&[1.0, 2.0, 3.0, 4.0, 5.0]);
    let res = ttest_1samp(&x, &Array::scalar(0.0), None, NanPolicy::Omit).expect("valid popmean");
    let ci = res.confidence_interval(0.95).expect("valid confidence");
    let se = (2.5f64 / 5.0).sqrt();
    // t_{0.975, 4} = 2.776445105198...
    let half = 2.776_445_105_198 * se;
    assert!((ci.low.get(0, 0) - (3.0 - half)).abs() < 1e-3);
    assert!((ci.high.get(0, 0) - (3.0 + half)).abs() < 1e-3);
    assert!(ci.low.get(0, 0) < 3.0 && 3.0 < ci.high.get(0, 0));
}

#[test]
fn test_confidence_interval_rejects_bad_level() {
    let x = arr(&[1.0, 2.0, 3.0]);
    let res = ttest_1samp(&x, &Array::scalar(0.0), None, NanPolicy::Omit).expect("valid popmean");
    assert!(res.confidence_interval(0.0).is_err());
    assert!(res.confidence_interval(1.5).is_err());
}

#[test]
fn test_ttest_1samp_popmean_shape_mismatch() {
    let x = Array::zeros(2, 3);
    let pm = Array::zeros(1, 2);
    assert!(ttest_1samp(&x, &pm, Some(Axis::Rows), NanPolicy::Omit).is_err());
}

#[test]
fn test_ttest_rel_known_statistic() {
    let a = arr(&[1.0, 2.0, 3.0, 4.0, 5.0]);
    let b = arr(&[1.5, 2.5, 2.5, 4.5, 5.5]);
    let res = ttest_rel(&a, &b, None, NanPolicy::Omit).expect("matching shapes");
    assert!((res.statistic.get(0, 0) - (-1.5)).abs() < 1e-10);
    assert_eq!(res.df.get(0, 0), 4.0);
}

#[test]
fn test_ttest_rel_drops_pairs_with_missing_component() {
    let a = arr(&[1.0, f64::NAN, 3.0, 4.0, 5.0]);
    let b = arr(&[1.5, 2.5, f64::NAN, 4.5, 5.5]);
    let res = ttest_rel(&a, &b, None, NanPolicy::Omit).expect("matching shapes");
    // Only 3 complete pairs remain.
    assert_eq!(res.df.get(0, 0), 2.0);
}

#[test]
fn test_ttest_ind_identical_means() {
    let a = arr(&[2.0, 4.0, 6.0]);
    let b = arr(&[1.0, 3.0, 5.0, 7.0]);
    // Different shapes are rejected; pad comparison within one shape.
    assert!(ttest_ind(&a, &b, true, None, NanPolicy::Omit).is_err());

    let a = arr(&[2.0, 4.0, 6.0, f64::NAN]);
    let res = ttest_ind(&a, &b, true, None, NanPolicy::Omit).expect("matching shapes");
    // Means are both 4; omission is per-sample, not paired.
    assert!(res.statistic.get(0, 0).abs() < 1e-12);
    assert!((res.pvalue.get(0, 0) - 1.0).abs() < 1e-12);
    assert_eq!(res.df.get(0, 0), 5.0);
}

#[test]
fn test_ttest_ind_welch_df_between_bounds() {
    let a = arr(&[1.0, 2.0, 3.0, 4.0]);
    let b = arr(&[10.0, 20.0, 30.0, 40.0]);
    let res = ttest_ind(&a, &b, false, None, NanPolicy::Omit).expect("matching shapes");
    let df = res.df.get(0, 0);
    assert!(df >= 3.0 && df <= 6.0, "Welch df {df} outside [min(n)-1, n1+n2-2]");
    assert!(res.statistic.get(0, 0) < 0.0);
}

#[test]
fn test_ttest_ind_from_stats_known_value() {
    let res = ttest_ind_from_stats(
        &Array::scalar(10.0),
        &Array::scalar(2.0),
        &Array::scalar(30.0),
        &Array::scalar(12.0),
        &Array::scalar(2.0),
        &Array::scalar(30.0),
    )
    .expect("matching shapes");
    // se = sqrt(4 * (2/30)); t = -2 / se
    let expected = -2.0 / (4.0_f64 * (2.0 / 30.0)).sqrt();
    assert!((res.statistic.get(0, 0) - expected).abs() < 1e-10);
    assert_eq!(res.df.get(0, 0), 58.0);
    assert!(res.pvalue.get(0, 0) < 0.001);
}

#[test]
fn test_ttest_ind_from_stats_small_nobs_is_nan() {
    let res = ttest_ind_from_stats(
        &Array::scalar(10.0),
        &Array::scalar(2.0),
        &Array::scalar(1.0),
        &Array::scalar(12.0),
        &Array::scalar(2.0),
        &Array::scalar(30.0),
    )
    .expect("matching shapes");
    assert!(res.statistic.get(0, 0).is_nan());
}

#[test]
fn test_masked_ttest_ind_from_stats_mask_union() {
    let scalar = |v: f64, masked: bool| {
        crate::masked::MaskedArray::new(Array::scalar(v), vec![masked]).expect("mask")
    };
    let res = masked_ttest_ind_from_stats(
        &scalar(10.0, false),
        &scalar(2.0, false),
        &scalar(30.0, true),
        &scalar(12.0, false),
        &scalar(2.0, false),
        &scalar(30.0, false),
    )
    .expect("matching shapes");
    assert!(res.statistic.mask()[0], "any masked input must mask the output");
    assert!(res.pvalue.mask()[0]);
}

#[test]
fn test_chisquare_uniform_observed() {
    let obs = arr(&[10.0, 10.0, 10.0]);
    let res = chisquare(&obs, None, 0, None, NanPolicy::Omit).expect("no expected");
    assert!(res.statistic.get(0, 0).abs() < 1e-12);
    assert!((res.pvalue.get(0, 0) - 1.0).abs() < 1e-12);
}

#[test]
fn test_chisquare_known_value() {
    let obs = arr(&[16.0, 18.0, 16.0, 14.0, 12.0, 12.0]);
    let exp = arr(&[16.0, 16.0, 16.0, 16.0, 16.0, 8.0]);
    let res = chisquare(&obs, Some(&exp), 0, None, NanPolicy::Omit).expect("matching shapes");
    assert!((res.statistic.get(0, 0) - 3.5).abs() < 1e-12);
    assert!((res.pvalue.get(0, 0) - 0.623_387_6).abs() < 1e-5);
}

#[test]
fn test_power_divergence_families_agree_on_exact_fit() {
    let obs = arr(&[8.0, 8.0, 8.0, 8.0]);
    for lambda_ in [
        Lambda::Pearson,
        Lambda::LogLikelihood,
        Lambda::FreemanTukey,
        Lambda::ModLogLikelihood,
        Lambda::Neyman,
        Lambda::CressieRead(2.0 / 3.0),
    ] {
        let res =
            power_divergence(&obs, None, lambda_, 0, None, NanPolicy::Omit).expect("no expected");
        assert!(
            res.statistic.get(0, 0).abs() < 1e-12,
            "exact fit must give statistic 0 for {lambda_:?}"
        );
    }
}

#[test]
fn test_power_divergence_ddof_reduces_df() {
    let obs = arr(&[16.0, 18.0, 16.0, 14.0, 12.0, 12.0]);
    let p0 = power_divergence(&obs, None, Lambda::Pearson, 0, None, NanPolicy::Omit)
        .expect("no expected");
    let p1 = power_divergence(&obs, None, Lambda::Pearson, 1, None, NanPolicy::Omit)
        .expect("no expected");
    // Same statistic, fewer degrees of freedom, so a smaller p-value.
    assert!((p0.statistic.get(0, 0) - p1.statistic.get(0, 0)).abs() < 1e-12);
    assert!(p1.pvalue.get(0, 0) < p0.pvalue.get(0, 0));
}

#[test]
fn test_power_divergence_sum_mismatch_is_nan() {
    let obs = arr(&[10.0, 10.0]);
    let exp = arr(&[1.0, 1.0]);
    let res =
        power_divergence(&obs, Some(&exp), Lambda::Pearson, 0, None, NanPolicy::Omit)
            .expect("matching shapes");
    assert!(res.statistic.get(0, 0).is_nan());
}

#[test]
fn test_jarque_bera_known_value() {
    let x = arr(&[1.0, 2.0, 3.0, 4.0, 5.0]);
    let res = jarque_bera(&x, None, NanPolicy::Omit);
    // skew 0, excess kurtosis -1.3: n/6 * (0 + 1.69/4)
    let stat = res.statistic.get(0, 0);
    assert!((stat - 5.0 / 6.0 * (1.69 / 4.0)).abs() < 1e-12);
    // chi2 survival with 2 degrees of freedom is exp(-x/2).
    assert!((res.pvalue.get(0, 0) - (-stat / 2.0).exp()).abs() < 1e-10);
}

#[test]
fn test_skewtest_needs_eight_observations() {
    let short = arr(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0]);
    let res = skewtest(&short, None, NanPolicy::Omit);
    assert!(res.statistic.get(0, 0).is_nan());

    let x = arr(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0]);
    let res = skewtest(&x, None, NanPolicy::Omit);
    assert!(res.statistic.get(0, 0).is_finite());
    let p = res.pvalue.get(0, 0);
    assert!(p > 0.0 && p <= 1.0);
}

#[test]
fn test_kurtosistest_needs_five_observations() {
    let short = arr(&[1.0, 2.0, 3.0, 4.0]);
    let res = kurtosistest(&short, None, NanPolicy::Omit);
    assert!(res.statistic.get(0, 0).is_nan());

    let x = arr(&[1.0, 2.0, 3.0, 4.0, 10.0]);
    let res = kurtosistest(&x, None, NanPolicy::Omit);
    assert!(res.statistic.get(0, 0).is_finite());
    let p = res.pvalue.get(0, 0);
    assert!(p > 0.0 && p < 1.0);
}

#[test]
fn test_normaltest_combines_component_statistics() {
    let vals: Vec<f64> = (0..20).map(|i| (i as f64).sqrt()).collect();
    let x = arr(&vals);
    let zs = skewtest(&x, None, NanPolicy::Omit).statistic.get(0, 0);
    let zk = kurtosistest(&x, None, NanPolicy::Omit).statistic.get(0, 0);
    let res = normaltest(&x, None, NanPolicy::Omit);
    assert!((res.statistic.get(0, 0) - (zs * zs + zk * zk)).abs() < 1e-12);
    let p = res.pvalue.get(0, 0);
    assert!(p > 0.0 && p < 1.0);
}

#[test]
fn test_skewtest_omits_nan_observations() {
    // 8 finite values plus a NaN: omission keeps the lane testable.
    let x = arr(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 9.0, f64::NAN]);
    let omitted = skewtest(&x, None, NanPolicy::Omit);
    assert!(omitted.statistic.get(0, 0).is_finite());
    let poisoned = skewtest(&x, None, NanPolicy::Propagate);
    assert!(poisoned.statistic.get(0, 0).is_nan());
}

#[test]
fn test_combine_pvalues_tippett_exact() {
    let p = arr(&[0.1, 0.2, 0.3]);
    let res = combine_pvalues(&p, CombineMethod::Tippett, None, None, NanPolicy::Omit)
        .expect("no weights");
    assert!((res.statistic.get(0, 0) - 0.1).abs() < 1e-12);
    assert!((res.pvalue.get(0, 0) - (1.0 - 0.9f64.powi(3))).abs() < 1e-12);
}

#[test]
fn test_combine_pvalues_stouffer_neutral() {
    let p = arr(&[0.5, 0.5, 0.5, 0.5]);
    let res = combine_pvalues(&p, CombineMethod::Stouffer, None, None, NanPolicy::Omit)
        .expect("no weights");
    assert!(res.statistic.get(0, 0).abs() < 1e-9);
    assert!((res.pvalue.get(0, 0) - 0.5).abs() < 1e-9);
}

#[test]
fn test_combine_pvalues_fisher_known_statistic() {
    let p = arr(&[0.5, 0.5, 0.5, 0.5]);
    let res = combine_pvalues(&p, CombineMethod::Fisher, None, None, NanPolicy::Omit)
        .expect("no weights");
    let expected = -2.0 * 4.0 * 0.5f64.ln();
    assert!((res.statistic.get(0, 0) - expected).abs() < 1e-12);
    let pv = res.pvalue.get(0, 0);
    assert!(pv > 0.0 && pv < 1.0);
}

#[test]
fn test_combine_pvalues_weights_require_stouffer() {
    let p = arr(&[0.1, 0.2]);
    let w = arr(&[1.0, 2.0]);
    assert!(
        combine_pvalues(&p, CombineMethod::Fisher, Some(&w), None, NanPolicy::Omit).is_err()
    );
    assert!(
        combine_pvalues(&p, CombineMethod::Stouffer, Some(&w), None, NanPolicy::Omit).is_ok()
    );
}

#[test]
fn test_combine_pvalues_all_methods_in_unit_interval() {
    let p = arr(&[0.01, 0.04, 0.12, 0.35, 0.68]);
    for method in [
        CombineMethod::Fisher,
        CombineMethod::Pearson,
        CombineMethod::MudholkarGeorge,
        CombineMethod::Tippett,
        CombineMethod::Stouffer,
    ] {
        let res =
            combine_pvalues(&p, method, None, None, NanPolicy::Omit).expect("no weights");
        let pv = res.pvalue.get(0, 0);
        assert!(
            (0.0..=1.0).contains(&pv),
            "combined p-value {pv} out of range for {method:?}"
        );
    }
}
