// =========================================================================
// FALSIFY-HT: masked/NaN equivalence contract for hypothesis tests
//
// Contract: every hypothesis test computed over masked arrays must equal
// the same test computed over the NaN-sentinel rendering under
// NanPolicy::Omit, including the missingness footprint of every output
// field (statistic, p-value, degrees of freedom, confidence bounds).
// =========================================================================

use super::*;
use crate::verify::{assert_masked_matches, masked_fixtures, MaskedFixture, RTOL};
use rand::rngs::StdRng;
use rand::SeedableRng;

const AXES: [Option<Axis>; 3] = [None, Some(Axis::Rows), Some(Axis::Columns)];

fn assert_ttest_matches(res: &MaskedTTest, reference: &TTest, label: &str) {
    assert_masked_matches(&res.statistic, &reference.statistic, RTOL, 0.0, label);
    assert_masked_matches(&res.pvalue, &reference.pvalue, RTOL, 1e-12, label);
    assert_masked_matches(&res.df, &reference.df, RTOL, 0.0, label);
    let ci = res.confidence_interval(0.95).expect("valid confidence");
    let ci_ref = reference.confidence_interval(0.95).expect("valid confidence");
    assert_masked_matches(&ci.low, &ci_ref.low, RTOL, 1e-12, label);
    assert_masked_matches(&ci.high, &ci_ref.high, RTOL, 1e-12, label);
}

/// FALSIFY-HT-001: one-sample t-test equivalence, including intervals
#[test]
fn falsify_ht_001_ttest_1samp_equivalence() {
    let mut rng = StdRng::seed_from_u64(661_870);
    for fx in &masked_fixtures(3, 7, 8, &mut rng) {
        for axis in AXES {
            let popmean = MaskedArray::from_array(Array::scalar(0.5));
            let res =
                masked_ttest_1samp(&fx.masked, &popmean, axis).expect("valid popmean");
            let reference = ttest_1samp(&fx.nan, popmean.data(), axis, NanPolicy::Omit)
                .expect("valid popmean");
            assert_ttest_matches(&res, &reference, "FALSIFIED HT-001: ttest_1samp");
        }
    }
}

/// FALSIFY-HT-002: paired t-test drops a pair when either side is missing
#[test]
fn falsify_ht_002_ttest_rel_equivalence() {
    let mut rng = StdRng::seed_from_u64(220_144);
    let fixtures = masked_fixtures(4, 7, 8, &mut rng);
    for pair in fixtures.chunks(2) {
        let (fa, fb) = (&pair[0], &pair[1]);
        for axis in AXES {
            let res = masked_ttest_rel(&fa.masked, &fb.masked, axis).expect("matching shapes");
            let reference =
                ttest_rel(&fa.nan, &fb.nan, axis, NanPolicy::Omit).expect("matching shapes");
            assert_ttest_matches(&res, &reference, "FALSIFIED HT-002: ttest_rel");
        }
    }
}

/// FALSIFY-HT-003: independent t-test omits per sample, not per pair
#[test]
fn falsify_ht_003_ttest_ind_equivalence() {
    let mut rng = StdRng::seed_from_u64(187_201);
    let fixtures = masked_fixtures(4, 7, 8, &mut rng);
    for pair in fixtures.chunks(2) {
        let (fa, fb) = (&pair[0], &pair[1]);
        for axis in AXES {
            for equal_var in [true, false] {
                let res = masked_ttest_ind(&fa.masked, &fb.masked, equal_var, axis)
                    .expect("matching shapes");
                let reference = ttest_ind(&fa.nan, &fb.nan, equal_var, axis, NanPolicy::Omit)
                    .expect("matching shapes");
                assert_ttest_matches(&res, &reference, "FALSIFIED HT-003: ttest_ind");
            }
        }
    }
}

fn from_stats_inputs(fx: &MaskedFixture) -> [MaskedArray; 3] {
    [
        fx.masked.clone(),
        fx.masked.map(|v| v + 0.5),
        fx.masked.map(|v| (v * 100.0).round() + 2.0),
    ]
}

/// FALSIFY-HT-004: summary-statistics t-test masks the union of inputs
#[test]
fn falsify_ht_004_ttest_ind_from_stats_equivalence() {
    let mut rng = StdRng::seed_from_u64(74_092);
    let fixtures = masked_fixtures(2, 7, 8, &mut rng);
    let [m1, s1, n1] = from_stats_inputs(&fixtures[0]);
    let [m2, s2, n2] = from_stats_inputs(&fixtures[1]);
    let res =
        masked_ttest_ind_from_stats(&m1, &s1, &n1, &m2, &s2, &n2).expect("matching shapes");
    let reference = ttest_ind_from_stats(
        &m1.to_nan_array(),
        &s1.to_nan_array(),
        &n1.to_nan_array(),
        &m2.to_nan_array(),
        &s2.to_nan_array(),
        &n2.to_nan_array(),
    )
    .expect("matching shapes");

    // Any masked input must mask the output at that position.
    let union: Vec<bool> = (0..m1.mask().len())
        .map(|idx| {
            [&m1, &s1, &n1, &m2, &s2, &n2]
                .iter()
                .any(|a| a.mask()[idx])
        })
        .collect();
    crate::verify::assert_mask_eq(
        res.statistic.mask(),
        &union,
        "FALSIFIED HT-004: output mask must be the union of input masks",
    );
    assert_masked_matches(
        &res.statistic,
        &reference.statistic,
        RTOL,
        0.0,
        "FALSIFIED HT-004: statistic",
    );
    assert_masked_matches(
        &res.pvalue,
        &reference.pvalue,
        RTOL,
        1e-12,
        "FALSIFIED HT-004: pvalue",
    );
    assert_masked_matches(&res.df, &reference.df, RTOL, 0.0, "FALSIFIED HT-004: df");
}

/// FALSIFY-HT-005: power divergence equivalence across lambda families
#[test]
fn falsify_ht_005_power_divergence_equivalence() {
    let mut rng = StdRng::seed_from_u64(505_050);
    let fx = &masked_fixtures(1, 7, 8, &mut rng)[0];
    // Shift away from zero: observed frequencies must be positive.
    let obs = fx.masked.map(|v| v + 0.1);
    let obs_nan = fx.nan.map(|v| v + 0.1);
    for axis in AXES {
        for lambda_ in [
            Lambda::Pearson,
            Lambda::LogLikelihood,
            Lambda::FreemanTukey,
            Lambda::ModLogLikelihood,
            Lambda::Neyman,
            Lambda::CressieRead(2.0 / 3.0),
        ] {
            for ddof in [0, 1] {
                let res = masked_power_divergence(&obs, None, lambda_, ddof, axis)
                    .expect("no expected");
                let reference =
                    power_divergence(&obs_nan, None, lambda_, ddof, axis, NanPolicy::Omit)
                        .expect("no expected");
                assert_masked_matches(
                    &res.statistic,
                    &reference.statistic,
                    RTOL,
                    1e-12,
                    "FALSIFIED HT-005: statistic",
                );
                assert_masked_matches(
                    &res.pvalue,
                    &reference.pvalue,
                    RTOL,
                    1e-12,
                    "FALSIFIED HT-005: pvalue",
                );
            }
        }
    }
}

/// FALSIFY-HT-006: chi-square with explicit expected frequencies
#[test]
fn falsify_ht_006_chisquare_with_expected_equivalence() {
    let mut rng = StdRng::seed_from_u64(31_415);
    let fx = &masked_fixtures(1, 7, 8, &mut rng)[0];
    let obs = fx.masked.map(|v| v + 0.1);
    // Expected frequencies equal the observed ones, so totals always
    // agree regardless of which pairs the mask drops.
    let exp = obs.clone();
    for axis in AXES {
        let res = masked_chisquare(&obs, Some(&exp), 0, axis).expect("matching shapes");
        let reference = chisquare(
            &obs.to_nan_array(),
            Some(&exp.to_nan_array()),
            0,
            axis,
            NanPolicy::Omit,
        )
        .expect("matching shapes");
        assert_masked_matches(
            &res.statistic,
            &reference.statistic,
            RTOL,
            1e-12,
            "FALSIFIED HT-006: statistic",
        );
        assert_masked_matches(
            &res.pvalue,
            &reference.pvalue,
            RTOL,
            1e-12,
            "FALSIFIED HT-006: pvalue",
        );
    }
}

/// FALSIFY-HT-007: p-value combination equivalence across methods
#[test]
fn falsify_ht_007_combine_pvalues_equivalence() {
    let mut rng = StdRng::seed_from_u64(999_331);
    let fx = &masked_fixtures(1, 7, 8, &mut rng)[0];
    // Keep p-values strictly inside (0, 1).
    let p = fx.masked.map(|v| v * 0.98 + 0.01);
    let p_nan = fx.nan.map(|v| v * 0.98 + 0.01);
    for axis in AXES {
        for method in [
            CombineMethod::Fisher,
            CombineMethod::Pearson,
            CombineMethod::MudholkarGeorge,
            CombineMethod::Tippett,
            CombineMethod::Stouffer,
        ] {
            let res =
                masked_combine_pvalues(&p, method, None, axis).expect("no weights");
            let reference = combine_pvalues(&p_nan, method, None, axis, NanPolicy::Omit)
                .expect("no weights");
            assert_masked_matches(
                &res.statistic,
                &reference.statistic,
                RTOL,
                1e-12,
                "FALSIFIED HT-007: statistic",
            );
            assert_masked_matches(
                &res.pvalue,
                &reference.pvalue,
                RTOL,
                1e-12,
                "FALSIFIED HT-007: pvalue",
            );
        }
    }
}

/// FALSIFY-HT-008: weighted Stouffer drops a (p, weight) pair together
#[test]
fn falsify_ht_008_weighted_stouffer_equivalence() {
    let mut rng = StdRng::seed_from_u64(606_060);
    let fixtures = masked_fixtures(2, 7, 8, &mut rng);
    let p = fixtures[0].masked.map(|v| v * 0.98 + 0.01);
    let w = fixtures[1].masked.map(|v| v + 0.5);
    for axis in AXES {
        let res = masked_combine_pvalues(&p, CombineMethod::Stouffer, Some(&w), axis)
            .expect("matching shapes");
        let reference = combine_pvalues(
            &p.to_nan_array(),
            CombineMethod::Stouffer,
            Some(&w.to_nan_array()),
            axis,
            NanPolicy::Omit,
        )
        .expect("matching shapes");
        assert_masked_matches(
            &res.statistic,
            &reference.statistic,
            RTOL,
            1e-12,
            "FALSIFIED HT-008: statistic",
        );
        assert_masked_matches(
            &res.pvalue,
            &reference.pvalue,
            RTOL,
            1e-12,
            "FALSIFIED HT-008: pvalue",
        );
    }
}

/// FALSIFY-HT-010: normality tests agree, short lanes masked in both paths
#[test]
fn falsify_ht_010_normality_equivalence() {
    let mut rng = StdRng::seed_from_u64(112_358);
    for fx in &masked_fixtures(2, 7, 8, &mut rng) {
        for axis in AXES {
            let pairs: [(MaskedNormalityTest, NormalityTest); 4] = [
                (
                    masked_skewtest(&fx.masked, axis),
                    skewtest(&fx.nan, axis, NanPolicy::Omit),
                ),
                (
                    masked_kurtosistest(&fx.masked, axis),
                    kurtosistest(&fx.nan, axis, NanPolicy::Omit),
                ),
                (
                    masked_normaltest(&fx.masked, axis),
                    normaltest(&fx.nan, axis, NanPolicy::Omit),
                ),
                (
                    masked_jarque_bera(&fx.masked, axis),
                    jarque_bera(&fx.nan, axis, NanPolicy::Omit),
                ),
            ];
            for (res, reference) in &pairs {
                assert_masked_matches(
                    &res.statistic,
                    &reference.statistic,
                    RTOL,
                    1e-12,
                    "FALSIFIED HT-010: statistic",
                );
                assert_masked_matches(
                    &res.pvalue,
                    &reference.pvalue,
                    RTOL,
                    1e-12,
                    "FALSIFIED HT-010: pvalue",
                );
            }
        }
    }
}

mod ht_proptest_falsify {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(50))]

        /// FALSIFY-HT-009-prop: one-sample equivalence for arbitrary masks
        #[test]
        fn falsify_ht_009_prop_ttest_1samp(
            entries in proptest::collection::vec((0.0f64..10.0, proptest::bool::ANY), 12),
            popmean in 0.0f64..10.0,
        ) {
            let masked = MaskedArray::from_fn(1, entries.len(), |_, j| entries[j]);
            let nan = masked.to_nan_array();
            let pm = Array::scalar(popmean);
            let res = masked_ttest_1samp(&masked, &MaskedArray::from_array(pm.clone()), None)
                .expect("valid popmean");
            let reference =
                ttest_1samp(&nan, &pm, None, NanPolicy::Omit).expect("valid popmean");
            assert_masked_matches(
                &res.statistic,
                &reference.statistic,
                RTOL,
                0.0,
                "FALSIFIED HT-009: statistic",
            );
            assert_masked_matches(
                &res.pvalue,
                &reference.pvalue,
                RTOL,
                1e-12,
                "FALSIFIED HT-009: pvalue",
            );
        }
    }
}
