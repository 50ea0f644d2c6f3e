// =========================================================================
// FALSIFY-MS: masked/NaN equivalence contract for descriptive statistics
//
// Contract: for the same logical data, every reduction computed over a
// masked array must equal the reduction computed over the NaN-sentinel
// rendering under NanPolicy::Omit, and the output mask must equal the
// NaN footprint of the reference result.
// =========================================================================

use super::*;
use crate::verify::{assert_masked_matches, masked_fixtures, RTOL};
use rand::rngs::StdRng;
use rand::SeedableRng;

const AXES: [Option<Axis>; 3] = [None, Some(Axis::Rows), Some(Axis::Columns)];

/// FALSIFY-MS-001: masked mean equals NaN-omit mean on seeded fixtures
#[test]
fn falsify_ms_001_mean_equivalence() {
    let mut rng = StdRng::seed_from_u64(982_364);
    for fx in &masked_fixtures(3, 7, 8, &mut rng) {
        for axis in AXES {
            let res = masked_mean(&fx.masked, None, axis).expect("no weights");
            let reference = mean(&fx.nan, None, axis, NanPolicy::Omit).expect("no weights");
            assert_masked_matches(&res, &reference, RTOL, 0.0, "FALSIFIED MS-001: mean");
        }
    }
}

/// FALSIFY-MS-002: weighted mean drops a pair when either side is missing
#[test]
fn falsify_ms_002_weighted_mean_equivalence() {
    let mut rng = StdRng::seed_from_u64(17_371);
    let fixtures = masked_fixtures(4, 7, 8, &mut rng);
    for pair in fixtures.chunks(2) {
        let (fx, fw) = (&pair[0], &pair[1]);
        for axis in AXES {
            let res = masked_mean(&fx.masked, Some(&fw.masked), axis).expect("matching shapes");
            let reference =
                mean(&fx.nan, Some(&fw.nan), axis, NanPolicy::Omit).expect("matching shapes");
            assert_masked_matches(&res, &reference, RTOL, 0.0, "FALSIFIED MS-002: weighted mean");
        }
    }
}

/// FALSIFY-MS-003: gmean/hmean/pmean equivalence on positive fixtures
#[test]
fn falsify_ms_003_generalized_means_equivalence() {
    let mut rng = StdRng::seed_from_u64(55_221);
    // Shift payloads away from zero so logs and reciprocals stay finite.
    let fx = &masked_fixtures(1, 7, 8, &mut rng)[0];
    let masked = fx.masked.map(|v| v + 0.5);
    let nan = fx.nan.map(|v| v + 0.5);
    for axis in AXES {
        let g = masked_gmean(&masked, None, axis).expect("no weights");
        let g_ref = gmean(&nan, None, axis, NanPolicy::Omit).expect("no weights");
        assert_masked_matches(&g, &g_ref, RTOL, 0.0, "FALSIFIED MS-003: gmean");

        let h = masked_hmean(&masked, None, axis).expect("no weights");
        let h_ref = hmean(&nan, None, axis, NanPolicy::Omit).expect("no weights");
        assert_masked_matches(&h, &h_ref, RTOL, 0.0, "FALSIFIED MS-003: hmean");

        for p in [2.0, 0.0, -1.5] {
            let pm = masked_pmean(&masked, p, None, axis).expect("no weights");
            let pm_ref = pmean(&nan, p, None, axis, NanPolicy::Omit).expect("no weights");
            assert_masked_matches(&pm, &pm_ref, RTOL, 0.0, "FALSIFIED MS-003: pmean");
        }
    }
}

/// FALSIFY-MS-004: moments, variance, skew, kurtosis and sem agree
#[test]
fn falsify_ms_004_moment_family_equivalence() {
    let mut rng = StdRng::seed_from_u64(7_040_919);
    for fx in &masked_fixtures(2, 7, 8, &mut rng) {
        for axis in AXES {
            for order in [2, 3, 4] {
                let m = masked_moment(&fx.masked, order, axis);
                let m_ref = moment(&fx.nan, order, axis, NanPolicy::Omit);
                assert_masked_matches(&m, &m_ref, RTOL, 1e-15, "FALSIFIED MS-004: moment");
            }
            for ddof in [0, 1] {
                let v = masked_variance(&fx.masked, ddof, axis);
                let v_ref = variance(&fx.nan, ddof, axis, NanPolicy::Omit);
                assert_masked_matches(&v, &v_ref, RTOL, 0.0, "FALSIFIED MS-004: variance");

                let s = masked_sem(&fx.masked, ddof, axis);
                let s_ref = sem(&fx.nan, ddof, axis, NanPolicy::Omit);
                assert_masked_matches(&s, &s_ref, RTOL, 0.0, "FALSIFIED MS-004: sem");
            }
            for bias in [true, false] {
                let sk = masked_skew(&fx.masked, bias, axis);
                let sk_ref = skew(&fx.nan, bias, axis, NanPolicy::Omit);
                assert_masked_matches(&sk, &sk_ref, RTOL, 1e-12, "FALSIFIED MS-004: skew");

                let k = masked_kurtosis(&fx.masked, bias, axis);
                let k_ref = kurtosis(&fx.nan, bias, axis, NanPolicy::Omit);
                assert_masked_matches(&k, &k_ref, RTOL, 1e-12, "FALSIFIED MS-004: kurtosis");
            }
        }
    }
}

/// FALSIFY-MS-005: describe fields agree between the two representations
#[test]
fn falsify_ms_005_describe_equivalence() {
    let mut rng = StdRng::seed_from_u64(440_011);
    let fx = &masked_fixtures(1, 7, 8, &mut rng)[0];
    for axis in AXES {
        let d = masked_describe(&fx.masked, 1, axis);
        let d_ref = describe(&fx.nan, 1, axis, NanPolicy::Omit);
        assert_masked_matches(&d.nobs, &d_ref.nobs, 0.0, 0.0, "FALSIFIED MS-005: nobs");
        assert_masked_matches(&d.minmax.0, &d_ref.minmax.0, 0.0, 0.0, "FALSIFIED MS-005: min");
        assert_masked_matches(&d.minmax.1, &d_ref.minmax.1, 0.0, 0.0, "FALSIFIED MS-005: max");
        assert_masked_matches(&d.mean, &d_ref.mean, RTOL, 0.0, "FALSIFIED MS-005: mean");
        assert_masked_matches(&d.variance, &d_ref.variance, RTOL, 0.0, "FALSIFIED MS-005: var");
        assert_masked_matches(
            &d.skewness,
            &d_ref.skewness,
            RTOL,
            1e-12,
            "FALSIFIED MS-005: skewness",
        );
        assert_masked_matches(
            &d.kurtosis,
            &d_ref.kurtosis,
            RTOL,
            1e-12,
            "FALSIFIED MS-005: kurtosis",
        );
    }
}

/// FALSIFY-MS-006: a fully masked lane is masked in one path, NaN in the other
#[test]
fn falsify_ms_006_fully_masked_lane() {
    let data = Array::from_fn(4, 3, |i, j| (i * 3 + j) as f64);
    let masked = crate::masked::MaskedArray::from_fn(4, 3, |_, j| {
        (data.get(0, j), j == 1)
    });
    let nan = masked.to_nan_array();

    let res = masked_mean(&masked, None, Some(Axis::Rows)).expect("no weights");
    let reference = mean(&nan, None, Some(Axis::Rows), NanPolicy::Omit).expect("no weights");
    assert!(res.mask()[1], "FALSIFIED MS-006: fully masked column must stay masked");
    assert!(
        reference.get(0, 1).is_nan(),
        "FALSIFIED MS-006: fully missing column must reduce to NaN"
    );
    assert_masked_matches(&res, &reference, RTOL, 0.0, "FALSIFIED MS-006: mean");
}

// Standardization leaves missing entries missing, so these contracts use
// a sparse deterministic mask that keeps at least two observations in
// every row and column.
fn sparse_masked(seed: u64) -> crate::masked::MaskedArray {
    use rand::Rng;
    let mut rng = StdRng::seed_from_u64(seed);
    crate::masked::MaskedArray::from_fn(7, 8, |i, j| (rng.gen(), (i + 2 * j) % 5 == 0))
}

/// FALSIFY-MS-007: zscore family keeps the input missingness footprint
#[test]
fn falsify_ms_007_zscore_mask_footprint() {
    let masked = sparse_masked(909_090);
    let nan = masked.to_nan_array();
    for axis in AXES {
        let z = masked_zscore(&masked, 1, axis);
        assert_eq!(
            z.mask(),
            masked.mask(),
            "FALSIFIED MS-007: zscore changed the missingness footprint"
        );
        let z_ref = zscore(&nan, 1, axis, NanPolicy::Omit);
        assert_masked_matches(&z, &z_ref, RTOL, 1e-12, "FALSIFIED MS-007: zscore");

        let shifted = masked.map(|v| v + 0.5);
        let g = masked_gzscore(&shifted, 1, axis);
        let g_ref = gzscore(&nan.map(|v| v + 0.5), 1, axis, NanPolicy::Omit);
        assert_masked_matches(&g, &g_ref, RTOL, 1e-12, "FALSIFIED MS-007: gzscore");
    }
}

/// FALSIFY-MS-008: zmap statistics come from the comparison sample
#[test]
fn falsify_ms_008_zmap_equivalence() {
    let scores = sparse_masked(31_337);
    let compare = sparse_masked(31_338);
    for axis in AXES {
        let z = masked_zmap(&scores, &compare, 0, axis).expect("matching shapes");
        let z_ref = zmap(
            &scores.to_nan_array(),
            &compare.to_nan_array(),
            0,
            axis,
            NanPolicy::Omit,
        )
        .expect("matching shapes");
        assert_masked_matches(&z, &z_ref, RTOL, 1e-12, "FALSIFIED MS-008: zmap");
    }
}

mod ms_proptest_falsify {
    use super::*;
    use proptest::prelude::*;

    fn masked_pair(
        len: usize,
    ) -> impl Strategy<Value = (crate::masked::MaskedArray, Array)> {
        proptest::collection::vec((0.1f64..10.0, proptest::bool::ANY), len).prop_map(|entries| {
            let masked = crate::masked::MaskedArray::from_fn(1, entries.len(), |_, j| entries[j]);
            let nan = masked.to_nan_array();
            (masked, nan)
        })
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(50))]

        /// FALSIFY-MS-009-prop: mean equivalence holds for arbitrary masks
        #[test]
        fn falsify_ms_009_prop_mean_equivalence((masked, nan) in masked_pair(16)) {
            let res = masked_mean(&masked, None, None).expect("no weights");
            let reference = mean(&nan, None, None, NanPolicy::Omit).expect("no weights");
            assert_masked_matches(&res, &reference, RTOL, 0.0, "FALSIFIED MS-009: mean");
        }

        /// FALSIFY-MS-010-prop: variance equivalence holds for arbitrary masks
        #[test]
        fn falsify_ms_010_prop_variance_equivalence((masked, nan) in masked_pair(16)) {
            let res = masked_variance(&masked, 1, None);
            let reference = variance(&nan, 1, None, NanPolicy::Omit);
            assert_masked_matches(&res, &reference, RTOL, 0.0, "FALSIFIED MS-010: variance");
        }
    }
}
