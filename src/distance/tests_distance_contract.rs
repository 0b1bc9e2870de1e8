// =========================================================================
// FALSIFY-DI: distance metric contract (inferir distance functions)
//
// Properties:
//   - symmetry d(x1, x2) == d(x2, x1) for all five metrics
//   - identity d(x, x) == 0 for the translation-based metrics
//   - cosine zero-norm guard returns 1.0, never NaN
//   - Minkowski collapses to Euclidean (p=2) and Manhattan (p=1)
// =========================================================================

use super::*;

/// FALSIFY-DI-001: Euclidean of a 3-4-5 triangle
#[test]
fn falsify_di_001_euclidean_known_value() {
    let d = euclidean_distance(&[0.0, 0.0], &[3.0, 4.0]);
    assert!(
        (d - 5.0).abs() < 1e-12,
        "FALSIFIED DI-001: euclidean([0,0],[3,4])={d}, expected 5.0"
    );
}

/// FALSIFY-DI-002: d(x, x) == 0 for euclidean, manhattan, minkowski, chebyshev
#[test]
fn falsify_di_002_self_distance_zero() {
    let x = [1.5, -2.0, 7.25];
    assert_eq!(euclidean_distance(&x, &x), 0.0, "FALSIFIED DI-002: euclidean");
    assert_eq!(manhattan_distance(&x, &x), 0.0, "FALSIFIED DI-002: manhattan");
    assert_eq!(
        minkowski_distance(&x, &x, 3.0),
        0.0,
        "FALSIFIED DI-002: minkowski"
    );
    assert_eq!(chebyshev_distance(&x, &x), 0.0, "FALSIFIED DI-002: chebyshev");
}

/// FALSIFY-DI-003: all five metrics are symmetric
#[test]
fn falsify_di_003_symmetry() {
    let x1 = [1.0, -2.5, 3.0, 0.5];
    let x2 = [4.0, 0.0, -1.0, 2.0];
    let p = Some(3.0);

    for metric in [
        DistanceMetric::Euclidean,
        DistanceMetric::Manhattan,
        DistanceMetric::Minkowski,
        DistanceMetric::Chebyshev,
        DistanceMetric::Cosine,
    ] {
        let forward = metric.compute(&x1, &x2, p);
        let backward = metric.compute(&x2, &x1, p);
        assert!(
            (forward - backward).abs() < 1e-12,
            "FALSIFIED DI-003: {metric:?} asymmetric: {forward} vs {backward}"
        );
    }
}

/// FALSIFY-DI-004: cosine distance on a zero vector is exactly 1.0
#[test]
fn falsify_di_004_cosine_zero_norm_guard() {
    let zero = [0.0, 0.0, 0.0];
    let x = [1.0, 2.0, 3.0];

    let d1 = cosine_distance(&zero, &x);
    let d2 = cosine_distance(&x, &zero);
    let d3 = cosine_distance(&zero, &zero);

    assert_eq!(d1, 1.0, "FALSIFIED DI-004: cosine(0, x)={d1}");
    assert_eq!(d2, 1.0, "FALSIFIED DI-004: cosine(x, 0)={d2}");
    assert_eq!(d3, 1.0, "FALSIFIED DI-004: cosine(0, 0)={d3}");
    assert!(!d1.is_nan(), "FALSIFIED DI-004: NaN leaked");
}

/// FALSIFY-DI-005: cosine distance of a vector with itself is 0
#[test]
fn falsify_di_005_cosine_identity() {
    let x = [2.0, -1.0, 0.5];
    let d = cosine_distance(&x, &x);
    assert!(
        d.abs() < 1e-12,
        "FALSIFIED DI-005: cosine(x, x)={d}, expected 0"
    );
}

/// FALSIFY-DI-006: Minkowski(2) == Euclidean, Minkowski(1) == Manhattan
#[test]
fn falsify_di_006_minkowski_special_cases() {
    let x1 = [1.0, 2.0, 3.0];
    let x2 = [-1.0, 0.5, 4.0];

    let m2 = minkowski_distance(&x1, &x2, 2.0);
    let eu = euclidean_distance(&x1, &x2);
    assert!(
        (m2 - eu).abs() < 1e-12,
        "FALSIFIED DI-006: minkowski(2)={m2} != euclidean={eu}"
    );

    let m1 = minkowski_distance(&x1, &x2, 1.0);
    let ma = manhattan_distance(&x1, &x2);
    assert!(
        (m1 - ma).abs() < 1e-12,
        "FALSIFIED DI-006: minkowski(1)={m1} != manhattan={ma}"
    );
}

/// FALSIFY-DI-007: Chebyshev picks the largest coordinate difference
#[test]
fn falsify_di_007_chebyshev_max_component() {
    let d = chebyshev_distance(&[0.0, 0.0, 0.0], &[1.0, -7.0, 3.0]);
    assert_eq!(d, 7.0, "FALSIFIED DI-007: chebyshev={d}, expected 7.0");
}

/// FALSIFY-DI-008: unknown wire names fall back to Euclidean at the boundary
#[test]
fn falsify_di_008_from_name_boundary_default() {
    assert_eq!(DistanceMetric::from_name("euclidean"), DistanceMetric::Euclidean);
    assert_eq!(DistanceMetric::from_name("Manhattan"), DistanceMetric::Manhattan);
    assert_eq!(DistanceMetric::from_name(" MINKOWSKI "), DistanceMetric::Minkowski);
    assert_eq!(DistanceMetric::from_name("chebyshev"), DistanceMetric::Chebyshev);
    assert_eq!(DistanceMetric::from_name("cosine"), DistanceMetric::Cosine);
    assert_eq!(
        DistanceMetric::from_name("mahalanobis"),
        DistanceMetric::Euclidean,
        "FALSIFIED DI-008: unknown name must default to Euclidean"
    );
    assert_eq!(DistanceMetric::from_name(""), DistanceMetric::Euclidean);
}

/// FALSIFY-DI-009: compute() falls back to p=3 when no exponent is supplied
#[test]
fn falsify_di_009_default_minkowski_p() {
    let x1 = [0.0, 0.0];
    let x2 = [1.0, 1.0];

    let with_default = DistanceMetric::Minkowski.compute(&x1, &x2, None);
    let explicit = minkowski_distance(&x1, &x2, 3.0);
    assert!(
        (with_default - explicit).abs() < 1e-12,
        "FALSIFIED DI-009: default p: {with_default} vs explicit p=3: {explicit}"
    );
}

mod di_proptest_falsify {
    use super::*;
    use proptest::prelude::*;

    fn vector_pair() -> impl Strategy<Value = (Vec<f64>, Vec<f64>)> {
        (1..8usize).prop_flat_map(|n| {
            (
                proptest::collection::vec(-100.0..100.0f64, n),
                proptest::collection::vec(-100.0..100.0f64, n),
            )
        })
    }

    /// FALSIFY-DI-003-prop: symmetry holds for arbitrary finite vectors
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(30))]

        #[test]
        fn falsify_di_003_prop_symmetry((x1, x2) in vector_pair()) {
            for metric in [
                DistanceMetric::Euclidean,
                DistanceMetric::Manhattan,
                DistanceMetric::Minkowski,
                DistanceMetric::Chebyshev,
                DistanceMetric::Cosine,
            ] {
                let forward = metric.compute(&x1, &x2, Some(3.0));
                let backward = metric.compute(&x2, &x1, Some(3.0));
                prop_assert!(
                    (forward - backward).abs() < 1e-9,
                    "FALSIFIED DI-003-prop: {:?}: {} vs {}",
                    metric, forward, backward
                );
            }
        }
    }

    /// FALSIFY-DI-010-prop: distances are non-negative and finite
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(30))]

        #[test]
        fn falsify_di_010_prop_nonnegative((x1, x2) in vector_pair()) {
            for metric in [
                DistanceMetric::Euclidean,
                DistanceMetric::Manhattan,
                DistanceMetric::Minkowski,
                DistanceMetric::Chebyshev,
            ] {
                let d = metric.compute(&x1, &x2, Some(3.0));
                prop_assert!(
                    d >= 0.0 && d.is_finite(),
                    "FALSIFIED DI-010-prop: {:?} produced {}",
                    metric, d
                );
            }
        }
    }
}
