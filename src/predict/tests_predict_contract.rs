// =========================================================================
// FALSIFY-PD: predictor dispatch contract (inferir predict)
//
// Properties:
//   - dispatch is a pure function: same inputs, same prediction
//   - logistic probabilities stay in [0, 1] for any finite logit
//   - k-NN regression with k = n ignores the query entirely
//   - vote winners actually hold the maximum vote count
//   - Naive Bayes posteriors form a probability distribution
// =========================================================================

use super::*;
use crate::distance::DistanceMetric;

/// FALSIFY-PD-001: dispatch is deterministic on shared descriptors
#[test]
fn falsify_pd_001_deterministic() {
    let model = ModelDescriptor::KnnRegression {
        k: 2,
        distance_metric: DistanceMetric::Cosine,
        minkowski_p: None,
        training_features: vec![vec![1.0, 0.0], vec![0.0, 1.0], vec![1.0, 1.0]],
        training_labels: vec![1.0, 2.0, 3.0],
        feature_names: vec!["x".to_string(), "y".to_string()],
    };
    let first = predict(&model, &[0.7, 0.3]).expect("predict 1");
    let second = predict(&model, &[0.7, 0.3]).expect("predict 2");
    assert_eq!(first, second, "FALSIFIED PD-001: predictions differ");
}

/// FALSIFY-PD-002: posterior probabilities sum to 1 and cover every class
#[test]
fn falsify_pd_002_posterior_distribution() {
    let mut class_means = std::collections::HashMap::new();
    let mut class_variances = std::collections::HashMap::new();
    let mut class_priors = std::collections::HashMap::new();
    for (name, mean, prior) in [("a", 0.0, 0.2), ("b", 2.0, 0.5), ("c", -3.0, 0.3)] {
        class_means.insert(name.to_string(), vec![mean]);
        class_variances.insert(name.to_string(), vec![1.5]);
        class_priors.insert(name.to_string(), prior);
    }
    let model = ModelDescriptor::NaiveBayes {
        classes: vec!["a".to_string(), "b".to_string(), "c".to_string()],
        class_means,
        class_variances,
        class_priors,
        alpha: 1e-9,
        feature_names: vec!["x".to_string()],
    };

    let prediction = predict(&model, &[0.5]).expect("valid input");
    let Prediction::Posterior {
        class_probabilities,
        ..
    } = prediction
    else {
        panic!("FALSIFIED PD-002: wrong prediction kind");
    };

    assert_eq!(class_probabilities.len(), 3);
    let declared: Vec<&str> = class_probabilities.iter().map(|(c, _)| c.as_str()).collect();
    assert_eq!(
        declared,
        vec!["a", "b", "c"],
        "FALSIFIED PD-002: posterior order must follow declared class order"
    );
    let total: f64 = class_probabilities.iter().map(|(_, p)| p).sum();
    assert!(
        (total - 1.0).abs() < 1e-12,
        "FALSIFIED PD-002: posterior sums to {total}"
    );
}

/// FALSIFY-PD-003: the vote winner holds the maximum count
#[test]
fn falsify_pd_003_winner_has_max_votes() {
    let model = ModelDescriptor::KnnClassification {
        k: 5,
        distance_metric: DistanceMetric::Manhattan,
        minkowski_p: None,
        training_features: vec![
            vec![0.0],
            vec![0.5],
            vec![1.0],
            vec![4.0],
            vec![5.0],
        ],
        training_labels: vec![
            "a".to_string(),
            "a".to_string(),
            "b".to_string(),
            "b".to_string(),
            "b".to_string(),
        ],
        feature_names: vec!["x".to_string()],
    };
    let prediction = predict(&model, &[0.2]).expect("valid input");
    let Prediction::Voted {
        class_label,
        vote_counts,
    } = prediction
    else {
        panic!("FALSIFIED PD-003: wrong prediction kind");
    };

    let winner_count = vote_counts
        .iter()
        .find(|(label, _)| *label == class_label)
        .map(|(_, count)| *count)
        .expect("winner appears in tally");
    let max_count = vote_counts.iter().map(|(_, count)| *count).max().expect("non-empty");
    assert_eq!(
        winner_count, max_count,
        "FALSIFIED PD-003: winner {class_label} has {winner_count} of max {max_count}"
    );
    let total: u32 = vote_counts.iter().map(|(_, count)| count).sum();
    assert_eq!(total, 5, "FALSIFIED PD-003: tally must cover k neighbors");
}

mod pd_proptest_falsify {
    use super::*;
    use proptest::prelude::*;

    /// FALSIFY-PD-004-prop: logistic probability stays in [0, 1]
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(30))]

        #[test]
        fn falsify_pd_004_prop_logistic_bounds(
            coefficient in -1e3..1e3f64,
            intercept in -1e3..1e3f64,
            query in -1e3..1e3f64,
        ) {
            let model = ModelDescriptor::Logistic {
                coefficients: vec![coefficient],
                intercept,
                feature_names: vec!["x".to_string()],
            };
            let prediction = predict(&model, &[query]).expect("finite input");
            let p = prediction.as_value().expect("probabilistic prediction");
            prop_assert!(
                (0.0..=1.0).contains(&p) && p.is_finite(),
                "FALSIFIED PD-004-prop: probability {}",
                p
            );
        }
    }

    /// FALSIFY-PD-005-prop: k = n averages every label, query-independent
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(30))]

        #[test]
        fn falsify_pd_005_prop_knn_full_k_is_global_mean(
            labels in proptest::collection::vec(-100.0..100.0f64, 1..10),
            query in -50.0..50.0f64,
        ) {
            let training_features: Vec<Vec<f64>> =
                (0..labels.len()).map(|i| vec![i as f64]).collect();
            let expected = labels.iter().sum::<f64>() / labels.len() as f64;

            let model = ModelDescriptor::KnnRegression {
                k: labels.len(),
                distance_metric: DistanceMetric::Euclidean,
                minkowski_p: None,
                training_features,
                training_labels: labels,
                feature_names: vec!["x".to_string()],
            };
            let prediction = predict(&model, &[query]).expect("finite input");
            let value = prediction.as_value().expect("regression prediction");
            prop_assert!(
                (value - expected).abs() < 1e-9,
                "FALSIFIED PD-005-prop: mean {} vs {}",
                value, expected
            );
        }
    }
}
