//! Property-based tests using proptest.
//!
//! These tests verify the shape invariants of the pattern diagrams and
//! the distribution invariants of the classifier.

use predecir::forest::{DecisionTree, ForestClassifier, Leaf, Node, TreeNode};
use predecir::pattern::{lower_triangular, pyramid, upper_triangular};
use predecir::prelude::*;
use proptest::prelude::*;

fn leaf(class_label: usize) -> Box<TreeNode> {
    Box::new(TreeNode::Leaf(Leaf {
        class_label,
        n_samples: 10,
    }))
}

fn split(feature_idx: usize, threshold: f32, left: Box<TreeNode>, right: Box<TreeNode>) -> Box<TreeNode> {
    Box::new(TreeNode::Node(Node {
        feature_idx,
        threshold,
        left,
        right,
    }))
}

// A small iris-shaped forest, equivalent in structure to the bundled
// artifact but built in code so each proptest case stays cheap.
fn fixture_forest() -> ForestClassifier {
    let t1 = DecisionTree::new(*split(
        2,
        2.45,
        leaf(0),
        split(3, 1.75, leaf(1), leaf(2)),
    ));
    let t2 = DecisionTree::new(*split(
        3,
        0.8,
        leaf(0),
        split(2, 4.75, leaf(1), leaf(2)),
    ));
    let t3 = DecisionTree::new(*split(
        2,
        2.35,
        leaf(0),
        split(3, 1.6, leaf(1), leaf(2)),
    ));
    ForestClassifier::new(vec![t1, t2, t3], 3, 4)
}

// Strategy for feature vectors inside the form's slider bounds.
fn in_range_features() -> impl Strategy<Value = [f32; 4]> {
    (4.0f32..=8.0, 2.0f32..=4.5, 1.0f32..=7.0, 0.1f32..=2.5)
        .prop_map(|(sl, sw, pl, pw)| [sl, sw, pl, pw])
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // Pattern shape properties

    #[test]
    fn lower_triangular_has_n_lines_of_length_i(n in 1usize..40) {
        let out = lower_triangular(n);
        let lines: Vec<&str> = out.lines().collect();
        prop_assert_eq!(lines.len(), n);
        for (i, line) in lines.iter().enumerate() {
            prop_assert_eq!(line.len(), i + 1);
            prop_assert!(line.chars().all(|c| c == '*'));
        }
    }

    #[test]
    fn upper_triangular_descends_from_n_to_one(n in 1usize..40) {
        let out = upper_triangular(n);
        let lines: Vec<&str> = out.lines().collect();
        prop_assert_eq!(lines.len(), n);
        for (i, line) in lines.iter().enumerate() {
            prop_assert_eq!(line.len(), n - i);
        }
    }

    #[test]
    fn pyramid_is_centered_with_odd_widths(n in 1usize..40) {
        let out = pyramid(n);
        let lines: Vec<&str> = out.lines().collect();
        prop_assert_eq!(lines.len(), n);
        for (i, line) in lines.iter().enumerate() {
            let spaces = line.chars().take_while(|&c| c == ' ').count();
            let stars = line.len() - spaces;
            prop_assert_eq!(spaces, n - i - 1);
            prop_assert_eq!(stars, 2 * i + 1);
        }
        prop_assert_eq!(lines[n - 1].len(), 2 * n - 1);
    }

    // Classifier distribution properties

    #[test]
    fn proba_is_a_distribution_for_any_in_range_input(features in in_range_features()) {
        let forest = fixture_forest();
        let proba = forest.predict_proba(&Vector::from_slice(&features)).unwrap();

        prop_assert_eq!(proba.len(), 3);
        prop_assert!(proba.iter().all(|&p| p >= 0.0));
        prop_assert!((proba.sum() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn predict_always_matches_proba_argmax(features in in_range_features()) {
        let forest = fixture_forest();
        let x = Vector::from_slice(&features);
        let label = forest.predict(&x).unwrap();
        let proba = forest.predict_proba(&x).unwrap();
        prop_assert_eq!(label, proba.argmax().unwrap());
    }

    // Form properties

    #[test]
    fn set_clamps_and_touches_only_one_slider(
        idx in 0usize..4,
        value in -100.0f32..100.0,
    ) {
        let mut form = FeatureForm::new();
        let before = form.values();
        let key = form.sliders()[idx].key;
        let spec_min = form.sliders()[idx].min;
        let spec_max = form.sliders()[idx].max;

        let stored = form.set(key, value).unwrap();
        prop_assert!(stored >= spec_min && stored <= spec_max);

        let after = form.values();
        for i in 0..4 {
            if i != idx {
                prop_assert_eq!(after[i], before[i]);
            }
        }
    }
}
