use super::*;
use elemsim_protocols::Layout;

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn row(children: &[&str], siblings: usize, attributes: &[&str]) -> FeatureVector {
    FeatureVector::new("TR", "TBODY", strings(children), siblings, strings(attributes), None)
}

fn only(field: FeatureField) -> Weights {
    Weights::zero().with(field, 1.0)
}

#[test]
fn test_scalar_fields_are_exact_match() {
    let a = row(&["TD"], 10, &[]);
    let b = row(&["TD", "TD"], 11, &[]);
    let w = only(FeatureField::ChildrenLength);
    assert_eq!(dot_product(&a, &b, &w), 0.0);

    let w = only(FeatureField::SiblingsLength);
    assert_eq!(dot_product(&a, &b, &w), 0.0);

    let w = only(FeatureField::Node);
    assert_eq!(dot_product(&a, &b, &w), 1.0);
}

#[test]
fn test_sequence_weight_applied_once_after_sum() {
    let a = row(&["TD", "TD", "TD"], 1, &[]);
    let w = Weights::zero().with(FeatureField::Children, 2.5);
    assert_eq!(dot_product(&a, &a, &w), 7.5);
}

#[test]
fn test_sequence_is_position_sensitive() {
    let anchor = row(&["DIV", "SPAN"], 1, &[]);
    let same_order = row(&["DIV", "SPAN"], 1, &[]);
    let swapped = row(&["SPAN", "DIV"], 1, &[]);
    let w = only(FeatureField::Children);

    let aligned = dot_product(&anchor, &same_order, &w);
    let crossed = dot_product(&anchor, &swapped, &w);
    assert_eq!(aligned, 2.0);
    assert_eq!(crossed, 0.0);
    assert!(aligned > crossed);
}

#[test]
fn test_sequence_truncated_to_shorter() {
    let long = row(&["A", "B", "C"], 1, &[]);
    let short = row(&["A", "B"], 1, &[]);
    let w = only(FeatureField::Children);
    assert_eq!(dot_product(&long, &short, &w), 2.0);
    assert_eq!(dot_product(&short, &long, &w), 2.0);
}

#[test]
fn test_attribute_positions() {
    let a = row(&[], 1, &["class", "athing", "id", "1"]);
    let b = row(&[], 1, &["class", "athing", "id", "2"]);
    let w = only(FeatureField::Attributes);
    assert_eq!(dot_product(&a, &b, &w), 3.0);
}

#[test]
fn test_missing_layout_never_matches() {
    let with = FeatureVector::new("DIV", "BODY", vec![], 1, vec![], Some(Layout::new(10.0, 5.0)));
    let without = FeatureVector::new("DIV", "BODY", vec![], 1, vec![], None);
    let w = Weights::zero()
        .with(FeatureField::Width, 1.0)
        .with(FeatureField::Height, 1.0);

    assert_eq!(dot_product(&with, &with, &w), 2.0);
    assert_eq!(dot_product(&with, &without, &w), 0.0);
    assert_eq!(dot_product(&without, &without, &w), 0.0);
}

#[test]
fn test_layout_exact_match() {
    let a = FeatureVector::new("DIV", "BODY", vec![], 1, vec![], Some(Layout::new(10.0, 5.0)));
    let b = FeatureVector::new("DIV", "BODY", vec![], 1, vec![], Some(Layout::new(10.0, 6.0)));
    let w = Weights::zero()
        .with(FeatureField::Width, 3.0)
        .with(FeatureField::Height, 4.0);
    assert_eq!(dot_product(&a, &b, &w), 3.0);
}

#[test]
fn test_components_follow_field_order() {
    let a = row(&["TD"], 2, &["id", "x"]);
    let components = dot_product_components(&a, &a, &Weights::default().without_layout());
    let fields: Vec<_> = components.iter().map(|(f, _)| *f).collect();
    assert_eq!(fields, FeatureField::ALL.to_vec());

    let total: f64 = components.iter().map(|(_, c)| c).sum();
    assert_eq!(total, dot_product(&a, &a, &Weights::default().without_layout()));
}

#[test]
fn test_norm_is_sqrt_of_self_dot() {
    let a = row(&["TD", "TD"], 4, &["id", "x"]);
    let w = Weights::default();
    assert!((norm(&a, &w).powi(2) - dot_product(&a, &a, &w)).abs() < 1e-9);
}

#[test]
fn test_identical_structure_scores_one() {
    let a = row(&["TD", "TD", "TD"], 30, &["class", "athing"]);
    let b = row(&["TD", "TD", "TD"], 30, &["class", "athing"]);
    let score = cosine_similarity(&a, &b, &Weights::default());
    assert!((score - 1.0).abs() < 1e-12);
}

#[test]
fn test_disjoint_structure_scores_from_weights() {
    let a = row(&["TD", "TD", "TD"], 10, &["class", "athing", "id", "1"]);
    let b = row(&["TH"], 10, &["style", "x"]);
    let w = Weights::default().without_layout();

    // node + parent + siblingsLength
    let cross = 0.1 + 0.1 + 1.0;
    let left = 0.1 + 0.1 + 300.0 + 100.0 + 1.0 + 400.0 + 10.0;
    let right = 0.1 + 0.1 + 100.0 + 100.0 + 1.0 + 200.0 + 10.0;
    let expected = cross / (f64::sqrt(left) * f64::sqrt(right));

    assert!((dot_product(&a, &b, &w) - cross).abs() < 1e-9);
    assert!((cosine_similarity(&a, &b, &w) - expected).abs() < 1e-12);
}

#[test]
fn test_self_similarity_is_exactly_one() {
    // self dot of 3 is not a perfect square
    let a = row(&["TD"], 1, &[]);
    let w = Weights::zero()
        .with(FeatureField::Node, 1.0)
        .with(FeatureField::Parent, 1.0)
        .with(FeatureField::ChildrenLength, 1.0);
    assert_eq!(dot_product(&a, &a, &w), 3.0);

    let score = cosine_similarity(&a, &a, &w);
    assert_eq!(score, 1.0);
    assert!(!elemsim_protocols::Match::new(0usize, score).is_above(1.0));
    assert_eq!(explain(&a, &a, &w).cosine, 1.0);
}

#[test]
fn test_zero_norm_is_nan() {
    let a = row(&["TD"], 1, &[]);
    let score = cosine_similarity(&a, &a, &Weights::zero());
    assert!(score.is_nan());
    assert!(explain(&a, &a, &Weights::zero()).cosine.is_nan());
}

#[test]
fn test_explain_matches_cosine() {
    let a = row(&["TD", "TD"], 3, &["class", "athing"]);
    let b = row(&["TD", "TH"], 3, &["class", "spacer"]);
    let w = Weights::default();
    let explanation = explain(&a, &b, &w);

    assert_eq!(explanation.fields.len(), FeatureField::ALL.len());
    assert!((explanation.dot_product - dot_product(&a, &b, &w)).abs() < 1e-9);
    assert!((explanation.left_norm - norm(&a, &w)).abs() < 1e-9);
    assert!((explanation.right_norm - norm(&b, &w)).abs() < 1e-9);
    assert!((explanation.cosine - cosine_similarity(&a, &b, &w)).abs() < 1e-12);

    let children = explanation
        .fields
        .iter()
        .find(|f| f.field == FeatureField::Children)
        .unwrap();
    assert_eq!(children.matches, 1.0);
    assert_eq!(children.cross, 100.0);
    assert_eq!(children.left_self, 200.0);
}

#[test]
fn test_explain_serializes() {
    let a = row(&["TD"], 1, &[]);
    let json = serde_json::to_value(explain(&a, &a, &Weights::default())).unwrap();
    assert_eq!(json["fields"][0]["field"], "node");
    assert!(json["cosine"].as_f64().is_some());
}

mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn arb_tag() -> impl Strategy<Value = String> {
        prop::sample::select(vec!["DIV", "SPAN", "TR", "TD", "A"]).prop_map(String::from)
    }

    fn arb_feature_vector() -> impl Strategy<Value = FeatureVector> {
        (
            arb_tag(),
            arb_tag(),
            prop::collection::vec(arb_tag(), 0..6),
            1usize..5,
            prop::collection::vec(arb_tag(), 0..6),
            prop::option::of((1u8..4, 1u8..4)),
        )
            .prop_map(|(node, parent, children, siblings, attributes, layout)| {
                let layout = layout.map(|(w, h)| Layout::new(f64::from(w) * 10.0, f64::from(h) * 10.0));
                FeatureVector::new(node, parent, children, siblings, attributes, layout)
            })
    }

    fn arb_weights() -> impl Strategy<Value = Weights> {
        prop::collection::vec(0.0f64..100.0, FeatureField::ALL.len()).prop_map(|values| {
            FeatureField::ALL
                .into_iter()
                .zip(values)
                .fold(Weights::zero(), |w, (field, value)| w.with(field, value))
        })
    }

    proptest! {
        /// Norm is never negative and never NaN for non-negative weights
        #[test]
        fn norm_non_negative(v in arb_feature_vector(), w in arb_weights()) {
            let n = norm(&v, &w);
            prop_assert!(n >= 0.0, "norm {} should be non-negative", n);
        }

        /// Cosine similarity is in [0, 1] for non-zero vectors
        #[test]
        fn cosine_bounded(a in arb_feature_vector(), b in arb_feature_vector(), w in arb_weights()) {
            prop_assume!(norm(&a, &w) > 0.0 && norm(&b, &w) > 0.0);
            let score = cosine_similarity(&a, &b, &w);
            prop_assert!((0.0..=1.0).contains(&score), "cosine {} out of range", score);
        }

        /// Every non-zero vector is fully similar to itself
        #[test]
        fn cosine_reflexive(a in arb_feature_vector(), w in arb_weights()) {
            prop_assume!(norm(&a, &w) > 0.0);
            let score = cosine_similarity(&a, &a, &w);
            prop_assert_eq!(score, 1.0, "self similarity {}", score);
        }

        /// Cosine similarity is symmetric, including the undefined case
        #[test]
        fn cosine_symmetric(a in arb_feature_vector(), b in arb_feature_vector(), w in arb_weights()) {
            let ab = cosine_similarity(&a, &b, &w);
            let ba = cosine_similarity(&b, &a, &w);
            prop_assert!(ab == ba || (ab.is_nan() && ba.is_nan()), "{} != {}", ab, ba);
        }

        /// Dot product is commutative
        #[test]
        fn dot_commutative(a in arb_feature_vector(), b in arb_feature_vector(), w in arb_weights()) {
            prop_assert_eq!(dot_product(&a, &b, &w), dot_product(&b, &a, &w));
        }
    }
}
