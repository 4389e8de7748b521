//! Weighted similarity between feature vectors.
//!
//! Every field contributes `weight * matches`, where `matches` is an exact
//! equality indicator for scalar fields and a position-wise match count for
//! sequence fields. Matches are never negative, so with non-negative weights
//! the cosine similarity lies in `[0, 1]`, or is NaN when either vector has
//! zero norm.

use serde::Serialize;

use elemsim_protocols::{FeatureField, FeatureVector, Weights};

/// Per-field terms of a dot product, in [`FeatureField::ALL`] order.
pub type DotProductComponents = Vec<(FeatureField, f64)>;

/// Unweighted match count of one field.
fn field_matches(a: &FeatureVector, b: &FeatureVector, field: FeatureField) -> f64 {
    match field {
        FeatureField::Node => indicator(a.node() == b.node()),
        FeatureField::Parent => indicator(a.parent() == b.parent()),
        FeatureField::Children => positional_matches(a.children(), b.children()),
        FeatureField::ChildrenLength => indicator(a.children_length() == b.children_length()),
        FeatureField::SiblingsLength => indicator(a.siblings_length() == b.siblings_length()),
        FeatureField::Attributes => positional_matches(a.attributes(), b.attributes()),
        FeatureField::AttributesLength => {
            indicator(a.attributes_length() == b.attributes_length())
        }
        FeatureField::Width => optional_matches(a.width(), b.width()),
        FeatureField::Height => optional_matches(a.height(), b.height()),
    }
}

fn indicator(equal: bool) -> f64 {
    if equal { 1.0 } else { 0.0 }
}

/// Count of equal positions over the shorter sequence's length.
fn positional_matches(a: &[String], b: &[String]) -> f64 {
    a.iter().zip(b).filter(|(x, y)| x == y).count() as f64
}

/// A missing measurement never matches, not even another missing one.
fn optional_matches(a: Option<f64>, b: Option<f64>) -> f64 {
    match (a, b) {
        (Some(x), Some(y)) => indicator(x == y),
        _ => 0.0,
    }
}

/// Weighted contribution of every field to `a · b`.
pub fn dot_product_components(
    a: &FeatureVector,
    b: &FeatureVector,
    weights: &Weights,
) -> DotProductComponents {
    FeatureField::ALL
        .into_iter()
        .map(|field| (field, weights.get(field) * field_matches(a, b, field)))
        .collect()
}

/// Weighted inner product of two feature vectors.
pub fn dot_product(a: &FeatureVector, b: &FeatureVector, weights: &Weights) -> f64 {
    dot_product_components(a, b, weights)
        .into_iter()
        .map(|(_, contribution)| contribution)
        .sum()
}

/// Norm induced by [`dot_product`].
pub fn norm(v: &FeatureVector, weights: &Weights) -> f64 {
    dot_product(v, v, weights).sqrt()
}

/// Cosine similarity of two feature vectors.
///
/// NaN when either vector has zero norm under `weights`.
pub fn cosine_similarity(a: &FeatureVector, b: &FeatureVector, weights: &Weights) -> f64 {
    cosine(
        dot_product(a, b, weights),
        dot_product(a, a, weights),
        dot_product(b, b, weights),
    )
}

/// `ab / sqrt(aa * bb)`, clamped to `[0, 1]` with NaN passed through.
///
/// A single square root keeps `cosine(d, d, d)` exactly 1.
fn cosine(ab: f64, aa: f64, bb: f64) -> f64 {
    (ab / (aa * bb).sqrt()).clamp(0.0, 1.0)
}

/// One field's share of a similarity computation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FieldContribution {
    pub field: FeatureField,
    pub weight: f64,
    /// Unweighted matches between the two vectors.
    pub matches: f64,
    /// Weighted term of `a · b`.
    pub cross: f64,
    /// Weighted term of `a · a`.
    pub left_self: f64,
    /// Weighted term of `b · b`.
    pub right_self: f64,
}

/// Breakdown of a cosine similarity by field.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimilarityExplanation {
    pub fields: Vec<FieldContribution>,
    pub dot_product: f64,
    pub left_norm: f64,
    pub right_norm: f64,
    pub cosine: f64,
}

/// Compute the cosine similarity of `a` and `b` along with every field's
/// contribution to it.
pub fn explain(a: &FeatureVector, b: &FeatureVector, weights: &Weights) -> SimilarityExplanation {
    let fields: Vec<FieldContribution> = FeatureField::ALL
        .into_iter()
        .map(|field| {
            let weight = weights.get(field);
            let matches = field_matches(a, b, field);
            FieldContribution {
                field,
                weight,
                matches,
                cross: weight * matches,
                left_self: weight * field_matches(a, a, field),
                right_self: weight * field_matches(b, b, field),
            }
        })
        .collect();

    let dot_product: f64 = fields.iter().map(|f| f.cross).sum();
    let left_self: f64 = fields.iter().map(|f| f.left_self).sum();
    let right_self: f64 = fields.iter().map(|f| f.right_self).sum();

    SimilarityExplanation {
        cosine: cosine(dot_product, left_self, right_self),
        left_norm: left_self.sqrt(),
        right_norm: right_self.sqrt(),
        fields,
        dot_product,
    }
}

#[cfg(test)]
#[path = "similarity_tests.rs"]
mod tests;
