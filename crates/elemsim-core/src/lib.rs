//! # elemsim Core
//!
//! The element-similarity pipeline.
//!
//! ## Components
//!
//! - [`FeatureExtractor`] - Maps an element to its [`FeatureVector`]
//! - [`similarity`] - Weighted dot product, norm and cosine similarity
//! - [`Matcher`] - Scores every same-tag element against an anchor
//!
//! [`FeatureVector`]: elemsim_protocols::FeatureVector

pub mod extractor;
pub mod matcher;
pub mod similarity;

#[cfg(test)]
mod test_host;

pub use extractor::{extract_features, FeatureExtractor};
pub use matcher::{filter_above, matcher, rank, Matcher};
pub use similarity::{
    cosine_similarity, dot_product, dot_product_components, explain, norm, DotProductComponents,
    FieldContribution, SimilarityExplanation,
};
