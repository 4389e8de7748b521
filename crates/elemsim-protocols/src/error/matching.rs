//! Matcher errors and score conditions.

use thiserror::Error;

use super::{ExtractError, WeightsError};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum MatchError {
    #[error("Cannot extract anchor features: {0}")]
    Anchor(#[from] ExtractError),

    #[error("Invalid weights: {0}")]
    Weights(#[from] WeightsError),
}

/// A cosine similarity that came out as NaN because one of the vectors has
/// zero norm under the active weights.
///
/// Not a failure of the computation; callers filtering on a threshold treat
/// it as "no match".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Similarity score is undefined: a feature vector has zero norm under the active weights")]
pub struct UndefinedScoreWarning;
