//! Match results.

use serde::Serialize;

use crate::error::UndefinedScoreWarning;

/// An element paired with its cosine similarity to an anchor.
///
/// Fixed once produced by a matcher.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Match<N> {
    element: N,
    score: f64,
}

impl<N: Copy> Match<N> {
    pub fn element(&self) -> N {
        self.element
    }
}

impl<N> Match<N> {
    pub fn new(element: N, score: f64) -> Self {
        Self { element, score }
    }

    /// Raw score. NaN when either vector had zero norm.
    pub fn score(&self) -> f64 {
        self.score
    }

    /// The score, unless a zero-norm vector left it undefined.
    pub fn defined_score(&self) -> Result<f64, UndefinedScoreWarning> {
        if self.score.is_nan() {
            Err(UndefinedScoreWarning)
        } else {
            Ok(self.score)
        }
    }

    /// Whether the score is defined and strictly above `threshold`.
    pub fn is_above(&self, threshold: f64) -> bool {
        self.defined_score().is_ok_and(|score| score > threshold)
    }
}
