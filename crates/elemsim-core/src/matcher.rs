//! Anchor matching.
//!
//! Scores every element that shares the anchor's tag name. Candidates are
//! returned in document order with their raw scores; thresholding and
//! ranking are left to the caller ([`filter_above`], [`rank`]).

use std::cmp::Ordering;

use tracing::{debug, info, warn};

use elemsim_protocols::{DomHost, ExtractOptions, Match, MatchError, Weights};

use crate::extractor::FeatureExtractor;
use crate::similarity::cosine_similarity;

/// Scores candidates against an anchor with a fixed weight configuration.
#[derive(Debug, Clone)]
pub struct Matcher {
    weights: Weights,
    extractor: FeatureExtractor,
}

impl Matcher {
    /// Create a matcher. Fails if any weight is negative or not finite.
    pub fn new(weights: Weights, options: ExtractOptions) -> Result<Self, MatchError> {
        weights.validate()?;
        Ok(Self {
            weights,
            extractor: FeatureExtractor::new(options),
        })
    }

    pub fn weights(&self) -> &Weights {
        &self.weights
    }

    pub fn extractor(&self) -> &FeatureExtractor {
        &self.extractor
    }

    /// Weights in effect for `host`: layout weights are dropped when the host
    /// has no layout engine.
    pub fn effective_weights<H: DomHost>(&self, host: &H) -> Weights {
        if host.has_layout() {
            self.weights
        } else {
            self.weights.without_layout()
        }
    }

    /// Score every element with the anchor's tag name, in document order.
    ///
    /// The anchor itself is among the candidates. A candidate whose features
    /// cannot be extracted is logged and left out; only a failure on the
    /// anchor aborts the scan.
    pub fn matches<H: DomHost>(
        &self,
        host: &H,
        anchor: H::Node,
    ) -> Result<Vec<Match<H::Node>>, MatchError> {
        let weights = self.effective_weights(host);
        let anchor_features = self.extractor.extract(host, anchor)?;

        let candidates = host.elements_by_tag_name(anchor_features.node());
        let mut results = Vec::with_capacity(candidates.len());
        let mut skipped = 0usize;

        for candidate in candidates {
            let features = match self.extractor.extract(host, candidate) {
                Ok(features) => features,
                Err(e) => {
                    warn!(?candidate, error = %e, "Skipping candidate");
                    skipped += 1;
                    continue;
                }
            };
            let score = cosine_similarity(&anchor_features, &features, &weights);
            debug!(?candidate, score, "Scored candidate");
            results.push(Match::new(candidate, score));
        }

        info!(
            tag = anchor_features.node(),
            scored = results.len(),
            skipped,
            "Matched anchor"
        );
        Ok(results)
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self {
            weights: Weights::default(),
            extractor: FeatureExtractor::default(),
        }
    }
}

/// Score candidates for `anchor` with the default weights and options.
pub fn matcher<H: DomHost>(host: &H, anchor: H::Node) -> Result<Vec<Match<H::Node>>, MatchError> {
    Matcher::default().matches(host, anchor)
}

/// Keep matches scoring strictly above `threshold`.
///
/// Undefined (NaN) scores never pass.
pub fn filter_above<N: Copy + std::fmt::Debug>(matches: &[Match<N>], threshold: f64) -> Vec<Match<N>> {
    matches
        .iter()
        .filter(|m| {
            if let Err(warning) = m.defined_score() {
                debug!(element = ?m.element(), %warning, "Dropping match");
                return false;
            }
            m.is_above(threshold)
        })
        .copied()
        .collect()
}

/// Sort matches by descending score. Undefined scores go last; ties keep
/// document order.
pub fn rank<N: Copy>(matches: &[Match<N>]) -> Vec<Match<N>> {
    let mut ranked = matches.to_vec();
    ranked.sort_by(|a, b| match (a.score().is_nan(), b.score().is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => b.score().partial_cmp(&a.score()).unwrap_or(Ordering::Equal),
    });
    ranked
}

#[cfg(test)]
#[path = "matcher_tests.rs"]
mod tests;
