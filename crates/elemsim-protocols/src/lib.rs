//! # elemsim Protocols
//!
//! Shared definitions for the elemsim element-similarity pipeline.
//! Contains only data types and interface definitions - no algorithms.
//!
//! ## Core Types
//!
//! - [`FeatureVector`] - Structural fingerprint of one element
//! - [`Weights`] - Per-field weight configuration used when scoring
//! - [`DomHost`] - Trait a document implementation provides to the extractor
//! - [`Match`] - An element paired with its similarity to an anchor

pub mod error;
pub mod feature;
pub mod host;
pub mod matching;
pub mod options;
pub mod weights;

pub use error::{ExtractError, MatchError, UndefinedScoreWarning, WeightsError};
pub use feature::{FeatureField, FeatureVector, Layout};
pub use host::{Attribute, DomHost};
pub use matching::Match;
pub use options::{ChildMode, ExtractOptions};
pub use weights::Weights;
