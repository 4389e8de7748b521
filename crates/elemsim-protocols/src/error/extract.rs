//! Feature extraction errors.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractError {
    /// The element has no parent, so its sibling context is undefined.
    #[error("Element <{tag}> has no parent element")]
    MissingParent { tag: String },
}
