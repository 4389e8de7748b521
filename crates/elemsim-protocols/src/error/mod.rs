//! Error types for the elemsim protocol layer.

mod extract;
mod matching;
mod weights;

pub use extract::*;
pub use matching::*;
pub use weights::*;
