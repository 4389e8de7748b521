//! Extraction options.

use serde::{Deserialize, Serialize};

/// Which children count toward `children` and `siblingsLength`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChildMode {
    /// Element children only.
    #[default]
    Elements,
    /// Every child node, including text and comment nodes.
    AllNodes,
}

/// Options for feature extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExtractOptions {
    #[serde(default)]
    pub child_mode: ChildMode,
}

impl ExtractOptions {
    pub fn with_child_mode(child_mode: ChildMode) -> Self {
        Self { child_mode }
    }
}
