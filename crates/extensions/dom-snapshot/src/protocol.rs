//! CDP DOM types as they appear in a snapshot file.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use elemsim_protocols::Layout;

/// `nodeType` values used by the DOM domain.
pub mod node_type {
    pub const ELEMENT: i64 = 1;
    pub const TEXT: i64 = 3;
}

/// DOM node from CDP.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DomNode {
    #[serde(default)]
    pub node_id: i64,
    #[serde(default)]
    pub backend_node_id: i64,
    pub node_type: i64,
    pub node_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub local_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node_value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<DomNode>>,
    /// Flat `[name1, value1, name2, value2, ...]` list.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<Vec<String>>,
}

impl DomNode {
    pub fn is_element(&self) -> bool {
        self.node_type == node_type::ELEMENT
    }
}

/// A `DOM.getDocument` result plus optional box sizes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    pub root: DomNode,
    /// Box sizes keyed by `backendNodeId`, as a decimal string.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub layout: HashMap<String, Layout>,
}

/// Accepted top-level shapes of a snapshot file.
#[derive(Deserialize)]
#[serde(untagged)]
pub(crate) enum SnapshotFile {
    Wrapped(Snapshot),
    Bare(DomNode),
}

impl From<SnapshotFile> for Snapshot {
    fn from(file: SnapshotFile) -> Self {
        match file {
            SnapshotFile::Wrapped(snapshot) => snapshot,
            SnapshotFile::Bare(root) => Snapshot {
                root,
                layout: HashMap::new(),
            },
        }
    }
}
