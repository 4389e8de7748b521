//! Flattened snapshot document.

use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::io::Read;
use std::path::Path;

use serde::Serialize;
use tracing::{debug, warn};

use elemsim_protocols::{Attribute, DomHost, Layout};

use crate::error::SnapshotError;
use crate::protocol::{node_type, DomNode, Snapshot, SnapshotFile};

/// Index of a node in document (pre-order) order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct NodeId(pub usize);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone)]
struct Entry {
    node_type: i64,
    name: String,
    value: Option<String>,
    backend_node_id: i64,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    attributes: Vec<(String, Option<String>)>,
    layout: Option<Layout>,
}

impl Entry {
    fn is_element(&self) -> bool {
        self.node_type == node_type::ELEMENT
    }
}

/// An immutable document tree built from a [`Snapshot`].
#[derive(Debug, Clone)]
pub struct SnapshotDocument {
    nodes: Vec<Entry>,
    has_layout: bool,
}

impl SnapshotDocument {
    /// Parse a snapshot from JSON text.
    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        let file: SnapshotFile = serde_json::from_str(json)?;
        Self::from_snapshot(file.into())
    }

    /// Parse a snapshot from a reader.
    pub fn from_reader(reader: impl Read) -> Result<Self, SnapshotError> {
        let file: SnapshotFile = serde_json::from_reader(reader)?;
        Self::from_snapshot(file.into())
    }

    /// Load a snapshot file.
    pub fn load(path: &Path) -> Result<Self, SnapshotError> {
        let content = fs::read_to_string(path)?;
        let document = Self::from_json(&content)?;
        debug!(
            path = %path.display(),
            nodes = document.len(),
            layout = document.has_layout,
            "Loaded snapshot"
        );
        Ok(document)
    }

    pub fn from_snapshot(snapshot: Snapshot) -> Result<Self, SnapshotError> {
        let mut layout = HashMap::with_capacity(snapshot.layout.len());
        for (key, size) in snapshot.layout {
            match key.parse::<i64>() {
                Ok(backend_node_id) => {
                    layout.insert(backend_node_id, size);
                }
                Err(_) => warn!(key = %key, "Ignoring layout entry with non-numeric backendNodeId"),
            }
        }
        Self::from_root(snapshot.root, layout)
    }

    /// Flatten a node tree. `layout` maps `backendNodeId` to box size.
    pub fn from_root(root: DomNode, layout: HashMap<i64, Layout>) -> Result<Self, SnapshotError> {
        let has_layout = !layout.is_empty();
        let mut nodes: Vec<Entry> = Vec::new();
        let mut stack: Vec<(DomNode, Option<NodeId>)> = vec![(root, None)];

        while let Some((node, parent)) = stack.pop() {
            let id = NodeId(nodes.len());
            if let Some(p) = parent {
                nodes[p.0].children.push(id);
            }

            let attributes = node
                .attributes
                .as_deref()
                .map(pair_attributes)
                .unwrap_or_default();

            nodes.push(Entry {
                node_type: node.node_type,
                name: node.node_name,
                value: node.node_value,
                backend_node_id: node.backend_node_id,
                parent,
                children: Vec::new(),
                attributes,
                layout: layout.get(&node.backend_node_id).copied(),
            });

            if let Some(children) = node.children {
                for child in children.into_iter().rev() {
                    stack.push((child, Some(id)));
                }
            }
        }

        if !nodes.iter().any(Entry::is_element) {
            return Err(SnapshotError::Empty);
        }

        Ok(Self { nodes, has_layout })
    }

    /// Total number of nodes of every type.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The outermost element, usually `<html>`.
    pub fn document_element(&self) -> Option<NodeId> {
        self.nodes
            .iter()
            .position(Entry::is_element)
            .map(NodeId)
    }

    /// The `n`th element (zero-based, document order) with tag `tag`.
    pub fn find_nth(&self, tag: &str, n: usize) -> Option<NodeId> {
        self.elements_by_tag_name(tag).into_iter().nth(n)
    }

    pub fn is_element(&self, node: NodeId) -> bool {
        self.nodes[node.0].is_element()
    }

    pub fn backend_node_id(&self, node: NodeId) -> i64 {
        self.nodes[node.0].backend_node_id
    }

    pub fn attribute(&self, node: NodeId, name: &str) -> Option<&str> {
        self.nodes[node.0]
            .attributes
            .iter()
            .find(|(n, _)| n == name)
            .and_then(|(_, v)| v.as_deref())
    }

    /// Concatenated text of every descendant text node, whitespace collapsed.
    pub fn text_content(&self, node: NodeId) -> String {
        let mut parts = Vec::new();
        let mut stack = vec![node];
        while let Some(current) = stack.pop() {
            let entry = &self.nodes[current.0];
            if entry.node_type == node_type::TEXT {
                if let Some(ref value) = entry.value {
                    parts.extend(value.split_whitespace());
                }
            }
            stack.extend(entry.children.iter().rev());
        }
        parts.join(" ")
    }

    /// Short human-readable description: opening tag with `id`/`class`, and
    /// the start of the element's text.
    pub fn describe(&self, node: NodeId) -> String {
        let entry = &self.nodes[node.0];
        let tag = entry.name.to_ascii_lowercase();

        let mut parts = vec![format!("<{}", tag)];
        for name in ["id", "class"] {
            if let Some(value) = self.attribute(node, name) {
                parts.push(format!("{}=\"{}\"", name, value));
            }
        }
        let mut out = parts.join(" ");
        out.push('>');

        let text = self.text_content(node);
        if !text.is_empty() {
            let shown: String = if text.chars().count() > 50 {
                let head: String = text.chars().take(47).collect();
                format!("{}...", head)
            } else {
                text
            };
            out.push_str(&format!(" \"{}\"", shown));
        }
        out
    }
}

/// Pair up a flat CDP attribute list. A trailing name without a value is
/// kept with `None`.
fn pair_attributes(flat: &[String]) -> Vec<(String, Option<String>)> {
    flat.chunks(2)
        .map(|pair| (pair[0].clone(), pair.get(1).cloned()))
        .collect()
}

impl DomHost for SnapshotDocument {
    type Node = NodeId;

    fn tag_name(&self, node: NodeId) -> &str {
        &self.nodes[node.0].name
    }

    fn children(&self, node: NodeId) -> Vec<NodeId> {
        self.nodes[node.0]
            .children
            .iter()
            .copied()
            .filter(|&c| self.nodes[c.0].is_element())
            .collect()
    }

    fn child_nodes(&self, node: NodeId) -> Vec<NodeId> {
        self.nodes[node.0].children.clone()
    }

    fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.nodes[node.0]
            .parent
            .filter(|&p| self.nodes[p.0].is_element())
    }

    fn attributes(&self, node: NodeId) -> Vec<Attribute<'_>> {
        self.nodes[node.0]
            .attributes
            .iter()
            .map(|(name, value)| Attribute::new(name, value.as_deref()))
            .collect()
    }

    fn layout(&self, node: NodeId) -> Option<Layout> {
        self.nodes[node.0].layout
    }

    fn has_layout(&self) -> bool {
        self.has_layout
    }

    fn elements_by_tag_name(&self, tag: &str) -> Vec<NodeId> {
        self.nodes
            .iter()
            .enumerate()
            .filter(|(_, entry)| entry.is_element() && entry.name.eq_ignore_ascii_case(tag))
            .map(|(i, _)| NodeId(i))
            .collect()
    }
}

#[cfg(test)]
#[path = "document_tests.rs"]
mod tests;
