//! Host document boundary.

use std::fmt::Debug;

use crate::feature::Layout;

/// A single attribute as the host reports it.
///
/// `value` is `None` when the host knows the attribute name but has no value
/// for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Attribute<'a> {
    pub name: &'a str,
    pub value: Option<&'a str>,
}

impl<'a> Attribute<'a> {
    pub fn new(name: &'a str, value: Option<&'a str>) -> Self {
        Self { name, value }
    }
}

/// Read access to a materialized document tree.
///
/// Implementations hand out cheap `Node` handles; the extractor never holds
/// onto them past a single call.
pub trait DomHost {
    /// Handle to a node in this document.
    type Node: Copy + Eq + Debug;

    /// Tag name of an element, or the node name (`#text`, `#comment`) of
    /// any other node.
    fn tag_name(&self, node: Self::Node) -> &str;

    /// Immediate element children, in document order.
    fn children(&self, node: Self::Node) -> Vec<Self::Node>;

    /// Immediate children of every node type, in document order.
    fn child_nodes(&self, node: Self::Node) -> Vec<Self::Node>;

    /// Parent element. `None` for the document element.
    fn parent(&self, node: Self::Node) -> Option<Self::Node>;

    /// Attributes in host iteration order.
    fn attributes(&self, node: Self::Node) -> Vec<Attribute<'_>>;

    /// Rendered size, if the host has one for this node.
    fn layout(&self, node: Self::Node) -> Option<Layout>;

    /// Whether this host carries layout metrics at all.
    fn has_layout(&self) -> bool;

    /// Every element whose tag name equals `tag`, ignoring ASCII case, in
    /// document order.
    fn elements_by_tag_name(&self, tag: &str) -> Vec<Self::Node>;
}
