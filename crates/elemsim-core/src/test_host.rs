//! In-memory document used by unit tests.
//!
//! Nodes must be added in document order; `elements_by_tag_name` returns them
//! in insertion order.

use elemsim_protocols::{Attribute, DomHost, Layout};

struct TestNode {
    name: String,
    element: bool,
    parent: Option<usize>,
    children: Vec<usize>,
    attributes: Vec<(String, Option<String>)>,
    layout: Option<Layout>,
}

#[derive(Default)]
pub(crate) struct TestHost {
    nodes: Vec<TestNode>,
    has_layout: bool,
}

impl TestHost {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn element(&mut self, parent: Option<usize>, name: &str, attrs: &[(&str, &str)]) -> usize {
        let attributes = attrs
            .iter()
            .map(|(n, v)| (n.to_string(), Some(v.to_string())))
            .collect();
        self.push(parent, name, true, attributes)
    }

    pub(crate) fn text(&mut self, parent: usize) -> usize {
        self.push(Some(parent), "#text", false, Vec::new())
    }

    pub(crate) fn valueless_attribute(&mut self, node: usize, name: &str) {
        self.nodes[node].attributes.push((name.to_string(), None));
    }

    pub(crate) fn set_layout(&mut self, node: usize, layout: Layout) {
        self.has_layout = true;
        self.nodes[node].layout = Some(layout);
    }

    fn push(
        &mut self,
        parent: Option<usize>,
        name: &str,
        element: bool,
        attributes: Vec<(String, Option<String>)>,
    ) -> usize {
        let id = self.nodes.len();
        self.nodes.push(TestNode {
            name: name.to_string(),
            element,
            parent,
            children: Vec::new(),
            attributes,
            layout: None,
        });
        if let Some(p) = parent {
            self.nodes[p].children.push(id);
        }
        id
    }
}

impl DomHost for TestHost {
    type Node = usize;

    fn tag_name(&self, node: usize) -> &str {
        &self.nodes[node].name
    }

    fn children(&self, node: usize) -> Vec<usize> {
        self.nodes[node]
            .children
            .iter()
            .copied()
            .filter(|&c| self.nodes[c].element)
            .collect()
    }

    fn child_nodes(&self, node: usize) -> Vec<usize> {
        self.nodes[node].children.clone()
    }

    fn parent(&self, node: usize) -> Option<usize> {
        self.nodes[node].parent
    }

    fn attributes(&self, node: usize) -> Vec<Attribute<'_>> {
        self.nodes[node]
            .attributes
            .iter()
            .map(|(n, v)| Attribute::new(n, v.as_deref()))
            .collect()
    }

    fn layout(&self, node: usize) -> Option<Layout> {
        self.nodes[node].layout
    }

    fn has_layout(&self) -> bool {
        self.has_layout
    }

    fn elements_by_tag_name(&self, tag: &str) -> Vec<usize> {
        self.nodes
            .iter()
            .enumerate()
            .filter(|(_, n)| n.element && n.name.eq_ignore_ascii_case(tag))
            .map(|(i, _)| i)
            .collect()
    }
}
