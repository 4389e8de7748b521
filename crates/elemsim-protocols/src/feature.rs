//! Feature vector data model.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Rendered box dimensions of an element.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct Layout {
    pub width: f64,
    pub height: f64,
}

impl Layout {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Named component of a [`FeatureVector`].
///
/// Scoring walks [`FeatureField::ALL`] in order, so adding a feature means
/// adding a variant here and a weight in [`crate::Weights`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FeatureField {
    Node,
    Parent,
    Children,
    ChildrenLength,
    SiblingsLength,
    Attributes,
    AttributesLength,
    Width,
    Height,
}

impl FeatureField {
    /// Every field, in scoring order.
    pub const ALL: [FeatureField; 9] = [
        FeatureField::Node,
        FeatureField::Parent,
        FeatureField::Children,
        FeatureField::ChildrenLength,
        FeatureField::SiblingsLength,
        FeatureField::Attributes,
        FeatureField::AttributesLength,
        FeatureField::Width,
        FeatureField::Height,
    ];

    /// Field name as it appears in serialized feature vectors.
    pub fn name(self) -> &'static str {
        match self {
            FeatureField::Node => "node",
            FeatureField::Parent => "parent",
            FeatureField::Children => "children",
            FeatureField::ChildrenLength => "childrenLength",
            FeatureField::SiblingsLength => "siblingsLength",
            FeatureField::Attributes => "attributes",
            FeatureField::AttributesLength => "attributesLength",
            FeatureField::Width => "width",
            FeatureField::Height => "height",
        }
    }

    /// Whether the field depends on rendered layout.
    pub fn is_layout(self) -> bool {
        matches!(self, FeatureField::Width | FeatureField::Height)
    }
}

impl fmt::Display for FeatureField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Structural fingerprint of a single element.
///
/// Holds no reference back to the element it was extracted from. The length
/// fields are derived from the sequences at construction, so
/// `children().len() == children_length()` and
/// `attributes().len() == attributes_length()` always hold.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureVector {
    node: String,
    parent: String,
    children: Vec<String>,
    children_length: usize,
    siblings_length: usize,
    attributes: Vec<String>,
    attributes_length: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    height: Option<f64>,
}

impl FeatureVector {
    /// Build a feature vector.
    ///
    /// `attributes` is the flattened `[name, value, ...]` sequence; its length
    /// becomes `attributesLength`, which is twice the attribute count.
    pub fn new(
        node: impl Into<String>,
        parent: impl Into<String>,
        children: Vec<String>,
        siblings_length: usize,
        attributes: Vec<String>,
        layout: Option<Layout>,
    ) -> Self {
        Self {
            node: node.into(),
            parent: parent.into(),
            children_length: children.len(),
            children,
            siblings_length,
            attributes_length: attributes.len(),
            attributes,
            width: layout.map(|l| l.width),
            height: layout.map(|l| l.height),
        }
    }

    pub fn node(&self) -> &str {
        &self.node
    }

    pub fn parent(&self) -> &str {
        &self.parent
    }

    pub fn children(&self) -> &[String] {
        &self.children
    }

    pub fn children_length(&self) -> usize {
        self.children_length
    }

    pub fn siblings_length(&self) -> usize {
        self.siblings_length
    }

    pub fn attributes(&self) -> &[String] {
        &self.attributes
    }

    pub fn attributes_length(&self) -> usize {
        self.attributes_length
    }

    pub fn width(&self) -> Option<f64> {
        self.width
    }

    pub fn height(&self) -> Option<f64> {
        self.height
    }

    /// Rendered dimensions, if both were recorded.
    pub fn layout(&self) -> Option<Layout> {
        match (self.width, self.height) {
            (Some(width), Some(height)) => Some(Layout { width, height }),
            _ => None,
        }
    }
}

#[cfg(test)]
#[path = "feature_tests.rs"]
mod tests;
