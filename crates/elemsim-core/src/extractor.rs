//! Feature extraction.
//!
//! Reads the structural context of one element out of a [`DomHost`] and
//! returns it as a detached [`FeatureVector`].

use elemsim_protocols::{ChildMode, DomHost, ExtractError, ExtractOptions, FeatureVector};

/// Maps elements to feature vectors.
#[derive(Debug, Clone, Copy, Default)]
pub struct FeatureExtractor {
    options: ExtractOptions,
}

impl FeatureExtractor {
    pub fn new(options: ExtractOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> ExtractOptions {
        self.options
    }

    /// Extract the feature vector of `node`.
    ///
    /// Fails with [`ExtractError::MissingParent`] for the document element,
    /// since it has no siblings to be compared against.
    pub fn extract<H: DomHost>(
        &self,
        host: &H,
        node: H::Node,
    ) -> Result<FeatureVector, ExtractError> {
        let name = host.tag_name(node);

        let children: Vec<String> = self
            .child_list(host, node)
            .into_iter()
            .map(|child| host.tag_name(child).to_string())
            .collect();

        let parent = host.parent(node).ok_or_else(|| ExtractError::MissingParent {
            tag: name.to_string(),
        })?;
        let siblings_length = self.child_list(host, parent).len();

        let mut attributes = Vec::new();
        for attribute in host.attributes(node) {
            let Some(value) = attribute.value else {
                continue;
            };
            attributes.push(attribute.name.to_string());
            attributes.push(value.to_string());
        }

        Ok(FeatureVector::new(
            name,
            host.tag_name(parent),
            children,
            siblings_length,
            attributes,
            host.layout(node),
        ))
    }

    fn child_list<H: DomHost>(&self, host: &H, node: H::Node) -> Vec<H::Node> {
        match self.options.child_mode {
            ChildMode::Elements => host.children(node),
            ChildMode::AllNodes => host.child_nodes(node),
        }
    }
}

/// Extract with default options.
pub fn extract_features<H: DomHost>(
    host: &H,
    node: H::Node,
) -> Result<FeatureVector, ExtractError> {
    FeatureExtractor::default().extract(host, node)
}

#[cfg(test)]
#[path = "extractor_tests.rs"]
mod tests;
