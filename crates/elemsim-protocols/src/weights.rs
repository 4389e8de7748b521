//! Weight configuration.

use serde::{Deserialize, Serialize};

use crate::error::WeightsError;
use crate::feature::FeatureField;

/// One non-negative weight per [`FeatureField`].
///
/// Weights live here rather than on individual feature values, so two vectors
/// scored together always share the same weighting.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct Weights {
    pub node: f64,
    pub parent: f64,
    pub children: f64,
    pub children_length: f64,
    pub siblings_length: f64,
    pub attributes: f64,
    pub attributes_length: f64,
    pub width: f64,
    pub height: f64,
}

impl Default for Weights {
    fn default() -> Self {
        Self {
            node: 0.1,
            parent: 0.1,
            children: 100.0,
            children_length: 100.0,
            siblings_length: 1.0,
            attributes: 100.0,
            attributes_length: 10.0,
            width: 20.0,
            height: 20.0,
        }
    }
}

impl Weights {
    /// All weights set to zero.
    pub fn zero() -> Self {
        Self {
            node: 0.0,
            parent: 0.0,
            children: 0.0,
            children_length: 0.0,
            siblings_length: 0.0,
            attributes: 0.0,
            attributes_length: 0.0,
            width: 0.0,
            height: 0.0,
        }
    }

    /// Weight of a single field.
    pub fn get(&self, field: FeatureField) -> f64 {
        match field {
            FeatureField::Node => self.node,
            FeatureField::Parent => self.parent,
            FeatureField::Children => self.children,
            FeatureField::ChildrenLength => self.children_length,
            FeatureField::SiblingsLength => self.siblings_length,
            FeatureField::Attributes => self.attributes,
            FeatureField::AttributesLength => self.attributes_length,
            FeatureField::Width => self.width,
            FeatureField::Height => self.height,
        }
    }

    /// Return a copy with `field` set to `value`.
    pub fn with(mut self, field: FeatureField, value: f64) -> Self {
        let slot = match field {
            FeatureField::Node => &mut self.node,
            FeatureField::Parent => &mut self.parent,
            FeatureField::Children => &mut self.children,
            FeatureField::ChildrenLength => &mut self.children_length,
            FeatureField::SiblingsLength => &mut self.siblings_length,
            FeatureField::Attributes => &mut self.attributes,
            FeatureField::AttributesLength => &mut self.attributes_length,
            FeatureField::Width => &mut self.width,
            FeatureField::Height => &mut self.height,
        };
        *slot = value;
        self
    }

    /// Copy with the layout-dependent weights zeroed, for hosts without a
    /// layout engine.
    pub fn without_layout(self) -> Self {
        FeatureField::ALL
            .into_iter()
            .filter(|field| field.is_layout())
            .fold(self, |weights, field| weights.with(field, 0.0))
    }

    /// Whether every weight is zero, in which case every score is undefined.
    pub fn is_zero(&self) -> bool {
        FeatureField::ALL.iter().all(|&f| self.get(f) == 0.0)
    }

    /// Check that every weight is finite and non-negative.
    pub fn validate(&self) -> Result<(), WeightsError> {
        for field in FeatureField::ALL {
            let value = self.get(field);
            if !value.is_finite() {
                return Err(WeightsError::NonFinite { field, value });
            }
            if value < 0.0 {
                return Err(WeightsError::Negative { field, value });
            }
        }
        Ok(())
    }
}
