//! Weight configuration errors.

use thiserror::Error;

use crate::feature::FeatureField;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum WeightsError {
    #[error("Weight for {field} is negative: {value}")]
    Negative { field: FeatureField, value: f64 },

    #[error("Weight for {field} is not finite: {value}")]
    NonFinite { field: FeatureField, value: f64 },
}
