//! Configuration validation.

use elemsim_protocols::FeatureField;

use crate::error::ConfigError;
use crate::schema::Config;

/// Validation result.
#[derive(Debug, Default)]
pub struct ValidationResult {
    pub errors: Vec<ValidationError>,
    pub warnings: Vec<ValidationWarning>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn add_error(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    pub fn add_warning(&mut self, warning: ValidationWarning) {
        self.warnings.push(warning);
    }

    /// Turn the first error, if any, into a [`ConfigError`].
    pub fn into_result(self) -> Result<Vec<ValidationWarning>, ConfigError> {
        match self.errors.into_iter().next() {
            Some(error) => Err(ConfigError::InvalidValue {
                field: error.path,
                message: error.message,
            }),
            None => Ok(self.warnings),
        }
    }
}

/// A validation error.
#[derive(Debug)]
pub struct ValidationError {
    pub path: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// A validation warning.
#[derive(Debug)]
pub struct ValidationWarning {
    pub path: String,
    pub message: String,
}

impl ValidationWarning {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

const LEVELS: [&str; 6] = ["trace", "debug", "info", "warn", "error", "off"];

/// Configuration validator.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate the configuration.
    pub fn validate(config: &Config) -> ValidationResult {
        let mut result = ValidationResult::default();

        Self::validate_weights(config, &mut result);
        Self::validate_matcher(config, &mut result);
        Self::validate_logging(config, &mut result);

        result
    }

    fn validate_weights(config: &Config, result: &mut ValidationResult) {
        for field in FeatureField::ALL {
            let value = config.weights.get(field);
            let path = format!("weights.{}", field);
            if !value.is_finite() {
                result.add_error(ValidationError::new(path, "weight must be finite"));
            } else if value < 0.0 {
                result.add_error(ValidationError::new(
                    path,
                    format!("weight must not be negative, got {}", value),
                ));
            }
        }

        if config.weights.is_zero() {
            result.add_warning(ValidationWarning::new(
                "weights",
                "every weight is zero, all similarity scores will be undefined",
            ));
        }
    }

    fn validate_matcher(config: &Config, result: &mut ValidationResult) {
        let threshold = config.matcher.threshold;
        if !(0.0..=1.0).contains(&threshold) {
            result.add_error(ValidationError::new(
                "matcher.threshold",
                format!("threshold must be within [0, 1], got {}", threshold),
            ));
        } else if threshold == 1.0 {
            result.add_warning(ValidationWarning::new(
                "matcher.threshold",
                "threshold 1.0 can never be exceeded, no match will be reported",
            ));
        }
    }

    fn validate_logging(config: &Config, result: &mut ValidationResult) {
        let level = config.logging.level.trim();
        if level.is_empty() {
            result.add_error(ValidationError::new(
                "logging.level",
                "level cannot be empty",
            ));
            return;
        }

        // Full filter directives like "elemsim_core=debug" are passed through.
        let is_directive = level.contains('=') || level.contains(',');
        if !is_directive && !LEVELS.contains(&level.to_ascii_lowercase().as_str()) {
            result.add_warning(ValidationWarning::new(
                "logging.level",
                format!("Unknown log level '{}', valid values: {:?}", level, LEVELS),
            ));
        }
    }
}

#[cfg(test)]
#[path = "validator_tests.rs"]
mod tests;
