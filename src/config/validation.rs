//! Configuration validation.
//!
//! Every parameter group validates itself before the pipeline touches any
//! input; an invalid combination (bad geometry, zero capacity, thresholds
//! outside [0, 1]) is fatal for the run.

use super::types::*;

// ============================================================================
// Configuration Error
// ============================================================================

/// Error type for configuration validation.
#[derive(Debug, Clone)]
pub struct ConfigError {
    /// The field that failed validation
    pub field: String,
    /// Description of the validation error
    pub message: String,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Validation Trait
// ============================================================================

/// Trait for validatable configuration types.
pub trait Validatable {
    /// Validate the configuration, returning any errors found.
    fn validate(&self) -> Vec<ConfigError>;

    /// Check if the configuration is valid.
    fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}

// ============================================================================
// Validation Implementations
// ============================================================================

impl Validatable for LshParams {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        if self.num_bands == 0 {
            errors.push(ConfigError {
                field: "lsh.num_bands".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        if self.rows_per_band == 0 {
            errors.push(ConfigError {
                field: "lsh.rows_per_band".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        if self.num_hashes != self.num_bands * self.rows_per_band {
            errors.push(ConfigError {
                field: "lsh.num_hashes".to_string(),
                message: format!(
                    "num_hashes ({}) must equal num_bands ({}) * rows_per_band ({})",
                    self.num_hashes, self.num_bands, self.rows_per_band
                ),
            });
        }
        if self.shingle_size == 0 {
            errors.push(ConfigError {
                field: "lsh.shingle_size".to_string(),
                message: "must be at least 1".to_string(),
            });
        }

        errors
    }
}

impl Validatable for BloomParams {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        if self.capacity == 0 {
            errors.push(ConfigError {
                field: "bloom.capacity".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        if !(self.fp_rate > 0.0 && self.fp_rate < 1.0) {
            errors.push(ConfigError {
                field: "bloom.fp_rate".to_string(),
                message: format!("must be in (0, 1), got {}", self.fp_rate),
            });
        }

        errors
    }
}

impl Validatable for RefinementConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        if !(0.0..=1.0).contains(&self.threshold) {
            errors.push(ConfigError {
                field: "refinement.threshold".to_string(),
                message: format!("must be between 0.0 and 1.0, got {}", self.threshold),
            });
        }

        errors
    }
}

impl Validatable for BehaviorConfig {
    fn validate(&self) -> Vec<ConfigError> {
        // Boolean flags need no validation
        Vec::new()
    }
}

impl Validatable for AppConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        errors.extend(self.lsh.validate());
        errors.extend(self.bloom.validate());
        errors.extend(self.refinement.validate());
        errors.extend(self.behavior.validate());
        errors
    }
}
