// Evaluator safety limits
//
// Bounds the work a single formula can demand:
// - Formula length in characters
// - Recursion depth of the grammar rules (stack usage)
// - Magnitude of a repeat count
//
// Defaults are permissive and can be overridden via molweight.toml

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Evaluator limits with permissive defaults
#[derive(Debug, Clone, PartialEq)]
pub struct EvaluatorLimits {
    pub max_formula_length: usize,  // Maximum formula length in characters
    pub max_recursion_depth: usize, // Maximum nested rule activations
    pub max_count: u64,             // Largest accepted repeat count
}

impl Default for EvaluatorLimits {
    fn default() -> Self {
        Self {
            max_formula_length: 10_000,
            max_recursion_depth: 4_096,
            max_count: i32::MAX as u64,
        }
    }
}

impl EvaluatorLimits {
    /// Load limits from a TOML file, falling back to defaults
    ///
    /// Returns error only if the file is unreadable or malformed, not if it is missing
    pub fn from_project_toml<P: AsRef<Path>>(path: P) -> Result<Self, LimitError> {
        let path = path.as_ref();

        if !path.exists() {
            tracing::debug!(path = %path.display(), "no limits file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|source| LimitError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let config: ProjectConfig = toml::from_str(&content).map_err(|source| LimitError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        // Only override specified values
        let mut limits = Self::default();

        if let Some(limits_config) = config.limits {
            if let Some(v) = limits_config.max_formula_length {
                limits.max_formula_length = v;
            }
            if let Some(v) = limits_config.max_recursion_depth {
                limits.max_recursion_depth = v;
            }
            if let Some(v) = limits_config.max_count {
                limits.max_count = v;
            }
        }

        tracing::debug!(path = %path.display(), ?limits, "loaded limits");
        Ok(limits)
    }

    /// Validate that all limits are positive and not absurdly large
    pub fn validate(&self) -> Result<(), LimitError> {
        if self.max_formula_length == 0 || self.max_formula_length > 1_000_000 {
            return Err(LimitError::invalid(
                "max_formula_length",
                self.max_formula_length as u64,
            ));
        }

        if self.max_recursion_depth == 0 || self.max_recursion_depth > 100_000 {
            return Err(LimitError::invalid(
                "max_recursion_depth",
                self.max_recursion_depth as u64,
            ));
        }

        if self.max_count == 0 {
            return Err(LimitError::invalid("max_count", self.max_count));
        }

        Ok(())
    }
}

/// TOML configuration structures for deserialization
#[derive(Debug, Deserialize)]
struct ProjectConfig {
    limits: Option<LimitsConfig>,
}

#[derive(Debug, Deserialize)]
struct LimitsConfig {
    max_formula_length: Option<usize>,
    max_recursion_depth: Option<usize>,
    max_count: Option<u64>,
}

/// Error type for limit loading and validation
#[derive(Debug, Error)]
pub enum LimitError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("invalid limit '{name}': {value} (must be positive and reasonable)")]
    Invalid { name: &'static str, value: u64 },
}

impl LimitError {
    fn invalid(name: &'static str, value: u64) -> Self {
        Self::Invalid { name, value }
    }
}
