//! Generator configuration parameters.

use serde::{Deserialize, Serialize};

/// Generator configuration parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Maximum triples sampled before giving up (default: 1000).
    /// Hard upper bound; generation always terminates after this many.
    pub max_attempts: u32,

    /// Number of double-digit tiles the filler aims for across the whole
    /// puzzle (default: 5, half of the tiles).
    /// Ignored when the difficulty disables double-digit operands.
    pub double_digit_quota: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            max_attempts: 1000,
            double_digit_quota: 5,
        }
    }
}

impl GeneratorConfig {
    /// Create a new config with a custom attempt cap.
    #[must_use]
    pub fn with_max_attempts(mut self, attempts: u32) -> Self {
        self.max_attempts = attempts;
        self
    }

    /// Create a new config with a custom double-digit quota.
    #[must_use]
    pub fn with_double_digit_quota(mut self, quota: usize) -> Self {
        self.double_digit_quota = quota;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GeneratorConfig::default();
        assert_eq!(config.max_attempts, 1000);
        assert_eq!(config.double_digit_quota, 5);
    }

    #[test]
    fn test_builder_pattern() {
        let config = GeneratorConfig::default()
            .with_max_attempts(10)
            .with_double_digit_quota(3);

        assert_eq!(config.max_attempts, 10);
        assert_eq!(config.double_digit_quota, 3);
    }

    #[test]
    fn test_serialization() {
        let config = GeneratorConfig::default().with_max_attempts(250);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: GeneratorConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
