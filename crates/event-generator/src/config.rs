//! Factory configuration and YAML profiles.
//!
//! A profile is the YAML form of [`FactoryConfig`]:
//!
//! ```yaml
//! num_fields: 3
//! min_field_len: 8
//! max_field_len: 12
//! # Optional: pin the field names instead of generating them
//! fields: [Qbxmrt, Hvauelqzwk, Lpoeu]
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Error type for configuration problems.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Field value length bounds leave no room for a draw from `min..max`
    #[error("Invalid field length bounds: max_field_len ({max}) must be greater than min_field_len ({min})")]
    InvalidFieldLength { min: usize, max: usize },

    /// Pinned field names don't match the configured field count
    #[error("Profile pins {actual} field names but num_fields is {expected}")]
    FieldCountMismatch { expected: usize, actual: usize },

    /// A pinned field name is empty
    #[error("Pinned field name at position {0} is empty")]
    EmptyFieldName(usize),

    /// Error reading profile file
    #[error("Failed to read profile file: {0}")]
    IoError(#[from] std::io::Error),

    /// Error parsing YAML
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),
}

/// Shape of the events a factory produces.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FactoryConfig {
    /// Number of random fields, not counting `Timestamp`
    pub num_fields: usize,

    /// Shortest field value length (inclusive)
    pub min_field_len: usize,

    /// Longest field value length (exclusive)
    pub max_field_len: usize,

    /// Field names to use instead of generated ones
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<String>>,
}

impl Default for FactoryConfig {
    fn default() -> Self {
        Self {
            num_fields: 10,
            min_field_len: 16,
            max_field_len: 25,
            fields: None,
        }
    }
}

impl FactoryConfig {
    /// Create a configuration with generated field names.
    pub fn new(num_fields: usize, min_field_len: usize, max_field_len: usize) -> Self {
        Self {
            num_fields,
            min_field_len,
            max_field_len,
            fields: None,
        }
    }

    /// Pin the field names. `num_fields` follows the list length.
    pub fn with_fields(mut self, fields: Vec<String>) -> Self {
        self.num_fields = fields.len();
        self.fields = Some(fields);
        self
    }

    /// Check the configuration can be used to build a factory.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_field_len <= self.min_field_len {
            return Err(ConfigError::InvalidFieldLength {
                min: self.min_field_len,
                max: self.max_field_len,
            });
        }

        if let Some(fields) = &self.fields {
            if fields.len() != self.num_fields {
                return Err(ConfigError::FieldCountMismatch {
                    expected: self.num_fields,
                    actual: fields.len(),
                });
            }
            if let Some(pos) = fields.iter().position(|f| f.is_empty()) {
                return Err(ConfigError::EmptyFieldName(pos));
            }
        }

        Ok(())
    }

    /// Parse a profile from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(yaml)?;
        Ok(config)
    }

    /// Load a profile from a YAML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Render the configuration as a YAML profile.
    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        Ok(serde_yaml::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_is_valid() {
        assert!(FactoryConfig::default().validate().is_ok());
    }

    #[test]
    fn test_invalid_bounds() {
        let err = FactoryConfig::new(3, 12, 10).validate().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidFieldLength { min: 12, max: 10 }
        ));

        // Equal bounds leave an empty range too
        assert!(FactoryConfig::new(3, 8, 8).validate().is_err());
    }

    #[test]
    fn test_minimal_span_is_valid() {
        assert!(FactoryConfig::new(3, 8, 9).validate().is_ok());
        assert!(FactoryConfig::new(0, 0, 1).validate().is_ok());
    }

    #[test]
    fn test_field_count_mismatch() {
        let mut config = FactoryConfig::new(2, 1, 5).with_fields(vec!["Alpha".into()]);
        config.num_fields = 2;

        assert!(matches!(
            config.validate(),
            Err(ConfigError::FieldCountMismatch {
                expected: 2,
                actual: 1
            })
        ));
    }

    #[test]
    fn test_empty_pinned_name() {
        let config = FactoryConfig::new(0, 1, 5).with_fields(vec!["Alpha".into(), String::new()]);
        assert!(matches!(config.validate(), Err(ConfigError::EmptyFieldName(1))));
    }

    #[test]
    fn test_from_yaml() {
        let yaml = r#"
num_fields: 2
min_field_len: 4
max_field_len: 9
fields:
  - Alpha
  - Bravo
"#;
        let config = FactoryConfig::from_yaml(yaml).unwrap();

        assert_eq!(config.num_fields, 2);
        assert_eq!(config.min_field_len, 4);
        assert_eq!(config.max_field_len, 9);
        assert_eq!(
            config.fields,
            Some(vec!["Alpha".to_string(), "Bravo".to_string()])
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_yaml_without_fields() {
        let config =
            FactoryConfig::from_yaml("num_fields: 5\nmin_field_len: 1\nmax_field_len: 2\n").unwrap();

        assert_eq!(config, FactoryConfig::new(5, 1, 2));
        let yaml = config.to_yaml().unwrap();
        assert!(!yaml.lines().any(|line| line.starts_with("fields")));
    }

    #[test]
    fn test_yaml_roundtrip_with_fields() {
        let config = FactoryConfig::new(0, 3, 6).with_fields(vec!["Alpha".into(), "Bravo".into()]);
        let parsed = FactoryConfig::from_yaml(&config.to_yaml().unwrap()).unwrap();

        assert_eq!(parsed, config);
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "num_fields: 1\nmin_field_len: 2\nmax_field_len: 3").unwrap();

        let config = FactoryConfig::from_file(file.path()).unwrap();
        assert_eq!(config, FactoryConfig::new(1, 2, 3));
    }

    #[test]
    fn test_missing_file() {
        let result = FactoryConfig::from_file("/nonexistent/profile.yaml");
        assert!(matches!(result, Err(ConfigError::IoError(_))));
    }

    #[test]
    fn test_invalid_yaml() {
        let result = FactoryConfig::from_yaml("num_fields: [not, a, number]");
        assert!(matches!(result, Err(ConfigError::YamlError(_))));
    }
}
