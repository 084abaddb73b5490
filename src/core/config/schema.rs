//! core::config::schema
//!
//! Configuration schema types.
//!
//! The same keys are accepted in the global file and in a campaign's
//! `.turbolift.toml`; the campaign file wins.
//!
//! # Validation
//!
//! Values are validated after parsing: a configured filename or work root
//! must not be empty.

use serde::Deserialize;

use super::ConfigError;

/// One configuration layer (global or campaign scope).
///
/// # Example
///
/// ```toml
/// repos_file = "repos.txt"
/// work_root = "work"
/// ```
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigLayer {
    /// Manifest filename, relative to the campaign directory
    pub repos_file: Option<String>,

    /// Directory checkouts are placed under
    pub work_root: Option<String>,
}

impl ConfigLayer {
    /// Validate the configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if any value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(repos_file) = &self.repos_file {
            if repos_file.trim().is_empty() {
                return Err(ConfigError::InvalidValue(
                    "repos_file cannot be empty".to_string(),
                ));
            }
        }

        if let Some(work_root) = &self.work_root {
            if work_root.trim().is_empty() {
                return Err(ConfigError::InvalidValue(
                    "work_root cannot be empty".to_string(),
                ));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_full() {
        let layer: ConfigLayer = toml::from_str(
            r#"
            repos_file = "batch.txt"
            work_root = "/scratch"
            "#,
        )
        .unwrap();
        assert_eq!(layer.repos_file.as_deref(), Some("batch.txt"));
        assert_eq!(layer.work_root.as_deref(), Some("/scratch"));
        assert!(layer.validate().is_ok());
    }

    #[test]
    fn empty_file_is_all_defaults() {
        let layer: ConfigLayer = toml::from_str("").unwrap();
        assert_eq!(layer, ConfigLayer::default());
    }

    #[test]
    fn unknown_fields_rejected() {
        assert!(toml::from_str::<ConfigLayer>("reviewers = [\"a\"]").is_err());
    }

    #[test]
    fn empty_values_rejected() {
        let layer = ConfigLayer {
            repos_file: Some(" ".into()),
            ..Default::default()
        };
        assert!(layer.validate().is_err());

        let layer = ConfigLayer {
            work_root: Some(String::new()),
            ..Default::default()
        };
        assert!(layer.validate().is_err());
    }
}
