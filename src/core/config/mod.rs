//! core::config
//!
//! Configuration schema and loading.
//!
//! # Overview
//!
//! Two configuration scopes:
//! - **Global**: User-level settings
//! - **Campaign**: `.turbolift.toml` in the campaign directory
//!
//! # Precedence
//!
//! Configuration values are resolved in this order (later overrides earlier):
//! 1. Default values
//! 2. Global config file
//! 3. Campaign config file
//! 4. CLI flags (not handled here)
//!
//! # Global Config Locations
//!
//! Searched in order:
//! 1. `$TURBOLIFT_CONFIG` if set
//! 2. `$XDG_CONFIG_HOME/turbolift/config.toml`
//! 3. `~/.turbolift/config.toml`
//!
//! # Example
//!
//! ```no_run
//! use turbolift::core::config::Config;
//! use std::path::Path;
//!
//! let result = Config::load(Some(Path::new("/campaigns/bump-deps"))).unwrap();
//! let config = result.config;
//!
//! println!("Manifest: {}", config.repos_file());
//! println!("Work root: {}", config.work_root());
//! ```

pub mod schema;

pub use schema::ConfigLayer;

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use super::manifest::DEFAULT_MANIFEST;
use super::paths::{CampaignPaths, DEFAULT_WORK_ROOT};

/// Environment variable naming an explicit global config file.
pub const CONFIG_ENV: &str = "TURBOLIFT_CONFIG";

/// Errors from configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: PathBuf, message: String },

    #[error("invalid config value: {0}")]
    InvalidValue(String),

    #[error("home directory not found")]
    NoHomeDir,
}

/// Warnings generated during config loading.
#[derive(Debug, Clone)]
pub struct ConfigWarning {
    /// The warning message.
    pub message: String,
    /// The path that triggered the warning.
    pub path: PathBuf,
}

/// Result of loading configuration.
#[derive(Debug)]
pub struct ConfigLoadResult {
    /// The loaded configuration.
    pub config: Config,
    /// Any warnings generated during loading.
    pub warnings: Vec<ConfigWarning>,
}

/// Merged configuration from all sources.
///
/// Accessors apply precedence: campaign config overrides global config,
/// which overrides the defaults.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Global configuration
    pub global: ConfigLayer,
    /// Campaign configuration (if present)
    pub campaign: Option<ConfigLayer>,
    global_path: Option<PathBuf>,
    campaign_path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from default locations.
    ///
    /// If `campaign_dir` is provided, also loads its `.turbolift.toml`.
    ///
    /// # Errors
    ///
    /// Returns an error if config files exist but cannot be parsed.
    /// Missing config files are not an error (defaults are used).
    pub fn load(campaign_dir: Option<&Path>) -> Result<ConfigLoadResult, ConfigError> {
        let mut warnings = Vec::new();
        let global_path = Self::find_global(&mut warnings);
        Self::load_from(global_path.as_deref(), campaign_dir, warnings)
    }

    /// Load configuration from an explicit global file path.
    ///
    /// `global_path` of `None` means no global config.
    pub fn load_from(
        global_path: Option<&Path>,
        campaign_dir: Option<&Path>,
        warnings: Vec<ConfigWarning>,
    ) -> Result<ConfigLoadResult, ConfigError> {
        let global = match global_path {
            Some(path) => Self::read_layer(path)?,
            None => ConfigLayer::default(),
        };

        let campaign_path = campaign_dir
            .map(CampaignPaths::config_path_in)
            .filter(|path| path.exists());
        let campaign = match &campaign_path {
            Some(path) => Some(Self::read_layer(path)?),
            None => None,
        };

        global.validate()?;
        if let Some(ref c) = campaign {
            c.validate()?;
        }

        Ok(ConfigLoadResult {
            config: Config {
                global,
                campaign,
                global_path: global_path.map(Path::to_path_buf),
                campaign_path,
            },
            warnings,
        })
    }

    /// Locate the global config file, if any.
    fn find_global(warnings: &mut Vec<ConfigWarning>) -> Option<PathBuf> {
        // 1. Check $TURBOLIFT_CONFIG
        if let Ok(path) = std::env::var(CONFIG_ENV) {
            let path = PathBuf::from(path);
            if path.exists() {
                return Some(path);
            }
            warnings.push(ConfigWarning {
                message: format!("${} points to a missing file, ignoring it", CONFIG_ENV),
                path,
            });
        }

        // 2. Check $XDG_CONFIG_HOME/turbolift/config.toml
        if let Ok(xdg_home) = std::env::var("XDG_CONFIG_HOME") {
            let path = PathBuf::from(xdg_home).join("turbolift/config.toml");
            if path.exists() {
                return Some(path);
            }
        }

        // 3. Check ~/.turbolift/config.toml
        Self::global_config_path().ok().filter(|path| path.exists())
    }

    /// Read and parse one config layer.
    fn read_layer(path: &Path) -> Result<ConfigLayer, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Get the canonical path for global config.
    ///
    /// Returns `~/.turbolift/config.toml`.
    pub fn global_config_path() -> Result<PathBuf, ConfigError> {
        let home = dirs::home_dir().ok_or(ConfigError::NoHomeDir)?;
        Ok(home.join(".turbolift/config.toml"))
    }

    // =========================================================================
    // Accessor methods with precedence
    // =========================================================================

    /// Manifest filename.
    ///
    /// Defaults to "repos.txt" if not configured.
    pub fn repos_file(&self) -> &str {
        self.campaign
            .as_ref()
            .and_then(|c| c.repos_file.as_deref())
            .or(self.global.repos_file.as_deref())
            .unwrap_or(DEFAULT_MANIFEST)
    }

    /// Work root for checkouts.
    ///
    /// Defaults to "work" if not configured.
    pub fn work_root(&self) -> &str {
        self.campaign
            .as_ref()
            .and_then(|c| c.work_root.as_deref())
            .or(self.global.work_root.as_deref())
            .unwrap_or(DEFAULT_WORK_ROOT)
    }

    /// Campaign paths for `campaign_dir` with this configuration applied.
    pub fn campaign_paths(&self, campaign_dir: &Path) -> CampaignPaths {
        CampaignPaths::new(campaign_dir)
            .with_repos_file(self.repos_file())
            .with_work_root(self.work_root())
    }

    /// Get the path to the loaded global config file.
    pub fn global_config_loaded_from(&self) -> Option<&Path> {
        self.global_path.as_deref()
    }

    /// Get the path to the loaded campaign config file.
    pub fn campaign_config_loaded_from(&self) -> Option<&Path> {
        self.campaign_path.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn defaults_without_files() {
        let result = Config::load_from(None, None, Vec::new()).unwrap();
        let config = result.config;

        assert_eq!(config.repos_file(), "repos.txt");
        assert_eq!(config.work_root(), "work");
        assert!(config.global_config_loaded_from().is_none());
        assert!(config.campaign_config_loaded_from().is_none());
    }

    #[test]
    fn load_global_file() {
        let temp = TempDir::new().unwrap();
        let global = temp.path().join("config.toml");
        fs::write(&global, "repos_file = \"all.txt\"\n").unwrap();

        let config = Config::load_from(Some(&global), None, Vec::new())
            .unwrap()
            .config;

        assert_eq!(config.repos_file(), "all.txt");
        assert_eq!(config.work_root(), "work");
        assert_eq!(config.global_config_loaded_from(), Some(global.as_path()));
    }

    #[test]
    fn campaign_overrides_global() {
        let temp = TempDir::new().unwrap();
        let global = temp.path().join("config.toml");
        fs::write(&global, "repos_file = \"all.txt\"\nwork_root = \"/scratch\"\n").unwrap();

        let campaign = temp.path().join("campaign");
        fs::create_dir_all(&campaign).unwrap();
        fs::write(campaign.join(".turbolift.toml"), "repos_file = \"batch.txt\"\n").unwrap();

        let config = Config::load_from(Some(&global), Some(&campaign), Vec::new())
            .unwrap()
            .config;

        assert_eq!(config.repos_file(), "batch.txt");
        // Not set at campaign scope, so the global value applies.
        assert_eq!(config.work_root(), "/scratch");
        assert!(config.campaign_config_loaded_from().is_some());
    }

    #[test]
    fn campaign_paths_apply_config() {
        let config = Config {
            campaign: Some(ConfigLayer {
                repos_file: Some("batch.txt".into()),
                work_root: Some("clones".into()),
            }),
            ..Default::default()
        };

        let paths = config.campaign_paths(Path::new("/c/x"));
        assert_eq!(paths.manifest_path(), PathBuf::from("/c/x/batch.txt"));
        assert_eq!(paths.work_root(), PathBuf::from("/c/x/clones"));
    }

    #[test]
    fn malformed_campaign_config_is_error() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(".turbolift.toml"), "repos_file = [").unwrap();

        let err = Config::load_from(None, Some(temp.path()), Vec::new()).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError { .. }));
    }

    #[test]
    fn empty_repos_file_rejected() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(".turbolift.toml"), "repos_file = \"\"").unwrap();

        let err = Config::load_from(None, Some(temp.path()), Vec::new()).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue(_)));
    }

    #[test]
    fn warnings_are_passed_through() {
        let warning = ConfigWarning {
            message: "ignored".into(),
            path: PathBuf::from("/nope"),
        };
        let result = Config::load_from(None, None, vec![warning]).unwrap();
        assert_eq!(result.warnings.len(), 1);
    }
}
