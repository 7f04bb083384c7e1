use eyre::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use ddj_toolkit::ToolkitError;
use ddj_toolkit::filter::{CategorySource, PipelineConfig};
use ddj_toolkit::source::{DEFAULT_BASE_URL, LoadOptions, MalformedPolicy};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub source: SourceConfig,
    pub page: PipelineConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    pub base_url: String,
    /// Read documents from this directory instead of `base_url`
    pub data_dir: Option<PathBuf>,
    pub timeout_ms: u64,
    pub on_malformed: MalformedPolicy,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            data_dir: None,
            timeout_ms: 30000,
            on_malformed: MalformedPolicy::Skip,
        }
    }
}

impl SourceConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Reject values no source can work with
    pub fn validate(&self) -> ddj_toolkit::Result<()> {
        if self.timeout_ms == 0 {
            return Err(ToolkitError::InvalidConfig(
                "source.timeout_ms must be greater than zero".to_string(),
            ));
        }
        if self.data_dir.is_none() {
            let url = self.base_url.trim();
            if url.is_empty() {
                return Err(ToolkitError::InvalidConfig(
                    "source.base_url is empty and no data_dir is set".to_string(),
                ));
            }
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(ToolkitError::InvalidConfig(format!(
                    "source.base_url '{}' is not an http(s) URL",
                    url
                )));
            }
        }
        Ok(())
    }
}

impl Config {
    /// Load configuration with fallback chain
    pub fn load(config_path: Option<&PathBuf>) -> Result<Self> {
        // If explicit config path provided, try to load it
        if let Some(path) = config_path {
            return Self::load_from_file(path)
                .context(format!("Failed to load config from {}", path.display()));
        }

        // Try primary location: ~/.config/<project>/<project>.yml
        if let Some(config_dir) = dirs::config_dir() {
            let project_name = env!("CARGO_PKG_NAME");
            let primary_config = config_dir
                .join(project_name)
                .join(format!("{}.yml", project_name));
            if primary_config.exists() {
                match Self::load_from_file(&primary_config) {
                    Ok(config) => return Ok(config),
                    Err(e) => {
                        log::warn!(
                            "Failed to load config from {}: {}",
                            primary_config.display(),
                            e
                        );
                    }
                }
            }
        }

        // Try fallback location: ./<project>.yml
        let project_name = env!("CARGO_PKG_NAME");
        let fallback_config = PathBuf::from(format!("{}.yml", project_name));
        if fallback_config.exists() {
            match Self::load_from_file(&fallback_config) {
                Ok(config) => return Ok(config),
                Err(e) => {
                    log::warn!(
                        "Failed to load config from {}: {}",
                        fallback_config.display(),
                        e
                    );
                }
            }
        }

        // No config file found, use defaults
        log::info!("No config file found, using defaults");
        Ok(Self::default())
    }

    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path).context("Failed to read config file")?;

        let config: Self = serde_yaml::from_str(&content).context("Failed to parse config file")?;

        log::info!("Loaded config from: {}", path.as_ref().display());
        Ok(config)
    }

    /// Loader options for the configured page variant
    pub fn load_options(&self) -> LoadOptions {
        LoadOptions {
            on_malformed: self.source.on_malformed,
            load_categories: self.page.category_source == CategorySource::Catalog,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.source.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.source.timeout(), Duration::from_secs(30));
        assert_eq!(config.page, PipelineConfig::fixed());
        assert!(!config.load_options().load_categories);
    }

    #[test]
    fn test_load_from_explicit_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("ddj-toolkit.yml");
        let content = concat!(
            "source:\n  data_dir: /srv/data\n  on_malformed: fail\n",
            "page:\n  category_source: catalog\n  search: true\n",
        );
        fs::write(&path, content).unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.source.data_dir, Some(PathBuf::from("/srv/data")));
        assert_eq!(config.source.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.page.category_source, CategorySource::Catalog);
        assert!(config.page.search);

        let options = config.load_options();
        assert!(options.load_categories);
        assert_eq!(options.on_malformed, MalformedPolicy::Fail);
    }

    #[test]
    fn test_explicit_missing_path_fails() {
        let path = PathBuf::from("/nonexistent/ddj-toolkit.yml");
        assert!(Config::load(Some(&path)).is_err());
    }

    #[test]
    fn test_default_source_is_valid() {
        assert!(SourceConfig::default().validate().is_ok());
    }

    #[test]
    fn test_zero_timeout_is_invalid() {
        let source = SourceConfig {
            timeout_ms: 0,
            ..Default::default()
        };
        let err = source.validate().unwrap_err();
        assert!(matches!(err, ToolkitError::InvalidConfig(_)));
        assert!(err.to_string().contains("timeout_ms"));
    }

    #[test]
    fn test_empty_base_url_is_invalid() {
        let source = SourceConfig {
            base_url: "  ".to_string(),
            ..Default::default()
        };
        assert!(matches!(source.validate(), Err(ToolkitError::InvalidConfig(_))));
    }

    #[test]
    fn test_non_http_base_url_is_invalid() {
        let source = SourceConfig {
            base_url: "ftp://example.org/data".to_string(),
            ..Default::default()
        };
        assert!(source.validate().unwrap_err().to_string().contains("ftp://"));
    }

    #[test]
    fn test_data_dir_skips_url_check() {
        let source = SourceConfig {
            base_url: String::new(),
            data_dir: Some(PathBuf::from("./data")),
            ..Default::default()
        };
        assert!(source.validate().is_ok());
    }

    #[test]
    fn test_invalid_policy_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bad.yml");
        fs::write(&path, "source:\n  on_malformed: explode\n").unwrap();
        assert!(Config::load(Some(&path)).is_err());
    }
}
