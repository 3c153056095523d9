//! Configuration file support for deploy-tracker.
//!
//! Provides YAML-based configuration through `deploy-tracker.config.yml` files,
//! including data structures, file loading, and validation. Values given on
//! the command line take precedence over the file.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::application::dto::OutputFormat;
use crate::shared::security::safe_read_to_string;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "deploy-tracker.config.yml";

/// Upper bound for the simulated lookup delay, in milliseconds
pub const MAX_DELAY_MS: u64 = 60_000;

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub format: Option<String>,
    pub delay_ms: Option<u64>,
    /// Relative paths are resolved against the config file's directory.
    pub data_file: Option<PathBuf>,
    pub api_url: Option<String>,
    pub top: Option<usize>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = safe_read_to_string(path, "config file").with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let mut config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    if let (Some(data_file), Some(base)) = (config.data_file.as_ref(), path.parent()) {
        if data_file.is_relative() {
            config.data_file = Some(base.join(data_file));
        }
    }

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(ref format) = config.format {
        if let Err(e) = format.parse::<OutputFormat>() {
            bail!("Invalid config: {}", e);
        }
    }

    if let Some(delay_ms) = config.delay_ms {
        if delay_ms > MAX_DELAY_MS {
            bail!(
                "Invalid config: delay_ms must be at most {} (got {}).\n\n\
                 💡 Hint: The delay simulates lookup latency; 1000 matches the default.",
                MAX_DELAY_MS,
                delay_ms
            );
        }
    }

    if let Some(top) = config.top {
        if top == 0 {
            bail!(
                "Invalid config: top must be at least 1.\n\n\
                 💡 Hint: 'top' sets how many task IDs the ranking shows (default: 10)."
            );
        }
    }

    if let Some(ref api_url) = config.api_url {
        if api_url.trim().is_empty() {
            bail!(
                "Invalid config: api_url must not be empty.\n\n\
                 💡 Hint: Remove the field to use the built-in dataset, or set a base URL (e.g., \"https://deploy.example.com/api\")."
            );
        }
    }

    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    let mut keys: Vec<&String> = config.unknown_fields.keys().collect();
    keys.sort();
    for key in keys {
        eprintln!("⚠️  Warning: Unknown config field '{}' will be ignored.", key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_config(dir: &TempDir, content: &str) -> PathBuf {
        let config_path = dir.path().join("config.yml");
        fs::write(&config_path, content).unwrap();
        config_path
    }

    #[test]
    fn test_load_valid_config() {
        let dir = TempDir::new().unwrap();
        let config_path = write_config(
            &dir,
            r#"
format: markdown
delay_ms: 250
data_file: /srv/deployments.json
api_url: https://deploy.example.com/api
top: 5
"#,
        );

        let config = load_config_from_path(&config_path).unwrap();
        assert_eq!(config.format.as_deref(), Some("markdown"));
        assert_eq!(config.delay_ms, Some(250));
        assert_eq!(
            config.data_file.as_deref(),
            Some(Path::new("/srv/deployments.json"))
        );
        assert_eq!(
            config.api_url.as_deref(),
            Some("https://deploy.example.com/api")
        );
        assert_eq!(config.top, Some(5));
        assert!(config.unknown_fields.is_empty());
    }

    #[test]
    fn test_relative_data_file_resolves_against_config_dir() {
        let dir = TempDir::new().unwrap();
        let config_path = write_config(&dir, "data_file: data/deployments.json\n");

        let config = load_config_from_path(&config_path).unwrap();
        assert_eq!(
            config.data_file.unwrap(),
            dir.path().join("data/deployments.json")
        );
    }

    #[test]
    fn test_discover_config_found() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "format: json\ndelay_ms: 0\n").unwrap();

        let config = discover_config(dir.path()).unwrap();
        assert!(config.is_some());
        let config = config.unwrap();
        assert_eq!(config.format.as_deref(), Some("json"));
        assert_eq!(config.delay_ms, Some(0));
    }

    #[test]
    fn test_discover_config_not_found() {
        let dir = TempDir::new().unwrap();
        let config = discover_config(dir.path()).unwrap();
        assert!(config.is_none());
    }

    #[test]
    fn test_load_config_missing_file() {
        let result = load_config_from_path(Path::new("/nonexistent/config.yml"));
        assert!(result.is_err());
        let err = format!("{}", result.unwrap_err());
        assert!(err.contains("Failed to read config file"));
    }

    #[test]
    fn test_load_config_parse_error() {
        let dir = TempDir::new().unwrap();
        let config_path = write_config(&dir, "invalid: yaml: [[[broken");

        let result = load_config_from_path(&config_path);
        assert!(result.is_err());
        let err = format!("{}", result.unwrap_err());
        assert!(err.contains("Failed to parse config file"));
    }

    #[test]
    fn test_invalid_format_validation_error() {
        let dir = TempDir::new().unwrap();
        let config_path = write_config(&dir, "format: yaml\n");

        let err = load_config_from_path(&config_path).unwrap_err().to_string();
        assert!(err.contains("Invalid format: yaml"));
    }

    #[test]
    fn test_delay_above_limit_validation_error() {
        let dir = TempDir::new().unwrap();
        let config_path = write_config(&dir, "delay_ms: 60001\n");

        let err = load_config_from_path(&config_path).unwrap_err().to_string();
        assert!(err.contains("delay_ms must be at most 60000"));
    }

    #[test]
    fn test_delay_at_limit_is_accepted() {
        let dir = TempDir::new().unwrap();
        let config_path = write_config(&dir, "delay_ms: 60000\n");
        assert_eq!(
            load_config_from_path(&config_path).unwrap().delay_ms,
            Some(MAX_DELAY_MS)
        );
    }

    #[test]
    fn test_zero_top_validation_error() {
        let dir = TempDir::new().unwrap();
        let config_path = write_config(&dir, "top: 0\n");

        let err = load_config_from_path(&config_path).unwrap_err().to_string();
        assert!(err.contains("top must be at least 1"));
    }

    #[test]
    fn test_whitespace_only_api_url_validation_error() {
        let dir = TempDir::new().unwrap();
        let config_path = write_config(&dir, "api_url: \"   \"\n");

        let err = load_config_from_path(&config_path).unwrap_err().to_string();
        assert!(err.contains("api_url must not be empty"));
    }

    #[test]
    fn test_unknown_fields_warning() {
        let dir = TempDir::new().unwrap();
        let config_path = write_config(
            &dir,
            r#"
format: json
refresh_interval: 30
theme: dark
"#,
        );

        let config = load_config_from_path(&config_path).unwrap();
        assert_eq!(config.unknown_fields.len(), 2);
        assert!(config.unknown_fields.contains_key("refresh_interval"));
        assert!(config.unknown_fields.contains_key("theme"));
    }

    #[test]
    fn test_default_config() {
        let config = ConfigFile::default();
        assert!(config.format.is_none());
        assert!(config.delay_ms.is_none());
        assert!(config.data_file.is_none());
        assert!(config.api_url.is_none());
        assert!(config.top.is_none());
        assert!(config.unknown_fields.is_empty());
    }
}
