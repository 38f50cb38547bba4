//! JSON persistence for the filter configuration

use crate::filter::FilterConfig;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Config persistence errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// File I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// Malformed config file
    #[error("config parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Load a filter config from a JSON file.
///
/// A missing file is not an error; it yields the default (empty) config
/// so first runs work without any setup.
pub fn load_filter_config(path: impl AsRef<Path>) -> Result<FilterConfig, ConfigError> {
    let path = path.as_ref();
    if !path.exists() {
        log::debug!("no config at {}, using defaults", path.display());
        return Ok(FilterConfig::default());
    }

    let raw = fs::read_to_string(path)?;
    let config = serde_json::from_str(&raw)?;
    Ok(config)
}

/// Write a filter config as pretty-printed JSON
pub fn store_filter_config(
    path: impl AsRef<Path>,
    config: &FilterConfig,
) -> Result<(), ConfigError> {
    let raw = serde_json::to_string_pretty(config)?;
    fs::write(path.as_ref(), raw)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("restack-config-{}-{}.json", name, std::process::id()))
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let config = load_filter_config(temp_path("missing")).unwrap();

        assert_eq!(config, FilterConfig::default());
    }

    #[test]
    fn test_round_trip() {
        let path = temp_path("roundtrip");

        let mut config = FilterConfig::default();
        config.ignore_items.insert(200);
        config.iridium.ignore = true;
        config.iridium.item_exceptions.insert(100);

        store_filter_config(&path, &config).unwrap();
        let loaded = load_filter_config(&path).unwrap();
        let _ = fs::remove_file(&path);

        assert_eq!(loaded, config);
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let path = temp_path("malformed");
        fs::write(&path, "not json").unwrap();

        let result = load_filter_config(&path);
        let _ = fs::remove_file(&path);

        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: FilterConfig =
            serde_json::from_str(r#"{ "ignore_items": [200] }"#).unwrap();

        assert!(config.ignore_items.contains(&200));
        assert!(!config.iridium.ignore);
    }
}
