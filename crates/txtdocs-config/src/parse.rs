//! Configuration file parsing.
//!
//! Parses individual `.txtdocs.toml` files into intermediate `RawConfig` structures
//! that preserve the optional nature of all fields before merging.

use std::{fs, path::Path};

use serde::Deserialize;

use crate::ConfigError;

/// Raw configuration as parsed directly from a TOML file.
///
/// All fields are optional to support partial configs that will be merged.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RawConfig {
    /// When true, stop discovery here - ignore parent and global configs.
    pub root: Option<bool>,
    /// Index section.
    pub index: Option<RawIndexSettings>,
    /// Search section.
    pub search: Option<RawSearchSettings>,
}

/// Raw index settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RawIndexSettings {
    /// Index directory, relative to the config file's directory.
    pub path: Option<String>,
    /// Memory budget for the index writer, in bytes.
    pub writer_heap_bytes: Option<usize>,
}

/// Raw search settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RawSearchSettings {
    /// Maximum results per query.
    pub limit: Option<usize>,
    /// Stemming language for document content.
    pub stemmer: Option<String>,
}

/// Parses a configuration file from disk.
pub fn parse_config_file(path: &Path) -> Result<RawConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;

    parse_config_str(&contents, path)
}

/// Parses configuration from a TOML string.
///
/// The `path` parameter is used for error reporting.
pub fn parse_config_str(contents: &str, path: &Path) -> Result<RawConfig, ConfigError> {
    toml::from_str(contents).map_err(|source| ConfigError::ParseToml {
        path: path.to_path_buf(),
        source,
    })
}

/// Checks if a config file has `root = true` set.
///
/// Returns false if the file cannot be read or parsed.
pub fn is_root_config(path: &Path) -> bool {
    let Ok(contents) = fs::read_to_string(path) else {
        return false;
    };
    let Ok(config) = toml::from_str::<RawConfig>(&contents) else {
        return false;
    };
    config.root == Some(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_empty_config() {
        let config = parse_config_str("", Path::new("test.toml")).unwrap();
        assert!(config.root.is_none());
        assert!(config.index.is_none());
        assert!(config.search.is_none());
    }

    #[test]
    fn parse_full_config() {
        let toml = r#"
root = true

[index]
path = "~/indexes/docs"
writer_heap_bytes = 20000000

[search]
limit = 50
stemmer = "english"
"#;
        let config = parse_config_str(toml, Path::new("test.toml")).unwrap();
        assert_eq!(config.root, Some(true));
        let index = config.index.unwrap();
        assert_eq!(index.path.as_deref(), Some("~/indexes/docs"));
        assert_eq!(index.writer_heap_bytes, Some(20_000_000));
        let search = config.search.unwrap();
        assert_eq!(search.limit, Some(50));
        assert_eq!(search.stemmer.as_deref(), Some("english"));
    }

    #[test]
    fn parse_partial_section() {
        let config = parse_config_str("[search]\nlimit = 5\n", Path::new("t.toml")).unwrap();
        let search = config.search.unwrap();
        assert_eq!(search.limit, Some(5));
        assert!(search.stemmer.is_none());
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = parse_config_str("[search]\nlimt = 5\n", Path::new("bad.toml")).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("bad.toml"));
        assert!(message.contains("limt"));
    }

    #[test]
    fn invalid_toml_reports_path() {
        let err = parse_config_str("[search", Path::new("broken.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::ParseToml { .. }));
        assert!(err.to_string().contains("broken.toml"));
    }

    #[test]
    fn root_detection_ignores_unreadable_files() {
        assert!(!is_root_config(Path::new("/nonexistent/.txtdocs.toml")));
    }
}
