//! Configuration system for txtdocs.
//!
//! txtdocs uses TOML configuration files named `.txtdocs.toml`. Configuration is resolved by
//! walking up the directory tree from the current working directory, collecting any
//! `.txtdocs.toml` files found, then loading `~/.txtdocs.toml` as the global config with
//! lowest precedence. Every setting has a default, so no file is required.

#![warn(missing_docs)]

mod discovery;
mod error;
mod merge;
mod parse;
mod resolve;
#[cfg(test)]
mod test_support;

use std::path::{Path, PathBuf};

pub use discovery::{CONFIG_FILENAME, discover_config_files, global_config_path};
pub use error::ConfigError;
pub use merge::{MIN_WRITER_HEAP_BYTES, ParsedConfig, merge_configs};
pub use parse::{
    RawConfig, RawIndexSettings, RawSearchSettings, parse_config_file, parse_config_str,
};
pub use resolve::resolve_path;
use serde::Serialize;

/// Directory, relative to the config root, holding the default index.
pub const DEFAULT_INDEX_DIR: &str = ".txtdocs/index";

/// Top-level merged configuration for txtdocs.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Index location and writer settings.
    pub index: IndexSettings,
    /// Search settings.
    pub search: SearchSettings,
    /// Directory containing the most specific config file.
    pub config_root: Option<PathBuf>,
}

impl Config {
    /// Loads configuration by discovering and merging all relevant `.txtdocs.toml` files.
    ///
    /// Returns `Ok(Config::default())` if no configuration files are found.
    pub fn load(cwd: &Path) -> Result<Self, ConfigError> {
        let config_files = discover_config_files(cwd);
        Self::load_from_files(&config_files)
    }

    /// Loads configuration from a specific list of config file paths.
    ///
    /// Files should be provided in precedence order: highest precedence first.
    pub fn load_from_files(files: &[PathBuf]) -> Result<Self, ConfigError> {
        let parsed: Vec<ParsedConfig> = files
            .iter()
            .map(|path| {
                let config = parse_config_file(path)?;
                Ok(ParsedConfig {
                    path: path.clone(),
                    config,
                })
            })
            .collect::<Result<Vec<_>, ConfigError>>()?;

        merge_configs(&parsed)
    }

    /// Returns the index directory.
    ///
    /// An explicit `index.path` wins; otherwise the index lives in `.txtdocs/index` under the
    /// config root, or under `cwd` when no config file was found.
    pub fn index_directory(&self, cwd: &Path) -> PathBuf {
        if let Some(path) = &self.index.path {
            return path.clone();
        }
        self.config_root
            .as_deref()
            .unwrap_or(cwd)
            .join(DEFAULT_INDEX_DIR)
    }

    /// Serializes the effective settings to TOML format.
    pub fn settings_to_toml(&self) -> String {
        let serializable = SerializableSettings {
            index: &self.index,
            search: &self.search,
        };
        // Plain structs of strings, paths and integers always serialize
        toml::to_string_pretty(&serializable).unwrap_or_default()
    }
}

/// Index settings.
#[derive(Debug, Clone, Serialize)]
pub struct IndexSettings {
    /// Explicit index directory, already resolved to an absolute path.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
    /// Memory budget for the index writer, in bytes.
    pub writer_heap_bytes: usize,
}

impl Default for IndexSettings {
    fn default() -> Self {
        Self {
            path: None,
            writer_heap_bytes: 50_000_000,
        }
    }
}

/// Search settings.
#[derive(Debug, Clone, Serialize)]
pub struct SearchSettings {
    /// Maximum results per query.
    pub limit: usize,
    /// Stemming language for document content.
    pub stemmer: String,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            limit: 20,
            stemmer: String::from("italian"),
        }
    }
}

/// Internal struct for TOML serialization of settings.
#[derive(Serialize)]
struct SerializableSettings<'a> {
    /// Index settings.
    index: &'a IndexSettings,
    /// Search settings.
    search: &'a SearchSettings,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::TestDir;

    #[test]
    fn settings_defaults() {
        let config = Config::default();
        assert_eq!(config.search.limit, 20);
        assert_eq!(config.search.stemmer, "italian");
        assert_eq!(config.index.writer_heap_bytes, 50_000_000);
        assert!(config.index.path.is_none());
    }

    #[test]
    fn default_index_directory_is_under_cwd() {
        let config = Config::default();
        assert_eq!(
            config.index_directory(Path::new("/work")),
            PathBuf::from("/work/.txtdocs/index")
        );
    }

    #[test]
    fn index_directory_follows_config_root() {
        let config = Config {
            config_root: Some(PathBuf::from("/proj")),
            ..Default::default()
        };
        assert_eq!(
            config.index_directory(Path::new("/proj/sub")),
            PathBuf::from("/proj/.txtdocs/index")
        );
    }

    #[test]
    fn load_merges_discovered_files() {
        let dir = TestDir::new();
        dir.create_config_with_content("", "root = true\n[search]\nstemmer = \"english\"\n");
        dir.create_config_with_content("docs", "[index]\npath = \"../shared-index\"\n");
        let cwd = dir.create_dir("docs/deep");

        let config = Config::load(&cwd).unwrap();
        assert_eq!(config.search.stemmer, "english");
        assert_eq!(
            config.index_directory(&cwd),
            dir.path().join("docs").join("../shared-index")
        );
    }

    #[test]
    fn load_reports_broken_file() {
        let dir = TestDir::new();
        dir.create_config_with_content("", "root = true\n[search\n");
        let err = Config::load(dir.path()).unwrap_err();
        assert!(matches!(err, ConfigError::ParseToml { .. }));
    }

    #[test]
    fn settings_to_toml_is_valid() {
        let toml = Config::default().settings_to_toml();
        assert!(toml.contains("[index]"));
        assert!(toml.contains("[search]"));
        assert!(toml.contains("stemmer = \"italian\""));
        assert!(toml.contains("limit = 20"));

        let parsed: toml::Value = toml::from_str(&toml).unwrap();
        assert!(parsed.get("search").is_some());
    }
}
