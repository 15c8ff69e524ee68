//! Configuration merging.
//!
//! Merges multiple `RawConfig` files into a single resolved `Config`,
//! applying precedence rules and resolving paths.

use std::path::{Path, PathBuf};

use crate::{
    Config, ConfigError, IndexSettings, SearchSettings,
    parse::{RawConfig, RawIndexSettings, RawSearchSettings},
    resolve::resolve_path,
};

/// Smallest writer heap the index backend accepts (15 MB).
pub const MIN_WRITER_HEAP_BYTES: usize = 15_000_000;

/// A parsed config file with its source path.
pub struct ParsedConfig {
    /// Path to the config file.
    pub path: PathBuf,
    /// Parsed raw configuration.
    pub config: RawConfig,
}

impl ParsedConfig {
    /// Directory containing the config file.
    fn dir(&self) -> &Path {
        self.path.parent().unwrap_or(Path::new("."))
    }
}

/// Merges multiple configuration files into a single resolved `Config`.
///
/// Configs should be provided in precedence order: highest precedence first (closest to CWD),
/// lowest precedence last (global config). For every setting the first file that defines it
/// wins. A relative `index.path` resolves against the directory of the file that set it.
pub fn merge_configs(configs: &[ParsedConfig]) -> Result<Config, ConfigError> {
    if configs.is_empty() {
        return Ok(Config::default());
    }

    let mut index = IndexSettings::default();
    let mut search = SearchSettings::default();

    // Lowest precedence first so higher precedence overwrites
    for parsed in configs.iter().rev() {
        if let Some(ref raw) = parsed.config.index {
            apply_raw_index(&mut index, raw, parsed)?;
        }
        if let Some(ref raw) = parsed.config.search {
            apply_raw_search(&mut search, raw, parsed)?;
        }
    }

    let config_root = configs.first().map(|c| c.dir().to_path_buf());

    Ok(Config {
        index,
        search,
        config_root,
    })
}

/// Applies raw index settings to result.
fn apply_raw_index(
    result: &mut IndexSettings,
    raw: &RawIndexSettings,
    parsed: &ParsedConfig,
) -> Result<(), ConfigError> {
    if let Some(ref path) = raw.path {
        result.path = Some(resolve_path(path, parsed.dir())?);
    }
    if let Some(v) = raw.writer_heap_bytes {
        if v < MIN_WRITER_HEAP_BYTES {
            return Err(ConfigError::InvalidSetting {
                path: parsed.path.clone(),
                key: "index.writer_heap_bytes",
                message: format!("must be at least {MIN_WRITER_HEAP_BYTES}"),
            });
        }
        result.writer_heap_bytes = v;
    }
    Ok(())
}

/// Applies raw search settings to result.
fn apply_raw_search(
    result: &mut SearchSettings,
    raw: &RawSearchSettings,
    parsed: &ParsedConfig,
) -> Result<(), ConfigError> {
    if let Some(v) = raw.limit {
        if v == 0 {
            return Err(ConfigError::InvalidSetting {
                path: parsed.path.clone(),
                key: "search.limit",
                message: "must be greater than zero".into(),
            });
        }
        result.limit = v;
    }
    if let Some(ref v) = raw.stemmer {
        result.stemmer = v.clone();
    }
    Ok(())
}
