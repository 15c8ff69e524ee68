//! Shared context for running CLI commands.

use std::{
    env,
    path::{Path, PathBuf},
    process::ExitCode,
};

use tracing::debug;
use txtdocs_config::Config;
use txtdocs_index::{IndexError, Searcher};

/// Command execution context built once per CLI invocation.
pub struct CommandContext {
    /// Current working directory.
    pub cwd: PathBuf,
    /// Loaded configuration (may be default if no config files found).
    pub config: Config,
    /// Index directory given on the command line.
    index_override: Option<PathBuf>,
}

impl CommandContext {
    /// Loads the current directory and configuration.
    pub fn load(index_override: Option<PathBuf>) -> Result<Self, ExitCode> {
        let cwd = current_dir_or_failure()?;
        let config = load_config_or_failure(&cwd)?;
        Ok(Self::new(cwd, config, index_override))
    }

    /// Creates a context from already-loaded parts.
    pub fn new(cwd: PathBuf, config: Config, index_override: Option<PathBuf>) -> Self {
        Self {
            cwd,
            config,
            index_override,
        }
    }

    /// Returns the index directory: the `--index` flag, else the configured location.
    pub fn index_path(&self) -> PathBuf {
        let path = match &self.index_override {
            Some(path) => self.cwd.join(path),
            None => self.config.index_directory(&self.cwd),
        };
        debug!(
            path = %path.display(),
            overridden = self.index_override.is_some(),
            "resolved index path"
        );
        path
    }

    /// Returns the result limit: the command-line value, else the configured one.
    pub fn limit(&self, flag: Option<usize>) -> usize {
        flag.unwrap_or(self.config.search.limit)
    }

    /// Opens the index for searching, exiting with a consistent error on failure.
    pub fn searcher(&self) -> Result<Searcher, ExitCode> {
        let path = self.index_path();
        Searcher::open(&path, &self.config.search.stemmer).map_err(|e| {
            eprintln!("error: {e}");
            if !matches!(e, IndexError::IndexMissing { .. }) {
                eprintln!("the index at {} may need rebuilding", path.display());
            }
            ExitCode::FAILURE
        })
    }
}

/// Returns the current working directory or exits with a consistent error.
fn current_dir_or_failure() -> Result<PathBuf, ExitCode> {
    env::current_dir().map_err(|e| {
        eprintln!("error: could not determine current directory: {e}");
        ExitCode::FAILURE
    })
}

/// Loads configuration from the provided directory or exits with an error.
fn load_config_or_failure(cwd: &Path) -> Result<Config, ExitCode> {
    Config::load(cwd).map_err(|e| {
        eprintln!("error: failed to load configuration: {e}");
        ExitCode::FAILURE
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_flag_resolves_against_cwd() {
        let ctx = CommandContext::new(
            PathBuf::from("/work"),
            Config::default(),
            Some(PathBuf::from("idx")),
        );
        assert_eq!(ctx.index_path(), PathBuf::from("/work/idx"));
    }

    #[test]
    fn absolute_index_flag_is_kept() {
        let ctx = CommandContext::new(
            PathBuf::from("/work"),
            Config::default(),
            Some(PathBuf::from("/data/idx")),
        );
        assert_eq!(ctx.index_path(), PathBuf::from("/data/idx"));
    }

    #[test]
    fn default_index_under_cwd() {
        let ctx = CommandContext::new(PathBuf::from("/work"), Config::default(), None);
        assert_eq!(ctx.index_path(), PathBuf::from("/work/.txtdocs/index"));
    }

    #[test]
    fn limit_flag_overrides_config() {
        let ctx = CommandContext::new(PathBuf::from("/work"), Config::default(), None);
        assert_eq!(ctx.limit(None), 20);
        assert_eq!(ctx.limit(Some(3)), 3);
    }
}
