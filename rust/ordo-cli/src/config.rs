//! Configuration file parsing for `ordo.toml`.
//!
//! Searches current directory then ancestors, falling back to
//! `~/.config/ordo/ordo.toml` if no project-level file is found.

use std::path::{Path, PathBuf};

use ordo_core::{ReverseStrategy, SortStrategy, DEFAULT_MAX_DEPTH};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

pub const CONFIG_FILE_NAME: &str = "ordo.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid toml in '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Deserialize, Serialize, Default, Clone, PartialEq, Eq)]
pub struct OrdoConfig {
    #[serde(default)]
    pub sort: SortSection,
    #[serde(default)]
    pub reverse: ReverseSection,
}

#[derive(Debug, Deserialize, Serialize, Default, Clone, PartialEq, Eq)]
pub struct SortSection {
    #[serde(default)]
    pub strategy: SortStrategy,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct ReverseSection {
    #[serde(default)]
    pub strategy: ReverseStrategy,
    /// Longest list the recursive strategy will accept.
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,
}

impl Default for ReverseSection {
    fn default() -> Self {
        Self {
            strategy: ReverseStrategy::default(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

fn default_max_depth() -> usize {
    DEFAULT_MAX_DEPTH
}

impl OrdoConfig {
    /// Load config from `ordo.toml`, searching current dir then parents.
    /// Returns `Default` when no file is found.
    pub fn load() -> Result<Self, ConfigError> {
        Ok(Self::load_with_path()?
            .map(|(_path, cfg)| cfg)
            .unwrap_or_default())
    }

    /// Load config and return the path to the config file that was found.
    pub fn load_with_path() -> Result<Option<(PathBuf, Self)>, ConfigError> {
        let Some(path) = Self::find() else {
            debug!("no {CONFIG_FILE_NAME} found, using defaults");
            return Ok(None);
        };
        let cfg = Self::load_from(&path)?;
        Ok(Some((path, cfg)))
    }

    /// Load config from a specific file path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let cfg = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "loaded configuration");
        Ok(cfg)
    }

    /// Parse a TOML string directly (useful for testing and embedding).
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Locate the nearest `ordo.toml`.
    pub fn find() -> Option<PathBuf> {
        let start = std::env::current_dir().ok()?;
        Self::find_from(&start).or_else(|| {
            let global = dirs::home_dir()?
                .join(".config")
                .join("ordo")
                .join(CONFIG_FILE_NAME);
            global.exists().then_some(global)
        })
    }

    /// Search `start` and its ancestors for `ordo.toml`.
    pub fn find_from(start: &Path) -> Option<PathBuf> {
        start
            .ancestors()
            .map(|dir| dir.join(CONFIG_FILE_NAME))
            .find(|candidate| candidate.is_file())
    }

    /// Generate a default `ordo.toml` template.
    pub fn default_template() -> &'static str {
        r#"# Ordo Configuration

[sort]
# exchange | heap
strategy = "heap"

[reverse]
# iterative | recursive | head-insertion
strategy = "iterative"
# Longest list the recursive strategy accepts
max_depth = 10000
"#
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_full_config() {
        let toml_str = r#"
[sort]
strategy = "exchange"

[reverse]
strategy = "head-insertion"
max_depth = 64
"#;
        let cfg = OrdoConfig::from_str(toml_str).expect("should parse");
        assert_eq!(cfg.sort.strategy, SortStrategy::Exchange);
        assert_eq!(cfg.reverse.strategy, ReverseStrategy::HeadInsertion);
        assert_eq!(cfg.reverse.max_depth, 64);
    }

    #[test]
    fn parse_partial_config_fills_defaults() {
        let cfg =
            OrdoConfig::from_str("[reverse]\nstrategy = \"recursive\"\n").expect("should parse");
        assert_eq!(cfg.sort.strategy, SortStrategy::Heap);
        assert_eq!(cfg.reverse.strategy, ReverseStrategy::Recursive);
        assert_eq!(cfg.reverse.max_depth, DEFAULT_MAX_DEPTH);
    }

    #[test]
    fn parse_empty_config() {
        let cfg = OrdoConfig::from_str("").expect("should parse");
        assert_eq!(cfg, OrdoConfig::default());
    }

    #[test]
    fn reject_unknown_strategy() {
        assert!(OrdoConfig::from_str("[sort]\nstrategy = \"quick\"\n").is_err());
    }

    #[test]
    fn template_round_trips_to_defaults() {
        let cfg = OrdoConfig::from_str(OrdoConfig::default_template()).expect("template parses");
        assert_eq!(cfg, OrdoConfig::default());
    }

    #[test]
    fn load_from_missing_file() {
        let err = OrdoConfig::load_from(Path::new("/definitely/not/here/ordo.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
