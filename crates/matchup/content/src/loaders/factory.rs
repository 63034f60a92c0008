//! Content factory for building the catalog snapshot from data files.

use std::path::{Path, PathBuf};

use matchup_core::{MatchupConfig, SpecialRuleTable, UnitCatalog};

use crate::loaders::{ConfigLoader, LoadResult, RuleLoader, UnitLoader};

/// Path of the data directory shipped with this crate.
pub fn bundled_data_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("data")
}

/// Everything the engine needs from a data directory.
#[derive(Debug, Clone)]
pub struct Content {
    pub config: MatchupConfig,
    pub rules: SpecialRuleTable,
    pub catalog: UnitCatalog,
}

/// Content factory that loads matchup content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── units.ron     (required)
/// ├── rules.ron     (optional, built-in rules when absent)
/// └── config.toml   (optional, defaults when absent)
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// A factory reading the bundled data directory.
    pub fn bundled() -> Self {
        Self::new(bundled_data_dir())
    }

    /// Load engine configuration from `config.toml`.
    pub fn load_config(&self) -> LoadResult<MatchupConfig> {
        let path = self.data_dir.join("config.toml");
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(MatchupConfig::default());
        }

        ConfigLoader::load(&path)
    }

    /// Load the special-rule table from `rules.ron`.
    pub fn load_rules(&self) -> LoadResult<SpecialRuleTable> {
        let path = self.data_dir.join("rules.ron");
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no rule file, using built-in rules");
            return Ok(SpecialRuleTable::default());
        }

        RuleLoader::load(&path)
    }

    /// Load the unit catalog from `units.ron`.
    pub fn load_catalog(&self, rules: &SpecialRuleTable) -> LoadResult<UnitCatalog> {
        let path = self.data_dir.join("units.ron");
        UnitLoader::load(&path, rules)
    }

    /// Load config, rules and catalog together.
    pub fn load(&self) -> LoadResult<Content> {
        let config = self.load_config()?;
        let rules = self.load_rules()?;
        let catalog = self.load_catalog(&rules)?;

        tracing::info!(
            data_dir = %self.data_dir.display(),
            units = catalog.len(),
            rules = rules.len(),
            "loaded matchup content"
        );

        Ok(Content {
            config,
            rules,
            catalog,
        })
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
