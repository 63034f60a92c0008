//! Special-rule table loader.

use std::path::Path;

use matchup_core::{SpecialRule, SpecialRuleTable};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// One named rule in a rule file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleEntry {
    pub unit: String,
    pub rule: SpecialRule,
}

/// Rule file structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleFile {
    pub rules: Vec<RuleEntry>,
}

/// Loader for special-rule tables from RON files.
pub struct RuleLoader;

impl RuleLoader {
    /// Load a rule table from a RON file.
    ///
    /// The file replaces the built-in table entirely; a later entry for the
    /// same unit overrides an earlier one.
    pub fn load(path: &Path) -> LoadResult<SpecialRuleTable> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<SpecialRuleTable> {
        let file: RuleFile = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse rule table RON: {}", e))?;

        let mut table = SpecialRuleTable::empty();
        for entry in file.rules {
            table.insert(entry.unit, entry.rule);
        }

        Ok(table)
    }
}
