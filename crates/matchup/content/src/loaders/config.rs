//! Engine configuration loader.

use std::path::Path;

use matchup_core::MatchupConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for engine configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// Missing keys keep their [`MatchupConfig::default`] values.
    pub fn load(path: &Path) -> LoadResult<MatchupConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse config data from TOML text.
    pub fn parse(content: &str) -> LoadResult<MatchupConfig> {
        let config: MatchupConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use matchup_core::{CompositionType, Race, Tier};

    #[test]
    fn partial_config_keeps_defaults() {
        let config = ConfigLoader::parse("top_n = 2\ndefault_race = \"Night Elf\"\n").unwrap();

        assert_eq!(config.top_n, 2);
        assert_eq!(config.default_race, Race::NightElf);
        assert_eq!(config.default_opponent_race, Race::Orc);
        assert_eq!(config.default_max_tier, Tier::ONE);
        assert_eq!(config.default_composition, CompositionType::TotalPower);
    }

    #[test]
    fn rejects_out_of_range_tier() {
        let err = ConfigLoader::parse("default_max_tier = 5\n").unwrap_err();
        assert!(err.to_string().contains("Failed to parse config TOML"));
    }

    #[test]
    fn rejects_unknown_composition() {
        assert!(ConfigLoader::parse("default_composition = \"total power\"\n").is_err());
    }
}
