//! Unit catalog loader.

use std::path::Path;

use matchup_core::{SpecialRuleTable, UnitCatalog, UnitRecord};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Unit catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnitFile {
    pub units: Vec<UnitRecord>,
}

/// Loader for unit catalogs from RON files.
pub struct UnitLoader;

impl UnitLoader {
    /// Load a unit catalog from a RON file.
    ///
    /// Records are validated against their enumerated sets, and records
    /// without an explicit special rule pick one up from `rules` by name.
    /// The file order becomes the catalog's base order.
    pub fn load(path: &Path, rules: &SpecialRuleTable) -> LoadResult<UnitCatalog> {
        let content = read_file(path)?;
        Self::parse(&content, rules)
    }

    pub fn parse(content: &str, rules: &SpecialRuleTable) -> LoadResult<UnitCatalog> {
        let file: UnitFile = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse unit catalog RON: {}", e))?;

        let catalog = UnitCatalog::from_records(file.units, rules)
            .map_err(|e| anyhow::anyhow!("Invalid unit catalog: {}", e))?;
        tracing::debug!(units = catalog.len(), "parsed unit catalog");

        Ok(catalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use matchup_core::{AttackType, CatalogOracle, SpecialRule};

    const CATALOG: &str = r#"(
        units: [
            (
                name: "Gargoyle",
                armor_type: "Light",
                attack_type: "Normal",
                race: "Undead",
                tier: 2,
                can_attack: "Ground + Air",
                air_unit: true,
            ),
            (
                name: "Ghoul",
                armor_type: "Heavy",
                attack_type: "Normal",
                race: "Undead",
                tier: 1,
                can_attack: "Ground",
                notes: "Cannibalize",
            ),
        ],
    )"#;

    #[test]
    fn parses_records_and_resolves_rules() {
        let catalog = UnitLoader::parse(CATALOG, &SpecialRuleTable::default()).unwrap();

        assert_eq!(catalog.len(), 2);
        let gargoyle = catalog.find("Gargoyle").unwrap();
        assert!(matches!(
            gargoyle.special_rule,
            Some(SpecialRule::DualAttack { .. })
        ));
        assert_eq!(gargoyle.attack_type_label(), "[Normal or Piercing]");

        let ghoul = catalog.find("Ghoul").unwrap();
        assert_eq!(ghoul.notes, "Cannibalize");
        assert_eq!(ghoul.attack_type, AttackType::Normal);
        assert!(!ghoul.air_unit);
    }

    #[test]
    fn empty_rule_table_leaves_profiles_plain() {
        let catalog = UnitLoader::parse(CATALOG, &SpecialRuleTable::empty()).unwrap();
        assert_eq!(catalog.find("Gargoyle").unwrap().special_rule, None);
    }

    #[test]
    fn rejects_values_outside_their_sets() {
        let bad = CATALOG.replace("\"Heavy\"", "\"Plate\"");
        let err = UnitLoader::parse(&bad, &SpecialRuleTable::default()).unwrap_err();

        assert!(err.to_string().contains("armor_type must be one of"));
    }

    #[test]
    fn rejects_duplicate_names() {
        let bad = CATALOG.replace("\"Ghoul\"", "\"Gargoyle\"");
        let err = UnitLoader::parse(&bad, &SpecialRuleTable::default()).unwrap_err();

        assert!(err.to_string().contains("already exists"));
    }
}
