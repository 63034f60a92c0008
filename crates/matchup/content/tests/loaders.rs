//! Loading content from data directories.

use std::fs;

use matchup_content::{ContentFactory, bundled_data_dir};
use matchup_core::{
    CatalogOracle, CompositionType, CounterRequest, Race, SpecialRule, SpecialRuleTable, Tier,
};
use tempfile::TempDir;

const UNITS: &str = r#"(
    units: [
        (name: "Footman", armor_type: "Heavy", attack_type: "Normal", race: "Human", tier: 1, can_attack: "Ground"),
        (name: "Rifleman", armor_type: "Medium", attack_type: "Piercing", race: "Human", tier: 1, can_attack: "Ground + Air"),
        (name: "Grunt", armor_type: "Heavy", attack_type: "Normal", race: "Orc", tier: 1, can_attack: "Ground"),
    ],
)"#;

fn data_dir(files: &[(&str, &str)]) -> TempDir {
    let dir = TempDir::new().unwrap();
    for (name, content) in files {
        fs::write(dir.path().join(name), content).unwrap();
    }
    dir
}

#[test]
fn missing_optional_files_fall_back_to_defaults() {
    let dir = data_dir(&[("units.ron", UNITS)]);
    let content = ContentFactory::new(dir.path()).load().unwrap();

    assert_eq!(content.config.top_n, 3);
    assert_eq!(content.rules, SpecialRuleTable::default());
    assert_eq!(content.catalog.len(), 3);
}

#[test]
fn missing_catalog_is_an_error() {
    let dir = data_dir(&[]);
    let err = ContentFactory::new(dir.path()).load().unwrap_err();

    assert!(err.to_string().contains("Failed to read file"));
}

#[test]
fn config_and_rules_files_are_applied() {
    let dir = data_dir(&[
        ("units.ron", UNITS),
        ("config.toml", "top_n = 1\ndefault_max_tier = 2\n"),
        (
            "rules.ron",
            r#"(rules: [(unit: "Footman", rule: Defend(halves: Piercing))])"#,
        ),
    ]);
    let content = ContentFactory::new(dir.path()).load().unwrap();

    assert_eq!(content.config.top_n, 1);
    assert_eq!(content.config.default_max_tier, Tier::TWO);
    assert!(matches!(
        content.catalog.find("Footman").unwrap().special_rule,
        Some(SpecialRule::Defend { .. })
    ));
    assert_eq!(content.catalog.find("Rifleman").unwrap().special_rule, None);
}

#[test]
fn bundled_catalog_loads_every_race() {
    let content = ContentFactory::new(bundled_data_dir()).load().unwrap();
    let catalog = &content.catalog;

    for race in [Race::Human, Race::NightElf, Race::Orc, Race::Undead] {
        assert!(!catalog.roster(race).is_empty(), "no units for {race}");
    }

    let gargoyle = catalog.find("Gargoyle").unwrap();
    assert_eq!(gargoyle.attack_type_label(), "[Normal or Piercing]");

    let defend = catalog.find("Footman (with Defend)").unwrap();
    let rifleman = catalog.find("Rifleman").unwrap();
    // Piercing vs Heavy = 100, halved by Defend.
    assert_eq!(rifleman.deals_damage_against(defend), 50);
}

#[test]
fn bundled_catalog_answers_counter_requests() {
    let content = ContentFactory::bundled().load().unwrap();
    let request = CounterRequest::from_config(&content.config)
        .with_max_tier(Tier::THREE)
        .with_composition(CompositionType::DamageDealt)
        .with_opponents(["Grunt", "Wind Rider"]);

    let response = request.run(&content.catalog).unwrap();

    assert_eq!(response.results.len(), 2);
    for result in &response.results {
        assert!(!result.counters.is_empty());
        assert!(result.counters.iter().all(|unit| unit.race == Race::Human));
    }
    // Magic vs Heavy = 200 is the top damage figure against a Grunt.
    assert_eq!(
        response.results[0].best().map(|u| u.attack_type.to_string()),
        Some("Magic".to_owned())
    );
    // A Wind Rider flies, so ground-only Humans cannot be its counter.
    assert!(
        response.results[1]
            .counters
            .iter()
            .all(|unit| unit.can_attack.reaches(true))
    );
}
