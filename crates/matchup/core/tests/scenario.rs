//! End-to-end counter selection over a small catalog.

use matchup_core::{
    ArmorType, AttackType, CatalogOracle, CompositionType, CounterRequest, CounterSelector, Race,
    Tier, UnitCatalog, UnitProfile,
};

fn orc(name: &str, armor: ArmorType, attack: AttackType, tier: Tier) -> UnitProfile {
    UnitProfile::builder(name)
        .race(Race::Orc)
        .armor(armor)
        .attack(attack)
        .tier(tier)
        .build()
}

fn opponent() -> UnitProfile {
    UnitProfile::builder("Guard Tower")
        .race(Race::Human)
        .armor(ArmorType::Fortified)
        .attack(AttackType::Normal)
        .build()
}

fn catalog() -> UnitCatalog {
    UnitCatalog::new(vec![
        orc("U1", ArmorType::Heavy, AttackType::Piercing, Tier::ONE),
        orc("U2", ArmorType::Light, AttackType::Normal, Tier::TWO),
        UnitProfile {
            immune_to_magic: true,
            ..orc("U3", ArmorType::Unarmored, AttackType::Magic, Tier::ONE)
        },
        opponent(),
    ])
    .unwrap()
}

fn names(units: &[&UnitProfile]) -> Vec<String> {
    units.iter().map(|unit| unit.name.clone()).collect()
}

#[test]
fn pairwise_values_against_fortified_opponent() {
    let catalog = catalog();
    let opponent = catalog.find("Guard Tower").unwrap();
    let u1 = catalog.find("U1").unwrap();
    let u2 = catalog.find("U2").unwrap();
    let u3 = catalog.find("U3").unwrap();

    assert_eq!(u2.deals_damage_against(opponent), 70);
    assert_eq!(u2.takes_damage_from(opponent), 100);
    assert_eq!(u2.power_against(opponent), -30);

    // Piercing and Magic both do 35% to Fortified; Normal does 100% to Heavy
    // and Unarmored alike.
    assert_eq!(u1.power_against(opponent), -65);
    assert_eq!(u3.power_against(opponent), -65);
}

#[test]
fn total_power_ranking_uses_tier_then_immunity() {
    let catalog = catalog();
    let opponent = catalog.find("Guard Tower").unwrap();
    let selector = CounterSelector::new(&catalog);

    let counters =
        selector.best_counters(opponent, Race::Orc, Tier::TWO, CompositionType::TotalPower);

    // U1 and U3 tie on power and tier; immunity puts U3 ahead.
    assert_eq!(names(&counters), ["U2", "U3", "U1"]);
}

#[test]
fn higher_tier_breaks_equal_power() {
    let mut units = catalog().iter().cloned().collect::<Vec<_>>();
    units.push(orc("U4", ArmorType::Heavy, AttackType::Piercing, Tier::TWO));
    let catalog = UnitCatalog::new(units).unwrap();
    let opponent = catalog.find("Guard Tower").unwrap();

    let counters = CounterSelector::new(&catalog).best_counters(
        opponent,
        Race::Orc,
        Tier::TWO,
        CompositionType::TotalPower,
    );

    // U4 matches U1 exactly except for tier.
    assert_eq!(names(&counters), ["U2", "U4", "U3"]);
}

#[test]
fn max_tier_filters_candidates() {
    let catalog = catalog();
    let opponent = catalog.find("Guard Tower").unwrap();

    let counters = CounterSelector::new(&catalog).best_counters(
        opponent,
        Race::Orc,
        Tier::ONE,
        CompositionType::TotalPower,
    );

    assert_eq!(names(&counters), ["U3", "U1"]);
}

#[test]
fn identical_candidates_keep_catalog_order() {
    let twin = |name: &str| orc(name, ArmorType::Medium, AttackType::Normal, Tier::ONE);
    let opponent = opponent();

    for order in [["Raider", "Wolf Rider"], ["Wolf Rider", "Raider"]] {
        let catalog = UnitCatalog::new(vec![twin(order[0]), twin(order[1])]).unwrap();
        let selector = CounterSelector::new(&catalog);

        for composition in [
            CompositionType::TotalPower,
            CompositionType::DamageDealt,
            CompositionType::DamageTaken,
        ] {
            let counters = selector.best_counters(&opponent, Race::Orc, Tier::THREE, composition);
            assert_eq!(names(&counters), order);
        }
    }
}

#[test]
fn repeated_requests_are_identical() {
    let catalog = catalog();
    let request = CounterRequest::new()
        .with_race(Race::Orc)
        .with_opponent_race(Race::Human)
        .with_max_tier(Tier::TWO)
        .opponent("Guard Tower");

    let first = request.run(&catalog).unwrap();
    let second = request.run(&catalog).unwrap();

    assert_eq!(first, second);
    assert_eq!(names(&first.roster), ["Guard Tower"]);

    let group = first.report.group_for("U2").unwrap();
    assert_eq!(group.entries.len(), 1);
    assert_eq!(group.entries[0].magnitude, "-30 PWR");
    assert_eq!(CompositionType::TotalPower.verb(), "vs.");
}
