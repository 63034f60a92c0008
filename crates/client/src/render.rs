//! Text and JSON output for the advisor commands.

use anyhow::{Context, Result};
use matchup_core::{CounterResponse, DamageMatrix, UnitProfile};

/// Serializes any response as pretty JSON.
pub fn json<T: serde::Serialize + ?Sized>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).context("Failed to serialize output as JSON")
}

/// The grouped counter report followed by each opponent's ranked counters.
///
/// ```text
/// Priest
///   deals 200% to Grunt
///   deals 200% to Tauren
///
/// Ranked counters:
///   Grunt: Priest, Sorceress, Gryphon Rider
/// ```
pub fn counters(response: &CounterResponse<'_>) -> String {
    let verb = response.report.composition.verb();
    let mut lines = Vec::new();

    for group in response.report.iter() {
        lines.push(group.counter.name.clone());
        lines.extend(
            group
                .entries
                .iter()
                .map(|entry| format!("  {} {} {}", entry.magnitude, verb, entry.opponent.name)),
        );
        lines.push(String::new());
    }

    lines.extend(
        response
            .report
            .unmatched
            .iter()
            .map(|opponent| format!("No counter found for {}", opponent.name)),
    );

    if !response.results.is_empty() {
        lines.push("Ranked counters:".to_owned());
        for result in &response.results {
            let names: Vec<_> = result.counters.iter().map(|unit| unit.name.as_str()).collect();
            lines.push(format!("  {}: {}", result.opponent.name, names.join(", ")));
        }
    }

    join_lines(lines)
}

/// One line per unit: tier, name, race, armor, attack and reach.
pub fn units<'a>(units: impl IntoIterator<Item = &'a UnitProfile>) -> String {
    join_lines(units.into_iter().map(|unit| {
        format!(
            "T{} {:<24} {:<10} {:<9} {:<10} {}",
            unit.tier,
            unit.name,
            unit.race.as_ref(),
            unit.armor_type.as_ref(),
            unit.attack_type_label(),
            unit.can_attack,
        )
    }))
}

/// Full profile of a unit with its damage table rankings.
pub fn unit_detail(unit: &UnitProfile, matrix: &DamageMatrix) -> String {
    let mut lines = vec![
        format!("{} ({}, tier {})", unit.name, unit.race, unit.tier),
        format!("  armor:       {}", unit.armor_type),
        format!("  attack:      {}", unit.attack_type_label()),
        format!("  can attack:  {}", unit.can_attack),
        format!("  air unit:    {}", yes_no(unit.air_unit)),
        format!("  spell immune: {}", yes_no(unit.immune_to_magic)),
    ];
    if !unit.notes.is_empty() {
        lines.push(format!("  notes:       {}", unit.notes));
    }

    let taken: Vec<_> = matrix
        .attacks_ranked_against(unit.armor_type)
        .into_iter()
        .map(|(attack, percent)| format!("{attack} {percent}%"))
        .collect();
    lines.push(format!("  takes most from:     {}", taken.join(", ")));

    let resisted: Vec<_> = matrix
        .armors_ranked_against(unit.attack_type)
        .into_iter()
        .map(|(armor, percent)| format!("{armor} {percent}%"))
        .collect();
    lines.push(format!("  attack resisted by:  {}", resisted.join(", ")));

    join_lines(lines)
}

/// Terminates every line with a newline.
fn join_lines(lines: impl IntoIterator<Item = String>) -> String {
    lines.into_iter().map(|line| line + "\n").collect()
}

fn yes_no(flag: bool) -> &'static str {
    if flag { "yes" } else { "no" }
}
