//! Counter ranking policies.
//!
//! Each comparator orders two candidates from the point of view of a fixed
//! opposing unit. `Ordering::Less` means the first candidate ranks better, so
//! sorting ascending puts the best counter first.
//!
//! # Cascades
//!
//! ```text
//! offense:  dealt desc → exactly-one-takes-zero first → tier desc → power cascade
//! defense:  taken asc  → exactly-one-deals-zero last  → tier desc → power cascade
//! power:    power desc → tier desc → magic-immune first → tie
//! ```
//!
//! Every cascade is a lexicographic key over per-candidate values, so each
//! comparator is a total order and safe for `sort_by`.

use core::cmp::Ordering;

use crate::unit::{CompositionType, UnitProfile};

/// The comparator a composition type selects.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RankingPolicy {
    /// Highest damage dealt first.
    Offense,
    /// Lowest damage taken first.
    Defense,
    /// Highest net power first.
    Power,
}

impl RankingPolicy {
    /// Compares two candidates against `opponent` under this policy.
    pub fn compare(self, a: &UnitProfile, b: &UnitProfile, opponent: &UnitProfile) -> Ordering {
        match self {
            Self::Offense => attack_power_comparison(a, b, opponent),
            Self::Defense => defense_comparison(a, b, opponent),
            Self::Power => total_power_comparison(a, b, opponent),
        }
    }
}

impl From<CompositionType> for RankingPolicy {
    fn from(composition: CompositionType) -> Self {
        match composition {
            CompositionType::TotalPower => Self::Power,
            CompositionType::DamageDealt => Self::Offense,
            CompositionType::DamageTaken => Self::Defense,
        }
    }
}

/// Offense policy: more damage dealt to `opponent` ranks better.
///
/// On a tie, a candidate taking zero damage beats one taking some; then the
/// higher tier; then the power cascade.
pub fn attack_power_comparison(a: &UnitProfile, b: &UnitProfile, opponent: &UnitProfile) -> Ordering {
    let a_dealt = a.deals_damage_against(opponent);
    let b_dealt = b.deals_damage_against(opponent);

    b_dealt
        .cmp(&a_dealt)
        .then_with(|| zero_first(a.takes_damage_from(opponent), b.takes_damage_from(opponent)))
        .then_with(|| higher_tier_first(a, b))
        .then_with(|| total_power_comparison(a, b, opponent))
}

/// Defense policy: less damage taken from `opponent` ranks better.
///
/// On a tie, a candidate dealing some damage beats one dealing none; then the
/// higher tier; then the power cascade.
pub fn defense_comparison(a: &UnitProfile, b: &UnitProfile, opponent: &UnitProfile) -> Ordering {
    let a_taken = a.takes_damage_from(opponent);
    let b_taken = b.takes_damage_from(opponent);

    a_taken
        .cmp(&b_taken)
        .then_with(|| {
            zero_first(a.deals_damage_against(opponent), b.deals_damage_against(opponent))
                .reverse()
        })
        .then_with(|| higher_tier_first(a, b))
        .then_with(|| total_power_comparison(a, b, opponent))
}

/// Power policy: higher net power against `opponent` ranks better; then the
/// higher tier; then magic immunity; otherwise a true tie.
pub fn total_power_comparison(a: &UnitProfile, b: &UnitProfile, opponent: &UnitProfile) -> Ordering {
    let a_power = a.power_against(opponent);
    let b_power = b.power_against(opponent);

    b_power
        .cmp(&a_power)
        .then_with(|| higher_tier_first(a, b))
        .then_with(|| b.immune_to_magic.cmp(&a.immune_to_magic))
}

fn higher_tier_first(a: &UnitProfile, b: &UnitProfile) -> Ordering {
    b.tier.cmp(&a.tier)
}

/// Ranks a zero stat ahead of a nonzero one; equal when both or neither are zero.
fn zero_first(a: u16, b: u16) -> Ordering {
    match (a == 0, b == 0) {
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        _ => Ordering::Equal,
    }
}
