//! Damage dealt, damage taken, and net power between two profiles.

use crate::matrix::DamageMatrix;
use crate::unit::UnitProfile;

// ============================================================================
// Damage Calculation
// ============================================================================

/// Damage percentage `attacker` deals to `defender`.
///
/// # Formula
///
/// ```text
/// if attacker cannot attack defender:
///     damage = 0
/// else:
///     attack = attacker's effective attack type against defender
///     damage = matrix[defender.armor][attack]
///
/// damage = defender's special rule applied to (attack, damage)
/// ```
///
/// The defender's rule runs last, so a halved zero stays zero.
pub fn deals_damage_against(attacker: &UnitProfile, defender: &UnitProfile) -> u16 {
    let attack = attacker.effective_attack_type(defender);

    let damage = if attacker.cannot_attack(defender) {
        0
    } else {
        DamageMatrix::standard().lookup(defender.armor_type, attack)
    };

    match defender.special_rule {
        Some(rule) => rule.incoming(attack, damage),
        None => damage,
    }
}

/// Damage percentage `defender` takes from `attacker`.
///
/// Always equal to `deals_damage_against(attacker, defender)`.
pub fn takes_damage_from(defender: &UnitProfile, attacker: &UnitProfile) -> u16 {
    deals_damage_against(attacker, defender)
}

/// Net power of `unit` against `other`: damage dealt minus damage taken.
pub fn power_against(unit: &UnitProfile, other: &UnitProfile) -> i32 {
    i32::from(deals_damage_against(unit, other)) - i32::from(takes_damage_from(unit, other))
}

impl UnitProfile {
    /// See [`deals_damage_against`].
    pub fn deals_damage_against(&self, defender: &UnitProfile) -> u16 {
        deals_damage_against(self, defender)
    }

    /// See [`takes_damage_from`].
    pub fn takes_damage_from(&self, attacker: &UnitProfile) -> u16 {
        takes_damage_from(self, attacker)
    }

    /// See [`power_against`].
    pub fn power_against(&self, other: &UnitProfile) -> i32 {
        power_against(self, other)
    }
}
