//! Armor × attack damage percentages.
//!
//! The table is a fixed-size array indexed by enum ordinal. It is built at
//! compile time, together with its transpose, so both directions are total
//! over their enum domains by construction and never change at runtime.

use strum::{EnumCount, IntoEnumIterator};

use crate::error::DomainError;
use crate::unit::{ArmorType, AttackType};

const ARMORS: usize = ArmorType::COUNT;
const ATTACKS: usize = AttackType::COUNT;

/// Standard percentages, rows by [`ArmorType`], columns by [`AttackType`]:
/// Normal, Piercing, Siege, Chaos, Magic, Hero.
const STANDARD_TABLE: [[u16; ATTACKS]; ARMORS] = [
    [100, 200, 100, 100, 125, 100], // Light
    [150, 75, 50, 100, 75, 100],    // Medium
    [100, 100, 100, 100, 200, 100], // Heavy
    [70, 35, 150, 100, 35, 50],     // Fortified
    [100, 50, 50, 100, 50, 100],    // Hero
    [100, 150, 150, 100, 100, 100], // Unarmored
];

static STANDARD: DamageMatrix = DamageMatrix::new(STANDARD_TABLE);

/// Damage percentage table (100 = baseline damage) and its inverse.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DamageMatrix {
    armor_to_attack: [[u16; ATTACKS]; ARMORS],
    attack_to_armor: [[u16; ARMORS]; ATTACKS],
}

impl DamageMatrix {
    /// Builds a matrix from armor-major rows, deriving the inverse.
    pub const fn new(armor_to_attack: [[u16; ATTACKS]; ARMORS]) -> Self {
        let mut attack_to_armor = [[0; ARMORS]; ATTACKS];
        let mut armor = 0;
        while armor < ARMORS {
            let mut attack = 0;
            while attack < ATTACKS {
                attack_to_armor[attack][armor] = armor_to_attack[armor][attack];
                attack += 1;
            }
            armor += 1;
        }

        Self {
            armor_to_attack,
            attack_to_armor,
        }
    }

    /// The process-wide standard matrix.
    pub fn standard() -> &'static Self {
        &STANDARD
    }

    /// Percentage of baseline damage `attack` deals to `armor`.
    pub const fn lookup(&self, armor: ArmorType, attack: AttackType) -> u16 {
        self.armor_to_attack[armor as usize][attack as usize]
    }

    /// Transposed lookup: the same percentage, keyed attack-first.
    pub const fn inverse(&self, attack: AttackType, armor: ArmorType) -> u16 {
        self.attack_to_armor[attack as usize][armor as usize]
    }

    /// Lookup by display names, for callers holding unvalidated strings.
    pub fn lookup_named(&self, armor: &str, attack: &str) -> Result<u16, DomainError> {
        Ok(self.lookup(ArmorType::parse(armor)?, AttackType::parse(attack)?))
    }

    /// Attack types ordered from most to least effective against `armor`.
    /// Equal percentages keep enum order.
    pub fn attacks_ranked_against(&self, armor: ArmorType) -> Vec<(AttackType, u16)> {
        let mut ranked: Vec<_> = AttackType::iter()
            .map(|attack| (attack, self.lookup(armor, attack)))
            .collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked
    }

    /// Armor types ordered from most to least resistant to `attack`.
    /// Equal percentages keep enum order.
    pub fn armors_ranked_against(&self, attack: AttackType) -> Vec<(ArmorType, u16)> {
        let mut ranked: Vec<_> = ArmorType::iter()
            .map(|armor| (armor, self.inverse(attack, armor)))
            .collect();
        ranked.sort_by_key(|&(_, percent)| percent);
        ranked
    }
}

impl Default for DamageMatrix {
    fn default() -> Self {
        STANDARD.clone()
    }
}
