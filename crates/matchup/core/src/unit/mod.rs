//! Unit archetypes and the enumerations that describe them.
//!
//! Every field of a [`UnitProfile`] is a member of a closed set. String forms
//! match the catalog's display names exactly ("Night Elf", "Ground + Air",
//! "Total Power"); anything else is rejected with
//! [`DomainError::InvalidEnumValue`](crate::DomainError::InvalidEnumValue).

mod profile;
mod rules;

pub use profile::{UnitProfile, UnitProfileBuilder, UnitRecord};
pub use rules::{SpecialRule, SpecialRuleTable};

use crate::error::{DomainError, parse_field};

/// Implements `parse` for an enumerated field in terms of its `FromStr`.
macro_rules! enumerated_field {
    ($ty:ty, $field:literal, $allowed:literal) => {
        impl $ty {
            /// Comma-separated list of accepted string forms.
            pub const ALLOWED: &'static str = $allowed;

            /// Parses the display form, rejecting values outside the set.
            pub fn parse(value: &str) -> Result<Self, DomainError> {
                parse_field($field, Self::ALLOWED, value)
            }
        }
    };
}

/// Armor category of a defender.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
    strum::EnumCount,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ArmorType {
    Light,
    Medium,
    Heavy,
    Fortified,
    Hero,
    Unarmored,
}

enumerated_field!(
    ArmorType,
    "armor_type",
    "Light, Medium, Heavy, Fortified, Hero, Unarmored"
);

/// Attack category of an attacker.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
    strum::EnumCount,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AttackType {
    Normal,
    Piercing,
    Siege,
    Chaos,
    Magic,
    Hero,
}

enumerated_field!(
    AttackType,
    "attack_type",
    "Normal, Piercing, Siege, Chaos, Magic, Hero"
);

/// Playable race.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Race {
    #[default]
    Human,
    #[strum(serialize = "Night Elf")]
    #[cfg_attr(feature = "serde", serde(rename = "Night Elf"))]
    NightElf,
    Orc,
    Undead,
}

enumerated_field!(Race, "race", "Human, Night Elf, Orc, Undead");

/// Which layers a unit's attack can reach.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CanAttack {
    #[default]
    Ground,
    Air,
    #[strum(to_string = "Ground + Air", serialize = "Ground+Air")]
    #[cfg_attr(feature = "serde", serde(rename = "Ground + Air", alias = "Ground+Air"))]
    GroundAndAir,
}

enumerated_field!(CanAttack, "can_attack", "Ground, Air, Ground + Air");

impl CanAttack {
    /// Returns true if an attack with this reach can hit a unit on the given layer.
    pub const fn reaches(self, air_unit: bool) -> bool {
        match self {
            Self::Ground => !air_unit,
            Self::Air => air_unit,
            Self::GroundAndAir => true,
        }
    }
}

/// Ranking objective selected by the caller.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CompositionType {
    /// Net power: damage dealt minus damage taken.
    #[default]
    #[strum(serialize = "Total Power")]
    #[cfg_attr(feature = "serde", serde(rename = "Total Power"))]
    TotalPower,
    /// Raw offense.
    #[strum(serialize = "Damage Dealt")]
    #[cfg_attr(feature = "serde", serde(rename = "Damage Dealt"))]
    DamageDealt,
    /// Raw defense.
    #[strum(serialize = "Damage Taken")]
    #[cfg_attr(feature = "serde", serde(rename = "Damage Taken"))]
    DamageTaken,
}

enumerated_field!(
    CompositionType,
    "army_composition_type",
    "Damage Dealt, Damage Taken, Total Power"
);

impl CompositionType {
    /// Connective used between a counter's magnitude and the opposing unit
    /// ("+50 PWR vs. Grunt", "deals 200% to Grunt", "takes 35% from Grunt").
    pub const fn verb(self) -> &'static str {
        match self {
            Self::TotalPower => "vs.",
            Self::DamageDealt => "to",
            Self::DamageTaken => "from",
        }
    }
}

/// Power tier bounding which units a player may field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "u8", into = "u8")
)]
pub struct Tier(u8);

impl Tier {
    pub const ONE: Tier = Tier(1);
    pub const TWO: Tier = Tier(2);
    pub const THREE: Tier = Tier(3);

    pub const fn new(value: u8) -> Result<Self, DomainError> {
        match value {
            1..=3 => Ok(Self(value)),
            _ => Err(DomainError::InvalidTier(value)),
        }
    }

    pub const fn get(self) -> u8 {
        self.0
    }

    /// Parses a tier from its decimal form.
    pub fn parse(value: &str) -> Result<Self, DomainError> {
        let raw: u8 = parse_field("tier", "1, 2, 3", value.trim())?;
        Self::new(raw)
    }
}

impl Default for Tier {
    fn default() -> Self {
        Self::ONE
    }
}

impl TryFrom<u8> for Tier {
    type Error = DomainError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Tier> for u8 {
    fn from(tier: Tier) -> Self {
        tier.0
    }
}

impl core::fmt::Display for Tier {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_forms_round_trip_through_parse() {
        assert_eq!(Race::parse("Night Elf"), Ok(Race::NightElf));
        assert_eq!(Race::NightElf.to_string(), "Night Elf");
        assert_eq!(CanAttack::GroundAndAir.to_string(), "Ground + Air");
        assert_eq!(CanAttack::parse("Ground + Air"), Ok(CanAttack::GroundAndAir));
        assert_eq!(CanAttack::parse("Ground+Air"), Ok(CanAttack::GroundAndAir));
        assert_eq!(
            CompositionType::parse("Damage Taken"),
            Ok(CompositionType::DamageTaken)
        );
    }

    #[test]
    fn values_outside_the_set_are_rejected() {
        assert!(matches!(
            Race::parse("Naga"),
            Err(DomainError::InvalidEnumValue { field: "race", .. })
        ));
        // Membership is exact, not case-folded.
        assert!(AttackType::parse("piercing").is_err());
        assert!(CompositionType::parse("Total power").is_err());
    }

    #[test]
    fn tier_bounds() {
        assert_eq!(Tier::new(0), Err(DomainError::InvalidTier(0)));
        assert_eq!(Tier::new(4), Err(DomainError::InvalidTier(4)));
        assert_eq!(Tier::parse("2"), Ok(Tier::TWO));
        assert!(Tier::parse("two").is_err());
        assert!(Tier::THREE > Tier::ONE);
    }

    #[test]
    fn reach_rules() {
        assert!(CanAttack::Ground.reaches(false));
        assert!(!CanAttack::Ground.reaches(true));
        assert!(CanAttack::Air.reaches(true));
        assert!(!CanAttack::Air.reaches(false));
        assert!(CanAttack::GroundAndAir.reaches(true));
        assert!(CanAttack::GroundAndAir.reaches(false));
    }

    #[test]
    fn composition_verbs() {
        assert_eq!(CompositionType::TotalPower.verb(), "vs.");
        assert_eq!(CompositionType::DamageDealt.verb(), "to");
        assert_eq!(CompositionType::DamageTaken.verb(), "from");
    }
}
