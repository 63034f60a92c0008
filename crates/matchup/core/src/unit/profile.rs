//! Unit profiles and the raw records they are validated from.

use super::{ArmorType, AttackType, CanAttack, Race, SpecialRule, SpecialRuleTable, Tier};
use crate::error::DomainError;

/// One unit archetype.
///
/// Profiles are immutable snapshots owned by the catalog. The engine only
/// reads them; every field is already a validated member of its enum.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnitProfile {
    /// Unique identifier within a catalog.
    pub name: String,
    pub armor_type: ArmorType,
    pub attack_type: AttackType,
    pub race: Race,
    pub tier: Tier,
    pub can_attack: CanAttack,
    pub air_unit: bool,
    pub immune_to_magic: bool,
    /// Display-only free text.
    #[cfg_attr(feature = "serde", serde(default))]
    pub notes: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub special_rule: Option<SpecialRule>,
}

impl UnitProfile {
    /// Create a builder for constructing unit profiles.
    pub fn builder(name: impl Into<String>) -> UnitProfileBuilder {
        UnitProfileBuilder::new(name)
    }

    /// Validates a raw record, resolving its special rule from `rules` when the
    /// record does not carry one.
    pub fn from_record(record: UnitRecord, rules: &SpecialRuleTable) -> Result<Self, DomainError> {
        let name = record.name.trim();
        if name.is_empty() {
            return Err(DomainError::MissingField("name"));
        }

        let special_rule = record.special_rule.or_else(|| rules.resolve(name));

        Ok(Self {
            name: name.to_owned(),
            armor_type: ArmorType::parse(&record.armor_type)?,
            attack_type: AttackType::parse(&record.attack_type)?,
            race: Race::parse(&record.race)?,
            tier: Tier::new(record.tier)?,
            can_attack: CanAttack::parse(&record.can_attack)?,
            air_unit: record.air_unit,
            immune_to_magic: record.immune_to_magic,
            notes: record.notes,
            special_rule,
        })
    }

    /// The attack type this unit uses against `defender`.
    ///
    /// Dual-attack units resolve by the defender's layer; everyone else always
    /// uses their own `attack_type`.
    pub fn effective_attack_type(&self, defender: &UnitProfile) -> AttackType {
        self.special_rule
            .and_then(|rule| rule.attack_type_against(defender.air_unit))
            .unwrap_or(self.attack_type)
    }

    /// Attack type as shown without a defender in context.
    pub fn attack_type_label(&self) -> String {
        self.special_rule
            .and_then(|rule| rule.attack_label())
            .unwrap_or_else(|| self.attack_type.to_string())
    }

    /// Returns true if this unit cannot damage `defender` at all: magic
    /// against a magic-immune defender, or a defender on a layer the attack
    /// cannot reach.
    pub fn cannot_attack(&self, defender: &UnitProfile) -> bool {
        let magic_blocked = defender.immune_to_magic
            && self.effective_attack_type(defender) == AttackType::Magic;

        magic_blocked || !self.can_attack.reaches(defender.air_unit)
    }
}

impl TryFrom<UnitRecord> for UnitProfile {
    type Error = DomainError;

    /// Validates against the default special-rule table.
    fn try_from(record: UnitRecord) -> Result<Self, Self::Error> {
        Self::from_record(record, &SpecialRuleTable::default())
    }
}

/// String-typed unit record as stored in catalog files and submitted by forms.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnitRecord {
    pub name: String,
    pub armor_type: String,
    pub attack_type: String,
    pub race: String,
    pub tier: u8,
    pub can_attack: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub air_unit: bool,
    #[cfg_attr(feature = "serde", serde(default))]
    pub immune_to_magic: bool,
    #[cfg_attr(feature = "serde", serde(default))]
    pub notes: String,
    /// Explicit rule; when absent the rule table is consulted by name.
    #[cfg_attr(feature = "serde", serde(default))]
    pub special_rule: Option<SpecialRule>,
}

impl From<&UnitProfile> for UnitRecord {
    fn from(profile: &UnitProfile) -> Self {
        Self {
            name: profile.name.clone(),
            armor_type: profile.armor_type.to_string(),
            attack_type: profile.attack_type.to_string(),
            race: profile.race.to_string(),
            tier: profile.tier.get(),
            can_attack: profile.can_attack.to_string(),
            air_unit: profile.air_unit,
            immune_to_magic: profile.immune_to_magic,
            notes: profile.notes.clone(),
            special_rule: profile.special_rule,
        }
    }
}

/// Builder for constructing unit profiles.
///
/// Unset fields default to a tier 1 Human ground unit with Light armor and a
/// Normal ground attack.
pub struct UnitProfileBuilder {
    name: String,
    armor_type: Option<ArmorType>,
    attack_type: Option<AttackType>,
    race: Option<Race>,
    tier: Option<Tier>,
    can_attack: Option<CanAttack>,
    air_unit: bool,
    immune_to_magic: bool,
    notes: String,
    special_rule: Option<SpecialRule>,
}

impl UnitProfileBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            armor_type: None,
            attack_type: None,
            race: None,
            tier: None,
            can_attack: None,
            air_unit: false,
            immune_to_magic: false,
            notes: String::new(),
            special_rule: None,
        }
    }

    pub fn armor(mut self, armor_type: ArmorType) -> Self {
        self.armor_type = Some(armor_type);
        self
    }

    pub fn attack(mut self, attack_type: AttackType) -> Self {
        self.attack_type = Some(attack_type);
        self
    }

    pub fn race(mut self, race: Race) -> Self {
        self.race = Some(race);
        self
    }

    pub fn tier(mut self, tier: Tier) -> Self {
        self.tier = Some(tier);
        self
    }

    pub fn can_attack(mut self, can_attack: CanAttack) -> Self {
        self.can_attack = Some(can_attack);
        self
    }

    /// Mark the unit as flying.
    pub fn air(mut self) -> Self {
        self.air_unit = true;
        self
    }

    pub fn immune_to_magic(mut self) -> Self {
        self.immune_to_magic = true;
        self
    }

    pub fn notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }

    pub fn special_rule(mut self, rule: SpecialRule) -> Self {
        self.special_rule = Some(rule);
        self
    }

    pub fn build(self) -> UnitProfile {
        UnitProfile {
            name: self.name,
            armor_type: self.armor_type.unwrap_or(ArmorType::Light),
            attack_type: self.attack_type.unwrap_or(AttackType::Normal),
            race: self.race.unwrap_or_default(),
            tier: self.tier.unwrap_or_default(),
            can_attack: self.can_attack.unwrap_or_default(),
            air_unit: self.air_unit,
            immune_to_magic: self.immune_to_magic,
            notes: self.notes,
            special_rule: self.special_rule,
        }
    }
}
