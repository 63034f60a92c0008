//! Per-unit override rules.
//!
//! A handful of archetypes bend the damage formula. Rather than comparing unit
//! names inside the formula, each profile carries an optional [`SpecialRule`]
//! resolved once, when the catalog is built, from a [`SpecialRuleTable`].

use super::AttackType;

/// An override of the standard damage formula attached to one archetype.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SpecialRule {
    /// The unit's attack type depends on the defender's layer.
    DualAttack {
        versus_air: AttackType,
        versus_ground: AttackType,
    },

    /// The unit takes half damage (truncated) from one attack type.
    Defend { halves: AttackType },
}

impl SpecialRule {
    /// Attack type this rule forces against a defender on the given layer.
    pub const fn attack_type_against(&self, defender_is_air: bool) -> Option<AttackType> {
        match *self {
            Self::DualAttack {
                versus_air,
                versus_ground,
            } => Some(if defender_is_air {
                versus_air
            } else {
                versus_ground
            }),
            Self::Defend { .. } => None,
        }
    }

    /// Adjusts damage received by the unit carrying this rule.
    pub fn incoming(&self, attack: AttackType, percent: u16) -> u16 {
        match *self {
            Self::Defend { halves } if halves == attack => percent / 2,
            _ => percent,
        }
    }

    /// Display label for the attack type, when the rule makes it ambiguous.
    pub fn attack_label(&self) -> Option<String> {
        match self {
            Self::DualAttack {
                versus_air,
                versus_ground,
            } => Some(format!("[{versus_air} or {versus_ground}]")),
            Self::Defend { .. } => None,
        }
    }
}

/// Name-keyed lookup of special rules.
///
/// The default table carries the two archetypes the standard ruleset knows
/// about. Catalog builders consult it for records that do not state a rule.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpecialRuleTable {
    rules: Vec<(String, SpecialRule)>,
}

impl SpecialRuleTable {
    pub const GARGOYLE: &'static str = "Gargoyle";
    pub const FOOTMAN_WITH_DEFEND: &'static str = "Footman (with Defend)";

    /// A table with no rules at all.
    pub fn empty() -> Self {
        Self { rules: Vec::new() }
    }

    pub fn new(rules: Vec<(String, SpecialRule)>) -> Self {
        Self { rules }
    }

    /// Returns the rule registered for a unit name, if any.
    pub fn resolve(&self, name: &str) -> Option<SpecialRule> {
        self.rules
            .iter()
            .find(|(rule_name, _)| rule_name == name)
            .map(|(_, rule)| *rule)
    }

    /// Registers or replaces the rule for a unit name.
    pub fn insert(&mut self, name: impl Into<String>, rule: SpecialRule) {
        let name = name.into();
        match self.rules.iter_mut().find(|(rule_name, _)| *rule_name == name) {
            Some(entry) => entry.1 = rule,
            None => self.rules.push((name, rule)),
        }
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &SpecialRule)> {
        self.rules.iter().map(|(name, rule)| (name.as_str(), rule))
    }
}

impl Default for SpecialRuleTable {
    fn default() -> Self {
        Self::new(vec![
            (
                Self::GARGOYLE.to_owned(),
                SpecialRule::DualAttack {
                    versus_air: AttackType::Normal,
                    versus_ground: AttackType::Piercing,
                },
            ),
            (
                Self::FOOTMAN_WITH_DEFEND.to_owned(),
                SpecialRule::Defend {
                    halves: AttackType::Piercing,
                },
            ),
        ])
    }
}
