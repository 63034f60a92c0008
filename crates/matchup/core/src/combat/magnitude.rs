//! Display figure for a counter under a given composition type.

use core::fmt;

use crate::unit::{CompositionType, UnitProfile};

/// The number a composition type ranks by, ready for display.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Magnitude {
    /// Net power, rendered signed: `+25 PWR`.
    Power(i32),
    /// Damage dealt percentage: `deals 200%`.
    Dealt(u16),
    /// Damage taken percentage: `takes 35%`.
    Taken(u16),
}

impl Magnitude {
    /// Measures `unit` against `other` under `composition`.
    pub fn measure(unit: &UnitProfile, other: &UnitProfile, composition: CompositionType) -> Self {
        match composition {
            CompositionType::TotalPower => Self::Power(unit.power_against(other)),
            CompositionType::DamageDealt => Self::Dealt(unit.deals_damage_against(other)),
            CompositionType::DamageTaken => Self::Taken(unit.takes_damage_from(other)),
        }
    }
}

impl fmt::Display for Magnitude {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Power(power) => write!(f, "{power:+} PWR"),
            Self::Dealt(percent) => write!(f, "deals {percent}%"),
            Self::Taken(percent) => write!(f, "takes {percent}%"),
        }
    }
}

impl UnitProfile {
    /// Formatted magnitude of this unit against `other`.
    pub fn format_magnitude(&self, other: &UnitProfile, composition: CompositionType) -> String {
        Magnitude::measure(self, other, composition).to_string()
    }
}
