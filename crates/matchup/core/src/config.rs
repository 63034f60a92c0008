use crate::unit::{CompositionType, Race, Tier};

/// Engine configuration constants and tunable defaults.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct MatchupConfig {
    /// Counters returned per opposing unit, capped at `MAX_COUNTERS`.
    pub top_n: usize,
    /// Highest tier considered when a request does not name one.
    pub default_max_tier: Tier,
    /// Player race when a request does not name one.
    pub default_race: Race,
    /// Race whose roster is listed for opponent selection.
    pub default_opponent_race: Race,
    pub default_composition: CompositionType,
}

impl MatchupConfig {
    // ===== compile-time constants used as type parameters =====
    /// Capacity of a counter list.
    pub const MAX_COUNTERS: usize = 3;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_TOP_N: usize = 3;
    pub const DEFAULT_MAX_TIER: Tier = Tier::ONE;

    pub fn new() -> Self {
        Self {
            top_n: Self::DEFAULT_TOP_N,
            default_max_tier: Self::DEFAULT_MAX_TIER,
            default_race: Race::Human,
            default_opponent_race: Race::Orc,
            default_composition: CompositionType::TotalPower,
        }
    }

    pub fn with_top_n(top_n: usize) -> Self {
        Self {
            top_n,
            ..Self::new()
        }
    }

    /// `top_n` capped at what a counter list can hold.
    pub fn effective_top_n(&self) -> usize {
        self.top_n.min(Self::MAX_COUNTERS)
    }
}

impl Default for MatchupConfig {
    fn default() -> Self {
        Self::new()
    }
}
