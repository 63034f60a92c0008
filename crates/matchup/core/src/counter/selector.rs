//! Top-N counter selection against opposing units.

use arrayvec::ArrayVec;

use crate::catalog::CatalogOracle;
use crate::config::MatchupConfig;
use crate::ranking::RankingPolicy;
use crate::unit::{CompositionType, Race, Tier, UnitProfile};

/// Best-first list of counters for one opposing unit.
pub type Counters<'a> = ArrayVec<&'a UnitProfile, { MatchupConfig::MAX_COUNTERS }>;

/// An opposing unit paired with its ranked counters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CounterResult<'a> {
    pub opponent: &'a UnitProfile,
    pub counters: Counters<'a>,
}

impl<'a> CounterResult<'a> {
    /// The single best counter, or `None` when no candidate qualified.
    pub fn best(&self) -> Option<&'a UnitProfile> {
        self.counters.first().copied()
    }
}

/// Selects counters from a catalog snapshot.
#[derive(Debug)]
pub struct CounterSelector<'a, C: CatalogOracle + ?Sized> {
    catalog: &'a C,
    top_n: usize,
}

impl<'a, C: CatalogOracle + ?Sized> Clone for CounterSelector<'a, C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, C: CatalogOracle + ?Sized> Copy for CounterSelector<'a, C> {}

impl<'a, C: CatalogOracle + ?Sized> CounterSelector<'a, C> {
    /// A selector returning up to [`MatchupConfig::MAX_COUNTERS`] counters.
    pub fn new(catalog: &'a C) -> Self {
        Self {
            catalog,
            top_n: MatchupConfig::MAX_COUNTERS,
        }
    }

    /// Sets how many counters to keep, capped at `MAX_COUNTERS`. Zero keeps none.
    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n.min(MatchupConfig::MAX_COUNTERS);
        self
    }

    pub fn top_n(&self) -> usize {
        self.top_n
    }

    /// Catalog units of `race` with tier at most `max_tier`, in base order.
    pub fn candidates(&self, race: Race, max_tier: Tier) -> Vec<&'a UnitProfile> {
        self.catalog
            .units()
            .iter()
            .filter(|unit| unit.race == race && unit.tier <= max_tier)
            .collect()
    }

    /// The best counters to `opponent` among `race` units up to `max_tier`.
    ///
    /// Candidates are stable-sorted from base order, so genuinely tied units
    /// keep their catalog order. Returns an empty list when no unit qualifies.
    pub fn best_counters(
        &self,
        opponent: &UnitProfile,
        race: Race,
        max_tier: Tier,
        composition: CompositionType,
    ) -> Counters<'a> {
        let policy = RankingPolicy::from(composition);
        let mut candidates = self.candidates(race, max_tier);
        candidates.sort_by(|a, b| policy.compare(a, b, opponent));

        candidates.into_iter().take(self.top_n).collect()
    }

    /// Maps every opposing unit through [`best_counters`](Self::best_counters),
    /// preserving opponent order.
    pub fn unit_counters(
        &self,
        opponents: &[&'a UnitProfile],
        race: Race,
        max_tier: Tier,
        composition: CompositionType,
    ) -> Vec<CounterResult<'a>> {
        opponents
            .iter()
            .map(|&opponent| CounterResult {
                opponent,
                counters: self.best_counters(opponent, race, max_tier, composition),
            })
            .collect()
    }
}
