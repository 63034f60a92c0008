//! Opponents grouped by the counter that beats them best.

use super::selector::CounterResult;
use crate::unit::{CompositionType, UnitProfile};

/// One opposing unit in a counter's group, with the counter's formatted
/// magnitude against it.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CounterEntry<'a> {
    pub magnitude: String,
    pub opponent: &'a UnitProfile,
}

/// Every opposing unit a single counter was selected as best against.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CounterGroup<'a> {
    pub counter: &'a UnitProfile,
    pub entries: Vec<CounterEntry<'a>>,
}

/// Counter results inverted into groups keyed by best counter.
///
/// Groups appear in the order their counter was first selected; entries keep
/// the opponent order of the input results. Opponents with no qualifying
/// counter land in `unmatched` instead of a group.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CounterReport<'a> {
    pub composition: CompositionType,
    pub groups: Vec<CounterGroup<'a>>,
    pub unmatched: Vec<&'a UnitProfile>,
}

impl<'a> CounterReport<'a> {
    /// The group headed by the counter named `name`.
    pub fn group_for(&self, name: &str) -> Option<&CounterGroup<'a>> {
        self.groups.iter().find(|group| group.counter.name == name)
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CounterGroup<'a>> {
        self.groups.iter()
    }
}

/// Groups each opponent under its single best counter.
pub fn build_counter_report<'a>(
    results: &[CounterResult<'a>],
    composition: CompositionType,
) -> CounterReport<'a> {
    let mut groups: Vec<CounterGroup<'a>> = Vec::new();
    let mut unmatched = Vec::new();

    for result in results {
        let Some(best) = result.best() else {
            unmatched.push(result.opponent);
            continue;
        };

        let entry = CounterEntry {
            magnitude: best.format_magnitude(result.opponent, composition),
            opponent: result.opponent,
        };

        // Profiles are unique by name within a catalog.
        match groups.iter_mut().find(|group| group.counter.name == best.name) {
            Some(group) => group.entries.push(entry),
            None => groups.push(CounterGroup {
                counter: best,
                entries: vec![entry],
            }),
        }
    }

    CounterReport {
        composition,
        groups,
        unmatched,
    }
}
