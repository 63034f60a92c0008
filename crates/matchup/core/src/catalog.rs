//! Read-only unit catalog.
//!
//! The [`CatalogOracle`] trait lets the counter selector run against any store
//! that can hand out an ordered slice of validated profiles. [`UnitCatalog`] is
//! the in-memory snapshot used by loaders and tests.

use std::collections::HashMap;

use crate::error::DomainError;
use crate::unit::{Race, SpecialRuleTable, UnitProfile, UnitRecord};

/// Oracle providing the unit catalog.
///
/// `units()` must return profiles in a stable base order (insertion order for
/// [`UnitCatalog`]). Counter selection relies on it to break true ties
/// reproducibly.
pub trait CatalogOracle: Send + Sync {
    /// Every profile, in base order.
    fn units(&self) -> &[UnitProfile];

    /// Returns the profile with the given name.
    fn find(&self, name: &str) -> Option<&UnitProfile> {
        self.units().iter().find(|unit| unit.name == name)
    }

    /// Units of one race ordered by (tier, name), for opponent selection lists.
    fn roster(&self, race: Race) -> Vec<&UnitProfile> {
        let mut roster: Vec<_> = self.units().iter().filter(|unit| unit.race == race).collect();
        roster.sort_by(|a, b| a.tier.cmp(&b.tier).then_with(|| a.name.cmp(&b.name)));
        roster
    }

    /// Looks up opposing units by name, keeping the order they were given in.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::UnknownUnit`] for the first name not in the catalog.
    fn resolve<S: AsRef<str>>(&self, names: &[S]) -> Result<Vec<&UnitProfile>, DomainError>
    where
        Self: Sized,
    {
        names
            .iter()
            .map(|name| {
                let name = name.as_ref();
                self.find(name)
                    .ok_or_else(|| DomainError::UnknownUnit(name.to_owned()))
            })
            .collect()
    }
}

/// Immutable in-memory catalog snapshot.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UnitCatalog {
    units: Vec<UnitProfile>,
    index: HashMap<String, usize>,
}

impl UnitCatalog {
    /// Builds a catalog, keeping the given order as the base order.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::DuplicateUnit`] if two profiles share a name.
    pub fn new(units: Vec<UnitProfile>) -> Result<Self, DomainError> {
        let mut index = HashMap::with_capacity(units.len());
        for (position, unit) in units.iter().enumerate() {
            if index.insert(unit.name.clone(), position).is_some() {
                return Err(DomainError::DuplicateUnit(unit.name.clone()));
            }
        }

        Ok(Self { units, index })
    }

    /// Validates raw records and builds a catalog from them.
    pub fn from_records(
        records: Vec<UnitRecord>,
        rules: &SpecialRuleTable,
    ) -> Result<Self, DomainError> {
        let units = records
            .into_iter()
            .map(|record| UnitProfile::from_record(record, rules))
            .collect::<Result<Vec<_>, _>>()?;

        Self::new(units)
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &UnitProfile> {
        self.units.iter()
    }
}

impl CatalogOracle for UnitCatalog {
    fn units(&self) -> &[UnitProfile] {
        &self.units
    }

    fn find(&self, name: &str) -> Option<&UnitProfile> {
        self.index.get(name).map(|&position| &self.units[position])
    }
}
