use super::report::{CounterReport, build_counter_report};
use super::selector::{CounterResult, CounterSelector};
use crate::catalog::CatalogOracle;
use crate::config::MatchupConfig;
use crate::error::DomainError;
use crate::unit::{CompositionType, Race, Tier, UnitProfile};

/// Parameters of one counter lookup.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct CounterRequest {
    /// Race the counters are drawn from.
    pub race: Race,
    /// Race whose roster is offered for opponent selection.
    pub opponent_race: Race,
    pub max_tier: Tier,
    pub composition: CompositionType,
    /// Opposing unit names, in the order results should come back.
    pub opponents: Vec<String>,
    pub top_n: usize,
}

impl CounterRequest {
    pub fn new() -> Self {
        Self::from_config(&MatchupConfig::new())
    }

    /// A request carrying the configured defaults and no opponents.
    pub fn from_config(config: &MatchupConfig) -> Self {
        Self {
            race: config.default_race,
            opponent_race: config.default_opponent_race,
            max_tier: config.default_max_tier,
            composition: config.default_composition,
            opponents: Vec::new(),
            top_n: config.effective_top_n(),
        }
    }

    /// Applies string-typed form parameters on top of the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidEnumValue`] or [`DomainError::InvalidTier`]
    /// for a value outside its set.
    pub fn parse(race: &str, max_tier: &str, composition: &str) -> Result<Self, DomainError> {
        Ok(Self::new()
            .with_race(Race::parse(race)?)
            .with_max_tier(Tier::parse(max_tier)?)
            .with_composition(CompositionType::parse(composition)?))
    }

    pub fn with_race(mut self, race: Race) -> Self {
        self.race = race;
        self
    }

    pub fn with_opponent_race(mut self, race: Race) -> Self {
        self.opponent_race = race;
        self
    }

    pub fn with_max_tier(mut self, max_tier: Tier) -> Self {
        self.max_tier = max_tier;
        self
    }

    pub fn with_composition(mut self, composition: CompositionType) -> Self {
        self.composition = composition;
        self
    }

    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }

    /// Appends one opposing unit by name.
    pub fn opponent(mut self, name: impl Into<String>) -> Self {
        self.opponents.push(name.into());
        self
    }

    pub fn with_opponents<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.opponents = names.into_iter().map(Into::into).collect();
        self
    }

    /// Resolves the opponents and selects counters for each of them.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::UnknownUnit`] if an opponent name is not in the
    /// catalog.
    pub fn run<'a, C: CatalogOracle>(
        &self,
        catalog: &'a C,
    ) -> Result<CounterResponse<'a>, DomainError> {
        let opponents = catalog.resolve(self.opponents.as_slice())?;
        let selector = CounterSelector::new(catalog).with_top_n(self.top_n);

        let results =
            selector.unit_counters(&opponents, self.race, self.max_tier, self.composition);
        let report = build_counter_report(&results, self.composition);

        Ok(CounterResponse {
            roster: catalog.roster(self.opponent_race),
            results,
            report,
        })
    }
}

impl Default for CounterRequest {
    fn default() -> Self {
        Self::new()
    }
}

/// Everything a counter lookup produces.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CounterResponse<'a> {
    /// Selectable opponents of the requested opponent race, by (tier, name).
    pub roster: Vec<&'a UnitProfile>,
    /// Ranked counters per opponent, in request order.
    pub results: Vec<CounterResult<'a>>,
    pub report: CounterReport<'a>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::UnitCatalog;
    use crate::unit::{ArmorType, AttackType};

    fn catalog() -> UnitCatalog {
        UnitCatalog::new(vec![
            UnitProfile::builder("Footman")
                .armor(ArmorType::Heavy)
                .build(),
            UnitProfile::builder("Mortar Team")
                .armor(ArmorType::Heavy)
                .attack(AttackType::Siege)
                .tier(Tier::TWO)
                .build(),
            UnitProfile::builder("Raider")
                .race(Race::Orc)
                .armor(ArmorType::Medium)
                .tier(Tier::TWO)
                .build(),
            UnitProfile::builder("Grunt")
                .race(Race::Orc)
                .armor(ArmorType::Heavy)
                .build(),
        ])
        .unwrap()
    }

    #[test]
    fn defaults_match_the_advisor_form() {
        let request = CounterRequest::default();

        assert_eq!(request.race, Race::Human);
        assert_eq!(request.opponent_race, Race::Orc);
        assert_eq!(request.max_tier, Tier::ONE);
        assert_eq!(request.composition, CompositionType::TotalPower);
        assert!(request.opponents.is_empty());
        assert_eq!(request.top_n, MatchupConfig::DEFAULT_TOP_N);
    }

    #[test]
    fn parse_rejects_values_outside_their_sets() {
        let request = CounterRequest::parse("Night Elf", "2", "Damage Taken").unwrap();
        assert_eq!(request.race, Race::NightElf);
        assert_eq!(request.max_tier, Tier::TWO);
        assert_eq!(request.composition, CompositionType::DamageTaken);

        assert!(matches!(
            CounterRequest::parse("Naga", "1", "Total Power"),
            Err(DomainError::InvalidEnumValue { field: "race", .. })
        ));
        assert_eq!(
            CounterRequest::parse("Human", "4", "Total Power"),
            Err(DomainError::InvalidTier(4))
        );
        assert!(matches!(
            CounterRequest::parse("Human", "1", "total power"),
            Err(DomainError::InvalidEnumValue {
                field: "army_composition_type",
                ..
            })
        ));
    }

    #[test]
    fn run_returns_roster_results_and_report() {
        let catalog = catalog();
        let request = CounterRequest::new()
            .with_max_tier(Tier::TWO)
            .with_opponents(["Raider", "Grunt"]);

        let response = request.run(&catalog).unwrap();

        let roster: Vec<_> = response.roster.iter().map(|u| u.name.as_str()).collect();
        assert_eq!(roster, ["Grunt", "Raider"]);

        assert_eq!(response.results.len(), 2);
        assert_eq!(response.results[0].opponent.name, "Raider");
        // Footman +50 (Normal vs Medium), Mortar Team -50 (Siege vs Medium).
        assert_eq!(
            response.results[0].best().map(|u| u.name.as_str()),
            Some("Footman")
        );
        // Both break even against the Grunt; tier decides.
        assert_eq!(
            response.results[1].best().map(|u| u.name.as_str()),
            Some("Mortar Team")
        );
        assert_eq!(response.report.len(), 2);
        assert_eq!(response.report.groups[0].entries[0].magnitude, "+50 PWR");
        assert_eq!(response.report.groups[1].entries[0].magnitude, "+0 PWR");
    }

    #[test]
    fn max_tier_excludes_higher_units() {
        let catalog = catalog();
        let response = CounterRequest::new()
            .opponent("Grunt")
            .run(&catalog)
            .unwrap();

        assert_eq!(response.results[0].counters.len(), 1);
        assert_eq!(response.results[0].counters[0].name, "Footman");
    }

    #[test]
    fn unknown_opponent_is_an_error() {
        let catalog = catalog();
        let result = CounterRequest::new().opponent("Peon").run(&catalog);

        assert_eq!(result, Err(DomainError::UnknownUnit("Peon".into())));
    }

    #[test]
    fn no_opponents_gives_empty_results() {
        let catalog = catalog();
        let response = CounterRequest::new().run(&catalog).unwrap();

        assert!(response.results.is_empty());
        assert!(response.report.is_empty());
        assert_eq!(response.roster.len(), 2);
    }
}
