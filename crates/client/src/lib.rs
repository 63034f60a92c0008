//! Command-line front end for the matchup engine.
//!
//! # Architecture
//!
//! ```text
//! main (composition root)
//!   ├─→ ClientConfig   (environment)
//!   ├─→ logging        (stderr + optional file)
//!   └─→ Advisor        (content snapshot + engine calls)
//!         └─→ render   (text or JSON)
//! ```
//!
//! The engine itself never logs; everything worth narrating happens here.

mod builder;
pub mod cli;
pub mod config;
pub mod logging;
pub mod render;

pub use builder::AdvisorBuilder;
pub use cli::{Cli, Command, CountersArgs};
pub use config::ClientConfig;

use anyhow::{Context, Result};
use matchup_content::Content;
use matchup_core::{
    CatalogOracle, CounterRequest, DamageMatrix, DomainError, MatchupConfig, MatchupError, Race,
};

/// Loaded content plus the operations the commands expose.
pub struct Advisor {
    content: Content,
}

impl Advisor {
    pub fn builder() -> AdvisorBuilder {
        AdvisorBuilder::new()
    }

    pub fn content(&self) -> &Content {
        &self.content
    }

    pub fn config(&self) -> &MatchupConfig {
        &self.content.config
    }

    /// Runs one parsed command and returns its output.
    pub fn execute(&self, command: &Command) -> Result<String> {
        match command {
            Command::Counters(args) => self.counters(args),
            Command::Units { race, json } => self.units(*race, *json),
            Command::Show { name, json } => self.show(name, *json),
        }
    }

    /// Builds a request from the arguments, filling gaps from config.
    pub fn request(&self, args: &CountersArgs) -> CounterRequest {
        let mut request =
            CounterRequest::from_config(self.config()).with_opponents(args.opponents.iter().cloned());

        if let Some(race) = args.race {
            request = request.with_race(race);
        }
        if let Some(tier) = args.tier {
            request = request.with_max_tier(tier);
        }
        if let Some(composition) = args.composition {
            request = request.with_composition(composition);
        }
        if let Some(race) = args.opponent_race {
            request = request.with_opponent_race(race);
        }
        if let Some(top) = args.top {
            request = request.with_top_n(top);
        }

        request
    }

    pub fn counters(&self, args: &CountersArgs) -> Result<String> {
        let request = self.request(args);
        tracing::info!(
            race = %request.race,
            max_tier = %request.max_tier,
            composition = %request.composition,
            opponents = request.opponents.len(),
            "selecting counters"
        );

        let response = request.run(&self.content.catalog).map_err(rejected)?;
        for result in &response.results {
            match result.best() {
                Some(best) => tracing::debug!(
                    opponent = %result.opponent.name,
                    best = %best.name,
                    "counter selected"
                ),
                None => tracing::warn!(opponent = %result.opponent.name, "no counter found"),
            }
        }

        if args.json {
            render::json(&response)
        } else {
            Ok(render::counters(&response))
        }
    }

    pub fn units(&self, race: Option<Race>, json: bool) -> Result<String> {
        let catalog = &self.content.catalog;
        let units = match race {
            Some(race) => catalog.roster(race),
            None => catalog.units().iter().collect(),
        };

        if json {
            render::json(&units)
        } else {
            Ok(render::units(units))
        }
    }

    pub fn show(&self, name: &str, json: bool) -> Result<String> {
        let unit = self
            .content
            .catalog
            .find(name)
            .with_context(|| format!("Unit '{}' not found in the catalog", name))?;

        if json {
            render::json(unit)
        } else {
            Ok(render::unit_detail(unit, DamageMatrix::standard()))
        }
    }
}

/// Logs a rejected request by severity and tags the error with its code.
fn rejected(err: DomainError) -> anyhow::Error {
    let code = err.error_code();
    if err.severity().is_internal() {
        tracing::error!(code, error = %err, "counter request failed");
    } else {
        tracing::warn!(code, error = %err, "counter request rejected");
    }
    anyhow::Error::new(err).context(format!("[{code}] counter request rejected"))
}
