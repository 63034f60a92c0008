//! Command-line arguments.
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use matchup_core::{CompositionType, Race, Tier};

/// Unit matchup advisor: which of my units counter theirs?
#[derive(Parser, Debug)]
#[command(name = "matchup", version)]
#[command(about = "Find the best counters to opposing units")]
pub struct Cli {
    /// Content directory (units.ron, rules.ron, config.toml)
    #[arg(long, global = true, env = "MATCHUP_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Rank counters for one or more opposing units
    Counters(CountersArgs),

    /// List the catalog, or one race's roster ordered by tier
    Units {
        #[arg(long, value_parser = Race::parse)]
        race: Option<Race>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Show one unit's profile and damage table rankings
    Show {
        name: String,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

#[derive(Args, Debug, Clone)]
pub struct CountersArgs {
    /// Race to draw counters from (default from config.toml)
    #[arg(long, value_parser = Race::parse)]
    pub race: Option<Race>,

    /// Highest tier of counter to consider
    #[arg(long, value_parser = Tier::parse)]
    pub tier: Option<Tier>,

    /// "Total Power", "Damage Dealt" or "Damage Taken"
    #[arg(long, value_parser = CompositionType::parse)]
    pub composition: Option<CompositionType>,

    /// Race whose roster is listed alongside the results
    #[arg(long, value_parser = Race::parse)]
    pub opponent_race: Option<Race>,

    /// Counters to keep per opposing unit (0-3)
    #[arg(long)]
    pub top: Option<usize>,

    /// Print JSON of the raw results and the grouped report
    #[arg(long)]
    pub json: bool,

    /// Opposing unit names
    #[arg(required = true)]
    pub opponents: Vec<String>,
}
