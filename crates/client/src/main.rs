//! Matchup advisor binary.
//!
//! # Examples
//!
//! ```bash
//! matchup counters --race Human --tier 2 Grunt "Troll Headhunter"
//! matchup counters --composition "Damage Taken" --json Raider
//! matchup units --race Undead
//! matchup show Gargoyle
//! ```

use anyhow::Result;
use clap::Parser;
use matchup_client::{Advisor, Cli, ClientConfig, logging};

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    let mut config = ClientConfig::from_env();
    if let Some(data_dir) = &cli.data_dir {
        config = config.with_data_dir(data_dir);
    }

    let _guard = logging::setup_logging(config.log_dir.as_deref())?;
    tracing::debug!("Data directory: {}", config.data_dir.display());

    let advisor = Advisor::builder().data_dir(&config.data_dir).build()?;
    let output = advisor.execute(&cli.command)?;
    print!("{output}");

    Ok(())
}
