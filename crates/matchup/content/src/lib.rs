//! Data-driven content for the matchup engine.
//!
//! This crate houses the bundled unit catalog and provides loaders for
//! RON/TOML data files:
//! - Unit catalog (data-driven via RON)
//! - Special-rule table (data-driven via RON)
//! - Engine configuration (data-driven via TOML)
//!
//! Content is turned into an immutable [`UnitCatalog`](matchup_core::UnitCatalog)
//! snapshot before the engine ever sees it.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{
    ConfigLoader, Content, ContentFactory, RuleEntry, RuleLoader, UnitLoader, bundled_data_dir,
};
