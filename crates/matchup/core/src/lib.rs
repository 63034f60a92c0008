//! Combat-effectiveness and counter-selection engine.
//!
//! `matchup-core` answers one question: given an opposing unit of a known race,
//! armor and attack profile, which units of my own race counter it best?
//!
//! The crate is a pure function of an immutable catalog snapshot and a few
//! request parameters. Nothing here performs I/O, logs, or mutates a profile,
//! so every entry point can be shared across threads without locking.
//!
//! # Layers
//!
//! - [`matrix`]: the armor × attack damage percentage table and its inverse
//! - [`unit`]: unit profiles, their enums, and per-unit special rules
//! - [`combat`]: pairwise offense, defense, and net power between two profiles
//! - [`ranking`]: the three comparator policies and their tie-break cascades
//! - [`counter`]: candidate filtering, top-N selection, and the grouped report
//! - [`catalog`]: the read-only catalog oracle and its in-memory snapshot
pub mod catalog;
pub mod combat;
pub mod config;
pub mod counter;
pub mod error;
pub mod matrix;
pub mod ranking;
pub mod unit;

pub use catalog::{CatalogOracle, UnitCatalog};
pub use combat::Magnitude;
pub use config::MatchupConfig;
pub use counter::{
    CounterEntry, CounterGroup, CounterReport, CounterRequest, CounterResponse, CounterResult,
    CounterSelector, Counters, build_counter_report,
};
pub use error::{DomainError, ErrorSeverity, MatchupError};
pub use matrix::DamageMatrix;
pub use ranking::{
    RankingPolicy, attack_power_comparison, defense_comparison, total_power_comparison,
};
pub use unit::{
    ArmorType, AttackType, CanAttack, CompositionType, Race, SpecialRule, SpecialRuleTable, Tier,
    UnitProfile, UnitProfileBuilder, UnitRecord,
};
