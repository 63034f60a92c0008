//! Pairwise combat effectiveness.
//!
//! This module provides pure functions for scoring one unit against another.
//! Everything is deterministic and side-effect free.
//!
//! # Core Functions
//!
//! - `deals_damage_against`: damage percentage an attacker lands on a defender
//! - `takes_damage_from`: the mirror, defined through `deals_damage_against`
//! - `power_against`: net power, dealt minus taken
//! - `magnitude`: the composition-specific figure shown next to a counter

pub mod damage;
pub mod magnitude;

pub use damage::{deals_damage_against, power_against, takes_damage_from};
pub use magnitude::Magnitude;
