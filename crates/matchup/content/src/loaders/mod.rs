//! Content loaders for reading matchup data from files.

pub mod config;
pub mod factory;
pub mod rules;
pub mod units;

pub use config::ConfigLoader;
pub use factory::{Content, ContentFactory, bundled_data_dir};
pub use rules::{RuleEntry, RuleLoader};
pub use units::UnitLoader;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
