//! Client configuration loaded from the process environment.
use std::env;
use std::path::PathBuf;

/// Configuration required to bootstrap the advisor.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    /// Directory holding `units.ron`, `rules.ron` and `config.toml`.
    pub data_dir: PathBuf,
    /// When set, logs are also written to `matchup.log` in this directory.
    pub log_dir: Option<PathBuf>,
}

impl ClientConfig {
    pub const DATA_DIR_VAR: &'static str = "MATCHUP_DATA_DIR";
    pub const LOG_DIR_VAR: &'static str = "MATCHUP_LOG_DIR";

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `MATCHUP_DATA_DIR` - Content directory (default: bundled data)
    /// - `MATCHUP_LOG_DIR` - Directory for the log file (default: stderr only)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(data_dir) = read_env::<PathBuf>(Self::DATA_DIR_VAR) {
            config.data_dir = data_dir;
        }
        config.log_dir = read_env::<PathBuf>(Self::LOG_DIR_VAR);

        config
    }

    pub fn with_data_dir(mut self, data_dir: impl Into<PathBuf>) -> Self {
        self.data_dir = data_dir.into();
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            data_dir: matchup_content::bundled_data_dir(),
            log_dir: None,
        }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    let value = env::var(key).ok()?;
    if value.trim().is_empty() {
        return None;
    }
    value.parse().ok()
}
