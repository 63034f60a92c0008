//! Advisor builder with dependency injection pattern.

use std::path::PathBuf;

use anyhow::{Context, Result};
use matchup_content::{Content, ContentFactory};

use crate::Advisor;

/// Builder for constructing an [`Advisor`].
///
/// Either preloaded content or a data directory must be provided; preloaded
/// content wins when both are set.
#[derive(Default)]
pub struct AdvisorBuilder {
    content: Option<Content>,
    data_dir: Option<PathBuf>,
}

impl AdvisorBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load content from this directory on build.
    pub fn data_dir(mut self, data_dir: impl Into<PathBuf>) -> Self {
        self.data_dir = Some(data_dir.into());
        self
    }

    /// Use already loaded content.
    pub fn content(mut self, content: Content) -> Self {
        self.content = Some(content);
        self
    }

    /// Build the Advisor.
    ///
    /// # Errors
    ///
    /// Returns an error if neither content nor a data directory is set, or if
    /// the data directory fails to load.
    pub fn build(self) -> Result<Advisor> {
        let content = match self.content {
            Some(content) => content,
            None => {
                let data_dir = self
                    .data_dir
                    .context("Content is required. Use .content() or .data_dir() to set it.")?;
                ContentFactory::new(&data_dir)
                    .load()
                    .with_context(|| format!("Failed to load content from {}", data_dir.display()))?
            }
        };

        Ok(Advisor { content })
    }
}
