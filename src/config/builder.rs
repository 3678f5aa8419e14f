//! Type-safe builder for `HarvestConfig` using the typestate pattern
//!
//! This module provides a fluent builder interface with compile-time
//! validation ensuring the output directory is set before building.

use std::marker::PhantomData;
use std::path::PathBuf;

use super::types::HarvestConfig;

/// Type state marking that the required output directory has been set.
pub struct WithOutputDir;

pub struct HarvestConfigBuilder<State = ()> {
    pub(crate) output_dir: Option<PathBuf>,
    pub(crate) overrides: HarvestConfig,
    pub(crate) _phantom: PhantomData<State>,
}

impl Default for HarvestConfigBuilder<()> {
    fn default() -> Self {
        Self {
            output_dir: None,
            overrides: HarvestConfig::default(),
            _phantom: PhantomData,
        }
    }
}

impl HarvestConfig {
    /// Create a builder for configuring a `HarvestConfig` with a fluent
    /// interface.
    #[must_use]
    pub fn builder() -> HarvestConfigBuilder<()> {
        HarvestConfigBuilder::default()
    }
}

impl HarvestConfigBuilder<()> {
    pub fn output_dir(self, dir: impl Into<PathBuf>) -> HarvestConfigBuilder<WithOutputDir> {
        HarvestConfigBuilder {
            output_dir: Some(dir.into()),
            overrides: self.overrides,
            _phantom: PhantomData,
        }
    }
}

impl HarvestConfigBuilder<WithOutputDir> {
    #[must_use]
    pub fn build(self) -> HarvestConfig {
        let mut config = self.overrides;
        if let Some(dir) = self.output_dir {
            config.output_dir = dir;
        }
        config
    }
}

// Optional settings, available in any builder state.
impl<State> HarvestConfigBuilder<State> {
    /// Backing file for the append-only seen-link ledger.
    #[must_use]
    pub fn ledger_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.overrides.ledger_path = path.into();
        self
    }

    /// Run the browser without a visible window. Only useful when the
    /// target site does not require a manual login.
    #[must_use]
    pub fn headless(mut self, headless: bool) -> Self {
        self.overrides.headless = headless;
        self
    }

    #[must_use]
    pub fn home_url(mut self, url: impl Into<String>) -> Self {
        self.overrides.home_url = url.into();
        self
    }

    #[must_use]
    pub fn catalog_url(mut self, url: impl Into<String>) -> Self {
        self.overrides.catalog_url = url.into();
        self
    }

    #[must_use]
    pub fn search_url(mut self, url: impl Into<String>) -> Self {
        self.overrides.search_url = url.into();
        self
    }

    #[must_use]
    pub fn genre_urls(mut self, urls: Vec<String>) -> Self {
        self.overrides.genre_urls = urls;
        self
    }

    #[must_use]
    pub fn search_terms(mut self, terms: Vec<String>) -> Self {
        self.overrides.search_terms = terms;
        self
    }

    /// Number of randomized search attempts per invocation.
    #[must_use]
    pub fn search_attempts(mut self, attempts: u32) -> Self {
        self.overrides.search_attempts = attempts;
        self
    }

    /// Settle time after navigation, in milliseconds.
    #[must_use]
    pub fn navigation_settle_ms(mut self, ms: u64) -> Self {
        self.overrides.navigation_settle_ms = ms;
        self
    }

    /// Settle time between stabilization scroll passes, in milliseconds.
    #[must_use]
    pub fn stabilize_settle_ms(mut self, ms: u64) -> Self {
        self.overrides.stabilize_settle_ms = ms;
        self
    }

    /// Wall-clock budget for one stabilization loop, in seconds.
    #[must_use]
    pub fn stabilize_budget_secs(mut self, secs: u64) -> Self {
        self.overrides.stabilize_budget_secs = secs;
        self
    }

    /// Pacing delay between search attempts, in seconds.
    #[must_use]
    pub fn search_delay_secs(mut self, secs: u64) -> Self {
        self.overrides.search_delay_secs = secs;
        self
    }

    /// Pacing delay between genre views, in seconds.
    #[must_use]
    pub fn genre_delay_secs(mut self, secs: u64) -> Self {
        self.overrides.genre_delay_secs = secs;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_requires_only_the_output_dir() {
        let config = HarvestConfig::builder().output_dir("out").build();
        assert_eq!(config.output_dir, PathBuf::from("out"));
        assert_eq!(config.search_attempts, 10);
    }

    #[test]
    fn optional_settings_apply_in_any_order() {
        let config = HarvestConfig::builder()
            .search_attempts(2)
            .output_dir("out")
            .headless(true)
            .genre_delay_secs(0)
            .build();

        assert!(config.headless);
        assert_eq!(config.search_attempts, 2);
        assert_eq!(config.genre_delay_secs, 0);
    }
}
