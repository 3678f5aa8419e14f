//! Read accessors for `HarvestConfig`.

use std::path::{Path, PathBuf};
use std::time::Duration;

use super::types::HarvestConfig;

impl HarvestConfig {
    /// Directory batch artifacts are written under.
    #[must_use]
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Backing file for the seen-link ledger.
    #[must_use]
    pub fn ledger_path(&self) -> &Path {
        &self.ledger_path
    }

    #[must_use]
    pub fn headless(&self) -> bool {
        self.headless
    }

    #[must_use]
    pub fn home_url(&self) -> &str {
        &self.home_url
    }

    #[must_use]
    pub fn catalog_url(&self) -> &str {
        &self.catalog_url
    }

    #[must_use]
    pub fn search_url(&self) -> &str {
        &self.search_url
    }

    #[must_use]
    pub fn genre_urls(&self) -> &[String] {
        &self.genre_urls
    }

    #[must_use]
    pub fn search_terms(&self) -> &[String] {
        &self.search_terms
    }

    #[must_use]
    pub fn search_attempts(&self) -> u32 {
        self.search_attempts
    }

    /// Settle time after navigating to a new view.
    #[must_use]
    pub fn navigation_settle(&self) -> Duration {
        Duration::from_millis(self.navigation_settle_ms)
    }

    /// Settle time between stabilization scroll passes.
    #[must_use]
    pub fn stabilize_settle(&self) -> Duration {
        Duration::from_millis(self.stabilize_settle_ms)
    }

    /// Wall-clock budget for one stabilization loop.
    #[must_use]
    pub fn stabilize_budget(&self) -> Duration {
        Duration::from_secs(self.stabilize_budget_secs)
    }

    /// Pacing delay between search attempts.
    #[must_use]
    pub fn search_delay(&self) -> Duration {
        Duration::from_secs(self.search_delay_secs)
    }

    /// Pacing delay between genre views.
    #[must_use]
    pub fn genre_delay(&self) -> Duration {
        Duration::from_secs(self.genre_delay_secs)
    }

    /// Chrome user data directory, if profile isolation was requested.
    #[must_use]
    pub fn chrome_data_dir(&self) -> Option<&PathBuf> {
        self.chrome_data_dir.as_ref()
    }
}
