//! Core configuration type for harvesting runs.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::utils::constants::{
    CATALOG_URL, DEFAULT_OUTPUT_DIR, GENRE_DELAY, GENRE_URLS, HOME_URL, NAVIGATION_SETTLE,
    SEARCH_ATTEMPT_DELAY, SEARCH_ATTEMPTS, SEARCH_TERMS, SEARCH_URL, SEEN_LINKS_FILE,
    STABILIZE_BUDGET, STABILIZE_SETTLE,
};

/// Main configuration struct for harvesting runs.
///
/// All durations are stored as plain integers so a config file can express
/// them directly; the getters convert to `Duration`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HarvestConfig {
    /// Directory batch artifacts are written under, created on demand.
    pub(crate) output_dir: PathBuf,

    /// Backing file for the append-only seen-link ledger.
    pub(crate) ledger_path: PathBuf,

    /// Headless browsing breaks the manual-login step, so runs default to
    /// a headed window.
    pub(crate) headless: bool,

    pub(crate) home_url: String,
    pub(crate) catalog_url: String,
    pub(crate) search_url: String,
    pub(crate) genre_urls: Vec<String>,
    pub(crate) search_terms: Vec<String>,

    pub(crate) search_attempts: u32,
    pub(crate) navigation_settle_ms: u64,
    pub(crate) stabilize_settle_ms: u64,
    pub(crate) stabilize_budget_secs: u64,
    pub(crate) search_delay_secs: u64,
    pub(crate) genre_delay_secs: u64,

    /// Chrome user data directory for browser profile isolation.
    /// When unset, a per-process temp directory is used.
    #[serde(skip)]
    pub(crate) chrome_data_dir: Option<PathBuf>,
}

impl Default for HarvestConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            ledger_path: PathBuf::from(SEEN_LINKS_FILE),
            headless: false,
            home_url: HOME_URL.to_string(),
            catalog_url: CATALOG_URL.to_string(),
            search_url: SEARCH_URL.to_string(),
            genre_urls: GENRE_URLS.iter().map(|u| (*u).to_string()).collect(),
            search_terms: SEARCH_TERMS.iter().map(|t| (*t).to_string()).collect(),
            search_attempts: SEARCH_ATTEMPTS,
            navigation_settle_ms: NAVIGATION_SETTLE.as_millis() as u64,
            stabilize_settle_ms: STABILIZE_SETTLE.as_millis() as u64,
            stabilize_budget_secs: STABILIZE_BUDGET.as_secs(),
            search_delay_secs: SEARCH_ATTEMPT_DELAY.as_secs(),
            genre_delay_secs: GENRE_DELAY.as_secs(),
            chrome_data_dir: None,
        }
    }
}

impl HarvestConfig {
    /// Load a configuration from a JSON file.
    ///
    /// Missing fields fall back to their defaults, so a config file only
    /// needs to name the values it overrides.
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    /// Set the Chrome user data directory for browser profile isolation.
    #[must_use]
    pub fn with_chrome_data_dir(mut self, dir: PathBuf) -> Self {
        self.chrome_data_dir = Some(dir);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn defaults_cover_all_fixed_targets() {
        let config = HarvestConfig::default();
        assert_eq!(config.genre_urls.len(), 6);
        assert_eq!(config.search_terms.len(), 19);
        assert_eq!(config.search_attempts, 10);
        assert!(!config.headless);
    }

    #[test]
    fn partial_config_file_keeps_defaults() -> Result<()> {
        let dir = TempDir::new()?;
        let path = dir.path().join("harvest.json");
        std::fs::write(&path, r#"{ "output_dir": "custom_out", "search_attempts": 3 }"#)?;

        let config = HarvestConfig::from_file(&path)?;
        assert_eq!(config.output_dir, PathBuf::from("custom_out"));
        assert_eq!(config.search_attempts, 3);
        assert_eq!(config.ledger_path, PathBuf::from(SEEN_LINKS_FILE));
        Ok(())
    }
}
