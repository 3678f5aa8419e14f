//! Randomized keyword search over the catalog's search view.

use anyhow::{Context, Result};
use rand::seq::IndexedRandom;
use tracing::{debug, info};
use url::Url;

use super::HarvestSession;
use crate::batch_writer::BatchWriter;
use crate::config::HarvestConfig;
use crate::extractor::collect_detail_links;
use crate::ledger::SeenLedger;
use crate::page_view::PageView;

const SEARCH_PREFIX: &str = "search";

/// Run a fixed budget of randomized keyword searches.
///
/// Each attempt picks one keyword uniformly at random, navigates to the
/// search view, waits a fixed settle interval (search results load eagerly,
/// so there is no stabilization loop), extracts and filters, and writes a
/// batch when anything new turned up. The batch id advances only on a
/// successful write. Every attempt is followed by the same pacing delay so
/// the search view is not hammered.
///
/// Returns the running total of new links found across all attempts.
pub async fn run_keyword_search(
    view: &dyn PageView,
    ledger: &mut SeenLedger,
    writer: &BatchWriter,
    session: &mut HarvestSession,
    config: &HarvestConfig,
) -> Result<usize> {
    let attempts = config.search_attempts();
    let mut found_total = 0;

    for attempt in 1..=attempts {
        let term = config
            .search_terms()
            .choose(&mut rand::rng())
            .context("Search vocabulary is empty")?;

        let mut search_url =
            Url::parse(config.search_url()).context("Failed to parse search base URL")?;
        search_url.query_pairs_mut().append_pair("q", term);

        info!("Search attempt {attempt}/{attempts}: query '{term}'");
        view.navigate(search_url.as_str()).await?;
        tokio::time::sleep(config.navigation_settle()).await;

        let extracted: Vec<String> = collect_detail_links(view).await?.into_iter().collect();
        let new_links = ledger.filter_new(&extracted);
        let duplicates = extracted.len() - new_links.len();

        if new_links.is_empty() {
            info!("No new links for query '{term}'");
        } else {
            writer
                .write(&new_links, session.search_batch(), SEARCH_PREFIX)
                .await?;
            ledger.record(&new_links).await?;
            session.advance_search_batch();
            found_total += new_links.len();
            info!(
                "Found {} new links, skipped {} duplicates",
                new_links.len(),
                duplicates
            );
        }

        debug!("Waiting {:?} before the next search", config.search_delay());
        tokio::time::sleep(config.search_delay()).await;
    }

    info!("Search complete: {found_total} new links across {attempts} attempts");
    Ok(found_total)
}
