//! Ordered sweep over the fixed genre views.

use anyhow::Result;
use tracing::{debug, info};

use super::HarvestSession;
use crate::batch_writer::BatchWriter;
use crate::config::HarvestConfig;
use crate::extractor::collect_detail_links;
use crate::ledger::SeenLedger;
use crate::page_view::PageView;
use crate::stabilizer::PageStabilizer;

const GENRE_PREFIX: &str = "genre";

/// Sweep every configured genre view in order.
///
/// Each genre is navigated, stabilized, extracted, and filtered; a batch is
/// written when anything new turned up, and the batch id advances only on
/// such a write. A fixed pacing delay separates genres regardless of
/// outcome.
///
/// Returns the running total of new links found across all genres.
pub async fn run_genre_sweep(
    view: &dyn PageView,
    stabilizer: &PageStabilizer,
    ledger: &mut SeenLedger,
    writer: &BatchWriter,
    session: &mut HarvestSession,
    config: &HarvestConfig,
) -> Result<usize> {
    let mut found_total = 0;

    for genre_url in config.genre_urls() {
        info!("Loading genre view {genre_url}");
        view.navigate(genre_url).await?;
        tokio::time::sleep(config.navigation_settle()).await;
        stabilizer.stabilize(view).await?;

        let extracted: Vec<String> = collect_detail_links(view).await?.into_iter().collect();
        let new_links = ledger.filter_new(&extracted);
        let duplicates = extracted.len() - new_links.len();

        if new_links.is_empty() {
            info!("No new links in this genre");
        } else {
            writer
                .write(&new_links, session.genre_batch(), GENRE_PREFIX)
                .await?;
            ledger.record(&new_links).await?;
            session.advance_genre_batch();
            found_total += new_links.len();
            info!(
                "Found {} new links, skipped {} duplicates",
                new_links.len(),
                duplicates
            );
        }

        debug!("Waiting {:?} before the next genre", config.genre_delay());
        tokio::time::sleep(config.genre_delay()).await;
    }

    info!(
        "Genre sweep complete: {found_total} new links across {} genres",
        config.genre_urls().len()
    );
    Ok(found_total)
}
