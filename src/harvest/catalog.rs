//! Full-catalog sweep with operator-chosen random sampling.

use anyhow::Result;
use rand::seq::IndexedRandom;
use tracing::{info, warn};

use super::{HarvestReport, HarvestSession};
use crate::batch_writer::BatchWriter;
use crate::config::HarvestConfig;
use crate::extractor::collect_detail_links;
use crate::ledger::SeenLedger;
use crate::page_view::PageView;
use crate::stabilizer::PageStabilizer;

const CATALOG_PREFIX: &str = "movies";

/// Operator-supplied sample size for the catalog sweep.
///
/// Implementations recover from invalid input locally (by re-prompting)
/// and always return a value; clamping to the available pool is the
/// strategy's job, not the prompt's.
pub trait SamplePrompt {
    fn sample_size(&mut self, available: usize) -> usize;
}

/// Sweep the full catalog view once.
///
/// Stabilizes the view, extracts every detail-page link, and reports how
/// many are unseen. When anything new exists, the operator picks a sample
/// size; the sample is drawn uniformly from the FULL extracted pool
/// (clamped to its size), filtered against the ledger a second time, and
/// written as one batch. The batch id advances once per invocation
/// regardless of outcome.
pub async fn run_catalog_sweep(
    view: &dyn PageView,
    stabilizer: &PageStabilizer,
    ledger: &mut SeenLedger,
    writer: &BatchWriter,
    session: &mut HarvestSession,
    prompt: &mut dyn SamplePrompt,
    config: &HarvestConfig,
) -> Result<HarvestReport> {
    let batch_id = session.next_catalog_batch();

    info!("Loading catalog view {}", config.catalog_url());
    view.navigate(config.catalog_url()).await?;
    tokio::time::sleep(config.navigation_settle()).await;
    stabilizer.stabilize(view).await?;

    let extracted: Vec<String> = collect_detail_links(view).await?.into_iter().collect();
    info!("Loaded {} title links from the catalog", extracted.len());
    if extracted.is_empty() {
        info!("Catalog view yielded no title links");
        return Ok(HarvestReport::default());
    }

    let unseen = ledger.filter_new(&extracted);
    if unseen.is_empty() {
        info!(
            "All {} catalog links are already recorded; nothing to sample",
            extracted.len()
        );
        return Ok(HarvestReport {
            extracted: extracted.len(),
            new_links: 0,
            duplicates: extracted.len(),
        });
    }
    info!("{} of them are not yet recorded", unseen.len());

    let requested = prompt.sample_size(extracted.len());
    let take = requested.min(extracted.len());
    let sample: Vec<String> = extracted
        .choose_multiple(&mut rand::rng(), take)
        .cloned()
        .collect();

    let new_links = ledger.filter_new(&sample);
    let duplicates = sample.len() - new_links.len();
    if new_links.is_empty() {
        warn!("All {} sampled links were duplicates", sample.len());
        return Ok(HarvestReport {
            extracted: extracted.len(),
            new_links: 0,
            duplicates,
        });
    }

    writer.write(&new_links, batch_id, CATALOG_PREFIX).await?;
    ledger.record(&new_links).await?;
    info!(
        "Saved {} new links, skipped {} duplicates",
        new_links.len(),
        duplicates
    );

    Ok(HarvestReport {
        extracted: extracted.len(),
        new_links: new_links.len(),
        duplicates,
    })
}
