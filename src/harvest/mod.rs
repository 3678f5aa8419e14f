//! Harvest Strategies Module
//!
//! Three orchestrators share one shape: drive the browser to one or more
//! target views, extract detail-page links, filter them through the shared
//! seen-link ledger, write anything new in fixed-size batches, and record
//! the new links immediately so cross-mode and cross-run deduplication
//! holds. A view that yields nothing new is a normal, reported no-op.

pub mod catalog;
pub mod genre;
pub mod search;

pub use catalog::{SamplePrompt, run_catalog_sweep};
pub use genre::run_genre_sweep;
pub use search::run_keyword_search;

/// Per-view harvest result: consumed for reporting, never retained.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HarvestReport {
    /// Links extracted from the view before any filtering.
    pub extracted: usize,
    /// Links written and recorded as new.
    pub new_links: usize,
    /// Links dropped because the ledger already held them.
    pub duplicates: usize,
}

/// Per-mode batch counters, owned by the top-level menu loop and threaded
/// explicitly through each strategy invocation.
///
/// The catalog counter advances once per invocation; search and genre
/// counters advance only when an attempt actually writes a batch.
#[derive(Debug, Clone, Copy)]
pub struct HarvestSession {
    catalog_batch: u32,
    search_batch: u32,
    genre_batch: u32,
}

impl HarvestSession {
    #[must_use]
    pub fn new() -> Self {
        Self {
            catalog_batch: 1,
            search_batch: 1,
            genre_batch: 1,
        }
    }

    /// Consume the current catalog batch id and advance the counter.
    pub(crate) fn next_catalog_batch(&mut self) -> u32 {
        let id = self.catalog_batch;
        self.catalog_batch += 1;
        id
    }

    pub(crate) fn search_batch(&self) -> u32 {
        self.search_batch
    }

    pub(crate) fn advance_search_batch(&mut self) {
        self.search_batch += 1;
    }

    pub(crate) fn genre_batch(&self) -> u32 {
        self.genre_batch
    }

    pub(crate) fn advance_genre_batch(&mut self) {
        self.genre_batch += 1;
    }
}

impl Default for HarvestSession {
    fn default() -> Self {
        Self::new()
    }
}
