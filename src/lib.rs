//! # reelharvest
//!
//! Interactive harvester for detail-page links from a streaming video
//! catalog. A real Chrome/Chromium session (so the operator can log in by
//! hand) is driven over CDP; three strategies sweep the catalog, randomized
//! keyword searches, and the fixed genre views, writing every newly
//! discovered link into small numbered batch files while an append-only
//! ledger keeps the output duplicate-free across modes and runs.
//!
//! ## Features
//!
//! - **Catalog sweep**: scroll the full catalog to a stable height, then
//!   write an operator-sized random sample of its links
//! - **Keyword search**: a fixed budget of random-vocabulary searches
//! - **Genre sweep**: an ordered pass over every configured genre view
//! - **Seen-link ledger**: append-only text file consulted before every
//!   write, so links are harvested at most once ever
//! - **Batch output**: plain text files of at most ten links each, named
//!   `{prefix}_{batch}_{chunk}.txt`

pub mod batch_writer;
pub mod browser_setup;
pub mod config;
pub mod extractor;
pub mod harvest;
pub mod ledger;
pub mod page_view;
pub mod stabilizer;
pub mod utils;

pub use batch_writer::BatchWriter;
pub use browser_setup::{download_managed_browser, find_browser_executable, launch_browser};
pub use config::{HarvestConfig, HarvestConfigBuilder};
pub use extractor::{collect_detail_links, extract_detail_links};
pub use harvest::{
    HarvestReport, HarvestSession, SamplePrompt, run_catalog_sweep, run_genre_sweep,
    run_keyword_search,
};
pub use ledger::SeenLedger;
pub use page_view::{CatalogPage, PageView};
pub use stabilizer::{PageStabilizer, StabilizeOutcome};
