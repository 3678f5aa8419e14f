//! Collaborator seam over the rendered page.
//!
//! The harvesting engine issues exactly four operations against the browser:
//! navigate, measure the content boundary, request more content (scroll),
//! and enumerate detail-page anchors. [`PageView`] captures that surface so
//! strategies and the stabilizer can be exercised against scripted fakes in
//! tests, with [`CatalogPage`] as the chromiumoxide-backed implementation.

use anyhow::{Context, Result};
use async_trait::async_trait;
use chromiumoxide::page::Page;

use crate::utils::constants::DETAIL_PATH_MARKER;

/// The four page operations the harvesting engine depends on.
#[async_trait]
pub trait PageView: Send + Sync {
    /// Navigate to `url` and wait for the initial load.
    async fn navigate(&self, url: &str) -> Result<()>;

    /// Current content-boundary measurement (page height), used as a proxy
    /// for how much of the view has materialized.
    async fn content_height(&self) -> Result<i64>;

    /// Request more content by scrolling to the current boundary.
    async fn scroll_to_bottom(&self) -> Result<()>;

    /// Raw href attribute reads for every anchor matching the detail-page
    /// pattern. An anchor without a resolvable href yields `None`.
    async fn anchor_hrefs(&self) -> Result<Vec<Option<String>>>;
}

/// chromiumoxide-backed [`PageView`] over a single CDP page.
pub struct CatalogPage {
    page: Page,
}

impl CatalogPage {
    #[must_use]
    pub fn new(page: Page) -> Self {
        Self { page }
    }
}

#[async_trait]
impl PageView for CatalogPage {
    async fn navigate(&self, url: &str) -> Result<()> {
        self.page
            .goto(url)
            .await
            .with_context(|| format!("Failed to navigate to {url}"))?;
        self.page
            .wait_for_navigation()
            .await
            .with_context(|| format!("Failed to wait for {url} to load"))?;
        Ok(())
    }

    async fn content_height(&self) -> Result<i64> {
        let height = self
            .page
            .evaluate("document.body.scrollHeight")
            .await
            .context("Failed to read page height")?
            .into_value::<i64>()
            .context("Page height was not a number")?;
        Ok(height)
    }

    async fn scroll_to_bottom(&self) -> Result<()> {
        self.page
            .evaluate("window.scrollTo(0, document.body.scrollHeight);")
            .await
            .context("Failed to scroll to the content boundary")?;
        Ok(())
    }

    async fn anchor_hrefs(&self) -> Result<Vec<Option<String>>> {
        let selector = format!("a[href*='{DETAIL_PATH_MARKER}']");
        let anchors = self
            .page
            .find_elements(selector)
            .await
            .context("Failed to enumerate detail-page anchors")?;

        let mut hrefs = Vec::with_capacity(anchors.len());
        for anchor in anchors {
            // An anchor that lost its href between enumeration and read is
            // treated as unresolvable, not as an error.
            hrefs.push(anchor.attribute("href").await.ok().flatten());
        }
        Ok(hrefs)
    }
}
