//! Page stabilization for lazily-loaded catalog views.
//!
//! Catalog and genre views virtualize their rails; content only
//! materializes as the viewport approaches the current boundary. The
//! stabilizer repeatedly scrolls to the boundary and watches whether it
//! advances. When the measurement stops changing the view is considered
//! fully loaded. There is no load-complete event to subscribe to, so a
//! fixed settle interval between passes stands in for one.

use std::time::{Duration, Instant};

use anyhow::Result;
use tracing::{debug, info};

use crate::page_view::PageView;
use crate::utils::constants::{STABILIZE_BUDGET, STABILIZE_SETTLE};

/// Terminal state of a stabilization loop. Both variants are success.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StabilizeOutcome {
    /// The content boundary stopped advancing; the view is fully loaded.
    Stable,
    /// The wall-clock budget elapsed while content was still loading.
    /// Extraction proceeds on whatever has materialized.
    TimedOut,
}

/// Drives a view to full materialization by scroll-and-measure passes.
pub struct PageStabilizer {
    settle: Duration,
    budget: Duration,
}

impl PageStabilizer {
    #[must_use]
    pub fn new(settle: Duration, budget: Duration) -> Self {
        Self { settle, budget }
    }

    /// Scroll to the content boundary until it stops advancing or the
    /// wall-clock budget runs out.
    ///
    /// Never fails on its own account; an `Err` here means the page
    /// collaborator itself failed.
    pub async fn stabilize(&self, view: &dyn PageView) -> Result<StabilizeOutcome> {
        debug!("Scrolling to load all content");
        let mut last_height = view.content_height().await?;
        let start = Instant::now();

        loop {
            view.scroll_to_bottom().await?;
            tokio::time::sleep(self.settle).await;

            let height = view.content_height().await?;
            if height == last_height {
                debug!("Content boundary stable at {height}");
                return Ok(StabilizeOutcome::Stable);
            }
            last_height = height;

            if start.elapsed() > self.budget {
                info!(
                    "Stabilization budget of {:?} elapsed; harvesting partially loaded view",
                    self.budget
                );
                return Ok(StabilizeOutcome::TimedOut);
            }
        }
    }
}

impl Default for PageStabilizer {
    fn default() -> Self {
        Self::new(STABILIZE_SETTLE, STABILIZE_BUDGET)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Serves a scripted height sequence; the last height repeats forever.
    struct ScriptedView {
        heights: Mutex<Vec<i64>>,
        cursor: AtomicUsize,
        scrolls: AtomicUsize,
    }

    impl ScriptedView {
        fn new(heights: &[i64]) -> Self {
            Self {
                heights: Mutex::new(heights.to_vec()),
                cursor: AtomicUsize::new(0),
                scrolls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl PageView for ScriptedView {
        async fn navigate(&self, _url: &str) -> Result<()> {
            Ok(())
        }

        async fn content_height(&self) -> Result<i64> {
            let heights = self.heights.lock().unwrap();
            let index = self.cursor.fetch_add(1, Ordering::SeqCst);
            Ok(heights[index.min(heights.len() - 1)])
        }

        async fn scroll_to_bottom(&self) -> Result<()> {
            self.scrolls.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }

        async fn anchor_hrefs(&self) -> Result<Vec<Option<String>>> {
            Ok(Vec::new())
        }
    }

    fn fast_stabilizer(budget: Duration) -> PageStabilizer {
        PageStabilizer::new(Duration::ZERO, budget)
    }

    #[tokio::test]
    async fn stops_on_first_repeated_measurement() -> Result<()> {
        let view = ScriptedView::new(&[100, 200, 300, 300]);
        let outcome = fast_stabilizer(Duration::from_secs(60))
            .stabilize(&view)
            .await?;

        assert_eq!(outcome, StabilizeOutcome::Stable);
        // One scroll pass per measurement after the initial one.
        assert_eq!(view.scrolls.load(Ordering::SeqCst), 3);
        Ok(())
    }

    #[tokio::test]
    async fn already_stable_view_needs_a_single_pass() -> Result<()> {
        let view = ScriptedView::new(&[500]);
        let outcome = fast_stabilizer(Duration::from_secs(60))
            .stabilize(&view)
            .await?;

        assert_eq!(outcome, StabilizeOutcome::Stable);
        assert_eq!(view.scrolls.load(Ordering::SeqCst), 1);
        Ok(())
    }

    #[tokio::test]
    async fn never_stabilizing_view_times_out() -> Result<()> {
        // Strictly increasing heights, zero budget: the first advancing
        // pass must terminate the loop.
        let heights: Vec<i64> = (0..10_000).map(|i| i * 100).collect();
        let view = ScriptedView::new(&heights);

        let outcome = fast_stabilizer(Duration::ZERO).stabilize(&view).await?;
        assert_eq!(outcome, StabilizeOutcome::TimedOut);
        Ok(())
    }
}
