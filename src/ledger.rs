//! Append-only persistent record of previously harvested links.
//!
//! The ledger is a newline-delimited UTF-8 text file, one link per line,
//! mirrored into an in-memory set for O(1) membership checks. Entries are
//! only ever appended; the file is never rewritten or compacted. A link
//! recorded once is never again classified as "new" in this or any future
//! run.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tokio::io::AsyncWriteExt;
use tracing::debug;

/// Persistent set of links that have already been written to a batch.
pub struct SeenLedger {
    path: PathBuf,
    seen: HashSet<String>,
}

impl SeenLedger {
    /// Load the ledger from its backing log.
    ///
    /// A missing log file is a normal first-run condition and yields an
    /// empty ledger. Blank lines in the log are ignored.
    pub async fn load(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let seen = match tokio::fs::read_to_string(&path).await {
            Ok(contents) => contents
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(String::from)
                .collect(),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => HashSet::new(),
            Err(e) => {
                return Err(e).with_context(|| {
                    format!("Failed to read seen-link log at {}", path.display())
                });
            }
        };

        debug!("Loaded {} previously recorded links", seen.len());
        Ok(Self { path, seen })
    }

    /// Whether a link has already been recorded.
    #[must_use]
    pub fn contains(&self, link: &str) -> bool {
        self.seen.contains(link)
    }

    /// Number of recorded links.
    #[must_use]
    pub fn len(&self) -> usize {
        self.seen.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }

    /// Path of the backing log file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Return the subset of `links` not yet recorded, preserving input order.
    pub fn filter_new<'a>(&self, links: impl IntoIterator<Item = &'a String>) -> Vec<String> {
        links
            .into_iter()
            .filter(|link| !self.seen.contains(link.as_str()))
            .cloned()
            .collect()
    }

    /// Append `links` to the backing log, in order, then add them to the
    /// in-memory mirror.
    ///
    /// The log is opened in append mode so existing entries are never
    /// touched, and flushed before returning so each call is durable on
    /// its own.
    pub async fn record(&mut self, links: &[String]) -> Result<()> {
        if links.is_empty() {
            return Ok(());
        }

        let mut file = tokio::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await
            .with_context(|| {
                format!("Failed to open seen-link log at {}", self.path.display())
            })?;

        for link in links {
            file.write_all(link.as_bytes()).await.with_context(|| {
                format!("Failed to append to seen-link log at {}", self.path.display())
            })?;
            file.write_all(b"\n").await.with_context(|| {
                format!("Failed to append to seen-link log at {}", self.path.display())
            })?;
        }
        file.flush()
            .await
            .context("Failed to flush seen-link log")?;

        for link in links {
            self.seen.insert(link.clone());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn links(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| (*s).to_string()).collect()
    }

    #[tokio::test]
    async fn missing_log_loads_empty() -> Result<()> {
        let dir = TempDir::new()?;
        let ledger = SeenLedger::load(dir.path().join("seen_links.txt")).await?;
        assert!(ledger.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn recorded_links_are_never_new_again() -> Result<()> {
        let dir = TempDir::new()?;
        let path = dir.path().join("seen_links.txt");

        let batch = links(&["https://play.max.com/movie/a", "https://play.max.com/movie/b"]);
        {
            let mut ledger = SeenLedger::load(&path).await?;
            ledger.record(&batch).await?;
            assert!(ledger.filter_new(&batch).is_empty());
        }

        // Still deduplicated after a reload (a fresh "run").
        let ledger = SeenLedger::load(&path).await?;
        assert!(ledger.contains("https://play.max.com/movie/a"));
        assert!(ledger.filter_new(&batch).is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn record_is_append_only() -> Result<()> {
        let dir = TempDir::new()?;
        let path = dir.path().join("seen_links.txt");
        let mut ledger = SeenLedger::load(&path).await?;

        ledger.record(&links(&["first", "second"])).await?;
        ledger.record(&links(&["third"])).await?;

        let contents = tokio::fs::read_to_string(&path).await?;
        assert_eq!(contents, "first\nsecond\nthird\n");
        Ok(())
    }

    #[tokio::test]
    async fn blank_lines_in_log_are_ignored() -> Result<()> {
        let dir = TempDir::new()?;
        let path = dir.path().join("seen_links.txt");
        tokio::fs::write(&path, "one\n\n  \ntwo\n").await?;

        let ledger = SeenLedger::load(&path).await?;
        assert_eq!(ledger.len(), 2);
        assert!(ledger.contains("one"));
        assert!(ledger.contains("two"));
        Ok(())
    }

    #[tokio::test]
    async fn filter_new_preserves_input_order() -> Result<()> {
        let dir = TempDir::new()?;
        let mut ledger = SeenLedger::load(dir.path().join("seen_links.txt")).await?;
        ledger.record(&links(&["b"])).await?;

        let filtered = ledger.filter_new(&links(&["c", "b", "a"]));
        assert_eq!(filtered, links(&["c", "a"]));
        Ok(())
    }
}
