//! Fixed-size batch artifacts for newly discovered links.
//!
//! Each artifact is a newline-delimited UTF-8 text file holding at most
//! [`BATCH_CHUNK_SIZE`] links, named `{prefix}_{batch_id}_{chunk_index}.txt`
//! with a 1-based chunk index. Batch ids are managed by the calling
//! strategy; the writer itself does not check for pre-existing files, so a
//! colliding name is overwritten.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::info;

use crate::utils::constants::BATCH_CHUNK_SIZE;

/// Writes link batches under a single output directory, created on demand.
pub struct BatchWriter {
    output_dir: PathBuf,
}

impl BatchWriter {
    #[must_use]
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    /// Directory the artifacts are written under.
    #[must_use]
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Partition `links` into chunks of at most [`BATCH_CHUNK_SIZE`] and
    /// write one artifact per chunk, preserving chunk order.
    ///
    /// Returns the paths written, for observability.
    pub async fn write(
        &self,
        links: &[String],
        batch_id: u32,
        prefix: &str,
    ) -> Result<Vec<PathBuf>> {
        tokio::fs::create_dir_all(&self.output_dir)
            .await
            .with_context(|| {
                format!(
                    "Failed to create output directory {}",
                    self.output_dir.display()
                )
            })?;

        let mut written = Vec::new();
        for (index, chunk) in links.chunks(BATCH_CHUNK_SIZE).enumerate() {
            let path = self
                .output_dir
                .join(format!("{prefix}_{batch_id}_{}.txt", index + 1));

            let mut body = chunk.join("\n");
            body.push('\n');
            tokio::fs::write(&path, body)
                .await
                .with_context(|| format!("Failed to write batch artifact {}", path.display()))?;

            info!("Saved {} links to {}", chunk.len(), path.display());
            written.push(path);
        }

        Ok(written)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn links(count: usize) -> Vec<String> {
        (0..count)
            .map(|i| format!("https://play.max.com/movie/{i}"))
            .collect()
    }

    #[tokio::test]
    async fn partitions_into_full_chunks_plus_remainder() -> Result<()> {
        let dir = TempDir::new()?;
        let writer = BatchWriter::new(dir.path().join("out"));

        let paths = writer.write(&links(25), 1, "movies").await?;
        assert_eq!(paths.len(), 3);
        assert_eq!(paths[0].file_name().unwrap(), "movies_1_1.txt");
        assert_eq!(paths[1].file_name().unwrap(), "movies_1_2.txt");
        assert_eq!(paths[2].file_name().unwrap(), "movies_1_3.txt");

        let first = tokio::fs::read_to_string(&paths[0]).await?;
        let last = tokio::fs::read_to_string(&paths[2]).await?;
        assert_eq!(first.lines().count(), 10);
        assert_eq!(last.lines().count(), 5);
        Ok(())
    }

    #[tokio::test]
    async fn no_link_is_lost_or_duplicated_across_chunks() -> Result<()> {
        let dir = TempDir::new()?;
        let writer = BatchWriter::new(dir.path().join("out"));
        let input = links(23);

        let paths = writer.write(&input, 7, "genre").await?;

        let mut seen = Vec::new();
        for path in &paths {
            let contents = tokio::fs::read_to_string(path).await?;
            seen.extend(contents.lines().map(String::from));
        }
        assert_eq!(seen, input);
        Ok(())
    }

    #[tokio::test]
    async fn single_chunk_for_small_batches() -> Result<()> {
        let dir = TempDir::new()?;
        let writer = BatchWriter::new(dir.path().join("out"));

        let paths = writer.write(&links(3), 2, "search").await?;
        assert_eq!(paths.len(), 1);
        assert_eq!(paths[0].file_name().unwrap(), "search_2_1.txt");
        Ok(())
    }
}
