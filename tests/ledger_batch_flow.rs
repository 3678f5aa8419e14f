//! The shared dedup-and-write flow every strategy funnels through:
//! extract, filter against the ledger, write a batch, record.

use std::path::PathBuf;

use anyhow::Result;
use tempfile::TempDir;

use reelharvest::{BatchWriter, SeenLedger};

fn link(slug: &str) -> String {
    format!("https://play.max.com/movie/{slug}")
}

#[tokio::test]
async fn filter_write_record_round() -> Result<()> {
    let dir = TempDir::new()?;
    let ledger_path = dir.path().join("seen_links.txt");

    // Two links survive from an earlier run.
    std::fs::write(&ledger_path, format!("{}\n{}\n", link("a"), link("b")))?;

    let mut ledger = SeenLedger::load(&ledger_path).await?;
    assert_eq!(ledger.len(), 2);

    let extracted = vec![link("a"), link("b"), link("c"), link("d")];
    let new_links = ledger.filter_new(&extracted);
    assert_eq!(new_links, vec![link("c"), link("d")]);

    let writer = BatchWriter::new(dir.path().join("out"));
    let written = writer.write(&new_links, 3, "genre").await?;
    assert_eq!(written, vec![dir.path().join("out").join("genre_3_1.txt")]);

    let body = std::fs::read_to_string(&written[0])?;
    assert_eq!(body, format!("{}\n{}\n", link("c"), link("d")));

    ledger.record(&new_links).await?;

    // A reloaded ledger sees everything, so a repeat of the same view is a
    // clean no-op.
    let reloaded = SeenLedger::load(&ledger_path).await?;
    assert_eq!(reloaded.len(), 4);
    assert!(reloaded.filter_new(&extracted).is_empty());
    Ok(())
}

#[tokio::test]
async fn repeated_records_concatenate_in_order() -> Result<()> {
    let dir = TempDir::new()?;
    let ledger_path = dir.path().join("seen_links.txt");

    let mut ledger = SeenLedger::load(&ledger_path).await?;
    ledger.record(&[link("a")]).await?;
    ledger.record(&[link("b"), link("c")]).await?;

    let body = std::fs::read_to_string(&ledger_path)?;
    assert_eq!(body, format!("{}\n{}\n{}\n", link("a"), link("b"), link("c")));
    Ok(())
}

#[tokio::test]
async fn batch_files_overwrite_on_id_reuse() -> Result<()> {
    let dir = TempDir::new()?;
    let writer = BatchWriter::new(dir.path());

    writer.write(&[link("old")], 1, "movies").await?;
    writer.write(&[link("new")], 1, "movies").await?;

    let body = std::fs::read_to_string(dir.path().join("movies_1_1.txt"))?;
    assert_eq!(body, format!("{}\n", link("new")));

    let names: Vec<PathBuf> = std::fs::read_dir(dir.path())?
        .filter_map(|e| e.ok().map(|e| e.path()))
        .collect();
    assert_eq!(names.len(), 1);
    Ok(())
}
