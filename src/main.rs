//! Interactive harvesting binary.
//!
//! Launches a headed browser session, pauses for the operator to log in by
//! hand, then presents a small menu over the three harvesting strategies.
//! When a session ends (or crashes) the operator is offered a fresh one.

use std::io::Write as _;
use std::path::Path;

use anyhow::{Context, Result};
use chromiumoxide::browser::Browser;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use reelharvest::harvest::{run_catalog_sweep, run_genre_sweep, run_keyword_search};
use reelharvest::{
    BatchWriter, CatalogPage, HarvestConfig, HarvestSession, PageStabilizer, SamplePrompt,
    SeenLedger, launch_browser,
};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => HarvestConfig::from_file(Path::new(&path))?,
        None => HarvestConfig::default(),
    };

    loop {
        if let Err(e) = run_session(&config).await {
            error!("Session ended with an error: {e:#}");
        }

        let answer = prompt_line("Start a new session? (y/n): ").await?;
        if !matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes") {
            break;
        }
    }

    info!("Goodbye");
    Ok(())
}

/// One full browser session: launch, harvest, tear down.
///
/// Teardown always runs, even when the menu loop errored, so a crashed
/// session never leaks a browser process or its temp profile.
async fn run_session(config: &HarvestConfig) -> Result<()> {
    let (mut browser, handler, user_data_dir) =
        launch_browser(config.headless(), config.chrome_data_dir().cloned()).await?;

    let result = drive_menu(&browser, config).await;

    if let Err(e) = browser.close().await {
        warn!("Failed to close browser cleanly: {e}");
    }
    if let Err(e) = browser.wait().await {
        warn!("Failed to wait for browser exit: {e}");
    }
    handler.abort();
    if config.chrome_data_dir().is_none()
        && let Err(e) = std::fs::remove_dir_all(&user_data_dir)
    {
        warn!(
            "Failed to remove temp profile {}: {e}",
            user_data_dir.display()
        );
    }

    result
}

/// Open the home view, wait for manual login, then loop over the menu.
async fn drive_menu(browser: &Browser, config: &HarvestConfig) -> Result<()> {
    let page = browser
        .new_page(config.home_url())
        .await
        .context("Failed to open the home view")?;

    println!("Log in manually in the browser window.");
    prompt_line("Press ENTER here once you are logged in... ").await?;

    let mut ledger = SeenLedger::load(config.ledger_path()).await?;
    info!(
        "Loaded {} previously seen links from {}",
        ledger.len(),
        ledger.path().display()
    );

    let writer = BatchWriter::new(config.output_dir());
    let stabilizer = PageStabilizer::new(config.stabilize_settle(), config.stabilize_budget());
    let view = CatalogPage::new(page);
    let mut session = HarvestSession::new();
    let mut prompt = StdinSamplePrompt;

    loop {
        println!();
        println!("1) Sweep the full catalog");
        println!("2) Randomized keyword search");
        println!("3) Sweep the genre views");
        println!("4) Quit");
        let choice = prompt_line("Choice: ").await?;

        match choice.trim() {
            "1" => {
                let report = run_catalog_sweep(
                    &view,
                    &stabilizer,
                    &mut ledger,
                    &writer,
                    &mut session,
                    &mut prompt,
                    config,
                )
                .await?;
                println!(
                    "Catalog sweep: {} extracted, {} new, {} duplicates",
                    report.extracted, report.new_links, report.duplicates
                );
            }
            "2" => {
                let found =
                    run_keyword_search(&view, &mut ledger, &writer, &mut session, config).await?;
                println!("Keyword search: {found} new links");
            }
            "3" => {
                let found =
                    run_genre_sweep(&view, &stabilizer, &mut ledger, &writer, &mut session, config)
                        .await?;
                println!("Genre sweep: {found} new links");
            }
            "4" => break,
            other => println!("Unrecognized choice '{other}'"),
        }
    }

    Ok(())
}

/// Asks on stdin how many catalog links to sample, re-prompting until the
/// answer parses. A closed stdin falls back to the whole pool.
struct StdinSamplePrompt;

impl SamplePrompt for StdinSamplePrompt {
    fn sample_size(&mut self, available: usize) -> usize {
        loop {
            print!("How many of the {available} links should be sampled? ");
            if std::io::stdout().flush().is_err() {
                return available;
            }

            let mut line = String::new();
            match std::io::stdin().read_line(&mut line) {
                Ok(0) | Err(_) => return available,
                Ok(_) => match line.trim().parse::<usize>() {
                    Ok(n) => return n,
                    Err(_) => println!("Please enter a whole number."),
                },
            }
        }
    }
}

/// Read one line from stdin without blocking the async runtime.
async fn prompt_line(prompt: &str) -> Result<String> {
    print!("{prompt}");
    std::io::stdout().flush().context("Failed to flush stdout")?;

    tokio::task::spawn_blocking(|| {
        let mut line = String::new();
        std::io::stdin()
            .read_line(&mut line)
            .context("Failed to read from stdin")?;
        Ok(line)
    })
    .await
    .context("Stdin reader task failed")?
}
