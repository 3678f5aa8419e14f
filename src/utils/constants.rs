//! Shared configuration constants for reelharvest
//!
//! This module contains default values and fixed vocabulary used throughout
//! the codebase to ensure consistency and avoid magic numbers.

use std::time::Duration;

/// Path fragment that identifies a title detail page.
///
/// Only anchors whose href contains this marker are harvested. Everything
/// else on a catalog or search view (navigation, promos, rails) is dropped.
pub const DETAIL_PATH_MARKER: &str = "/movie/";

/// Catalog site homepage, opened first so the operator can log in manually.
pub const HOME_URL: &str = "https://play.max.com";

/// Full-catalog view swept by the catalog strategy.
pub const CATALOG_URL: &str = "https://play.max.com/movies";

/// Search view base; the query is appended as `?q=` by the search strategy.
pub const SEARCH_URL: &str = "https://play.max.com/search";

/// Genre views swept in order by the genre strategy.
pub const GENRE_URLS: [&str; 6] = [
    "https://play.max.com/genre/action",
    "https://play.max.com/genre/comedy",
    "https://play.max.com/genre/drama",
    "https://play.max.com/genre/horror",
    "https://play.max.com/genre/sci-fi",
    "https://play.max.com/genre/documentary",
];

/// Fixed keyword vocabulary for the randomized search strategy.
///
/// Short, high-frequency words that match a broad slice of the catalog.
pub const SEARCH_TERMS: [&str; 19] = [
    "the", "man", "love", "dark", "moon", "fire", "red", "blue", "night",
    "girl", "life", "death", "dream", "war", "blood", "star", "light", "king",
    "queen",
];

/// Maximum number of links written to a single batch artifact.
pub const BATCH_CHUNK_SIZE: usize = 10;

/// Number of randomized search attempts per strategy invocation.
pub const SEARCH_ATTEMPTS: u32 = 10;

/// Settle time after navigating to a new view.
///
/// The catalog renders client-side and exposes no completion signal, so a
/// fixed settle interval stands in for one.
pub const NAVIGATION_SETTLE: Duration = Duration::from_secs(4);

/// Settle time between scroll passes in the stabilization loop.
pub const STABILIZE_SETTLE: Duration = Duration::from_millis(2500);

/// Wall-clock budget for a single stabilization loop.
///
/// A view still growing past this point is harvested as-is; the timeout is
/// a degraded-completeness outcome, not an error.
pub const STABILIZE_BUDGET: Duration = Duration::from_secs(60);

/// Pacing delay between search attempts, regardless of outcome.
pub const SEARCH_ATTEMPT_DELAY: Duration = Duration::from_secs(10);

/// Pacing delay between genre views, regardless of outcome.
pub const GENRE_DELAY: Duration = Duration::from_secs(5);

/// Default file name for the append-only seen-link log.
pub const SEEN_LINKS_FILE: &str = "seen_links.txt";

/// Default directory for batch artifacts.
pub const DEFAULT_OUTPUT_DIR: &str = "output_movies";

/// Chrome user agent string for stealth mode
///
/// Chrome releases new stable versions ~every 4 weeks; update quarterly to
/// stay within a reasonable version window.
///
/// Reference: https://chromiumdash.appspot.com/schedule
pub const CHROME_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/132.0.6834.160 Safari/537.36";
