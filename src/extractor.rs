//! Title detail-page link extraction.
//!
//! Works on raw href attribute reads supplied by the page collaborator.
//! Anchors without a resolvable href, or whose href lacks the detail-page
//! marker, are silently dropped. Result order is unspecified; downstream
//! consumers must not depend on extraction order.

use std::collections::HashSet;

use anyhow::Result;

use crate::page_view::PageView;
use crate::utils::constants::DETAIL_PATH_MARKER;

/// Filter raw anchor hrefs down to the set of title detail-page links.
///
/// Set semantics deduplicate repeated hrefs within a single call.
#[must_use]
pub fn extract_detail_links(hrefs: &[Option<String>]) -> HashSet<String> {
    hrefs
        .iter()
        .flatten()
        .filter(|href| href.contains(DETAIL_PATH_MARKER))
        .cloned()
        .collect()
}

/// Read anchor hrefs from the current view and extract detail-page links.
pub async fn collect_detail_links(view: &dyn PageView) -> Result<HashSet<String>> {
    let hrefs = view.anchor_hrefs().await?;
    Ok(extract_detail_links(&hrefs))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_only_detail_page_hrefs() {
        let hrefs = vec![
            Some("https://play.max.com/movie/abc".to_string()),
            Some("https://play.max.com/show/def".to_string()),
            Some("https://play.max.com/movie/ghi".to_string()),
        ];

        let links = extract_detail_links(&hrefs);
        assert_eq!(links.len(), 2);
        assert!(links.contains("https://play.max.com/movie/abc"));
        assert!(links.contains("https://play.max.com/movie/ghi"));
    }

    #[test]
    fn unresolvable_hrefs_are_dropped_silently() {
        let hrefs = vec![None, Some("https://play.max.com/movie/abc".to_string()), None];
        assert_eq!(extract_detail_links(&hrefs).len(), 1);
    }

    #[test]
    fn duplicates_collapse_within_one_call() {
        let href = Some("https://play.max.com/movie/abc".to_string());
        let hrefs = vec![href.clone(), href.clone(), href];
        assert_eq!(extract_detail_links(&hrefs).len(), 1);
    }

    #[test]
    fn query_variants_stay_distinct() {
        let hrefs = vec![
            Some("https://play.max.com/movie/abc".to_string()),
            Some("https://play.max.com/movie/abc?ref=rail".to_string()),
        ];
        assert_eq!(extract_detail_links(&hrefs).len(), 2);
    }
}
