//! Market-research stage: general web search for the brand name.

use std::collections::HashSet;

use brandnav_core::BrandQuery;
use brandnav_search::{SearchClient, SearchHit};

use crate::types::{PotentialConflict, SectionResult, WebLink, WebSearchSection};

/// Search the general web for the brand name and partition the results into
/// all links vs. potential conflicts.
///
/// Any upstream failure degrades to a section error; this never aborts the
/// sibling stages.
pub(crate) async fn search_web(
    search: &SearchClient,
    query: &BrandQuery,
    count: usize,
) -> SectionResult<WebSearchSection> {
    // Quotes force an exact match; the extra terms bias towards brand usage
    // rather than dictionary hits.
    let search_query = format!("\"{}\" brand OR company OR official website", query.name());
    tracing::info!(brand = %query, query = %search_query, "starting web search");

    match search.search(&search_query, count).await {
        Ok(hits) => SectionResult::Ok(build_section(query, search_query, hits)),
        Err(e) => {
            tracing::warn!(brand = %query, error = %e, "web search failed");
            SectionResult::err(format!("web search failed: {e}"))
        }
    }
}

fn build_section(
    query: &BrandQuery,
    search_query: String,
    hits: Vec<SearchHit>,
) -> WebSearchSection {
    let brand_lower = query.name_lower();
    let mut seen_urls = HashSet::new();
    let mut web_links = Vec::new();
    let mut potential_conflicts = Vec::new();

    for hit in hits {
        if !seen_urls.insert(hit.url.clone()) {
            continue;
        }
        if let Some(reason) = conflict_reason(&brand_lower, &hit.title, &hit.url) {
            potential_conflicts.push(PotentialConflict {
                url: hit.url.clone(),
                title: hit.title.clone(),
                reason,
            });
        }
        web_links.push(WebLink {
            url: hit.url,
            title: hit.title,
            snippet: hit.snippet,
        });
    }

    tracing::info!(
        brand = %query,
        links = web_links.len(),
        conflicts = potential_conflicts.len(),
        "web search complete"
    );

    WebSearchSection {
        web_links,
        potential_conflicts,
        query_used: search_query,
    }
}

/// Containment heuristic: the lowercase brand name appearing in the result
/// title or in the URL host (with `www.` stripped) marks a potential
/// conflict. Deliberately textual, not semantic.
fn conflict_reason(brand_lower: &str, title: &str, url: &str) -> Option<String> {
    let in_title = title.to_lowercase().contains(brand_lower);
    let in_host = host_of(url)
        .is_some_and(|host| host.to_lowercase().trim_start_matches("www.").contains(brand_lower));

    (in_title || in_host).then(|| "brand name found in result title or domain".to_string())
}

fn host_of(url: &str) -> Option<&str> {
    url.split('/').nth(2).filter(|host| !host.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn host_of_extracts_authority() {
        assert_eq!(host_of("https://www.zyxo.com/about"), Some("www.zyxo.com"));
        assert_eq!(host_of("http://example.org"), Some("example.org"));
        assert_eq!(host_of("not-a-url"), None);
    }

    #[test]
    fn conflict_when_brand_in_title() {
        let reason = conflict_reason("zyxo", "Zyxo Official Website", "https://other.example.com");
        assert!(reason.is_some());
    }

    #[test]
    fn conflict_when_brand_in_host() {
        let reason = conflict_reason("zyxo", "Some Business Site", "https://www.zyxo.com/home");
        assert!(reason.is_some());
    }

    #[test]
    fn no_conflict_for_unrelated_result() {
        let reason = conflict_reason("zyxo", "Generic Business Site", "https://genericbiz.com");
        assert!(reason.is_none());
    }

    #[test]
    fn build_section_dedupes_urls() {
        let query = BrandQuery::parse("Zyxo").expect("query");
        let hits = vec![
            SearchHit {
                url: "https://zyxo.com".to_string(),
                title: "Zyxo".to_string(),
                snippet: "first".to_string(),
            },
            SearchHit {
                url: "https://zyxo.com".to_string(),
                title: "Zyxo again".to_string(),
                snippet: "second".to_string(),
            },
        ];
        let section = build_section(&query, "q".to_string(), hits);
        assert_eq!(section.web_links.len(), 1);
        assert_eq!(section.potential_conflicts.len(), 1);
    }
}
