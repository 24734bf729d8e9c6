//! Trademark stage: best-effort registry screening via site-scoped search.
//!
//! This only checks for indexed exact matches on the registry's public
//! search site. It is a coarse screen, never a legal clearance.

use brandnav_core::BrandQuery;
use brandnav_search::{SearchClient, SearchHit};

use crate::types::{SectionResult, TrademarkSection, TrademarkStatus};

const US_REGISTRY_SITE: &str = "tess2.uspto.gov";
const REGISTRY_RESULT_COUNT: usize = 3;

/// Screen the configured country's trademark registry for exact matches.
///
/// Only `US` is supported; other country codes fail the section with an
/// explanatory message rather than guessing at a registry.
pub(crate) async fn check_registry(
    search: &SearchClient,
    query: &BrandQuery,
    country: &str,
) -> SectionResult<TrademarkSection> {
    if country != "US" {
        tracing::warn!(brand = %query, country, "unsupported trademark country");
        return SectionResult::err(format!(
            "trademark check for country code '{country}' is not supported"
        ));
    }

    let search_query = format!("site:{US_REGISTRY_SITE} \"{}\"", query.name());
    tracing::info!(brand = %query, query = %search_query, "starting trademark check");

    match search.search(&search_query, REGISTRY_RESULT_COUNT).await {
        Ok(hits) => SectionResult::Ok(build_section(query, search_query, &hits)),
        Err(e) => {
            tracing::warn!(brand = %query, error = %e, "trademark lookup failed");
            SectionResult::err(format!("trademark lookup failed: {e}"))
        }
    }
}

fn build_section(query: &BrandQuery, search_query: String, hits: &[SearchHit]) -> TrademarkSection {
    let database_checked = "USPTO TESS (via web search)".to_string();

    if let Some(first) = hits.first() {
        TrademarkSection {
            status: TrademarkStatus::PotentialConflictFoundOnSite,
            details: vec![
                format!(
                    "Found {} result(s) potentially related to '{}' on {US_REGISTRY_SITE}.",
                    hits.len(),
                    query.name()
                ),
                "This suggests a potential conflict exists; verify against the official database."
                    .to_string(),
                format!("Example hit: {} ({})", first.title, first.url),
            ],
            database_checked,
            query_used: search_query,
        }
    } else {
        TrademarkSection {
            status: TrademarkStatus::NoExactMatchFoundOnSite,
            details: vec![
                format!(
                    "No exact match for '{}' found via web search on {US_REGISTRY_SITE}.",
                    query.name()
                ),
                "This does NOT confirm availability; similar or non-indexed marks may exist."
                    .to_string(),
            ],
            database_checked,
            query_used: search_query,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hits_mean_potential_conflict() {
        let query = BrandQuery::parse("InnovateNow").expect("query");
        let hits = vec![SearchHit {
            url: "https://tess2.uspto.gov/showfield?sn=12345".to_string(),
            title: "TESS record for INNOVATENOW".to_string(),
            snippet: String::new(),
        }];
        let section = build_section(&query, "q".to_string(), &hits);
        assert_eq!(section.status, TrademarkStatus::PotentialConflictFoundOnSite);
        assert!(section.details[0].contains("1 result(s)"));
        assert!(section.details[2].contains("TESS record"));
    }

    #[test]
    fn no_hits_mean_no_exact_match() {
        let query = BrandQuery::parse("ZyxoSphere").expect("query");
        let section = build_section(&query, "q".to_string(), &[]);
        assert_eq!(section.status, TrademarkStatus::NoExactMatchFoundOnSite);
        assert_eq!(section.database_checked, "USPTO TESS (via web search)");
    }
}
