//! Social-media stage: per-platform presence checks via site-scoped search.
//!
//! This checks for indexed presence (profiles, mentions), not definitive
//! handle availability.

use std::collections::BTreeMap;

use brandnav_core::BrandQuery;
use brandnav_search::{SearchClient, SearchHit};

use crate::types::{PlatformPresence, PlatformQuery, SectionResult, SocialSection};

/// Top results to inspect per platform; the site-scoped query is targeted
/// enough that a handful settles the question.
const PLATFORM_RESULT_COUNT: usize = 3;

/// Check each configured platform for presence of the brand name.
///
/// One platform's lookup failure degrades to a `check_error` status for that
/// platform only; the remaining platforms are still checked.
pub(crate) async fn check_platforms(
    search: &SearchClient,
    query: &BrandQuery,
    platforms: &[String],
) -> SectionResult<SocialSection> {
    let brand_lower = query.name_lower();
    let mut platform_results = BTreeMap::new();
    let mut queries_used = Vec::with_capacity(platforms.len());

    for platform in platforms {
        let search_query = format!("site:{platform} \"{}\"", query.name());
        queries_used.push(PlatformQuery {
            platform: platform.clone(),
            query: search_query.clone(),
        });

        let status = match search.search(&search_query, PLATFORM_RESULT_COUNT).await {
            Ok(hits) => classify_presence(&brand_lower, &hits),
            Err(e) => {
                tracing::warn!(brand = %query, platform, error = %e, "platform lookup failed");
                PlatformPresence::CheckError
            }
        };
        tracing::info!(brand = %query, platform, status = ?status, "platform checked");
        platform_results.insert(platform.clone(), status);
    }

    SectionResult::Ok(SocialSection {
        platform_results,
        queries_used,
    })
}

/// Any result whose title contains the brand name, or whose URL carries it
/// as a path segment, counts as usage or a mention.
fn classify_presence(brand_lower: &str, hits: &[SearchHit]) -> PlatformPresence {
    let path_needle = format!("/{brand_lower}");
    for hit in hits {
        if hit.title.to_lowercase().contains(brand_lower)
            || hit.url.to_lowercase().contains(&path_needle)
        {
            return PlatformPresence::UsedMentioned;
        }
    }
    PlatformPresence::PotentiallyAvailableLowPresence
}
