use serde::Deserialize;

/// One web-search result as exposed to callers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchHit {
    pub url: String,
    pub title: String,
    pub snippet: String,
}

/// Top-level response envelope from the search API.
///
/// The API nests results under `web.results`; either level may be absent
/// when a query matches nothing.
#[derive(Debug, Deserialize)]
pub(crate) struct SearchResponse {
    #[serde(default)]
    pub(crate) web: Option<WebResults>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct WebResults {
    #[serde(default)]
    pub(crate) results: Vec<WebResultItem>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct WebResultItem {
    #[serde(default)]
    pub(crate) url: Option<String>,
    #[serde(default)]
    pub(crate) title: Option<String>,
    #[serde(default)]
    pub(crate) description: Option<String>,
}
