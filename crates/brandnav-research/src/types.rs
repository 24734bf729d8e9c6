//! Report data model.
//!
//! The serialized field names here are part of the wire contract consumed by
//! the rendering layer; do not rename them casually.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Outcome of one research section: success payload XOR error message.
///
/// Serialized untagged, so a successful section serializes as its payload
/// object and a failed one as `{"error": "..."}`. The assembler can then
/// always render every section without a failed sibling suppressing it.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum SectionResult<T> {
    Ok(T),
    Err { error: String },
}

impl<T> SectionResult<T> {
    pub fn err(message: impl Into<String>) -> Self {
        SectionResult::Err {
            error: message.into(),
        }
    }

    #[must_use]
    pub fn is_err(&self) -> bool {
        matches!(self, SectionResult::Err { .. })
    }

    #[must_use]
    pub fn as_ok(&self) -> Option<&T> {
        match self {
            SectionResult::Ok(value) => Some(value),
            SectionResult::Err { .. } => None,
        }
    }

    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        match self {
            SectionResult::Ok(_) => None,
            SectionResult::Err { error } => Some(error),
        }
    }
}

/// One web-search result shown to the user.
#[derive(Debug, Clone, Serialize)]
pub struct WebLink {
    pub url: String,
    pub title: String,
    pub snippet: String,
}

/// A web result judged to textually match the brand name.
#[derive(Debug, Clone, Serialize)]
pub struct PotentialConflict {
    pub url: String,
    pub title: String,
    pub reason: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct WebSearchSection {
    pub web_links: Vec<WebLink>,
    pub potential_conflicts: Vec<PotentialConflict>,
    pub query_used: String,
}

/// Coarse per-platform presence classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PlatformPresence {
    UsedMentioned,
    PotentiallyAvailableLowPresence,
    CheckError,
}

/// One platform query issued, kept for auditability and display.
#[derive(Debug, Clone, Serialize)]
pub struct PlatformQuery {
    pub platform: String,
    pub query: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct SocialSection {
    pub platform_results: BTreeMap<String, PlatformPresence>,
    pub queries_used: Vec<PlatformQuery>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TrademarkStatus {
    PotentialConflictFoundOnSite,
    NoExactMatchFoundOnSite,
}

#[derive(Debug, Clone, Serialize)]
pub struct TrademarkSection {
    pub status: TrademarkStatus,
    pub details: Vec<String>,
    pub database_checked: String,
    pub query_used: String,
}

/// Registration status of one candidate domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DomainStatus {
    PotentiallyAvailable,
    NotAvailable,
    Inconclusive,
    Error,
}

/// Mapping of candidate domain name to its status. `BTreeMap` keeps the
/// serialized order stable across runs.
pub type DomainSection = BTreeMap<String, DomainStatus>;

/// The aggregated output of the four research stages. Built once all four
/// resolve (success or error), then passed whole to the evaluation stage.
#[derive(Debug, Clone, Serialize)]
pub struct ResearchReport {
    pub brand_name: String,
    pub web_search: SectionResult<WebSearchSection>,
    pub social_media_search: SectionResult<SocialSection>,
    pub trademark_check: SectionResult<TrademarkSection>,
    pub domain_availability: SectionResult<DomainSection>,
}

/// The LLM's structured assessment. Parsed strictly: unknown keys are
/// rejected so a malformed response never passes as a real evaluation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Evaluation {
    pub linguistic_analysis: String,
    pub memorability_distinctiveness: String,
    pub relevance: String,
    pub availability_summary: String,
    pub overall_score: i64,
}

pub type EvaluationResult = SectionResult<Evaluation>;

/// The unit handed to the client; read-only once constructed.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub research: ResearchReport,
    pub evaluation: EvaluationResult,
    pub report_markdown: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn successful_section_serializes_as_payload() {
        let section = SectionResult::Ok(WebSearchSection {
            web_links: vec![],
            potential_conflicts: vec![],
            query_used: "\"Zyxo\" brand".to_string(),
        });
        let json = serde_json::to_value(&section).expect("serialize");
        assert_eq!(json["query_used"], "\"Zyxo\" brand");
        assert!(json.get("error").is_none());
        assert!(json["web_links"].as_array().expect("array").is_empty());
    }

    #[test]
    fn failed_section_serializes_as_error_object() {
        let section: SectionResult<WebSearchSection> = SectionResult::err("upstream timed out");
        let json = serde_json::to_value(&section).expect("serialize");
        assert_eq!(json["error"], "upstream timed out");
        assert!(json.get("web_links").is_none());
    }

    #[test]
    fn domain_statuses_use_wire_names() {
        let mut section = DomainSection::new();
        section.insert("zyxo.com".to_string(), DomainStatus::NotAvailable);
        section.insert("zyxo.ai".to_string(), DomainStatus::PotentiallyAvailable);
        section.insert("zyxo.io".to_string(), DomainStatus::Error);
        section.insert("zyxo.net".to_string(), DomainStatus::Inconclusive);

        let json = serde_json::to_value(&section).expect("serialize");
        assert_eq!(json["zyxo.com"], "not_available");
        assert_eq!(json["zyxo.ai"], "potentially_available");
        assert_eq!(json["zyxo.io"], "error");
        assert_eq!(json["zyxo.net"], "inconclusive");
    }

    #[test]
    fn platform_presence_uses_wire_names() {
        assert_eq!(
            serde_json::to_value(PlatformPresence::UsedMentioned).expect("serialize"),
            "used_mentioned"
        );
        assert_eq!(
            serde_json::to_value(PlatformPresence::PotentiallyAvailableLowPresence)
                .expect("serialize"),
            "potentially_available_low_presence"
        );
        assert_eq!(
            serde_json::to_value(PlatformPresence::CheckError).expect("serialize"),
            "check_error"
        );
    }

    #[test]
    fn evaluation_rejects_unknown_keys() {
        let raw = serde_json::json!({
            "linguistic_analysis": "a",
            "memorability_distinctiveness": "b",
            "relevance": "c",
            "availability_summary": "d",
            "overall_score": 7,
            "extra_commentary": "not in the contract"
        });
        let parsed = serde_json::from_value::<Evaluation>(raw);
        assert!(parsed.is_err());
    }

    #[test]
    fn research_report_always_carries_all_section_keys() {
        let report = ResearchReport {
            brand_name: "Zyxo".to_string(),
            web_search: SectionResult::err("down"),
            social_media_search: SectionResult::err("down"),
            trademark_check: SectionResult::err("down"),
            domain_availability: SectionResult::err("down"),
        };
        let json = serde_json::to_value(&report).expect("serialize");
        for key in [
            "web_search",
            "social_media_search",
            "trademark_check",
            "domain_availability",
        ] {
            assert!(json.get(key).is_some(), "missing section key {key}");
            assert_eq!(json[key]["error"], "down");
        }
    }
}
