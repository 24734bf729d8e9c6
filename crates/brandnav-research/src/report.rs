//! Markdown rendering of an assembled report.
//!
//! Every section renders something, including an explicit "could not be
//! determined" line when a stage failed.

use std::fmt::Write as _;

use chrono::Utc;

use crate::types::{EvaluationResult, ResearchReport, SectionResult};

/// Links shown in the markdown summary before eliding the rest.
const MAX_LISTED_LINKS: usize = 5;

pub(crate) fn render_markdown(research: &ResearchReport, evaluation: &EvaluationResult) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "# Brand Analysis Report: {}", research.brand_name);
    let _ = writeln!(
        out,
        "_Generated on: {}_\n",
        Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
    );

    let _ = writeln!(out, "## Web Search");
    match &research.web_search {
        SectionResult::Ok(section) => {
            let _ = writeln!(
                out,
                "- **Results**: {} link(s), {} potential conflict(s)",
                section.web_links.len(),
                section.potential_conflicts.len()
            );
            for link in section.web_links.iter().take(MAX_LISTED_LINKS) {
                let _ = writeln!(out, "- [{}]({})", link.title, link.url);
            }
            if section.web_links.len() > MAX_LISTED_LINKS {
                let _ = writeln!(
                    out,
                    "- ... and {} more",
                    section.web_links.len() - MAX_LISTED_LINKS
                );
            }
        }
        SectionResult::Err { error } => {
            let _ = writeln!(out, "- Could not be determined: {error}");
        }
    }

    let _ = writeln!(out, "\n## Social Media Presence");
    match &research.social_media_search {
        SectionResult::Ok(section) => {
            for (platform, status) in &section.platform_results {
                let _ = writeln!(out, "- **{platform}**: {status:?}");
            }
        }
        SectionResult::Err { error } => {
            let _ = writeln!(out, "- Could not be determined: {error}");
        }
    }

    let _ = writeln!(out, "\n## Trademark Screening");
    match &research.trademark_check {
        SectionResult::Ok(section) => {
            let _ = writeln!(out, "- **Status**: {:?}", section.status);
            let _ = writeln!(out, "- **Database**: {}", section.database_checked);
            for detail in &section.details {
                let _ = writeln!(out, "- {detail}");
            }
        }
        SectionResult::Err { error } => {
            let _ = writeln!(out, "- Could not be determined: {error}");
        }
    }

    let _ = writeln!(out, "\n## Domain Availability");
    match &research.domain_availability {
        SectionResult::Ok(section) => {
            for (domain, status) in section {
                let _ = writeln!(out, "- **{domain}**: {status:?}");
            }
        }
        SectionResult::Err { error } => {
            let _ = writeln!(out, "- Could not be determined: {error}");
        }
    }

    let _ = writeln!(out, "\n## Evaluation");
    match evaluation {
        SectionResult::Ok(evaluation) => {
            let _ = writeln!(out, "- **Overall score**: {}/10", evaluation.overall_score);
            let _ = writeln!(out, "- **Linguistics**: {}", evaluation.linguistic_analysis);
            let _ = writeln!(
                out,
                "- **Memorability**: {}",
                evaluation.memorability_distinctiveness
            );
            let _ = writeln!(out, "- **Relevance**: {}", evaluation.relevance);
            let _ = writeln!(
                out,
                "- **Availability**: {}",
                evaluation.availability_summary
            );
        }
        SectionResult::Err { error } => {
            let _ = writeln!(out, "- Could not be determined: {error}");
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{DomainSection, DomainStatus, Evaluation};

    #[test]
    fn renders_every_section_even_when_all_fail() {
        let research = ResearchReport {
            brand_name: "Zyxo".to_string(),
            web_search: SectionResult::err("search down"),
            social_media_search: SectionResult::err("search down"),
            trademark_check: SectionResult::err("search down"),
            domain_availability: SectionResult::err("rdap down"),
        };
        let evaluation: EvaluationResult = SectionResult::err("llm down");
        let markdown = render_markdown(&research, &evaluation);

        for heading in [
            "## Web Search",
            "## Social Media Presence",
            "## Trademark Screening",
            "## Domain Availability",
            "## Evaluation",
        ] {
            assert!(markdown.contains(heading), "missing {heading}");
        }
        assert_eq!(markdown.matches("Could not be determined").count(), 5);
    }

    #[test]
    fn renders_score_and_domains() {
        let mut domains = DomainSection::new();
        domains.insert("zyxo.com".to_string(), DomainStatus::NotAvailable);
        let research = ResearchReport {
            brand_name: "Zyxo".to_string(),
            web_search: SectionResult::err("down"),
            social_media_search: SectionResult::err("down"),
            trademark_check: SectionResult::err("down"),
            domain_availability: SectionResult::Ok(domains),
        };
        let evaluation = SectionResult::Ok(Evaluation {
            linguistic_analysis: "crisp".to_string(),
            memorability_distinctiveness: "high".to_string(),
            relevance: "abstract".to_string(),
            availability_summary: "mostly clear".to_string(),
            overall_score: 8,
        });
        let markdown = render_markdown(&research, &evaluation);
        assert!(markdown.contains("8/10"));
        assert!(markdown.contains("**zyxo.com**"));
    }
}
