//! Evaluation stage: one LLM call over the aggregated research findings.

use std::fmt::Write as _;

use brandnav_core::BrandQuery;
use brandnav_llm::LlmClient;

use crate::types::{Evaluation, EvaluationResult, ResearchReport, SectionResult};

const SYSTEM_PROMPT: &str = "You are an AI assistant specialized in brand name \
evaluation. Provide analysis strictly in the requested JSON format.";

/// How much of an unparseable response to echo back in diagnostics.
const RAW_SNIPPET_CHARS: usize = 200;

/// Ask the LLM for a structured assessment of the brand name given the full
/// research report.
///
/// Upstream failures and malformed responses both become an evaluation
/// error with diagnostic text; a score is never fabricated.
pub(crate) async fn evaluate(
    llm: &LlmClient,
    query: &BrandQuery,
    research: &ResearchReport,
) -> EvaluationResult {
    let prompt = build_evaluation_prompt(query.name(), research);
    tracing::info!(brand = %query, "requesting LLM evaluation");

    match llm.complete_json(SYSTEM_PROMPT, &prompt).await {
        Ok(raw) => parse_evaluation(&raw),
        Err(e) => {
            tracing::warn!(brand = %query, error = %e, "evaluation request failed");
            SectionResult::err(format!("evaluation request failed: {e}"))
        }
    }
}

fn build_evaluation_prompt(brand_name: &str, research: &ResearchReport) -> String {
    let research_json = serde_json::to_string_pretty(research)
        .unwrap_or_else(|_| "{\"error\": \"research data unavailable\"}".to_string());

    let mut prompt = String::new();
    let _ = write!(
        prompt,
        "**Brand Name Evaluation Request**\n\n\
         **Brand name:** {brand_name}\n\n\
         Evaluate the brand name '{brand_name}' based on the market research data \
         below. Consider:\n\
         1. Linguistic qualities: pronunciation, spelling, memorability, negative \
         connotations.\n\
         2. Memorability and distinctiveness, weighed against the potential \
         conflicts found.\n\
         3. Relevance: does the name hint at a product category or audience? State \
         assumptions if made.\n\
         4. Availability issues: summarize conflicts across web, social media, \
         domains, and trademarks based only on the provided data, and assess \
         severity.\n\
         5. Overall potential score from 1 (very poor) to 10 (excellent), weighing \
         availability heavily.\n\n\
         **Research data:**\n```json\n{research_json}\n```\n\
         Note: a 'potentially_available' domain status means it might be available \
         but requires manual verification. The trademark check is a basic web \
         screen; 'potential_conflict_found_on_site' requires deeper investigation.\n\n\
         Respond strictly as a JSON object with ONLY these keys:\n\
         - \"linguistic_analysis\" (string)\n\
         - \"memorability_distinctiveness\" (string)\n\
         - \"relevance\" (string)\n\
         - \"availability_summary\" (string)\n\
         - \"overall_score\" (integer, 1-10)\n"
    );
    prompt
}

/// Parse the raw completion into an [`Evaluation`], rejecting anything that
/// does not match the contract exactly.
pub(crate) fn parse_evaluation(raw: &str) -> EvaluationResult {
    let cleaned = strip_code_fences(raw);
    match serde_json::from_str::<Evaluation>(cleaned) {
        Ok(evaluation) if (1..=10).contains(&evaluation.overall_score) => {
            SectionResult::Ok(evaluation)
        }
        Ok(evaluation) => SectionResult::err(format!(
            "evaluation returned an out-of-range overall_score: {}",
            evaluation.overall_score
        )),
        Err(e) => SectionResult::err(format!(
            "could not parse evaluation response: {e}; raw response started with: {}",
            snippet(cleaned)
        )),
    }
}

/// Some providers wrap JSON-mode output in markdown fences anyway.
fn strip_code_fences(raw: &str) -> &str {
    let trimmed = raw.trim();
    let without_open = trimmed
        .strip_prefix("```json")
        .or_else(|| trimmed.strip_prefix("```"))
        .unwrap_or(trimmed);
    without_open
        .strip_suffix("```")
        .unwrap_or(without_open)
        .trim()
}

fn snippet(raw: &str) -> String {
    raw.chars().take(RAW_SNIPPET_CHARS).collect()
}
