//! Follow-up Q&A stage.
//!
//! Stateless: the caller resupplies the previously produced report as
//! context with every question. The context arrives as loose JSON (it
//! round-tripped through the client), so it is summarized defensively
//! rather than deserialized into the report types.

use std::fmt::Write as _;

use brandnav_llm::{LlmClient, LlmError};
use serde_json::{json, Value};

const QA_SYSTEM_PROMPT: &str = "You are a helpful AI assistant answering \
follow-up questions about a brand analysis report based only on the provided \
context. Be concise.";

/// Answer a follow-up question against a previously produced report.
///
/// # Errors
///
/// Returns [`LlmError`] if the completion request fails; the caller turns
/// this into a user-visible error message.
pub(crate) async fn answer_followup(
    llm: &LlmClient,
    question: &str,
    context: &Value,
) -> Result<String, LlmError> {
    let prompt = build_qa_prompt(question, context);
    tracing::info!(question, "forwarding follow-up question to LLM");
    llm.complete(QA_SYSTEM_PROMPT, &prompt).await
}

fn build_qa_prompt(question: &str, context: &Value) -> String {
    let summary = summarize_context(context);
    let summary_json = serde_json::to_string_pretty(&summary)
        .unwrap_or_else(|_| "{\"error\": \"context unavailable\"}".to_string());

    let mut prompt = String::new();
    let _ = write!(
        prompt,
        "**Context:**\n\
         The user received an initial analysis for a candidate brand name. Key \
         findings:\n```json\n{summary_json}\n```\n\n\
         **User's follow-up question:**\n{question}\n\n\
         **Task:**\n\
         - If the question asks for information directly present in the context, \
         answer based only on that context.\n\
         - If it asks for brainstorming related to the analyzed brand (alternative \
         names, taglines), use the context as background and offer a few ideas.\n\
         - If the context does not contain the information for a factual question, \
         say so plainly.\n\
         - Do not perform new searches or use outside information.\n\
         - Keep the answer concise.\n"
    );
    prompt
}

/// Condense the caller-supplied report into the handful of findings the
/// model needs. Missing or malformed pieces degrade to nulls instead of
/// failing the question.
fn summarize_context(context: &Value) -> Value {
    let research = context.get("research_data").cloned().unwrap_or(Value::Null);

    let web_conflict_count = research
        .pointer("/web_search/potential_conflicts")
        .and_then(Value::as_array)
        .map_or(0, Vec::len);

    let evaluation = context.get("evaluation_data");
    let evaluation_summary = match evaluation {
        Some(eval) if eval.is_object() && eval.get("error").is_none() => eval.clone(),
        _ => json!("Evaluation not available or failed."),
    };

    json!({
        "brand_name": context.get("brand_name").cloned().unwrap_or(Value::Null),
        "research_summary": {
            "web_conflict_count": web_conflict_count,
            "social_media_status": research
                .pointer("/social_media_search/platform_results")
                .cloned()
                .unwrap_or(Value::Null),
            "domain_status": research
                .get("domain_availability")
                .cloned()
                .unwrap_or(Value::Null),
            "trademark_status": research
                .pointer("/trademark_check/status")
                .cloned()
                .unwrap_or_else(|| json!("unknown")),
        },
        "evaluation_summary": evaluation_summary,
    })
}
