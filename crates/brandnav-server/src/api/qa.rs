use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Extension, Json,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{ApiFailure, AppState};
use crate::middleware::RequestId;

#[derive(Debug, Deserialize)]
pub(super) struct QaRequest {
    #[serde(default)]
    question: String,
    #[serde(default)]
    context: Option<Value>,
}

#[derive(Debug, Serialize)]
pub(super) struct QaResponse {
    success: bool,
    answer: String,
}

/// `POST /api/v1/qa` — answer a follow-up question about a prior analysis.
///
/// Stateless: the client resupplies the analysis result it received as the
/// `context` field; nothing is looked up server-side.
pub(super) async fn qa(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    body: Result<Json<QaRequest>, JsonRejection>,
) -> Result<Json<QaResponse>, ApiFailure> {
    let Json(request) = body.map_err(|e| {
        ApiFailure::new(StatusCode::BAD_REQUEST, "Invalid Request", e.to_string())
    })?;

    let question = request.question.trim();
    if question.is_empty() {
        return Err(ApiFailure::new(
            StatusCode::BAD_REQUEST,
            "Missing Input",
            "the 'question' field is required and must be non-empty",
        ));
    }

    let context = match &request.context {
        Some(value) if has_content(value) => value,
        _ => {
            return Err(ApiFailure::new(
                StatusCode::BAD_REQUEST,
                "Missing Context",
                "the 'context' field must carry the analysis result to ask about",
            ))
        }
    };

    tracing::info!(request_id = %req_id.0, "accepted follow-up question");
    let answer = state
        .analyzer
        .answer_followup(question, context)
        .await
        .map_err(|e| {
            tracing::error!(request_id = %req_id.0, error = %e, "follow-up answer failed");
            ApiFailure::new(
                StatusCode::BAD_GATEWAY,
                "QA Processing Error",
                e.to_string(),
            )
        })?;

    Ok(Json(QaResponse {
        success: true,
        answer,
    }))
}

fn has_content(context: &Value) -> bool {
    match context {
        Value::Null => false,
        Value::Object(map) => !map.is_empty(),
        _ => true,
    }
}
