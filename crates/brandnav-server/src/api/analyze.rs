use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Extension, Json,
};
use serde::{Deserialize, Serialize};

use brandnav_core::BrandQuery;
use brandnav_research::{EvaluationResult, ResearchReport};

use super::{ApiFailure, AppState};
use crate::middleware::RequestId;

#[derive(Debug, Deserialize)]
pub(super) struct AnalyzeRequest {
    #[serde(default)]
    brand_name: String,
}

#[derive(Debug, Serialize)]
pub(super) struct AnalyzeResponse {
    success: bool,
    brand_name: String,
    research_data: ResearchReport,
    evaluation_data: EvaluationResult,
    report_markdown: String,
}

/// `POST /api/v1/analyze` — run the full pipeline for one brand name.
///
/// Input validation is the only client-visible failure; every upstream
/// problem is reported inside the body as per-section errors.
pub(super) async fn analyze(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    body: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Result<Json<AnalyzeResponse>, ApiFailure> {
    let Json(request) = body.map_err(|e| {
        ApiFailure::new(StatusCode::BAD_REQUEST, "Invalid Request", e.to_string())
    })?;

    let query = BrandQuery::parse(&request.brand_name).map_err(|e| {
        tracing::info!(request_id = %req_id.0, "rejected analysis request: {e}");
        ApiFailure::new(StatusCode::BAD_REQUEST, "Missing Input", e.to_string())
    })?;

    tracing::info!(request_id = %req_id.0, brand = %query, "accepted analysis request");
    let report = state.analyzer.analyze(&query).await;

    Ok(Json(AnalyzeResponse {
        success: true,
        brand_name: query.name().to_string(),
        research_data: report.research,
        evaluation_data: report.evaluation,
        report_markdown: report.report_markdown,
    }))
}
