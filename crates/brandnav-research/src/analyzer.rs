//! The orchestrator: owns the external-service clients and runs the
//! analysis pipeline end to end.

use brandnav_core::{AppConfig, BrandQuery};
use brandnav_domains::{DomainClient, DomainError};
use brandnav_llm::{LlmClient, LlmError};
use brandnav_search::{SearchClient, SearchError};
use thiserror::Error;

use crate::types::{Report, ResearchReport};
use crate::{domains, evaluate, market, qa, report, social, trademark};

/// Failures constructing the analyzer's clients at startup.
#[derive(Debug, Error)]
pub enum AnalyzerError {
    #[error("search client: {0}")]
    Search(#[from] SearchError),

    #[error("domain client: {0}")]
    Domain(#[from] DomainError),

    #[error("LLM client: {0}")]
    Llm(#[from] LlmError),
}

/// Holds the external-service clients plus the fixed platform/TLD lists.
/// Built once at startup from [`AppConfig`] and shared read-only across
/// requests.
pub struct Analyzer {
    search: SearchClient,
    domains: DomainClient,
    llm: LlmClient,
    search_result_count: usize,
    social_platforms: Vec<String>,
    domain_tlds: Vec<String>,
    trademark_country: String,
}

impl Analyzer {
    /// Build the analyzer and its clients from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`AnalyzerError`] if any underlying client cannot be
    /// constructed (bad base URL, TLS setup failure).
    pub fn from_config(config: &AppConfig) -> Result<Self, AnalyzerError> {
        Ok(Self {
            search: SearchClient::with_base_url(
                &config.search_api_key,
                config.request_timeout_secs,
                &config.search_base_url,
            )?,
            domains: DomainClient::with_base_url(
                config.request_timeout_secs,
                &config.rdap_base_url,
            )?,
            llm: LlmClient::with_base_url(
                &config.llm_api_key,
                &config.llm_model,
                config.request_timeout_secs,
                &config.llm_base_url,
            )?,
            search_result_count: config.search_result_count,
            social_platforms: config.social_platforms.clone(),
            domain_tlds: config.domain_tlds.clone(),
            trademark_country: config.trademark_country.clone(),
        })
    }

    /// Run the full analysis pipeline for one validated brand name.
    ///
    /// The four research stages run concurrently; the evaluation stage runs
    /// over their combined output. This never fails: every upstream problem
    /// is captured as a per-section error inside the report.
    pub async fn analyze(&self, query: &BrandQuery) -> Report {
        tracing::info!(brand = %query, "starting brand analysis");

        let (web_search, social_media_search, trademark_check, domain_availability) = tokio::join!(
            market::search_web(&self.search, query, self.search_result_count),
            social::check_platforms(&self.search, query, &self.social_platforms),
            trademark::check_registry(&self.search, query, &self.trademark_country),
            domains::check_domains(&self.domains, query, &self.domain_tlds),
        );

        let research = ResearchReport {
            brand_name: query.name().to_string(),
            web_search,
            social_media_search,
            trademark_check,
            domain_availability,
        };

        let evaluation = evaluate::evaluate(&self.llm, query, &research).await;
        let report_markdown = report::render_markdown(&research, &evaluation);

        tracing::info!(
            brand = %query,
            evaluation_failed = evaluation.is_err(),
            "brand analysis complete"
        );

        Report {
            research,
            evaluation,
            report_markdown,
        }
    }

    /// Answer a follow-up question against a previously produced report,
    /// supplied back by the caller as loose JSON.
    ///
    /// # Errors
    ///
    /// Returns [`LlmError`] if the completion request fails.
    pub async fn answer_followup(
        &self,
        question: &str,
        context: &serde_json::Value,
    ) -> Result<String, LlmError> {
        qa::answer_followup(&self.llm, question, context).await
    }
}
