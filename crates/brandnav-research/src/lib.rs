//! Brand-name research pipeline.
//!
//! Fans a validated brand name out to four independent research stages (web
//! search, social-media presence, trademark screening, domain availability),
//! asks the LLM to synthesize an evaluation over the aggregated findings,
//! and assembles everything into one [`Report`]. Every stage failure is
//! captured as a per-section error; nothing aborts the report.

mod analyzer;
mod domains;
mod evaluate;
mod market;
mod qa;
mod report;
mod social;
mod trademark;
mod types;

pub use analyzer::{Analyzer, AnalyzerError};
pub use types::{
    DomainSection, DomainStatus, Evaluation, EvaluationResult, PlatformPresence, PlatformQuery,
    PotentialConflict, Report, ResearchReport, SectionResult, SocialSection, TrademarkSection,
    TrademarkStatus, WebLink, WebSearchSection,
};
