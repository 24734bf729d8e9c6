use std::net::SocketAddr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

/// Process-wide configuration, loaded once at startup and treated as
/// read-only afterwards. Every research stage receives what it needs from
/// here rather than reading ambient env state.
#[derive(Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub bind_addr: SocketAddr,
    pub log_level: String,
    pub search_api_key: String,
    pub search_base_url: String,
    pub llm_api_key: String,
    pub llm_base_url: String,
    pub llm_model: String,
    pub rdap_base_url: String,
    pub request_timeout_secs: u64,
    pub search_result_count: usize,
    pub social_platforms: Vec<String>,
    pub domain_tlds: Vec<String>,
    pub trademark_country: String,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("env", &self.env)
            .field("bind_addr", &self.bind_addr)
            .field("log_level", &self.log_level)
            .field("search_api_key", &"[redacted]")
            .field("search_base_url", &self.search_base_url)
            .field("llm_api_key", &"[redacted]")
            .field("llm_base_url", &self.llm_base_url)
            .field("llm_model", &self.llm_model)
            .field("rdap_base_url", &self.rdap_base_url)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("search_result_count", &self.search_result_count)
            .field("social_platforms", &self.social_platforms)
            .field("domain_tlds", &self.domain_tlds)
            .field("trademark_country", &self.trademark_country)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_redacts_credentials() {
        let config = AppConfig {
            env: Environment::Test,
            bind_addr: "127.0.0.1:3000".parse().expect("addr"),
            log_level: "info".to_string(),
            search_api_key: "super-secret-search".to_string(),
            search_base_url: "https://api.search.brave.com/res/v1".to_string(),
            llm_api_key: "super-secret-llm".to_string(),
            llm_base_url: "https://api.openai.com/v1".to_string(),
            llm_model: "gpt-4o".to_string(),
            rdap_base_url: "https://rdap.org".to_string(),
            request_timeout_secs: 30,
            search_result_count: 10,
            social_platforms: vec!["twitter.com".to_string()],
            domain_tlds: vec!["com".to_string()],
            trademark_country: "US".to_string(),
        };
        let rendered = format!("{config:?}");
        assert!(!rendered.contains("super-secret-search"));
        assert!(!rendered.contains("super-secret-llm"));
        assert!(rendered.contains("[redacted]"));
    }
}
