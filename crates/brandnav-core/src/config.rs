use thiserror::Error;

use crate::app_config::{AppConfig, Environment};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required env var: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for env var {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the
/// process, without touching `.env` files. Useful in tests or when the caller
/// manages env setup.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// The parsing/validation core is decoupled from the actual environment so it
/// can be tested with a pure `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;

    let require = |var: &str| -> Result<String, ConfigError> {
        lookup(var).map_err(|_| ConfigError::MissingEnvVar(var.to_string()))
    };

    let or_default =
        |var: &str, default: &str| -> String { lookup(var).unwrap_or_else(|_| default.to_string()) };

    let parse_addr = |var: &str, default: &str| -> Result<SocketAddr, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<usize>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let parse_list = |var: &str, default: &str| -> Vec<String> {
        or_default(var, default)
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(ToOwned::to_owned)
            .collect()
    };

    let search_api_key = require("BRANDNAV_SEARCH_API_KEY")?;
    let llm_api_key = require("BRANDNAV_LLM_API_KEY")?;

    let env = parse_environment(&or_default("BRANDNAV_ENV", "development"))?;
    let bind_addr = parse_addr("BRANDNAV_BIND_ADDR", "0.0.0.0:3000")?;
    let log_level = or_default("BRANDNAV_LOG_LEVEL", "info");

    let search_base_url = or_default(
        "BRANDNAV_SEARCH_BASE_URL",
        "https://api.search.brave.com/res/v1",
    );
    let llm_base_url = or_default("BRANDNAV_LLM_BASE_URL", "https://api.openai.com/v1");
    let llm_model = or_default("BRANDNAV_LLM_MODEL", "gpt-4o");
    let rdap_base_url = or_default("BRANDNAV_RDAP_BASE_URL", "https://rdap.org");

    let request_timeout_secs = parse_u64("BRANDNAV_REQUEST_TIMEOUT_SECS", "30")?;
    let search_result_count = parse_usize("BRANDNAV_SEARCH_RESULT_COUNT", "10")?;

    let social_platforms = parse_list(
        "BRANDNAV_SOCIAL_PLATFORMS",
        "twitter.com,instagram.com,facebook.com,linkedin.com,tiktok.com",
    );
    let domain_tlds = parse_list("BRANDNAV_DOMAIN_TLDS", "com,co,io,ai,org,net");
    let trademark_country = or_default("BRANDNAV_TRADEMARK_COUNTRY", "US");

    Ok(AppConfig {
        env,
        bind_addr,
        log_level,
        search_api_key,
        search_base_url,
        llm_api_key,
        llm_base_url,
        llm_model,
        rdap_base_url,
        request_timeout_secs,
        search_result_count,
        social_platforms,
        domain_tlds,
        trademark_country,
    })
}

fn parse_environment(raw: &str) -> Result<Environment, ConfigError> {
    match raw {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "BRANDNAV_ENV".to_string(),
            reason: format!("unknown environment '{other}'"),
        }),
    }
}
