//! Core types and configuration for the BrandNavigator service.

mod app_config;
mod brand;
mod config;

pub use app_config::{AppConfig, Environment};
pub use brand::{BrandQuery, BrandQueryError};
pub use config::{load_app_config, load_app_config_from_env, ConfigError};
