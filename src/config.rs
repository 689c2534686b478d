/*
 * Responsibility
 * - Load settings from the environment (.env via dotenvy, then process env)
 * - Validate them (startup fails on bad values)
 */
use std::env::VarError;

use thiserror::Error;

use crate::services::auth::{AuthMethod, canonical_order};

/// Deployment flavor. Selects the default log filter when RUST_LOG is unset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppEnv {
    #[default]
    Development,
    Production,
}

impl AppEnv {
    fn parse(raw: &str) -> Self {
        if matches!(raw.trim().to_ascii_lowercase().as_str(), "production" | "prod") {
            Self::Production
        } else {
            Self::Development
        }
    }

    pub fn default_log_filter(&self) -> &'static str {
        match self {
            AppEnv::Development => "debug",
            AppEnv::Production => "info",
        }
    }
}

#[derive(Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("missing configuration: {0}")]
    Missing(&'static str),
    #[error("invalid configuration: {0}")]
    Invalid(&'static str),
}

#[derive(Debug, Clone)]
pub struct Config {
    pub app_env: AppEnv,
    pub chain_order: Vec<AuthMethod>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let app_env = match std::env::var("APP_ENV") {
            Ok(raw) => AppEnv::parse(&raw),
            Err(VarError::NotPresent) => AppEnv::default(),
            Err(VarError::NotUnicode(_)) => return Err(ConfigError::Invalid("APP_ENV")),
        };

        let chain_order = match std::env::var("AUTH_CHAIN_ORDER") {
            Ok(raw) => parse_chain_order(&raw)?,
            Err(VarError::NotPresent) => canonical_order(),
            Err(VarError::NotUnicode(_)) => return Err(ConfigError::Invalid("AUTH_CHAIN_ORDER")),
        };

        Ok(Self {
            app_env,
            chain_order,
        })
    }
}

fn parse_chain_order(raw: &str) -> Result<Vec<AuthMethod>, ConfigError> {
    let order = raw
        .split(',')
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(|s| s.parse::<AuthMethod>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|_| ConfigError::Invalid("AUTH_CHAIN_ORDER"))?;

    if order.is_empty() {
        return Err(ConfigError::Missing("AUTH_CHAIN_ORDER"));
    }
    Ok(order)
}
