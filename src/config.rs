use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;

use crate::error::{PortfolioError, Result};
use crate::fallback::{FallbackPolicy, OnError};

/// Value shipped in the sample env file; treated the same as "unset".
pub const ACCESS_TOKEN_PLACEHOLDER: &str = "your_linkedin_access_token_here";

pub const DEFAULT_API_BASE: &str = "https://api.linkedin.com/v2";
pub const DEFAULT_PORTFOLIO_NAME: &str = "John Doe";
pub const DEFAULT_PORTFOLIO_TITLE: &str = "Software Developer";
pub const DEFAULT_PORTFOLIO_EMAIL: &str = "your.email@example.com";
pub const DEFAULT_UPSTREAM_TIMEOUT: Duration = Duration::from_secs(10);
pub const DEFAULT_PORT: u16 = 3000;

/// Process-wide configuration, built once at startup and shared read-only.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub linkedin_access_token: Option<String>,
    pub linkedin_api_base: String,
    pub portfolio_name: String,
    pub portfolio_title: String,
    pub portfolio_email: String,
    pub upstream_timeout: Duration,
    pub fallback_policy: FallbackPolicy,
    pub bind_addr: SocketAddr,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            linkedin_access_token: None,
            linkedin_api_base: DEFAULT_API_BASE.to_string(),
            portfolio_name: DEFAULT_PORTFOLIO_NAME.to_string(),
            portfolio_title: DEFAULT_PORTFOLIO_TITLE.to_string(),
            portfolio_email: DEFAULT_PORTFOLIO_EMAIL.to_string(),
            upstream_timeout: DEFAULT_UPSTREAM_TIMEOUT,
            fallback_policy: FallbackPolicy::default(),
            bind_addr: SocketAddr::from(([0, 0, 0, 0], DEFAULT_PORT)),
        }
    }
}

impl AppConfig {
    /// Read the configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup. Empty values
    /// count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        let upstream_timeout = match get("UPSTREAM_TIMEOUT_SECS") {
            Some(v) => Duration::from_secs(parse_value("UPSTREAM_TIMEOUT_SECS", &v)?),
            None => defaults.upstream_timeout,
        };

        let fallback_policy = match get("PROFILE_FALLBACK") {
            Some(v) => FallbackPolicy {
                on_error: parse_value::<OnError>("PROFILE_FALLBACK", &v)?,
            },
            None => defaults.fallback_policy,
        };

        let host = match get("HOST") {
            Some(v) => parse_value("HOST", &v)?,
            None => defaults.bind_addr.ip(),
        };
        let port = match get("PORT") {
            Some(v) => parse_value("PORT", &v)?,
            None => defaults.bind_addr.port(),
        };

        Ok(Self {
            linkedin_access_token: get("LINKEDIN_ACCESS_TOKEN"),
            linkedin_api_base: get("LINKEDIN_API_BASE")
                .map(|v| v.trim_end_matches('/').to_string())
                .unwrap_or(defaults.linkedin_api_base),
            portfolio_name: get("PORTFOLIO_NAME").unwrap_or(defaults.portfolio_name),
            portfolio_title: get("PORTFOLIO_TITLE").unwrap_or(defaults.portfolio_title),
            portfolio_email: get("PORTFOLIO_EMAIL").unwrap_or(defaults.portfolio_email),
            upstream_timeout,
            fallback_policy,
            bind_addr: SocketAddr::new(host, port),
        })
    }

    /// The configured access token, unless it is missing or still the placeholder.
    pub fn live_token(&self) -> Option<&str> {
        self.linkedin_access_token
            .as_deref()
            .filter(|t| !t.is_empty() && *t != ACCESS_TOKEN_PLACEHOLDER)
    }
}

fn parse_value<T: FromStr>(key: &'static str, value: &str) -> Result<T> {
    value
        .trim()
        .parse()
        .map_err(|_| PortfolioError::InvalidConfig {
            key,
            value: value.to_string(),
        })
}
