use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

/// All errors that can occur while resolving credentials, talking to the
/// profile API, or serving the HTTP surface.
#[derive(thiserror::Error, Debug)]
pub enum PortfolioError {
    /// No real access token is configured.
    #[error("LinkedIn access token not configured in environment")]
    ConfigurationMissing,

    /// An environment value could not be parsed.
    #[error("invalid value {value:?} for {key}")]
    InvalidConfig { key: &'static str, value: String },

    /// The configured token cannot be sent as a bearer header.
    #[error("access token contains characters that are not valid in a header")]
    InvalidToken,

    /// A demo credential was about to be sent to the real profile API.
    #[error("demo credentials are never forwarded to the profile API")]
    DemoCredential,

    /// The shared HTTP client could not be built.
    #[error("failed to build http client: {0}")]
    HttpClient(#[source] reqwest::Error),

    /// HTTP request failed (network, DNS, TLS, timeout, etc.).
    #[error("http request failed for {url}: {source}")]
    Http {
        url: String,
        source: reqwest::Error,
    },

    /// The profile API returned a non-success HTTP status code.
    #[error("LinkedIn API error: {status} {status_text} for {url}")]
    UnexpectedStatus {
        url: String,
        status: u16,
        status_text: String,
    },

    /// Failed to read the response body.
    #[error("failed to read response body from {url}: {source}")]
    ResponseBody {
        url: String,
        source: reqwest::Error,
    },

    /// The response body was not the JSON shape we expected.
    #[error("failed to decode response from {url}: {source}")]
    Decode {
        url: String,
        source: serde_json::Error,
    },

    /// A required query or path argument is absent.
    #[error("{name} parameter is required")]
    MissingParameter { name: &'static str },

    /// A URL argument could not be parsed.
    #[error("invalid url {url:?}: {source}")]
    InvalidUrl {
        url: String,
        source: url::ParseError,
    },
}

/// Body of every error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl PortfolioError {
    /// Stable machine-readable code, used in logs and fallback reports.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            PortfolioError::ConfigurationMissing => "configuration_missing",
            PortfolioError::InvalidConfig { .. } => "invalid_config",
            PortfolioError::InvalidToken => "invalid_token",
            PortfolioError::DemoCredential => "demo_credential",
            PortfolioError::HttpClient(_) => "http_client",
            PortfolioError::Http { .. } => "network_failure",
            PortfolioError::UnexpectedStatus { .. } => "upstream_error",
            PortfolioError::ResponseBody { .. } => "network_failure",
            PortfolioError::Decode { .. } => "upstream_error",
            PortfolioError::MissingParameter { .. } => "missing_parameter",
            PortfolioError::InvalidUrl { .. } => "invalid_url",
        }
    }

    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            PortfolioError::ConfigurationMissing => StatusCode::BAD_REQUEST,
            PortfolioError::MissingParameter { .. } => StatusCode::BAD_REQUEST,
            PortfolioError::Http { .. }
            | PortfolioError::UnexpectedStatus { .. }
            | PortfolioError::ResponseBody { .. }
            | PortfolioError::Decode { .. } => StatusCode::BAD_GATEWAY,
            PortfolioError::InvalidConfig { .. }
            | PortfolioError::HttpClient(_)
            | PortfolioError::InvalidToken
            | PortfolioError::DemoCredential
            | PortfolioError::InvalidUrl { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for PortfolioError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = match &self {
            PortfolioError::ConfigurationMissing | PortfolioError::MissingParameter { .. } => {
                ErrorResponse {
                    error: self.to_string(),
                    details: None,
                }
            }
            _ => {
                tracing::error!(code = self.error_code(), "request failed: {self}");
                ErrorResponse {
                    error: self.error_code().to_string(),
                    details: Some(self.to_string()),
                }
            }
        };

        (status, axum::Json(body)).into_response()
    }
}

pub type Result<T> = std::result::Result<T, PortfolioError>;
