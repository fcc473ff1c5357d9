use reqwest::header::HeaderValue;
use tracing::{debug, instrument, warn};

use crate::config::{AppConfig, ACCESS_TOKEN_PLACEHOLDER};
use crate::error::{PortfolioError, Result};
use crate::model::{Credential, DEMO_TOKEN_PREFIX};

pub const DEMO_NOTE: &str =
    "Using demo token - Configure LINKEDIN_ACCESS_TOKEN in .env.local for real data";
pub const DEMO_ERROR_NOTE: &str = "Using demo token due to configuration error";

/// Resolves credentials for the profile API from the process configuration.
#[derive(Debug, Clone, Copy)]
pub struct TokenProvider<'a> {
    config: &'a AppConfig,
}

impl<'a> TokenProvider<'a> {
    pub fn new(config: &'a AppConfig) -> Self {
        Self { config }
    }

    /// Return the configured token, or a demo token when none is configured.
    /// Never fails: errors are reported inside a demo credential.
    #[instrument(skip(self))]
    pub fn get_token(&self) -> Credential {
        match self.resolve() {
            Ok(Some(credential)) => credential,
            Ok(None) => {
                debug!("no access token configured, issuing demo token");
                Credential::demo().with_note(DEMO_NOTE)
            }
            Err(err) => {
                warn!("token resolution failed, issuing demo token: {err}");
                Credential::demo()
                    .with_note(DEMO_ERROR_NOTE)
                    .with_error(err.to_string())
            }
        }
    }

    /// Return the configured token or [`PortfolioError::ConfigurationMissing`].
    #[instrument(skip(self))]
    pub fn issue_token(&self) -> Result<Credential> {
        self.resolve()?.ok_or(PortfolioError::ConfigurationMissing)
    }

    fn resolve(&self) -> Result<Option<Credential>> {
        self.config
            .live_token()
            .map(|token| {
                validate_bearer(token)?;
                Ok(Credential::live(token))
            })
            .transpose()
    }
}

/// Classify a token handed in by a caller. Demo tokens and the placeholder
/// are never treated as live.
pub fn classify_supplied(token: &str) -> Credential {
    if token.starts_with(DEMO_TOKEN_PREFIX) || token == ACCESS_TOKEN_PLACEHOLDER {
        Credential {
            access_token: token.to_string(),
            ..Credential::demo()
        }
    } else {
        Credential::live(token)
    }
}

fn validate_bearer(token: &str) -> Result<()> {
    HeaderValue::from_str(&format!("Bearer {token}"))
        .map(|_| ())
        .map_err(|_| PortfolioError::InvalidToken)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CredentialKind, TOKEN_EXPIRES_IN, TOKEN_SCOPE};

    fn config_with_token(token: Option<&str>) -> AppConfig {
        AppConfig {
            linkedin_access_token: token.map(str::to_string),
            ..AppConfig::default()
        }
    }

    fn is_demo_token(token: &str) -> bool {
        token
            .strip_prefix(DEMO_TOKEN_PREFIX)
            .is_some_and(|ms| !ms.is_empty() && ms.chars().all(|c| c.is_ascii_digit()))
    }

    #[test]
    fn test_demo_token_when_unset() {
        let config = config_with_token(None);
        let credential = TokenProvider::new(&config).get_token();

        assert_eq!(credential.kind, CredentialKind::Demo);
        assert!(is_demo_token(&credential.access_token));
        assert_eq!(credential.expires_in, TOKEN_EXPIRES_IN);
        assert_eq!(credential.scope, TOKEN_SCOPE);
        assert_eq!(credential.note.as_deref(), Some(DEMO_NOTE));
        assert!(credential.error.is_none());
    }

    #[test]
    fn test_demo_token_for_placeholder() {
        let config = config_with_token(Some(ACCESS_TOKEN_PLACEHOLDER));
        let credential = TokenProvider::new(&config).get_token();
        assert!(credential.is_demo());
        assert!(is_demo_token(&credential.access_token));
    }

    #[test]
    fn test_live_token() {
        let config = config_with_token(Some("AQV-real-token"));
        let credential = TokenProvider::new(&config).get_token();

        assert_eq!(credential.kind, CredentialKind::Live);
        assert_eq!(credential.access_token, "AQV-real-token");
        assert_eq!(credential.token_type, "bearer");
        assert!(credential.note.is_none());
    }

    #[test]
    fn test_unusable_token_degrades_to_demo_with_error() {
        let config = config_with_token(Some("bad\ntoken"));
        let credential = TokenProvider::new(&config).get_token();

        assert!(credential.is_demo());
        assert_eq!(credential.note.as_deref(), Some(DEMO_ERROR_NOTE));
        assert!(credential.error.is_some());
    }

    #[test]
    fn test_issue_token_requires_configuration() {
        let config = config_with_token(None);
        let err = TokenProvider::new(&config).issue_token().unwrap_err();
        assert!(matches!(err, PortfolioError::ConfigurationMissing));

        let config = config_with_token(Some("AQV-real-token"));
        let credential = TokenProvider::new(&config).issue_token().unwrap();
        assert_eq!(credential.kind, CredentialKind::Live);
    }

    #[test]
    fn test_issue_token_reports_unusable_token() {
        let config = config_with_token(Some("bad\ntoken"));
        let err = TokenProvider::new(&config).issue_token().unwrap_err();
        assert!(matches!(err, PortfolioError::InvalidToken));
    }

    #[test]
    fn test_classify_supplied() {
        assert!(classify_supplied("demo_token_1700000000000").is_demo());
        assert!(classify_supplied(ACCESS_TOKEN_PLACEHOLDER).is_demo());
        assert_eq!(
            classify_supplied("demo_token_1700000000000").access_token,
            "demo_token_1700000000000"
        );
        assert!(!classify_supplied("AQV-real-token").is_demo());
    }

    #[test]
    fn test_demo_body_shape() {
        let json = serde_json::to_value(Credential::demo_at(42).with_note(DEMO_NOTE)).unwrap();
        assert_eq!(json["access_token"], "demo_token_42");
        assert_eq!(json["token_type"], "bearer");
        assert_eq!(json["expires_in"], 5_184_000);
        assert_eq!(json["scope"], "profile email");
        assert!(json.get("kind").is_none());
        assert!(json.get("error").is_none());
    }
}
