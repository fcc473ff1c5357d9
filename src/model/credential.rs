use serde::Serialize;

/// Nominal lifetime reported for every token, in seconds (60 days).
pub const TOKEN_EXPIRES_IN: u64 = 5_184_000;
pub const TOKEN_SCOPE: &str = "profile email";
pub const TOKEN_TYPE: &str = "bearer";
pub const DEMO_TOKEN_PREFIX: &str = "demo_token_";

/// Whether a credential may be sent to the real profile API.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, strum_macros::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum CredentialKind {
    Live,
    Demo,
}

/// A bearer token for the profile API. Serializes as the token endpoint body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Credential {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: u64,
    pub scope: String,
    #[serde(skip)]
    pub kind: CredentialKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Credential {
    pub fn live(token: impl Into<String>) -> Self {
        Self::with_kind(token.into(), CredentialKind::Live)
    }

    /// A demo credential stamped with the current epoch milliseconds.
    pub fn demo() -> Self {
        Self::demo_at(chrono::Utc::now().timestamp_millis())
    }

    pub fn demo_at(epoch_millis: i64) -> Self {
        Self::with_kind(
            format!("{DEMO_TOKEN_PREFIX}{epoch_millis}"),
            CredentialKind::Demo,
        )
    }

    fn with_kind(access_token: String, kind: CredentialKind) -> Self {
        Self {
            access_token,
            token_type: TOKEN_TYPE.to_string(),
            expires_in: TOKEN_EXPIRES_IN,
            scope: TOKEN_SCOPE.to_string(),
            kind,
            note: None,
            error: None,
        }
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }

    pub fn is_demo(&self) -> bool {
        self.kind == CredentialKind::Demo
    }
}
