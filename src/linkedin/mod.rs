pub(crate) mod identity;
pub(crate) mod picture;

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::{PortfolioError, Result};
use crate::model::Credential;

/// Fetch `{base}{endpoint}` with the credential as bearer token and decode
/// the JSON body.
pub(crate) async fn get_json<T: DeserializeOwned>(
    client: &reqwest::Client,
    base: &str,
    credential: &Credential,
    endpoint: &str,
) -> Result<T> {
    if credential.is_demo() {
        return Err(PortfolioError::DemoCredential);
    }

    let url = format!("{base}{endpoint}");
    debug!(url = url.as_str(), "fetching profile resource");

    let response = client
        .get(&url)
        .bearer_auth(&credential.access_token)
        .header(reqwest::header::CONTENT_TYPE, "application/json")
        .send()
        .await
        .map_err(|e| PortfolioError::Http {
            url: url.clone(),
            source: e,
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(PortfolioError::UnexpectedStatus {
            url,
            status: status.as_u16(),
            status_text: status.canonical_reason().unwrap_or_default().to_string(),
        });
    }

    let body = response.text().await.map_err(|e| PortfolioError::ResponseBody {
        url: url.clone(),
        source: e,
    })?;

    serde_json::from_str(&body).map_err(|e| PortfolioError::Decode { url, source: e })
}
