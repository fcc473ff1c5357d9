use tracing::{debug, instrument};

use crate::error::Result;
use crate::linkedin;
use crate::model::{Credential, ImageElement, ProfilePictureResponse};

pub(crate) const PICTURE_ENDPOINT: &str =
    "/me?projection=(id,profilePicture(displayImage~:playableStreams))";

/// Fetch the identifier of the widest profile picture variant, or `None`
/// when the profile has no picture.
#[instrument(skip(client, credential))]
pub(crate) async fn get_profile_picture(
    client: &reqwest::Client,
    base: &str,
    credential: &Credential,
) -> Result<Option<String>> {
    let response: ProfilePictureResponse =
        linkedin::get_json(client, base, credential, PICTURE_ENDPOINT).await?;
    let elements = response.elements();
    debug!(variants = elements.len(), "fetched profile picture variants");
    Ok(select_largest(elements))
}

/// Pick the variant with the greatest width. Ties keep the first one seen.
pub(crate) fn select_largest(elements: &[ImageElement]) -> Option<String> {
    elements
        .iter()
        .reduce(|best, current| {
            if current.data.width > best.data.width {
                current
            } else {
                best
            }
        })
        .and_then(|largest| largest.identifiers.first())
        .map(|id| id.identifier.clone())
}

#[cfg(test)]
mod tests {
    use serde_json::{json, Value};
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    fn element(width: u32, identifier: &str) -> Value {
        json!({
            "data": { "width": width },
            "identifiers": [{ "identifier": identifier }]
        })
    }

    fn elements(values: Vec<Value>) -> Vec<ImageElement> {
        serde_json::from_value(Value::Array(values)).unwrap()
    }

    #[test]
    fn test_select_largest() {
        let images = elements(vec![
            element(100, "small"),
            element(400, "large"),
            element(250, "medium"),
        ]);
        assert_eq!(select_largest(&images).as_deref(), Some("large"));
    }

    #[test]
    fn test_select_largest_tie_keeps_first() {
        let images = elements(vec![element(400, "first"), element(400, "second")]);
        assert_eq!(select_largest(&images).as_deref(), Some("first"));
    }

    #[test]
    fn test_select_largest_empty() {
        assert_eq!(select_largest(&[]), None);
    }

    #[tokio::test]
    async fn test_get_profile_picture_expanded_projection() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/me"))
            .and(query_param(
                "projection",
                "(id,profilePicture(displayImage~:playableStreams))",
            ))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "abc123",
                "profilePicture": {
                    "displayImage": "urn:li:digitalmediaAsset:C4D03AQ",
                    "displayImage~": {
                        "elements": [
                            element(100, "https://media.licdn.com/100"),
                            element(800, "https://media.licdn.com/800"),
                        ]
                    }
                }
            })))
            .mount(&server)
            .await;

        let client = reqwest::Client::new();
        let picture = get_profile_picture(&client, &server.uri(), &Credential::live("AQV-live"))
            .await
            .unwrap();
        assert_eq!(picture.as_deref(), Some("https://media.licdn.com/800"));
    }

    #[tokio::test]
    async fn test_get_profile_picture_without_variants() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/me"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "abc123",
                "profilePicture": { "displayImage": { "elements": [] } }
            })))
            .mount(&server)
            .await;

        let client = reqwest::Client::new();
        let picture = get_profile_picture(&client, &server.uri(), &Credential::live("AQV-live"))
            .await
            .unwrap();
        assert_eq!(picture, None);
    }
}
