use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Locale key used when flattening localized names.
pub const DEFAULT_LOCALE: &str = "en_US";

/// The profile owner's identity, in the shape the site renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    pub id: String,
    #[serde(rename = "name")]
    pub display_name: String,
    pub headline: String,
    pub location: String,
    pub vanity_name: String,
    #[serde(rename = "profilePicture")]
    pub profile_picture_url: Option<String>,
}

impl Identity {
    /// Flatten an upstream profile. Missing localized values become empty strings.
    pub fn from_profile(profile: &LinkedInProfile, profile_picture_url: Option<String>) -> Self {
        let first = localized(profile.first_name.as_ref());
        let last = localized(profile.last_name.as_ref());

        Self {
            id: profile.id.clone(),
            display_name: format!("{first} {last}").trim().to_string(),
            headline: localized(profile.headline.as_ref()).to_string(),
            location: profile
                .location
                .as_ref()
                .map(|l| l.name.clone())
                .unwrap_or_default(),
            vanity_name: profile.vanity_name.clone().unwrap_or_default(),
            profile_picture_url,
        }
    }
}

fn localized(value: Option<&LocalizedString>) -> &str {
    value
        .and_then(|v| v.localized.get(DEFAULT_LOCALE))
        .map(String::as_str)
        .unwrap_or_default()
}

/// Profile record as returned by the `/me` endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkedInProfile {
    pub id: String,
    pub first_name: Option<LocalizedString>,
    pub last_name: Option<LocalizedString>,
    pub headline: Option<LocalizedString>,
    pub location: Option<LinkedInLocation>,
    pub vanity_name: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LocalizedString {
    #[serde(default)]
    pub localized: HashMap<String, String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LinkedInLocation {
    pub name: String,
}

/// `/me` projected onto the profile picture.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfilePictureResponse {
    pub profile_picture: Option<ProfilePicture>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProfilePicture {
    #[serde(rename = "displayImage~")]
    pub display_image_expanded: Option<DisplayImage>,
    #[serde(rename = "displayImage")]
    pub display_image: Option<DisplayImageField>,
}

/// `displayImage` is either a URN or, in some responses, the expanded object.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum DisplayImageField {
    Expanded(DisplayImage),
    Urn(String),
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DisplayImage {
    #[serde(default)]
    pub elements: Vec<ImageElement>,
}

/// One resolution variant of the profile picture.
#[derive(Debug, Clone, Deserialize)]
pub struct ImageElement {
    #[serde(default)]
    pub data: ImageData,
    #[serde(default)]
    pub identifiers: Vec<ImageIdentifier>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ImageData {
    #[serde(default)]
    pub width: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ImageIdentifier {
    pub identifier: String,
}

impl ProfilePictureResponse {
    /// Image variants, preferring the expanded `displayImage~` projection.
    pub fn elements(&self) -> &[ImageElement] {
        let Some(picture) = &self.profile_picture else {
            return &[];
        };
        match (&picture.display_image_expanded, &picture.display_image) {
            (Some(expanded), _) => &expanded.elements,
            (None, Some(DisplayImageField::Expanded(image))) => &image.elements,
            _ => &[],
        }
    }
}
