use tracing::instrument;

use crate::config::DEFAULT_API_BASE;
use crate::error::Result;
use crate::linkedin;
use crate::mock;
use crate::model::*;

/// Client for the LinkedIn profile API, bound to one credential.
///
/// `ProfileClient` wraps a [`reqwest::Client`]. Identity and profile picture
/// are fetched live. Experience, education and skills need partner-level API
/// access this service does not have, so those methods always return the
/// mock data set.
///
/// # Examples
///
/// ```no_run
/// # async fn example() -> portfolio_profile::Result<()> {
/// use portfolio_profile::{Credential, Identity, ProfileClient};
///
/// let client = ProfileClient::new(Credential::live("AQV..."));
/// let profile = client.get_identity().await?;
/// let picture = client.get_profile_picture().await?;
/// println!("{:?}", Identity::from_profile(&profile, picture));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ProfileClient {
    http: reqwest::Client,
    base_url: String,
    credential: Credential,
}

impl ProfileClient {
    /// Create a client against the public API with default HTTP settings.
    pub fn new(credential: Credential) -> Self {
        Self::with_client(reqwest::Client::new(), DEFAULT_API_BASE, credential)
    }

    /// Create a client using the provided [`reqwest::Client`] and base URL.
    ///
    /// Use this when you need to configure timeouts or point at a test server.
    pub fn with_client(
        client: reqwest::Client,
        base_url: impl Into<String>,
        credential: Credential,
    ) -> Self {
        Self {
            http: client,
            base_url: base_url.into(),
            credential,
        }
    }

    pub fn credential(&self) -> &Credential {
        &self.credential
    }

    /// Fetch the raw profile record.
    #[instrument(skip(self))]
    pub async fn get_identity(&self) -> Result<LinkedInProfile> {
        linkedin::identity::get_profile(&self.http, &self.base_url, &self.credential).await
    }

    /// Fetch the identifier of the largest profile picture, `None` if there is none.
    #[instrument(skip(self))]
    pub async fn get_profile_picture(&self) -> Result<Option<String>> {
        linkedin::picture::get_profile_picture(&self.http, &self.base_url, &self.credential).await
    }

    pub async fn get_experiences(&self) -> Result<Vec<ExperienceEntry>> {
        Ok(mock::experiences())
    }

    pub async fn get_education(&self) -> Result<Vec<EducationEntry>> {
        Ok(mock::education())
    }

    pub async fn get_skills(&self) -> Result<Vec<SkillEntry>> {
        Ok(mock::skills())
    }
}
