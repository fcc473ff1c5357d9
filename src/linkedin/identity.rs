use tracing::{debug, instrument};

use crate::error::Result;
use crate::linkedin;
use crate::model::{Credential, LinkedInProfile};

pub(crate) const PROFILE_ENDPOINT: &str = "/me";

#[instrument(skip(client, credential))]
pub(crate) async fn get_profile(
    client: &reqwest::Client,
    base: &str,
    credential: &Credential,
) -> Result<LinkedInProfile> {
    let profile: LinkedInProfile =
        linkedin::get_json(client, base, credential, PROFILE_ENDPOINT).await?;
    debug!(id = %profile.id, "fetched profile");
    Ok(profile)
}
