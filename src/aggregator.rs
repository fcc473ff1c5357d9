//! Combines token resolution, live profile fetches and mock data into one
//! always-complete [`ProfileBundle`].

use std::sync::Arc;

use tracing::{debug, instrument};

use crate::client::ProfileClient;
use crate::config::AppConfig;
use crate::error::{PortfolioError, Result};
use crate::fallback::{FallbackReport, MockReason, Section};
use crate::mock;
use crate::model::{Credential, Identity, LinkedInProfile, ProfileBundle};
use crate::token::{classify_supplied, TokenProvider};

/// A bundle plus the record of which sections are live.
#[derive(Debug, Clone)]
pub struct AggregatedProfile {
    pub bundle: ProfileBundle,
    pub report: FallbackReport,
}

#[derive(Debug, Clone)]
pub struct Aggregator {
    config: Arc<AppConfig>,
    http: reqwest::Client,
}

impl Aggregator {
    /// Build an aggregator whose upstream calls time out after
    /// `config.upstream_timeout`.
    pub fn new(config: Arc<AppConfig>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.upstream_timeout)
            .build()
            .map_err(PortfolioError::HttpClient)?;
        Ok(Self::with_client(config, http))
    }

    pub fn with_client(config: Arc<AppConfig>, http: reqwest::Client) -> Self {
        Self { config, http }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// The credential used for a request: the supplied token when non-empty,
    /// otherwise whatever the token provider resolves.
    pub fn credential_for(&self, supplied: Option<&str>) -> Credential {
        match supplied.map(str::trim).filter(|t| !t.is_empty()) {
            Some(token) => classify_supplied(token),
            None => TokenProvider::new(&self.config).get_token(),
        }
    }

    /// Assemble the profile bundle.
    ///
    /// Each section is fetched independently. Under the default fallback
    /// policy a failed section is replaced by mock data and this never
    /// returns an error; under [`OnError::Surface`](crate::fallback::OnError)
    /// the first failure is returned instead.
    #[instrument(skip(self, supplied_token))]
    pub async fn get_profile_bundle(
        &self,
        supplied_token: Option<&str>,
    ) -> Result<AggregatedProfile> {
        let credential = self.credential_for(supplied_token);
        debug!(kind = %credential.kind, "resolved credential");

        let client = ProfileClient::with_client(
            self.http.clone(),
            self.config.linkedin_api_base.as_str(),
            credential,
        );
        let mut report = FallbackReport::new();

        let identity = if client.credential().is_demo() {
            report.record_mock(Section::Identity, MockReason::DemoCredential);
            report.record_mock(Section::ProfilePicture, MockReason::DemoCredential);
            mock::identity(&self.config)
        } else {
            let (profile, picture) =
                tokio::join!(client.get_identity(), client.get_profile_picture());
            self.resolve_identity(profile, picture, &mut report)?
        };

        let (experiences, education, skills) = tokio::join!(
            client.get_experiences(),
            client.get_education(),
            client.get_skills()
        );
        // These come from the mock set even on success; see ProfileClient.
        let experiences = self.history_section(
            Section::Experiences,
            experiences,
            mock::experiences,
            &mut report,
        )?;
        let education =
            self.history_section(Section::Education, education, mock::education, &mut report)?;
        let skills = self.history_section(Section::Skills, skills, mock::skills, &mut report)?;

        debug!(
            source = %report.overall(),
            degraded = report.is_degraded(),
            "assembled profile bundle"
        );

        Ok(AggregatedProfile {
            bundle: ProfileBundle {
                identity,
                experiences,
                education,
                skills,
            },
            report,
        })
    }

    fn resolve_identity(
        &self,
        profile: Result<LinkedInProfile>,
        picture: Result<Option<String>>,
        report: &mut FallbackReport,
    ) -> Result<Identity> {
        let profile = match profile {
            Ok(profile) => profile,
            Err(err) => {
                self.degrade(Section::Identity, err, report)?;
                match picture {
                    Ok(_) => report.record_mock(
                        Section::ProfilePicture,
                        MockReason::IdentityUnavailable,
                    ),
                    Err(err) => self.degrade(Section::ProfilePicture, err, report)?,
                }
                return Ok(mock::identity(&self.config));
            }
        };
        report.record_live(Section::Identity);

        let picture = match picture {
            Ok(picture) => {
                report.record_live(Section::ProfilePicture);
                picture
            }
            Err(err) => {
                self.degrade(Section::ProfilePicture, err, report)?;
                Some(mock::MOCK_PROFILE_PICTURE.to_string())
            }
        };

        Ok(Identity::from_profile(&profile, picture))
    }

    fn history_section<T>(
        &self,
        section: Section,
        result: Result<Vec<T>>,
        fallback: fn() -> Vec<T>,
        report: &mut FallbackReport,
    ) -> Result<Vec<T>> {
        match result {
            Ok(entries) => {
                report.record_mock(section, MockReason::NotAvailableUpstream);
                Ok(entries)
            }
            Err(err) => {
                self.degrade(section, err, report)?;
                Ok(fallback())
            }
        }
    }

    /// Record a failed section, or hand the error back when the policy
    /// surfaces failures.
    fn degrade(
        &self,
        section: Section,
        err: PortfolioError,
        report: &mut FallbackReport,
    ) -> Result<()> {
        if !self.config.fallback_policy.uses_mock_data() {
            return Err(err);
        }
        report.record_mock(section, MockReason::from_error(&err));
        Ok(())
    }
}
