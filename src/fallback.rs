//! Explicit record of when and why profile sections degrade to mock data.

use itertools::Itertools;

use crate::error::PortfolioError;

/// What the aggregator does when a live fetch fails.
#[derive(
    Default,
    Debug,
    Clone,
    Copy,
    Hash,
    Eq,
    PartialEq,
    strum_macros::Display,
    strum_macros::EnumString,
)]
pub enum OnError {
    /// Substitute mock data and keep going. Callers never see the failure.
    #[default]
    #[strum(serialize = "mock")]
    UseMockData,
    /// Return the first live failure to the caller.
    #[strum(serialize = "surface")]
    Surface,
}

/// Fallback policy applied by the aggregator.
#[derive(Default, Debug, Clone, Copy, Eq, PartialEq)]
pub struct FallbackPolicy {
    pub on_error: OnError,
}

impl FallbackPolicy {
    pub const USE_MOCK_DATA: Self = Self {
        on_error: OnError::UseMockData,
    };

    pub const SURFACE: Self = Self {
        on_error: OnError::Surface,
    };

    pub fn uses_mock_data(&self) -> bool {
        self.on_error == OnError::UseMockData
    }
}

/// A section of the profile bundle.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, strum_macros::Display)]
#[strum(serialize_all = "snake_case")]
pub enum Section {
    Identity,
    ProfilePicture,
    Experiences,
    Education,
    Skills,
}

/// Where a section's data came from.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, strum_macros::Display)]
#[strum(serialize_all = "lowercase")]
pub enum DataSource {
    Live,
    Mock,
    /// Some live-capable sections are live, others mock.
    Partial,
}

/// Why a section holds mock data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockReason {
    /// The profile API does not expose this section to us.
    NotAvailableUpstream,
    /// Only a demo credential was available.
    DemoCredential,
    /// The section was fetched, but the identity it belongs to was not.
    IdentityUnavailable,
    /// The live fetch failed.
    Failed { code: &'static str, message: String },
}

impl MockReason {
    pub fn from_error(err: &PortfolioError) -> Self {
        MockReason::Failed {
            code: err.error_code(),
            message: err.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionOutcome {
    pub section: Section,
    pub source: DataSource,
    pub reason: Option<MockReason>,
}

/// Per-section outcome of one aggregation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FallbackReport {
    outcomes: Vec<SectionOutcome>,
}

impl FallbackReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_live(&mut self, section: Section) {
        self.outcomes.push(SectionOutcome {
            section,
            source: DataSource::Live,
            reason: None,
        });
    }

    pub fn record_mock(&mut self, section: Section, reason: MockReason) {
        if let MockReason::Failed { code, message } = &reason {
            tracing::warn!(%section, code, "falling back to mock data: {message}");
        }
        self.outcomes.push(SectionOutcome {
            section,
            source: DataSource::Mock,
            reason: Some(reason),
        });
    }

    pub fn outcomes(&self) -> &[SectionOutcome] {
        &self.outcomes
    }

    pub fn source_of(&self, section: Section) -> Option<DataSource> {
        self.outcomes
            .iter()
            .find(|o| o.section == section)
            .map(|o| o.source)
    }

    /// True when at least one section fell back because a live fetch failed.
    pub fn is_degraded(&self) -> bool {
        self.outcomes
            .iter()
            .any(|o| matches!(o.reason, Some(MockReason::Failed { .. })))
    }

    /// Overall source across the sections that can be fetched live.
    /// Sections the upstream never exposes are ignored.
    pub fn overall(&self) -> DataSource {
        let sources = self
            .outcomes
            .iter()
            .filter(|o| o.reason != Some(MockReason::NotAvailableUpstream))
            .map(|o| o.source)
            .unique()
            .collect_vec();

        match sources.as_slice() {
            [DataSource::Live] => DataSource::Live,
            [] | [DataSource::Mock] => DataSource::Mock,
            _ => DataSource::Partial,
        }
    }

    /// Failure messages joined for logging.
    pub fn failures(&self) -> String {
        self.outcomes
            .iter()
            .filter_map(|o| match &o.reason {
                Some(MockReason::Failed { message, .. }) => Some(format!("{}: {message}", o.section)),
                _ => None,
            })
            .join("; ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_policy_uses_mock_data() {
        let policy = FallbackPolicy::default();
        assert_eq!(policy, FallbackPolicy::USE_MOCK_DATA);
        assert!(policy.uses_mock_data());
        assert!(!FallbackPolicy::SURFACE.uses_mock_data());
    }

    #[test]
    fn test_on_error_parses_config_values() {
        assert_eq!("mock".parse::<OnError>().unwrap(), OnError::UseMockData);
        assert_eq!("surface".parse::<OnError>().unwrap(), OnError::Surface);
        assert!("retry".parse::<OnError>().is_err());
    }

    #[test]
    fn test_overall_ignores_sections_not_available_upstream() {
        let mut report = FallbackReport::new();
        report.record_live(Section::Identity);
        report.record_live(Section::ProfilePicture);
        report.record_mock(Section::Skills, MockReason::NotAvailableUpstream);

        assert_eq!(report.overall(), DataSource::Live);
        assert!(!report.is_degraded());
        assert_eq!(report.source_of(Section::Skills), Some(DataSource::Mock));
    }

    #[test]
    fn test_partial_and_degraded() {
        let mut report = FallbackReport::new();
        report.record_live(Section::Identity);
        report.record_mock(
            Section::ProfilePicture,
            MockReason::from_error(&PortfolioError::DemoCredential),
        );

        assert_eq!(report.overall(), DataSource::Partial);
        assert!(report.is_degraded());
        assert!(report.failures().starts_with("profile_picture: "));
    }

    #[test]
    fn test_demo_credential_is_mock_but_not_degraded() {
        let mut report = FallbackReport::new();
        report.record_mock(Section::Identity, MockReason::DemoCredential);
        report.record_mock(Section::ProfilePicture, MockReason::DemoCredential);

        assert_eq!(report.overall(), DataSource::Mock);
        assert!(!report.is_degraded());
        assert_eq!(report.failures(), "");
    }
}
