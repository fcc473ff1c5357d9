//! Fixed profile data used whenever live data is unavailable.

use crate::config::AppConfig;
use crate::model::{
    Company, EducationEntry, ExperienceEntry, Identity, Place, SkillEntry, Year, YearMonth,
};

pub const MOCK_IDENTITY_ID: &str = "mock-id";
pub const MOCK_LOCATION: &str = "Oxnard, CA";
pub const MOCK_VANITY_NAME: &str = "rafaelsilva";
pub const MOCK_PROFILE_PICTURE: &str = "/api/placeholder/avatar/150";

/// Identity shown when the live profile cannot be used. Name and headline
/// come from configuration.
pub fn identity(config: &AppConfig) -> Identity {
    Identity {
        id: MOCK_IDENTITY_ID.to_string(),
        display_name: config.portfolio_name.clone(),
        headline: config.portfolio_title.clone(),
        location: MOCK_LOCATION.to_string(),
        vanity_name: MOCK_VANITY_NAME.to_string(),
        profile_picture_url: Some(MOCK_PROFILE_PICTURE.to_string()),
    }
}

pub fn experiences() -> Vec<ExperienceEntry> {
    vec![
        ExperienceEntry {
            id: "1".to_string(),
            company: Company {
                name: "Tech Corp".to_string(),
                logo_url: Some("/api/placeholder/company-logo/tech-corp".to_string()),
                website_url: Some("https://techcorp.com".to_string()),
            },
            title: "Senior Software Developer".to_string(),
            description: Some(
                "Led development of scalable web applications using React, Node.js, and cloud \
                 technologies. Managed a team of 5 developers and implemented CI/CD pipelines."
                    .to_string(),
            ),
            start_date: YearMonth {
                year: 2022,
                month: Some(3),
            },
            end_date: None,
            location: Some(Place {
                name: "San Francisco, CA".to_string(),
            }),
        },
        ExperienceEntry {
            id: "2".to_string(),
            company: Company {
                name: "StartupCo".to_string(),
                logo_url: Some("/api/placeholder/company-logo/startupco".to_string()),
                website_url: Some("https://startupco.com".to_string()),
            },
            title: "Full Stack Developer".to_string(),
            description: Some(
                "Developed and maintained full-stack applications using JavaScript, Python, and \
                 PostgreSQL. Collaborated with product team to deliver features."
                    .to_string(),
            ),
            start_date: YearMonth {
                year: 2020,
                month: Some(1),
            },
            end_date: Some(YearMonth {
                year: 2022,
                month: Some(2),
            }),
            location: Some(Place {
                name: "New York, NY".to_string(),
            }),
        },
    ]
}

pub fn education() -> Vec<EducationEntry> {
    vec![EducationEntry {
        id: "1".to_string(),
        school_name: "University of Technology".to_string(),
        field_of_study: Some("Computer Science".to_string()),
        degree_name: Some("Bachelor of Science".to_string()),
        start_date: Some(Year { year: 2016 }),
        end_date: Some(Year { year: 2020 }),
    }]
}

pub fn skills() -> Vec<SkillEntry> {
    [
        ("JavaScript", 25),
        ("React", 20),
        ("Node.js", 18),
        ("TypeScript", 15),
        ("Python", 12),
        ("AWS", 10),
    ]
    .into_iter()
    .enumerate()
    .map(|(i, (name, endorsements))| SkillEntry {
        id: (i + 1).to_string(),
        name: name.to_string(),
        endorsement_count: Some(endorsements),
    })
    .collect()
}
