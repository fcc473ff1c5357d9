use serde::{Deserialize, Serialize};

use super::{EducationEntry, ExperienceEntry, Identity, SkillEntry};

/// Everything the site renders about its owner. Every section is always
/// populated, either from live data or from mock data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileBundle {
    #[serde(rename = "profile")]
    pub identity: Identity,
    pub experiences: Vec<ExperienceEntry>,
    pub education: Vec<EducationEntry>,
    pub skills: Vec<SkillEntry>,
}
