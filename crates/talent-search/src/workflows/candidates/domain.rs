use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Placeholder written into company and industry when the sheet leaves them blank.
pub const NOT_SPECIFIED: &str = "Not specified";

/// Placeholder written into `key_skills` when no vocabulary term matched.
pub const PROFESSIONAL_SKILLS: &str = "Professional Skills";

/// Coarse education bucket derived from free-text qualification cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Qualification {
    Doctor,
    Master,
    Degree,
    #[serde(rename = "Below Degree")]
    BelowDegree,
}

impl Qualification {
    pub const fn ordered() -> [Self; 4] {
        [Self::Doctor, Self::Master, Self::Degree, Self::BelowDegree]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Doctor => "Doctor",
            Self::Master => "Master",
            Self::Degree => "Degree",
            Self::BelowDegree => "Below Degree",
        }
    }

    /// Accepts the display label, case-insensitively.
    pub fn from_label(value: &str) -> Option<Self> {
        let trimmed = value.trim();
        Self::ordered()
            .into_iter()
            .find(|qualification| qualification.label().eq_ignore_ascii_case(trimmed))
    }
}

impl fmt::Display for Qualification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Normalized candidate row as served to the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateRecord {
    pub name: String,
    pub current_job_title: String,
    pub current_company: String,
    pub industry: String,
    pub fitting_score: i32,
    pub years_experience: u32,
    pub qualification: Qualification,
    pub key_skills: String,
    pub linkedin_url: String,
    pub linkedin_snippet: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
}

/// Where a snapshot's records came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DataOrigin {
    Sheet,
    Fallback,
}

impl DataOrigin {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Sheet => "Spreadsheet export",
            Self::Fallback => "Synthetic fallback",
        }
    }
}

/// One fetch-or-fallback result. Replaced wholesale on refresh.
#[derive(Debug, Clone, Serialize)]
pub struct CandidateSnapshot {
    pub origin: DataOrigin,
    pub fetched_at: DateTime<Utc>,
    pub records: Vec<CandidateRecord>,
}

impl CandidateSnapshot {
    pub fn new(origin: DataOrigin, records: Vec<CandidateRecord>) -> Self {
        Self {
            origin,
            fetched_at: Utc::now(),
            records,
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
