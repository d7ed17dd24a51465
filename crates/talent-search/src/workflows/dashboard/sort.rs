use crate::workflows::candidates::CandidateRecord;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortField {
    Name,
    CurrentJobTitle,
    CurrentCompany,
    Industry,
    FittingScore,
    YearsExperience,
    Qualification,
}

impl SortField {
    pub const fn ordered() -> [Self; 7] {
        [
            Self::Name,
            Self::CurrentJobTitle,
            Self::CurrentCompany,
            Self::Industry,
            Self::FittingScore,
            Self::YearsExperience,
            Self::Qualification,
        ]
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::CurrentJobTitle => "current_job_title",
            Self::CurrentCompany => "current_company",
            Self::Industry => "industry",
            Self::FittingScore => "fitting_score",
            Self::YearsExperience => "years_experience",
            Self::Qualification => "qualification",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        let trimmed = value.trim();
        Self::ordered()
            .into_iter()
            .find(|field| field.key().eq_ignore_ascii_case(trimmed))
    }

    pub const fn is_numeric(self) -> bool {
        matches!(self, Self::FittingScore | Self::YearsExperience)
    }

    fn text<'a>(self, record: &'a CandidateRecord) -> &'a str {
        match self {
            Self::Name => &record.name,
            Self::CurrentJobTitle => &record.current_job_title,
            Self::CurrentCompany => &record.current_company,
            Self::Industry => &record.industry,
            Self::Qualification => record.qualification.label(),
            Self::FittingScore | Self::YearsExperience => "",
        }
    }

    fn number(self, record: &CandidateRecord) -> i64 {
        match self {
            Self::FittingScore => i64::from(record.fitting_score),
            Self::YearsExperience => i64::from(record.years_experience),
            _ => 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

impl SortDirection {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Some(Self::Asc),
            "desc" | "descending" => Some(Self::Desc),
            _ => None,
        }
    }

    pub const fn flipped(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    pub field: SortField,
    pub direction: SortDirection,
}

impl Default for SortSpec {
    fn default() -> Self {
        Self {
            field: SortField::FittingScore,
            direction: SortDirection::Desc,
        }
    }
}

impl SortSpec {
    /// Primary ordering in the requested direction, then ascending name.
    pub fn compare(&self, a: &CandidateRecord, b: &CandidateRecord) -> Ordering {
        let primary = if self.field.is_numeric() {
            self.field.number(a).cmp(&self.field.number(b))
        } else {
            compare_case_insensitive(self.field.text(a), self.field.text(b))
        };

        let primary = match self.direction {
            SortDirection::Asc => primary,
            SortDirection::Desc => primary.reverse(),
        };

        primary.then_with(|| compare_case_insensitive(&a.name, &b.name))
    }
}

/// Returns a new, ordered copy; the input is left untouched.
pub fn sort(records: &[CandidateRecord], spec: SortSpec) -> Vec<CandidateRecord> {
    let mut ordered = records.to_vec();
    ordered.sort_by(|a, b| spec.compare(a, b));
    ordered
}

fn compare_case_insensitive(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}
