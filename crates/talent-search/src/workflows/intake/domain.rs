use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// How the job description content is encoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentFormat {
    #[default]
    None,
    Text,
    Base64,
}

/// Uploaded job description. Every field is optional; an intake can be sent
/// without a document.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JdDocument {
    pub file_name: Option<String>,
    pub mime_type: Option<String>,
    #[serde(default)]
    pub content_format: ContentFormat,
    pub content: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoringRow {
    #[serde(alias = "area")]
    pub area_name: String,
    pub weight_percent: i32,
}

impl ScoringRow {
    pub fn new(area_name: impl Into<String>, weight_percent: i32) -> Self {
        Self {
            area_name: area_name.into(),
            weight_percent,
        }
    }
}

/// Job intake as entered by the recruiter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntakeForm {
    pub job_title: String,
    pub number_of_profiles: u32,
    pub batch: u32,
    pub scoring_scheme: Vec<ScoringRow>,
    #[serde(default)]
    pub jd_document: JdDocument,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoringEntry {
    pub area: String,
    pub weight_percent: i32,
}

/// JSON body posted to the intake webhook.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntakePayload {
    pub job_title: String,
    pub number_of_profiles: u32,
    pub batch: u32,
    pub scoring_scheme: Vec<ScoringEntry>,
    pub jd_document: JdDocument,
    pub timestamp: String,
}

impl IntakePayload {
    pub fn from_form(form: &IntakeForm, timestamp: DateTime<Utc>) -> Self {
        Self {
            job_title: form.job_title.clone(),
            number_of_profiles: form.number_of_profiles,
            batch: form.batch,
            scoring_scheme: form
                .scoring_scheme
                .iter()
                .map(|row| ScoringEntry {
                    area: row.area_name.clone(),
                    weight_percent: row.weight_percent,
                })
                .collect(),
            jd_document: form.jd_document.clone(),
            timestamp: timestamp.to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}
