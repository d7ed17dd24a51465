use crate::workflows::candidates::{
    infer_company, infer_industry, CandidateRecord, Qualification, NOT_SPECIFIED,
};
use serde::Serialize;

const VISIBLE_SKILLS: usize = 6;
const SNIPPET_LIMIT: usize = 200;

/// Table row with its 1-based rank in the current ordering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CandidateRowView {
    pub rank: usize,
    pub name: String,
    pub current_job_title: String,
    pub current_company: String,
    pub industry: String,
    pub fitting_score: i32,
    pub years_experience: u32,
    pub qualification: Qualification,
    pub qualification_label: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin_url: Option<String>,
}

impl CandidateRowView {
    pub fn new(rank: usize, record: CandidateRecord) -> Self {
        Self {
            rank,
            qualification_label: record.qualification.label(),
            linkedin_url: non_empty(record.linkedin_url),
            name: record.name,
            current_job_title: record.current_job_title,
            current_company: record.current_company,
            industry: record.industry,
            fitting_score: record.fitting_score,
            years_experience: record.years_experience,
            qualification: record.qualification,
        }
    }
}

/// Detail card for a single candidate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CandidateProfileView {
    pub name: String,
    pub current_job_title: String,
    pub current_company: String,
    pub industry: String,
    pub fitting_score: i32,
    pub years_experience: u32,
    pub qualification_label: &'static str,
    pub skills: Vec<String>,
    pub hidden_skill_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snippet: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub industry_hint: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_hint: Option<String>,
}

impl CandidateProfileView {
    pub fn from_record(record: &CandidateRecord) -> Self {
        let all_skills: Vec<String> = record
            .key_skills
            .split([',', ';'])
            .map(str::trim)
            .filter(|skill| !skill.is_empty())
            .map(str::to_string)
            .collect();
        let hidden_skill_count = all_skills.len().saturating_sub(VISIBLE_SKILLS);
        let skills = all_skills.into_iter().take(VISIBLE_SKILLS).collect();

        let industry_hint = (record.industry == NOT_SPECIFIED)
            .then(|| infer_industry(&record.current_job_title, &record.linkedin_snippet));
        let company_hint = (record.current_company == NOT_SPECIFIED)
            .then(|| infer_company(&record.current_job_title, &record.linkedin_snippet));

        Self {
            name: record.name.clone(),
            current_job_title: record.current_job_title.clone(),
            current_company: record.current_company.clone(),
            industry: record.industry.clone(),
            fitting_score: record.fitting_score,
            years_experience: record.years_experience,
            qualification_label: record.qualification.label(),
            skills,
            hidden_skill_count,
            snippet: truncate_snippet(&record.linkedin_snippet),
            linkedin_url: non_empty(record.linkedin_url.clone()),
            photo_url: record.photo_url.clone(),
            industry_hint,
            company_hint,
        }
    }
}

fn truncate_snippet(snippet: &str) -> Option<String> {
    if snippet.is_empty() {
        return None;
    }
    if snippet.chars().count() <= SNIPPET_LIMIT {
        return Some(snippet.to_string());
    }
    let mut truncated: String = snippet.chars().take(SNIPPET_LIMIT).collect();
    truncated.push_str("...");
    Some(truncated)
}

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}
