use super::domain::{CandidateRecord, NOT_SPECIFIED};
use super::normalizer::{
    clean_text, extract_skills, normalize_experience, normalize_qualification, normalize_score,
};
use super::parser::parse_line;
use tracing::{debug, warn};

const NAME_HEADER: &str = "name";
const TITLE_HEADER: &str = "title";
const COMPANY_HEADER: &str = "current company";
const SCORE_HEADER: &str = "fitting score";
const EXPERIENCE_HEADER: &str = "experience";
// The live sheet spells this column "Qualifcation".
const QUALIFICATION_HEADER: &str = "qualifcation";
const QUALIFICATION_HEADER_CORRECTED: &str = "qualification";
const INDUSTRY_HEADER: &str = "industry";
const LINKEDIN_URL_HEADER: &str = "linkedin url";
const LINKEDIN_SNIPPET_HEADER: &str = "linkedin snippet";
const BYTE_ORDER_MARK: char = '\u{feff}';

/// Resolved positions of the known columns; `None` reads as an empty cell.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnMap {
    pub name: Option<usize>,
    pub title: Option<usize>,
    pub company: Option<usize>,
    pub score: Option<usize>,
    pub experience: Option<usize>,
    pub qualification: Option<usize>,
    pub industry: Option<usize>,
    pub linkedin_url: Option<usize>,
    pub linkedin_snippet: Option<usize>,
}

impl ColumnMap {
    pub fn from_header<S: AsRef<str>>(header_row: &[S]) -> Self {
        let headers: Vec<String> = header_row
            .iter()
            .map(|cell| cell.as_ref().trim().to_lowercase())
            .collect();
        let position = |key: &str| headers.iter().position(|header| header == key);

        let qualification = position(QUALIFICATION_HEADER).or_else(|| {
            let corrected = position(QUALIFICATION_HEADER_CORRECTED);
            if corrected.is_some() {
                warn!(
                    "sheet header uses 'qualification' instead of 'qualifcation'; reading the corrected column"
                );
            }
            corrected
        });

        Self {
            name: position(NAME_HEADER),
            title: position(TITLE_HEADER),
            company: position(COMPANY_HEADER),
            score: position(SCORE_HEADER),
            experience: position(EXPERIENCE_HEADER),
            qualification,
            industry: position(INDUSTRY_HEADER),
            linkedin_url: position(LINKEDIN_URL_HEADER),
            linkedin_snippet: position(LINKEDIN_SNIPPET_HEADER),
        }
    }
}

/// Turns raw CSV rows into validated candidate records.
#[derive(Debug, Clone)]
pub struct CandidateRecordBuilder {
    columns: ColumnMap,
}

impl CandidateRecordBuilder {
    pub fn from_header<S: AsRef<str>>(header_row: &[S]) -> Self {
        Self {
            columns: ColumnMap::from_header(header_row),
        }
    }

    /// Builds every keepable record; incomplete rows are dropped silently.
    pub fn build<S: AsRef<str>, L: AsRef<str>>(
        header_row: &[S],
        body_lines: &[L],
    ) -> Vec<CandidateRecord> {
        let builder = Self::from_header(header_row);
        let mut records = Vec::new();
        let mut dropped = 0usize;

        for line in body_lines {
            let line = line.as_ref();
            if line.trim().is_empty() {
                continue;
            }
            match builder.build_row(line) {
                Some(record) => records.push(record),
                None => dropped += 1,
            }
        }

        debug!(kept = records.len(), dropped, "parsed candidate rows");
        records
    }

    /// Returns `None` when the row lacks a name or a positive fitting score.
    pub fn build_row(&self, line: &str) -> Option<CandidateRecord> {
        let values = parse_line(line);
        let field = |index: Option<usize>| {
            index
                .and_then(|idx| values.get(idx))
                .map(|value| clean_text(value))
                .unwrap_or_default()
        };

        let name = field(self.columns.name);
        let title = field(self.columns.title);
        let company = field(self.columns.company);
        let score_text = field(self.columns.score);
        let experience_text = field(self.columns.experience);
        let qualification = field(self.columns.qualification);
        let industry = field(self.columns.industry);
        let linkedin_url = field(self.columns.linkedin_url);
        let snippet = field(self.columns.linkedin_snippet);

        if name.is_empty() || score_text.is_empty() {
            return None;
        }

        let fitting_score = normalize_score(&score_text);
        if fitting_score <= 0 {
            return None;
        }

        let key_skills = extract_skills(&title, &snippet);

        Some(CandidateRecord {
            name,
            current_job_title: title,
            current_company: or_not_specified(company),
            industry: or_not_specified(industry),
            fitting_score,
            years_experience: normalize_experience(&experience_text),
            qualification: normalize_qualification(&qualification),
            key_skills,
            linkedin_url: if linkedin_url.starts_with("http") {
                linkedin_url
            } else {
                String::new()
            },
            linkedin_snippet: snippet,
            photo_url: None,
        })
    }
}

/// Parses a full CSV export. `None` means there was no data row to read,
/// which callers treat as a reason to fall back.
pub fn from_csv_text(text: &str) -> Option<Vec<CandidateRecord>> {
    // Spreadsheet "CSV UTF-8" exports start with a byte order mark.
    let text = text.strip_prefix(BYTE_ORDER_MARK).unwrap_or(text);
    let lines: Vec<&str> = text.trim().lines().collect();
    if lines.len() < 2 {
        return None;
    }

    let header = parse_line(lines[0]);
    Some(CandidateRecordBuilder::build(&header, &lines[1..]))
}

fn or_not_specified(value: String) -> String {
    if value.is_empty() {
        NOT_SPECIFIED.to_string()
    } else {
        value
    }
}
