use crate::workflows::candidates::{CandidateRecord, Qualification};
use serde::{Deserialize, Serialize};

pub const SCORE_FLOOR: i32 = 0;
pub const SCORE_CEILING: i32 = 100;

/// Qualification selector; `All` disables the qualification predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QualificationFilter {
    #[default]
    All,
    Only(Qualification),
}

impl QualificationFilter {
    /// Parses `All` or a qualification label, case-insensitively.
    pub fn parse(value: &str) -> Option<Self> {
        if value.trim().eq_ignore_ascii_case("all") {
            return Some(Self::All);
        }
        Qualification::from_label(value).map(Self::Only)
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Only(qualification) => qualification.label(),
        }
    }

    fn admits(self, qualification: Qualification) -> bool {
        match self {
            Self::All => true,
            Self::Only(expected) => expected == qualification,
        }
    }
}

/// Inclusive fitting-score bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreRange {
    pub min: i32,
    pub max: i32,
}

impl Default for ScoreRange {
    fn default() -> Self {
        Self {
            min: SCORE_FLOOR,
            max: SCORE_CEILING,
        }
    }
}

impl ScoreRange {
    pub fn contains(&self, score: i32) -> bool {
        score >= self.min && score <= self.max
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FilterSpec {
    pub score_range: ScoreRange,
    pub qualification: QualificationFilter,
    pub keyword: String,
}

impl FilterSpec {
    pub fn matches(&self, record: &CandidateRecord) -> bool {
        self.score_range.contains(record.fitting_score)
            && self.qualification.admits(record.qualification)
            && keyword_matches(&self.keyword, record)
    }
}

/// Keeps the records that satisfy every predicate, preserving input order.
pub fn apply(records: &[CandidateRecord], spec: &FilterSpec) -> Vec<CandidateRecord> {
    records
        .iter()
        .filter(|record| spec.matches(record))
        .cloned()
        .collect()
}

/// Every whitespace-separated token must occur somewhere in the searchable text.
fn keyword_matches(keyword: &str, record: &CandidateRecord) -> bool {
    let lowered = keyword.to_lowercase();
    let mut tokens = lowered.split_whitespace().peekable();
    if tokens.peek().is_none() {
        return true;
    }

    let haystack = searchable_text(record);
    tokens.all(|token| haystack.contains(token))
}

fn searchable_text(record: &CandidateRecord) -> String {
    [
        record.name.as_str(),
        record.current_job_title.as_str(),
        record.current_company.as_str(),
        record.industry.as_str(),
        record.key_skills.as_str(),
        record.linkedin_snippet.as_str(),
    ]
    .join(" ")
    .to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflows::dashboard::tests::candidate;

    fn sample() -> Vec<CandidateRecord> {
        let mut risk = candidate("Alice Ng", 82, Qualification::Master);
        risk.current_job_title = "Risk Manager".to_string();

        let mut split = candidate("Bob Li", 74, Qualification::Degree);
        split.current_job_title = "Risk Analyst".to_string();
        split.linkedin_snippet = "Former branch manager".to_string();

        let mut analyst = candidate("Cara Wu", 91, Qualification::Doctor);
        analyst.current_job_title = "Quant Analyst".to_string();

        vec![risk, split, analyst]
    }

    fn names(records: &[CandidateRecord]) -> Vec<&str> {
        records.iter().map(|record| record.name.as_str()).collect()
    }

    #[test]
    fn default_spec_keeps_everything_in_order() {
        let records = sample();
        assert_eq!(apply(&records, &FilterSpec::default()), records);
    }

    #[test]
    fn score_range_is_inclusive() {
        let spec = FilterSpec {
            score_range: ScoreRange { min: 74, max: 82 },
            ..FilterSpec::default()
        };
        assert_eq!(names(&apply(&sample(), &spec)), vec!["Alice Ng", "Bob Li"]);
    }

    #[test]
    fn qualification_must_match_exactly() {
        let spec = FilterSpec {
            qualification: QualificationFilter::Only(Qualification::Doctor),
            ..FilterSpec::default()
        };
        assert_eq!(names(&apply(&sample(), &spec)), vec!["Cara Wu"]);
    }

    #[test]
    fn keyword_tokens_use_and_semantics_across_fields() {
        let spec = FilterSpec {
            keyword: "  risk   MANAGER ".to_string(),
            ..FilterSpec::default()
        };
        assert_eq!(names(&apply(&sample(), &spec)), vec!["Alice Ng", "Bob Li"]);

        let spec = FilterSpec {
            keyword: "risk quant".to_string(),
            ..FilterSpec::default()
        };
        assert!(apply(&sample(), &spec).is_empty());
    }

    #[test]
    fn whitespace_keyword_is_ignored() {
        let spec = FilterSpec {
            keyword: "   ".to_string(),
            ..FilterSpec::default()
        };
        assert_eq!(apply(&sample(), &spec).len(), 3);
    }

    #[test]
    fn filtering_is_idempotent() {
        let records = sample();
        let spec = FilterSpec {
            score_range: ScoreRange { min: 75, max: 100 },
            keyword: "analyst".to_string(),
            ..FilterSpec::default()
        };
        let first = apply(&records, &spec);
        let second = apply(&records, &spec);
        assert_eq!(first, second);
        assert_eq!(names(&first), vec!["Cara Wu"]);
    }

    #[test]
    fn qualification_filter_parses_labels() {
        assert_eq!(QualificationFilter::parse("all"), Some(QualificationFilter::All));
        assert_eq!(
            QualificationFilter::parse("Below Degree"),
            Some(QualificationFilter::Only(Qualification::BelowDegree))
        );
        assert_eq!(QualificationFilter::parse("Diploma"), None);
    }
}
