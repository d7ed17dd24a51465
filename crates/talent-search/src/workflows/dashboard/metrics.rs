use crate::workflows::candidates::CandidateRecord;
use serde::Serialize;

/// Headline numbers shown above the candidate table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct KeyMetrics {
    pub total_candidates: usize,
    pub average_fitting_score: i64,
    pub average_years_experience: i64,
}

impl KeyMetrics {
    pub fn from_records(records: &[CandidateRecord]) -> Self {
        let total_candidates = records.len();
        if total_candidates == 0 {
            return Self::default();
        }

        let score_sum: i64 = records
            .iter()
            .map(|record| i64::from(record.fitting_score))
            .sum();
        let experience_sum: i64 = records
            .iter()
            .map(|record| i64::from(record.years_experience))
            .sum();

        Self {
            total_candidates,
            average_fitting_score: rounded_mean(score_sum, total_candidates),
            average_years_experience: rounded_mean(experience_sum, total_candidates),
        }
    }
}

fn rounded_mean(sum: i64, count: usize) -> i64 {
    (sum as f64 / count as f64).round() as i64
}
