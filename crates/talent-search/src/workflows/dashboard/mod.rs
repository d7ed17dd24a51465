//! Read-side of the candidate dashboard: filtering, ordering, paging and the
//! view models rendered from a record set.

pub mod debounce;
pub mod filter;
pub mod metrics;
pub mod pagination;
pub mod sort;
pub mod state;
pub mod views;

pub use debounce::{KeywordDebouncer, DEFAULT_QUIET_PERIOD};
pub use filter::{FilterSpec, QualificationFilter, ScoreRange, SCORE_CEILING, SCORE_FLOOR};
pub use metrics::KeyMetrics;
pub use pagination::{clamp_page_index, PageWindow, DEFAULT_PAGE_SIZE};
pub use sort::{SortDirection, SortField, SortSpec};
pub use state::{DashboardEvent, DashboardState, DashboardView};
pub use views::{CandidateProfileView, CandidateRowView};

#[cfg(test)]
pub(crate) mod tests {
    use crate::workflows::candidates::{CandidateRecord, Qualification, PROFESSIONAL_SKILLS};

    pub(crate) fn candidate(name: &str, score: i32, qualification: Qualification) -> CandidateRecord {
        CandidateRecord {
            name: name.to_string(),
            current_job_title: String::new(),
            current_company: "Acme Capital".to_string(),
            industry: "Finance".to_string(),
            fitting_score: score,
            years_experience: 0,
            qualification,
            key_skills: PROFESSIONAL_SKILLS.to_string(),
            linkedin_url: String::new(),
            linkedin_snippet: String::new(),
            photo_url: None,
        }
    }
}
