use super::filter::{self, FilterSpec, QualificationFilter, ScoreRange};
use super::metrics::KeyMetrics;
use super::pagination::{self, clamp_page_index, PageWindow, DEFAULT_PAGE_SIZE};
use super::sort::{self, SortField, SortSpec};
use super::views::CandidateRowView;
use crate::workflows::candidates::CandidateRecord;
use serde::{Deserialize, Serialize};

/// Everything the dashboard needs to derive its view from a record set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardState {
    pub filter: FilterSpec,
    pub sort: SortSpec,
    pub page_index: usize,
    pub page_size: usize,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self {
            filter: FilterSpec::default(),
            sort: SortSpec::default(),
            page_index: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DashboardEvent {
    ScoreRangeChanged { min: i32, max: i32 },
    QualificationChanged(QualificationFilter),
    /// Keyword after the debounce quiet period.
    KeywordSettled(String),
    SortRequested(SortField),
    NextPage,
    PreviousPage,
    FiltersCleared,
    DatasetReplaced,
}

#[derive(Debug, Clone, Serialize)]
pub struct DashboardView {
    pub filter: FilterSpec,
    pub sort: SortSpec,
    pub metrics: KeyMetrics,
    pub page: PageWindow<CandidateRowView>,
}

impl DashboardState {
    /// Applies one event. `total_pages` bounds the page navigation events.
    pub fn reduce(self, event: DashboardEvent, total_pages: usize) -> Self {
        match event {
            DashboardEvent::ScoreRangeChanged { min, max } => Self {
                filter: FilterSpec {
                    score_range: ScoreRange { min, max },
                    ..self.filter
                },
                page_index: 1,
                ..self
            },
            DashboardEvent::QualificationChanged(qualification) => Self {
                filter: FilterSpec {
                    qualification,
                    ..self.filter
                },
                page_index: 1,
                ..self
            },
            DashboardEvent::KeywordSettled(keyword) => Self {
                filter: FilterSpec {
                    keyword,
                    ..self.filter
                },
                page_index: 1,
                ..self
            },
            DashboardEvent::SortRequested(field) => {
                let direction = if self.sort.field == field {
                    self.sort.direction.flipped()
                } else {
                    SortSpec::default().direction
                };
                Self {
                    sort: SortSpec { field, direction },
                    page_index: 1,
                    ..self
                }
            }
            DashboardEvent::NextPage => {
                let page_index = clamp_page_index(self.page_index.saturating_add(1), total_pages);
                Self { page_index, ..self }
            }
            DashboardEvent::PreviousPage => {
                let page_index = clamp_page_index(self.page_index.saturating_sub(1), total_pages);
                Self { page_index, ..self }
            }
            DashboardEvent::FiltersCleared => Self {
                filter: FilterSpec::default(),
                page_index: 1,
                ..self
            },
            DashboardEvent::DatasetReplaced => Self {
                filter: FilterSpec {
                    score_range: ScoreRange::default(),
                    ..self.filter
                },
                page_index: 1,
                ..self
            },
        }
    }

    pub fn total_pages(&self, records: &[CandidateRecord]) -> usize {
        let matching = records
            .iter()
            .filter(|record| self.filter.matches(record))
            .count();
        matching.div_ceil(self.page_size.max(1))
    }

    /// Filter, then sort, then page (with the page index clamped).
    pub fn render(&self, records: &[CandidateRecord]) -> DashboardView {
        let filtered = filter::apply(records, &self.filter);
        let metrics = KeyMetrics::from_records(&filtered);
        let ordered = sort::sort(&filtered, self.sort);

        let page_size = self.page_size.max(1);
        let total_pages = ordered.len().div_ceil(page_size);
        let page_index = clamp_page_index(self.page_index, total_pages);
        let window = pagination::page(&ordered, page_size, page_index);

        let mut rank = window.start_index;
        let page = window.map(|record| {
            let row = CandidateRowView::new(rank, record);
            rank += 1;
            row
        });

        DashboardView {
            filter: self.filter.clone(),
            sort: self.sort,
            metrics,
            page,
        }
    }
}
