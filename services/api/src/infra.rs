use chrono::{DateTime, Utc};
use clap::Args;
use metrics_exporter_prometheus::PrometheusHandle;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use talent_search::config::SourceConfig;
use talent_search::error::AppError;
use talent_search::workflows::candidates::{
    CandidateDataSource, CandidateSnapshot, CsvFeed, DataOrigin, FileCsvFeed, HttpCsvFeed,
};
use talent_search::workflows::dashboard::{
    DashboardState, FilterSpec, QualificationFilter, ScoreRange, SortDirection, SortField,
    SortSpec, DEFAULT_PAGE_SIZE, SCORE_CEILING, SCORE_FLOOR,
};
use talent_search::workflows::intake::{
    self, IntakeError, IntakeForm, IntakeWebhook, SubmissionReceipt,
};
use tokio::sync::RwLock;
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Dashboard parameters shared by the HTTP query string and the CLI flags.
#[derive(Args, Debug, Default, Clone, Deserialize)]
pub(crate) struct DashboardQuery {
    /// Lowest fitting score to include (default 0)
    #[arg(long)]
    pub(crate) min_score: Option<i32>,
    /// Highest fitting score to include (default 100)
    #[arg(long)]
    pub(crate) max_score: Option<i32>,
    /// "All" or one of Doctor, Master, Degree, "Below Degree"
    #[arg(long)]
    pub(crate) qualification: Option<String>,
    /// Space-separated terms; every term must match
    #[arg(long)]
    pub(crate) keyword: Option<String>,
    /// Sort column, e.g. fitting_score or name
    #[arg(long)]
    pub(crate) sort: Option<String>,
    /// asc or desc
    #[arg(long)]
    pub(crate) direction: Option<String>,
    /// 1-based page number
    #[arg(long)]
    pub(crate) page: Option<usize>,
    /// Rows per page (default 10)
    #[arg(long)]
    pub(crate) page_size: Option<usize>,
}

impl DashboardQuery {
    pub(crate) fn to_state(&self) -> Result<DashboardState, AppError> {
        let qualification = match self.qualification.as_deref() {
            None => QualificationFilter::All,
            Some(raw) => QualificationFilter::parse(raw).ok_or_else(|| {
                AppError::InvalidQuery(format!("unknown qualification '{raw}'"))
            })?,
        };

        let field = match self.sort.as_deref() {
            None => SortSpec::default().field,
            Some(raw) => SortField::parse(raw)
                .ok_or_else(|| AppError::InvalidQuery(format!("unknown sort field '{raw}'")))?,
        };
        let direction = match self.direction.as_deref() {
            None => SortDirection::default(),
            Some(raw) => SortDirection::parse(raw)
                .ok_or_else(|| AppError::InvalidQuery(format!("unknown direction '{raw}'")))?,
        };

        Ok(DashboardState {
            filter: FilterSpec {
                score_range: ScoreRange {
                    min: self.min_score.unwrap_or(SCORE_FLOOR),
                    max: self.max_score.unwrap_or(SCORE_CEILING),
                },
                qualification,
                keyword: self.keyword.clone().unwrap_or_default(),
            },
            sort: SortSpec { field, direction },
            page_index: self.page.unwrap_or(1),
            page_size: self.page_size.unwrap_or(DEFAULT_PAGE_SIZE),
        })
    }
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct RefreshSummary {
    pub(crate) origin: DataOrigin,
    pub(crate) count: usize,
    pub(crate) fetched_at: DateTime<Utc>,
}

impl RefreshSummary {
    fn of(snapshot: &CandidateSnapshot) -> Self {
        Self {
            origin: snapshot.origin,
            count: snapshot.len(),
            fetched_at: snapshot.fetched_at,
        }
    }
}

/// Holds the current candidate snapshot and the intake webhook for the HTTP routes.
pub(crate) struct CandidateService<F, W> {
    source: CandidateDataSource<F>,
    webhook: W,
    snapshot: RwLock<CandidateSnapshot>,
}

impl<F: CsvFeed, W: IntakeWebhook> CandidateService<F, W> {
    /// Loads the first snapshot before the service accepts traffic.
    pub(crate) async fn bootstrap(source: CandidateDataSource<F>, webhook: W) -> Self {
        let snapshot = source.fetch_snapshot().await;
        info!(
            origin = snapshot.origin.label(),
            count = snapshot.len(),
            "candidate snapshot loaded"
        );
        Self {
            source,
            webhook,
            snapshot: RwLock::new(snapshot),
        }
    }

    pub(crate) async fn snapshot(&self) -> CandidateSnapshot {
        self.snapshot.read().await.clone()
    }

    /// Fetches outside the lock, then swaps the snapshot in.
    pub(crate) async fn refresh(&self) -> RefreshSummary {
        let fresh = self.source.fetch_snapshot().await;
        let summary = RefreshSummary::of(&fresh);
        *self.snapshot.write().await = fresh;
        info!(
            origin = summary.origin.label(),
            count = summary.count,
            "candidate snapshot refreshed"
        );
        summary
    }

    pub(crate) async fn submit_intake(
        &self,
        form: &IntakeForm,
    ) -> Result<SubmissionReceipt, IntakeError> {
        intake::submit(&self.webhook, form).await
    }
}

/// One-off fetch for CLI commands: a local export when given, otherwise the
/// configured sheet.
pub(crate) async fn load_snapshot(
    csv: Option<PathBuf>,
    sources: &SourceConfig,
) -> Result<CandidateSnapshot, AppError> {
    let snapshot = match csv {
        Some(path) => {
            CandidateDataSource::new(FileCsvFeed::new(path))
                .fetch_snapshot()
                .await
        }
        None => {
            let feed = HttpCsvFeed::new(sources.sheet_url.clone(), sources.fetch_timeout)?;
            CandidateDataSource::new(feed).fetch_snapshot().await
        }
    };
    Ok(snapshot)
}
