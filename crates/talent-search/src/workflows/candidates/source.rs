use super::builder::from_csv_text;
use super::domain::{CandidateRecord, CandidateSnapshot, DataOrigin};
use super::fallback::synthetic_candidates;
use std::future::Future;
use std::time::Duration;
use tracing::{info, warn};

/// Published CSV export of the candidate spreadsheet.
pub const DEFAULT_SHEET_URL: &str = "https://docs.google.com/spreadsheets/d/1_EEcJwL1AhfWXjdesahqi91zPKRvtsLDUOMbCOo-PhY/export?format=csv&gid=1781793567";

#[derive(Debug, thiserror::Error)]
pub enum FeedError {
    #[error("candidate sheet request failed: {0}")]
    Transport(String),
    #[error("candidate sheet responded with HTTP {0}")]
    Status(u16),
    #[error("could not read candidate file: {0}")]
    Io(#[from] std::io::Error),
}

/// Source of raw CSV text for the candidate sheet.
pub trait CsvFeed: Send + Sync {
    fn fetch_csv(&self) -> impl Future<Output = Result<String, FeedError>> + Send;
}

/// Reads the published spreadsheet export over HTTP.
#[derive(Debug, Clone)]
pub struct HttpCsvFeed {
    client: reqwest::Client,
    url: String,
}

impl HttpCsvFeed {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, FeedError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|err| FeedError::Transport(err.to_string()))?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }
}

impl CsvFeed for HttpCsvFeed {
    async fn fetch_csv(&self) -> Result<String, FeedError> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|err| FeedError::Transport(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FeedError::Status(status.as_u16()));
        }

        response
            .text()
            .await
            .map_err(|err| FeedError::Transport(err.to_string()))
    }
}

/// Reads a CSV export saved on disk; used by the CLI.
#[derive(Debug, Clone)]
pub struct FileCsvFeed {
    path: std::path::PathBuf,
}

impl FileCsvFeed {
    pub fn new(path: impl Into<std::path::PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CsvFeed for FileCsvFeed {
    async fn fetch_csv(&self) -> Result<String, FeedError> {
        Ok(tokio::fs::read_to_string(&self.path).await?)
    }
}

/// Fetch-or-fallback loader. Never fails: feed errors and empty exports are
/// replaced with the synthetic dataset.
#[derive(Debug, Clone)]
pub struct CandidateDataSource<F> {
    feed: F,
}

impl<F: CsvFeed> CandidateDataSource<F> {
    pub fn new(feed: F) -> Self {
        Self { feed }
    }

    pub async fn fetch_all(&self) -> Vec<CandidateRecord> {
        self.fetch_snapshot().await.records
    }

    pub async fn fetch_snapshot(&self) -> CandidateSnapshot {
        match self.feed.fetch_csv().await {
            Ok(text) => match from_csv_text(&text) {
                Some(records) => {
                    info!(count = records.len(), "loaded candidates from sheet export");
                    CandidateSnapshot::new(DataOrigin::Sheet, records)
                }
                None => {
                    warn!("candidate sheet export has no data rows; serving synthetic candidates");
                    fallback_snapshot()
                }
            },
            Err(err) => {
                warn!(error = %err, "candidate sheet unavailable; serving synthetic candidates");
                fallback_snapshot()
            }
        }
    }
}

fn fallback_snapshot() -> CandidateSnapshot {
    CandidateSnapshot::new(DataOrigin::Fallback, synthetic_candidates())
}
