//! Candidate sourcing pipeline: sheet ingestion with a synthetic fallback,
//! dashboard filtering, ordering and paging, and job intake submission.

pub mod config;
pub mod error;
pub mod telemetry;
pub mod workflows;
