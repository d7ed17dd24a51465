use crate::config::ConfigError;
use crate::telemetry::TelemetryError;
use crate::workflows::candidates::FeedError;
use crate::workflows::intake::IntakeError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Telemetry(TelemetryError),
    Io(std::io::Error),
    Feed(FeedError),
    Intake(IntakeError),
    CandidateNotFound(String),
    InvalidQuery(String),
    MalformedForm(serde_json::Error),
    Export(csv::Error),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(err) => write!(f, "configuration error: {}", err),
            AppError::Telemetry(err) => write!(f, "telemetry error: {}", err),
            AppError::Io(err) => write!(f, "io error: {}", err),
            AppError::Feed(err) => write!(f, "candidate feed error: {}", err),
            AppError::Intake(IntakeError::Validation(err)) => {
                write!(f, "invalid intake form: {}", err)
            }
            AppError::Intake(err) => write!(f, "intake submission failed: {}", err),
            AppError::CandidateNotFound(name) => write!(f, "no candidate named '{}'", name),
            AppError::InvalidQuery(message) => write!(f, "invalid query: {}", message),
            AppError::MalformedForm(err) => write!(f, "malformed intake form: {}", err),
            AppError::Export(err) => write!(f, "csv export error: {}", err),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(err) => Some(err),
            AppError::Telemetry(err) => Some(err),
            AppError::Io(err) => Some(err),
            AppError::Feed(err) => Some(err),
            AppError::Intake(err) => Some(err),
            AppError::CandidateNotFound(_) | AppError::InvalidQuery(_) => None,
            AppError::MalformedForm(err) => Some(err),
            AppError::Export(err) => Some(err),
        }
    }
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Intake(IntakeError::Validation(_)) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Intake(_) => StatusCode::BAD_GATEWAY,
            AppError::CandidateNotFound(_) => StatusCode::NOT_FOUND,
            AppError::InvalidQuery(_) | AppError::MalformedForm(_) => StatusCode::BAD_REQUEST,
            AppError::Config(_)
            | AppError::Telemetry(_)
            | AppError::Io(_)
            | AppError::Feed(_)
            | AppError::Export(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = Json(json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<TelemetryError> for AppError {
    fn from(value: TelemetryError) -> Self {
        Self::Telemetry(value)
    }
}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<FeedError> for AppError {
    fn from(value: FeedError) -> Self {
        Self::Feed(value)
    }
}

impl From<IntakeError> for AppError {
    fn from(value: IntakeError) -> Self {
        Self::Intake(value)
    }
}

impl From<csv::Error> for AppError {
    fn from(value: csv::Error) -> Self {
        Self::Export(value)
    }
}
