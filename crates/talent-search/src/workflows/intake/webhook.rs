use super::domain::{IntakeForm, IntakePayload};
use super::validation::IntakeValidationError;
use chrono::Utc;
use serde::Serialize;
use std::future::Future;
use std::time::Duration;
use tracing::{info, warn};

pub const DEFAULT_WEBHOOK_URL: &str =
    "https://n8nchrischowai.zeabur.app/webhook/1c39608f-289e-45ce-bb1c-7f0bbf5730c2";

/// Shown when the webhook acknowledges without a message of its own.
pub const DEFAULT_SUCCESS_MESSAGE: &str = "Submitted successfully!";

#[derive(Debug, thiserror::Error)]
pub enum IntakeError {
    #[error(transparent)]
    Validation(#[from] IntakeValidationError),
    #[error("intake webhook request failed: {0}")]
    Transport(String),
    #[error("intake webhook responded with HTTP {0}")]
    Status(u16),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmissionReceipt {
    pub message: String,
}

impl SubmissionReceipt {
    /// Uses the body's `message` field, falling back to the default text
    /// for missing, blank or non-JSON bodies.
    pub fn from_body(body: &str) -> Self {
        let message = serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|value| {
                value
                    .get("message")
                    .and_then(|message| message.as_str())
                    .map(str::to_string)
            })
            .filter(|message| !message.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_SUCCESS_MESSAGE.to_string());
        Self { message }
    }
}

/// Destination for validated intake payloads.
pub trait IntakeWebhook: Send + Sync {
    fn deliver(
        &self,
        payload: &IntakePayload,
    ) -> impl Future<Output = Result<SubmissionReceipt, IntakeError>> + Send;
}

#[derive(Debug, Clone)]
pub struct HttpIntakeWebhook {
    client: reqwest::Client,
    url: String,
}

impl HttpIntakeWebhook {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, IntakeError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|err| IntakeError::Transport(err.to_string()))?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }
}

impl IntakeWebhook for HttpIntakeWebhook {
    async fn deliver(&self, payload: &IntakePayload) -> Result<SubmissionReceipt, IntakeError> {
        let response = self
            .client
            .post(&self.url)
            .json(payload)
            .send()
            .await
            .map_err(|err| IntakeError::Transport(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), "intake webhook rejected submission");
            return Err(IntakeError::Status(status.as_u16()));
        }

        let body = response.text().await.unwrap_or_default();
        Ok(SubmissionReceipt::from_body(&body))
    }
}

/// Validates the form, stamps it and hands it to the webhook.
pub async fn submit<W: IntakeWebhook>(
    webhook: &W,
    form: &IntakeForm,
) -> Result<SubmissionReceipt, IntakeError> {
    form.validate()?;

    let payload = IntakePayload::from_form(form, Utc::now());
    info!(
        job_title = %payload.job_title,
        profiles = payload.number_of_profiles,
        batch = payload.batch,
        "submitting intake form"
    );
    webhook.deliver(&payload).await
}
