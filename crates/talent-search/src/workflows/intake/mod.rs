//! Job intake: form model, validation and delivery to the sourcing webhook.

pub mod domain;
pub mod validation;
pub mod webhook;

pub use domain::{ContentFormat, IntakeForm, IntakePayload, JdDocument, ScoringEntry, ScoringRow};
pub use validation::{IntakeValidationError, REQUIRED_WEIGHT_TOTAL};
pub use webhook::{
    submit, HttpIntakeWebhook, IntakeError, IntakeWebhook, SubmissionReceipt,
    DEFAULT_SUCCESS_MESSAGE, DEFAULT_WEBHOOK_URL,
};
