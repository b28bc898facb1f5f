use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::{Delivery, Field, FieldErrors, SubmissionResult};

pub const NAME_MAX_LEN: usize = 100;
pub const COMPANY_MAX_LEN: usize = 200;
pub const MESSAGE_MAX_LEN: usize = 5000;

pub const DELIVERY_FAILED: &str =
    "We couldn't send your message right now. Please try again later.";

/// Field values exactly as posted by the contact form.
#[derive(Deserialize, Serialize, Default, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct RawSubmission {
    #[serde(rename = "first-name")]
    pub first_name: String,
    #[serde(rename = "last-name")]
    pub last_name: String,
    pub company: String,
    pub email: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agreed: Option<String>,
}

impl RawSubmission {
    /// Whether the consent switch was on. Checkboxes post `on` by default.
    pub fn consent(&self) -> bool {
        matches!(
            self.agreed.as_deref().map(str::trim),
            Some("on" | "true" | "1" | "yes")
        )
    }
}

#[derive(Validate, Debug, Clone)]
pub struct FormInput {
    #[validate(
        length(min = 1, message = "First name is required"),
        custom(function = "name_length")
    )]
    pub first_name: String,
    #[validate(length(max = (NAME_MAX_LEN as u64), message = "Must be 100 characters or fewer"))]
    pub last_name: String,
    #[validate(length(max = (COMPANY_MAX_LEN as u64), message = "Must be 200 characters or fewer"))]
    pub company: String,
    #[validate(
        length(min = 1, message = "Email is required"),
        email(message = "Please enter a valid email address")
    )]
    pub email: String,
    #[validate(
        length(min = 1, message = "Message is required"),
        custom(function = "message_length")
    )]
    pub message: String,
}

impl From<RawSubmission> for FormInput {
    fn from(value: RawSubmission) -> Self {
        Self {
            first_name: value.first_name.trim().to_owned(),
            last_name: value.last_name.trim().to_owned(),
            company: value.company.trim().to_owned(),
            email: value.email.trim().to_owned(),
            message: value.message.trim().to_owned(),
        }
    }
}

fn max_chars(value: &str, max: usize) -> Result<(), ValidationError> {
    if value.chars().count() <= max {
        return Ok(());
    }

    Err(ValidationError::new("length")
        .with_message(format!("Must be {max} characters or fewer").into()))
}

fn name_length(value: &str) -> Result<(), ValidationError> {
    max_chars(value, NAME_MAX_LEN)
}

fn message_length(value: &str) -> Result<(), ValidationError> {
    max_chars(value, MESSAGE_MAX_LEN)
}

/// A submission that passed validation, ready to be delivered.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct ContactMessage {
    pub first_name: String,
    pub last_name: Option<String>,
    pub company: Option<String>,
    pub email: String,
    pub message: String,
}

impl ContactMessage {
    pub fn full_name(&self) -> String {
        match &self.last_name {
            Some(last_name) => format!("{} {last_name}", self.first_name),
            None => self.first_name.to_owned(),
        }
    }
}

impl From<FormInput> for ContactMessage {
    fn from(value: FormInput) -> Self {
        let optional = |v: String| (!v.is_empty()).then_some(v);

        Self {
            first_name: value.first_name,
            last_name: optional(value.last_name),
            company: optional(value.company),
            email: value.email,
            message: value.message,
        }
    }
}

/// Checks every field of a submission and reports all violations at once.
pub fn validate_submission(raw: RawSubmission) -> Result<ContactMessage, FieldErrors> {
    let input = FormInput::from(raw);
    input.validate()?;

    Ok(input.into())
}

/// Handles one submission attempt of the contact form.
///
/// The previous result is not consulted: every attempt is judged on its own
/// values. Nothing is delivered unless all fields are valid, and a valid
/// submission is delivered exactly once. Failures never escape as errors,
/// they are reported through the returned [`SubmissionResult`].
#[tracing::instrument(skip_all)]
pub async fn submit_form<D: Delivery + ?Sized>(
    _previous: &SubmissionResult,
    raw: RawSubmission,
    delivery: &D,
) -> SubmissionResult {
    let message = match validate_submission(raw) {
        Ok(message) => message,
        Err(errors) => {
            let fields: Vec<Field> = errors.fields().collect();
            tracing::debug!(?fields, "Contact form rejected");

            return SubmissionResult::failure(errors);
        }
    };

    if let Err(err) = delivery.deliver(&message).await {
        tracing::error!(error = %err, email = %message.email, "Failed to deliver contact message");

        return SubmissionResult::failure(FieldErrors::single(Field::Form, DELIVERY_FAILED));
    }

    tracing::info!(email = %message.email, "Contact form submitted");

    SubmissionResult::success()
}
