use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumString, VariantArray};

/// Identifies where an error message belongs on the contact form.
///
/// `FromStr`/`AsRef<str>` use the snake_case struct field names reported by
/// `validator`; serde uses the camelCase keys exposed in a
/// [`SubmissionResult`](crate::SubmissionResult).
#[derive(
    EnumString,
    AsRefStr,
    VariantArray,
    Serialize,
    Deserialize,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "camelCase")]
pub enum Field {
    FirstName,
    LastName,
    Company,
    Email,
    Message,
    /// Consent switch, reported when a submission is attempted without it.
    Consent,
    /// Errors that are not tied to an input, e.g. a failed delivery.
    Form,
}

impl Field {
    /// Name of the form control carrying this field.
    pub fn form_key(&self) -> &'static str {
        match self {
            Field::FirstName => "first-name",
            Field::LastName => "last-name",
            Field::Company => "company",
            Field::Email => "email",
            Field::Message => "message",
            Field::Consent => "agreed",
            Field::Form => "form",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Field::FirstName => "First name",
            Field::LastName => "Last name",
            Field::Company => "Organization",
            Field::Email => "Email",
            Field::Message => "Message",
            Field::Consent => "Consent",
            Field::Form => "Form",
        }
    }

    pub fn is_required(&self) -> bool {
        matches!(self, Field::FirstName | Field::Email | Field::Message)
    }
}
