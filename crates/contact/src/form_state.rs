use crate::{Delivery, Field, FieldErrors, RawSubmission, SubmissionResult, submit_form};

pub const SUBMIT_LABEL: &str = "Let's talk";
pub const PENDING_LABEL: &str = "Sending...";

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SubmitBlocked {
    #[error("Please agree to the privacy policy before sending your message")]
    ConsentRequired,

    #[error("Your message is already being sent")]
    AlreadyPending,
}

impl SubmitBlocked {
    pub fn field(&self) -> Field {
        match self {
            SubmitBlocked::ConsentRequired => Field::Consent,
            SubmitBlocked::AlreadyPending => Field::Form,
        }
    }
}

/// Interactive state of one rendered contact form.
///
/// Consent starts off, nothing is pending and the result is the empty
/// initial one. A submission goes request → pending → result; the result
/// of an attempt replaces the previous one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    consent: bool,
    pending: bool,
    result: SubmissionResult,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_consent(consent: bool) -> Self {
        Self {
            consent,
            ..Self::default()
        }
    }

    pub fn consent(&self) -> bool {
        self.consent
    }

    pub fn set_consent(&mut self, consent: bool) {
        self.consent = consent;
    }

    pub fn toggle_consent(&mut self) {
        self.consent = !self.consent;
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    pub fn result(&self) -> &SubmissionResult {
        &self.result
    }

    pub fn can_submit(&self) -> bool {
        self.consent && !self.pending
    }

    pub fn show_success(&self) -> bool {
        self.result.success
    }

    pub fn errors_for(&self, field: Field) -> Option<&[String]> {
        self.result.errors.get(field)
    }

    pub fn first_error(&self, field: Field) -> Option<&str> {
        self.result.errors.first(field)
    }

    pub fn submit_label(&self) -> &'static str {
        if self.pending {
            PENDING_LABEL
        } else {
            SUBMIT_LABEL
        }
    }

    /// Marks a submission as in flight, refusing when it is not allowed.
    pub fn begin_submit(&mut self) -> Result<(), SubmitBlocked> {
        if self.pending {
            return Err(SubmitBlocked::AlreadyPending);
        }

        if !self.consent {
            return Err(SubmitBlocked::ConsentRequired);
        }

        self.pending = true;

        Ok(())
    }

    /// Stores the outcome of the in-flight submission.
    pub fn complete(&mut self, result: SubmissionResult) {
        self.result = result;
        self.pending = false;
    }

    /// Reports a refused submission as the current result. The pending flag
    /// is left as is, since a refusal never starts or ends a submission.
    pub fn record_blocked(&mut self, reason: SubmitBlocked) {
        self.result =
            SubmissionResult::failure(FieldErrors::single(reason.field(), reason.to_string()));
    }

    /// Runs one full submission: it waits for the handler to finish and
    /// cannot be cancelled once started.
    pub async fn submit<D: Delivery + ?Sized>(
        &mut self,
        raw: RawSubmission,
        delivery: &D,
    ) -> Result<&SubmissionResult, SubmitBlocked> {
        self.begin_submit()?;

        let result = submit_form(&self.result, raw, delivery).await;
        self.complete(result);

        Ok(&self.result)
    }
}
