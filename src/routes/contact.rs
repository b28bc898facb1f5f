use axum::{
    Json,
    extract::{Form, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
};
use brochure_contact::{Field, FormState, RawSubmission, SubmissionResult};

use crate::config::SiteConfig;
use crate::routes::AppState;
use crate::template::{Template, filters};

/// Sent by the form script to get the form markup back instead of a page.
/// Its value is the layout the form was rendered with.
pub const PARTIAL_HEADER: &str = "x-partial";

/// Layout of the form when it opens the contact page.
pub const PAGE_LAYOUT: &str = "page";

/// Everything needed to render one contact form.
pub struct ContactForm {
    pub state: FormState,
    pub values: RawSubmission,
    pub show_title: bool,
    pub top_of_page: bool,
}

impl ContactForm {
    pub fn new(show_title: bool, top_of_page: bool) -> Self {
        Self {
            state: FormState::new(),
            values: RawSubmission::default(),
            show_title,
            top_of_page,
        }
    }

    pub fn error(&self, field: Field) -> Option<&str> {
        self.state.first_error(field)
    }
}

#[derive(askama::Template)]
#[template(path = "contact.html")]
pub struct ContactPageTemplate<'a> {
    pub site: &'a SiteConfig,
    pub contact: &'a ContactForm,
}

#[derive(askama::Template)]
#[template(path = "partials/contact-form.html")]
pub struct ContactFormTemplate<'a> {
    pub site: &'a SiteConfig,
    pub contact: &'a ContactForm,
}

pub async fn page(template: Template) -> impl IntoResponse {
    let contact = ContactForm::new(true, true);

    template.render(ContactPageTemplate {
        site: template.site(),
        contact: &contact,
    })
}

/// Runs one submission through a fresh form state. Blocked attempts never
/// reach the submission handler.
async fn submit(app_state: &AppState, input: RawSubmission) -> (StatusCode, FormState) {
    let mut state = FormState::with_consent(input.consent());

    let outcome = state
        .submit(input, app_state.delivery.as_ref())
        .await
        .map(|_| ());

    match outcome {
        Ok(()) => (StatusCode::OK, state),
        Err(blocked) => {
            tracing::info!(reason = %blocked, "Contact form submission blocked");
            state.record_blocked(blocked);

            (StatusCode::UNPROCESSABLE_ENTITY, state)
        }
    }
}

#[tracing::instrument(skip_all)]
pub async fn action(
    template: Template,
    State(app_state): State<AppState>,
    headers: HeaderMap,
    Form(input): Form<RawSubmission>,
) -> Response {
    let values = input.clone();
    let (status, state) = submit(&app_state, input).await;

    // A delivered message clears the inputs, the consent switch stays on.
    let values = if state.show_success() {
        RawSubmission::default()
    } else {
        values
    };

    let partial = headers.get(PARTIAL_HEADER);

    let contact = ContactForm {
        state,
        values,
        show_title: true,
        top_of_page: partial.is_none_or(|layout| layout == PAGE_LAYOUT),
    };

    let body = if partial.is_some() {
        template.render(ContactFormTemplate {
            site: template.site(),
            contact: &contact,
        })
    } else {
        template.render(ContactPageTemplate {
            site: template.site(),
            contact: &contact,
        })
    };

    (status, body).into_response()
}

#[tracing::instrument(skip_all)]
pub async fn api_action(
    State(app_state): State<AppState>,
    Form(input): Form<RawSubmission>,
) -> (StatusCode, Json<SubmissionResult>) {
    let (status, state) = submit(&app_state, input).await;

    (status, Json(state.result().clone()))
}
