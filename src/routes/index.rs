use axum::response::IntoResponse;
use brochure_contact::Field;

use crate::config::SiteConfig;
use crate::routes::contact::ContactForm;
use crate::template::{Template, filters};

#[derive(askama::Template)]
#[template(path = "index.html")]
pub struct IndexTemplate<'a> {
    pub site: &'a SiteConfig,
    pub contact: &'a ContactForm,
}

pub async fn page(template: Template) -> impl IntoResponse {
    let contact = ContactForm::new(true, false);

    template.render(IndexTemplate {
        site: template.site(),
        contact: &contact,
    })
}
