use anyhow::Context;
use askama::Template;
use async_trait::async_trait;
use brochure_contact::{ContactMessage, Delivery};
use lettre::message::Mailbox;

use crate::{Email, EmailService};

#[derive(Template)]
#[template(path = "contact.html")]
pub struct ContactHtmlTemplate<'a> {
    pub message: &'a ContactMessage,
}

#[derive(Template)]
#[template(path = "contact.txt")]
pub struct ContactPlainTemplate<'a> {
    pub message: &'a ContactMessage,
}

pub fn contact_subject(message: &ContactMessage) -> String {
    format!("New message from {}", message.full_name())
}

/// Forwards contact form messages to the configured contact inbox, with the
/// sender set as reply-to.
#[async_trait]
impl Delivery for EmailService {
    async fn deliver(&self, message: &ContactMessage) -> anyhow::Result<()> {
        let html = ContactHtmlTemplate { message }
            .render()
            .context("Failed to render HTML contact template")?;

        let plain = ContactPlainTemplate { message }
            .render()
            .context("Failed to render plain text contact template")?;

        // Already validated, but the mailbox grammar is stricter.
        let reply_to = match message.email.parse::<Mailbox>() {
            Ok(mailbox) => Some(mailbox),
            Err(err) => {
                tracing::warn!(error = %err, email = %message.email, "Sender address not usable as reply-to");
                None
            }
        };

        self.send(Email {
            to: self.contact_mailbox().clone(),
            reply_to,
            subject: contact_subject(message),
            html,
            plain,
        })
        .await
    }
}
