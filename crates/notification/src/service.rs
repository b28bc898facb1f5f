//! Email notification service using lettre

use anyhow::Context;
use lettre::{
    Message, SmtpTransport, Transport,
    message::{Mailbox, MultiPart},
    transport::smtp::authentication::Credentials,
};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct EmailConfig {
    /// When off, messages are logged instead of sent.
    #[serde(default)]
    pub enabled: bool,
    pub smtp_host: String,
    pub smtp_port: u16,
    #[serde(default)]
    pub smtp_username: String,
    #[serde(default)]
    pub smtp_password: String,
    pub from_address: String,
    /// Inbox receiving contact form messages.
    pub contact_address: String,
}

/// Email service for sending notifications
#[derive(Clone)]
pub struct EmailService {
    mailer: Option<SmtpTransport>,
    from: Mailbox,
    contact: Mailbox,
}

/// A message ready to be handed to the SMTP transport.
pub struct Email {
    pub to: Mailbox,
    pub reply_to: Option<Mailbox>,
    pub subject: String,
    pub html: String,
    pub plain: String,
}

impl EmailService {
    /// Create a new email service from configuration
    pub fn new(config: &EmailConfig) -> anyhow::Result<Self> {
        let from = config
            .from_address
            .parse::<Mailbox>()
            .with_context(|| format!("invalid from address '{}'", config.from_address))?;

        let contact = config
            .contact_address
            .parse::<Mailbox>()
            .with_context(|| format!("invalid contact address '{}'", config.contact_address))?;

        if !config.enabled {
            tracing::warn!("Email delivery disabled, contact messages will only be logged");

            return Ok(Self {
                mailer: None,
                from,
                contact,
            });
        }

        let mailer = if config.smtp_username.is_empty() || config.smtp_password.is_empty() {
            tracing::info!(
                smtp_host = %config.smtp_host,
                smtp_port = config.smtp_port,
                "SMTP credentials not configured, using unauthenticated connection (e.g., MailDev)"
            );

            SmtpTransport::builder_dangerous(&config.smtp_host)
                .port(config.smtp_port)
                .build()
        } else {
            tracing::info!(
                smtp_host = %config.smtp_host,
                smtp_port = config.smtp_port,
                from = %config.from_address,
                "Email service initialized with authentication and TLS"
            );

            let creds =
                Credentials::new(config.smtp_username.clone(), config.smtp_password.clone());

            SmtpTransport::relay(&config.smtp_host)?
                .port(config.smtp_port)
                .credentials(creds)
                .build()
        };

        Ok(Self {
            mailer: Some(mailer),
            from,
            contact,
        })
    }

    pub fn is_enabled(&self) -> bool {
        self.mailer.is_some()
    }

    pub fn contact_mailbox(&self) -> &Mailbox {
        &self.contact
    }

    pub fn build_message(&self, email: Email) -> anyhow::Result<Message> {
        let mut builder = Message::builder()
            .from(self.from.clone())
            .to(email.to)
            .subject(email.subject);

        if let Some(reply_to) = email.reply_to {
            builder = builder.reply_to(reply_to);
        }

        Ok(builder.multipart(MultiPart::alternative_plain_html(email.plain, email.html))?)
    }

    #[tracing::instrument(skip_all, fields(to = %email.to, subject = %email.subject))]
    pub async fn send(&self, email: Email) -> anyhow::Result<()> {
        let Some(mailer) = self.mailer.clone() else {
            tracing::info!(body = %email.plain, "Email delivery disabled, skipping send");

            return Ok(());
        };

        let message = self.build_message(email)?;

        tracing::info!("Sending email");

        // The SMTP transport is blocking.
        tokio::task::spawn_blocking(move || mailer.send(&message)).await??;

        Ok(())
    }
}
