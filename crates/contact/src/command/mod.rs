use async_trait::async_trait;

mod submit_form;

pub use submit_form::*;

/// Channel that receives a contact message once it passed validation.
#[async_trait]
pub trait Delivery: Send + Sync {
    async fn deliver(&self, message: &ContactMessage) -> anyhow::Result<()>;
}

/// Delivery that only logs the message, used when no mail transport is set up.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogDelivery;

#[async_trait]
impl Delivery for LogDelivery {
    async fn deliver(&self, message: &ContactMessage) -> anyhow::Result<()> {
        tracing::info!(
            name = %message.full_name(),
            email = %message.email,
            company = message.company.as_deref().unwrap_or_default(),
            len = message.message.len(),
            "Contact message received"
        );

        Ok(())
    }
}
