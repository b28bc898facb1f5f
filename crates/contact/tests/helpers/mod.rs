use std::sync::Mutex;

use async_trait::async_trait;
use brochure_contact::{ContactMessage, Delivery, RawSubmission};

/// Keeps every delivered message in memory.
#[derive(Default)]
pub struct RecordingDelivery {
    messages: Mutex<Vec<ContactMessage>>,
}

impl RecordingDelivery {
    pub fn messages(&self) -> Vec<ContactMessage> {
        self.messages.lock().unwrap().clone()
    }
}

#[async_trait]
impl Delivery for RecordingDelivery {
    async fn deliver(&self, message: &ContactMessage) -> anyhow::Result<()> {
        self.messages.lock().unwrap().push(message.clone());

        Ok(())
    }
}

#[allow(dead_code)]
pub struct FailingDelivery;

#[async_trait]
impl Delivery for FailingDelivery {
    async fn deliver(&self, _message: &ContactMessage) -> anyhow::Result<()> {
        anyhow::bail!("smtp connection refused")
    }
}

pub fn submission(
    first_name: impl Into<String>,
    email: impl Into<String>,
    message: impl Into<String>,
) -> RawSubmission {
    RawSubmission {
        first_name: first_name.into(),
        email: email.into(),
        message: message.into(),
        ..Default::default()
    }
}
