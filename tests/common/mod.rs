#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Request, header},
    response::Response,
};
use brochure::{
    AppState,
    config::{Config, ObservabilityConfig, ServerConfig, SiteConfig},
};
use brochure_contact::{Delivery, RawSubmission};
use brochure_notification::EmailConfig;
use http_body_util::BodyExt;

#[path = "../../crates/contact/tests/helpers/mod.rs"]
mod helpers;

pub use helpers::{FailingDelivery, RecordingDelivery};

pub struct TestApp {
    pub router: Router,
    pub delivery: Arc<RecordingDelivery>,
}

pub fn test_config() -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 3000,
        },
        email: EmailConfig {
            enabled: false,
            smtp_host: "localhost".to_string(),
            smtp_port: 1025,
            smtp_username: String::new(),
            smtp_password: String::new(),
            from_address: "noreply@4934.tech".to_string(),
            contact_address: "hello@4934.tech".to_string(),
        },
        site: SiteConfig::default(),
        observability: ObservabilityConfig::default(),
    }
}

pub fn create_test_app() -> TestApp {
    let delivery = Arc::new(RecordingDelivery::default());
    let router = create_router(delivery.clone());

    TestApp { router, delivery }
}

pub fn create_router(delivery: Arc<dyn Delivery>) -> Router {
    brochure::create_app(AppState {
        config: test_config(),
        delivery,
    })
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub fn post_form(uri: &str, input: &RawSubmission) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(serde_urlencoded::to_string(input).unwrap()))
        .unwrap()
}

/// Submission with the consent switch on or off.
pub fn submission(first_name: &str, email: &str, message: &str, agreed: bool) -> RawSubmission {
    RawSubmission {
        agreed: agreed.then(|| "on".to_owned()),
        ..helpers::submission(first_name, email, message)
    }
}

pub async fn body_string(response: Response) -> String {
    let body = response.into_body().collect().await.unwrap().to_bytes();

    String::from_utf8(body.to_vec()).unwrap()
}
