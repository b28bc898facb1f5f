use std::sync::Arc;

use axum::http::{StatusCode, header};
use brochure_contact::{RawSubmission, SubmissionResult};
use tower::ServiceExt;

mod common;

#[tokio::test]
async fn test_contact_page_renders_empty_form() {
    let app = common::create_test_app();

    let response = app
        .router
        .clone()
        .oneshot(common::get("/contact"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = common::body_string(response).await;
    assert!(body.contains("Contact 4934"));
    assert!(body.contains(r#"name="first-name""#));
    assert!(body.contains(r#"name="last-name""#));
    assert!(body.contains(r#"name="company""#));
    assert!(body.contains(r#"name="email""#));
    assert!(body.contains(r#"name="message""#));
    assert!(body.contains("https://4934.tech/policies/privacy-policy"));
    assert!(body.contains("Let's talk"));
    // Consent starts off, so the button starts disabled.
    assert!(body.contains(" disabled>"));
    assert!(!body.contains("field-error"));
    assert!(!body.contains("Thank you for your message"));
}

#[tokio::test]
async fn test_valid_submission_is_delivered() {
    let app = common::create_test_app();
    let input = RawSubmission {
        last_name: "Lovelace".to_owned(),
        company: "Analytical Engines".to_owned(),
        ..common::submission("Ada", "ada@example.com", "Hello", true)
    };

    let response = app
        .router
        .clone()
        .oneshot(common::post_form("/contact", &input))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = common::body_string(response).await;
    assert!(body.contains("Thank you for your message"));
    assert!(!body.contains("field-error"));
    // Inputs are cleared, consent stays on.
    assert!(!body.contains(r#"value="ada@example.com""#));
    assert!(body.contains(" checked>"));

    let messages = app.delivery.messages();
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].full_name(), "Ada Lovelace");
    assert_eq!(messages[0].company.as_deref(), Some("Analytical Engines"));
    assert_eq!(messages[0].message, "Hello");
}

#[tokio::test]
async fn test_invalid_submission_shows_every_error() {
    let app = common::create_test_app();
    let input = common::submission("", "not-an-email", "", true);

    let response = app
        .router
        .clone()
        .oneshot(common::post_form("/contact", &input))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = common::body_string(response).await;
    assert!(body.contains("First name is required"));
    assert!(body.contains("Please enter a valid email address"));
    assert!(body.contains("Message is required"));
    assert!(body.contains(r#"value="not-an-email""#));
    assert!(!body.contains(r#"data-field="lastName""#));
    assert!(!body.contains("Thank you for your message"));
    assert!(app.delivery.messages().is_empty());
}

#[tokio::test]
async fn test_submission_without_consent_is_refused() {
    let app = common::create_test_app();
    let input = common::submission("Ada", "ada@example.com", "Hello", false);

    let response = app
        .router
        .clone()
        .oneshot(common::post_form("/contact", &input))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body = common::body_string(response).await;
    assert!(body.contains(r#"data-field="consent""#));
    assert!(body.contains("Please agree to the privacy policy"));
    assert!(!body.contains("Thank you for your message"));
    assert!(app.delivery.messages().is_empty());
}

#[tokio::test]
async fn test_partial_submission_returns_form_only() {
    let app = common::create_test_app();
    let input = common::submission("Ada", "ada@example.com", "Hello", true);
    let mut request = common::post_form("/contact", &input);
    request
        .headers_mut()
        .insert("x-partial", "section".parse().unwrap());

    let response = app.router.clone().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = common::body_string(response).await;
    assert!(body.trim_start().starts_with(r#"<div id="contact-form""#));
    assert!(!body.contains("<html"));
    assert!(body.contains("Thank you for your message"));
}

#[tokio::test]
async fn test_partial_submission_keeps_its_layout() {
    let app = common::create_test_app();
    let input = common::submission("", "ada@example.com", "Hello", true);

    for (layout, on_page) in [("section", false), ("page", true)] {
        let mut request = common::post_form("/contact", &input);
        request
            .headers_mut()
            .insert("x-partial", layout.parse().unwrap());

        let response = app.router.clone().oneshot(request).await.unwrap();
        let body = common::body_string(response).await;

        assert!(body.contains(&format!(r#"data-layout="{layout}""#)));
        assert_eq!(body.contains("contact--page"), on_page, "layout {layout}");
    }
}

#[tokio::test]
async fn test_api_valid_submission() -> anyhow::Result<()> {
    let app = common::create_test_app();
    let input = common::submission("Ada", "ada@example.com", "Hello", true);

    let response = app
        .router
        .clone()
        .oneshot(common::post_form("/api/contact", &input))
        .await?;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::CONTENT_TYPE).unwrap(),
        "application/json"
    );

    let body = common::body_string(response).await;
    let result: SubmissionResult = serde_json::from_str(&body)?;
    assert_eq!(result, SubmissionResult::success());
    assert_eq!(
        serde_json::from_str::<serde_json::Value>(&body)?,
        serde_json::json!({ "success": true, "errors": {} })
    );
    assert_eq!(app.delivery.messages().len(), 1);

    Ok(())
}

#[tokio::test]
async fn test_api_invalid_submission() -> anyhow::Result<()> {
    let app = common::create_test_app();
    let input = common::submission("", "not-an-email", "", true);

    let response = app
        .router
        .clone()
        .oneshot(common::post_form("/api/contact", &input))
        .await?;

    assert_eq!(response.status(), StatusCode::OK);

    let value: serde_json::Value = serde_json::from_str(&common::body_string(response).await)?;
    assert_eq!(value["success"], false);

    let errors = value["errors"].as_object().unwrap();
    assert_eq!(errors.len(), 3);
    for key in ["firstName", "email", "message"] {
        assert!(
            errors[key].as_array().is_some_and(|m| !m.is_empty()),
            "missing errors for {key}"
        );
    }
    assert!(app.delivery.messages().is_empty());

    Ok(())
}

#[tokio::test]
async fn test_api_submission_without_consent() -> anyhow::Result<()> {
    let app = common::create_test_app();
    let input = common::submission("Ada", "ada@example.com", "Hello", false);

    let response = app
        .router
        .clone()
        .oneshot(common::post_form("/api/contact", &input))
        .await?;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let value: serde_json::Value = serde_json::from_str(&common::body_string(response).await)?;
    assert_eq!(value["success"], false);
    assert!(value["errors"]["consent"].is_array());
    assert!(app.delivery.messages().is_empty());

    Ok(())
}

#[tokio::test]
async fn test_delivery_failure_is_reported_on_the_form() -> anyhow::Result<()> {
    let router = common::create_router(Arc::new(common::FailingDelivery));
    let input = common::submission("Ada", "ada@example.com", "Hello", true);

    let response = router
        .clone()
        .oneshot(common::post_form("/contact", &input))
        .await?;

    assert_eq!(response.status(), StatusCode::OK);

    let body = common::body_string(response).await;
    assert!(body.contains(r#"data-field="form""#));
    assert!(!body.contains("Thank you for your message"));
    // Inputs are kept so the visitor can retry.
    assert!(body.contains(r#"value="ada@example.com""#));

    let response = router
        .oneshot(common::post_form("/api/contact", &input))
        .await?;

    let value: serde_json::Value = serde_json::from_str(&common::body_string(response).await)?;
    assert_eq!(value["success"], false);
    assert!(value["errors"]["form"].is_array());

    Ok(())
}
