//! Integration tests for the /api/contact endpoint, driven through the full router.

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{Method, Request, StatusCode},
    response::Response,
    Router,
};
use serde_json::{json, Value};
use server_core::domains::contact::ContactSettings;
use server_core::kernel::{BaseEmailProvider, EmailDispatcher, MockEmailProvider};
use server_core::server::{build_app, AppState};
use tower::ServiceExt;

const GENERIC_ERROR: &str = "Sorry, there was an error sending your message. Please try again.";
const REQUIRED_FIELDS: &str = "Name, email, and message are required";

fn app_with(providers: Vec<Arc<dyn BaseEmailProvider>>) -> Router {
    build_app(AppState::new(
        ContactSettings::default(),
        EmailDispatcher::new(providers),
    ))
}

async fn post_contact(app: Router, body: impl Into<Body>) -> Response {
    app.oneshot(
        Request::builder()
            .method(Method::POST)
            .uri("/api/contact")
            .header("content-type", "application/json")
            .body(body.into())
            .unwrap(),
    )
    .await
    .unwrap()
}

async fn json_body(response: Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn header<'a>(response: &'a Response, name: &str) -> Option<&'a str> {
    response.headers().get(name).and_then(|v| v.to_str().ok())
}

/// 200 and 400 answers: JSON plus the POST CORS headers.
fn assert_post_cors_headers(response: &Response) {
    assert_eq!(header(response, "content-type"), Some("application/json"));
    assert_eq!(header(response, "access-control-allow-origin"), Some("*"));
    assert_eq!(header(response, "access-control-allow-methods"), Some("POST"));
    assert_eq!(
        header(response, "access-control-allow-headers"),
        Some("Content-Type")
    );
}

/// 500 answers: JSON with only the allow-origin CORS header.
fn assert_origin_only_headers(response: &Response) {
    assert_eq!(header(response, "content-type"), Some("application/json"));
    assert_eq!(header(response, "access-control-allow-origin"), Some("*"));
    assert_eq!(header(response, "access-control-allow-methods"), None);
    assert_eq!(header(response, "access-control-allow-headers"), None);
}

#[tokio::test]
async fn valid_submission_without_providers_succeeds() {
    let response = post_contact(
        app_with(vec![]),
        json!({"name": "A", "email": "a@b.com", "message": "hi"}).to_string(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_post_cors_headers(&response);
    assert_eq!(
        json_body(response).await,
        json!({
            "success": true,
            "message": "Thank you for your message! I'll get back to you soon."
        })
    );
}

#[tokio::test]
async fn missing_fields_return_400() {
    let bodies = [
        json!({"name": "", "email": "a@b.com", "message": "hi"}),
        json!({"email": "a@b.com", "message": "hi"}),
        json!({"name": "A", "message": "hi"}),
        json!({"name": "A", "email": "a@b.com"}),
        json!({"name": "A", "email": "a@b.com", "message": null}),
        json!({"name": false, "email": "a@b.com", "message": "hi"}),
        json!({"name": 0, "email": "a@b.com", "message": "hi"}),
        json!({}),
    ];

    for body in bodies {
        let provider = Arc::new(MockEmailProvider::new("SendGrid"));
        let response = post_contact(
            app_with(vec![provider.clone() as Arc<dyn BaseEmailProvider>]),
            body.to_string(),
        )
        .await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "body: {body}");
        assert_post_cors_headers(&response);
        assert_eq!(
            json_body(response).await,
            json!({"success": false, "error": REQUIRED_FIELDS})
        );
        assert_eq!(provider.call_count(), 0);
    }
}

#[tokio::test]
async fn malformed_email_returns_400() {
    for email in ["plainaddress", "a@b", "a b@c.com", "@b.com"] {
        let response = post_contact(
            app_with(vec![]),
            json!({"name": "A", "email": email, "message": "hi"}).to_string(),
        )
        .await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "email: {email}");
        assert_post_cors_headers(&response);
        assert_eq!(
            json_body(response).await,
            json!({"success": false, "error": "Please enter a valid email address"})
        );
    }
}

#[tokio::test]
async fn malformed_json_returns_generic_500() {
    let response = post_contact(app_with(vec![]), "{\"name\": ").await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_origin_only_headers(&response);
    assert_eq!(
        json_body(response).await,
        json!({"success": false, "error": GENERIC_ERROR})
    );
}

#[tokio::test]
async fn non_object_body_returns_generic_500_without_sending() {
    for body in [r#"["A","a@b.com",null,"hi"]"#, "null", r#""hello""#] {
        let provider = Arc::new(MockEmailProvider::new("SendGrid"));
        let response = post_contact(
            app_with(vec![provider.clone() as Arc<dyn BaseEmailProvider>]),
            body,
        )
        .await;

        assert_eq!(
            response.status(),
            StatusCode::INTERNAL_SERVER_ERROR,
            "body: {body}"
        );
        assert_origin_only_headers(&response);
        assert_eq!(
            json_body(response).await,
            json!({"success": false, "error": GENERIC_ERROR})
        );
        assert_eq!(provider.call_count(), 0);
    }
}

#[tokio::test]
async fn scalar_fields_and_duplicate_keys_are_accepted() {
    let provider = Arc::new(MockEmailProvider::new("SendGrid"));

    let response = post_contact(
        app_with(vec![provider.clone() as Arc<dyn BaseEmailProvider>]),
        r#"{"name":"A","name":"B","email":"a@b.com","message":42}"#,
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let sent = provider.sent().remove(0);
    assert!(sent.text.contains("Name: B\n"));
    assert!(sent.text.contains("Message:\n42\n"));
}

#[tokio::test]
async fn framework_responses_still_allow_any_origin() {
    let response = app_with(vec![])
        .oneshot(
            Request::builder()
                .method(Method::GET)
                .uri("/api/contact")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(header(&response, "access-control-allow-origin"), Some("*"));

    let oversized = vec![b'a'; 2 * 1024 * 1024 + 1];
    let response = post_contact(app_with(vec![]), oversized).await;

    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(header(&response, "access-control-allow-origin"), Some("*"));
}

#[tokio::test]
async fn only_the_configured_provider_is_invoked() {
    let sendgrid = Arc::new(MockEmailProvider::new("SendGrid"));
    let resend = Arc::new(MockEmailProvider::new("Resend"));

    let response = post_contact(
        app_with(vec![
            sendgrid.clone() as Arc<dyn BaseEmailProvider>,
            resend.clone(),
        ]),
        json!({
            "name": "Ada",
            "email": "ada@example.org",
            "subject": "Prints",
            "message": "Do you sell prints?"
        })
        .to_string(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(sendgrid.call_count(), 1);
    assert_eq!(resend.call_count(), 0);

    let sent = &sendgrid.sent()[0];
    assert_eq!(sent.to, "noreply@canners.xyz");
    assert_eq!(sent.from, "noreply@canners.xyz");
    assert_eq!(sent.reply_to, "ada@example.org");
    assert_eq!(sent.subject, "Portfolio Contact: Prints");
    assert!(sent.text.contains("Do you sell prints?"));
}

#[tokio::test]
async fn provider_failure_returns_generic_500_without_detail() {
    let provider = Arc::new(MockEmailProvider::failing(
        "Mailjet",
        "Mailjet error: Sender not validated",
    ));

    let response = post_contact(
        app_with(vec![provider.clone() as Arc<dyn BaseEmailProvider>]),
        json!({"name": "A", "email": "a@b.com", "message": "hi"}).to_string(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_origin_only_headers(&response);
    let body = json_body(response).await;
    assert_eq!(body, json!({"success": false, "error": GENERIC_ERROR}));
    assert!(!body.to_string().contains("Sender not validated"));
    assert_eq!(provider.call_count(), 1);
}

#[tokio::test]
async fn preflight_returns_cors_headers_and_empty_body() {
    let configured = app_with(vec![
        Arc::new(MockEmailProvider::new("Resend")) as Arc<dyn BaseEmailProvider>,
    ]);

    for app in [app_with(vec![]), configured] {
        let response = app
            .oneshot(
                Request::builder()
                    .method(Method::OPTIONS)
                    .uri("/api/contact")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(header(&response, "access-control-allow-origin"), Some("*"));
        assert_eq!(
            header(&response, "access-control-allow-methods"),
            Some("POST, OPTIONS")
        );
        assert_eq!(
            header(&response, "access-control-allow-headers"),
            Some("Content-Type")
        );

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert!(bytes.is_empty());
    }
}

#[tokio::test]
async fn health_reports_selected_provider() {
    let app = app_with(vec![
        Arc::new(MockEmailProvider::new("Mailgun")) as Arc<dyn BaseEmailProvider>,
    ]);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        json_body(response).await,
        json!({"status": "healthy", "email_provider": "Mailgun"})
    );
}
