use std::time::Duration;
use portfolio::contact_client::ContactClient;
use portfolio::contact_form::{ContactForm, FormStatus};
use portfolio::dispatcher::Dispatch;
use portfolio::domain::{ContactFields, SubmissionRequest};
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::helpers::{spawn_app, spawn_app_with, RecordingTransport};


fn ada() -> SubmissionRequest {
    SubmissionRequest {
        name: "Ada".into(),
        email: "ada@example.com".into(),
        message: "Hello".into(),
    }
}

fn contact_client(base_url: String) -> ContactClient {
    ContactClient::new(base_url, Duration::from_millis(200)).unwrap()
}

#[tokio::test]
async fn dispatch_posts_the_request_as_json() {
    let mock_server = MockServer::start().await;
    let client = contact_client(mock_server.uri());

    Mock::given(method("POST"))
        .and(path("/api/contact"))
        .and(body_json(&ada()))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "success": true })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let result = client.dispatch(ada()).await;

    assert!(result.success);
}

#[tokio::test]
async fn dispatch_passes_a_reported_failure_through() {
    let mock_server = MockServer::start().await;
    let client = contact_client(mock_server.uri());

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "success": false })))
        .expect(1)
        .mount(&mock_server)
        .await;

    assert!(!client.dispatch(ada()).await.success);
}

#[tokio::test]
async fn dispatch_fails_if_the_server_returns_500() {
    let mock_server = MockServer::start().await;
    let client = contact_client(mock_server.uri());

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&mock_server)
        .await;

    assert!(!client.dispatch(ada()).await.success);
}

#[tokio::test]
async fn dispatch_fails_on_an_unexpected_body() {
    let mock_server = MockServer::start().await;
    let client = contact_client(mock_server.uri());

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .expect(1)
        .mount(&mock_server)
        .await;

    assert!(!client.dispatch(ada()).await.success);
}

#[tokio::test]
async fn dispatch_times_out_if_the_server_takes_too_long() {
    let mock_server = MockServer::start().await;
    let client = contact_client(mock_server.uri());

    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({ "success": true }))
                .set_delay(Duration::from_secs(180)),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    assert!(!client.dispatch(ada()).await.success);
}

#[tokio::test]
async fn contact_form_submits_through_the_running_service() {
    let app = spawn_app().await;
    let form = ContactForm::new(ContactClient::new(app.address.clone(), Duration::from_secs(5)).unwrap());
    form.set_name("Ada");
    form.set_email("ada@example.com");
    form.set_message("Hello");

    let result = form.submit().await.unwrap();

    assert!(result.success);
    assert_eq!(form.status(), FormStatus::Success);
    assert_eq!(form.fields(), ContactFields::default());
    assert_eq!(app.transport.sent_envelopes().len(), 1);
}

#[tokio::test]
async fn contact_form_keeps_its_fields_when_the_service_fails_to_send() {
    let app = spawn_app_with(RecordingTransport::failing()).await;
    let form = ContactForm::new(ContactClient::new(app.address.clone(), Duration::from_secs(5)).unwrap());
    form.set_name("Ada");
    form.set_email("ada@example.com");
    form.set_message("Hello");

    let result = form.submit().await.unwrap();

    assert!(!result.success);
    assert_eq!(form.status(), FormStatus::Error);
    assert_eq!(form.fields().message, "Hello");
}
