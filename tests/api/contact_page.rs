use portfolio::routes::{FAILED_NOTICE, SENT_NOTICE};

use crate::helpers::{assert_is_redirect_to, form_body, spawn_app, spawn_app_with, RecordingTransport};


#[tokio::test]
async fn home_renders_the_contact_form() {
    let app = spawn_app().await;

    let html_page = app.get_home_html().await;

    assert!(html_page.contains(r#"<form action="/contact" method="post">"#));
    assert!(!html_page.contains(SENT_NOTICE));
}

#[tokio::test]
async fn a_successful_submission_redirects_home_with_a_notice() {
    let app = spawn_app().await;

    let response = app.post_contact_form(form_body("Ada", "ada@example.com", "Hello")).await;
    assert_is_redirect_to(&response, "/");

    let html_page = app.get_home_html().await;
    assert!(html_page.contains(SENT_NOTICE));

    // Flash messages are shown once.
    let html_page = app.get_home_html().await;
    assert!(!html_page.contains(SENT_NOTICE));

    let sent = app.transport.sent_envelopes();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].text, "Name: Ada\nEmail: ada@example.com\n\nMessage:\nHello");
}

#[tokio::test]
async fn a_failed_submission_keeps_the_values_for_a_retry() {
    let app = spawn_app_with(RecordingTransport::failing()).await;

    let response = app.post_contact_form(form_body("Ada", "ada@example.com", "Hello")).await;

    assert_eq!(200, response.status().as_u16());
    let html_page = response.text().await.unwrap();
    assert!(html_page.contains(FAILED_NOTICE));
    assert!(html_page.contains(r#"value="Ada""#));
    assert!(html_page.contains(">Hello</textarea>"));
}

#[tokio::test]
async fn empty_fields_are_rejected_without_sending() {
    let app = spawn_app().await;
    let test_cases = vec![
        (form_body("", "ada@example.com", "Hello"), "The name field is required"),
        (form_body("Ada", "", "Hello"), "The email field is required"),
        (form_body("Ada", "ada@example.com", ""), "The message field is required"),
    ];

    for (body, notice) in test_cases {
        let response = app.post_contact_form(body).await;

        assert_eq!(400, response.status().as_u16());
        let html_page = response.text().await.unwrap();
        assert!(html_page.contains(notice), "expected the page to say: {}", notice);
    }
    assert!(app.transport.sent_envelopes().is_empty());
}

#[tokio::test]
async fn a_form_missing_a_field_is_a_400() {
    let app = spawn_app().await;
    let test_cases = vec![
        ("name=Ada&email=ada%40example.com", "missing the message"),
        ("message=Hello", "missing the name and email"),
        ("", "missing every field"),
    ];

    for (invalid_body, error_message) in test_cases {
        let response = app.post_contact_form(invalid_body.to_string()).await;

        assert_eq!(
            400,
            response.status().as_u16(),
            "The form handler did not fail with 400 Bad Request when the payload was {}.",
            error_message
        );
    }
}
