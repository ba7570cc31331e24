use actix_web::http::header::ContentType;
use actix_web::HttpResponse;
use actix_web_flash_messages::{IncomingFlashMessages, Level};

use crate::domain::ContactFields;


pub(crate) enum Notice {
    Success(String),
    Error(String),
}

impl Notice {
    fn render(&self) -> String {
        let (class, text) = match self {
            Notice::Success(text) => ("success", text),
            Notice::Error(text) => ("error", text),
        };
        format!(
            "<p class=\"notice {}\"><i>{}</i></p>\n",
            class,
            htmlescape::encode_minimal(text)
        )
    }
}

pub async fn home(flash_messages: IncomingFlashMessages) -> HttpResponse {
    let notices: Vec<Notice> = flash_messages
        .iter()
        .map(|m| match m.level() {
            Level::Error | Level::Warning => Notice::Error(m.content().to_owned()),
            _ => Notice::Success(m.content().to_owned()),
        })
        .collect();

    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(contact_page(&ContactFields::default(), &notices))
}

pub(crate) fn contact_page(fields: &ContactFields, notices: &[Notice]) -> String {
    let notices: String = notices.iter().map(Notice::render).collect();
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta http-equiv="content-type" content="text/html; charset=utf-8">
    <title>Contact</title>
</head>
<body>
    <h3>Send a Message</h3>
    <form action="/contact" method="post">
        <label for="name">Name</label>
        <input id="name" type="text" name="name" placeholder="Your name" value="{name}" required>
        <label for="email">Email</label>
        <input id="email" type="email" name="email" placeholder="Your email" value="{email}" required>
        <label for="message">Message</label>
        <textarea id="message" name="message" rows="4" placeholder="Your message" required>{message}</textarea>
        <button type="submit">Send Message</button>
    </form>
    {notices}
</body>
</html>"#,
        name = htmlescape::encode_attribute(&fields.name),
        email = htmlescape::encode_attribute(&fields.email),
        message = htmlescape::encode_minimal(&fields.message),
        notices = notices,
    )
}
