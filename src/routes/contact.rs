use actix_web::http::header::{ContentType, LOCATION};
use actix_web::{web, HttpResponse};
use actix_web_flash_messages::FlashMessage;

use crate::dispatcher::{Dispatch, MailDispatcher};
use crate::domain::{ContactFields, SubmissionRequest, SubmissionResult};
use crate::email_client::MailTransport;
use crate::routes::home::{contact_page, Notice};


pub const SENT_NOTICE: &str = "Message sent successfully!";
pub const FAILED_NOTICE: &str = "Failed to send message. Please try again.";


#[tracing::instrument(
    name = "Handling a contact API submission",
    skip(request, dispatcher)
)]
pub async fn contact_api<T: MailTransport>(
    request: web::Json<SubmissionRequest>,
    dispatcher: web::Data<MailDispatcher<T>>,
) -> web::Json<SubmissionResult> {
    web::Json(dispatcher.dispatch(request.into_inner()).await)
}

#[tracing::instrument(
    name = "Handling a contact form submission",
    skip(form, dispatcher)
)]
pub async fn contact<T: MailTransport>(
    form: web::Form<ContactFields>,
    dispatcher: web::Data<MailDispatcher<T>>,
) -> HttpResponse {
    let fields = form.into_inner();
    let request = match fields.clone().into_request() {
        Ok(request) => request,
        Err(e) => {
            return HttpResponse::BadRequest()
                .content_type(ContentType::html())
                .body(contact_page(&fields, &[Notice::Error(e.to_string())]));
        }
    };

    if dispatcher.dispatch(request).await.success {
        FlashMessage::info(SENT_NOTICE).send();
        HttpResponse::SeeOther()
            .insert_header((LOCATION, "/"))
            .finish()
    } else {
        HttpResponse::Ok()
            .content_type(ContentType::html())
            .body(contact_page(&fields, &[Notice::Error(FAILED_NOTICE.into())]))
    }
}
