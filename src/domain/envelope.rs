use lettre::Address;

use crate::domain::SubmissionRequest;


/// The email built from one submission, before any transport touches it.
///
/// Sender values are kept exactly as submitted. Transports are expected to
/// build their headers from `sender_name`/`sender_email` with a structured
/// API rather than from [`Envelope::from_header`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Envelope {
    pub sender_name: String,
    pub sender_email: String,
    pub to: Address,
    pub subject: String,
    pub text: String,
}

impl Envelope {
    pub fn new(request: SubmissionRequest, to: Address, subject: &str) -> Self {
        let text = contact_body(&request);
        Self {
            sender_name: request.name,
            sender_email: request.email,
            to,
            subject: subject.to_owned(),
            text,
        }
    }

    /// `"name" <email>`, no escaping applied.
    pub fn from_header(&self) -> String {
        format!("\"{}\" <{}>", self.sender_name, self.sender_email)
    }
}

pub fn contact_body(request: &SubmissionRequest) -> String {
    format!(
        "Name: {}\nEmail: {}\n\nMessage:\n{}",
        request.name, request.email, request.message
    )
}
