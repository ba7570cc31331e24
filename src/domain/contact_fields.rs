use crate::domain::SubmissionRequest;


/// Editable state of the contact form.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Deserialize)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[error("The {0} field is required")]
pub struct MissingField(pub &'static str);

impl ContactFields {
    /// Same rule as an HTML `required` input: only the empty string is missing.
    pub fn into_request(self) -> Result<SubmissionRequest, MissingField> {
        if self.name.is_empty() {
            Err(MissingField("name"))
        } else if self.email.is_empty() {
            Err(MissingField("email"))
        } else if self.message.is_empty() {
            Err(MissingField("message"))
        } else {
            Ok(SubmissionRequest {
                name: self.name,
                email: self.email,
                message: self.message,
            })
        }
    }
}
