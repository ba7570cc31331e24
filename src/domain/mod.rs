mod contact_fields;
mod envelope;
mod submission;

pub use contact_fields::{ContactFields, MissingField};
pub use envelope::{contact_body, Envelope};
pub use submission::{SubmissionRequest, SubmissionResult};
