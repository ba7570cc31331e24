/// One contact submission, moved into the dispatch call and dropped when it returns.
///
/// No field is validated here: the form that produced it is responsible for
/// rejecting empty values.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SubmissionRequest {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SubmissionResult {
    pub success: bool,
}

impl SubmissionResult {
    pub fn sent() -> Self {
        Self { success: true }
    }

    pub fn failed() -> Self {
        Self { success: false }
    }
}
