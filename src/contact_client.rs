use std::time::Duration;

use reqwest::Client;

use crate::dispatcher::Dispatch;
use crate::domain::{SubmissionRequest, SubmissionResult};


/// Submits contact requests to a running service over `POST /api/contact`.
pub struct ContactClient {
	http_client: Client,
	base_url: String,
}

impl ContactClient {
	pub fn new(base_url: String, timeout: Duration) -> Result<Self, reqwest::Error> {
		let http_client = Client::builder()
			.timeout(timeout)
			.build()?;
		Ok(Self { http_client, base_url })
	}

	async fn submit(&self, request: &SubmissionRequest) -> Result<SubmissionResult, reqwest::Error> {
		let url = format!("{}/api/contact", self.base_url);
		self.http_client
			.post(&url)
			.json(request)
			.send()
			.await?
			.error_for_status()?
			.json::<SubmissionResult>()
			.await
	}
}

impl Dispatch for ContactClient {
	#[tracing::instrument(
		name = "Submitting contact request to the contact service",
		skip(self, request),
		fields(base_url = %self.base_url)
	)]
	async fn dispatch(&self, request: SubmissionRequest) -> SubmissionResult {
		match self.submit(&request).await {
			Ok(result) => result,
			Err(e) => {
				tracing::error!(
					error.cause_chain = ?e,
					error.message = %e,
					"Contact service request failed"
				);
				SubmissionResult::failed()
			}
		}
	}
}
