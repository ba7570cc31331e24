use std::future::Future;

use lettre::Address;

use crate::domain::{Envelope, SubmissionRequest, SubmissionResult};
use crate::email_client::MailTransport;


pub const CONTACT_SUBJECT: &str = "New Message from Porfolio";

/// Turns one submission into one outcome. Failures never escape as errors.
pub trait Dispatch: Send + Sync + 'static {
	fn dispatch(&self, request: SubmissionRequest) -> impl Future<Output = SubmissionResult> + Send;
}


/// Formats submissions into an [`Envelope`] for the site owner and hands them
/// to a [`MailTransport`]. Holds no state between calls.
pub struct MailDispatcher<T> {
	transport: T,
	recipient: Address,
}

impl<T: MailTransport> MailDispatcher<T> {
	pub fn new(transport: T, recipient: Address) -> Self {
		Self { transport, recipient }
	}

	pub fn recipient(&self) -> &Address {
		&self.recipient
	}

	pub fn transport(&self) -> &T {
		&self.transport
	}

	pub fn envelope_for(&self, request: SubmissionRequest) -> Envelope {
		Envelope::new(request, self.recipient.clone(), CONTACT_SUBJECT)
	}
}

impl<T: MailTransport> Dispatch for MailDispatcher<T> {
	#[tracing::instrument(
		name = "Dispatching a contact submission",
		skip(self, request),
		fields(
			sender_name = %request.name,
			sender_email = %request.email
		)
	)]
	async fn dispatch(&self, request: SubmissionRequest) -> SubmissionResult {
		let envelope = self.envelope_for(request);
		match self.transport.send_mail(&envelope).await {
			Ok(()) => {
				tracing::info!("Contact email handed over to the mail transport");
				SubmissionResult::sent()
			}
			Err(e) => {
				tracing::error!(
					error.cause_chain = ?e,
					error.message = %e,
					"Failed to send the contact email"
				);
				SubmissionResult::failed()
			}
		}
	}
}
