use std::fmt::{Debug, Formatter};
use std::future::Future;

use anyhow::Context;
use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp;
use lettre::{Address, AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use crate::configuration::{EmailClientSettings, SmtpTls};
use crate::domain::Envelope;
use crate::routes::error_chain_fmt;


/// The transport rejected or failed to deliver an envelope, whatever the cause.
#[derive(thiserror::Error)]
#[error("Failed to hand the contact email over to the mail transport")]
pub struct DispatchFailure(#[from] anyhow::Error);

impl Debug for DispatchFailure {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		error_chain_fmt(f, self)
	}
}

/// Delivers a single envelope.
pub trait MailTransport: Send + Sync + 'static {
	fn send_mail(&self, envelope: &Envelope) -> impl Future<Output = Result<(), DispatchFailure>> + Send;
}


pub struct SmtpEmailClient {
	mailer: AsyncSmtpTransport<Tokio1Executor>,
}

impl SmtpEmailClient {
	pub fn new(settings: &EmailClientSettings) -> Result<Self, smtp::Error> {
		let builder = match settings.tls {
			SmtpTls::Implicit => AsyncSmtpTransport::<Tokio1Executor>::relay(&settings.smtp_host)?,
			SmtpTls::Starttls => AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&settings.smtp_host)?,
			SmtpTls::None => AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&settings.smtp_host),
		};
		let builder = builder
			.port(settings.smtp_port)
			.timeout(Some(settings.timeout()));
		let builder = match settings.credentials() {
			Some(credentials) => builder.credentials(credentials),
			None => builder,
		};

		Ok(Self { mailer: builder.build() })
	}
}

impl MailTransport for SmtpEmailClient {
	#[tracing::instrument(
		name = "Send contact email over SMTP",
		skip(self, envelope),
		fields(recipient = %envelope.to)
	)]
	async fn send_mail(&self, envelope: &Envelope) -> Result<(), DispatchFailure> {
		let message = build_message(envelope)?;
		self.mailer
			.send(message)
			.await
			.context("The SMTP relay did not accept the contact email")?;
		Ok(())
	}
}

/// Headers are built from structured mailboxes so that quotes, angle brackets
/// and line breaks in sender values are quoted or encoded instead of being
/// spliced into the header.
pub fn build_message(envelope: &Envelope) -> Result<Message, anyhow::Error> {
	let sender_address: Address = envelope
		.sender_email
		.parse()
		.with_context(|| format!("{:?} is not a valid sender address", envelope.sender_email))?;
	let sender = Mailbox::new(Some(envelope.sender_name.clone()), sender_address);

	Message::builder()
		.from(sender.clone())
		.reply_to(sender)
		.to(Mailbox::new(None, envelope.to.clone()))
		.subject(envelope.subject.clone())
		.header(ContentType::TEXT_PLAIN)
		.body(envelope.text.clone())
		.context("Failed to build the contact email")
}
