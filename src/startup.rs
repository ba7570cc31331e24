use actix_web::cookie::Key;
use actix_web::{web, App, HttpServer, dev::Server};
use actix_web_flash_messages::storage::CookieMessageStore;
use actix_web_flash_messages::FlashMessagesFramework;
use anyhow::Context;
use secrecy::{ExposeSecret, Secret};
use std::net::TcpListener;
use tracing_actix_web::TracingLogger;

use crate::configuration::Settings;
use crate::dispatcher::MailDispatcher;
use crate::email_client::{MailTransport, SmtpEmailClient};
use crate::routes::{contact, contact_api, health_check, home};


pub struct Application {
	port: u16,
	server: Server,
}

/// Signs the cookies that carry flash messages. Must be at least 64 bytes.
#[derive(Clone)]
pub struct HmacSecret(pub Secret<String>);


pub fn run<T: MailTransport>(
	listener: TcpListener,
	dispatcher: MailDispatcher<T>,
	hmac_secret: HmacSecret,
) -> Result<Server, anyhow::Error> {
	let dispatcher = web::Data::new(dispatcher);
	let key = Key::try_from(hmac_secret.0.expose_secret().as_bytes())
		.context("the HMAC secret must be at least 64 bytes long")?;
	let message_store = CookieMessageStore::builder(key).build();
	let message_framework = FlashMessagesFramework::builder(message_store).build();

	let server = HttpServer::new(move || {
		App::new()
			.wrap(message_framework.clone())
			.wrap(TracingLogger::default())
			.route("/", web::get().to(home))
			.route("/health_check", web::get().to(health_check))
			.route("/contact", web::post().to(contact::<T>))
			.route("/api/contact", web::post().to(contact_api::<T>))
			.app_data(dispatcher.clone())
	})
	.listen(listener)?
	.run();

	Ok(server)
}

impl Application {
	pub async fn build(configuration: Settings) -> Result<Self, anyhow::Error> {
		let dispatcher = {
			let recipient = configuration.email_client
				.recipient()
				.context("invalid recipient email address")?;
			let email_client = SmtpEmailClient::new(&configuration.email_client)
				.context("failed to configure the SMTP transport")?;
			MailDispatcher::new(email_client, recipient)
		};

		let listener = {
			let host = &configuration.application.host;
			let port = configuration.application.port;
			let address = format!("{}:{}", host, port);
			TcpListener::bind(&address)
				.with_context(|| format!("failed to bind {}", address))?
		};

		let port = listener.local_addr()?.port(); // actually assigned port
		tracing::info!(port, "Contact service listening");
		let server = run(
			listener,
			dispatcher,
			HmacSecret(configuration.application.hmac_secret),
		)?;

		Ok(Self { port, server })
	}

	pub fn port(&self) -> u16 {
		self.port
	}

	pub async fn run_until_stopped(self) -> std::io::Result<()> {
		self.server.await
	}
}
