use std::path::Path;
use std::time::Duration;

use lettre::address::AddressError;
use lettre::transport::smtp::authentication::Credentials;
use lettre::Address;
use secrecy::{ExposeSecret, Secret};
use serde_aux::field_attributes::deserialize_number_from_string;


#[derive(serde::Deserialize, Clone)]
pub struct Settings {
	pub application: ApplicationSettings,
	pub email_client: EmailClientSettings,
}

#[derive(serde::Deserialize, Clone)]
pub struct ApplicationSettings {
	#[serde(deserialize_with = "deserialize_number_from_string")]
	pub port: u16,
	pub host: String,
	pub hmac_secret: Secret<String>,
}

#[derive(serde::Deserialize, Clone)]
pub struct EmailClientSettings {
	pub smtp_host: String,
	#[serde(deserialize_with = "deserialize_number_from_string")]
	pub smtp_port: u16,
	pub tls: SmtpTls,
	pub username: String,
	pub password: Secret<String>,
	pub recipient: String,
	pub timeout_milliseconds: u64,
}

/// How the connection to the SMTP relay is secured.
#[derive(serde::Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SmtpTls {
	Implicit,
	Starttls,
	None,
}

impl EmailClientSettings {
	pub fn recipient(&self) -> Result<Address, AddressError> {
		self.recipient.parse()
	}

	pub fn timeout(&self) -> Duration {
		Duration::from_millis(self.timeout_milliseconds)
	}

	/// `None` when no username is configured, e.g. a local catch-all relay.
	pub fn credentials(&self) -> Option<Credentials> {
		if self.username.is_empty() {
			return None;
		}
		Some(Credentials::new(
			self.username.clone(),
			self.password.expose_secret().clone(),
		))
	}
}


#[derive(Debug)]
pub enum Environment {
	Local,
	Production,
}

impl Environment {
	pub fn as_str(&self) -> &'static str {
		match self {
			Environment::Local => "local",
			Environment::Production => "production",
		}
	}
}

impl TryFrom<String> for Environment {
	type Error = String;

	fn try_from(s: String) -> Result<Self, Self::Error> {
		match s.to_lowercase().as_str() {
			"local" => Ok(Self::Local),
			"production" => Ok(Self::Production),
			other => Err(format!(
				"{} is not a supported environment. Use either `local` or `production`.",
				other
			)),
		}
	}
}


pub fn get_configuration() -> Result<Settings, config::ConfigError> {
	let base_path = std::env::current_dir()
		.map_err(|e| config::ConfigError::Message(format!("failed to determine the current directory: {}", e)))?;
	let configuration_directory = base_path.join("configuration");

	let environment: Environment = std::env::var("APP_ENVIRONMENT")
		.unwrap_or_else(|_| "local".into())
		.try_into()
		.map_err(config::ConfigError::Message)?;

	load_configuration(&configuration_directory, environment)
}

/// Layers `base.yaml`, the environment's own file and `APP_*` variables.
pub fn load_configuration(
	configuration_directory: &Path,
	environment: Environment,
) -> Result<Settings, config::ConfigError> {
	let environment_filename = format!("{}.yaml", environment.as_str());

	let settings = config::Config::builder()
		.add_source(config::File::from(configuration_directory.join("base.yaml")))
		.add_source(config::File::from(configuration_directory.join(environment_filename)))
		// APP_APPLICATION__PORT=5001 sets `Settings.application.port`
		.add_source(
			config::Environment::with_prefix("APP")
				.prefix_separator("_")
				.separator("__"),
		)
		.build()?;

	settings.try_deserialize::<Settings>()
}
