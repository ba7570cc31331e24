use anyhow::Context;
use portfolio::configuration::get_configuration;
use portfolio::startup::Application;
use portfolio::telemetry::{get_subscriber, init_subscriber};


#[actix_web::main]
async fn main() -> anyhow::Result<()> {
	let subscriber = get_subscriber("portfolio".into(), "info".into(), std::io::stdout);
	init_subscriber(subscriber).context("failed to install the tracing subscriber")?;

	let configuration = get_configuration().context("failed to read configuration")?;
	let application = Application::build(configuration).await?;
	application.run_until_stopped().await?;
	Ok(())
}
