use lvr_form_relay::configuration;
use lvr_form_relay::error::BizErrorEnum;
use lvr_form_relay::startup::Application;
use lvr_form_relay::telemetry;

#[tokio::main]
async fn main() -> Result<(), BizErrorEnum> {
    let subscriber =
        telemetry::get_subscriber("lvr-form-relay".into(), "info".into(), std::io::stdout);
    telemetry::init_subscriber(subscriber)?;

    // Refuse to start without a bot token or with broken configuration files
    let config = configuration::get_configuration()?;
    let application = Application::build(config)?;
    tracing::info!("Serving the contact form API on port {}", application.port());
    application.check_relay_credentials().await;
    application.run_until_stopped().await?;

    Ok(())
}
