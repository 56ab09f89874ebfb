use crate::constant::{
    APP_ENVIRONMENT, LOCAL_ENVIRONMENT, PRODUCTION_ENVIRONMENT, TELEGRAM_BOT_TOKEN,
};
use crate::error::BizErrorEnum;
use crate::telegram_client::TelegramClient;
use crate::utils;
use config::{Config, File};
use secrecy::Secret;
use serde::Deserialize;
use serde_aux::field_attributes::deserialize_number_from_string;
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub telegram: TelegramSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ApplicationSettings {
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub port: u16,
    pub host: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct TelegramSettings {
    pub base_url: String,
    /// Only ever read from `TELEGRAM_BOT_TOKEN`.
    pub bot_token: Secret<String>,
    /// Chat that receives every form submission.
    pub recipient_chat_id: String,
    pub timeout_milliseconds: u64,
}

impl TelegramSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_milliseconds)
    }

    pub fn client(self) -> Result<TelegramClient, BizErrorEnum> {
        let timeout = self.timeout();
        TelegramClient::new(
            self.base_url,
            self.bot_token,
            self.recipient_chat_id,
            timeout,
        )
    }
}

pub fn get_configuration() -> Result<Settings, BizErrorEnum> {
    let base_path = std::env::current_dir().map_err(|e| {
        tracing::error!("Failed to get current dir.");
        BizErrorEnum::GetCurrentDirError(e)
    })?;
    let config_dir = base_path.join("configuration");
    // Detect the running environment.
    // Default to `local` if unspecified.
    let environment: Environment = std::env::var(APP_ENVIRONMENT)
        .unwrap_or_else(|_| LOCAL_ENVIRONMENT.into())
        .try_into()
        .map_err(|e| {
            tracing::error!("Failed to parse APP_ENVIRONMENT: {:?}", e);
            BizErrorEnum::ParseEnvironmentVariableError(e)
        })?;
    let bot_token = std::env::var(TELEGRAM_BOT_TOKEN).ok();

    build_settings(&config_dir, environment, bot_token)
}

/// Layers `base.yaml`, `{environment}.yaml`, `APP_*` variables and the bot token.
///
/// There is no default bot token: a missing or blank one is an error.
pub fn build_settings(
    config_dir: &Path,
    environment: Environment,
    bot_token: Option<String>,
) -> Result<Settings, BizErrorEnum> {
    let bot_token = match bot_token {
        Some(token) if !utils::is_blank(&token) => token,
        _ => {
            tracing::error!("{} is not set", TELEGRAM_BOT_TOKEN);
            return Err(BizErrorEnum::MissingBotToken);
        }
    };

    let environment_filename = format!("{}.yaml", environment.as_str());
    // Initialise our configuration reader
    let settings = Config::builder()
        .add_source(File::from(config_dir.join("base.yaml")))
        .add_source(File::from(config_dir.join(environment_filename)))
        // E.g. `APP_APPLICATION__PORT=5001` would set `Settings.application.port`
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"),
        )
        .set_override("telegram.bot_token", bot_token)
        .and_then(|builder| builder.build())
        .map_err(|e| {
            tracing::error!("Failed to build config sources.");
            BizErrorEnum::BuildConfigSourcesError(e)
        })?;
    // Try to convert the configuration values it read into our Settings type
    settings.try_deserialize().map_err(|e| {
        tracing::error!("Failed to deserialize config file.");
        BizErrorEnum::DeserializeConfigurationFileError(e)
    })
}

/// The possible runtime environment for our application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Local,
    Production,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Local => LOCAL_ENVIRONMENT,
            Environment::Production => PRODUCTION_ENVIRONMENT,
        }
    }
}

impl TryFrom<String> for Environment {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.to_lowercase().as_str() {
            LOCAL_ENVIRONMENT => Ok(Self::Local),
            PRODUCTION_ENVIRONMENT => Ok(Self::Production),
            other => Err(format!(
                "{} is not a supported environment. Use either 'local' or 'production'.",
                other
            )),
        }
    }
}
