use crate::constant::{EMPTY_MESSAGE_PLACEHOLDER, PARSE_MODE_HTML, SCHOOL_NAME, TIMESTAMP_FORMAT};
use crate::domain::FormSubmission;
use crate::error::BizErrorEnum;
use crate::utils;
use chrono::{DateTime, Local};
use reqwest::{Client, Url};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Thin client over the Telegram Bot API.
///
/// Every notification goes to a single chat configured up front.
#[derive(Debug)]
pub struct TelegramClient {
    http_client: Client,
    base_url: String,
    bot_token: Secret<String>,
    recipient: String,
}

impl TelegramClient {
    pub fn new(
        base_url: String,
        bot_token: Secret<String>,
        recipient: String,
        timeout: Duration,
    ) -> Result<Self, BizErrorEnum> {
        let http_client = Client::builder()
            // timeout is a MUST option for client
            .timeout(timeout)
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build http client: {:?}", e);
                BizErrorEnum::BuildHttpClientError(e)
            })?;
        Ok(TelegramClient {
            http_client,
            base_url,
            bot_token,
            recipient,
        })
    }

    /// Chat id of the person who receives form submissions.
    pub fn recipient(&self) -> &str {
        &self.recipient
    }

    /// Formats the submission and delivers it to the recipient.
    ///
    /// Returns `false` on any failure; the cause is only logged.
    #[tracing::instrument(name = "Relay a form submission to Telegram", skip_all)]
    pub async fn relay_form_submission(&self, submission: &FormSubmission) -> bool {
        let text = format_notification(submission, Local::now());
        match self.send_message(self.recipient(), &text).await {
            Ok(()) => {
                tracing::info!("Form submission delivered to chat {}", self.recipient());
                true
            }
            Err(e) => {
                tracing::error!(error.cause_chain = ?e, "Failed to relay form submission");
                false
            }
        }
    }

    pub async fn send_message(&self, chat_id: &str, text: &str) -> Result<(), BizErrorEnum> {
        let url = self.method_url("sendMessage")?;
        let request_body = SendMessageRequest {
            chat_id,
            text,
            parse_mode: PARSE_MODE_HTML,
        };
        let response = self
            .http_client
            .post(url)
            .json(&request_body)
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(redact_token)?
            .json::<ApiResponse<serde_json::Value>>()
            .await
            .map_err(redact_token)?;
        response.into_result().map(|_| ())
    }

    /// Asks Telegram who we are, which also proves the bot token works.
    pub async fn get_me(&self) -> Result<BotUser, BizErrorEnum> {
        let url = self.method_url("getMe")?;
        let response = self
            .http_client
            .get(url)
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(redact_token)?
            .json::<ApiResponse<BotUser>>()
            .await
            .map_err(redact_token)?;
        response.into_result()
    }

    /// `{base_url}/bot{token}/{method}`. The url holds the token, never log it.
    /// Errors built from requests to it must go through `redact_token`.
    fn method_url(&self, method: &str) -> Result<Url, BizErrorEnum> {
        Url::parse(&self.base_url)
            .map_err(|e| {
                tracing::error!("Failed to parse url: url={}, e={:?}", &self.base_url, e);
                BizErrorEnum::ParseUrlError
            })?
            .join(&format!(
                "/bot{}/{}",
                self.bot_token.expose_secret(),
                method
            ))
            .map_err(|e| {
                tracing::error!("Url failed to join /{}: {:?}", method, e);
                BizErrorEnum::JoinUrlError
            })
    }
}

/// Every Bot API url embeds the bot token, drop it before the error
/// is logged or displayed.
fn redact_token(e: reqwest::Error) -> BizErrorEnum {
    BizErrorEnum::TelegramRequestError(e.without_url())
}

/// Renders the notification the recipient sees in Telegram.
///
/// Only the template's own `<b>`/`<i>` tags are markup: every user-supplied
/// field is escaped first.
pub fn format_notification(submission: &FormSubmission, timestamp: DateTime<Local>) -> String {
    let message = submission
        .message()
        .map(utils::escape_html)
        .unwrap_or_else(|| EMPTY_MESSAGE_PLACEHOLDER.to_string());
    format!(
        "🎓 <b>Новая заявка с сайта {school}</b>\n\
         \n\
         👤 <b>Имя:</b> {name}\n\
         📞 <b>Телефон:</b> {phone}\n\
         📝 <b>Сообщение:</b> {message}\n\
         ⏰ <b>Время:</b> {time}\n\
         \n\
         {separator}\n\
         💡 <i>Это автоматическое сообщение от бота LVR</i>",
        school = SCHOOL_NAME,
        name = utils::escape_html(submission.name()),
        phone = utils::escape_html(submission.phone_as_entered()),
        message = message,
        time = timestamp.format(TIMESTAMP_FORMAT),
        separator = "━".repeat(40),
    )
}

#[derive(Debug, Serialize)]
struct SendMessageRequest<'a> {
    chat_id: &'a str,
    text: &'a str,
    parse_mode: &'a str,
}

/// Envelope every Bot API method answers with.
#[derive(Debug, Deserialize)]
struct ApiResponse<T> {
    ok: bool,
    description: Option<String>,
    result: Option<T>,
}

impl<T> ApiResponse<T> {
    fn into_result(self) -> Result<T, BizErrorEnum> {
        match (self.ok, self.result) {
            (true, Some(result)) => Ok(result),
            _ => {
                let description = self
                    .description
                    .unwrap_or_else(|| "no description".to_string());
                tracing::error!("Telegram Bot API returned an error: {}", description);
                Err(BizErrorEnum::TelegramApiError(description))
            }
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct BotUser {
    pub id: i64,
    pub is_bot: bool,
    pub first_name: String,
    pub username: Option<String>,
}
