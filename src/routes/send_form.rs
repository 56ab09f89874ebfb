use crate::constant::FORM_SENT_MESSAGE;
use crate::domain::FormSubmission;
use crate::error::SendFormError;
use crate::request::SendFormData;
use crate::telegram_client::TelegramClient;
use crate::utils;
use actix_web::{web, HttpResponse};
use anyhow::anyhow;

#[tracing::instrument(
    name = "Relaying a contact form submission",
    skip(body, telegram_client),
    fields(client_name = tracing::field::Empty)
)]
pub async fn send_form(
    body: Result<web::Bytes, actix_web::Error>,
    telegram_client: web::Data<TelegramClient>,
) -> Result<HttpResponse, SendFormError> {
    // `actix_web::Error` is not `Send`, keep only its message
    let body = body.map_err(|e| {
        tracing::error!("Failed to read request payload: {:?}", e);
        SendFormError::UnexpectedError(anyhow!("Failed to read request payload: {}", e))
    })?;

    let submission: FormSubmission = SendFormData::from_body(&body)?
        .try_into()
        .map_err(|e| {
            tracing::warn!("Rejected form submission: {:?}", e);
            SendFormError::ValidationError(e)
        })?;
    tracing::Span::current().record("client_name", submission.name());
    tracing::info!("Received a form submission");

    if !telegram_client.relay_form_submission(&submission).await {
        tracing::error!("Failed to relay the form submission");
        return Err(SendFormError::RelayFailure);
    }

    tracing::info!("Form submission relayed to Telegram");
    Ok(utils::success_to(FORM_SENT_MESSAGE))
}
