use crate::constant::{INTERNAL_ERROR_MESSAGE, MISSING_DATA_MESSAGE, RELAY_FAILURE_MESSAGE};
use crate::domain::InvalidReason;
use crate::utils;
use actix_web::body::BoxBody;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use std::fmt::{Debug, Formatter};

#[derive(thiserror::Error)]
pub enum SendFormError {
    #[error("The request body is missing or is not a form object.")]
    MissingData,

    #[error("{0}")]
    ValidationError(InvalidReason),

    #[error("Failed to relay the form submission to Telegram.")]
    RelayFailure,

    #[error(transparent)]
    UnexpectedError(#[from] anyhow::Error),
}

impl SendFormError {
    /// The text shown to the person who filled in the form.
    ///
    /// 500-class errors never carry internal details.
    pub fn user_message(&self) -> &'static str {
        match self {
            SendFormError::MissingData => MISSING_DATA_MESSAGE,
            SendFormError::ValidationError(reason) => reason.as_str(),
            SendFormError::RelayFailure => RELAY_FAILURE_MESSAGE,
            SendFormError::UnexpectedError(_) => INTERNAL_ERROR_MESSAGE,
        }
    }
}

impl From<InvalidReason> for SendFormError {
    fn from(value: InvalidReason) -> Self {
        Self::ValidationError(value)
    }
}

// We are still using a bespoke implementation of `Debug`
// to get a nice report using the error source chain
impl Debug for SendFormError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        crate::error::error_chain_fmt(self, f)
    }
}

impl ResponseError for SendFormError {
    fn status_code(&self) -> StatusCode {
        match self {
            SendFormError::MissingData | SendFormError::ValidationError(_) => {
                StatusCode::BAD_REQUEST
            }
            SendFormError::RelayFailure | SendFormError::UnexpectedError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse<BoxBody> {
        utils::failure_to(self.status_code(), self.user_message())
    }
}
