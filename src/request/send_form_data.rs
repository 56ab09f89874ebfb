use crate::domain::{ClientMessage, ClientName, ClientPhone, FormSubmission, InvalidReason};
use crate::error::SendFormError;
use serde::Deserialize;
use serde_json::Value;

/// Raw JSON payload of the contact form. Every field may be absent or `null`.
#[derive(Deserialize, Debug, Default)]
pub struct SendFormData {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub message: Option<String>,
}

impl SendFormData {
    /// Parses the request body.
    ///
    /// A body that is not JSON, not an object, an empty object or one with
    /// non-string fields is reported as `MissingData`.
    pub fn from_body(body: &[u8]) -> Result<Self, SendFormError> {
        let value: Value = serde_json::from_slice(body).map_err(|e| {
            tracing::warn!("Failed to parse form body as json: {:?}", e);
            SendFormError::MissingData
        })?;
        match &value {
            Value::Object(fields) if !fields.is_empty() => {}
            _ => return Err(SendFormError::MissingData),
        }
        serde_json::from_value(value).map_err(|e| {
            tracing::warn!("Form body has unexpected field types: {:?}", e);
            SendFormError::MissingData
        })
    }
}

impl TryFrom<SendFormData> for FormSubmission {
    type Error = InvalidReason;

    fn try_from(form: SendFormData) -> Result<Self, Self::Error> {
        // name is checked before phone, first failure wins
        let name = ClientName::parse(form.name.unwrap_or_default())?;
        let phone = ClientPhone::parse(form.phone.unwrap_or_default())?;
        let message = ClientMessage::parse(form.message);
        Ok(FormSubmission::new(name, phone, message))
    }
}
