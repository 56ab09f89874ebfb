use crate::constant::{
    INVALID_PHONE_MESSAGE, MISSING_NAME_MESSAGE, MISSING_PHONE_MESSAGE, NAME_TOO_SHORT_MESSAGE,
};
use crate::domain::{ClientMessage, ClientName, ClientPhone};
use std::fmt::{Display, Formatter};

/// A contact-form submission whose name and phone passed validation.
///
/// Lives only for the duration of one request.
#[derive(Debug)]
pub struct FormSubmission {
    name: ClientName,
    phone: ClientPhone,
    message: ClientMessage,
}
impl FormSubmission {
    pub fn new(name: ClientName, phone: ClientPhone, message: ClientMessage) -> Self {
        Self {
            name,
            phone,
            message,
        }
    }

    pub fn name(&self) -> &str {
        self.name.as_ref()
    }

    /// Normalized phone, digits and a leading `+` only.
    pub fn phone(&self) -> &str {
        self.phone.as_ref()
    }

    pub fn phone_as_entered(&self) -> &str {
        self.phone.as_entered()
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidReason {
    MissingName,
    NameTooShort,
    MissingPhone,
    InvalidPhone,
}
impl InvalidReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            InvalidReason::MissingName => MISSING_NAME_MESSAGE,
            InvalidReason::NameTooShort => NAME_TOO_SHORT_MESSAGE,
            InvalidReason::MissingPhone => MISSING_PHONE_MESSAGE,
            InvalidReason::InvalidPhone => INVALID_PHONE_MESSAGE,
        }
    }
}

impl Display for InvalidReason {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
