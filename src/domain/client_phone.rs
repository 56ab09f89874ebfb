use crate::constant::{MIN_PHONE_LENGTH, PHONE_PATTERN};
use crate::domain::InvalidReason;
use crate::utils;
use once_cell::sync::Lazy;
use regex::Regex;

static PHONE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(PHONE_PATTERN).unwrap());

/// A domestic mobile number.
///
/// Validated in normalized form (`+79991234567`); the trimmed input
/// (`+7 (999) 123-45-67`) is kept for the people reading notifications.
#[derive(Debug)]
pub struct ClientPhone {
    normalized: String,
    as_entered: String,
}
impl ClientPhone {
    pub fn parse(phone: String) -> Result<Self, InvalidReason> {
        if utils::is_blank(&phone) {
            return Err(InvalidReason::MissingPhone);
        }

        let normalized = Self::normalize(&phone);
        if normalized.len() < MIN_PHONE_LENGTH || !PHONE_REGEX.is_match(&normalized) {
            return Err(InvalidReason::InvalidPhone);
        }

        Ok(Self {
            normalized,
            as_entered: phone.trim().to_string(),
        })
    }

    /// The phone exactly as the client typed it, minus surrounding whitespace.
    pub fn as_entered(&self) -> &str {
        &self.as_entered
    }

    /// Drops everything except ASCII digits and `+`.
    ///
    /// A `+` anywhere but in front is kept and later rejected by the pattern.
    pub fn normalize(phone: &str) -> String {
        phone
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '+')
            .collect()
    }
}

impl AsRef<str> for ClientPhone {
    fn as_ref(&self) -> &str {
        self.normalized.as_str()
    }
}
