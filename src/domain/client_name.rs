use crate::constant::MIN_NAME_LENGTH;
use crate::domain::InvalidReason;
use crate::utils;

#[derive(Debug)]
pub struct ClientName(String);
impl ClientName {
    /// Returns an instance of `ClientName` if the trimmed input is
    /// at least two characters (Unicode scalar values) long.
    pub fn parse(name: String) -> Result<Self, InvalidReason> {
        if utils::is_blank(&name) {
            return Err(InvalidReason::MissingName);
        }

        let name = name.trim();
        // `ё` written as `е` + combining diaeresis counts as two characters
        if name.chars().count() < MIN_NAME_LENGTH {
            return Err(InvalidReason::NameTooShort);
        }

        Ok(Self(name.to_string()))
    }
}

impl AsRef<str> for ClientName {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}
