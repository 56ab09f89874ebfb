use std::ops::Deref;

/// Free-text comment left by the client. Never validated, only trimmed.
#[derive(Debug, Default)]
pub struct ClientMessage(Option<String>);
impl ClientMessage {
    pub fn parse(message: Option<String>) -> Self {
        let message = message
            .map(|m| m.trim().to_string())
            .filter(|m| !m.is_empty());
        Self(message)
    }
}

impl Deref for ClientMessage {
    type Target = Option<String>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
