use thiserror::Error;

/// Advisory upper bound shown next to the counter. Longer input is still sent.
pub const MAX_EMAIL_CHARS: usize = 10_000;
/// The counter switches to the warning tone above this many characters.
pub const WARNING_THRESHOLD: usize = 9_000;

pub const EMPTY_EMAIL_MESSAGE: &str = "Please enter email content to analyze";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{}", EMPTY_EMAIL_MESSAGE)]
    Empty,
}

/// Trimmed, non-empty email body ready to be submitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailText(String);

impl EmailText {
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
