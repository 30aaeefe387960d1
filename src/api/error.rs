use reqwest::StatusCode;
use thiserror::Error;

/// Shown for a non-2xx `/predict` whose body has no usable `detail`.
pub const REJECTED_FALLBACK: &str = "Classification failed";

#[derive(Debug, Error)]
pub enum ClassificationError {
    /// Backend answered with a non-success status.
    #[error("{}", rejected_message(.detail))]
    Rejected {
        status: StatusCode,
        detail: Option<String>,
    },
    /// Request never completed: refused, DNS, reset mid-body.
    #[error(
        "Failed to connect to the server at {endpoint} ({source}). Please ensure the spam classification backend is running."
    )]
    Transport {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },
    /// Backend answered 2xx with a body that is not a classification result.
    #[error(
        "Unexpected response from the server ({reason}). Please ensure the spam classification backend is running."
    )]
    InvalidResponse { reason: String },
}

impl ClassificationError {
    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::Rejected { detail, .. } => usable_detail(detail),
            _ => None,
        }
    }

    /// Backend detail first, then this error's own message. Transport and
    /// invalid-response messages already carry the unreachable-backend hint.
    pub fn user_message(&self) -> String {
        match self.detail() {
            Some(detail) => detail.to_string(),
            None => self.to_string(),
        }
    }
}

fn usable_detail(detail: &Option<String>) -> Option<&str> {
    detail.as_deref().filter(|d| !d.trim().is_empty())
}

fn rejected_message(detail: &Option<String>) -> &str {
    usable_detail(detail).unwrap_or(REJECTED_FALLBACK)
}
