//! Backend failures. None of these reach the caller of
//! [`Interpreter::interpret`](crate::Interpreter::interpret); they select the
//! fallback payload and are logged.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum InterpretationError {
    #[error("interpretation backend is not configured (set {0})")]
    NotConfigured(&'static str),

    #[error("invalid interpreter configuration: {0}")]
    InvalidConfig(String),

    #[error("interpretation request failed: {0}")]
    Transport(String),

    #[error("interpretation backend returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("invalid interpretation response: {0}")]
    InvalidResponse(String),
}

impl InterpretationError {
    /// True when no backend was ever reachable, as opposed to a failed call.
    pub fn is_not_configured(&self) -> bool {
        matches!(self, Self::NotConfigured(_))
    }
}

impl From<reqwest::Error> for InterpretationError {
    fn from(e: reqwest::Error) -> Self {
        Self::Transport(e.to_string())
    }
}

impl From<serde_json::Error> for InterpretationError {
    fn from(e: serde_json::Error) -> Self {
        Self::InvalidResponse(e.to_string())
    }
}

pub type InterpretResult<T> = Result<T, InterpretationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        assert_eq!(
            InterpretationError::NotConfigured("GEMINI_API_KEY").to_string(),
            "interpretation backend is not configured (set GEMINI_API_KEY)"
        );
        let status = InterpretationError::Status {
            status: 429,
            body: "quota".into(),
        };
        assert_eq!(status.to_string(), "interpretation backend returned 429: quota");
        assert!(!status.is_not_configured());
    }

    #[test]
    fn json_errors_are_invalid_responses() {
        let err: InterpretationError = serde_json::from_str::<u32>("nope").unwrap_err().into();
        assert!(matches!(err, InterpretationError::InvalidResponse(_)));
    }
}
