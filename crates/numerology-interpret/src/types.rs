//! Request and response records exchanged with a model backend.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The value being interpreted: a number, or free text such as a letter or
/// a color name.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum InterpretedValue {
    Number(u32),
    Text(String),
}

impl fmt::Display for InterpretedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<u32> for InterpretedValue {
    fn from(n: u32) -> Self {
        Self::Number(n)
    }
}

impl From<&str> for InterpretedValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for InterpretedValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterpretationRequest {
    /// Human label of the number, e.g. "Life Path" or "Third Pinnacle".
    pub label: String,
    pub value: InterpretedValue,
    /// Extra context appended to the prompt.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

impl InterpretationRequest {
    pub fn new(label: impl Into<String>, value: impl Into<InterpretedValue>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            context: None,
        }
    }

    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    /// Pinnacle requests get a dedicated system prompt.
    pub fn is_pinnacle(&self) -> bool {
        self.label.to_lowercase().contains("pinnacle")
    }

    /// `"{label}: {value}"`, used as the fallback title.
    pub fn headline(&self) -> String {
        format!("{}: {}", self.label, self.value)
    }
}

/// Structured elaboration returned by a backend.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interpretation {
    pub title: String,
    pub summary: String,
    pub traits: Vec<String>,
    pub guidance: String,
}
