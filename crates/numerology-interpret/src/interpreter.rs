//! Backend selection and the non-failing interpretation entry point.

use std::sync::Arc;

use tracing::{info, warn};

use crate::backend::{InterpretationBackend, UnconfiguredBackend};
use crate::config::InterpreterConfig;
use crate::error::InterpretationError;
use crate::gemini::GeminiBackend;
use crate::types::{Interpretation, InterpretationRequest};

const NOT_CONFIGURED_SUMMARY: &str =
    "Interpretation unavailable at this time due to celestial alignment issues (API not configured).";
const BACKEND_ERROR_SUMMARY: &str =
    "Interpretation unavailable at this time due to celestial alignment issues (API error).";
const FALLBACK_TRAIT: &str = "Vibrational frequency analysis pending";
const FALLBACK_GUIDANCE: &str = "Seek your own inner wisdom.";

#[derive(Clone)]
pub struct Interpreter {
    backend: Arc<dyn InterpretationBackend>,
}

impl std::fmt::Debug for Interpreter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Interpreter")
            .field("backend", &self.backend.name())
            .finish()
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new(Arc::new(UnconfiguredBackend))
    }
}

impl Interpreter {
    pub fn new(backend: Arc<dyn InterpretationBackend>) -> Self {
        Self { backend }
    }

    /// Gemini when an API key is configured, otherwise the unconfigured
    /// backend. A key with an unusable endpoint also degrades to unconfigured.
    pub fn from_config(config: &InterpreterConfig) -> Self {
        if config.api_key().is_none() {
            info!("no interpretation API key configured; using fallback text");
            return Self::default();
        }
        match GeminiBackend::new(config) {
            Ok(backend) => {
                info!(model = %backend.model(), "gemini interpretation backend ready");
                Self::new(Arc::new(backend))
            }
            Err(e) => {
                warn!(error = %e, "gemini backend unavailable; using fallback text");
                Self::default()
            }
        }
    }

    pub fn backend_name(&self) -> &'static str {
        self.backend.name()
    }

    /// Ask the backend; on any failure return the fallback payload instead.
    pub async fn interpret(&self, request: &InterpretationRequest) -> Interpretation {
        match self.backend.interpret(request).await {
            Ok(interpretation) => interpretation,
            Err(e) => {
                warn!(
                    backend = self.backend.name(),
                    label = %request.label,
                    error = %e,
                    "interpretation failed; returning fallback"
                );
                fallback(request, &e)
            }
        }
    }
}

/// Fixed payload returned in place of a backend answer.
pub fn fallback(request: &InterpretationRequest, error: &InterpretationError) -> Interpretation {
    let summary = if error.is_not_configured() {
        NOT_CONFIGURED_SUMMARY
    } else {
        BACKEND_ERROR_SUMMARY
    };
    Interpretation {
        title: request.headline(),
        summary: summary.to_string(),
        traits: vec![FALLBACK_TRAIT.to_string()],
        guidance: FALLBACK_GUIDANCE.to_string(),
    }
}
