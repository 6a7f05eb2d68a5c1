//! Backend abstraction.

use async_trait::async_trait;

use crate::config::AUTH_ENV_VAR;
use crate::error::{InterpretResult, InterpretationError};
use crate::types::{Interpretation, InterpretationRequest};

/// A model that turns one request into a structured interpretation.
#[async_trait]
pub trait InterpretationBackend: Send + Sync {
    /// Short name used in log lines.
    fn name(&self) -> &'static str;

    async fn interpret(&self, request: &InterpretationRequest) -> InterpretResult<Interpretation>;
}

/// Backend used when no API key is available. Every call reports
/// [`InterpretationError::NotConfigured`].
#[derive(Debug, Default, Clone, Copy)]
pub struct UnconfiguredBackend;

#[async_trait]
impl InterpretationBackend for UnconfiguredBackend {
    fn name(&self) -> &'static str {
        "unconfigured"
    }

    async fn interpret(&self, _request: &InterpretationRequest) -> InterpretResult<Interpretation> {
        Err(InterpretationError::NotConfigured(AUTH_ENV_VAR))
    }
}
