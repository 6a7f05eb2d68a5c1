//! # numerology-interpret
//!
//! Free-text elaboration of a single numerology value ("Life Path: 7",
//! "Second Pinnacle: 11", ...) by a generative model.
//!
//! ```text
//!   InterpretationRequest ──▶ Interpreter ──▶ dyn InterpretationBackend
//!                                 │                 ├─ GeminiBackend
//!                                 │                 └─ UnconfiguredBackend
//!                                 ▼
//!                          Interpretation  (fallback payload on any error)
//! ```
//!
//! The collaborator is advisory. [`Interpreter::interpret`] never fails: a
//! missing API key or any backend error degrades to a fixed fallback payload
//! and a `warn!` log line. Nothing here feeds back into the computed profile.

#![deny(unsafe_code)]

pub mod backend;
pub mod config;
pub mod error;
pub mod gemini;
pub mod interpreter;
pub mod types;

pub use backend::{InterpretationBackend, UnconfiguredBackend};
pub use config::{InterpreterConfig, AUTH_ENV_VAR, DEFAULT_ENDPOINT, DEFAULT_MODEL};
pub use error::{InterpretResult, InterpretationError};
pub use gemini::GeminiBackend;
pub use interpreter::Interpreter;
pub use types::{Interpretation, InterpretationRequest, InterpretedValue};
