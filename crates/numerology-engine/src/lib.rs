//! # numerology-engine
//!
//! Pythagorean numerology computed from a full name, a birth date and an
//! evaluation date ("today").
//!
//! ```text
//!   Profile ──┐
//!             ├──▶ compute() ──▶ NumerologyResult
//!   today ────┘        │
//!                      ├─ core numbers        (numbers)
//!                      ├─ lessons, debts      (karmic)
//!                      ├─ bridges, planes     (bridge, planes)
//!                      ├─ pinnacles           (pinnacle)
//!                      ├─ letter transits     (transit)
//!                      └─ personal cycles     (forecast)
//! ```
//!
//! The engine is a pure function: no clock reads, no I/O, no shared state.
//! The caller captures "today" once and passes it in, which keeps every
//! age-relative series in one result consistent.
//!
//! ## Reductions
//!
//! Two digit reductions are used side by side. [`reduce_master`] keeps the
//! master numbers 11, 22 and 33; [`reduce_plain`] always collapses to a
//! single digit. Which one applies is fixed per derivation.

#![deny(unsafe_code)]

pub mod bridge;
pub mod engine;
pub mod error;
pub mod forecast;
pub mod karmic;
pub mod numbers;
pub mod pinnacle;
pub mod planes;
pub mod reduce;
pub mod tables;
pub mod transit;
pub mod types;

// ── Re-exports ──────────────────────────────────────────────────────────

pub use engine::{calculate_profile, color_association, compute, current_age, repeated_core};
pub use error::{EngineError, EngineResult};
pub use reduce::{reduce, reduce_master, reduce_plain, sum_letters};
pub use tables::{letter_value, MASTER_NUMBERS};
pub use types::{
    BridgeNumber, ColorAnalysis, ColorAssociation, Elements, NumerologyResult, PersonalYearInfo,
    Pinnacle, PinnacleStage, Plane, PlanesOfExpression, Profile, RepeatedNumber, SpecialLetters,
    TransitAtAge, TransitLetter, Transits, VibrationalCycle,
};
