//! # numerology-report
//!
//! Renders a computed [`NumerologyResult`](numerology_engine::NumerologyResult)
//! into a paginated "soul manuscript": a cover followed by six numbered pages.
//!
//! ```text
//!   cover │ I. Universal Archetypes      core signature
//!         │ II. Manifested Potential     capabilities, hurdles
//!         │ III. Chromatic Resonance     colors
//!         │ IV. Internal Architecture    harmonics, planes, special letters
//!         │ V. Prophetic Seasons         pinnacles, current transit
//!         │ VI. The Oracle Scroll        5-year and 6-month cycles
//! ```
//!
//! Rendering only reads its inputs. The resulting [`Manuscript`] is a plain
//! page/block tree that serializes with serde and prints as Markdown.

#![deny(unsafe_code)]

pub mod error;
pub mod manuscript;
pub mod render;

pub use error::{ReportError, ReportResult};
pub use manuscript::{Block, Manuscript, Page};
pub use render::{file_name, render_manuscript};
