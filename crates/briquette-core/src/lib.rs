//! Core library for the Briquette estimation utility.
//!
//! Given an acreage, the crate computes how many briquettes are needed at a
//! coverage rate of one per 100 square feet, and can ask an external text
//! generation service for a logistics narrative about the job.
//!
//! # Components
//!
//! - **Unit converter** ([`models::calculation`]): pure acreage to briquette
//!   conversion, always rounding up
//! - **Debounced input** ([`input`]): raw text edits become validated commits
//!   after a quiet period
//! - **Report controller** ([`report`]): idle/loading/success/error state
//!   machine allowing one request in flight
//! - **Narrative generation** ([`narrative`]): the generator trait and the
//!   Gemini HTTP client
//! - **Session** ([`session`]): the event loop wiring the above together
//! - **Display** ([`display`]): markdown formatting for terminal output
//!
//! # Quick Start
//!
//! ```rust
//! use briquette_core::{compute, parse_acres, Validation};
//!
//! let Validation::Valid(acres) = parse_acres("0.5") else {
//!     panic!("0.5 is a valid acreage");
//! };
//! let result = compute(acres);
//! assert_eq!(result.units_needed, 218);
//! println!("{result}");
//! ```

pub mod config;
pub mod display;
pub mod error;
pub mod input;
pub mod models;
pub mod narrative;
pub mod report;
pub mod session;

// Re-export commonly used types
pub use config::ServiceConfig;
pub use display::{InputFeedback, ReportPanel};
pub use error::{EstimatorError, Result};
pub use input::{parse_acres, DebouncedInput, InputError, Validation, DEFAULT_QUIET_PERIOD};
pub use models::{compute, CalculationResult, ReportState};
pub use narrative::{GeminiClient, GeminiClientBuilder, NarrativeGenerator};
pub use report::{ReportController, GENERIC_FAILURE_MESSAGE};
pub use session::{Session, SessionBuilder, SessionEvent, SessionSnapshot, SessionUpdate};
