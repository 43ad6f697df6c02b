//! Markdown formatting for estimates and reports.
//!
//! Domain models implement [`std::fmt::Display`] directly ([`models`]);
//! context-specific output goes through small wrapper types:
//!
//! - [`numbers`]: thousands grouping for counts and areas
//! - [`report`]: the report panel for each [`crate::ReportState`]
//! - [`status`]: inline feedback for the acreage field
//!
//! All output is markdown, rendered by the CLI's terminal renderer or shown
//! as plain text.
//!
//! ```rust
//! use briquette_core::{compute, display::ReportPanel, ReportState};
//!
//! let calculation = compute(0.5);
//! assert!(calculation.to_string().contains("**218** briquettes"));
//!
//! let panel = ReportPanel::new(&calculation, &ReportState::Loading);
//! assert!(panel.to_string().contains("Analyzing Project Scale"));
//! ```

pub mod models;
pub mod numbers;
pub mod report;
pub mod status;

pub use numbers::{Grouped, SquareFeet};
pub use report::ReportPanel;
pub use status::InputFeedback;
