//! Domain models for briquette estimation.
//!
//! - [`calculation`]: the unit converter and its [`CalculationResult`]
//! - [`report_state`]: the tagged [`ReportState`] of a narrative request

pub mod calculation;
pub mod report_state;


pub use calculation::{compute, CalculationResult, SQ_FT_PER_ACRE, SQ_FT_PER_BRIQUETTE};
pub use report_state::ReportState;
