//! Report panel formatting.

use std::fmt;

use super::numbers::Grouped;
use crate::models::{CalculationResult, ReportState};

/// Wrapper type for displaying the report area for a calculation.
///
/// Each [`ReportState`] gets its own panel: a call to action while idle, a
/// progress note while loading, the failure message, or the generated plan.
///
/// # Examples
///
/// ```rust
/// use briquette_core::{compute, display::ReportPanel, ReportState};
///
/// let calculation = compute(2.0);
/// let state = ReportState::Error("Something went wrong.".to_string());
/// let output = ReportPanel::new(&calculation, &state).to_string();
/// assert!(output.contains("## Analysis Failed"));
/// assert!(output.contains("Something went wrong."));
/// ```
pub struct ReportPanel<'a> {
    pub calculation: &'a CalculationResult,
    pub state: &'a ReportState,
}

impl<'a> ReportPanel<'a> {
    /// Create a new panel for a calculation and its report state.
    pub fn new(calculation: &'a CalculationResult, state: &'a ReportState) -> Self {
        Self { calculation, state }
    }
}

impl fmt::Display for ReportPanel<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.state {
            ReportState::Idle => {
                writeln!(f, "## Ready for Analysis")?;
                writeln!(f)?;
                writeln!(
                    f,
                    "Get a detailed logistics plan, including weight estimates, \
                     application time, and pro tips generated by Gemini AI."
                )
            }
            ReportState::Loading => {
                writeln!(f, "## Analyzing Project Scale...")?;
                writeln!(f)?;
                writeln!(
                    f,
                    "Gemini is calculating logistics for {} units across {} acres.",
                    Grouped(self.calculation.units_needed),
                    self.calculation.acres
                )
            }
            ReportState::Error(message) => {
                writeln!(f, "## Analysis Failed")?;
                writeln!(f)?;
                writeln!(f, "{message}")
            }
            ReportState::Success(content) => {
                writeln!(f, "# Logistics Plan")?;
                writeln!(f)?;
                writeln!(f, "*AI Generated Report*")?;
                writeln!(f)?;
                writeln!(f, "{}", content.trim_end())
            }
        }
    }
}
