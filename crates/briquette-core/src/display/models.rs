//! Display implementations for domain models.
//!
//! The Display implementations produce markdown for rich terminal display.

use std::fmt;

use super::numbers::{Grouped, SquareFeet};
use crate::models::{CalculationResult, ReportState, SQ_FT_PER_BRIQUETTE};

impl fmt::Display for ReportState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for CalculationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## Total Required")?;
        writeln!(f)?;
        writeln!(f, "**{}** briquettes", Grouped(self.units_needed))?;
        writeln!(f)?;
        writeln!(f, "- Acreage: {} acres", self.acres)?;
        writeln!(f, "- Total Area: {} sq ft", SquareFeet(self.area_sq_ft))?;
        writeln!(f, "- Coverage Rate: 1 per {SQ_FT_PER_BRIQUETTE} sq ft")
    }
}
