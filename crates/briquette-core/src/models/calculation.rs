//! Acreage to briquette conversion.

use serde::{Deserialize, Serialize};

/// Square feet in one acre.
pub const SQ_FT_PER_ACRE: f64 = 43_560.0;

/// Square feet covered by a single briquette.
pub const SQ_FT_PER_BRIQUETTE: f64 = 100.0;

/// Outcome of converting an acreage into a briquette count.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// Acreage the result was computed from
    pub acres: f64,
    /// Total area in square feet
    pub area_sq_ft: f64,
    /// Smallest number of briquettes covering `area_sq_ft`
    pub units_needed: u64,
}

/// Converts an acreage into area and the number of briquettes required.
///
/// The caller is responsible for passing a finite, positive value (see
/// [`crate::input::parse_acres`]). Partial coverage is always rounded up so
/// a plot is never under-provisioned.
///
/// # Examples
///
/// ```rust
/// use briquette_core::compute;
///
/// let result = compute(0.5);
/// assert_eq!(result.area_sq_ft, 21_780.0);
/// assert_eq!(result.units_needed, 218);
/// ```
pub fn compute(acres: f64) -> CalculationResult {
    let area_sq_ft = acres * SQ_FT_PER_ACRE;
    // Saturates for absurdly large inputs.
    let units_needed = (area_sq_ft / SQ_FT_PER_BRIQUETTE).ceil() as u64;

    CalculationResult {
        acres,
        area_sq_ft,
        units_needed,
    }
}

impl CalculationResult {
    /// Whether this result was computed from the same acreage.
    pub fn is_same_acreage(&self, acres: f64) -> bool {
        self.acres == acres
    }
}
