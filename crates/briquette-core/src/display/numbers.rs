//! Number display utilities.

use std::fmt;

/// Integer with comma-separated thousands, e.g. `21,780`.
pub struct Grouped(pub u64);

impl fmt::Display for Grouped {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = self.0.to_string();
        let len = digits.len();
        for (i, digit) in digits.chars().enumerate() {
            if i > 0 && (len - i) % 3 == 0 {
                f.write_str(",")?;
            }
            write!(f, "{digit}")?;
        }
        Ok(())
    }
}

/// Area with grouped thousands and at most two decimals.
///
/// Trailing zeros are dropped, so `21780.0` shows as `21,780` and
/// `13068.000000000002` as `13,068`.
pub struct SquareFeet(pub f64);

impl fmt::Display for SquareFeet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rounded = format!("{:.2}", self.0);
        let (whole, fraction) = rounded.split_once('.').unwrap_or((rounded.as_str(), ""));
        let fraction = fraction.trim_end_matches('0');

        match whole.parse::<u64>() {
            Ok(whole) => write!(f, "{}", Grouped(whole))?,
            Err(_) => f.write_str(whole)?,
        }
        if !fraction.is_empty() {
            write!(f, ".{fraction}")?;
        }
        Ok(())
    }
}
