//! Inline feedback for the acreage field.

use std::fmt;

use crate::input::InputError;

/// Wrapper type for displaying a rejected acreage next to the field.
pub struct InputFeedback<'a>(pub &'a InputError);

impl fmt::Display for InputFeedback<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Error: {}", self.0)
    }
}
