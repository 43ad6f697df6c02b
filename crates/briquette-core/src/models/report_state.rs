//! State of a narrative report request.

use serde::{Deserialize, Serialize};

/// Type-safe state of the logistics report for the current calculation.
///
/// Loading and failure can never be set at the same time; the payload lives
/// on the variant it belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "state", content = "detail", rename_all = "lowercase")]
pub enum ReportState {
    /// No report requested for the current calculation
    #[default]
    Idle,

    /// A request is in flight
    Loading,

    /// The service produced a report
    Success(String),

    /// The request failed; the payload is a user-facing message
    Error(String),
}

impl ReportState {
    /// Short lowercase label for logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportState::Idle => "idle",
            ReportState::Loading => "loading",
            ReportState::Success(_) => "success",
            ReportState::Error(_) => "error",
        }
    }

    /// Returns true while a request is in flight.
    pub fn is_loading(&self) -> bool {
        matches!(self, ReportState::Loading)
    }

    /// Whether a new request may start from this state.
    pub fn can_trigger(&self) -> bool {
        matches!(self, ReportState::Idle | ReportState::Error(_))
    }

    /// Report text, if one was generated.
    pub fn content(&self) -> Option<&str> {
        match self {
            ReportState::Success(content) => Some(content),
            _ => None,
        }
    }
}
