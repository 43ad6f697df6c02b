//! Report fetch state machine.
//!
//! [`ReportController`] owns the [`ReportState`] of the logistics report and
//! enforces that at most one narrative request is in flight. It does not
//! perform the request itself: [`ReportController::trigger`] hands out a
//! [`ReportTicket`], the caller runs the request, and the outcome is fed back
//! through [`ReportController::resolve`]. Tickets issued before a
//! [`ReportController::reset`] no longer apply.

use log::{debug, info, warn};

use crate::{error::Result, models::ReportState};

/// Message shown for every failed report, whatever the cause.
pub const GENERIC_FAILURE_MESSAGE: &str =
    "Failed to generate insights. Please check your API key configuration.";

/// Handle for one narrative request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportTicket {
    generation: u64,
}

impl ReportTicket {
    /// Generation the ticket was issued for.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Drives a [`ReportState`] through idle, loading, success and error.
#[derive(Debug, Default)]
pub struct ReportController {
    state: ReportState,
    generation: u64,
}

impl ReportController {
    /// Creates a controller in the `Idle` state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state.
    pub fn state(&self) -> &ReportState {
        &self.state
    }

    /// Starts a request.
    ///
    /// Allowed from `Idle` and `Error`. Returns `None` without changing
    /// anything while a request is already in flight, or once a report has
    /// been produced for the current calculation.
    pub fn trigger(&mut self) -> Option<ReportTicket> {
        if !self.state.can_trigger() {
            debug!("Ignoring report trigger while {}", self.state.as_str());
            return None;
        }

        self.generation += 1;
        self.state = ReportState::Loading;
        info!("Report request {} started", self.generation);
        Some(ReportTicket {
            generation: self.generation,
        })
    }

    /// Applies the outcome of the request identified by `ticket`.
    ///
    /// Returns `false` and leaves the state untouched when the ticket is
    /// stale. Empty text counts as a failure. Failure causes are logged and
    /// replaced by [`GENERIC_FAILURE_MESSAGE`].
    pub fn resolve(&mut self, ticket: ReportTicket, outcome: Result<String>) -> bool {
        if ticket.generation != self.generation || !self.state.is_loading() {
            debug!(
                "Dropping stale report result {} (current {}, {})",
                ticket.generation,
                self.generation,
                self.state.as_str()
            );
            return false;
        }

        self.state = match outcome {
            Ok(content) if !content.trim().is_empty() => {
                info!("Report request {} succeeded", ticket.generation);
                ReportState::Success(content)
            }
            Ok(_) => {
                warn!("Report request {} returned no content", ticket.generation);
                ReportState::Error(GENERIC_FAILURE_MESSAGE.to_string())
            }
            Err(e) => {
                warn!("Report request {} failed: {}", ticket.generation, e);
                ReportState::Error(GENERIC_FAILURE_MESSAGE.to_string())
            }
        };
        true
    }

    /// Returns to `Idle`, invalidating any outstanding ticket.
    pub fn reset(&mut self) {
        if self.state.is_loading() {
            debug!("Discarding in-flight report request {}", self.generation);
        }
        self.generation += 1;
        self.state = ReportState::Idle;
    }
}
