//! Debounced acreage input.
//!
//! [`DebouncedInput`] turns a stream of raw text edits into validated
//! numeric commits. Every edit is stored immediately and re-arms a quiet
//! period; only an edit that survives the whole quiet period is parsed.
//!
//! The controller is a plain state machine over [`Instant`]s. It does not
//! own a timer: the caller sleeps until [`DebouncedInput::deadline`] and then
//! hands back the [`Ticket`] it received from [`DebouncedInput::edit`]. A
//! ticket from a superseded edit, or one issued before [`DebouncedInput::cancel`],
//! is ignored.

use std::time::Duration;

use log::debug;
use thiserror::Error;
use tokio::time::Instant;

/// Default inactivity period before an edit is committed.
pub const DEFAULT_QUIET_PERIOD: Duration = Duration::from_millis(400);

/// Field-level validation failure for the acreage input.
///
/// Both variants share the same user-facing text; the variant is kept for
/// callers and logs that care about the distinction.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InputError {
    /// The text is not a finite number
    #[error("Please enter a valid positive number.")]
    NotANumber { raw: String },
    /// The number is zero or negative
    #[error("Please enter a valid positive number.")]
    NotPositive { value: f64 },
}

/// Outcome of validating raw acreage text.
#[derive(Debug, Clone, PartialEq)]
pub enum Validation {
    /// Nothing entered; not an error, nothing to commit
    Empty,
    /// Entered text failed validation
    Invalid(InputError),
    /// A finite, positive acreage
    Valid(f64),
}

/// Validates raw acreage text.
///
/// Surrounding whitespace is ignored. Non-finite values (`inf`, `NaN`) are
/// rejected along with anything that does not parse.
pub fn parse_acres(raw: &str) -> Validation {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Validation::Empty;
    }

    let value = match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => {
            return Validation::Invalid(InputError::NotANumber {
                raw: trimmed.to_string(),
            })
        }
    };

    if value <= 0.0 {
        return Validation::Invalid(InputError::NotPositive { value });
    }

    Validation::Valid(value)
}

/// Handle for one scheduled settle of the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket {
    generation: u64,
    deadline: Instant,
}

impl Ticket {
    /// When the quiet period for this edit ends.
    pub fn deadline(&self) -> Instant {
        self.deadline
    }
}

/// Result of settling a ticket.
#[derive(Debug, Clone, PartialEq)]
pub enum Settled {
    /// The ticket was superseded or cancelled; nothing changed
    Stale,
    /// The input was empty; any error was cleared
    Cleared,
    /// The input was rejected; the error is now set
    Rejected(InputError),
    /// The input was accepted
    Committed(f64),
}

/// Raw text input that commits a parsed acreage after a quiet period.
#[derive(Debug)]
pub struct DebouncedInput {
    raw: String,
    error: Option<InputError>,
    quiet_period: Duration,
    generation: u64,
    pending: Option<Ticket>,
}

impl DebouncedInput {
    /// Creates an empty input with the given quiet period.
    pub fn new(quiet_period: Duration) -> Self {
        Self {
            raw: String::new(),
            error: None,
            quiet_period,
            generation: 0,
            pending: None,
        }
    }

    /// Current raw text, exactly as last edited.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Current validation error, if the last settled edit was rejected.
    pub fn error(&self) -> Option<&InputError> {
        self.error.as_ref()
    }

    /// Configured quiet period.
    pub fn quiet_period(&self) -> Duration {
        self.quiet_period
    }

    /// Deadline of the pending settle, if an edit is waiting.
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.map(|ticket| ticket.deadline)
    }

    /// The ticket for the pending settle, if any.
    pub fn pending(&self) -> Option<Ticket> {
        self.pending
    }

    /// Records an edit and restarts the quiet period.
    ///
    /// Any previously issued ticket becomes stale.
    pub fn edit(&mut self, text: impl Into<String>, now: Instant) -> Ticket {
        self.raw = text.into();
        self.generation += 1;
        let ticket = Ticket {
            generation: self.generation,
            deadline: now + self.quiet_period,
        };
        self.pending = Some(ticket);
        ticket
    }

    /// Validates the input once its quiet period has elapsed.
    ///
    /// Only the ticket of the most recent edit is honored, and only once.
    pub fn settle(&mut self, ticket: Ticket) -> Settled {
        if self.pending != Some(ticket) || ticket.generation != self.generation {
            debug!(
                "Ignoring stale input ticket {} (current {})",
                ticket.generation, self.generation
            );
            return Settled::Stale;
        }
        self.pending = None;

        match parse_acres(&self.raw) {
            Validation::Empty => {
                self.error = None;
                Settled::Cleared
            }
            Validation::Invalid(error) => {
                self.error = Some(error.clone());
                Settled::Rejected(error)
            }
            Validation::Valid(acres) => {
                self.error = None;
                Settled::Committed(acres)
            }
        }
    }

    /// Drops the pending settle so that no commit can fire.
    pub fn cancel(&mut self) {
        if self.pending.take().is_some() {
            debug!("Cancelled pending input settle");
        }
        self.generation += 1;
    }
}

impl Default for DebouncedInput {
    fn default() -> Self {
        Self::new(DEFAULT_QUIET_PERIOD)
    }
}
