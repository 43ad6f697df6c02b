//! Interactive estimation session.
//!
//! A [`Session`] ties the pieces together for one interactive user:
//!
//! ```text
//! ┌──────────────┐   ┌─────────────────┐   ┌──────────────┐   ┌──────────────────┐
//! │ SessionEvent │──▶│ DebouncedInput  │──▶│   compute    │──▶│ ReportController │
//! │ (edits, cmds)│   │ (quiet period)  │   │ (calculation)│   │ (narrative call) │
//! └──────────────┘   └─────────────────┘   └──────────────┘   └──────────────────┘
//!                                                   │                   │
//!                                                   ▼                   ▼
//!                                            SessionUpdate ◀────────────┘
//! ```
//!
//! Everything runs on one task. The loop waits on three things: the next
//! event, the deadline of the pending edit, and the outcome of the single
//! in-flight narrative request. Events are always taken first, so an edit
//! that arrives together with an expiring deadline supersedes it.
//!
//! # Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use briquette_core::{GeminiClient, SessionBuilder, SessionEvent, ServiceConfig};
//! use tokio::sync::mpsc;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = GeminiClient::builder().with_api_key(ServiceConfig::from_env().api_key).build()?;
//! let (session, mut updates) = SessionBuilder::new(Arc::new(client)).build();
//!
//! let (events, rx) = mpsc::unbounded_channel();
//! events.send(SessionEvent::Edit("0.5".to_string()))?;
//! events.send(SessionEvent::EndOfInput)?;
//!
//! let snapshot = session.run(rx).await;
//! assert_eq!(snapshot.calculation.map(|c| c.units_needed), Some(218));
//! while let Ok(update) = updates.try_recv() {
//!     println!("{update:?}");
//! }
//! # Ok(())
//! # }
//! ```

use std::{future, sync::Arc};

use log::{debug, info};
use tokio::{
    sync::mpsc,
    task::JoinHandle,
    time::{self, Instant},
};

use crate::{
    error::Result,
    input::{DebouncedInput, InputError, Settled, Ticket},
    models::{compute, CalculationResult, ReportState},
    narrative::NarrativeGenerator,
    report::{ReportController, ReportTicket},
};

pub mod builder;


pub use builder::SessionBuilder;

/// Input to a running session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// The acreage field now holds this text
    Edit(String),
    /// Generate the logistics report, or retry after a failure
    GenerateReport,
    /// No more events will arrive; finish pending work, then stop
    EndOfInput,
    /// Stop now, discarding pending work
    Quit,
}

/// Observable change published by a running session.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionUpdate {
    /// The raw text was replaced
    Edited(String),
    /// The settled text was rejected
    InputRejected(InputError),
    /// The settled text was empty; the previous calculation stays
    InputCleared,
    /// A new calculation is current
    Calculated(CalculationResult),
    /// The report for `calculation` changed state
    Report {
        calculation: CalculationResult,
        state: ReportState,
    },
}

/// Final state of a session, returned when it stops.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionSnapshot {
    pub raw_input: String,
    pub input_error: Option<InputError>,
    pub calculation: Option<CalculationResult>,
    pub report: ReportState,
}

struct Resolution {
    ticket: ReportTicket,
    outcome: Result<String>,
}

/// State holder for one interactive estimation.
pub struct Session {
    input: DebouncedInput,
    calculation: Option<CalculationResult>,
    report: ReportController,
    generator: Arc<dyn NarrativeGenerator>,
    in_flight: Option<JoinHandle<()>>,
    resolutions_tx: mpsc::UnboundedSender<Resolution>,
    resolutions_rx: mpsc::UnboundedReceiver<Resolution>,
    updates: mpsc::UnboundedSender<SessionUpdate>,
}

impl Session {
    pub(crate) fn new(
        input: DebouncedInput,
        generator: Arc<dyn NarrativeGenerator>,
        updates: mpsc::UnboundedSender<SessionUpdate>,
    ) -> Self {
        let (resolutions_tx, resolutions_rx) = mpsc::unbounded_channel();
        Self {
            input,
            calculation: None,
            report: ReportController::new(),
            generator,
            in_flight: None,
            resolutions_tx,
            resolutions_rx,
            updates,
        }
    }

    /// Processes events until [`SessionEvent::Quit`], or until the event
    /// stream ends and all pending work has settled.
    pub async fn run(
        mut self,
        mut events: mpsc::UnboundedReceiver<SessionEvent>,
    ) -> SessionSnapshot {
        info!(
            "Session started (quiet period {} ms)",
            self.input.quiet_period().as_millis()
        );
        let mut accepting = true;

        loop {
            if !accepting && self.is_idle() {
                debug!("Event stream ended and no work is pending");
                break;
            }

            let pending = self.input.pending();
            tokio::select! {
                biased;

                event = events.recv(), if accepting => match event {
                    Some(SessionEvent::Edit(text)) => self.edit(text),
                    Some(SessionEvent::GenerateReport) => self.start_report(),
                    Some(SessionEvent::EndOfInput) | None => accepting = false,
                    Some(SessionEvent::Quit) => break,
                },
                Some(resolution) = self.resolutions_rx.recv() => self.apply_resolution(resolution),
                ticket = wait_for(pending) => self.settle_input(ticket),
            }
        }

        self.teardown();
        info!("Session closed");
        self.snapshot()
    }

    fn edit(&mut self, text: String) {
        self.input.edit(text.clone(), Instant::now());
        self.publish(SessionUpdate::Edited(text));
    }

    fn settle_input(&mut self, ticket: Ticket) {
        match self.input.settle(ticket) {
            Settled::Stale => {}
            Settled::Cleared => self.publish(SessionUpdate::InputCleared),
            Settled::Rejected(error) => {
                debug!("Rejected input {:?}", self.input.raw());
                self.publish(SessionUpdate::InputRejected(error));
            }
            Settled::Committed(acres) => self.commit(acres),
        }
    }

    fn commit(&mut self, acres: f64) {
        let calculation = compute(acres);
        let changed = !matches!(
            self.calculation,
            Some(current) if current.is_same_acreage(acres)
        );

        let report_was_active = changed && self.discard_report();
        self.calculation = Some(calculation);
        info!(
            "Calculated {} briquettes for {} acres",
            calculation.units_needed, acres
        );
        self.publish(SessionUpdate::Calculated(calculation));

        if report_was_active {
            self.publish_report();
        }
    }

    fn start_report(&mut self) {
        let Some(calculation) = self.calculation else {
            debug!("No calculation yet; ignoring report request");
            return;
        };
        let Some(ticket) = self.report.trigger() else {
            return;
        };
        self.publish_report();

        let generator = Arc::clone(&self.generator);
        let resolutions = self.resolutions_tx.clone();
        self.in_flight = Some(tokio::spawn(async move {
            let outcome = generator
                .generate(calculation.acres, calculation.units_needed)
                .await;
            // The receiver only goes away with the session itself.
            let _ = resolutions.send(Resolution { ticket, outcome });
        }));
    }

    fn apply_resolution(&mut self, resolution: Resolution) {
        if self.report.resolve(resolution.ticket, resolution.outcome) {
            self.in_flight = None;
            self.publish_report();
        }
    }

    /// Aborts any in-flight request and returns the report to idle.
    /// Returns whether the report was anything but idle before.
    fn discard_report(&mut self) -> bool {
        if let Some(handle) = self.in_flight.take() {
            handle.abort();
        }
        let was_idle = matches!(self.report.state(), ReportState::Idle);
        self.report.reset();
        !was_idle
    }

    fn teardown(&mut self) {
        self.input.cancel();
        if self.report.state().is_loading() {
            self.discard_report();
        }
    }

    fn is_idle(&self) -> bool {
        self.input.pending().is_none() && !self.report.state().is_loading()
    }

    fn publish_report(&self) {
        if let Some(calculation) = self.calculation {
            self.publish(SessionUpdate::Report {
                calculation,
                state: self.report.state().clone(),
            });
        }
    }

    fn publish(&self, update: SessionUpdate) {
        if self.updates.send(update).is_err() {
            debug!("No listener for session updates");
        }
    }

    fn snapshot(self) -> SessionSnapshot {
        SessionSnapshot {
            raw_input: self.input.raw().to_string(),
            input_error: self.input.error().cloned(),
            calculation: self.calculation,
            report: self.report.state().clone(),
        }
    }
}

async fn wait_for(pending: Option<Ticket>) -> Ticket {
    match pending {
        Some(ticket) => {
            time::sleep_until(ticket.deadline()).await;
            ticket
        }
        None => future::pending().await,
    }
}
