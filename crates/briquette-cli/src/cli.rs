//! Command handlers for the Briquette CLI.
//!
//! Two ways in:
//!
//! - `estimate`: validate one acreage, print the estimate and, on request,
//!   run the report flow once.
//! - `interactive`: every stdin line replaces the acreage field. Lines go
//!   through the core session, so a burst of edits produces one estimate
//!   after the quiet period. `report`/`retry` request the logistics plan and
//!   `quit` (or Ctrl-C) leaves immediately; end of input finishes pending
//!   work first.

use std::{
    io::{self, BufRead},
    sync::Arc,
    thread,
    time::Duration,
};

use anyhow::{bail, Context, Result};
use briquette_core::{
    compute, parse_acres, EstimatorError, GeminiClient, InputFeedback, NarrativeGenerator,
    ReportController, ReportPanel, ReportState, SessionBuilder, SessionEvent, SessionUpdate,
    Validation,
};
use clap::Args;
use log::{debug, info};
use tokio::{signal, sync::mpsc};

use crate::renderer::TerminalRenderer;

const WELCOME: &str = "# Briquette\n\n\
    Enter the total acreage. Estimates use 43,560 sq ft per acre and one \
    briquette per 100 sq ft.\n\n\
    Commands: `report` generate a logistics plan, `retry` try again after a \
    failure, `quit` exit.\n";

const REPORT_HINT: &str = "Type `report` to generate a logistics plan.\n";
const RETRY_HINT: &str = "Type `retry` to try again.\n";

/// Calculate briquettes for an acreage
#[derive(Args)]
pub struct EstimateArgs {
    /// Total acreage, e.g. 0.5
    #[arg(allow_hyphen_values = true)]
    pub acres: String,

    /// Also generate a logistics plan for the estimate
    #[arg(short, long)]
    pub report: bool,
}

/// Interactive session options
#[derive(Args)]
pub struct InteractiveArgs {
    /// Milliseconds of inactivity before an edit is calculated
    #[arg(long, default_value_t = 400)]
    pub quiet_period_ms: u64,
}

impl Default for InteractiveArgs {
    fn default() -> Self {
        Self {
            quiet_period_ms: 400,
        }
    }
}

/// Maps one line of interactive input to a session event.
pub fn parse_line(line: &str) -> SessionEvent {
    match line.trim().to_lowercase().as_str() {
        "report" | "r" | "retry" => SessionEvent::GenerateReport,
        "quit" | "q" | "exit" => SessionEvent::Quit,
        _ => SessionEvent::Edit(line.to_string()),
    }
}

pub struct Cli {
    generator: Arc<GeminiClient>,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(generator: GeminiClient, renderer: TerminalRenderer) -> Self {
        Self {
            generator: Arc::new(generator),
            renderer,
        }
    }

    pub async fn estimate(&self, args: EstimateArgs) -> Result<()> {
        let acres = match parse_acres(&args.acres) {
            Validation::Valid(acres) => acres,
            Validation::Empty => {
                return Err(EstimatorError::invalid_input("acres")
                    .with_reason("an acreage is required")
                    .into())
            }
            Validation::Invalid(error) => {
                return Err(EstimatorError::invalid_input("acres")
                    .with_reason(error.to_string())
                    .into())
            }
        };

        let calculation = compute(acres);
        self.renderer.render(&calculation.to_string())?;

        if !args.report {
            return Ok(());
        }

        let mut controller = ReportController::new();
        if let Some(ticket) = controller.trigger() {
            self.renderer
                .render(&ReportPanel::new(&calculation, controller.state()).to_string())?;
            let outcome = self
                .generator
                .generate(calculation.acres, calculation.units_needed)
                .await;
            controller.resolve(ticket, outcome);
        }

        self.renderer
            .render(&ReportPanel::new(&calculation, controller.state()).to_string())?;

        if let ReportState::Error(_) = controller.state() {
            bail!("Report generation failed");
        }
        Ok(())
    }

    pub async fn interactive(&self, args: InteractiveArgs) -> Result<()> {
        let quiet_period = Duration::from_millis(args.quiet_period_ms);
        let (session, mut updates) = SessionBuilder::new(self.generator.clone())
            .with_quiet_period(quiet_period)
            .build();
        let (events_tx, events_rx) = mpsc::unbounded_channel();

        spawn_stdin_reader(events_tx.clone()).context("Failed to start input reader")?;
        tokio::spawn(async move {
            if signal::ctrl_c().await.is_ok() {
                info!("Interrupted");
                let _ = events_tx.send(SessionEvent::Quit);
            }
        });

        self.renderer.render(WELCOME)?;

        let render = async {
            while let Some(update) = updates.recv().await {
                self.render_update(update)?;
            }
            Ok::<(), anyhow::Error>(())
        };
        let (snapshot, rendered) = tokio::join!(session.run(events_rx), render);
        rendered?;

        debug!("Session finished: {snapshot:?}");
        Ok(())
    }

    fn render_update(&self, update: SessionUpdate) -> Result<()> {
        match update {
            SessionUpdate::Edited(raw) => debug!("Edited: {raw:?}"),
            SessionUpdate::InputCleared => debug!("Input cleared; keeping last estimate"),
            SessionUpdate::InputRejected(error) => {
                self.renderer.render(&InputFeedback(&error).to_string())?;
            }
            SessionUpdate::Calculated(calculation) => {
                self.renderer.render(&calculation.to_string())?;
                self.renderer.hint(REPORT_HINT)?;
            }
            SessionUpdate::Report { calculation, state } => {
                self.renderer
                    .render(&ReportPanel::new(&calculation, &state).to_string())?;
                match state {
                    ReportState::Idle => self.renderer.hint(REPORT_HINT)?,
                    ReportState::Error(_) => self.renderer.hint(RETRY_HINT)?,
                    ReportState::Loading | ReportState::Success(_) => {}
                }
            }
        }
        Ok(())
    }
}

/// Reads stdin on a dedicated thread so a pending read never holds up
/// shutdown.
fn spawn_stdin_reader(events: mpsc::UnboundedSender<SessionEvent>) -> io::Result<()> {
    thread::Builder::new()
        .name("stdin-reader".to_string())
        .spawn(move || {
            for line in io::stdin().lock().lines() {
                let Ok(line) = line else {
                    break;
                };
                let event = parse_line(&line);
                let quit = event == SessionEvent::Quit;
                if events.send(event).is_err() || quit {
                    return;
                }
            }
            let _ = events.send(SessionEvent::EndOfInput);
        })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_line_commands() {
        assert_eq!(parse_line("report"), SessionEvent::GenerateReport);
        assert_eq!(parse_line(" Retry "), SessionEvent::GenerateReport);
        assert_eq!(parse_line("q"), SessionEvent::Quit);
        assert_eq!(parse_line("EXIT"), SessionEvent::Quit);
    }

    #[test]
    fn test_parse_line_edits_keep_raw_text() {
        assert_eq!(parse_line("1.5"), SessionEvent::Edit("1.5".to_string()));
        assert_eq!(parse_line(" 2 "), SessionEvent::Edit(" 2 ".to_string()));
        assert_eq!(parse_line(""), SessionEvent::Edit(String::new()));
    }

    #[test]
    fn test_interactive_defaults() {
        assert_eq!(InteractiveArgs::default().quiet_period_ms, 400);
    }
}
