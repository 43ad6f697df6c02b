//! Builder for creating and configuring Session instances.

use std::{sync::Arc, time::Duration};

use tokio::sync::mpsc;

use super::{Session, SessionUpdate};
use crate::{
    input::{DebouncedInput, DEFAULT_QUIET_PERIOD},
    narrative::NarrativeGenerator,
};

/// Builder for creating and configuring [`Session`] instances.
#[derive(Clone)]
pub struct SessionBuilder {
    generator: Arc<dyn NarrativeGenerator>,
    quiet_period: Duration,
}

impl SessionBuilder {
    /// Creates a new builder with the default 400 ms quiet period.
    pub fn new(generator: Arc<dyn NarrativeGenerator>) -> Self {
        Self {
            generator,
            quiet_period: DEFAULT_QUIET_PERIOD,
        }
    }

    /// Sets how long input must stay unchanged before it is committed.
    pub fn with_quiet_period(mut self, quiet_period: Duration) -> Self {
        self.quiet_period = quiet_period;
        self
    }

    /// Builds the session together with the receiving end of its updates.
    pub fn build(self) -> (Session, mpsc::UnboundedReceiver<SessionUpdate>) {
        let (updates_tx, updates_rx) = mpsc::unbounded_channel();
        let session = Session::new(
            DebouncedInput::new(self.quiet_period),
            self.generator,
            updates_tx,
        );
        (session, updates_rx)
    }
}
