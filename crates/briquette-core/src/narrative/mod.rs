//! Narrative generation.
//!
//! The logistics narrative comes from an external text generation service.
//! The rest of the crate only sees the [`NarrativeGenerator`] trait: an
//! opaque call that either yields text or fails. [`GeminiClient`] is the
//! production implementation.

use async_trait::async_trait;

use crate::error::Result;

pub mod gemini;
pub mod prompt;
mod wire;

pub use gemini::{GeminiClient, GeminiClientBuilder};
pub use prompt::{logistics_prompt, SECTION_HEADINGS};

/// Produces a logistics narrative for an estimate.
#[async_trait]
pub trait NarrativeGenerator: Send + Sync {
    /// Generates the narrative for `acres` covered by `units_needed`
    /// briquettes.
    ///
    /// # Errors
    ///
    /// Any failure, including a missing credential, is returned as an error.
    /// Callers must not show the error text to end users.
    async fn generate(&self, acres: f64, units_needed: u64) -> Result<String>;
}
