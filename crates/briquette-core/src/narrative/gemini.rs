//! HTTP client for the Gemini `generateContent` API.

use std::time::Duration;

use async_trait::async_trait;
use log::debug;

use super::{prompt::logistics_prompt, wire, NarrativeGenerator};
use crate::{
    config::{ServiceConfig, API_KEY_VAR},
    error::{EstimatorError, RemoteResultExt, Result, ResultExt},
};

const API_KEY_HEADER: &str = "x-goog-api-key";

/// Narrative generator backed by Gemini.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    http: reqwest::Client,
    api_key: Option<String>,
    model: String,
    endpoint: String,
    temperature: f32,
}

/// Builder for creating and configuring [`GeminiClient`] instances.
#[derive(Debug, Clone)]
pub struct GeminiClientBuilder {
    config: ServiceConfig,
}

impl GeminiClientBuilder {
    /// Creates a builder with default settings and no credential.
    pub fn new() -> Self {
        Self {
            config: ServiceConfig::default(),
        }
    }

    /// Starts from an existing configuration.
    pub fn from_config(config: ServiceConfig) -> Self {
        Self { config }
    }

    /// Sets the credential. `None` keeps the current one.
    pub fn with_api_key(mut self, api_key: Option<impl Into<String>>) -> Self {
        if let Some(key) = api_key {
            self.config.api_key = Some(key.into());
        }
        self
    }

    /// Sets the model name. `None` keeps the current one.
    pub fn with_model(mut self, model: Option<impl Into<String>>) -> Self {
        if let Some(model) = model {
            self.config.model = model.into();
        }
        self
    }

    /// Sets the service base URL, without a trailing path.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.config.endpoint = endpoint.into();
        self
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Builds the client.
    ///
    /// # Errors
    ///
    /// Returns `EstimatorError::Configuration` if the HTTP client cannot be
    /// initialized. A missing credential is not an error at this point.
    pub fn build(self) -> Result<GeminiClient> {
        let ServiceConfig {
            api_key,
            model,
            endpoint,
            temperature,
            timeout,
        } = self.config;

        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .with_context("Failed to initialize HTTP client")?;

        Ok(GeminiClient {
            http,
            api_key,
            model,
            endpoint: endpoint.trim_end_matches('/').to_string(),
            temperature,
        })
    }
}

impl Default for GeminiClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl GeminiClient {
    /// Creates a builder for the client.
    pub fn builder() -> GeminiClientBuilder {
        GeminiClientBuilder::new()
    }

    /// Model the client asks for.
    pub fn model(&self) -> &str {
        &self.model
    }

    fn url(&self) -> String {
        format!("{}/v1beta/models/{}:generateContent", self.endpoint, self.model)
    }
}

#[async_trait]
impl NarrativeGenerator for GeminiClient {
    async fn generate(&self, acres: f64, units_needed: u64) -> Result<String> {
        let api_key = self.api_key.as_deref().ok_or_else(|| {
            EstimatorError::configuration(format!("{API_KEY_VAR} is not set"))
        })?;

        let prompt = logistics_prompt(acres, units_needed);
        let request = wire::GenerateContentRequest::new(&prompt, self.temperature);
        debug!("Requesting narrative from {} ({})", self.endpoint, self.model);

        let response = self
            .http
            .post(self.url())
            .header(API_KEY_HEADER, api_key)
            .json(&request)
            .send()
            .await
            .remote_context("Failed to reach narrative service")?;

        let status = response.status();
        if !status.is_success() {
            return Err(EstimatorError::Status {
                status: status.as_u16(),
            });
        }

        let body = response
            .text()
            .await
            .remote_context("Failed to read narrative response")?;
        let parsed: wire::GenerateContentResponse = serde_json::from_str(&body)?;

        parsed.text().ok_or(EstimatorError::EmptyResponse)
    }
}
