//! HTTP client for a zero-shot span predictor served over the network.
//!
//! Talks to a small inference server wrapping a GLiNER-style model:
//!
//! - `GET  {host}/health` must answer 2xx before the model is considered loaded.
//! - `POST {host}/predict` with `{model, text, labels, threshold}` returns
//!   `{"entities": [{"label", "text", "score"}, ...]}`.
//!
//! The client is blocking; the classifier core has no async suspension points.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{NluError, NluResult};
use crate::gateway::{ModelLoader, Prediction, ZeroShotModel};

/// Configuration for the remote predictor endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct PredictorConfig {
    /// Inference server base URL.
    #[serde(default = "default_host")]
    pub host: String,
    /// Model the server should use.
    #[serde(default = "default_model")]
    pub model: String,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Whether model predictions are used at all (false = keywords only).
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

fn default_host() -> String {
    "http://localhost:8080".into()
}
fn default_model() -> String {
    "urchade/gliner_medium-v2.1".into()
}
fn default_timeout_secs() -> u64 {
    10
}
fn default_enabled() -> bool {
    true
}

impl Default for PredictorConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            model: default_model(),
            timeout_secs: default_timeout_secs(),
            enabled: default_enabled(),
        }
    }
}

/// Predict request body.
#[derive(Serialize)]
struct PredictRequest<'a> {
    model: &'a str,
    text: &'a str,
    labels: &'a [&'a str],
    threshold: f64,
}

/// Predict response body (only fields we need).
#[derive(Deserialize)]
struct PredictResponse {
    #[serde(default)]
    entities: Vec<Prediction>,
}

/// Loader that checks the server is up and hands out an [`HttpModel`].
pub struct HttpModelLoader {
    config: PredictorConfig,
}

impl HttpModelLoader {
    pub fn new(config: PredictorConfig) -> Self {
        Self { config }
    }
}

impl ModelLoader for HttpModelLoader {
    fn load(&self) -> NluResult<Box<dyn ZeroShotModel>> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(self.config.timeout_secs))
            .build()
            .map_err(|e| NluError::ModelLoad(e.to_string()))?;

        let url = format!("{}/health", self.config.host);
        let response = client
            .get(&url)
            .send()
            .map_err(|e| NluError::ModelLoad(format!("{url}: {e}")))?;
        if !response.status().is_success() {
            return Err(NluError::ModelLoad(format!(
                "{url} returned {}",
                response.status()
            )));
        }

        tracing::info!(host = %self.config.host, model = %self.config.model, "predictor ready");
        Ok(Box::new(HttpModel {
            client,
            config: self.config.clone(),
        }))
    }

    fn describe(&self) -> String {
        format!("{} @ {}", self.config.model, self.config.host)
    }
}

/// Remote zero-shot model.
pub struct HttpModel {
    client: reqwest::blocking::Client,
    config: PredictorConfig,
}

impl ZeroShotModel for HttpModel {
    fn predict_entities(
        &self,
        text: &str,
        labels: &[&str],
        threshold: f64,
    ) -> NluResult<Vec<Prediction>> {
        let url = format!("{}/predict", self.config.host);
        let body = PredictRequest {
            model: &self.config.model,
            text,
            labels,
            threshold,
        };

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .map_err(|e| NluError::Model(e.to_string()))?;

        if !response.status().is_success() {
            return Err(NluError::Model(format!(
                "predictor returned {}",
                response.status()
            )));
        }

        let parsed: PredictResponse = response
            .json()
            .map_err(|e| NluError::Model(format!("invalid predictor response: {e}")))?;

        // Keep only labels we asked for, with sane scores above threshold.
        let predictions = parsed
            .entities
            .into_iter()
            .filter(|p| {
                let known = labels.contains(&p.label.as_str());
                if !known {
                    tracing::warn!(label = %p.label, "predictor returned unrequested label");
                }
                known && (0.0..=1.0).contains(&p.score) && p.score >= threshold
            })
            .collect();
        Ok(predictions)
    }

    fn name(&self) -> &str {
        &self.config.model
    }
}
