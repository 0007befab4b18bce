//! Entity prediction gateway: the only door to the zero-shot model.
//!
//! The model is consumed through one narrow call:
//! `predict(text, labels, threshold) -> [(label, span, score)]`.
//! Loading is explicit and happens at most once per gateway; callers either
//! hand in a pre-loaded model or a loader and call `ensure_loaded()` when
//! they are ready to pay for it. `predict` never fails: model errors are
//! logged and degrade to an empty prediction list, which leaves the
//! classifiers running on keywords alone.

use std::sync::{Mutex, OnceLock};

use serde::{Deserialize, Serialize};

use crate::error::{NluError, NluResult};

/// One labelled span returned by the model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub label: String,
    pub text: String,
    pub score: f64,
}

impl Prediction {
    pub fn new(label: impl Into<String>, text: impl Into<String>, score: f64) -> Self {
        Self {
            label: label.into(),
            text: text.into(),
            score,
        }
    }
}

/// A loaded zero-shot span/label predictor.
pub trait ZeroShotModel: Send + Sync {
    /// Predict labelled spans of `text` among `labels`, keeping scores >= `threshold`.
    fn predict_entities(
        &self,
        text: &str,
        labels: &[&str],
        threshold: f64,
    ) -> NluResult<Vec<Prediction>>;

    /// Model identifier (for logging).
    fn name(&self) -> &str;
}

/// Produces a model on demand. Loading is the expensive, blocking step.
pub trait ModelLoader: Send + Sync {
    fn load(&self) -> NluResult<Box<dyn ZeroShotModel>>;

    /// What will be loaded (for logging).
    fn describe(&self) -> String;
}

/// Owns the model handle and shields callers from its failures.
pub struct PredictionGateway {
    loader: Option<Box<dyn ModelLoader>>,
    model: OnceLock<Box<dyn ZeroShotModel>>,
    /// Serializes slow-path loads so racing first calls load once.
    load_lock: Mutex<()>,
}

impl PredictionGateway {
    /// Gateway that loads through `loader` on `ensure_loaded()` or first use.
    pub fn lazy(loader: impl ModelLoader + 'static) -> Self {
        Self {
            loader: Some(Box::new(loader)),
            model: OnceLock::new(),
            load_lock: Mutex::new(()),
        }
    }

    /// Gateway around an already-loaded model.
    pub fn preloaded(model: impl ZeroShotModel + 'static) -> Self {
        let cell = OnceLock::new();
        let _ = cell.set(Box::new(model) as Box<dyn ZeroShotModel>);
        Self {
            loader: None,
            model: cell,
            load_lock: Mutex::new(()),
        }
    }

    /// Gateway with no model: every prediction is empty.
    pub fn disabled() -> Self {
        Self {
            loader: None,
            model: OnceLock::new(),
            load_lock: Mutex::new(()),
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.model.get().is_some()
    }

    pub fn is_enabled(&self) -> bool {
        self.is_loaded() || self.loader.is_some()
    }

    /// Load the model if it is not loaded yet and return it.
    ///
    /// A failed load is not cached; the next call tries again.
    pub fn ensure_loaded(&self) -> NluResult<&dyn ZeroShotModel> {
        if let Some(model) = self.model.get() {
            return Ok(model.as_ref());
        }
        let Some(loader) = &self.loader else {
            return Err(NluError::ModelLoad("prediction is disabled".into()));
        };

        // A poisoned lock only means another loader panicked; the cell is
        // still consistent.
        let _guard = self
            .load_lock
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        if let Some(model) = self.model.get() {
            return Ok(model.as_ref());
        }

        tracing::info!(model = %loader.describe(), "loading zero-shot model");
        let loaded = loader.load()?;
        Ok(self.model.get_or_init(|| loaded).as_ref())
    }

    /// Predict labelled spans. Never fails; errors yield an empty list.
    pub fn predict(&self, text: &str, labels: &[&str], threshold: f64) -> Vec<Prediction> {
        if labels.is_empty() {
            tracing::debug!("predict called without candidate labels");
            return Vec::new();
        }
        if !self.is_enabled() {
            return Vec::new();
        }

        let model = match self.ensure_loaded() {
            Ok(model) => model,
            Err(e) => {
                tracing::warn!(error = %e, "model unavailable, continuing without predictions");
                return Vec::new();
            }
        };

        match model.predict_entities(text, labels, threshold) {
            Ok(predictions) => predictions,
            Err(e) => {
                tracing::warn!(error = %e, model = model.name(), "model predict failed");
                Vec::new()
            }
        }
    }
}

/// Highest-scoring prediction; the earliest one wins an exact tie.
pub fn best_prediction(predictions: &[Prediction]) -> Option<&Prediction> {
    predictions.iter().fold(None, |best: Option<&Prediction>, p| match best {
        Some(top) if top.score >= p.score => best,
        _ => Some(p),
    })
}
