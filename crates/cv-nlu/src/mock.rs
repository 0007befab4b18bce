//! Deterministic mock model for testing.
//!
//! Serves scripted predictions instead of running a real zero-shot model so
//! the classifier can be exercised on any machine, with no model download.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use crate::error::{NluError, NluResult};
use crate::gateway::{ModelLoader, Prediction, ZeroShotModel};

/// Shared call/load counter for test assertions.
#[derive(Debug, Clone, Default)]
pub struct Counter(Arc<AtomicUsize>);

impl Counter {
    pub fn get(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }

    fn bump(&self) {
        self.0.fetch_add(1, Ordering::SeqCst);
    }
}

/// A model that returns pre-loaded predictions.
///
/// A query returns every scripted prediction whose label is among the
/// candidate labels and whose score meets the threshold, in script order.
#[derive(Debug, Clone, Default)]
pub struct MockModel {
    script: Vec<Prediction>,
    fail: bool,
    calls: Counter,
}

impl MockModel {
    /// A model with no scripted predictions.
    pub fn new() -> Self {
        Self::default()
    }

    /// A model whose every call fails.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    /// Script one prediction.
    pub fn with(mut self, label: &str, text: &str, score: f64) -> Self {
        self.script.push(Prediction::new(label, text, score));
        self
    }

    /// Handle counting `predict_entities` calls.
    pub fn call_counter(&self) -> Counter {
        self.calls.clone()
    }
}

impl ZeroShotModel for MockModel {
    fn predict_entities(
        &self,
        _text: &str,
        labels: &[&str],
        threshold: f64,
    ) -> NluResult<Vec<Prediction>> {
        self.calls.bump();
        if self.fail {
            return Err(NluError::Model("mock model failure".into()));
        }
        Ok(self
            .script
            .iter()
            .filter(|p| labels.contains(&p.label.as_str()) && p.score >= threshold)
            .cloned()
            .collect())
    }

    fn name(&self) -> &str {
        "mock"
    }
}

/// Loader handing out a clone of a mock model, or failing.
#[derive(Debug, Clone)]
pub struct MockLoader {
    model: Option<MockModel>,
    loads: Counter,
    delay: Option<Duration>,
}

impl MockLoader {
    pub fn new(model: MockModel) -> Self {
        Self {
            model: Some(model),
            loads: Counter::default(),
            delay: None,
        }
    }

    /// A loader whose every load fails.
    pub fn failing() -> Self {
        Self {
            model: None,
            loads: Counter::default(),
            delay: None,
        }
    }

    /// Sleep for `delay` on every load, like a real model download.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Handle counting `load` calls.
    pub fn load_counter(&self) -> Counter {
        self.loads.clone()
    }
}

impl ModelLoader for MockLoader {
    fn load(&self) -> NluResult<Box<dyn ZeroShotModel>> {
        self.loads.bump();
        if let Some(delay) = self.delay {
            std::thread::sleep(delay);
        }
        match &self.model {
            Some(model) => Ok(Box::new(model.clone())),
            None => Err(NluError::ModelLoad("mock loader failure".into())),
        }
    }

    fn describe(&self) -> String {
        "mock".into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filters_by_label_and_threshold() {
        let model = MockModel::new()
            .with("frequency", "daily", 0.8)
            .with("time reference", "morning", 0.2)
            .with("health consultation", "routine", 0.6);

        let preds = model
            .predict_entities("x", &["frequency", "time reference"], 0.35)
            .unwrap();
        assert_eq!(preds.len(), 1);
        assert_eq!(preds[0].text, "daily");
    }

    #[test]
    fn failing_model_errors_and_counts() {
        let model = MockModel::failing();
        let calls = model.call_counter();
        assert!(model.predict_entities("x", &["a"], 0.1).is_err());
        assert_eq!(calls.get(), 1);
    }
}
