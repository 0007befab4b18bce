//! Shared harness: classifier + dispatch table wired the way the chat
//! front end wires them.

#![allow(dead_code)]

use std::sync::Arc;

use cv_nlu::mock::MockModel;
use cv_nlu::{IntentPipeline, NluTables, PredictionGateway};
use cv_protocol::{PipelineResult, RouteOutcome};
use cv_router::DispatchTable;

pub struct TestHarness {
    pub pipeline: IntentPipeline,
    pub router: DispatchTable,
}

impl TestHarness {
    /// Built-in tables, scripted model.
    pub fn with_model(model: MockModel) -> Self {
        Self::new(PredictionGateway::preloaded(model))
    }

    /// Built-in tables, no model at all.
    pub fn keyword_only() -> Self {
        Self::new(PredictionGateway::disabled())
    }

    pub fn new(gateway: PredictionGateway) -> Self {
        Self {
            pipeline: IntentPipeline::new(Arc::new(NluTables::builtin().unwrap()), gateway),
            router: DispatchTable::with_defaults(),
        }
    }

    /// Classify then route.
    pub fn run(&self, text: &str) -> (PipelineResult, RouteOutcome) {
        let result = self.pipeline.analyse(text);
        let outcome = self.router.route(&result);
        (result, outcome)
    }

    /// Answer the missing fields, re-validate and route again.
    pub fn answer(&self, result: &mut PipelineResult, answers: &[(&str, &str)]) -> RouteOutcome {
        for (field, value) in answers {
            result.supply(*field, *value);
        }
        self.pipeline.revalidate(result);
        self.router.route(result)
    }
}
