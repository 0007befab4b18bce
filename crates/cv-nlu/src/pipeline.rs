//! Pipeline orchestrator: text → domain → tool → entities → slots.
//!
//! ```text
//! Start ──► DomainResolved ──► ToolResolved ──► EntitiesExtracted ──► SlotsFilled
//!   │
//!   └──► NoDomain
//! ```
//!
//! Each transition is a plain function call. Nothing persists between
//! `analyse` calls except the gateway's loaded model.

use std::fmt;
use std::sync::Arc;

use cv_protocol::PipelineResult;

use crate::domain::DomainClassifier;
use crate::entities::EntityExtractor;
use crate::gateway::PredictionGateway;
use crate::schema::missing_fields;
use crate::slots::SlotFiller;
use crate::tables::NluTables;
use crate::tool::ToolClassifier;

/// Pipeline states, for tracing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineStage {
    Start,
    DomainResolved,
    ToolResolved,
    EntitiesExtracted,
    SlotsFilled,
    NoDomain,
}

impl PipelineStage {
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::SlotsFilled | Self::NoDomain)
    }
}

impl fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Start => "start",
            Self::DomainResolved => "domain_resolved",
            Self::ToolResolved => "tool_resolved",
            Self::EntitiesExtracted => "entities_extracted",
            Self::SlotsFilled => "slots_filled",
            Self::NoDomain => "no_domain",
        };
        f.write_str(s)
    }
}

/// The hierarchical intent classifier.
pub struct IntentPipeline {
    tables: Arc<NluTables>,
    gateway: PredictionGateway,
}

impl IntentPipeline {
    pub fn new(tables: Arc<NluTables>, gateway: PredictionGateway) -> Self {
        Self { tables, gateway }
    }

    pub fn tables(&self) -> &NluTables {
        &self.tables
    }

    pub fn gateway(&self) -> &PredictionGateway {
        &self.gateway
    }

    /// Classify one utterance. Never fails; degraded inputs yield a
    /// partially resolved result.
    pub fn analyse(&self, text: &str) -> PipelineResult {
        let mut result = PipelineResult::new(text);
        let stage = self.run(text, &mut result);
        debug_assert!(stage.is_terminal());
        tracing::info!(
            stage = %stage,
            domain = result.domain.as_deref().unwrap_or("-"),
            tool = result.tool_name.as_deref().unwrap_or("-"),
            missing = result.missing_fields.len(),
            "analysis complete"
        );
        result
    }

    fn run(&self, text: &str, result: &mut PipelineResult) -> PipelineStage {
        let tables = self.tables.as_ref();
        let mut stage = PipelineStage::Start;
        tracing::debug!(stage = %stage, text, "analysing");

        let domain = DomainClassifier::new(tables, &self.gateway).classify(text);
        let Some(domain_name) = domain.name else {
            return advance(stage, PipelineStage::NoDomain);
        };
        result.domain = Some(domain_name.clone());
        result.confidence = domain.confidence;
        stage = advance(stage, PipelineStage::DomainResolved);

        let tool = ToolClassifier::new(tables, &self.gateway).classify(text, &domain_name);
        let Some(tool_name) = tool.name else {
            // Only reachable with a domain missing from the tables.
            return advance(stage, PipelineStage::NoDomain);
        };
        result.set_tool(tool_name.clone());
        stage = advance(stage, PipelineStage::ToolResolved);

        result.entities = EntityExtractor::new(tables, &self.gateway).extract(text);
        stage = advance(stage, PipelineStage::EntitiesExtracted);

        let slots = SlotFiller::new(tables).fill(&tool_name, &result.entities, text);
        result.filled_args = slots.filled_args;
        result.missing_fields = slots.missing_fields;
        advance(stage, PipelineStage::SlotsFilled)
    }

    /// Recompute `missing_fields` after the caller merged argument values.
    pub fn revalidate(&self, result: &mut PipelineResult) {
        let Some(tool) = result.tool_name.as_deref() else {
            result.missing_fields.clear();
            return;
        };
        result.missing_fields = missing_fields(self.tables.as_ref(), tool, &result.filled_args);
    }
}

fn advance(from: PipelineStage, to: PipelineStage) -> PipelineStage {
    tracing::debug!(from = %from, to = %to, "pipeline stage");
    to
}
