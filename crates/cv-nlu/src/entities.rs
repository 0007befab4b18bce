//! Entity extraction over the fixed label vocabulary.

use cv_protocol::ExtractedEntity;

use crate::gateway::PredictionGateway;
use crate::tables::NluTables;

pub struct EntityExtractor<'a> {
    tables: &'a NluTables,
    gateway: &'a PredictionGateway,
}

impl<'a> EntityExtractor<'a> {
    pub fn new(tables: &'a NluTables, gateway: &'a PredictionGateway) -> Self {
        Self { tables, gateway }
    }

    /// Entities sorted by descending score; equal scores keep model order.
    ///
    /// Overlapping spans are not deduplicated.
    pub fn extract(&self, text: &str) -> Vec<ExtractedEntity> {
        let labels: Vec<&str> = self.tables.entity_labels.iter().map(String::as_str).collect();
        let mut entities: Vec<ExtractedEntity> = self
            .gateway
            .predict(text, &labels, self.tables.thresholds.entity)
            .into_iter()
            .map(|p| ExtractedEntity::new(p.label, p.text, p.score))
            .collect();

        // sort_by is stable
        entities.sort_by(|a, b| b.score.total_cmp(&a.score));

        for e in &entities {
            tracing::debug!(label = %e.label, text = %e.text, score = e.score, "entity");
        }
        tracing::info!(count = entities.len(), "entities extracted");
        entities
    }
}
