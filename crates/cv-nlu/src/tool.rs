//! Tier-2 classification: which tool inside the resolved domain.
//!
//! Tools are scored with two keyword buckets, verbs and topic nouns, with
//! nouns weighted higher. A strong keyword score overrides a differing model
//! pick; every resolved domain yields some tool.

use crate::domain::{Decision, DecisionSource};
use crate::gateway::{PredictionGateway, best_prediction};
use crate::keywords::{best_scored, count_hits};
use crate::tables::{DomainSpec, NluTables};

/// Tier-2 tool resolver.
pub struct ToolClassifier<'a> {
    tables: &'a NluTables,
    gateway: &'a PredictionGateway,
}

impl<'a> ToolClassifier<'a> {
    pub fn new(tables: &'a NluTables, gateway: &'a PredictionGateway) -> Self {
        Self { tables, gateway }
    }

    /// Keyword score for each tool of `domain`, in declared order.
    pub fn keyword_scores(&self, text: &str, domain: &'a DomainSpec) -> Vec<(&'a str, u32)> {
        let lower = text.to_lowercase();
        let t = &self.tables.thresholds;
        domain
            .tool_names()
            .into_iter()
            .map(|name| {
                let score = self.tables.tool(name).map_or(0, |spec| {
                    t.verb_weight * count_hits(&lower, &spec.verbs)
                        + t.noun_weight * count_hits(&lower, &spec.nouns)
                });
                (name, score)
            })
            .collect()
    }

    fn model_guess(&self, text: &str, domain: &'a DomainSpec) -> (Option<&'a str>, f64) {
        let labels = domain.tool_labels();
        let predictions = self
            .gateway
            .predict(text, &labels, self.tables.thresholds.tool_model);
        match best_prediction(&predictions) {
            Some(best) => (domain.tool_for_label(&best.label), best.score),
            None => (None, 0.0),
        }
    }

    /// Resolve the tool for `text` under `domain`.
    ///
    /// An unknown domain yields no tool.
    pub fn classify(&self, text: &str, domain: &str) -> Decision {
        let Some(spec) = self.tables.domain(domain) else {
            tracing::warn!(domain, "unknown domain, cannot resolve tool");
            return Decision::new(None, 0.0, DecisionSource::None);
        };

        let scores = self.keyword_scores(text, spec);
        let keyword = best_scored(&scores);
        let (model, confidence) = self.model_guess(text, spec);

        tracing::info!(
            domain,
            keyword = keyword.map_or("-", |(name, _)| name),
            keyword_score = keyword.map_or(0, |(_, score)| score),
            model = model.unwrap_or("-"),
            confidence,
            "tier-2 guesses"
        );

        let t = &self.tables.thresholds;
        let decision = match (keyword, model) {
            (Some((kw, score)), m) if score >= t.tool_keyword_override && m != Some(kw) => {
                if m.is_some() {
                    tracing::info!(keyword = kw, score, model = m.unwrap_or("-"), "keyword overrides model");
                }
                Decision::new(Some(kw), confidence, DecisionSource::Keyword)
            }
            (_, Some(m)) if confidence >= t.tool_accept => {
                Decision::new(Some(m), confidence, DecisionSource::Model)
            }
            (Some((kw, _)), _) => Decision::new(Some(kw), confidence, DecisionSource::Keyword),
            (None, _) => Decision::new(Some(spec.default_tool.as_str()), 0.0, DecisionSource::Default),
        };

        tracing::info!(
            tool = decision.name.as_deref().unwrap_or("-"),
            source = %decision.source,
            "tier-2 resolved"
        );
        decision
    }
}
