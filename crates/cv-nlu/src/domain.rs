//! Tier-1 classification: which domain (agent) handles the utterance.
//!
//! Blends the zero-shot model's best domain label with keyword scoring over
//! the lower-cased text. A keyword domain that disagrees with the model wins.

use std::fmt;

use crate::gateway::{PredictionGateway, best_prediction};
use crate::keywords::{best_scored, count_hits};
use crate::tables::NluTables;

/// Which signal produced a classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecisionSource {
    Keyword,
    Model,
    /// Model result below threshold, accepted for lack of anything better.
    WeakModel,
    /// Statically configured default (tier-2 only).
    Default,
    /// Nothing matched.
    None,
}

impl fmt::Display for DecisionSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Keyword => "keyword",
            Self::Model => "model",
            Self::WeakModel => "weak_model",
            Self::Default => "default",
            Self::None => "none",
        };
        f.write_str(s)
    }
}

/// Outcome of one tier.
#[derive(Debug, Clone, PartialEq)]
pub struct Decision {
    /// Chosen domain or tool name.
    pub name: Option<String>,
    /// Best model score for the tier (0.0 without a model guess).
    pub confidence: f64,
    pub source: DecisionSource,
}

impl Decision {
    pub(crate) fn new(name: Option<&str>, confidence: f64, source: DecisionSource) -> Self {
        Self {
            name: name.map(str::to_string),
            confidence,
            source,
        }
    }
}

/// Tier-1 domain resolver.
pub struct DomainClassifier<'a> {
    tables: &'a NluTables,
    gateway: &'a PredictionGateway,
}

impl<'a> DomainClassifier<'a> {
    pub fn new(tables: &'a NluTables, gateway: &'a PredictionGateway) -> Self {
        Self { tables, gateway }
    }

    /// Keyword score per domain, in declared order.
    pub fn keyword_scores(&self, text: &str) -> Vec<(&'a str, u32)> {
        let lower = text.to_lowercase();
        let weight = self.tables.thresholds.priority_weight;
        self.tables
            .domains
            .iter()
            .map(|d| {
                let score = count_hits(&lower, &d.keywords)
                    + weight * count_hits(&lower, &d.priority_keywords);
                (d.name.as_str(), score)
            })
            .collect()
    }

    /// Model's best domain and its score.
    fn model_guess(&self, text: &str) -> (Option<&'a str>, f64) {
        let labels = self.tables.domain_labels();
        let predictions = self
            .gateway
            .predict(text, &labels, self.tables.thresholds.domain_model);
        match best_prediction(&predictions) {
            Some(best) => (self.tables.domain_for_label(&best.label), best.score),
            None => (None, 0.0),
        }
    }

    pub fn classify(&self, text: &str) -> Decision {
        let (model, confidence) = self.model_guess(text);
        let scores = self.keyword_scores(text);
        let keyword = best_scored(&scores).map(|(name, _)| name);

        tracing::info!(
            model = model.unwrap_or("-"),
            confidence,
            keyword = keyword.unwrap_or("-"),
            "tier-1 guesses"
        );

        let accept = self.tables.thresholds.domain_accept;
        let decision = match (keyword, model) {
            (Some(kw), m) if m != Some(kw) => {
                if m.is_some() {
                    tracing::info!(keyword = kw, model = m.unwrap_or("-"), "keyword overrides model");
                }
                Decision::new(Some(kw), confidence, DecisionSource::Keyword)
            }
            (_, Some(m)) if confidence >= accept => {
                Decision::new(Some(m), confidence, DecisionSource::Model)
            }
            (Some(kw), _) => Decision::new(Some(kw), confidence, DecisionSource::Keyword),
            (None, Some(m)) => Decision::new(Some(m), confidence, DecisionSource::WeakModel),
            (None, None) => Decision::new(None, confidence, DecisionSource::None),
        };

        tracing::info!(
            domain = decision.name.as_deref().unwrap_or("-"),
            source = %decision.source,
            "tier-1 resolved"
        );
        decision
    }
}
