//! Regex fallback for conversational complaint phrases.
//!
//! The label-based extractor rarely returns a clean span for clauses like
//! "I can't sleep" or "my knee hurts", so symptom-sensitive tools get one
//! more pass over the raw text.

use regex::Regex;

use crate::error::{NluError, NluResult};
use crate::tables::SymptomSpec;

/// Ordered complaint patterns plus the tools and argument they apply to.
#[derive(Debug, Clone)]
pub struct SymptomHeuristic {
    argument: String,
    tools: Vec<String>,
    patterns: Vec<Regex>,
    min_len: usize,
}

impl SymptomHeuristic {
    /// Compile the configured patterns, in order.
    pub fn compile(spec: &SymptomSpec, min_len: usize) -> NluResult<Self> {
        let patterns = spec
            .patterns
            .iter()
            .enumerate()
            .map(|(index, p)| {
                Regex::new(p).map_err(|e| NluError::Pattern {
                    index,
                    message: e.to_string(),
                })
            })
            .collect::<NluResult<Vec<_>>>()?;

        Ok(Self {
            argument: spec.argument.clone(),
            tools: spec.tools.clone(),
            patterns,
            min_len,
        })
    }

    /// Argument name the heuristic fills.
    pub fn argument(&self) -> &str {
        &self.argument
    }

    /// Whether `tool` is symptom-sensitive.
    pub fn applies_to(&self, tool: &str) -> bool {
        self.tools.iter().any(|t| t == tool)
    }

    /// First pattern match on the lower-cased text, trimmed.
    ///
    /// Matches shorter than the configured minimum are treated as noise.
    pub fn extract(&self, text: &str) -> Option<String> {
        let lower = text.to_lowercase();
        for pattern in &self.patterns {
            let Some(group) = pattern.captures(&lower).and_then(|c| c.get(1)) else {
                continue;
            };
            let symptom = group
                .as_str()
                .trim()
                .trim_end_matches([',', '.', ' ']);
            if symptom.chars().count() >= self.min_len {
                tracing::info!(symptom, "heuristic symptom");
                return Some(symptom.to_string());
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables::NluTables;

    fn heuristic() -> SymptomHeuristic {
        NluTables::builtin().unwrap().symptoms
    }

    #[test]
    fn cannot_construction() {
        assert_eq!(
            heuristic().extract("I can't sleep at night, book a doctor").as_deref(),
            Some("sleep at night")
        );
    }

    #[test]
    fn feeling_construction_stops_at_action_verb() {
        assert_eq!(
            heuristic()
                .extract("I'm feeling dizzy please book an appointment")
                .as_deref(),
            Some("dizzy please")
        );
    }

    #[test]
    fn have_construction_to_end_of_text() {
        assert_eq!(
            heuristic().extract("I have a sore throat").as_deref(),
            Some("a sore throat")
        );
    }

    #[test]
    fn suffering_from() {
        assert_eq!(
            heuristic()
                .extract("Suffering from migraines. Need a doctor")
                .as_deref(),
            Some("migraines")
        );
    }

    #[test]
    fn body_part_hurts_keeps_verb() {
        assert_eq!(
            heuristic().extract("my left knee hurts").as_deref(),
            Some("left knee hurts")
        );
    }

    #[test]
    fn pain_in() {
        assert_eq!(
            heuristic()
                .extract("there is pain in my lower back")
                .as_deref(),
            Some("my lower back")
        );
    }

    #[test]
    fn earlier_pattern_wins() {
        // "i can't" (pattern 1) precedes "pain in" (pattern 6).
        assert_eq!(
            heuristic()
                .extract("pain in my arm and i can't lift it")
                .as_deref(),
            Some("lift it")
        );
    }

    #[test]
    fn short_match_is_noise() {
        assert!(heuristic().extract("I have no.").is_none());
    }

    #[test]
    fn no_complaint() {
        assert!(heuristic().extract("book an appointment with dr. smith").is_none());
    }

    #[test]
    fn applies_only_to_symptom_tools() {
        let h = heuristic();
        assert!(h.applies_to("appointment.create"));
        assert!(h.applies_to("appointment.read"));
        assert!(!h.applies_to("routine.create"));
    }

    #[test]
    fn bad_pattern_reports_index() {
        let spec = SymptomSpec {
            patterns: vec!["ok".into(), "(unclosed".into()],
            ..SymptomSpec::default()
        };
        let err = SymptomHeuristic::compile(&spec, 3).unwrap_err();
        assert!(matches!(err, NluError::Pattern { index: 1, .. }));
    }
}
