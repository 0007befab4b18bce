use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A labelled span pulled out of the utterance by the entity extractor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractedEntity {
    /// Entity label from the fixed vocabulary (e.g., "time reference").
    pub label: String,
    /// Verbatim span from the input text.
    pub text: String,
    /// Model confidence in [0, 1], rounded to 4 decimals.
    pub score: f64,
}

impl ExtractedEntity {
    pub fn new(label: impl Into<String>, text: impl Into<String>, score: f64) -> Self {
        Self {
            label: label.into(),
            text: text.into(),
            score: round_score(score),
        }
    }
}

/// Round a confidence to 4 decimal places.
pub fn round_score(score: f64) -> f64 {
    (score * 10_000.0).round() / 10_000.0
}

/// Complete output of one `analyse` call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineResult {
    /// Original input, untouched.
    pub raw_text: String,
    /// Resolved top-level domain (receptionist / nurse / doctor).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    /// Resolved tool identifier (e.g., "appointment.create").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
    /// Always equal to `action`; kept separate for dispatch call sites.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tool_name: Option<String>,
    /// Extracted entities, highest score first.
    #[serde(default)]
    pub entities: Vec<ExtractedEntity>,
    /// Argument name → value for the resolved tool.
    #[serde(default)]
    pub filled_args: BTreeMap<String, String>,
    /// Required arguments still without a value, in schema order.
    #[serde(default)]
    pub missing_fields: Vec<String>,
    /// Tier-1 model score (diagnostic only).
    #[serde(default)]
    pub confidence: f64,
}

/// Which branch a downstream consumer should take for a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResultStatus {
    /// No domain (or tool) could be resolved; ask the user to rephrase.
    Unresolved,
    /// A tool was resolved but required arguments are missing.
    NeedsInput,
    /// Tool and all required arguments are known.
    Ready,
}

impl PipelineResult {
    /// An empty result holding only the input text.
    pub fn new(raw_text: impl Into<String>) -> Self {
        Self {
            raw_text: raw_text.into(),
            domain: None,
            action: None,
            tool_name: None,
            entities: Vec::new(),
            filled_args: BTreeMap::new(),
            missing_fields: Vec::new(),
            confidence: 0.0,
        }
    }

    /// Set both `action` and `tool_name`.
    pub fn set_tool(&mut self, tool: impl Into<String>) {
        let tool = tool.into();
        self.action = Some(tool.clone());
        self.tool_name = Some(tool);
    }

    pub fn status(&self) -> ResultStatus {
        if self.domain.is_none() || self.tool_name.is_none() {
            ResultStatus::Unresolved
        } else if !self.missing_fields.is_empty() {
            ResultStatus::NeedsInput
        } else {
            ResultStatus::Ready
        }
    }

    /// Merge a user-supplied argument value and drop it from `missing_fields`.
    ///
    /// An explicit answer replaces any value already present.
    pub fn supply(&mut self, argument: impl Into<String>, value: impl Into<String>) {
        let argument = argument.into();
        self.missing_fields.retain(|f| *f != argument);
        self.filled_args.insert(argument, value.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entity_score_is_rounded() {
        let e = ExtractedEntity::new("frequency", "daily", 0.876_543_21);
        assert_eq!(e.score, 0.8765);
    }

    #[test]
    fn new_result_is_unresolved() {
        let r = PipelineResult::new("hello");
        assert_eq!(r.raw_text, "hello");
        assert_eq!(r.status(), ResultStatus::Unresolved);
        assert!(r.entities.is_empty());
        assert!(r.filled_args.is_empty());
    }

    #[test]
    fn set_tool_keeps_action_and_tool_name_equal() {
        let mut r = PipelineResult::new("x");
        r.set_tool("routine.create");
        assert_eq!(r.action.as_deref(), Some("routine.create"));
        assert_eq!(r.action, r.tool_name);
    }

    #[test]
    fn status_branches() {
        let mut r = PipelineResult::new("x");
        r.domain = Some("doctor".into());
        r.set_tool("routine.create");
        r.missing_fields = vec!["time".into()];
        assert_eq!(r.status(), ResultStatus::NeedsInput);

        r.supply("time", "8am");
        assert_eq!(r.status(), ResultStatus::Ready);
        assert_eq!(r.filled_args["time"], "8am");
    }

    #[test]
    fn supply_overwrites_existing_value() {
        let mut r = PipelineResult::new("x");
        r.filled_args.insert("time".into(), "morning".into());
        r.supply("time", "7:30");
        assert_eq!(r.filled_args["time"], "7:30");
    }

    #[test]
    fn serialize_skips_absent_domain() {
        let r = PipelineResult::new("hello");
        let json = serde_json::to_value(&r).unwrap();
        assert!(json.get("domain").is_none());
        assert_eq!(json["raw_text"], "hello");
        assert_eq!(json["missing_fields"], serde_json::json!([]));
    }
}
