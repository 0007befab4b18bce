use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Result of executing a (mock) tool handler.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolOutput {
    /// Tool name that produced this output.
    pub tool_name: String,
    /// Short heading, e.g. "ROUTINE ➜ CREATE".
    pub title: String,
    /// Ordered (label, value) rows to display.
    #[serde(default)]
    pub lines: Vec<(String, String)>,
    /// Human-readable summary of what the handler did.
    pub summary: String,
}

impl ToolOutput {
    pub fn new(
        tool_name: impl Into<String>,
        title: impl Into<String>,
        summary: impl Into<String>,
    ) -> Self {
        Self {
            tool_name: tool_name.into(),
            title: title.into(),
            lines: Vec::new(),
            summary: summary.into(),
        }
    }

    pub fn with_line(mut self, label: impl Into<String>, value: impl Into<String>) -> Self {
        self.lines.push((label.into(), value.into()));
        self
    }
}

/// What the router did with a pipeline result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum RouteOutcome {
    /// Nothing dispatchable; the user should be asked to rephrase.
    Fallback,
    /// The tool needs more arguments before it can run.
    NeedsInput {
        tool: String,
        filled: BTreeMap<String, String>,
        missing: Vec<String>,
    },
    /// The handler ran.
    Completed(ToolOutput),
}

impl RouteOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Fallback => "fallback",
            Self::NeedsInput { .. } => "missing",
            Self::Completed(_) => "ok",
        }
    }
}
