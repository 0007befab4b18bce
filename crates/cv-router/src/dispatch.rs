//! Tool dispatch table and the three-way route.

use std::collections::HashMap;

use cv_protocol::{PipelineResult, RouteOutcome};

use crate::handler::ToolHandler;

/// Shown when an utterance could not be routed.
pub const FALLBACK_MESSAGE: &str = "I didn't quite catch that. You can ask me to manage your \
profile, book appointments, take health tests, view vitals, manage routines, or adjust settings.";

/// Tool name → handler, indexed for O(1) dispatch.
pub struct DispatchTable {
    handlers: Vec<Box<dyn ToolHandler>>,
    index: HashMap<String, usize>,
}

impl DispatchTable {
    /// Build a table from handlers. A later handler replaces an earlier one
    /// with the same name.
    pub fn new(handlers: Vec<Box<dyn ToolHandler>>) -> Self {
        let mut index = HashMap::new();
        for (i, handler) in handlers.iter().enumerate() {
            index.insert(handler.name().to_string(), i);
        }
        Self { handlers, index }
    }

    /// Build with one mock handler per built-in tool.
    pub fn with_defaults() -> Self {
        Self::new(crate::handlers::all_handlers())
    }

    pub fn lookup(&self, tool: &str) -> Option<&dyn ToolHandler> {
        self.index.get(tool).map(|&i| self.handlers[i].as_ref())
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Route a classified utterance.
    pub fn route(&self, result: &PipelineResult) -> RouteOutcome {
        tracing::info!(
            domain = result.domain.as_deref().unwrap_or("-"),
            tool = result.tool_name.as_deref().unwrap_or("-"),
            "routing"
        );

        let (Some(_), Some(tool)) = (&result.domain, &result.tool_name) else {
            tracing::info!("no domain/tool classified, falling back");
            return RouteOutcome::Fallback;
        };

        if !result.missing_fields.is_empty() {
            tracing::info!(tool = %tool, missing = ?result.missing_fields, "required arguments missing");
            return RouteOutcome::NeedsInput {
                tool: tool.clone(),
                filled: result.filled_args.clone(),
                missing: result.missing_fields.clone(),
            };
        }

        match self.lookup(tool) {
            Some(handler) => RouteOutcome::Completed(handler.handle(&result.filled_args)),
            None => {
                tracing::warn!(tool = %tool, "no handler registered, falling back");
                RouteOutcome::Fallback
            }
        }
    }
}

/// Human-readable form of an argument name: "start_time" → "Start Time".
pub fn prompt_label(argument: &str) -> String {
    argument
        .split('_')
        .filter(|w| !w.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}
