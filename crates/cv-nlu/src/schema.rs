//! Per-tool argument schemas and required-field validation.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::error::{NluError, NluResult};
use crate::tables::NluTables;

/// Declared arguments of one tool and which of them are required.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ToolSchema {
    /// Every argument the tool accepts, in declared order.
    #[serde(default)]
    pub fields: Vec<String>,
    /// Arguments that must be set before dispatch, in declared order.
    #[serde(default)]
    pub required: Vec<String>,
}

impl ToolSchema {
    pub fn declares(&self, argument: &str) -> bool {
        self.fields.iter().any(|f| f == argument)
    }

    /// Required arguments with no value in `filled`, in declared order.
    ///
    /// Fails if `filled` carries an argument this schema does not declare.
    pub fn missing(&self, tool: &str, filled: &BTreeMap<String, String>) -> NluResult<Vec<String>> {
        if let Some(unknown) = filled.keys().find(|k| !self.declares(k)) {
            return Err(NluError::UnknownArgument {
                tool: tool.to_string(),
                argument: unknown.clone(),
            });
        }
        Ok(self
            .required
            .iter()
            .filter(|r| !filled.contains_key(r.as_str()))
            .cloned()
            .collect())
    }
}

/// Lookup of tool schemas by tool name.
pub trait SchemaRegistry {
    fn lookup(&self, tool: &str) -> Option<&ToolSchema>;
}

impl SchemaRegistry for NluTables {
    fn lookup(&self, tool: &str) -> Option<&ToolSchema> {
        self.tools.get(tool).map(|t| &t.schema)
    }
}

/// Compute missing required arguments for `tool`.
///
/// Unknown tools yield nothing missing. A schema that rejects the filled
/// arguments yields its full required list.
pub fn missing_fields(
    registry: &dyn SchemaRegistry,
    tool: &str,
    filled: &BTreeMap<String, String>,
) -> Vec<String> {
    let Some(schema) = registry.lookup(tool) else {
        tracing::debug!(tool, "no schema registered, nothing to validate");
        return Vec::new();
    };
    match schema.missing(tool, filled) {
        Ok(missing) => missing,
        Err(e) => {
            tracing::warn!(error = %e, tool, "schema validation failed, treating all required fields as missing");
            schema.required.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn appointment() -> ToolSchema {
        ToolSchema {
            fields: vec![
                "provider_name".into(),
                "start_time".into(),
                "symptoms".into(),
            ],
            required: vec!["provider_name".into(), "start_time".into()],
        }
    }

    #[test]
    fn missing_in_declared_order() {
        let missing = appointment()
            .missing("appointment.create", &args(&[("symptoms", "cough")]))
            .unwrap();
        assert_eq!(missing, vec!["provider_name", "start_time"]);
    }

    #[test]
    fn empty_value_counts_as_filled() {
        let missing = appointment()
            .missing(
                "appointment.create",
                &args(&[("provider_name", ""), ("start_time", "monday")]),
            )
            .unwrap();
        assert!(missing.is_empty());
    }

    #[test]
    fn unknown_argument_is_rejected() {
        let err = appointment()
            .missing("appointment.create", &args(&[("colour", "red")]))
            .unwrap_err();
        assert!(matches!(err, NluError::UnknownArgument { ref argument, .. } if argument == "colour"));
    }

    #[test]
    fn registry_fallback_reports_all_required() {
        let tables = NluTables::builtin().unwrap();
        let missing = missing_fields(
            &tables,
            "appointment.create",
            &args(&[("provider_name", "Dr. Smith"), ("colour", "red")]),
        );
        assert_eq!(missing, vec!["provider_name", "start_time"]);
    }

    #[test]
    fn unknown_tool_has_nothing_missing() {
        let tables = NluTables::builtin().unwrap();
        assert!(missing_fields(&tables, "teleport", &BTreeMap::new()).is_empty());
    }

    #[test]
    fn tool_without_required_fields_is_always_complete() {
        let tables = NluTables::builtin().unwrap();
        assert!(missing_fields(&tables, "wifi.read", &BTreeMap::new()).is_empty());
    }

    #[test]
    fn missing_is_subset_of_required_for_every_builtin_tool() {
        let tables = NluTables::builtin().unwrap();
        for (name, tool) in &tables.tools {
            let missing = missing_fields(&tables, name, &BTreeMap::new());
            assert_eq!(missing, tool.schema.required, "tool {name}");
        }
    }
}
