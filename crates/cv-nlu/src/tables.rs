//! Static classification tables, loadable from TOML.
//!
//! Holds everything the classifiers consult: tier-1 domain labels and
//! keywords, per-domain tool labels, per-tool keyword buckets, slot maps and
//! argument schemas, the entity label vocabulary, and the symptom patterns.
//! Tables are validated and compiled once at load and never mutated after.

use std::collections::{BTreeMap, HashSet};
use std::path::Path;

use serde::Deserialize;

use crate::error::{NluError, NluResult};
use crate::schema::ToolSchema;
use crate::symptoms::SymptomHeuristic;

/// Built-in healthcare tables shipped with the crate.
const BUILTIN_TABLES: &str = include_str!("../data/healthcare.toml");

/// Model thresholds and keyword weights.
#[derive(Debug, Clone, Deserialize)]
pub struct Thresholds {
    /// Threshold passed to the model for tier-1 label prediction.
    #[serde(default = "default_domain_model")]
    pub domain_model: f64,
    /// Minimum tier-1 model score to trust the model over keywords.
    #[serde(default = "default_domain_accept")]
    pub domain_accept: f64,
    /// Threshold passed to the model for tier-2 label prediction.
    #[serde(default = "default_tool_model")]
    pub tool_model: f64,
    /// Minimum tier-2 model score to trust the model.
    #[serde(default = "default_tool_accept")]
    pub tool_accept: f64,
    /// Keyword score at which tier-2 keywords override a differing model pick.
    #[serde(default = "default_tool_keyword_override")]
    pub tool_keyword_override: u32,
    /// Threshold passed to the model for entity extraction.
    #[serde(default = "default_entity")]
    pub entity: f64,
    #[serde(default = "default_priority_weight")]
    pub priority_weight: u32,
    #[serde(default = "default_verb_weight")]
    pub verb_weight: u32,
    #[serde(default = "default_noun_weight")]
    pub noun_weight: u32,
    /// Heuristic symptom matches shorter than this are discarded.
    #[serde(default = "default_min_symptom_len")]
    pub min_symptom_len: usize,
}

fn default_domain_model() -> f64 {
    0.15
}
fn default_domain_accept() -> f64 {
    0.25
}
fn default_tool_model() -> f64 {
    0.15
}
fn default_tool_accept() -> f64 {
    0.3
}
fn default_tool_keyword_override() -> u32 {
    3
}
fn default_entity() -> f64 {
    0.35
}
fn default_priority_weight() -> u32 {
    3
}
fn default_verb_weight() -> u32 {
    1
}
fn default_noun_weight() -> u32 {
    2
}
fn default_min_symptom_len() -> usize {
    3
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            domain_model: default_domain_model(),
            domain_accept: default_domain_accept(),
            tool_model: default_tool_model(),
            tool_accept: default_tool_accept(),
            tool_keyword_override: default_tool_keyword_override(),
            entity: default_entity(),
            priority_weight: default_priority_weight(),
            verb_weight: default_verb_weight(),
            noun_weight: default_noun_weight(),
            min_symptom_len: default_min_symptom_len(),
        }
    }
}

/// A tier-2 model label and the tool it maps to.
#[derive(Debug, Clone, Deserialize)]
pub struct ToolLabel {
    pub label: String,
    pub tool: String,
}

/// One top-level domain (agent).
#[derive(Debug, Clone, Deserialize)]
pub struct DomainSpec {
    /// Domain name reported in results (e.g., "receptionist").
    pub name: String,
    /// Tier-1 model label (e.g., "health management").
    pub label: String,
    /// Tool used when neither keywords nor model pick one.
    pub default_tool: String,
    #[serde(default)]
    pub keywords: Vec<String>,
    /// Keywords exclusive to this domain, weighted higher.
    #[serde(default)]
    pub priority_keywords: Vec<String>,
    /// Tier-2 candidate labels, in priority order.
    pub tools: Vec<ToolLabel>,
}

impl DomainSpec {
    /// Tier-2 model candidate labels.
    pub fn tool_labels(&self) -> Vec<&str> {
        self.tools.iter().map(|t| t.label.as_str()).collect()
    }

    /// Map a tier-2 model label to its tool name.
    pub fn tool_for_label(&self, label: &str) -> Option<&str> {
        self.tools
            .iter()
            .find(|t| t.label == label)
            .map(|t| t.tool.as_str())
    }

    /// Distinct tool names valid under this domain, in declared order.
    pub fn tool_names(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.tools
            .iter()
            .map(|t| t.tool.as_str())
            .filter(|t| seen.insert(*t))
            .collect()
    }

    pub fn has_tool(&self, tool: &str) -> bool {
        self.tools.iter().any(|t| t.tool == tool)
    }
}

/// Keyword buckets, slot map and argument schema for one tool.
#[derive(Debug, Clone, Deserialize)]
pub struct ToolSpec {
    #[serde(default)]
    pub verbs: Vec<String>,
    /// Topic nouns; more disambiguating than verbs.
    #[serde(default)]
    pub nouns: Vec<String>,
    /// Entity label → argument name.
    #[serde(default)]
    pub slots: BTreeMap<String, String>,
    #[serde(flatten)]
    pub schema: ToolSchema,
}

/// Raw symptom heuristic settings.
#[derive(Debug, Clone, Deserialize)]
pub struct SymptomSpec {
    /// Argument filled by the heuristic.
    #[serde(default = "default_symptom_argument")]
    pub argument: String,
    /// Tools for which the heuristic runs.
    #[serde(default)]
    pub tools: Vec<String>,
    /// Regexes applied in order to the lower-cased text; group 1 is the symptom.
    #[serde(default)]
    pub patterns: Vec<String>,
}

fn default_symptom_argument() -> String {
    "symptoms".into()
}

impl Default for SymptomSpec {
    fn default() -> Self {
        Self {
            argument: default_symptom_argument(),
            tools: Vec::new(),
            patterns: Vec::new(),
        }
    }
}

/// On-disk layout of a tables file.
#[derive(Debug, Deserialize)]
struct TablesFile {
    entity_labels: Vec<String>,
    #[serde(default)]
    thresholds: Thresholds,
    #[serde(default)]
    symptoms: SymptomSpec,
    domains: Vec<DomainSpec>,
    #[serde(default)]
    tools: BTreeMap<String, ToolSpec>,
}

/// Validated, immutable classification tables.
#[derive(Debug, Clone)]
pub struct NluTables {
    pub thresholds: Thresholds,
    pub entity_labels: Vec<String>,
    /// Domains in priority order (first wins an exact keyword tie).
    pub domains: Vec<DomainSpec>,
    pub tools: BTreeMap<String, ToolSpec>,
    pub symptoms: SymptomHeuristic,
}

impl NluTables {
    /// The built-in healthcare tables.
    pub fn builtin() -> NluResult<Self> {
        Self::from_toml_str(BUILTIN_TABLES)
    }

    /// Load tables from a TOML file path.
    pub fn from_file(path: impl AsRef<Path>) -> NluResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parse, validate and compile tables from TOML text.
    pub fn from_toml_str(contents: &str) -> NluResult<Self> {
        let file: TablesFile = toml::from_str(contents)?;
        validate(&file)?;

        let symptoms = SymptomHeuristic::compile(&file.symptoms, file.thresholds.min_symptom_len)?;

        tracing::debug!(
            domains = file.domains.len(),
            tools = file.tools.len(),
            entity_labels = file.entity_labels.len(),
            "classification tables loaded"
        );

        Ok(Self {
            thresholds: file.thresholds,
            entity_labels: file.entity_labels,
            domains: file.domains,
            tools: file.tools,
            symptoms,
        })
    }

    /// Tier-1 model candidate labels, in domain order.
    pub fn domain_labels(&self) -> Vec<&str> {
        self.domains.iter().map(|d| d.label.as_str()).collect()
    }

    /// Map a tier-1 model label to its domain name.
    pub fn domain_for_label(&self, label: &str) -> Option<&str> {
        self.domains
            .iter()
            .find(|d| d.label == label)
            .map(|d| d.name.as_str())
    }

    pub fn domain(&self, name: &str) -> Option<&DomainSpec> {
        self.domains.iter().find(|d| d.name == name)
    }

    pub fn tool(&self, name: &str) -> Option<&ToolSpec> {
        self.tools.get(name)
    }
}

/// Cross-reference checks run once at load.
fn validate(file: &TablesFile) -> NluResult<()> {
    let invalid = |msg: String| Err(NluError::InvalidTables(msg));

    if file.entity_labels.is_empty() {
        return invalid("entity_labels is empty".into());
    }
    if file.domains.is_empty() {
        return invalid("no domains declared".into());
    }

    let mut names = HashSet::new();
    for domain in &file.domains {
        if !names.insert(domain.name.as_str()) {
            return invalid(format!("duplicate domain '{}'", domain.name));
        }
        if domain.tools.is_empty() {
            return invalid(format!("domain '{}' has no tools", domain.name));
        }
        if !domain.has_tool(&domain.default_tool) {
            return invalid(format!(
                "default tool '{}' of domain '{}' is not one of its tools",
                domain.default_tool, domain.name
            ));
        }
        for entry in &domain.tools {
            if !file.tools.contains_key(&entry.tool) {
                return invalid(format!(
                    "label '{}' of domain '{}' maps to undeclared tool '{}'",
                    entry.label, domain.name, entry.tool
                ));
            }
        }
    }

    for (name, tool) in &file.tools {
        for (label, argument) in &tool.slots {
            if !file.entity_labels.contains(label) {
                return invalid(format!(
                    "tool '{name}' maps unknown entity label '{label}'"
                ));
            }
            if !tool.schema.declares(argument) {
                return invalid(format!(
                    "tool '{name}' maps '{label}' to undeclared argument '{argument}'"
                ));
            }
        }
        for required in &tool.schema.required {
            if !tool.schema.declares(required) {
                return invalid(format!(
                    "tool '{name}' requires undeclared argument '{required}'"
                ));
            }
        }
    }

    for name in &file.symptoms.tools {
        let Some(tool) = file.tools.get(name) else {
            return invalid(format!("symptom tool '{name}' is not declared"));
        };
        if !tool.schema.declares(&file.symptoms.argument) {
            return invalid(format!(
                "symptom tool '{name}' does not declare argument '{}'",
                file.symptoms.argument
            ));
        }
    }

    Ok(())
}
