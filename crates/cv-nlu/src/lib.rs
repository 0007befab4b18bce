//! Two-tier hybrid intent classifier.
//!
//! Turns a free-text utterance into a structured action request:
//!
//! 1. Tier-1 picks the domain (agent) from model labels and weighted keywords.
//! 2. Tier-2 picks the tool inside that domain, with topic nouns outweighing verbs.
//! 3. Entities are extracted over a fixed label vocabulary.
//! 4. Slots are filled first-writer-wins and checked against the tool schema.
//!
//! All tables are loaded once from TOML and shared read-only.

pub mod domain;
pub mod entities;
pub mod error;
pub mod gateway;
pub mod http;
pub mod keywords;
pub mod mock;
pub mod pipeline;
pub mod schema;
pub mod slots;
pub mod symptoms;
pub mod tables;
pub mod tool;

pub use domain::{Decision, DecisionSource, DomainClassifier};
pub use entities::EntityExtractor;
pub use error::{NluError, NluResult};
pub use gateway::{ModelLoader, Prediction, PredictionGateway, ZeroShotModel};
pub use http::{HttpModel, HttpModelLoader, PredictorConfig};
pub use pipeline::{IntentPipeline, PipelineStage};
pub use schema::{SchemaRegistry, ToolSchema};
pub use slots::{SlotFill, SlotFiller};
pub use tables::NluTables;
pub use tool::ToolClassifier;
