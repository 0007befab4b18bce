//! Downstream dispatch for classified utterances.
//!
//! Branches a `PipelineResult` three ways: fallback when nothing was
//! resolved, a request for input when required arguments are missing, and
//! a handler call otherwise.

pub mod dispatch;
pub mod handler;
pub mod handlers;

pub use dispatch::{DispatchTable, FALLBACK_MESSAGE, prompt_label};
pub use handler::{Layout, MockHandler, Row, ToolHandler};
