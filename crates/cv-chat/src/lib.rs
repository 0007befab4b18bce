//! Text front end for the intent classifier: REPL, scenario runner and
//! console rendering.

pub mod config;
pub mod render;
pub mod scenarios;
pub mod session;
