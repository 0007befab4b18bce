//! Built-in mock handlers, grouped by domain.

pub mod doctor;
pub mod nurse;
pub mod receptionist;

use crate::handler::ToolHandler;

/// One handler per built-in tool.
pub fn all_handlers() -> Vec<Box<dyn ToolHandler>> {
    let mut handlers = receptionist::all_handlers();
    handlers.extend(nurse::all_handlers());
    handlers.extend(doctor::all_handlers());
    handlers
}
