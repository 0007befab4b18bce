//! Health recording: tests, vitals history, media history.

use crate::handler::{Layout, MockHandler, ToolHandler};
use crate::row;

pub fn all_handlers() -> Vec<Box<dyn ToolHandler>> {
    vec![
        Box::new(MockHandler::new(
            "takeTest",
            "TEST ➜ TAKE TEST",
            Layout::Rows(&[
                row!("Type", ["test_type"], "<not specified>"),
                row!("Instructions", "Please place the device and hold still."),
            ]),
            "Preparing test",
        )),
        Box::new(MockHandler::new(
            "vital.read",
            "VITALS ➜ READ HISTORY",
            Layout::Rows(&[
                row!("Vital Type", ["vital_type"], "<all>"),
                row!("Timeframe", ["timeframe"], "<all time>"),
            ]),
            "Loading vital history",
        )),
        Box::new(MockHandler::new(
            "media.read",
            "MEDIA ➜ READ",
            Layout::Rows(&[
                row!("Type", ["media_type"], "<all>"),
                row!("Timeframe", ["timeframe"], "<all time>"),
            ]),
            "Loading media files",
        )),
        Box::new(MockHandler::new(
            "media.delete",
            "MEDIA ➜ DELETE",
            Layout::Rows(&[row!("Media ID", ["media_id"], "<unknown>")]),
            "Deleting media",
        )),
    ]
}
