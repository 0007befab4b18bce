//! Health consultation: messaging, routines, meal times.

use crate::handler::{Layout, MockHandler, ToolHandler};
use crate::row;

const NOT_SPECIFIED: &str = "<not specified>";

pub fn all_handlers() -> Vec<Box<dyn ToolHandler>> {
    vec![
        Box::new(MockHandler::new(
            "message.send",
            "MESSAGE ➜ SEND",
            Layout::Rows(&[row!("Content", ["content"], "<empty>")]),
            "Sending message to doctor",
        )),
        Box::new(MockHandler::new(
            "message.attach",
            "MESSAGE ➜ ATTACH FILE",
            Layout::Rows(&[row!("File Type", ["file_type"], "<any>")]),
            "Attaching file",
        )),
        Box::new(MockHandler::new(
            "routine.create",
            "ROUTINE ➜ CREATE",
            Layout::Rows(&[
                row!("Name", ["name"], NOT_SPECIFIED),
                row!("Type", ["type"], NOT_SPECIFIED),
                row!("Frequency", ["frequency"], NOT_SPECIFIED),
                row!("Time", ["time"], NOT_SPECIFIED),
                row!("Duration", ["duration"], NOT_SPECIFIED),
            ]),
            "Creating routine",
        )),
        Box::new(MockHandler::new(
            "routine.read",
            "ROUTINE ➜ READ",
            Layout::Rows(&[
                row!("Category", ["category"], "<all>"),
                row!("Timeframe", ["timeframe"], "<all>"),
            ]),
            "Loading routines",
        )),
        Box::new(MockHandler::new(
            "routine.update",
            "ROUTINE ➜ UPDATE",
            Layout::AllArgs,
            "Updating routine",
        )),
        Box::new(MockHandler::new(
            "routine.delete",
            "ROUTINE ➜ DELETE",
            Layout::Rows(&[row!("Routine ID", ["routine_id"], "<unknown>")]),
            "Deleting routine",
        )),
        Box::new(MockHandler::new(
            "mealTimes.update",
            "MEAL TIMES ➜ UPDATE",
            Layout::Rows(&[
                row!("Meal", ["meal"], NOT_SPECIFIED),
                row!("Time", ["time"], NOT_SPECIFIED),
            ]),
            "Updating meal time",
        )),
    ]
}
