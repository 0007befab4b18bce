//! Tool handler trait and the table-driven mock handler.

use std::collections::BTreeMap;

use cv_protocol::ToolOutput;

/// `row!("Label", ["arg", ...], "<placeholder>")`, or `row!("Label", "fixed value")`.
#[macro_export]
macro_rules! row {
    ($label:expr, [$($arg:expr),* $(,)?], $placeholder:expr) => {
        $crate::handler::Row {
            label: $label,
            args: &[$($arg),*],
            placeholder: $placeholder,
        }
    };
    ($label:expr, $value:expr) => {
        $crate::handler::Row {
            label: $label,
            args: &[],
            placeholder: $value,
        }
    };
}

/// A dispatch target for one tool.
pub trait ToolHandler: Send + Sync {
    /// Tool name this handler serves (e.g., "routine.create").
    fn name(&self) -> &str;

    /// Run the tool with the filled arguments.
    fn handle(&self, args: &BTreeMap<String, String>) -> ToolOutput;
}

/// One displayed row: the first present argument in `args`, else `placeholder`.
///
/// A row with no arguments always shows `placeholder`. Built with [`row!`].
#[derive(Debug, Clone, Copy)]
pub struct Row {
    pub label: &'static str,
    pub args: &'static [&'static str],
    pub placeholder: &'static str,
}

impl Row {
    fn value(&self, args: &BTreeMap<String, String>) -> String {
        self.args
            .iter()
            .find_map(|a| args.get(*a))
            .cloned()
            .unwrap_or_else(|| self.placeholder.to_string())
    }
}

/// How a handler lays out its output.
#[derive(Debug, Clone, Copy)]
pub enum Layout {
    /// Fixed rows with placeholders for absent arguments.
    Rows(&'static [Row]),
    /// Every provided argument, in name order (update-style tools).
    AllArgs,
}

/// Mock handler that echoes its arguments instead of calling a backend.
#[derive(Debug, Clone, Copy)]
pub struct MockHandler {
    name: &'static str,
    title: &'static str,
    layout: Layout,
    summary: &'static str,
}

impl MockHandler {
    pub const fn new(
        name: &'static str,
        title: &'static str,
        layout: Layout,
        summary: &'static str,
    ) -> Self {
        Self {
            name,
            title,
            layout,
            summary,
        }
    }
}

impl ToolHandler for MockHandler {
    fn name(&self) -> &str {
        self.name
    }

    fn handle(&self, args: &BTreeMap<String, String>) -> ToolOutput {
        tracing::info!(tool = self.name, args = args.len(), "mock handler invoked");
        let mut output = ToolOutput::new(self.name, self.title, self.summary);
        match self.layout {
            Layout::Rows(rows) => {
                for row in rows {
                    output = output.with_line(row.label, row.value(args));
                }
            }
            Layout::AllArgs => {
                for (k, v) in args {
                    output = output.with_line(k.as_str(), v.as_str());
                }
            }
        }
        output
    }
}
