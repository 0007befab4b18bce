//! Console rendering of pipeline results and route outcomes.

use cv_protocol::{PipelineResult, RouteOutcome, ToolOutput};
use cv_router::{FALLBACK_MESSAGE, prompt_label};

const RULE_WIDTH: usize = 60;

fn heavy_rule() -> String {
    "=".repeat(RULE_WIDTH)
}

fn light_rule() -> String {
    "-".repeat(RULE_WIDTH)
}

fn or_none(value: Option<&str>) -> &str {
    value.unwrap_or("(none)")
}

/// Classification summary for one utterance.
pub fn render_result(result: &PipelineResult) -> String {
    let mut lines = vec![
        format!("  Domain : {}", or_none(result.domain.as_deref())),
        format!("  Action : {}", or_none(result.action.as_deref())),
        format!("  Tool   : {}", or_none(result.tool_name.as_deref())),
    ];

    if !result.entities.is_empty() {
        lines.push("  Entities:".into());
        for e in &result.entities {
            lines.push(format!("      • {:18} = {:?}  ({:.2})", e.label, e.text, e.score));
        }
    }
    if !result.filled_args.is_empty() {
        lines.push("  Filled:".into());
        for (k, v) in &result.filled_args {
            lines.push(format!("      ✓ {k} = {v:?}"));
        }
    }
    if !result.missing_fields.is_empty() {
        lines.push("  Missing:".into());
        for f in &result.missing_fields {
            lines.push(format!("      ✗ {f}"));
        }
    }
    lines.join("\n")
}

fn render_output(output: &ToolOutput) -> Vec<String> {
    let width = output
        .lines
        .iter()
        .map(|(label, _)| label.chars().count())
        .max()
        .unwrap_or(0);
    let mut lines = vec![output.title.clone(), light_rule()];
    for (label, value) in &output.lines {
        lines.push(format!("  {label:width$} : {value}"));
    }
    lines.push(format!("  ▸ {} …", output.summary));
    lines
}

/// What the router did, framed for the console.
pub fn render_outcome(outcome: &RouteOutcome, domain: Option<&str>) -> String {
    let mut lines = vec![heavy_rule()];
    match outcome {
        RouteOutcome::Fallback => {
            lines.push("FALLBACK ➜ intent not recognised".into());
            lines.push(light_rule());
            lines.push(format!("  \"{FALLBACK_MESSAGE}\""));
        }
        RouteOutcome::NeedsInput {
            tool,
            filled,
            missing,
        } => {
            lines.push(format!("NEED MORE INFO ➜ {tool}"));
            lines.push(light_rule());
            lines.push(format!("  Agent  : {}", or_none(domain)));
            lines.push(format!("  Action : {tool}"));
            if !filled.is_empty() {
                lines.push("  Already have:".into());
                for (k, v) in filled {
                    lines.push(format!("    ✓ {k:20} = {v:?}"));
                }
            }
            lines.push("  Still need:".into());
            for f in missing {
                lines.push(format!("    ✗ {}", prompt_label(f)));
            }
        }
        RouteOutcome::Completed(output) => lines.extend(render_output(output)),
    }
    lines.push(heavy_rule());
    lines.join("\n")
}
