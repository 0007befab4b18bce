//! Built-in scenario run: fixed utterances fed straight to classify + route.

use std::io::{self, Write};

use crate::render::{render_outcome, render_result};
use crate::session::ChatSession;

/// A named utterance and what a reader should expect from it.
#[derive(Debug, Clone, Copy)]
pub struct Scenario {
    pub name: &'static str,
    pub text: &'static str,
    pub expected: &'static str,
}

pub const SCENARIOS: [Scenario; 8] = [
    Scenario {
        name: "Create routine",
        text: "Create a morning routine to check my blood pressure",
        expected: "doctor / routine.create, type=blood pressure, time=morning",
    },
    Scenario {
        name: "View routines",
        text: "Show me my routines for this week",
        expected: "doctor / routine.read, timeframe=this week",
    },
    Scenario {
        name: "Delete routine",
        text: "Delete my blood pressure routine",
        expected: "doctor / routine.delete, asks for routine id",
    },
    Scenario {
        name: "Update profile",
        text: "Update my profile height to 180 cm",
        expected: "receptionist / profile.update, height=180 cm",
    },
    Scenario {
        name: "Create appointment",
        text: "Book an appointment with Dr. Smith on Monday",
        expected: "receptionist / appointment.create, provider=Dr. Smith, start=Monday",
    },
    Scenario {
        name: "Change setting",
        text: "Turn on dark mode",
        expected: "receptionist / settings tool",
    },
    Scenario {
        name: "Fallback",
        text: "Hello, what can you do?",
        expected: "no domain, fallback",
    },
    Scenario {
        name: "Missing fields",
        text: "Set up a daily reminder to take my medication",
        expected: "doctor / routine.create, frequency=daily, asks for time",
    },
];

/// Run every scenario and write its result and route outcome.
pub fn run_scenarios<W: Write>(session: &ChatSession, out: &mut W) -> io::Result<usize> {
    let rule = "─".repeat(60);
    for (i, scenario) in SCENARIOS.iter().enumerate() {
        writeln!(out, "\n{rule}")?;
        writeln!(out, "  Scenario {} ➜ {}", i + 1, scenario.name)?;
        writeln!(out, "  Input    : {:?}", scenario.text)?;
        writeln!(out, "  Expected : {}", scenario.expected)?;
        writeln!(out, "{rule}")?;

        let (result, outcome) = session.process(scenario.text);
        tracing::info!(scenario = scenario.name, outcome = outcome.as_str(), "scenario done");

        writeln!(out, "{}", render_result(&result))?;
        writeln!(out, "  Router output: {}", outcome.as_str())?;
        writeln!(out, "{}", render_outcome(&outcome, result.domain.as_deref()))?;
    }
    writeln!(out, "\n  All {} scenarios complete.", SCENARIOS.len())?;
    Ok(SCENARIOS.len())
}
