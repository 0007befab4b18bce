//! E2E tests for classify → route → fill missing fields → route again.

mod helpers;

use cv_nlu::mock::MockModel;
use cv_protocol::{ResultStatus, RouteOutcome};

use helpers::TestHarness;

#[test]
fn e2e_morning_routine_completes_in_one_turn() {
    let h = TestHarness::with_model(
        MockModel::new()
            .with("health consultation", "routine", 0.41)
            .with("vital sign type", "blood pressure", 0.83)
            .with("time reference", "morning", 0.64),
    );

    let (result, outcome) = h.run("Create a morning routine to check my blood pressure");
    assert_eq!(result.domain.as_deref(), Some("doctor"));
    assert_eq!(result.action.as_deref(), Some("routine.create"));
    assert_eq!(result.status(), ResultStatus::Ready);

    let RouteOutcome::Completed(output) = outcome else {
        panic!("expected Completed, got {outcome:?}");
    };
    assert!(output.lines.contains(&("Type".into(), "blood pressure".into())));
    assert!(output.lines.contains(&("Time".into(), "morning".into())));
}

#[test]
fn e2e_reminder_asks_for_time_then_completes() {
    let h = TestHarness::with_model(
        MockModel::new()
            .with("frequency", "daily", 0.91)
            .with("medication name", "medication", 0.47),
    );

    let (mut result, outcome) = h.run("Set up a daily reminder to take my medication");
    match &outcome {
        RouteOutcome::NeedsInput { tool, filled, missing } => {
            assert_eq!(tool, "routine.create");
            assert_eq!(filled["frequency"], "daily");
            assert_eq!(filled["name"], "medication");
            assert_eq!(missing, &vec!["time".to_string()]);
        }
        other => panic!("expected NeedsInput, got {other:?}"),
    }

    let outcome = h.answer(&mut result, &[("time", "8am")]);
    let RouteOutcome::Completed(output) = outcome else {
        panic!("expected Completed after answering");
    };
    assert!(output.lines.contains(&("Time".into(), "8am".into())));
    assert!(output.lines.contains(&("Frequency".into(), "daily".into())));
}

#[test]
fn e2e_appointment_needs_two_answers() {
    let h = TestHarness::keyword_only();
    let (mut result, outcome) = h.run("I have a sore throat, book an appointment");
    assert_eq!(result.tool_name.as_deref(), Some("appointment.create"));
    assert_eq!(result.filled_args["symptoms"], "a sore throat");
    assert_eq!(outcome.as_str(), "missing");

    // Partial answer keeps asking.
    let outcome = h.answer(&mut result, &[("provider_name", "Dr. Okafor")]);
    match outcome {
        RouteOutcome::NeedsInput { missing, .. } => assert_eq!(missing, vec!["start_time"]),
        other => panic!("expected NeedsInput, got {other:?}"),
    }

    let outcome = h.answer(&mut result, &[("start_time", "Friday 10am")]);
    let RouteOutcome::Completed(output) = outcome else {
        panic!("expected Completed");
    };
    assert!(output.lines.contains(&("Symptoms".into(), "a sore throat".into())));
    assert!(output.lines.contains(&("Patient".into(), "<self>".into())));
}

#[test]
fn e2e_greeting_falls_back() {
    let h = TestHarness::with_model(MockModel::new().with("person name", "you", 0.9));
    let (result, outcome) = h.run("Hello, what can you do?");
    assert!(result.domain.is_none());
    assert!(result.entities.is_empty());
    assert_eq!(outcome, RouteOutcome::Fallback);
}

#[test]
fn e2e_failing_model_degrades_to_keywords() {
    let h = TestHarness::with_model(MockModel::failing());
    let (result, outcome) = h.run("Show me my routines for this week");
    assert_eq!(result.tool_name.as_deref(), Some("routine.read"));
    assert!(result.entities.is_empty());
    assert_eq!(outcome.as_str(), "ok");
}

#[test]
fn e2e_allergen_cleaned_before_dispatch() {
    let h = TestHarness::with_model(MockModel::new().with("allergen", "shellfish allergy", 0.77));
    let (result, outcome) = h.run("Add a new shellfish allergy");
    assert_eq!(result.tool_name.as_deref(), Some("allergies.create"));
    assert_eq!(result.filled_args["name"], "shellfish");

    let RouteOutcome::Completed(output) = outcome else {
        panic!("expected Completed");
    };
    assert_eq!(output.lines[0], ("Name".into(), "shellfish".into()));
}

#[test]
fn e2e_nurse_test_with_vital_type() {
    let h = TestHarness::with_model(MockModel::new().with("vital sign type", "blood oxygen", 0.7));
    let (result, outcome) = h.run("I want to measure my blood oxygen");
    assert_eq!(result.domain.as_deref(), Some("nurse"));
    assert_eq!(result.tool_name.as_deref(), Some("takeTest"));
    assert_eq!(result.filled_args["test_type"], "blood oxygen");
    assert_eq!(outcome.as_str(), "ok");
}

#[test]
fn e2e_every_route_outcome_serializes() {
    let h = TestHarness::keyword_only();
    for text in [
        "Hello, what can you do?",
        "delete my routine",
        "show my wifi",
    ] {
        let (result, outcome) = h.run(text);
        let json = serde_json::to_value(&outcome).unwrap();
        assert!(json["outcome"].is_string(), "{text}");
        let back: cv_protocol::PipelineResult =
            serde_json::from_str(&serde_json::to_string(&result).unwrap()).unwrap();
        assert_eq!(back, result);
    }
}
