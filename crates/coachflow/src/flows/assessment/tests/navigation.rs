use super::common::*;
use crate::flows::assessment::catalog::ConfigurationError;
use crate::flows::assessment::domain::AnswerValue;
use crate::flows::assessment::navigator::resolve_next;

fn single(value: &str) -> AnswerValue {
    AnswerValue::Single(value.to_owned())
}

#[test]
fn fixed_successor_is_returned_directly() {
    let catalog = quick_catalog();
    let age = catalog.node("age").expect("age present");
    let responses = responses_from(&[("age", "28")]);

    let next = resolve_next(&catalog, age, &single("28"), &responses).expect("resolves");
    assert_eq!(next.key, "gender");
}

#[test]
fn resolution_is_deterministic_for_fixed_inputs() {
    let catalog = quick_catalog();
    let node = catalog.node("health_conditions").expect("node present");
    let answer = single("1, 3");
    let responses = responses_from(&[("health_conditions", "1, 3")]);

    let first = resolve_next(&catalog, node, &answer, &responses).expect("resolves");
    for _ in 0..10 {
        let again = resolve_next(&catalog, node, &answer, &responses).expect("resolves");
        assert_eq!(again.key, first.key);
    }
}

#[test]
fn first_matching_branch_wins() {
    let catalog = quick_catalog();
    let node = catalog.node("recovery_needs").expect("node present");
    // Both the organ-recovery and post-surgery branches hold; the organ
    // branch is declared first and must win.
    let answer = single("14, 15");
    let responses = responses_from(&[("recovery_needs", "14, 15")]);

    let next = resolve_next(&catalog, node, &answer, &responses).expect("resolves");
    assert_eq!(next.key, "organ_recovery_notes");
}

#[test]
fn unmatched_conditions_fall_back_to_default() {
    let catalog = quick_catalog();
    let node = catalog.node("recovery_needs").expect("node present");
    let answer = single("16");
    let responses = responses_from(&[("recovery_needs", "16")]);

    let next = resolve_next(&catalog, node, &answer, &responses).expect("resolves");
    assert_eq!(next.key, "target_timeline");
}

#[test]
fn literal_branch_routes_any_medication_type() {
    let catalog = moderate_catalog();
    let node = catalog.node("medications").expect("node present");

    for id in ["1", "2", "3", "4"] {
        let responses = responses_from(&[("medications", id)]);
        let next = resolve_next(&catalog, node, &single(id), &responses).expect("resolves");
        assert_eq!(next.key, "medication_details", "id {id} routes to detail");
    }

    let responses = responses_from(&[("medications", "5")]);
    let next = resolve_next(&catalog, node, &single("5"), &responses).expect("resolves");
    assert_eq!(next.key, "allergies");
}

#[test]
fn later_predicate_still_sees_earlier_answers() {
    let catalog = quick_catalog();
    // Organ recovery notes route onward to the post-surgery detail when
    // the recovery answer (recorded two questions earlier) flagged it.
    let node = catalog.node("organ_recovery_notes").expect("node present");
    let responses = responses_from(&[
        ("recovery_needs", "14, 15"),
        ("organ_recovery_notes", "kidney transplant in 2024"),
    ]);
    let answer = single("kidney transplant in 2024");

    let next = resolve_next(&catalog, node, &answer, &responses).expect("resolves");
    assert_eq!(next.key, "post_surgery_notes");
}

#[test]
fn terminal_question_has_no_successor() {
    let catalog = quick_catalog();
    let terminal = catalog.node("assessment_complete").expect("terminal");
    let responses = responses_from(&[]);

    let err = resolve_next(&catalog, terminal, &single("done"), &responses)
        .expect_err("terminal resolution fails");
    assert!(matches!(err, ConfigurationError::TerminalSuccessor(key) if key == "assessment_complete"));
}
