use super::common::responses_from;
use crate::flows::assessment::conditions::{Condition, PredicateId};
use crate::flows::assessment::domain::{AnswerValue, ResponseSet};

#[test]
fn other_allergy_matches_comma_joined_tokens() {
    let selected = responses_from(&[("allergies", "2, 13, 7")]);
    assert!(PredicateId::HasOtherAllergies.evaluate(&selected));

    let not_selected = responses_from(&[("allergies", "2, 7")]);
    assert!(!PredicateId::HasOtherAllergies.evaluate(&not_selected));
}

#[test]
fn other_allergy_matches_label_form() {
    let by_label = responses_from(&[("allergies", "Milk, Other")]);
    assert!(PredicateId::HasOtherAllergies.evaluate(&by_label));
}

#[test]
fn recovery_predicates_match_id_and_label() {
    let organ = responses_from(&[("recovery_needs", "14")]);
    assert!(PredicateId::HasOrganRecovery.evaluate(&organ));
    assert!(!PredicateId::HasPostSurgery.evaluate(&organ));

    let surgery = responses_from(&[("recovery_needs", "Post-surgery nutrition")]);
    assert!(PredicateId::HasPostSurgery.evaluate(&surgery));

    let both = responses_from(&[("recovery_needs", "14, 15")]);
    assert!(PredicateId::HasOrganRecovery.evaluate(&both));
    assert!(PredicateId::HasPostSurgery.evaluate(&both));
}

#[test]
fn health_condition_is_false_only_for_exact_sentinel() {
    let none = responses_from(&[("health_conditions", "16")]);
    assert!(!PredicateId::HasHealthCondition.evaluate(&none));

    let none_label = responses_from(&[("health_conditions", "None of the above")]);
    assert!(!PredicateId::HasHealthCondition.evaluate(&none_label));

    // The sentinel mixed with a real condition still counts as a
    // condition being present.
    let mixed = responses_from(&[("health_conditions", "3, 16")]);
    assert!(PredicateId::HasHealthCondition.evaluate(&mixed));

    let unanswered = ResponseSet::default();
    assert!(!PredicateId::HasHealthCondition.evaluate(&unanswered));
}

#[test]
fn predicates_read_their_own_focus_key() {
    // The currently-active question is irrelevant; predicates only look
    // at their bound key.
    let responses = responses_from(&[("allergies", "13"), ("recovery_needs", "16")]);
    assert!(PredicateId::HasOtherAllergies.evaluate(&responses));
    assert!(!PredicateId::HasOrganRecovery.evaluate(&responses));
}

#[test]
fn literal_condition_tests_just_recorded_answer() {
    let responses = ResponseSet::default();
    let condition = Condition::AnswerIn(&["1", "2", "3", "4"]);

    assert!(condition.holds(&AnswerValue::Single("2".to_owned()), &responses));
    assert!(!condition.holds(&AnswerValue::Single("5".to_owned()), &responses));
    assert!(condition.holds(
        &AnswerValue::Multi(vec!["5".to_owned(), "3".to_owned()]),
        &responses
    ));
}

#[test]
fn multi_answer_tokens_are_trimmed() {
    let value = AnswerValue::Single(" 2 ,13,  7".to_owned());
    assert!(value.contains_token("13"));
    assert!(value.contains_token("2"));
    assert!(!value.contains_token("1"));
    assert!(!value.is_exactly("13"));
    assert!(AnswerValue::Single("13".to_owned()).is_exactly("13"));
}
