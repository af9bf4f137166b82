//! Moderate variant: the quick table plus medication detail, hydration,
//! stress, and supplement questions, with the affected successors rewired
//! into the inserted nodes.

use super::super::conditions::Condition;
use super::super::domain::QuestionKind;
use super::super::progress::Phase;
use super::{option, quick, Branch, CatalogExtension, ConfigurationError, Insert, QuestionNode, Successor};

pub(super) fn nodes() -> Result<Vec<QuestionNode>, ConfigurationError> {
    extension().apply(quick::nodes())
}

fn extension() -> CatalogExtension {
    CatalogExtension {
        rewires: vec![
            (
                "medications",
                Successor::Conditional {
                    branches: vec![Branch {
                        // Any medication type selected.
                        condition: Condition::AnswerIn(&["1", "2", "3", "4"]),
                        target: "medication_details",
                    }],
                    fallback: "allergies",
                },
            ),
            ("food_dislikes", Successor::Fixed("water_intake")),
            ("sleep_hours", Successor::Fixed("stress_level")),
            ("plan_notes", Successor::Fixed("supplement_interest")),
        ],
        inserts: vec![
            Insert {
                after: "medications",
                node: QuestionNode {
                    key: "medication_details",
                    prompt_key: "questions.medication_details.prompt",
                    kind: QuestionKind::FreeText,
                    phase: Phase::HealthAssessment,
                    validation: None,
                    options: Vec::new(),
                    successor: Successor::Fixed("allergies"),
                },
            },
            Insert {
                after: "food_dislikes",
                node: QuestionNode {
                    key: "water_intake",
                    prompt_key: "questions.water_intake.prompt",
                    kind: QuestionKind::SingleSelect,
                    phase: Phase::FoodDetails,
                    validation: None,
                    options: vec![
                        option("1", "Less than 1 litre"),
                        option("2", "1 to 2 litres"),
                        option("3", "2 to 3 litres"),
                        option("4", "More than 3 litres"),
                    ],
                    successor: Successor::Fixed("activity_level"),
                },
            },
            Insert {
                after: "sleep_hours",
                node: QuestionNode {
                    key: "stress_level",
                    prompt_key: "questions.stress_level.prompt",
                    kind: QuestionKind::SingleSelect,
                    phase: Phase::Lifestyle,
                    validation: None,
                    options: vec![
                        option("1", "Low"),
                        option("2", "Moderate"),
                        option("3", "High"),
                        option("4", "Very high"),
                    ],
                    successor: Successor::Fixed("primary_goal"),
                },
            },
            Insert {
                after: "plan_notes",
                node: QuestionNode {
                    key: "supplement_interest",
                    prompt_key: "questions.supplement_interest.prompt",
                    kind: QuestionKind::SingleSelect,
                    phase: Phase::PlanCustomization,
                    validation: None,
                    options: vec![
                        option("1", "Yes"),
                        option("2", "No"),
                        option("3", "Need guidance"),
                    ],
                    successor: Successor::Fixed("assessment_complete"),
                },
            },
        ],
    }
}
