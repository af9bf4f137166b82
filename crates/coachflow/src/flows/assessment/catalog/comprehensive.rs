//! Comprehensive variant: the moderate table plus Jain diet detail,
//! fasting, eating-out, exercise-history, and target-weight questions.

use super::super::conditions::{option_ids, Condition};
use super::super::domain::{QuestionKind, ValidationRule};
use super::super::progress::Phase;
use super::{option, moderate, Branch, CatalogExtension, ConfigurationError, Insert, QuestionNode, Successor};

pub(super) fn nodes() -> Result<Vec<QuestionNode>, ConfigurationError> {
    extension().apply(moderate::nodes()?)
}

fn extension() -> CatalogExtension {
    CatalogExtension {
        rewires: vec![
            (
                "diet_type",
                Successor::Conditional {
                    branches: vec![Branch {
                        condition: Condition::AnswerIn(&[option_ids::DIET_JAIN]),
                        target: "jain_preferences",
                    }],
                    fallback: "meal_frequency",
                },
            ),
            ("meal_frequency", Successor::Fixed("fasting_pattern")),
            ("water_intake", Successor::Fixed("eating_out_frequency")),
            ("stress_level", Successor::Fixed("exercise_history")),
            ("primary_goal", Successor::Fixed("target_weight")),
        ],
        inserts: vec![
            Insert {
                after: "diet_type",
                node: QuestionNode {
                    key: "jain_preferences",
                    prompt_key: "questions.jain_preferences.prompt",
                    kind: QuestionKind::MultiSelect,
                    phase: Phase::DietPreferences,
                    validation: None,
                    options: vec![
                        option("1", "No root vegetables"),
                        option("2", "No fermented foods"),
                        option("3", "Dinner before sunset"),
                        option("4", "Standard Jain restrictions"),
                    ],
                    successor: Successor::Fixed("meal_frequency"),
                },
            },
            Insert {
                after: "meal_frequency",
                node: QuestionNode {
                    key: "fasting_pattern",
                    prompt_key: "questions.fasting_pattern.prompt",
                    kind: QuestionKind::SingleSelect,
                    phase: Phase::DietPreferences,
                    validation: None,
                    options: vec![
                        option("1", "No fasting"),
                        option("2", "Intermittent fasting"),
                        option("3", "Weekly religious fast"),
                        option("4", "Occasional fasting"),
                    ],
                    successor: Successor::Fixed("preferred_cuisines"),
                },
            },
            Insert {
                after: "water_intake",
                node: QuestionNode {
                    key: "eating_out_frequency",
                    prompt_key: "questions.eating_out_frequency.prompt",
                    kind: QuestionKind::SingleSelect,
                    phase: Phase::FoodDetails,
                    validation: None,
                    options: vec![
                        option("1", "Rarely"),
                        option("2", "Once a week"),
                        option("3", "Several times a week"),
                        option("4", "Daily"),
                    ],
                    successor: Successor::Fixed("activity_level"),
                },
            },
            Insert {
                after: "stress_level",
                node: QuestionNode {
                    key: "exercise_history",
                    prompt_key: "questions.exercise_history.prompt",
                    kind: QuestionKind::FreeText,
                    phase: Phase::Lifestyle,
                    validation: None,
                    options: Vec::new(),
                    successor: Successor::Fixed("primary_goal"),
                },
            },
            Insert {
                after: "primary_goal",
                node: QuestionNode {
                    key: "target_weight",
                    prompt_key: "questions.target_weight.prompt",
                    kind: QuestionKind::FreeText,
                    phase: Phase::Goals,
                    validation: Some(ValidationRule::NumericRange {
                        min: 30.0,
                        max: 300.0,
                        message: "Target weight must be between 30 and 300 kg.",
                    }),
                    options: Vec::new(),
                    successor: Successor::Fixed("recovery_needs"),
                },
            },
        ],
    }
}
