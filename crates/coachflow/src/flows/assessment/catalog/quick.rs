//! Base question table shared by every variant.

use super::super::conditions::{option_ids, Condition, PredicateId};
use super::super::domain::{QuestionKind, ValidationRule};
use super::super::progress::Phase;
use super::{option, Branch, QuestionNode, Successor};

pub(super) fn nodes() -> Vec<QuestionNode> {
    vec![
        QuestionNode {
            key: "age",
            prompt_key: "questions.age.prompt",
            kind: QuestionKind::FreeText,
            phase: Phase::BasicInformation,
            validation: Some(ValidationRule::NumericRange {
                min: 12.0,
                max: 120.0,
                message: "Age must be between 12 and 120.",
            }),
            options: Vec::new(),
            successor: Successor::Fixed("gender"),
        },
        QuestionNode {
            key: "gender",
            prompt_key: "questions.gender.prompt",
            kind: QuestionKind::SingleSelect,
            phase: Phase::BasicInformation,
            validation: None,
            options: vec![
                option("1", "Male"),
                option("2", "Female"),
                option("3", "Other"),
            ],
            successor: Successor::Fixed("height"),
        },
        QuestionNode {
            key: "height",
            prompt_key: "questions.height.prompt",
            kind: QuestionKind::FreeText,
            phase: Phase::BasicInformation,
            validation: Some(ValidationRule::NumericRange {
                min: 100.0,
                max: 250.0,
                message: "Height must be between 100 and 250 cm.",
            }),
            options: Vec::new(),
            successor: Successor::Fixed("weight"),
        },
        QuestionNode {
            key: "weight",
            prompt_key: "questions.weight.prompt",
            kind: QuestionKind::FreeText,
            phase: Phase::BasicInformation,
            validation: Some(ValidationRule::NumericRange {
                min: 30.0,
                max: 300.0,
                message: "Weight must be between 30 and 300 kg.",
            }),
            options: Vec::new(),
            successor: Successor::Fixed("health_conditions"),
        },
        QuestionNode {
            key: "health_conditions",
            prompt_key: "questions.health_conditions.prompt",
            kind: QuestionKind::MultiSelect,
            phase: Phase::HealthAssessment,
            validation: None,
            options: vec![
                option("1", "Diabetes"),
                option("2", "Hypertension"),
                option("3", "Thyroid disorder"),
                option("4", "High cholesterol"),
                option("5", "PCOS"),
                option("6", "Fatty liver"),
                option("7", "Kidney disease"),
                option("8", "Heart disease"),
                option("9", "Asthma"),
                option("10", "Arthritis"),
                option("11", "Anemia"),
                option("12", "Gastric issues"),
                option("13", "Migraine"),
                option("14", "Skin conditions"),
                option("15", "Depression or anxiety"),
                option(option_ids::HEALTH_NONE, "None of the above"),
            ],
            successor: Successor::Conditional {
                branches: vec![Branch {
                    condition: Condition::Predicate(PredicateId::HasHealthCondition),
                    target: "condition_management",
                }],
                fallback: "allergies",
            },
        },
        QuestionNode {
            key: "condition_management",
            prompt_key: "questions.condition_management.prompt",
            kind: QuestionKind::SingleSelect,
            phase: Phase::HealthAssessment,
            validation: None,
            options: vec![
                option("1", "Medication"),
                option("2", "Diet and lifestyle"),
                option("3", "Monitoring only"),
                option("4", "Not managed"),
            ],
            successor: Successor::Fixed("medications"),
        },
        QuestionNode {
            key: "medications",
            prompt_key: "questions.medications.prompt",
            kind: QuestionKind::SingleSelect,
            phase: Phase::HealthAssessment,
            validation: None,
            options: vec![
                option("1", "Prescription medication"),
                option("2", "Over-the-counter medication"),
                option("3", "Supplements"),
                option("4", "Herbal or ayurvedic"),
                option("5", "No regular medication"),
            ],
            successor: Successor::Fixed("allergies"),
        },
        QuestionNode {
            key: "allergies",
            prompt_key: "questions.allergies.prompt",
            kind: QuestionKind::MultiSelect,
            phase: Phase::HealthAssessment,
            validation: None,
            options: vec![
                option("1", "Milk"),
                option("2", "Eggs"),
                option("3", "Peanuts"),
                option("4", "Tree nuts"),
                option("5", "Soy"),
                option("6", "Wheat or gluten"),
                option("7", "Fish"),
                option("8", "Shellfish"),
                option("9", "Sesame"),
                option("10", "Mustard"),
                option("11", "Corn"),
                option("12", "Fruits"),
                option(option_ids::ALLERGY_OTHER, "Other"),
                option("14", "No known allergies"),
            ],
            successor: Successor::Conditional {
                branches: vec![Branch {
                    condition: Condition::Predicate(PredicateId::HasOtherAllergies),
                    target: "allergy_details",
                }],
                fallback: "diet_type",
            },
        },
        QuestionNode {
            key: "allergy_details",
            prompt_key: "questions.allergy_details.prompt",
            kind: QuestionKind::FreeText,
            phase: Phase::HealthAssessment,
            validation: None,
            options: Vec::new(),
            successor: Successor::Fixed("diet_type"),
        },
        QuestionNode {
            key: "diet_type",
            prompt_key: "questions.diet_type.prompt",
            kind: QuestionKind::SingleSelect,
            phase: Phase::DietPreferences,
            validation: None,
            options: vec![
                option("1", "Vegetarian"),
                option("2", "Vegan"),
                option("3", "Eggetarian"),
                option("4", "Non-vegetarian"),
                option(option_ids::DIET_JAIN, "Jain"),
                option("6", "Keto"),
                option("7", "Mediterranean"),
            ],
            successor: Successor::Fixed("meal_frequency"),
        },
        QuestionNode {
            key: "meal_frequency",
            prompt_key: "questions.meal_frequency.prompt",
            kind: QuestionKind::SingleSelect,
            phase: Phase::DietPreferences,
            validation: None,
            options: vec![
                option("1", "Two meals a day"),
                option("2", "Three meals a day"),
                option("3", "Four meals a day"),
                option("4", "Five or more meals a day"),
            ],
            successor: Successor::Fixed("preferred_cuisines"),
        },
        QuestionNode {
            key: "preferred_cuisines",
            prompt_key: "questions.preferred_cuisines.prompt",
            kind: QuestionKind::MultiSelect,
            phase: Phase::FoodDetails,
            validation: None,
            options: vec![
                option("1", "North Indian"),
                option("2", "South Indian"),
                option("3", "Continental"),
                option("4", "Chinese"),
                option("5", "Mediterranean"),
                option("6", "Mexican"),
            ],
            successor: Successor::Fixed("food_dislikes"),
        },
        QuestionNode {
            key: "food_dislikes",
            prompt_key: "questions.food_dislikes.prompt",
            kind: QuestionKind::FreeText,
            phase: Phase::FoodDetails,
            validation: None,
            options: Vec::new(),
            successor: Successor::Fixed("activity_level"),
        },
        QuestionNode {
            key: "activity_level",
            prompt_key: "questions.activity_level.prompt",
            kind: QuestionKind::SingleSelect,
            phase: Phase::Lifestyle,
            validation: None,
            options: vec![
                option("1", "Sedentary"),
                option("2", "Lightly active"),
                option("3", "Moderately active"),
                option("4", "Very active"),
            ],
            successor: Successor::Fixed("sleep_hours"),
        },
        QuestionNode {
            key: "sleep_hours",
            prompt_key: "questions.sleep_hours.prompt",
            kind: QuestionKind::FreeText,
            phase: Phase::Lifestyle,
            validation: Some(ValidationRule::NumericRange {
                min: 3.0,
                max: 14.0,
                message: "Sleep hours must be between 3 and 14.",
            }),
            options: Vec::new(),
            successor: Successor::Fixed("primary_goal"),
        },
        QuestionNode {
            key: "primary_goal",
            prompt_key: "questions.primary_goal.prompt",
            kind: QuestionKind::SingleSelect,
            phase: Phase::Goals,
            validation: None,
            options: vec![
                option("1", "Weight loss"),
                option("2", "Weight gain"),
                option("3", "Muscle building"),
                option("4", "General fitness"),
                option("5", "Medical management"),
            ],
            successor: Successor::Fixed("recovery_needs"),
        },
        QuestionNode {
            key: "recovery_needs",
            prompt_key: "questions.recovery_needs.prompt",
            kind: QuestionKind::MultiSelect,
            phase: Phase::Goals,
            validation: None,
            options: vec![
                option("11", "Sports recovery"),
                option("12", "Immunity support"),
                option("13", "Gut health"),
                option(option_ids::RECOVERY_ORGAN, "Organ recovery"),
                option(option_ids::RECOVERY_POST_SURGERY, "Post-surgery nutrition"),
                option("16", "No special recovery needs"),
            ],
            successor: Successor::Conditional {
                branches: vec![
                    Branch {
                        condition: Condition::Predicate(PredicateId::HasOrganRecovery),
                        target: "organ_recovery_notes",
                    },
                    Branch {
                        condition: Condition::Predicate(PredicateId::HasPostSurgery),
                        target: "post_surgery_notes",
                    },
                ],
                fallback: "target_timeline",
            },
        },
        QuestionNode {
            key: "organ_recovery_notes",
            prompt_key: "questions.organ_recovery_notes.prompt",
            kind: QuestionKind::FreeText,
            phase: Phase::Goals,
            validation: None,
            options: Vec::new(),
            // Post-surgery detail still applies when both recovery flags
            // were selected; the predicate reads the earlier answer.
            successor: Successor::Conditional {
                branches: vec![Branch {
                    condition: Condition::Predicate(PredicateId::HasPostSurgery),
                    target: "post_surgery_notes",
                }],
                fallback: "target_timeline",
            },
        },
        QuestionNode {
            key: "post_surgery_notes",
            prompt_key: "questions.post_surgery_notes.prompt",
            kind: QuestionKind::FreeText,
            phase: Phase::Goals,
            validation: None,
            options: Vec::new(),
            successor: Successor::Fixed("target_timeline"),
        },
        QuestionNode {
            key: "target_timeline",
            prompt_key: "questions.target_timeline.prompt",
            kind: QuestionKind::SingleSelect,
            phase: Phase::Goals,
            validation: None,
            options: vec![
                option("1", "One month"),
                option("2", "Three months"),
                option("3", "Six months"),
                option("4", "One year"),
            ],
            successor: Successor::Fixed("plan_notes"),
        },
        QuestionNode {
            key: "plan_notes",
            prompt_key: "questions.plan_notes.prompt",
            kind: QuestionKind::FreeText,
            phase: Phase::PlanCustomization,
            validation: None,
            options: Vec::new(),
            successor: Successor::Fixed("assessment_complete"),
        },
        QuestionNode {
            key: "assessment_complete",
            prompt_key: "questions.assessment_complete.prompt",
            kind: QuestionKind::FreeText,
            phase: Phase::PlanCustomization,
            validation: None,
            options: Vec::new(),
            successor: Successor::Terminal,
        },
    ]
}
