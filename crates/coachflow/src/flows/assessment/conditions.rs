//! Named predicates and literal branch conditions evaluated during
//! navigation. Everything here is pure; predicates only read the
//! accumulated response set.

use serde::Serialize;

use super::domain::{AnswerValue, ResponseSet};

/// Canonical option ids shared by all three catalog variants. The source
/// questionnaires drifted between id schemes; the tables in this crate are
/// normalized to these assignments.
pub mod option_ids {
    pub const DIET_JAIN: &str = "5";
    pub const ALLERGY_OTHER: &str = "13";
    pub const RECOVERY_ORGAN: &str = "14";
    pub const RECOVERY_POST_SURGERY: &str = "15";
    pub const HEALTH_NONE: &str = "16";
}

/// Question keys the named predicates are bound to. Each predicate reads
/// its own fixed key, never the currently-active question.
pub mod question_keys {
    pub const HEALTH_CONDITIONS: &str = "health_conditions";
    pub const ALLERGIES: &str = "allergies";
    pub const RECOVERY_NEEDS: &str = "recovery_needs";
}

/// Named boolean test over the accumulated answers. Answers may be stored
/// as option ids or as display labels depending on the channel that
/// recorded them, so both forms are matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PredicateId {
    HasOtherAllergies,
    HasOrganRecovery,
    HasPostSurgery,
    HasHealthCondition,
}

impl PredicateId {
    pub const fn focus_key(self) -> &'static str {
        match self {
            Self::HasOtherAllergies => question_keys::ALLERGIES,
            Self::HasOrganRecovery | Self::HasPostSurgery => question_keys::RECOVERY_NEEDS,
            Self::HasHealthCondition => question_keys::HEALTH_CONDITIONS,
        }
    }

    pub fn evaluate(self, responses: &ResponseSet) -> bool {
        let answer = responses.get(self.focus_key());
        match self {
            Self::HasOtherAllergies => answer.is_some_and(|value| {
                value.contains_token(option_ids::ALLERGY_OTHER) || value.contains_token("Other")
            }),
            Self::HasOrganRecovery => answer.is_some_and(|value| {
                value.contains_token(option_ids::RECOVERY_ORGAN)
                    || value.contains_token("Organ recovery")
            }),
            Self::HasPostSurgery => answer.is_some_and(|value| {
                value.contains_token(option_ids::RECOVERY_POST_SURGERY)
                    || value.contains_token("Post-surgery nutrition")
            }),
            // True unless the answer is exactly the none-of-the-above
            // sentinel. An unanswered question evaluates false.
            Self::HasHealthCondition => answer.is_some_and(|value| {
                !(value.is_exactly(option_ids::HEALTH_NONE)
                    || value.is_exactly("None of the above"))
            }),
        }
    }
}

/// Branch condition on a conditional successor. `AnswerIn` tests the
/// just-recorded answer against an enumerated id set; `Predicate` runs a
/// named predicate over the full response set.
#[derive(Debug, Clone, Copy)]
pub enum Condition {
    AnswerIn(&'static [&'static str]),
    Predicate(PredicateId),
}

impl Condition {
    pub fn holds(&self, just_recorded: &AnswerValue, responses: &ResponseSet) -> bool {
        match self {
            Condition::AnswerIn(ids) => just_recorded
                .tokens()
                .iter()
                .any(|token| ids.iter().any(|candidate| candidate == token)),
            Condition::Predicate(predicate) => predicate.evaluate(responses),
        }
    }
}
