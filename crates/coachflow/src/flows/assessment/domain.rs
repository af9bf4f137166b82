use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::catalog::CatalogVariant;
use super::progress::Phase;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SessionId(pub String);

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OwnerId(pub String);

impl fmt::Display for OwnerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionStatus {
    InProgress,
    Completed,
}

impl SessionStatus {
    pub const fn label(self) -> &'static str {
        match self {
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionKind {
    FreeText,
    SingleSelect,
    MultiSelect,
}

impl QuestionKind {
    pub const fn allows_multiple(self) -> bool {
        matches!(self, Self::MultiSelect)
    }
}

/// One selectable choice. The label is the canonical English text; display
/// resolution goes through the localization collaborator keyed on the
/// question's prompt key and the option id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuestionOption {
    pub id: &'static str,
    pub label: &'static str,
}

/// Constraint applied to free-text answers before they are recorded.
#[derive(Debug, Clone, Copy)]
pub enum ValidationRule {
    NumericRange {
        min: f64,
        max: f64,
        message: &'static str,
    },
}

impl ValidationRule {
    pub fn check(&self, raw: &str) -> Result<(), String> {
        match self {
            ValidationRule::NumericRange { min, max, message } => {
                let value: f64 = raw.parse().map_err(|_| (*message).to_owned())?;
                if value < *min || value > *max {
                    return Err((*message).to_owned());
                }
                Ok(())
            }
        }
    }

    pub const fn message(&self) -> &'static str {
        match self {
            ValidationRule::NumericRange { message, .. } => message,
        }
    }
}

/// A recorded answer: one token for free text and single selects, an
/// ordered token list for multi selects. Single-select answers coming in
/// from legacy channels may already be comma-joined, so token access
/// always splits on commas.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerValue {
    Single(String),
    Multi(Vec<String>),
}

impl AnswerValue {
    pub fn tokens(&self) -> Vec<&str> {
        match self {
            Self::Single(raw) => raw
                .split(',')
                .map(str::trim)
                .filter(|token| !token.is_empty())
                .collect(),
            Self::Multi(items) => items.iter().map(|item| item.trim()).collect(),
        }
    }

    pub fn contains_token(&self, needle: &str) -> bool {
        self.tokens().iter().any(|token| *token == needle)
    }

    /// True when the answer reduces to exactly one token equal to `token`.
    pub fn is_exactly(&self, token: &str) -> bool {
        let tokens = self.tokens();
        tokens.len() == 1 && tokens[0] == token
    }

    pub fn joined(&self) -> String {
        match self {
            Self::Single(raw) => raw.clone(),
            Self::Multi(items) => items.join(", "),
        }
    }
}

/// Accumulated answers keyed by question key. Re-answering a question
/// overwrites the previous value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResponseSet(BTreeMap<String, AnswerValue>);

impl ResponseSet {
    pub fn record(&mut self, key: &str, answer: AnswerValue) {
        self.0.insert(key.to_owned(), answer);
    }

    pub fn get(&self, key: &str) -> Option<&AnswerValue> {
        self.0.get(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &AnswerValue)> {
        self.0.iter()
    }
}

/// Rendering-ready projection of a question for the transport layer.
#[derive(Debug, Clone, Serialize)]
pub struct QuestionDescriptor {
    pub key: &'static str,
    pub prompt_key: &'static str,
    pub kind: QuestionKind,
    pub allows_multiple: bool,
    pub options: Vec<QuestionOption>,
    pub phase: Phase,
    pub phase_label: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validation_message: Option<&'static str>,
}

/// Response bundle emitted once a session reaches the terminal question.
/// Mapping bundle entries onto persisted client-profile fields is the
/// profile sink collaborator's job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinalizedProfile {
    pub session_id: SessionId,
    pub owner_id: OwnerId,
    pub variant: CatalogVariant,
    pub responses: ResponseSet,
    pub completed_at: DateTime<Utc>,
}
