use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::catalog::{CatalogVariant, ConfigurationError, QuestionCatalog, QuestionNode};
use super::domain::{
    AnswerValue, FinalizedProfile, OwnerId, QuestionDescriptor, QuestionKind, ResponseSet,
    SessionId, SessionStatus,
};
use super::navigator;
use super::progress::{self, Phase};

/// One assessment run. The struct is a plain snapshot: every transition
/// happens through [`AssessmentSession::submit_answer`] against an
/// immutable catalog, and the caller persists the result. Serializing a
/// session yields the store layout (responses map, phase, current
/// question key, status).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentSession {
    pub session_id: SessionId,
    pub owner_id: OwnerId,
    pub variant: CatalogVariant,
    pub current_question: String,
    pub current_phase: Phase,
    pub responses: ResponseSet,
    pub status: SessionStatus,
    pub started_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
}

/// Recoverable validation failure: the answer did not satisfy the current
/// question's rule. The session is left untouched and the caller
/// re-prompts with `message`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct AnswerRejection {
    pub question: String,
    pub message: String,
}

#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    #[error(transparent)]
    Rejected(#[from] AnswerRejection),
    #[error("assessment is already completed")]
    Completed,
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
}

#[derive(Debug)]
pub enum SubmitOutcome {
    Advanced { next: QuestionDescriptor },
    Completed { profile: FinalizedProfile },
}

/// Read-only status projection for one session snapshot.
#[derive(Debug, Clone, Serialize)]
pub struct SessionStatusView {
    pub session_id: SessionId,
    pub owner_id: OwnerId,
    pub variant: CatalogVariant,
    pub status: SessionStatus,
    pub current_question: String,
    pub phase_label: &'static str,
    pub phase_ordinal: u8,
    pub total_phases: u8,
    pub percent_complete: u8,
    pub answered: usize,
}

impl AssessmentSession {
    pub fn start(
        session_id: SessionId,
        owner_id: OwnerId,
        catalog: &QuestionCatalog,
        started_at: DateTime<Utc>,
    ) -> Self {
        let first = catalog.first_question();
        Self {
            session_id,
            owner_id,
            variant: catalog.variant(),
            current_question: first.key.to_owned(),
            current_phase: first.phase,
            responses: ResponseSet::default(),
            status: SessionStatus::InProgress,
            started_at,
            completed_at: None,
        }
    }

    /// Validates and records an answer for the current question, then
    /// advances the pointer (or completes the session when the resolved
    /// successor is the terminal question). A rejected answer leaves the
    /// session exactly as it was.
    pub fn submit_answer(
        &mut self,
        catalog: &QuestionCatalog,
        raw: &str,
        now: DateTime<Utc>,
    ) -> Result<SubmitOutcome, SubmitError> {
        if self.status == SessionStatus::Completed {
            return Err(SubmitError::Completed);
        }

        let node = catalog
            .node(&self.current_question)
            .ok_or_else(|| ConfigurationError::UnknownNode(self.current_question.clone()))?;

        let answer = validate_answer(node, raw)?;
        self.responses.record(node.key, answer.clone());

        let next = navigator::resolve_next(catalog, node, &answer, &self.responses)?;
        self.current_question = next.key.to_owned();
        self.current_phase = next.phase;

        if next.is_terminal() {
            self.status = SessionStatus::Completed;
            self.completed_at = Some(now);
            Ok(SubmitOutcome::Completed {
                profile: self.finalized_profile(now),
            })
        } else {
            Ok(SubmitOutcome::Advanced {
                next: next.descriptor(),
            })
        }
    }

    pub fn current_descriptor(
        &self,
        catalog: &QuestionCatalog,
    ) -> Result<QuestionDescriptor, ConfigurationError> {
        catalog
            .node(&self.current_question)
            .map(QuestionNode::descriptor)
            .ok_or_else(|| ConfigurationError::UnknownNode(self.current_question.clone()))
    }

    pub fn status_view(
        &self,
        catalog: &QuestionCatalog,
    ) -> Result<SessionStatusView, ConfigurationError> {
        let progress = progress::progress(catalog, &self.current_question, self.status)
            .ok_or_else(|| ConfigurationError::UnknownNode(self.current_question.clone()))?;

        Ok(SessionStatusView {
            session_id: self.session_id.clone(),
            owner_id: self.owner_id.clone(),
            variant: self.variant,
            status: self.status,
            current_question: self.current_question.clone(),
            phase_label: progress.phase_label,
            phase_ordinal: progress.phase_ordinal,
            total_phases: progress.total_phases,
            percent_complete: progress.percent_complete,
            answered: self.responses.len(),
        })
    }

    fn finalized_profile(&self, completed_at: DateTime<Utc>) -> FinalizedProfile {
        FinalizedProfile {
            session_id: self.session_id.clone(),
            owner_id: self.owner_id.clone(),
            variant: self.variant,
            responses: self.responses.clone(),
            completed_at,
        }
    }
}

fn validate_answer(node: &QuestionNode, raw: &str) -> Result<AnswerValue, AnswerRejection> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(reject(node, "An answer is required.".to_owned()));
    }

    match node.kind {
        QuestionKind::FreeText => {
            if let Some(rule) = &node.validation {
                rule.check(trimmed).map_err(|message| AnswerRejection {
                    question: node.key.to_owned(),
                    message,
                })?;
            }
            Ok(AnswerValue::Single(trimmed.to_owned()))
        }
        QuestionKind::SingleSelect => match node.canonical_token(trimmed) {
            Some(id) => Ok(AnswerValue::Single(id.to_owned())),
            None => Err(reject(
                node,
                "Please choose one of the listed options.".to_owned(),
            )),
        },
        QuestionKind::MultiSelect => {
            let tokens: Vec<&str> = trimmed
                .split(',')
                .map(str::trim)
                .filter(|token| !token.is_empty())
                .collect();
            if tokens.is_empty() {
                return Err(reject(node, "An answer is required.".to_owned()));
            }
            let mut ids = Vec::with_capacity(tokens.len());
            for token in tokens {
                match node.canonical_token(token) {
                    Some(id) => ids.push(id.to_owned()),
                    None => {
                        return Err(reject(
                            node,
                            format!("'{token}' is not one of the listed options."),
                        ))
                    }
                }
            }
            Ok(AnswerValue::Multi(ids))
        }
    }
}

fn reject(node: &QuestionNode, message: String) -> AnswerRejection {
    AnswerRejection {
        question: node.key.to_owned(),
        message,
    }
}
