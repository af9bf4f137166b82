use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::Utc;
use serde::Serialize;

use super::catalog::{CatalogVariant, ConfigurationError, QuestionCatalog};
use super::domain::{OwnerId, QuestionDescriptor, SessionId};
use super::repository::{ProfileSink, ProfileSinkError, SessionStore, StoreError};
use super::session::{
    AnswerRejection, AssessmentSession, SessionStatusView, SubmitError, SubmitOutcome,
};

/// The three validated catalogs, loaded once at startup. Loading fails
/// fast on any data-integrity fault, so a broken variant is never served.
pub struct CatalogLibrary {
    quick: QuestionCatalog,
    moderate: QuestionCatalog,
    comprehensive: QuestionCatalog,
}

impl CatalogLibrary {
    pub fn load() -> Result<Self, ConfigurationError> {
        Ok(Self {
            quick: QuestionCatalog::load(CatalogVariant::Quick)?,
            moderate: QuestionCatalog::load(CatalogVariant::Moderate)?,
            comprehensive: QuestionCatalog::load(CatalogVariant::Comprehensive)?,
        })
    }

    pub fn get(&self, variant: CatalogVariant) -> &QuestionCatalog {
        match variant {
            CatalogVariant::Quick => &self.quick,
            CatalogVariant::Moderate => &self.moderate,
            CatalogVariant::Comprehensive => &self.comprehensive,
        }
    }
}

/// Service composing the catalog library, session store, and profile
/// sink.
pub struct AssessmentService<S, P> {
    catalogs: CatalogLibrary,
    store: Arc<S>,
    profiles: Arc<P>,
}

static SESSION_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_session_id() -> SessionId {
    let id = SESSION_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    SessionId(format!("asmt-{id:06}"))
}

#[derive(Debug, Serialize)]
pub struct StartedAssessment {
    pub session: SessionStatusView,
    pub question: QuestionDescriptor,
}

#[derive(Debug, Serialize)]
pub struct SubmitView {
    pub session: SessionStatusView,
    pub completed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub question: Option<QuestionDescriptor>,
}

impl<S, P> AssessmentService<S, P>
where
    S: SessionStore + 'static,
    P: ProfileSink + 'static,
{
    pub fn new(store: Arc<S>, profiles: Arc<P>) -> Result<Self, ConfigurationError> {
        Ok(Self {
            catalogs: CatalogLibrary::load()?,
            store,
            profiles,
        })
    }

    pub fn catalogs(&self) -> &CatalogLibrary {
        &self.catalogs
    }

    /// Begin a new assessment. One in-progress session per owner: a
    /// second start is refused until the first completes.
    pub fn start(
        &self,
        owner: OwnerId,
        variant: CatalogVariant,
    ) -> Result<StartedAssessment, AssessmentServiceError> {
        if let Some(existing) = self.store.active_for_owner(&owner)? {
            return Err(AssessmentServiceError::AlreadyActive {
                owner,
                session_id: existing.session_id,
            });
        }

        let catalog = self.catalogs.get(variant);
        let session = AssessmentSession::start(next_session_id(), owner, catalog, Utc::now());
        let stored = self.store.insert(session)?;

        Ok(StartedAssessment {
            question: stored.current_descriptor(catalog)?,
            session: stored.status_view(catalog)?,
        })
    }

    /// Record an answer for the session's current question. Validation
    /// rejections carry the re-prompted question so the caller can render
    /// an inline retry.
    pub fn submit(
        &self,
        session_id: &SessionId,
        raw_answer: &str,
    ) -> Result<SubmitView, AssessmentServiceError> {
        let mut session = self
            .store
            .fetch(session_id)?
            .ok_or_else(|| AssessmentServiceError::UnknownSession(session_id.clone()))?;
        let catalog = self.catalogs.get(session.variant);

        match session.submit_answer(catalog, raw_answer, Utc::now()) {
            Ok(SubmitOutcome::Advanced { next }) => {
                self.store.update(session.clone())?;
                Ok(SubmitView {
                    session: session.status_view(catalog)?,
                    completed: false,
                    question: Some(next),
                })
            }
            Ok(SubmitOutcome::Completed { profile }) => {
                self.store.update(session.clone())?;
                self.profiles.publish(profile)?;
                Ok(SubmitView {
                    session: session.status_view(catalog)?,
                    completed: true,
                    question: None,
                })
            }
            Err(SubmitError::Rejected(rejection)) => {
                let question = session.current_descriptor(catalog)?;
                Err(AssessmentServiceError::Rejected {
                    rejection,
                    question,
                })
            }
            Err(SubmitError::Completed) => Err(AssessmentServiceError::SessionCompleted(
                session_id.clone(),
            )),
            Err(SubmitError::Configuration(err)) => Err(err.into()),
        }
    }

    pub fn status(
        &self,
        session_id: &SessionId,
    ) -> Result<SessionStatusView, AssessmentServiceError> {
        let session = self
            .store
            .fetch(session_id)?
            .ok_or_else(|| AssessmentServiceError::UnknownSession(session_id.clone()))?;
        let catalog = self.catalogs.get(session.variant);
        Ok(session.status_view(catalog)?)
    }
}

/// Error raised by the assessment service.
#[derive(Debug, thiserror::Error)]
pub enum AssessmentServiceError {
    #[error("owner '{owner}' already has an active assessment")]
    AlreadyActive {
        owner: OwnerId,
        session_id: SessionId,
    },
    #[error("session '{0}' not found")]
    UnknownSession(SessionId),
    #[error("session '{0}' is already completed")]
    SessionCompleted(SessionId),
    #[error("{rejection}")]
    Rejected {
        rejection: AnswerRejection,
        question: QuestionDescriptor,
    },
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Profile(#[from] ProfileSinkError),
}
