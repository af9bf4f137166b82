//! Conversational assessment flow: the question catalogs, condition
//! evaluator, navigation resolver, and session state machine behind the
//! client onboarding questionnaire.
//!
//! The engine is synchronous and stateless per call: each submission is a
//! pure transition over one session snapshot plus an immutable catalog.
//! Persistence and profile hand-off live behind the traits in
//! [`repository`]; prompt text stays behind opaque localization keys.

pub mod catalog;
pub mod conditions;
pub mod domain;
pub mod navigator;
pub mod progress;
pub mod repository;
pub mod router;
pub mod service;
pub mod session;

#[cfg(test)]
mod tests;

pub use catalog::{CatalogVariant, ConfigurationError, QuestionCatalog, QuestionNode, Successor};
pub use conditions::{Condition, PredicateId};
pub use domain::{
    AnswerValue, FinalizedProfile, OwnerId, QuestionDescriptor, QuestionKind, QuestionOption,
    ResponseSet, SessionId, SessionStatus, ValidationRule,
};
pub use navigator::resolve_next;
pub use progress::{Phase, ProgressView};
pub use repository::{ProfileSink, ProfileSinkError, SessionStore, StoreError};
pub use router::assessment_router;
pub use service::{
    AssessmentService, AssessmentServiceError, CatalogLibrary, StartedAssessment, SubmitView,
};
pub use session::{
    AnswerRejection, AssessmentSession, SessionStatusView, SubmitError, SubmitOutcome,
};
