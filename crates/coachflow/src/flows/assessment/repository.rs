//! Collaborator seams for persistence and profile hand-off.
//!
//! The engine itself is a pure state transition; the store owns
//! durability and must serialize concurrent submissions for the same
//! session id (per-session mutual exclusion or an optimistic version
//! check on update). Distinct sessions are independent.

use super::domain::{FinalizedProfile, OwnerId, SessionId};
use super::session::AssessmentSession;

/// Storage abstraction so the service module can be exercised in
/// isolation.
pub trait SessionStore: Send + Sync {
    fn insert(&self, session: AssessmentSession) -> Result<AssessmentSession, StoreError>;
    fn update(&self, session: AssessmentSession) -> Result<(), StoreError>;
    fn fetch(&self, id: &SessionId) -> Result<Option<AssessmentSession>, StoreError>;
    /// The in-progress session for an owner, if any. Backs the
    /// one-active-session-per-owner precondition.
    fn active_for_owner(&self, owner: &OwnerId) -> Result<Option<AssessmentSession>, StoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("session already exists")]
    Conflict,
    #[error("session not found")]
    NotFound,
    #[error("session store unavailable: {0}")]
    Unavailable(String),
}

/// Receives the finalized response bundle when a session completes. The
/// implementation maps bundle entries onto the persisted client-profile
/// record.
pub trait ProfileSink: Send + Sync {
    fn publish(&self, profile: FinalizedProfile) -> Result<(), ProfileSinkError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ProfileSinkError {
    #[error("profile sink unavailable: {0}")]
    Transport(String),
}
