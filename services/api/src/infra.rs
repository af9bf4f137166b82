use coachflow::flows::assessment::{
    AssessmentSession, FinalizedProfile, OwnerId, ProfileSink, ProfileSinkError, SessionId,
    SessionStatus, SessionStore, StoreError,
};
use metrics_exporter_prometheus::PrometheusHandle;
use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

#[derive(Default, Clone)]
pub(crate) struct InMemorySessionStore {
    records: Arc<Mutex<HashMap<SessionId, AssessmentSession>>>,
}

impl SessionStore for InMemorySessionStore {
    fn insert(&self, session: AssessmentSession) -> Result<AssessmentSession, StoreError> {
        let mut guard = self.records.lock().expect("session store mutex poisoned");
        if guard.contains_key(&session.session_id) {
            return Err(StoreError::Conflict);
        }
        guard.insert(session.session_id.clone(), session.clone());
        Ok(session)
    }

    fn update(&self, session: AssessmentSession) -> Result<(), StoreError> {
        let mut guard = self.records.lock().expect("session store mutex poisoned");
        if guard.contains_key(&session.session_id) {
            guard.insert(session.session_id.clone(), session);
            Ok(())
        } else {
            Err(StoreError::NotFound)
        }
    }

    fn fetch(&self, id: &SessionId) -> Result<Option<AssessmentSession>, StoreError> {
        let guard = self.records.lock().expect("session store mutex poisoned");
        Ok(guard.get(id).cloned())
    }

    fn active_for_owner(&self, owner: &OwnerId) -> Result<Option<AssessmentSession>, StoreError> {
        let guard = self.records.lock().expect("session store mutex poisoned");
        Ok(guard
            .values()
            .find(|session| {
                session.owner_id == *owner && session.status == SessionStatus::InProgress
            })
            .cloned())
    }
}

/// Keeps finalized profiles in memory and logs each publication. Stands in
/// for the plan-generation pipeline the deployed service feeds.
#[derive(Default, Clone)]
pub(crate) struct InMemoryProfileSink {
    profiles: Arc<Mutex<Vec<FinalizedProfile>>>,
}

impl ProfileSink for InMemoryProfileSink {
    fn publish(&self, profile: FinalizedProfile) -> Result<(), ProfileSinkError> {
        info!(
            session = %profile.session_id,
            owner = %profile.owner_id,
            answers = profile.responses.len(),
            "assessment profile finalized"
        );
        let mut guard = self.profiles.lock().expect("profile sink mutex poisoned");
        guard.push(profile);
        Ok(())
    }
}

impl InMemoryProfileSink {
    pub(crate) fn profiles(&self) -> Vec<FinalizedProfile> {
        self.profiles.lock().expect("profile sink mutex poisoned").clone()
    }
}
