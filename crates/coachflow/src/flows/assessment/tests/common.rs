use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::response::Response;
use serde_json::Value;

use crate::flows::assessment::catalog::{CatalogVariant, QuestionCatalog};
use crate::flows::assessment::domain::{
    AnswerValue, FinalizedProfile, OwnerId, ResponseSet, SessionId, SessionStatus,
};
use crate::flows::assessment::repository::{
    ProfileSink, ProfileSinkError, SessionStore, StoreError,
};
use crate::flows::assessment::service::AssessmentService;
use crate::flows::assessment::session::AssessmentSession;

pub(super) fn quick_catalog() -> QuestionCatalog {
    QuestionCatalog::load(CatalogVariant::Quick).expect("quick catalog loads")
}

pub(super) fn moderate_catalog() -> QuestionCatalog {
    QuestionCatalog::load(CatalogVariant::Moderate).expect("moderate catalog loads")
}

pub(super) fn comprehensive_catalog() -> QuestionCatalog {
    QuestionCatalog::load(CatalogVariant::Comprehensive).expect("comprehensive catalog loads")
}

pub(super) fn owner(suffix: &str) -> OwnerId {
    OwnerId(format!("client-{suffix}"))
}

/// Branch-free answers that walk the quick catalog from the first
/// question to completion, in traversal order.
pub(super) const QUICK_DEFAULT_RUN: &[(&str, &str)] = &[
    ("age", "28"),
    ("gender", "male"),
    ("height", "172"),
    ("weight", "68"),
    ("health_conditions", "16"),
    ("allergies", "2, 7"),
    ("diet_type", "4"),
    ("meal_frequency", "2"),
    ("preferred_cuisines", "1, 4"),
    ("food_dislikes", "bitter gourd"),
    ("activity_level", "3"),
    ("sleep_hours", "7"),
    ("primary_goal", "1"),
    ("recovery_needs", "16"),
    ("target_timeline", "2"),
    ("plan_notes", "prefer home cooked meals"),
];

pub(super) fn responses_from(pairs: &[(&str, &str)]) -> ResponseSet {
    let mut responses = ResponseSet::default();
    for (key, value) in pairs {
        responses.record(key, AnswerValue::Single((*value).to_owned()));
    }
    responses
}

pub(super) fn started_session(catalog: &QuestionCatalog, suffix: &str) -> AssessmentSession {
    AssessmentSession::start(
        SessionId(format!("asmt-test-{suffix}")),
        owner(suffix),
        catalog,
        chrono::Utc::now(),
    )
}

/// Drives a session through `answers`, panicking on any rejection.
pub(super) fn drive(
    session: &mut AssessmentSession,
    catalog: &QuestionCatalog,
    answers: &[(&str, &str)],
) {
    for (key, value) in answers {
        assert_eq!(
            session.current_question, *key,
            "expected to be prompted for '{key}'"
        );
        session
            .submit_answer(catalog, value, chrono::Utc::now())
            .unwrap_or_else(|err| panic!("answer for '{key}' accepted: {err}"));
    }
}

pub(super) fn build_service() -> (
    AssessmentService<MemorySessionStore, RecordingProfileSink>,
    Arc<MemorySessionStore>,
    Arc<RecordingProfileSink>,
) {
    let store = Arc::new(MemorySessionStore::default());
    let sink = Arc::new(RecordingProfileSink::default());
    let service = AssessmentService::new(store.clone(), sink.clone()).expect("catalogs load");
    (service, store, sink)
}

#[derive(Default, Clone)]
pub(super) struct MemorySessionStore {
    pub(super) records: Arc<Mutex<HashMap<SessionId, AssessmentSession>>>,
}

impl SessionStore for MemorySessionStore {
    fn insert(&self, session: AssessmentSession) -> Result<AssessmentSession, StoreError> {
        let mut guard = self.records.lock().expect("store mutex poisoned");
        if guard.contains_key(&session.session_id) {
            return Err(StoreError::Conflict);
        }
        guard.insert(session.session_id.clone(), session.clone());
        Ok(session)
    }

    fn update(&self, session: AssessmentSession) -> Result<(), StoreError> {
        let mut guard = self.records.lock().expect("store mutex poisoned");
        if !guard.contains_key(&session.session_id) {
            return Err(StoreError::NotFound);
        }
        guard.insert(session.session_id.clone(), session);
        Ok(())
    }

    fn fetch(&self, id: &SessionId) -> Result<Option<AssessmentSession>, StoreError> {
        let guard = self.records.lock().expect("store mutex poisoned");
        Ok(guard.get(id).cloned())
    }

    fn active_for_owner(&self, owner: &OwnerId) -> Result<Option<AssessmentSession>, StoreError> {
        let guard = self.records.lock().expect("store mutex poisoned");
        Ok(guard
            .values()
            .find(|session| {
                session.owner_id == *owner && session.status == SessionStatus::InProgress
            })
            .cloned())
    }
}

#[derive(Default, Clone)]
pub(super) struct RecordingProfileSink {
    published: Arc<Mutex<Vec<FinalizedProfile>>>,
}

impl RecordingProfileSink {
    pub(super) fn published(&self) -> Vec<FinalizedProfile> {
        self.published.lock().expect("sink mutex poisoned").clone()
    }
}

impl ProfileSink for RecordingProfileSink {
    fn publish(&self, profile: FinalizedProfile) -> Result<(), ProfileSinkError> {
        self.published
            .lock()
            .expect("sink mutex poisoned")
            .push(profile);
        Ok(())
    }
}

pub(super) struct UnavailableStore;

impl SessionStore for UnavailableStore {
    fn insert(&self, _session: AssessmentSession) -> Result<AssessmentSession, StoreError> {
        Err(StoreError::Unavailable("database offline".to_string()))
    }

    fn update(&self, _session: AssessmentSession) -> Result<(), StoreError> {
        Err(StoreError::Unavailable("database offline".to_string()))
    }

    fn fetch(&self, _id: &SessionId) -> Result<Option<AssessmentSession>, StoreError> {
        Err(StoreError::Unavailable("database offline".to_string()))
    }

    fn active_for_owner(&self, _owner: &OwnerId) -> Result<Option<AssessmentSession>, StoreError> {
        Err(StoreError::Unavailable("database offline".to_string()))
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
