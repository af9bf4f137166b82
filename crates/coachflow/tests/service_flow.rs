use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use coachflow::flows::assessment::{
    AssessmentService, AssessmentServiceError, AssessmentSession, CatalogVariant, FinalizedProfile,
    OwnerId, ProfileSink, ProfileSinkError, SessionId, SessionStatus, SessionStore, StoreError,
};

#[derive(Default)]
struct MapStore {
    records: Mutex<HashMap<SessionId, AssessmentSession>>,
}

impl SessionStore for MapStore {
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
        Ok(self.records.lock().expect("store mutex poisoned").get(id).cloned())
    }

    fn active_for_owner(&self, owner: &OwnerId) -> Result<Option<AssessmentSession>, StoreError> {
        Ok(self
            .records
            .lock()
            .expect("store mutex poisoned")
            .values()
            .find(|session| {
                session.owner_id == *owner && session.status == SessionStatus::InProgress
            })
            .cloned())
    }
}

#[derive(Default)]
struct VecSink {
    profiles: Mutex<Vec<FinalizedProfile>>,
}

impl ProfileSink for VecSink {
    fn publish(&self, profile: FinalizedProfile) -> Result<(), ProfileSinkError> {
        self.profiles.lock().expect("sink mutex poisoned").push(profile);
        Ok(())
    }
}

const QUICK_ANSWERS: &[&str] = &[
    "28", "1", "172", "68", "16", "2", "4", "2", "1", "none", "3", "7", "1", "16", "2", "none",
];

#[test]
fn service_runs_a_quick_assessment_front_to_back() {
    let store = Arc::new(MapStore::default());
    let sink = Arc::new(VecSink::default());
    let service =
        AssessmentService::new(store.clone(), sink.clone()).expect("catalogs load and validate");

    let owner = OwnerId("client-e2e".to_owned());
    let started = service
        .start(owner.clone(), CatalogVariant::Quick)
        .expect("assessment starts");
    assert_eq!(started.question.key, "age");

    // One active assessment per owner.
    assert!(matches!(
        service.start(owner.clone(), CatalogVariant::Quick),
        Err(AssessmentServiceError::AlreadyActive { .. })
    ));

    let id = started.session.session_id.clone();
    let mut last = None;
    for answer in QUICK_ANSWERS {
        last = Some(service.submit(&id, answer).expect("answer accepted"));
    }

    let view = last.expect("at least one submission");
    assert!(view.completed);
    assert_eq!(view.session.percent_complete, 100);

    let status = service.status(&id).expect("status resolves");
    assert_eq!(status.status, SessionStatus::Completed);
    assert_eq!(status.answered, QUICK_ANSWERS.len());

    let profiles = sink.profiles.lock().expect("sink mutex poisoned");
    assert_eq!(profiles.len(), 1);
    assert_eq!(profiles[0].owner_id, owner);
    assert_eq!(profiles[0].variant, CatalogVariant::Quick);
}
