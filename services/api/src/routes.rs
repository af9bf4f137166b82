use crate::infra::AppState;
use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use coachflow::flows::assessment::{
    assessment_router, AssessmentService, CatalogVariant, Phase, ProfileSink, SessionStore,
};
use serde::Serialize;
use serde_json::json;
use std::sync::Arc;

#[derive(Debug, Serialize)]
pub(crate) struct CatalogSummaryResponse {
    pub(crate) variant: CatalogVariant,
    pub(crate) label: &'static str,
    pub(crate) first_question: &'static str,
    pub(crate) question_count: usize,
    pub(crate) total_phases: u8,
    pub(crate) questions: Vec<CatalogQuestionEntry>,
}

#[derive(Debug, Serialize)]
pub(crate) struct CatalogQuestionEntry {
    pub(crate) key: &'static str,
    pub(crate) phase: Phase,
    pub(crate) options: usize,
}

pub(crate) fn with_assessment_routes<S, P>(
    service: Arc<AssessmentService<S, P>>,
) -> axum::Router
where
    S: SessionStore + 'static,
    P: ProfileSink + 'static,
{
    let catalogs = axum::Router::new()
        .route(
            "/api/v1/catalogs/:variant",
            axum::routing::get(catalog_summary_endpoint::<S, P>),
        )
        .with_state(service.clone());

    assessment_router(service)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .merge(catalogs)
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn catalog_summary_endpoint<S, P>(
    State(service): State<Arc<AssessmentService<S, P>>>,
    Path(variant): Path<String>,
) -> Result<Json<CatalogSummaryResponse>, (StatusCode, Json<serde_json::Value>)>
where
    S: SessionStore + 'static,
    P: ProfileSink + 'static,
{
    let variant = CatalogVariant::parse(&variant).map_err(|err| {
        (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": err.to_string() })),
        )
    })?;

    // The library validated all three catalogs at startup.
    let catalog = service.catalogs().get(variant);

    let questions = catalog
        .keys()
        .filter_map(|key| catalog.node(key))
        .map(|node| CatalogQuestionEntry {
            key: node.key,
            phase: node.phase,
            options: node.options.len(),
        })
        .collect();

    Ok(Json(CatalogSummaryResponse {
        variant,
        label: variant.label(),
        first_question: catalog.first_question().key,
        question_count: catalog.len(),
        total_phases: Phase::TOTAL,
        questions,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::{InMemoryProfileSink, InMemorySessionStore};

    fn test_service() -> Arc<AssessmentService<InMemorySessionStore, InMemoryProfileSink>> {
        let store = Arc::new(InMemorySessionStore::default());
        let profiles = Arc::new(InMemoryProfileSink::default());
        Arc::new(AssessmentService::new(store, profiles).expect("catalogs load"))
    }

    #[tokio::test]
    async fn catalog_summary_endpoint_describes_variant() {
        let Json(body) =
            catalog_summary_endpoint(State(test_service()), Path("comprehensive".to_owned()))
                .await
                .expect("summary builds");

        assert_eq!(body.variant, CatalogVariant::Comprehensive);
        assert_eq!(body.first_question, "age");
        assert_eq!(body.question_count, 31);
        assert_eq!(body.total_phases, 7);
        assert!(body.questions.iter().any(|entry| entry.key == "jain_preferences"));
    }

    #[tokio::test]
    async fn catalog_summary_endpoint_rejects_unknown_variant() {
        let (status, _) = catalog_summary_endpoint(State(test_service()), Path("express".to_owned()))
            .await
            .expect_err("unknown variant rejected");
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn healthcheck_reports_ok() {
        let Json(body) = healthcheck().await;
        assert_eq!(body["status"], "ok");
    }
}
