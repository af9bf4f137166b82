use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use serde_json::json;

use super::catalog::CatalogVariant;
use super::domain::{OwnerId, SessionId};
use super::repository::{ProfileSink, SessionStore};
use super::service::{AssessmentService, AssessmentServiceError};

/// Router builder exposing HTTP endpoints for the assessment flow.
pub fn assessment_router<S, P>(service: Arc<AssessmentService<S, P>>) -> Router
where
    S: SessionStore + 'static,
    P: ProfileSink + 'static,
{
    Router::new()
        .route("/api/v1/assessments", post(start_handler::<S, P>))
        .route(
            "/api/v1/assessments/:session_id",
            get(status_handler::<S, P>),
        )
        .route(
            "/api/v1/assessments/:session_id/answers",
            post(answer_handler::<S, P>),
        )
        .with_state(service)
}

#[derive(Debug, Deserialize)]
pub struct StartAssessmentRequest {
    pub owner_id: String,
    pub variant: String,
}

#[derive(Debug, Deserialize)]
pub struct SubmitAnswerRequest {
    pub answer: String,
}

pub(crate) async fn start_handler<S, P>(
    State(service): State<Arc<AssessmentService<S, P>>>,
    axum::Json(request): axum::Json<StartAssessmentRequest>,
) -> Response
where
    S: SessionStore + 'static,
    P: ProfileSink + 'static,
{
    let variant = match CatalogVariant::parse(&request.variant) {
        Ok(variant) => variant,
        Err(err) => {
            let payload = json!({ "error": err.to_string() });
            return (StatusCode::BAD_REQUEST, axum::Json(payload)).into_response();
        }
    };

    match service.start(OwnerId(request.owner_id), variant) {
        Ok(started) => (StatusCode::CREATED, axum::Json(started)).into_response(),
        Err(err @ AssessmentServiceError::AlreadyActive { .. }) => {
            let payload = json!({ "error": err.to_string() });
            (StatusCode::CONFLICT, axum::Json(payload)).into_response()
        }
        Err(other) => internal_error(other),
    }
}

pub(crate) async fn answer_handler<S, P>(
    State(service): State<Arc<AssessmentService<S, P>>>,
    Path(session_id): Path<String>,
    axum::Json(request): axum::Json<SubmitAnswerRequest>,
) -> Response
where
    S: SessionStore + 'static,
    P: ProfileSink + 'static,
{
    let id = SessionId(session_id);
    match service.submit(&id, &request.answer) {
        Ok(view) => (StatusCode::OK, axum::Json(view)).into_response(),
        Err(AssessmentServiceError::Rejected {
            rejection,
            question,
        }) => {
            let payload = json!({
                "error": rejection.message,
                "question": question,
            });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
        Err(err @ AssessmentServiceError::UnknownSession(_)) => {
            let payload = json!({ "error": err.to_string() });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
        Err(err @ AssessmentServiceError::SessionCompleted(_)) => {
            let payload = json!({ "error": err.to_string() });
            (StatusCode::CONFLICT, axum::Json(payload)).into_response()
        }
        Err(other) => internal_error(other),
    }
}

pub(crate) async fn status_handler<S, P>(
    State(service): State<Arc<AssessmentService<S, P>>>,
    Path(session_id): Path<String>,
) -> Response
where
    S: SessionStore + 'static,
    P: ProfileSink + 'static,
{
    let id = SessionId(session_id);
    match service.status(&id) {
        Ok(view) => (StatusCode::OK, axum::Json(view)).into_response(),
        Err(err @ AssessmentServiceError::UnknownSession(_)) => {
            let payload = json!({ "error": err.to_string() });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
        Err(other) => internal_error(other),
    }
}

fn internal_error(err: AssessmentServiceError) -> Response {
    let payload = json!({ "error": err.to_string() });
    (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
}
