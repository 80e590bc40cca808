//! Thin HTTP adapter over the classifier service.
//!
//! Two routes plus a version probe; everything interesting happens in
//! [`crate::classifier`].

use crate::chat::ChatCompletion;
use crate::classifier::{ClassifiedMessage, ClassifierService, ClassifyError, ClassifyRequest, SchemaResponse};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router, extract::State};
use serde_json::json;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub fn router<C>(service: Arc<ClassifierService<C>>) -> Router
where
    C: ChatCompletion + 'static,
{
    Router::new()
        .route("/", get(version))
        .route("/classifier/schema", get(schema::<C>))
        .route("/classifier/classify", post(classify::<C>))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(service)
}

async fn version() -> Json<serde_json::Value> {
    Json(json!({ "version": env!("CARGO_PKG_VERSION") }))
}

async fn schema<C: ChatCompletion>(
    State(service): State<Arc<ClassifierService<C>>>,
) -> Json<SchemaResponse> {
    Json(service.schema())
}

async fn classify<C: ChatCompletion>(
    State(service): State<Arc<ClassifierService<C>>>,
    Json(body): Json<ClassifyRequest>,
) -> Result<Json<ClassifiedMessage>, ApiError> {
    let classified = service.classify(&body).await?;
    Ok(Json(classified))
}

/// Maps pipeline failures onto HTTP statuses: an exhausted LLM retry budget
/// is a service-unavailable condition, never a partial classification.
struct ApiError(ClassifyError);

impl From<ClassifyError> for ApiError {
    fn from(err: ClassifyError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            ClassifyError::Chat(_) => StatusCode::SERVICE_UNAVAILABLE,
            ClassifyError::Template(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        tracing::error!(error = %self.0, "classification request failed");
        (status, Json(json!({ "error": self.0.to_string() }))).into_response()
    }
}
