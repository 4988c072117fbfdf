//! HTTP inbound surface: error mapping, router assembly, and serving.

use anyhow::Context;
use axum::{
    Json, Router,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use model_error_response::ErrorResponse;

use crate::domain::error::{DashboardError, RejectionKind};

use super::{admin, context::ApiContext, health, swagger, user};

// ===== Error Handling =====

#[derive(Debug, Error)]
pub enum HttpError {
    #[error("{0}")]
    Forbidden(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Conflict(String),
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    BadGateway(String),
}

impl From<DashboardError> for HttpError {
    fn from(err: DashboardError) -> Self {
        match err {
            DashboardError::PermissionDenied(msg) => HttpError::Forbidden(msg),
            DashboardError::Upstream(e) => {
                tracing::error!(error = ?e, upstream = e.upstream, "upstream unavailable");
                HttpError::BadGateway(format!("{} unavailable", e.upstream))
            }
            DashboardError::Rejected { kind, message } => match kind {
                RejectionKind::NotFound => HttpError::NotFound(message),
                RejectionKind::Conflict => HttpError::Conflict(message),
                RejectionKind::Invalid => HttpError::BadRequest(message),
            },
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let status = match &self {
            HttpError::Forbidden(_) => StatusCode::FORBIDDEN,
            HttpError::NotFound(_) => StatusCode::NOT_FOUND,
            HttpError::Conflict(_) => StatusCode::CONFLICT,
            HttpError::BadRequest(_) => StatusCode::BAD_REQUEST,
            HttpError::BadGateway(_) => StatusCode::BAD_GATEWAY,
        };

        let message = self.to_string();
        (status, Json(ErrorResponse { message: &message })).into_response()
    }
}

// ===== Router =====

fn api_router(state: ApiContext) -> Router {
    Router::new()
        .nest("/api/dashboard/admin", admin::router())
        .nest("/api/dashboard/user", user::router())
        .with_state(state)
}

pub async fn setup_and_serve(state: ApiContext, port: usize) -> anyhow::Result<()> {
    let app = api_router(state)
        .layer(TraceLayer::new_for_http())
        // The health router is attached here so we don't attach the logging middleware to it
        .merge(health::router())
        .merge(SwaggerUi::new("/docs").url("/api-doc/openapi.json", swagger::ApiDoc::openapi()));

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .context("could not bind listener")?;
    tracing::info!(port, "dashboard service is up and running");

    axum::serve(listener, app.into_make_service())
        .await
        .context("error starting service")
}
