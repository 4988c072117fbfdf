//! HTTP inbound adapters - thin wrappers around the lifecycle service

use std::sync::Arc;

use anyhow::Context;
use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, put},
};
use serde::Deserialize;
use thiserror::Error;
use tower_http::trace::TraceLayer;
use utoipa::{OpenApi, ToSchema};
use utoipa_swagger_ui::SwaggerUi;

use model_error_response::ErrorResponse;
use model_tenancy::{NewTenant, NewTenantRequest, Tenant, TenantRequest};
use rentwise_notify::EventBus;

use crate::domain::{error::TenancyError, services::RequestLifecycleImpl};
use crate::outbound::memory::{InMemoryRequestStore, InMemoryTenantStore};

use super::{health, swagger};

/// The concrete service this binary wires together.
pub type TenancyService = RequestLifecycleImpl<InMemoryRequestStore, InMemoryTenantStore, EventBus>;

// ===== Error Handling =====

#[derive(Debug, Error)]
pub enum HttpError {
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Conflict(String),
    #[error("{0}")]
    UnprocessableEntity(String),
    #[error("{0}")]
    Internal(String),
}

impl From<TenancyError> for HttpError {
    fn from(err: TenancyError) -> Self {
        match err {
            TenancyError::NotFound(msg) => HttpError::NotFound(msg),
            TenancyError::DuplicateEmail | TenancyError::ConflictingRequest => {
                HttpError::Conflict(err.to_string())
            }
            TenancyError::InvalidTransition { .. } => {
                HttpError::UnprocessableEntity(err.to_string())
            }
            TenancyError::Validation(msg) => HttpError::BadRequest(msg),
            TenancyError::Internal(e) => {
                tracing::error!(error = ?e, "internal error");
                HttpError::Internal("internal error".to_string())
            }
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let status = match &self {
            HttpError::BadRequest(_) => StatusCode::BAD_REQUEST,
            HttpError::NotFound(_) => StatusCode::NOT_FOUND,
            HttpError::Conflict(_) => StatusCode::CONFLICT,
            HttpError::UnprocessableEntity(_) => StatusCode::UNPROCESSABLE_ENTITY,
            HttpError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let message = self.to_string();
        (status, Json(ErrorResponse { message: &message })).into_response()
    }
}

// ===== Handlers =====

/// Submit a new tenant request
#[utoipa::path(
    post,
    tag = "tenancy service",
    path = "/api/tenant-requests",
    request_body = NewTenantRequest,
    responses(
        (status = 201, body = TenantRequest),
        (status = 400, body = String),
        (status = 409, description = "Email already a tenant, or a pending request exists", body = String),
        (status = 500, body = String),
    )
)]
#[tracing::instrument(skip(service, request), fields(email = %request.email))]
pub(crate) async fn create_tenant_request(
    State(service): State<Arc<TenancyService>>,
    Json(request): Json<NewTenantRequest>,
) -> Result<(StatusCode, Json<TenantRequest>), HttpError> {
    let saved = service.create_request(request).await?;
    Ok((StatusCode::CREATED, Json(saved)))
}

/// List every tenant request
pub(crate) async fn list_tenant_requests(
    State(service): State<Arc<TenancyService>>,
) -> Result<Json<Vec<TenantRequest>>, HttpError> {
    Ok(Json(service.list_requests().await?))
}

/// List the requests still awaiting a decision
#[utoipa::path(
    get,
    tag = "tenancy service",
    path = "/api/tenant-requests/pending",
    responses(
        (status = 200, body = Vec<TenantRequest>),
        (status = 500, body = String),
    )
)]
pub(crate) async fn list_pending_tenant_requests(
    State(service): State<Arc<TenancyService>>,
) -> Result<Json<Vec<TenantRequest>>, HttpError> {
    Ok(Json(service.list_pending().await?))
}

/// List the requests submitted by a user
pub(crate) async fn list_tenant_requests_by_user(
    State(service): State<Arc<TenancyService>>,
    Path(user_id): Path<i64>,
) -> Result<Json<Vec<TenantRequest>>, HttpError> {
    Ok(Json(service.list_by_requester(user_id).await?))
}

/// Approve a pending tenant request
#[utoipa::path(
    put,
    tag = "tenancy service",
    path = "/api/tenant-requests/{id}/approve",
    params(("id" = i64, Path, description = "Request id")),
    responses(
        (status = 200, body = TenantRequest),
        (status = 404, body = String),
        (status = 409, description = "Email became a tenant after submission", body = String),
        (status = 422, description = "Request is not pending", body = String),
        (status = 500, body = String),
    )
)]
#[tracing::instrument(skip(service))]
pub(crate) async fn approve_tenant_request(
    State(service): State<Arc<TenancyService>>,
    Path(id): Path<i64>,
) -> Result<Json<TenantRequest>, HttpError> {
    Ok(Json(service.approve_request(id).await?))
}

/// Reject a pending tenant request
#[utoipa::path(
    put,
    tag = "tenancy service",
    path = "/api/tenant-requests/{id}/reject",
    params(("id" = i64, Path, description = "Request id")),
    responses(
        (status = 200, body = TenantRequest),
        (status = 404, body = String),
        (status = 422, description = "Request is not pending", body = String),
        (status = 500, body = String),
    )
)]
#[tracing::instrument(skip(service))]
pub(crate) async fn reject_tenant_request(
    State(service): State<Arc<TenancyService>>,
    Path(id): Path<i64>,
) -> Result<Json<TenantRequest>, HttpError> {
    Ok(Json(service.reject_request(id).await?))
}

/// List every tenant
pub(crate) async fn list_tenants(
    State(service): State<Arc<TenancyService>>,
) -> Result<Json<Vec<Tenant>>, HttpError> {
    Ok(Json(service.list_tenants().await?))
}

/// Get a tenant by id
pub(crate) async fn get_tenant(
    State(service): State<Arc<TenancyService>>,
    Path(id): Path<i64>,
) -> Result<Json<Tenant>, HttpError> {
    Ok(Json(service.get_tenant(id).await?))
}

/// Register a tenant directly
pub(crate) async fn create_tenant(
    State(service): State<Arc<TenancyService>>,
    Json(tenant): Json<NewTenant>,
) -> Result<(StatusCode, Json<Tenant>), HttpError> {
    let saved = service.create_tenant(tenant).await?;
    Ok((StatusCode::CREATED, Json(saved)))
}

/// List the tenants sponsored by a user
pub(crate) async fn list_tenants_by_user(
    State(service): State<Arc<TenancyService>>,
    Path(user_id): Path<i64>,
) -> Result<Json<Vec<Tenant>>, HttpError> {
    Ok(Json(service.list_tenants_by_user(user_id).await?))
}

/// List the tenants assigned to a property
pub(crate) async fn list_tenants_by_property(
    State(service): State<Arc<TenancyService>>,
    Path(property_id): Path<i64>,
) -> Result<Json<Vec<Tenant>>, HttpError> {
    Ok(Json(service.list_tenants_by_property(property_id).await?))
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct AssignPropertyQuery {
    pub property_id: i64,
}

/// Assign a property to a tenant
#[utoipa::path(
    put,
    tag = "tenancy service",
    path = "/api/tenants/{id}/assign-property",
    params(
        ("id" = i64, Path, description = "Tenant id"),
        ("propertyId" = i64, Query, description = "Property to assign"),
    ),
    responses(
        (status = 200, body = Tenant),
        (status = 404, body = String),
        (status = 500, body = String),
    )
)]
#[tracing::instrument(skip(service))]
pub(crate) async fn assign_property_to_tenant(
    State(service): State<Arc<TenancyService>>,
    Path(id): Path<i64>,
    Query(query): Query<AssignPropertyQuery>,
) -> Result<Json<Tenant>, HttpError> {
    Ok(Json(service.assign_property(id, query.property_id).await?))
}

// ===== Router =====

pub fn api_router(service: Arc<TenancyService>) -> Router {
    Router::new()
        .route(
            "/api/tenant-requests",
            get(list_tenant_requests).post(create_tenant_request),
        )
        .route("/api/tenant-requests/pending", get(list_pending_tenant_requests))
        .route(
            "/api/tenant-requests/user/{user_id}",
            get(list_tenant_requests_by_user),
        )
        .route("/api/tenant-requests/{id}/approve", put(approve_tenant_request))
        .route("/api/tenant-requests/{id}/reject", put(reject_tenant_request))
        .route("/api/tenants", get(list_tenants).post(create_tenant))
        .route("/api/tenants/{id}", get(get_tenant))
        .route("/api/tenants/user/{user_id}", get(list_tenants_by_user))
        .route(
            "/api/tenants/property/{property_id}",
            get(list_tenants_by_property),
        )
        .route(
            "/api/tenants/{id}/assign-property",
            put(assign_property_to_tenant),
        )
        .with_state(service)
}

pub async fn setup_and_serve(service: Arc<TenancyService>, port: usize) -> anyhow::Result<()> {
    let app = api_router(service)
        .layer(TraceLayer::new_for_http())
        // The health router is attached here so we don't attach the logging middleware to it
        .merge(health::router())
        .merge(SwaggerUi::new("/docs").url("/api-doc/openapi.json", swagger::ApiDoc::openapi()));

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .context("could not bind listener")?;
    tracing::info!(port, "tenancy service is up and running");

    axum::serve(listener, app.into_make_service())
        .await
        .context("error starting service")
}
