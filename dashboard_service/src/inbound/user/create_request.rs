use axum::{Json, extract::State, http::StatusCode};
use model_tenancy::{Caller, NewTenantRequest, TenantRequest};

use crate::inbound::{context::ApiContext, http::HttpError};

/// Submit a tenant request on behalf of the caller
#[utoipa::path(
    post,
    tag = "dashboard service",
    path = "/api/dashboard/user/tenant-request",
    request_body = NewTenantRequest,
    responses(
        (status = 201, body = TenantRequest),
        (status = 400, body = String),
        (status = 401, body = String),
        (status = 409, description = "Email already a tenant, or a pending request exists", body = String),
        (status = 502, body = String),
    )
)]
#[tracing::instrument(skip(ctx, caller, request), fields(caller_id = caller.user_id, email = %request.email))]
pub async fn create_request_handler(
    State(ctx): State<ApiContext>,
    caller: Caller,
    Json(request): Json<NewTenantRequest>,
) -> Result<(StatusCode, Json<TenantRequest>), HttpError> {
    let saved = ctx.dashboard.submit_request(&caller, request).await?;
    Ok((StatusCode::CREATED, Json(saved)))
}
