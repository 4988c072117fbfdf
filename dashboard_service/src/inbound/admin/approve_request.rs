use axum::{
    Json,
    extract::{Path, State},
};
use model_tenancy::{Caller, TenantRequest};

use crate::inbound::{context::ApiContext, http::HttpError};

/// Approve a pending tenant request
#[utoipa::path(
    put,
    tag = "dashboard service",
    path = "/api/dashboard/admin/tenant-requests/{id}/approve",
    params(("id" = i64, Path, description = "Request id")),
    responses(
        (status = 200, body = TenantRequest),
        (status = 401, body = String),
        (status = 403, body = String),
        (status = 404, body = String),
        (status = 409, body = String),
        (status = 502, body = String),
    )
)]
#[tracing::instrument(skip(ctx, caller), fields(caller_id = caller.user_id))]
pub async fn approve_request_handler(
    State(ctx): State<ApiContext>,
    caller: Caller,
    Path(id): Path<i64>,
) -> Result<Json<TenantRequest>, HttpError> {
    let approved = ctx.dashboard.approve_request(&caller, id).await?;
    Ok(Json(approved))
}
