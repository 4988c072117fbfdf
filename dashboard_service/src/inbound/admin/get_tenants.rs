use axum::{Json, extract::State};
use model_tenancy::{Caller, Tenant};

use crate::inbound::{context::ApiContext, http::HttpError};

/// Every tenant, enriched with sponsor and property names
#[utoipa::path(
    get,
    tag = "dashboard service",
    path = "/api/dashboard/admin/tenants",
    responses(
        (status = 200, body = Vec<Tenant>),
        (status = 401, body = String),
        (status = 403, body = String),
        (status = 502, body = String),
    )
)]
#[tracing::instrument(skip(ctx, caller), fields(caller_id = caller.user_id))]
pub async fn get_tenants_handler(
    State(ctx): State<ApiContext>,
    caller: Caller,
) -> Result<Json<Vec<Tenant>>, HttpError> {
    let tenants = ctx.dashboard.all_tenants_enriched(&caller).await?;
    Ok(Json(tenants))
}
