use axum::{Json, extract::State};
use model_tenancy::{Caller, TenantRequest};

use crate::inbound::{context::ApiContext, http::HttpError};

/// The requests still awaiting a decision
pub async fn get_pending_requests_handler(
    State(ctx): State<ApiContext>,
    caller: Caller,
) -> Result<Json<Vec<TenantRequest>>, HttpError> {
    let requests = ctx.dashboard.pending_requests(&caller).await?;
    Ok(Json(requests))
}
