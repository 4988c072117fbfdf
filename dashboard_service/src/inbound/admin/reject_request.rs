use axum::{
    Json,
    extract::{Path, State},
};
use model_tenancy::{Caller, TenantRequest};

use crate::inbound::{context::ApiContext, http::HttpError};

/// Reject a pending tenant request
#[tracing::instrument(skip(ctx, caller), fields(caller_id = caller.user_id))]
pub async fn reject_request_handler(
    State(ctx): State<ApiContext>,
    caller: Caller,
    Path(id): Path<i64>,
) -> Result<Json<TenantRequest>, HttpError> {
    let rejected = ctx.dashboard.reject_request(&caller, id).await?;
    Ok(Json(rejected))
}
