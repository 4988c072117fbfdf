use axum::{Json, extract::State};
use model_tenancy::{Caller, Property};

use crate::inbound::{context::ApiContext, http::HttpError};

/// Every property, enriched with owner name and tenant count
#[utoipa::path(
    get,
    tag = "dashboard service",
    path = "/api/dashboard/admin/properties",
    responses(
        (status = 200, body = Vec<Property>),
        (status = 401, body = String),
        (status = 403, body = String),
        (status = 502, body = String),
    )
)]
#[tracing::instrument(skip(ctx, caller), fields(caller_id = caller.user_id))]
pub async fn get_properties_handler(
    State(ctx): State<ApiContext>,
    caller: Caller,
) -> Result<Json<Vec<Property>>, HttpError> {
    let properties = ctx.dashboard.all_properties_enriched(&caller).await?;
    Ok(Json(properties))
}
