use axum::{
    Json,
    extract::{Query, State},
};
use model_tenancy::{Caller, Tenant};
use serde::Deserialize;

use crate::inbound::{context::ApiContext, http::HttpError};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserIdQuery {
    pub user_id: i64,
}

/// The tenants sponsored by a user, with property names resolved
#[utoipa::path(
    get,
    tag = "dashboard service",
    path = "/api/dashboard/user/tenants",
    params(("userId" = i64, Query, description = "The sponsoring user")),
    responses(
        (status = 200, body = Vec<Tenant>),
        (status = 401, body = String),
        (status = 403, body = String),
        (status = 502, body = String),
    )
)]
#[tracing::instrument(skip(ctx, caller), fields(caller_id = caller.user_id, user_id = query.user_id))]
pub async fn get_tenants_handler(
    State(ctx): State<ApiContext>,
    caller: Caller,
    Query(query): Query<UserIdQuery>,
) -> Result<Json<Vec<Tenant>>, HttpError> {
    let tenants = ctx
        .dashboard
        .tenants_for_user_enriched(&caller, query.user_id)
        .await?;
    Ok(Json(tenants))
}
