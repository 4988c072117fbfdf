use axum::{
    Json,
    extract::{Query, State},
};
use model_tenancy::{Caller, TenantRequest};
use serde::Deserialize;

use crate::inbound::{context::ApiContext, http::HttpError};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserIdQuery {
    pub user_id: i64,
}

/// The requests a user has submitted
pub async fn get_requests_handler(
    State(ctx): State<ApiContext>,
    caller: Caller,
    Query(query): Query<UserIdQuery>,
) -> Result<Json<Vec<TenantRequest>>, HttpError> {
    let requests = ctx
        .dashboard
        .requests_for_user(&caller, query.user_id)
        .await?;
    Ok(Json(requests))
}
