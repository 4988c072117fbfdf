use axum::{
    Json,
    extract::{Query, State},
};
use model_tenancy::{Caller, Property};
use serde::Deserialize;

use crate::inbound::{context::ApiContext, http::HttpError};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserIdQuery {
    pub user_id: i64,
}

/// The properties a user owns plus the ones hosting their tenants
#[tracing::instrument(skip(ctx, caller), fields(caller_id = caller.user_id, user_id = query.user_id))]
pub async fn get_properties_handler(
    State(ctx): State<ApiContext>,
    caller: Caller,
    Query(query): Query<UserIdQuery>,
) -> Result<Json<Vec<Property>>, HttpError> {
    let properties = ctx
        .dashboard
        .properties_for_user_enriched(&caller, query.user_id)
        .await?;
    Ok(Json(properties))
}
