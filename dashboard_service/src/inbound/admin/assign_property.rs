use axum::{
    Json,
    extract::{Path, Query, State},
};
use model_tenancy::{Caller, Tenant};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::inbound::{context::ApiContext, http::HttpError};

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AssignPropertyQuery {
    pub property_id: i64,
}

/// Assign a property to a tenant
#[utoipa::path(
    put,
    tag = "dashboard service",
    path = "/api/dashboard/admin/tenants/{id}/assign-property",
    params(
        ("id" = i64, Path, description = "Tenant id"),
        ("propertyId" = i64, Query, description = "Property to assign"),
    ),
    responses(
        (status = 200, body = Tenant),
        (status = 401, body = String),
        (status = 403, body = String),
        (status = 404, body = String),
        (status = 502, body = String),
    )
)]
#[tracing::instrument(skip(ctx, caller), fields(caller_id = caller.user_id))]
pub async fn assign_property_handler(
    State(ctx): State<ApiContext>,
    caller: Caller,
    Path(id): Path<i64>,
    Query(query): Query<AssignPropertyQuery>,
) -> Result<Json<Tenant>, HttpError> {
    let updated = ctx
        .dashboard
        .assign_property(&caller, id, query.property_id)
        .await?;
    Ok(Json(updated))
}
