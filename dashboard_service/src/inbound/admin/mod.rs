use axum::{
    Router,
    routing::{get, put},
};

use super::context::ApiContext;

pub(in crate::inbound) mod approve_request;
pub(in crate::inbound) mod assign_property;
pub(in crate::inbound) mod get_pending_requests;
pub(in crate::inbound) mod get_properties;
pub(in crate::inbound) mod get_tenants;
pub(in crate::inbound) mod reject_request;

pub fn router() -> Router<ApiContext> {
    Router::new()
        .route("/properties", get(get_properties::get_properties_handler))
        .route("/tenants", get(get_tenants::get_tenants_handler))
        .route(
            "/pending-requests",
            get(get_pending_requests::get_pending_requests_handler),
        )
        .route(
            "/tenant-requests/{id}/approve",
            put(approve_request::approve_request_handler),
        )
        .route(
            "/tenant-requests/{id}/reject",
            put(reject_request::reject_request_handler),
        )
        .route(
            "/tenants/{id}/assign-property",
            put(assign_property::assign_property_handler),
        )
}
