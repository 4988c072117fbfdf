use axum::{
    Router,
    routing::{get, post},
};

use super::context::ApiContext;

pub(in crate::inbound) mod create_request;
pub(in crate::inbound) mod get_properties;
pub(in crate::inbound) mod get_requests;
pub(in crate::inbound) mod get_tenants;

pub fn router() -> Router<ApiContext> {
    Router::new()
        .route("/tenants", get(get_tenants::get_tenants_handler))
        .route("/requests", get(get_requests::get_requests_handler))
        .route("/properties", get(get_properties::get_properties_handler))
        .route(
            "/tenant-request",
            post(create_request::create_request_handler),
        )
}
