use crate::inbound::{admin, health, user};

use model_tenancy::{
    NewTenantRequest, Property, RequestStatus, Tenant, TenantRequest, UserRole,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health,

        // admin views
        admin::get_properties::get_properties_handler,
        admin::get_tenants::get_tenants_handler,
        admin::approve_request::approve_request_handler,
        admin::assign_property::assign_property_handler,

        // member views
        user::get_tenants::get_tenants_handler,
        user::create_request::create_request_handler,
    ),
    components(
        schemas(
            Property,
            Tenant,
            TenantRequest,
            NewTenantRequest,
            RequestStatus,
            UserRole,
        ),
    ),
    tags(
        (name = "dashboard service", description = "Enriched cross-domain views and request lifecycle forwarding")
    )
)]
pub struct ApiDoc;
