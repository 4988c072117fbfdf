use crate::inbound::{health, http};

use model_tenancy::{
    NewTenant, NewTenantRequest, RequestStatus, Tenant, TenantRequest,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health,

        // tenant requests
        http::create_tenant_request,
        http::list_pending_tenant_requests,
        http::approve_tenant_request,
        http::reject_tenant_request,

        // tenants
        http::assign_property_to_tenant,
    ),
    components(
        schemas(
            Tenant,
            NewTenant,
            TenantRequest,
            NewTenantRequest,
            RequestStatus,
        ),
    ),
    tags(
        (name = "tenancy service", description = "Tenants and the tenant-request lifecycle")
    )
)]
pub struct ApiDoc;
