//! HTTP outbound adapters - the domain ports implemented over the three
//! upstream service clients.

use model_tenancy::{NewTenantRequest, Property, Tenant, TenantRequest, User};
use property_service_client::PropertyServiceClient;
use rentwise_client_errors::RentwiseClientError;
use tenant_service_client::TenantServiceClient;
use user_service_client::UserServiceClient;

use crate::domain::error::{PassthroughError, RejectionKind, UpstreamError};
use crate::domain::ports::{PropertyDirectory, RequestDirectory, TenantDirectory, UserDirectory};

pub struct HttpUserDirectory {
    client: UserServiceClient,
}

impl HttpUserDirectory {
    pub fn new(client: UserServiceClient) -> Self {
        Self { client }
    }
}

impl UserDirectory for HttpUserDirectory {
    async fn list_users(&self) -> Result<Vec<User>, UpstreamError> {
        self.client
            .get_all_users()
            .await
            .map_err(|e| UpstreamError::new("user service", e))
    }
}

pub struct HttpPropertyDirectory {
    client: PropertyServiceClient,
}

impl HttpPropertyDirectory {
    pub fn new(client: PropertyServiceClient) -> Self {
        Self { client }
    }
}

impl PropertyDirectory for HttpPropertyDirectory {
    async fn list_properties(&self) -> Result<Vec<Property>, UpstreamError> {
        self.client
            .get_all_properties()
            .await
            .map_err(|e| UpstreamError::new("property service", e))
    }

    async fn list_properties_by_user(&self, user_id: i64) -> Result<Vec<Property>, UpstreamError> {
        self.client
            .get_properties_by_user(user_id)
            .await
            .map_err(|e| UpstreamError::new("property service", e))
    }
}

pub struct HttpTenantDirectory {
    client: TenantServiceClient,
}

impl HttpTenantDirectory {
    pub fn new(client: TenantServiceClient) -> Self {
        Self { client }
    }
}

impl TenantDirectory for HttpTenantDirectory {
    async fn list_tenants(&self) -> Result<Vec<Tenant>, UpstreamError> {
        self.client
            .get_all_tenants()
            .await
            .map_err(|e| UpstreamError::new("tenant service", e))
    }

    async fn list_tenants_by_user(&self, user_id: i64) -> Result<Vec<Tenant>, UpstreamError> {
        self.client
            .get_tenants_by_user(user_id)
            .await
            .map_err(|e| UpstreamError::new("tenant service", e))
    }

    async fn list_tenants_by_property(
        &self,
        property_id: i64,
    ) -> Result<Vec<Tenant>, UpstreamError> {
        self.client
            .get_tenants_by_property(property_id)
            .await
            .map_err(|e| UpstreamError::new("tenant service", e))
    }

    async fn assign_property(
        &self,
        tenant_id: i64,
        property_id: i64,
    ) -> Result<Tenant, PassthroughError> {
        self.client
            .assign_property_to_tenant(tenant_id, property_id)
            .await
            .map_err(passthrough)
    }
}

pub struct HttpRequestDirectory {
    client: TenantServiceClient,
}

impl HttpRequestDirectory {
    pub fn new(client: TenantServiceClient) -> Self {
        Self { client }
    }
}

impl RequestDirectory for HttpRequestDirectory {
    async fn pending_requests(&self) -> Result<Vec<TenantRequest>, UpstreamError> {
        self.client
            .get_pending_tenant_requests()
            .await
            .map_err(|e| UpstreamError::new("tenant service", e))
    }

    async fn requests_for_user(&self, user_id: i64) -> Result<Vec<TenantRequest>, UpstreamError> {
        self.client
            .get_tenant_requests_by_user(user_id)
            .await
            .map_err(|e| UpstreamError::new("tenant service", e))
    }

    async fn create_request(
        &self,
        request: NewTenantRequest,
    ) -> Result<TenantRequest, PassthroughError> {
        self.client
            .create_tenant_request(&request)
            .await
            .map_err(passthrough)
    }

    async fn approve_request(&self, id: i64) -> Result<TenantRequest, PassthroughError> {
        self.client
            .approve_tenant_request(id)
            .await
            .map_err(passthrough)
    }

    async fn reject_request(&self, id: i64) -> Result<TenantRequest, PassthroughError> {
        self.client
            .reject_tenant_request(id)
            .await
            .map_err(passthrough)
    }
}

/// User-correctable rejections keep their kind and message for the caller;
/// everything else is an unavailable upstream.
fn passthrough(err: RentwiseClientError) -> PassthroughError {
    match err {
        RentwiseClientError::NotFound { details } => PassthroughError::Rejected {
            kind: RejectionKind::NotFound,
            message: details,
        },
        RentwiseClientError::Conflict { details } => PassthroughError::Rejected {
            kind: RejectionKind::Conflict,
            message: details,
        },
        RentwiseClientError::InvalidRequest { details } => PassthroughError::Rejected {
            kind: RejectionKind::Invalid,
            message: details,
        },
        other => PassthroughError::Upstream(UpstreamError::new("tenant service", other)),
    }
}
