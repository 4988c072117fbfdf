//! Ports over the three independently-owned entity domains and the request
//! lifecycle. One trait per upstream so each can fail on its own; the
//! aggregation engine decides per join whether a failure is fatal or
//! degrades to a default.

use model_tenancy::{NewTenantRequest, Property, Tenant, TenantRequest, User};

use crate::domain::error::{PassthroughError, UpstreamError};

/// Read access to the user directory.
#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
pub trait UserDirectory: Send + Sync + 'static {
    fn list_users(
        &self,
    ) -> impl std::future::Future<Output = Result<Vec<User>, UpstreamError>> + Send;
}

/// Read access to the property domain.
#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
pub trait PropertyDirectory: Send + Sync + 'static {
    fn list_properties(
        &self,
    ) -> impl std::future::Future<Output = Result<Vec<Property>, UpstreamError>> + Send;

    fn list_properties_by_user(
        &self,
        user_id: i64,
    ) -> impl std::future::Future<Output = Result<Vec<Property>, UpstreamError>> + Send;
}

/// Read access to tenant records, plus the one cross-entity mutation
/// (property assignment) this core is allowed to forward.
#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
pub trait TenantDirectory: Send + Sync + 'static {
    fn list_tenants(
        &self,
    ) -> impl std::future::Future<Output = Result<Vec<Tenant>, UpstreamError>> + Send;

    fn list_tenants_by_user(
        &self,
        user_id: i64,
    ) -> impl std::future::Future<Output = Result<Vec<Tenant>, UpstreamError>> + Send;

    fn list_tenants_by_property(
        &self,
        property_id: i64,
    ) -> impl std::future::Future<Output = Result<Vec<Tenant>, UpstreamError>> + Send;

    fn assign_property(
        &self,
        tenant_id: i64,
        property_id: i64,
    ) -> impl std::future::Future<Output = Result<Tenant, PassthroughError>> + Send;
}

/// The remote face of the request lifecycle manager.
#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
pub trait RequestDirectory: Send + Sync + 'static {
    fn pending_requests(
        &self,
    ) -> impl std::future::Future<Output = Result<Vec<TenantRequest>, UpstreamError>> + Send;

    fn requests_for_user(
        &self,
        user_id: i64,
    ) -> impl std::future::Future<Output = Result<Vec<TenantRequest>, UpstreamError>> + Send;

    fn create_request(
        &self,
        request: NewTenantRequest,
    ) -> impl std::future::Future<Output = Result<TenantRequest, PassthroughError>> + Send;

    fn approve_request(
        &self,
        id: i64,
    ) -> impl std::future::Future<Output = Result<TenantRequest, PassthroughError>> + Send;

    fn reject_request(
        &self,
        id: i64,
    ) -> impl std::future::Future<Output = Result<TenantRequest, PassthroughError>> + Send;
}
