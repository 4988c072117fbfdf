//! Storage ports - the keyed-store interfaces the lifecycle manager is
//! written against. The real stores live in an external CRUD collaborator;
//! [crate::outbound::memory] provides the in-process stand-ins.

use model_tenancy::{NewTenant, NewTenantRequest, RequestStatus, Tenant, TenantRequest};

/// Keyed store of tenant records.
#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
pub trait TenantStore: Send + Sync + 'static {
    fn list(&self) -> impl std::future::Future<Output = anyhow::Result<Vec<Tenant>>> + Send;

    fn get(
        &self,
        id: i64,
    ) -> impl std::future::Future<Output = anyhow::Result<Option<Tenant>>> + Send;

    fn list_by_user(
        &self,
        user_id: i64,
    ) -> impl std::future::Future<Output = anyhow::Result<Vec<Tenant>>> + Send;

    fn list_by_property(
        &self,
        property_id: i64,
    ) -> impl std::future::Future<Output = anyhow::Result<Vec<Tenant>>> + Send;

    /// Case-insensitive existence check on the tenant email.
    fn exists_by_email(
        &self,
        email: &str,
    ) -> impl std::future::Future<Output = anyhow::Result<bool>> + Send;

    /// Persists a new tenant, assigning its id.
    fn create(
        &self,
        tenant: NewTenant,
    ) -> impl std::future::Future<Output = anyhow::Result<Tenant>> + Send;

    /// Sets the tenant's property assignment. Returns `None` when the
    /// tenant does not exist.
    fn set_property(
        &self,
        tenant_id: i64,
        property_id: i64,
    ) -> impl std::future::Future<Output = anyhow::Result<Option<Tenant>>> + Send;
}

/// Keyed store of tenant-request records.
#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
pub trait TenantRequestStore: Send + Sync + 'static {
    fn list(&self) -> impl std::future::Future<Output = anyhow::Result<Vec<TenantRequest>>> + Send;

    fn get(
        &self,
        id: i64,
    ) -> impl std::future::Future<Output = anyhow::Result<Option<TenantRequest>>> + Send;

    fn list_by_status(
        &self,
        status: RequestStatus,
    ) -> impl std::future::Future<Output = anyhow::Result<Vec<TenantRequest>>> + Send;

    fn list_by_requester(
        &self,
        user_id: i64,
    ) -> impl std::future::Future<Output = anyhow::Result<Vec<TenantRequest>>> + Send;

    /// Persists a new request as `Pending`, assigning id and server-side
    /// created/updated timestamps.
    fn create(
        &self,
        request: NewTenantRequest,
    ) -> impl std::future::Future<Output = anyhow::Result<TenantRequest>> + Send;

    /// Updates the request status, bumping `updated_at`. Returns `None`
    /// when the request does not exist.
    fn update_status(
        &self,
        id: i64,
        status: RequestStatus,
    ) -> impl std::future::Future<Output = anyhow::Result<Option<TenantRequest>>> + Send;
}
