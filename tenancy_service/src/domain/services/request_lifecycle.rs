//! The tenant-request lifecycle state machine and tenant mutations.
//!
//! State machine: `Pending --approve--> Approved`,
//! `Pending --reject--> Rejected`. Both outcomes are terminal; there is no
//! cancellation state and no transition out of a terminal state.

use model_tenancy::{
    NewTenant, NewTenantRequest, RequestEventStatus, RequestStatus, Tenant, TenantRequest,
    TenantRequestEvent,
};
use rentwise_notify::RequestEventPublisher;

use crate::domain::{
    error::{Result, TenancyError},
    ports::{TenantRequestStore, TenantStore},
};

#[cfg(test)]
mod tests;

/// Owns the request lifecycle over abstracted stores and an abstracted
/// notification channel.
pub struct RequestLifecycleImpl<R, T, N> {
    request_store: R,
    tenant_store: T,
    notifier: N,
}

impl<R, T, N> RequestLifecycleImpl<R, T, N>
where
    R: TenantRequestStore,
    T: TenantStore,
    N: RequestEventPublisher,
{
    pub fn new(request_store: R, tenant_store: T, notifier: N) -> Self {
        Self {
            request_store,
            tenant_store,
            notifier,
        }
    }

    /// Submits a new tenant request.
    ///
    /// Uniqueness rules: the email must not belong to an existing tenant,
    /// and at most one pending request may exist per email at a time
    /// (case-insensitive). There is no unique constraint underneath us, so
    /// concurrent same-email submissions can race past this check; the
    /// re-check at approval time is the commit-point guard.
    #[tracing::instrument(skip(self, input), fields(email = %input.email))]
    pub async fn create_request(&self, input: NewTenantRequest) -> Result<TenantRequest> {
        input.validate().map_err(TenancyError::Validation)?;

        if self.tenant_store.exists_by_email(&input.email).await? {
            tracing::warn!("email already exists as tenant");
            return Err(TenancyError::DuplicateEmail);
        }

        let pending = self
            .request_store
            .list_by_status(RequestStatus::Pending)
            .await?;
        if pending
            .iter()
            .any(|r| r.email.eq_ignore_ascii_case(&input.email))
        {
            tracing::warn!("pending request already exists for email");
            return Err(TenancyError::ConflictingRequest);
        }

        let saved = self.request_store.create(input).await?;

        self.publish_best_effort(&saved, RequestEventStatus::Created)
            .await;

        tracing::info!(request_id = saved.id, "tenant request created");
        Ok(saved)
    }

    /// Approves a pending request, materializing a tenant from it.
    ///
    /// The tenant create and the status update are two independent commits
    /// with no transaction across them. A crash in between leaves the
    /// tenant created and the request pending; re-running the approval then
    /// fails with [TenancyError::DuplicateEmail] from the re-check below,
    /// so a retry can never produce a second tenant.
    #[tracing::instrument(skip(self))]
    pub async fn approve_request(&self, id: i64) -> Result<TenantRequest> {
        let request = self.get_pending(id, "approved").await?;

        // Re-check at the commit point: a tenant with this email may have
        // appeared since the request was submitted.
        if self.tenant_store.exists_by_email(&request.email).await? {
            tracing::warn!("email already exists as tenant, request stays pending");
            return Err(TenancyError::DuplicateEmail);
        }

        let tenant = self
            .tenant_store
            .create(NewTenant {
                user_id: request.requested_by_user_id,
                property_id: None,
                first_name: request.first_name.clone(),
                last_name: request.last_name.clone(),
                email: request.email.clone(),
                phone: request.phone.clone(),
            })
            .await?;
        tracing::info!(tenant_id = tenant.id, "tenant created from request");

        let updated = self
            .request_store
            .update_status(id, RequestStatus::Approved)
            .await?
            .ok_or_else(|| TenancyError::NotFound(format!("tenant request {id} not found")))?;

        self.publish_best_effort(&updated, RequestEventStatus::Approved)
            .await;

        tracing::info!(request_id = id, "tenant request approved");
        Ok(updated)
    }

    /// Rejects a pending request.
    #[tracing::instrument(skip(self))]
    pub async fn reject_request(&self, id: i64) -> Result<TenantRequest> {
        self.get_pending(id, "rejected").await?;

        let updated = self
            .request_store
            .update_status(id, RequestStatus::Rejected)
            .await?
            .ok_or_else(|| TenancyError::NotFound(format!("tenant request {id} not found")))?;

        self.publish_best_effort(&updated, RequestEventStatus::Rejected)
            .await;

        tracing::info!(request_id = id, "tenant request rejected");
        Ok(updated)
    }

    pub async fn list_requests(&self) -> Result<Vec<TenantRequest>> {
        Ok(self.request_store.list().await?)
    }

    pub async fn list_pending(&self) -> Result<Vec<TenantRequest>> {
        Ok(self
            .request_store
            .list_by_status(RequestStatus::Pending)
            .await?)
    }

    pub async fn list_by_requester(&self, user_id: i64) -> Result<Vec<TenantRequest>> {
        Ok(self.request_store.list_by_requester(user_id).await?)
    }

    pub async fn list_tenants(&self) -> Result<Vec<Tenant>> {
        Ok(self.tenant_store.list().await?)
    }

    pub async fn get_tenant(&self, id: i64) -> Result<Tenant> {
        self.tenant_store
            .get(id)
            .await?
            .ok_or_else(|| TenancyError::NotFound(format!("tenant {id} not found")))
    }

    pub async fn list_tenants_by_user(&self, user_id: i64) -> Result<Vec<Tenant>> {
        Ok(self.tenant_store.list_by_user(user_id).await?)
    }

    pub async fn list_tenants_by_property(&self, property_id: i64) -> Result<Vec<Tenant>> {
        Ok(self.tenant_store.list_by_property(property_id).await?)
    }

    /// Registers a tenant directly, outside the request flow.
    #[tracing::instrument(skip(self, tenant), fields(email = %tenant.email))]
    pub async fn create_tenant(&self, tenant: NewTenant) -> Result<Tenant> {
        if self.tenant_store.exists_by_email(&tenant.email).await? {
            return Err(TenancyError::DuplicateEmail);
        }
        Ok(self.tenant_store.create(tenant).await?)
    }

    /// Assigns a property to a tenant.
    ///
    /// The property id is not validated here; dangling references are
    /// tolerated and the dashboard renders a fallback label for them.
    #[tracing::instrument(skip(self))]
    pub async fn assign_property(&self, tenant_id: i64, property_id: i64) -> Result<Tenant> {
        let updated = self
            .tenant_store
            .set_property(tenant_id, property_id)
            .await?
            .ok_or_else(|| TenancyError::NotFound(format!("tenant {tenant_id} not found")))?;

        tracing::info!(tenant_id, property_id, "property assigned to tenant");
        Ok(updated)
    }

    async fn get_pending(&self, id: i64, action: &'static str) -> Result<TenantRequest> {
        let request = self
            .request_store
            .get(id)
            .await?
            .ok_or_else(|| TenancyError::NotFound(format!("tenant request {id} not found")))?;

        if request.status != RequestStatus::Pending {
            return Err(TenancyError::InvalidTransition { action });
        }

        Ok(request)
    }

    /// Publication is best-effort: a failed publish is logged and never
    /// rolls back or fails the write that triggered it.
    async fn publish_best_effort(&self, request: &TenantRequest, status: RequestEventStatus) {
        let event = TenantRequestEvent::for_request(request, status);
        if let Err(e) = self.notifier.publish(event).await {
            tracing::warn!(error = ?e, request_id = request.id, "failed to publish request event");
        }
    }
}
