//! The aggregation engine: joins the independently-owned user, property,
//! and tenant collections into enriched views, and forwards lifecycle
//! mutations to the tenancy service.
//!
//! The three backing domains share no storage and may be transiently
//! unavailable, so every join states whether a failed fetch is fatal or
//! degrades to a default. The unresolved-owner, zero-count, and
//! "Property ID: N" fallbacks below are contract behavior, not error
//! handling to be tightened.

use model_tenancy::{Caller, NewTenantRequest, Property, Tenant, TenantRequest};

use crate::domain::{
    auth::{ensure_admin, ensure_self_or_admin},
    error::Result,
    ports::{PropertyDirectory, RequestDirectory, TenantDirectory, UserDirectory},
};

#[cfg(test)]
mod tests;

/// struct which handles the actual implementation of the dashboard with
/// abstracted interfaces for mocking
pub struct DashboardImpl<U, P, T, R> {
    users: U,
    properties: P,
    tenants: T,
    requests: R,
}

impl<U, P, T, R> DashboardImpl<U, P, T, R>
where
    U: UserDirectory,
    P: PropertyDirectory,
    T: TenantDirectory,
    R: RequestDirectory,
{
    pub fn new(users: U, properties: P, tenants: T, requests: R) -> Self {
        Self {
            users,
            properties,
            tenants,
            requests,
        }
    }

    /// Every property, enriched with its owner's username and a tenant
    /// count. Admin view.
    ///
    /// Only the base property fetch is fatal. A failed user fetch leaves
    /// every `owner_name` unset; a failed count lookup degrades that one
    /// property to a count of zero without touching the rest.
    #[tracing::instrument(skip(self, caller), fields(caller_id = caller.user_id))]
    pub async fn all_properties_enriched(&self, caller: &Caller) -> Result<Vec<Property>> {
        ensure_admin(caller)?;

        let (properties, users) = tokio::join!(
            self.properties.list_properties(),
            self.users.list_users(),
        );

        let mut properties = properties?;
        let users = users.unwrap_or_else(|e| {
            tracing::warn!(error = ?e, "user directory unavailable, owner names left unset");
            Vec::new()
        });

        for property in &mut properties {
            property.owner_name = users
                .iter()
                .find(|u| u.id == property.user_id)
                .map(|u| u.username.clone());
        }

        self.attach_tenant_counts(&mut properties).await;

        tracing::info!(count = properties.len(), "retrieved enriched properties");
        Ok(properties)
    }

    /// Every tenant, enriched with the sponsoring user's name and the
    /// assigned property's name. Admin view.
    #[tracing::instrument(skip(self, caller), fields(caller_id = caller.user_id))]
    pub async fn all_tenants_enriched(&self, caller: &Caller) -> Result<Vec<Tenant>> {
        ensure_admin(caller)?;

        let mut tenants = self.tenants.list_tenants().await?;
        if tenants.is_empty() {
            // Nothing to join against; skip the other two fetches entirely.
            return Ok(tenants);
        }

        // One fetch per source, not per tenant, to bound the remote calls.
        let (users, properties) = tokio::try_join!(
            self.users.list_users(),
            self.properties.list_properties(),
        )?;

        for tenant in &mut tenants {
            tenant.roommate_of = users
                .iter()
                .find(|u| u.id == tenant.user_id)
                .map(|u| u.username.clone());

            tenant.property_name = tenant
                .property_id
                .and_then(|pid| properties.iter().find(|p| p.id == pid))
                .map(|p| p.name.clone());
        }

        tracing::info!(count = tenants.len(), "retrieved enriched tenants");
        Ok(tenants)
    }

    /// The tenants sponsored by one user, with property names resolved.
    /// Member view.
    ///
    /// A set-but-unresolvable property id renders as the literal
    /// `"Property ID: {id}"` label; an unset property id stays unset.
    #[tracing::instrument(skip(self, caller), fields(caller_id = caller.user_id))]
    pub async fn tenants_for_user_enriched(
        &self,
        caller: &Caller,
        user_id: i64,
    ) -> Result<Vec<Tenant>> {
        ensure_self_or_admin(caller, user_id)?;

        let (tenants, properties) = tokio::try_join!(
            self.tenants.list_tenants_by_user(user_id),
            self.properties.list_properties(),
        )?;

        let mut tenants = tenants;
        for tenant in &mut tenants {
            match tenant.property_id {
                Some(property_id) => {
                    let matched = properties
                        .iter()
                        .find(|p| p.id == property_id)
                        .filter(|p| !p.name.is_empty());

                    match matched {
                        Some(property) => tenant.property_name = Some(property.name.clone()),
                        None => {
                            tracing::warn!(property_id, "property not found for tenant");
                            tenant.property_name = Some(format!("Property ID: {property_id}"));
                        }
                    }
                }
                None => tenant.property_name = None,
            }
        }

        Ok(tenants)
    }

    /// The properties relevant to one user: the ones they own plus the ones
    /// hosting a tenant they sponsor, deduplicated by id with owned entries
    /// taking precedence. Member view.
    #[tracing::instrument(skip(self, caller), fields(caller_id = caller.user_id))]
    pub async fn properties_for_user_enriched(
        &self,
        caller: &Caller,
        user_id: i64,
    ) -> Result<Vec<Property>> {
        ensure_self_or_admin(caller, user_id)?;

        let (owned, user_tenants, all_properties) = tokio::try_join!(
            self.properties.list_properties_by_user(user_id),
            self.tenants.list_tenants_by_user(user_id),
            self.properties.list_properties(),
        )?;

        let mut properties = owned;

        // Distinct property ids hosting the user's tenants, resolved
        // against the full list; already-owned ids keep their entry.
        let mut hosted_ids: Vec<i64> = user_tenants.iter().filter_map(|t| t.property_id).collect();
        hosted_ids.sort_unstable();
        hosted_ids.dedup();

        for property_id in hosted_ids {
            if properties.iter().any(|p| p.id == property_id) {
                continue;
            }
            if let Some(property) = all_properties.iter().find(|p| p.id == property_id) {
                properties.push(property.clone());
            }
        }

        self.attach_tenant_counts(&mut properties).await;

        tracing::info!(
            count = properties.len(),
            user_id,
            "retrieved properties for user"
        );
        Ok(properties)
    }

    /// Passthrough read: the requests awaiting a decision. Admin view.
    pub async fn pending_requests(&self, caller: &Caller) -> Result<Vec<TenantRequest>> {
        ensure_admin(caller)?;
        Ok(self.requests.pending_requests().await?)
    }

    /// Passthrough read: the requests one user submitted. Member view.
    pub async fn requests_for_user(
        &self,
        caller: &Caller,
        user_id: i64,
    ) -> Result<Vec<TenantRequest>> {
        ensure_self_or_admin(caller, user_id)?;
        Ok(self.requests.requests_for_user(user_id).await?)
    }

    /// Forwards a request submission. The requester id is always the
    /// caller's, regardless of what the body says.
    #[tracing::instrument(skip(self, caller, request), fields(caller_id = caller.user_id, email = %request.email))]
    pub async fn submit_request(
        &self,
        caller: &Caller,
        mut request: NewTenantRequest,
    ) -> Result<TenantRequest> {
        request.requested_by_user_id = caller.user_id;
        Ok(self.requests.create_request(request).await?)
    }

    /// Forwards an approval. Admin only.
    #[tracing::instrument(skip(self, caller), fields(caller_id = caller.user_id))]
    pub async fn approve_request(&self, caller: &Caller, id: i64) -> Result<TenantRequest> {
        ensure_admin(caller)?;
        Ok(self.requests.approve_request(id).await?)
    }

    /// Forwards a rejection. Admin only.
    #[tracing::instrument(skip(self, caller), fields(caller_id = caller.user_id))]
    pub async fn reject_request(&self, caller: &Caller, id: i64) -> Result<TenantRequest> {
        ensure_admin(caller)?;
        Ok(self.requests.reject_request(id).await?)
    }

    /// Forwards a property assignment. Admin only.
    #[tracing::instrument(skip(self, caller), fields(caller_id = caller.user_id))]
    pub async fn assign_property(
        &self,
        caller: &Caller,
        tenant_id: i64,
        property_id: i64,
    ) -> Result<Tenant> {
        ensure_admin(caller)?;
        Ok(self.tenants.assign_property(tenant_id, property_id).await?)
    }

    /// Attaches a tenant count to each property, one lookup per property,
    /// issued concurrently. A failed lookup degrades that property to zero
    /// and leaves every other property untouched.
    async fn attach_tenant_counts(&self, properties: &mut [Property]) {
        let counts = futures::future::join_all(
            properties
                .iter()
                .map(|property| self.tenant_count_or_zero(property.id)),
        )
        .await;

        for (property, count) in properties.iter_mut().zip(counts) {
            property.tenant_count = Some(count);
        }
    }

    async fn tenant_count_or_zero(&self, property_id: i64) -> i64 {
        match self.tenants.list_tenants_by_property(property_id).await {
            Ok(tenants) => tenants.len() as i64,
            Err(e) => {
                tracing::warn!(error = ?e, property_id, "tenant count lookup failed, defaulting to 0");
                0
            }
        }
    }
}
