//! In-memory keyed stores standing in for the persistence collaborator.
//!
//! Rows keep insertion order, so every list read comes back in creation
//! order. Ids are assigned monotonically starting at 1.

use chrono::Utc;
use model_tenancy::{NewTenant, NewTenantRequest, RequestStatus, Tenant, TenantRequest};
use tokio::sync::RwLock;

use crate::domain::ports::{TenantRequestStore, TenantStore};

#[derive(Default)]
pub struct InMemoryTenantStore {
    inner: RwLock<TenantRows>,
}

#[derive(Default)]
struct TenantRows {
    next_id: i64,
    rows: Vec<Tenant>,
}

impl TenantStore for InMemoryTenantStore {
    async fn list(&self) -> anyhow::Result<Vec<Tenant>> {
        Ok(self.inner.read().await.rows.clone())
    }

    async fn get(&self, id: i64) -> anyhow::Result<Option<Tenant>> {
        Ok(self
            .inner
            .read()
            .await
            .rows
            .iter()
            .find(|t| t.id == id)
            .cloned())
    }

    async fn list_by_user(&self, user_id: i64) -> anyhow::Result<Vec<Tenant>> {
        Ok(self
            .inner
            .read()
            .await
            .rows
            .iter()
            .filter(|t| t.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn list_by_property(&self, property_id: i64) -> anyhow::Result<Vec<Tenant>> {
        Ok(self
            .inner
            .read()
            .await
            .rows
            .iter()
            .filter(|t| t.property_id == Some(property_id))
            .cloned()
            .collect())
    }

    async fn exists_by_email(&self, email: &str) -> anyhow::Result<bool> {
        Ok(self
            .inner
            .read()
            .await
            .rows
            .iter()
            .any(|t| t.email.eq_ignore_ascii_case(email)))
    }

    async fn create(&self, tenant: NewTenant) -> anyhow::Result<Tenant> {
        let mut inner = self.inner.write().await;
        inner.next_id += 1;

        let row = Tenant {
            id: inner.next_id,
            user_id: tenant.user_id,
            property_id: tenant.property_id,
            first_name: tenant.first_name,
            last_name: tenant.last_name,
            email: tenant.email,
            phone: tenant.phone,
            roommate_of: None,
            property_name: None,
        };
        inner.rows.push(row.clone());

        Ok(row)
    }

    async fn set_property(
        &self,
        tenant_id: i64,
        property_id: i64,
    ) -> anyhow::Result<Option<Tenant>> {
        let mut inner = self.inner.write().await;

        Ok(inner.rows.iter_mut().find(|t| t.id == tenant_id).map(|t| {
            t.property_id = Some(property_id);
            t.clone()
        }))
    }
}

#[derive(Default)]
pub struct InMemoryRequestStore {
    inner: RwLock<RequestRows>,
}

#[derive(Default)]
struct RequestRows {
    next_id: i64,
    rows: Vec<TenantRequest>,
}

impl TenantRequestStore for InMemoryRequestStore {
    async fn list(&self) -> anyhow::Result<Vec<TenantRequest>> {
        Ok(self.inner.read().await.rows.clone())
    }

    async fn get(&self, id: i64) -> anyhow::Result<Option<TenantRequest>> {
        Ok(self
            .inner
            .read()
            .await
            .rows
            .iter()
            .find(|r| r.id == id)
            .cloned())
    }

    async fn list_by_status(&self, status: RequestStatus) -> anyhow::Result<Vec<TenantRequest>> {
        Ok(self
            .inner
            .read()
            .await
            .rows
            .iter()
            .filter(|r| r.status == status)
            .cloned()
            .collect())
    }

    async fn list_by_requester(&self, user_id: i64) -> anyhow::Result<Vec<TenantRequest>> {
        Ok(self
            .inner
            .read()
            .await
            .rows
            .iter()
            .filter(|r| r.requested_by_user_id == user_id)
            .cloned()
            .collect())
    }

    async fn create(&self, request: NewTenantRequest) -> anyhow::Result<TenantRequest> {
        let mut inner = self.inner.write().await;
        inner.next_id += 1;

        let now = Utc::now();
        let row = TenantRequest {
            id: inner.next_id,
            first_name: request.first_name,
            last_name: request.last_name,
            email: request.email,
            phone: request.phone,
            requested_by_user_id: request.requested_by_user_id,
            status: RequestStatus::Pending,
            created_at: now,
            updated_at: now,
        };
        inner.rows.push(row.clone());

        Ok(row)
    }

    async fn update_status(
        &self,
        id: i64,
        status: RequestStatus,
    ) -> anyhow::Result<Option<TenantRequest>> {
        let mut inner = self.inner.write().await;

        Ok(inner.rows.iter_mut().find(|r| r.id == id).map(|r| {
            r.status = status;
            r.updated_at = Utc::now();
            r.clone()
        }))
    }
}
