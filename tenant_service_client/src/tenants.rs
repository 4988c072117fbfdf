use model_tenancy::Tenant;
use rentwise_client_errors::{GenericErrorResponse, RentwiseClientError};

use super::TenantServiceClient;

impl TenantServiceClient {
    /// Gets every tenant.
    pub async fn get_all_tenants(&self) -> Result<Vec<Tenant>, RentwiseClientError> {
        self.get_tenant_list(format!("{}/api/tenants", self.url))
            .await
    }

    /// Gets the tenants sponsored by a user.
    pub async fn get_tenants_by_user(
        &self,
        user_id: i64,
    ) -> Result<Vec<Tenant>, RentwiseClientError> {
        self.get_tenant_list(format!("{}/api/tenants/user/{}", self.url, user_id))
            .await
    }

    /// Gets the tenants assigned to a property.
    pub async fn get_tenants_by_property(
        &self,
        property_id: i64,
    ) -> Result<Vec<Tenant>, RentwiseClientError> {
        self.get_tenant_list(format!("{}/api/tenants/property/{}", self.url, property_id))
            .await
    }

    /// Assigns a property to a tenant.
    pub async fn assign_property_to_tenant(
        &self,
        tenant_id: i64,
        property_id: i64,
    ) -> Result<Tenant, RentwiseClientError> {
        let url = format!(
            "{}/api/tenants/{}/assign-property?propertyId={}",
            self.url, tenant_id, property_id
        );
        let res = self.client.put(url).send().await.map_err(|e| {
            RentwiseClientError::RequestBuildError {
                details: e.to_string(),
            }
        })?;

        if res.status() != reqwest::StatusCode::OK {
            return Err(Self::error_from_response(res).await);
        }

        res.json::<Tenant>().await.map_err(|e| {
            RentwiseClientError::Generic(GenericErrorResponse {
                message: e.to_string(),
            })
        })
    }

    async fn get_tenant_list(&self, url: String) -> Result<Vec<Tenant>, RentwiseClientError> {
        let res = self.client.get(url).send().await.map_err(|e| {
            RentwiseClientError::RequestBuildError {
                details: e.to_string(),
            }
        })?;

        if res.status() != reqwest::StatusCode::OK {
            return Err(Self::error_from_response(res).await);
        }

        res.json::<Vec<Tenant>>().await.map_err(|e| {
            RentwiseClientError::Generic(GenericErrorResponse {
                message: e.to_string(),
            })
        })
    }
}
