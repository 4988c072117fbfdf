use model_tenancy::{NewTenantRequest, TenantRequest};
use rentwise_client_errors::{GenericErrorResponse, RentwiseClientError};

use super::TenantServiceClient;

impl TenantServiceClient {
    /// Submits a new tenant request.
    pub async fn create_tenant_request(
        &self,
        request: &NewTenantRequest,
    ) -> Result<TenantRequest, RentwiseClientError> {
        let url = format!("{}/api/tenant-requests", self.url);
        let res = self.client.post(url).json(request).send().await.map_err(|e| {
            RentwiseClientError::RequestBuildError {
                details: e.to_string(),
            }
        })?;

        // The tenancy service answers a successful create with 201.
        if res.status() != reqwest::StatusCode::CREATED {
            return Err(Self::error_from_response(res).await);
        }

        Self::decode_request(res).await
    }

    /// Gets every tenant request, regardless of status.
    pub async fn get_all_tenant_requests(
        &self,
    ) -> Result<Vec<TenantRequest>, RentwiseClientError> {
        self.get_request_list(format!("{}/api/tenant-requests", self.url))
            .await
    }

    /// Gets the requests still awaiting an admin decision.
    pub async fn get_pending_tenant_requests(
        &self,
    ) -> Result<Vec<TenantRequest>, RentwiseClientError> {
        self.get_request_list(format!("{}/api/tenant-requests/pending", self.url))
            .await
    }

    /// Gets the requests submitted by a user.
    pub async fn get_tenant_requests_by_user(
        &self,
        user_id: i64,
    ) -> Result<Vec<TenantRequest>, RentwiseClientError> {
        self.get_request_list(format!("{}/api/tenant-requests/user/{}", self.url, user_id))
            .await
    }

    /// Approves a pending request, materializing a tenant.
    pub async fn approve_tenant_request(
        &self,
        request_id: i64,
    ) -> Result<TenantRequest, RentwiseClientError> {
        self.put_request(format!(
            "{}/api/tenant-requests/{}/approve",
            self.url, request_id
        ))
        .await
    }

    /// Rejects a pending request.
    pub async fn reject_tenant_request(
        &self,
        request_id: i64,
    ) -> Result<TenantRequest, RentwiseClientError> {
        self.put_request(format!(
            "{}/api/tenant-requests/{}/reject",
            self.url, request_id
        ))
        .await
    }

    async fn put_request(&self, url: String) -> Result<TenantRequest, RentwiseClientError> {
        let res = self.client.put(url).send().await.map_err(|e| {
            RentwiseClientError::RequestBuildError {
                details: e.to_string(),
            }
        })?;

        if res.status() != reqwest::StatusCode::OK {
            return Err(Self::error_from_response(res).await);
        }

        Self::decode_request(res).await
    }

    async fn get_request_list(
        &self,
        url: String,
    ) -> Result<Vec<TenantRequest>, RentwiseClientError> {
        let res = self.client.get(url).send().await.map_err(|e| {
            RentwiseClientError::RequestBuildError {
                details: e.to_string(),
            }
        })?;

        if res.status() != reqwest::StatusCode::OK {
            return Err(Self::error_from_response(res).await);
        }

        res.json::<Vec<TenantRequest>>().await.map_err(|e| {
            RentwiseClientError::Generic(GenericErrorResponse {
                message: e.to_string(),
            })
        })
    }

    async fn decode_request(res: reqwest::Response) -> Result<TenantRequest, RentwiseClientError> {
        res.json::<TenantRequest>().await.map_err(|e| {
            RentwiseClientError::Generic(GenericErrorResponse {
                message: e.to_string(),
            })
        })
    }
}
