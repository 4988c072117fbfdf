use model_tenancy::Property;
use rentwise_client_errors::{GenericErrorResponse, RentwiseClientError};

use super::PropertyServiceClient;

impl PropertyServiceClient {
    /// Gets every property.
    pub async fn get_all_properties(&self) -> Result<Vec<Property>, RentwiseClientError> {
        self.get_property_list(format!("{}/api/properties", self.url))
            .await
    }

    /// Gets the properties owned by a user.
    pub async fn get_properties_by_user(
        &self,
        user_id: i64,
    ) -> Result<Vec<Property>, RentwiseClientError> {
        self.get_property_list(format!("{}/api/properties/user/{}", self.url, user_id))
            .await
    }

    async fn get_property_list(&self, url: String) -> Result<Vec<Property>, RentwiseClientError> {
        let res = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| RentwiseClientError::RequestBuildError {
                details: e.to_string(),
            })?;

        match res.status() {
            reqwest::StatusCode::OK => {
                let properties = res.json::<Vec<Property>>().await.map_err(|e| {
                    RentwiseClientError::Generic(GenericErrorResponse {
                        message: e.to_string(),
                    })
                })?;

                Ok(properties)
            }
            reqwest::StatusCode::UNAUTHORIZED => Err(RentwiseClientError::Unauthorized),
            _ => {
                let body = res.text().await.map_err(|e| {
                    RentwiseClientError::Generic(GenericErrorResponse {
                        message: e.to_string(),
                    })
                })?;

                Err(RentwiseClientError::Generic(GenericErrorResponse {
                    message: body,
                }))
            }
        }
    }
}
