use model_tenancy::User;
use rentwise_client_errors::{GenericErrorResponse, RentwiseClientError};

use super::UserServiceClient;

impl UserServiceClient {
    /// Gets every user in the directory.
    pub async fn get_all_users(&self) -> Result<Vec<User>, RentwiseClientError> {
        let url = format!("{}/api/users", self.url);
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
                let users = res.json::<Vec<User>>().await.map_err(|e| {
                    RentwiseClientError::Generic(GenericErrorResponse {
                        message: e.to_string(),
                    })
                })?;

                Ok(users)
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

    /// Gets a single user by id.
    pub async fn get_user(&self, user_id: i64) -> Result<User, RentwiseClientError> {
        let url = format!("{}/api/users/{}", self.url, user_id);
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
                let user = res.json::<User>().await.map_err(|e| {
                    RentwiseClientError::Generic(GenericErrorResponse {
                        message: e.to_string(),
                    })
                })?;

                Ok(user)
            }
            reqwest::StatusCode::UNAUTHORIZED => Err(RentwiseClientError::Unauthorized),
            reqwest::StatusCode::NOT_FOUND => Err(RentwiseClientError::NotFound {
                details: format!("user {user_id} not found"),
            }),
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
