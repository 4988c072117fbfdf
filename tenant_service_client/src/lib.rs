use constants::{DEFAULT_TIMEOUT, RENTWISE_INTERNAL_AUTH_KEY_HEADER_KEY};
use rentwise_client_errors::{GenericErrorResponse, RentwiseClientError};

pub(crate) mod constants;
pub(crate) mod requests;
pub(crate) mod tenants;

/// Client for the tenancy service: tenant records plus the tenant-request
/// lifecycle (create, approve, reject).
#[derive(Clone)]
pub struct TenantServiceClient {
    url: String,
    client: reqwest::Client,
}

impl TenantServiceClient {
    pub fn new(internal_auth_key: String, url: String) -> Self {
        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(
            RENTWISE_INTERNAL_AUTH_KEY_HEADER_KEY,
            internal_auth_key.parse().unwrap(),
        );

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(DEFAULT_TIMEOUT)
            .build()
            .unwrap();

        Self { url, client }
    }

    /// Maps a non-OK tenancy response onto the client taxonomy, keeping the
    /// upstream's user-correctable distinctions (conflict vs invalid).
    pub(crate) async fn error_from_response(
        res: reqwest::Response,
    ) -> RentwiseClientError {
        let status = res.status();

        let message = match res.text().await {
            Ok(body) => serde_json::from_str::<ErrorBody>(&body)
                .map(|b| b.message)
                .unwrap_or(body),
            Err(e) => {
                return RentwiseClientError::Generic(GenericErrorResponse {
                    message: e.to_string(),
                });
            }
        };

        match status {
            reqwest::StatusCode::UNAUTHORIZED => RentwiseClientError::Unauthorized,
            reqwest::StatusCode::NOT_FOUND => RentwiseClientError::NotFound { details: message },
            reqwest::StatusCode::CONFLICT => RentwiseClientError::Conflict { details: message },
            reqwest::StatusCode::BAD_REQUEST | reqwest::StatusCode::UNPROCESSABLE_ENTITY => {
                RentwiseClientError::InvalidRequest { details: message }
            }
            reqwest::StatusCode::INTERNAL_SERVER_ERROR => {
                RentwiseClientError::InternalServerError { details: message }
            }
            _ => RentwiseClientError::Generic(GenericErrorResponse { message }),
        }
    }
}

#[derive(serde::Deserialize)]
struct ErrorBody {
    message: String,
}
