use constants::{DEFAULT_TIMEOUT, RENTWISE_INTERNAL_AUTH_KEY_HEADER_KEY};

pub(crate) mod constants;
pub(crate) mod get_users;

/// Client for the user directory service. The user domain is externally
/// owned; this client is the only way the rest of the system reads it.
#[derive(Clone)]
pub struct UserServiceClient {
    url: String,
    client: reqwest::Client,
}

impl UserServiceClient {
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
}
