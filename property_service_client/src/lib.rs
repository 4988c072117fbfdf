use constants::{DEFAULT_TIMEOUT, RENTWISE_INTERNAL_AUTH_KEY_HEADER_KEY};

pub(crate) mod constants;
pub(crate) mod get_properties;

/// Client for the property service. The property domain is externally
/// owned; the tenancy core only reads and enriches it.
#[derive(Clone)]
pub struct PropertyServiceClient {
    url: String,
    client: reqwest::Client,
}

impl PropertyServiceClient {
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
