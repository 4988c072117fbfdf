use anyhow::Context;
pub use rentwise_env::Environment;

pub(crate) struct Config {
    /// The internal auth key sent to every upstream service.
    pub internal_api_secret_key: String,

    /// The user service URL.
    pub user_service_url: String,

    /// The property service URL.
    pub property_service_url: String,

    /// The tenancy service URL.
    pub tenant_service_url: String,

    /// The port to listen for HTTP requests on.
    pub port: usize,

    /// The environment we are in
    pub environment: Environment,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let internal_api_secret_key = std::env::var("INTERNAL_API_SECRET_KEY")
            .context("INTERNAL_API_SECRET_KEY must be provided")?;

        let user_service_url =
            std::env::var("USER_SERVICE_URL").context("USER_SERVICE_URL must be provided")?;

        let property_service_url = std::env::var("PROPERTY_SERVICE_URL")
            .context("PROPERTY_SERVICE_URL must be provided")?;

        let tenant_service_url =
            std::env::var("TENANT_SERVICE_URL").context("TENANT_SERVICE_URL must be provided")?;

        let port: usize = std::env::var("PORT")
            .unwrap_or("8080".to_string())
            .parse::<usize>()
            .context("port should be a number")?;

        let environment = Environment::new_or_prod();

        Ok(Config {
            internal_api_secret_key,
            user_service_url,
            property_service_url,
            tenant_service_url,
            port,
            environment,
        })
    }
}
