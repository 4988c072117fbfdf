use anyhow::Context;
pub use rentwise_env::Environment;

pub(crate) struct Config {
    /// The port to listen for HTTP requests on.
    pub port: usize,

    /// The environment we are in
    pub environment: Environment,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let port: usize = std::env::var("PORT")
            .unwrap_or("8081".to_string())
            .parse::<usize>()
            .context("port should be a number")?;

        let environment = Environment::new_or_prod();

        Ok(Config { port, environment })
    }
}
