#![deny(missing_docs)]
//! This crate provides a standardized initialization process that should be
//! used across entrypoint crates, so every binary gets the same tracing
//! configuration for its environment.

use rentwise_env::Environment;
use tracing_subscriber::EnvFilter;

/// unit struct which defines the behaviour for instantiation
#[derive(Debug)]
pub struct RentwiseEntrypoint {
    env: Environment,
}

/// sentinel struct which guarantees that we called [RentwiseEntrypoint::init]
#[derive(Debug)]
pub struct InitializedEntrypoint(());

impl Default for RentwiseEntrypoint {
    fn default() -> Self {
        RentwiseEntrypoint {
            env: Environment::new_or_prod(),
        }
    }
}

impl RentwiseEntrypoint {
    /// create a new instance of [Self] from an input [Environment]
    pub fn new(env: Environment) -> Self {
        Self { env }
    }

    /// consume self, initialize this binary, and return a proof that it was
    /// initialized [InitializedEntrypoint]
    pub fn init(self) -> InitializedEntrypoint {
        dotenv::dotenv().ok();

        match self.env {
            Environment::Local => {
                tracing_subscriber::fmt()
                    .with_ansi(true)
                    .with_env_filter(EnvFilter::from_default_env())
                    .with_file(true)
                    .with_line_number(true)
                    .pretty()
                    .init();
            }
            Environment::Production | Environment::Develop => {
                tracing_subscriber::fmt()
                    .with_ansi(false)
                    .with_env_filter(EnvFilter::from_default_env())
                    .with_file(true)
                    .with_line_number(true)
                    .json()
                    .with_current_span(true)
                    .with_span_list(false)
                    .flatten_event(true)
                    .init();
            }
        }

        InitializedEntrypoint(())
    }
}
