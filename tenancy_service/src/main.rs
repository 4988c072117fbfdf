use std::sync::Arc;

use anyhow::Context;
use rentwise_entrypoint::RentwiseEntrypoint;
use rentwise_env::Environment;
use rentwise_notify::{DEFAULT_TOPIC_CAPACITY, EventBus};

use tenancy_service::domain::services::RequestLifecycleImpl;
use tenancy_service::inbound::http;
use tenancy_service::outbound::memory::{InMemoryRequestStore, InMemoryTenantStore};

mod config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env = Environment::new_or_prod();
    RentwiseEntrypoint::new(env).init();

    // Parse our configuration from the environment.
    let config = config::Config::from_env().context("expected to be able to generate config")?;

    tracing::info!(environment = %config.environment, "initialized config");

    let request_topic = EventBus::new("tenant.request.topic", DEFAULT_TOPIC_CAPACITY);

    let service = Arc::new(RequestLifecycleImpl::new(
        InMemoryRequestStore::default(),
        InMemoryTenantStore::default(),
        request_topic,
    ));

    http::setup_and_serve(service, config.port).await?;
    Ok(())
}
