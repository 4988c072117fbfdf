use std::sync::Arc;

use anyhow::Context;
use rentwise_entrypoint::RentwiseEntrypoint;
use rentwise_env::Environment;
use rentwise_notify::{DEFAULT_TOPIC_CAPACITY, EventBus};

use dashboard_service::domain::services::{DashboardImpl, NotificationRelay};
use dashboard_service::inbound::{context::ApiContext, http};
use dashboard_service::outbound::http::{
    HttpPropertyDirectory, HttpRequestDirectory, HttpTenantDirectory, HttpUserDirectory,
};

mod config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env = Environment::new_or_prod();
    RentwiseEntrypoint::new(env).init();

    // Parse our configuration from the environment.
    let config = config::Config::from_env().context("expected to be able to generate config")?;

    tracing::info!(environment = %config.environment, "initialized config");

    let user_client = user_service_client::UserServiceClient::new(
        config.internal_api_secret_key.clone(),
        config.user_service_url.clone(),
    );
    tracing::info!(user_service_url = %config.user_service_url, "initialized user service client");

    let property_client = property_service_client::PropertyServiceClient::new(
        config.internal_api_secret_key.clone(),
        config.property_service_url.clone(),
    );
    tracing::info!(
        property_service_url = %config.property_service_url,
        "initialized property service client"
    );

    let tenant_client = tenant_service_client::TenantServiceClient::new(
        config.internal_api_secret_key.clone(),
        config.tenant_service_url.clone(),
    );
    tracing::info!(
        tenant_service_url = %config.tenant_service_url,
        "initialized tenant service client"
    );

    let dashboard = Arc::new(DashboardImpl::new(
        HttpUserDirectory::new(user_client),
        HttpPropertyDirectory::new(property_client),
        HttpTenantDirectory::new(tenant_client.clone()),
        HttpRequestDirectory::new(tenant_client),
    ));

    // Lifecycle events arrive on the request topic and are rebroadcast,
    // unmodified, to connected observers.
    let request_topic = EventBus::new("tenant.request.topic", DEFAULT_TOPIC_CAPACITY);
    let broadcast_topic = EventBus::new("dashboard.broadcast", DEFAULT_TOPIC_CAPACITY);

    let relay = NotificationRelay::new(&request_topic, broadcast_topic);
    tokio::spawn(relay.run());
    tracing::info!("notification relay started");

    http::setup_and_serve(ApiContext { dashboard }, config.port).await?;
    Ok(())
}
