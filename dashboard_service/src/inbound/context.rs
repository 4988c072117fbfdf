use std::sync::Arc;

use crate::domain::services::DashboardImpl;
use crate::outbound::http::{
    HttpPropertyDirectory, HttpRequestDirectory, HttpTenantDirectory, HttpUserDirectory,
};

/// The concrete aggregation engine this binary wires together.
pub type Dashboard = DashboardImpl<
    HttpUserDirectory,
    HttpPropertyDirectory,
    HttpTenantDirectory,
    HttpRequestDirectory,
>;

#[derive(Clone)]
pub struct ApiContext {
    pub dashboard: Arc<Dashboard>,
}
