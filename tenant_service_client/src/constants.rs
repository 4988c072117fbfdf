use std::time::Duration;

pub(crate) static RENTWISE_INTERNAL_AUTH_KEY_HEADER_KEY: &str = "x-internal-auth-key";

/// Bound on any single upstream call so one unavailable source cannot stall
/// an aggregation read indefinitely.
pub(crate) const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);
