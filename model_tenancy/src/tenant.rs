use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A person registered as occupying (or eligible to occupy) a property.
/// Distinct from a [`crate::User`]: the user referenced by `user_id` is the
/// sponsor ("roommate-of") who requested this tenant.
///
/// `roommate_of` and `property_name` are enrichment-only fields, unset at
/// the source and filled in by the dashboard.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Tenant {
    pub id: i64,
    /// The sponsoring user.
    pub user_id: i64,
    /// Unassigned until an administrator assigns a property.
    pub property_id: Option<i64>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub roommate_of: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub property_name: Option<String>,
}

/// Input for registering a tenant directly, without the request flow.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewTenant {
    pub user_id: i64,
    pub property_id: Option<i64>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
}
