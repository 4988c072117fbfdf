use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use utoipa::ToSchema;

use crate::validate_email::is_valid_email;

/// A pending application for a prospective tenant, submitted by a user and
/// subject to admin approval.
///
/// Lifecycle: created `Pending`, transitions exactly once to `Approved` or
/// `Rejected`. Terminal states are immutable.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TenantRequest {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    /// The user who submitted this request.
    pub requested_by_user_id: i64,
    pub status: RequestStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, ToSchema,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum RequestStatus {
    Pending,
    Approved,
    Rejected,
}

/// Input for submitting a tenant request.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewTenantRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub requested_by_user_id: i64,
}

impl NewTenantRequest {
    /// Field-level validation. Uniqueness against existing tenants and
    /// pending requests is the lifecycle manager's job, not ours.
    pub fn validate(&self) -> Result<(), String> {
        if self.first_name.trim().is_empty() {
            return Err("first name must not be empty".to_string());
        }
        if self.last_name.trim().is_empty() {
            return Err("last name must not be empty".to_string());
        }
        if !is_valid_email(&self.email) {
            return Err(format!("invalid email address: {}", self.email));
        }
        Ok(())
    }
}
