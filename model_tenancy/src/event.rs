use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::TenantRequest;

/// A request lifecycle change, published on the tenant-request topic and
/// rebroadcast to connected observers. Transient; transported, never stored.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TenantRequestEvent {
    /// Self-generated uuidv7, assigned when the event is built.
    pub event_id: Uuid,
    pub request_id: i64,
    pub requested_by_user_id: i64,
    pub status: RequestEventStatus,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub timestamp: DateTime<Utc>,
}

/// Lifecycle signal kind. `Created` is a lifecycle signal and has no
/// counterpart in [`crate::RequestStatus`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, ToSchema,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum RequestEventStatus {
    Created,
    Approved,
    Rejected,
}

impl TenantRequestEvent {
    pub fn for_request(request: &TenantRequest, status: RequestEventStatus) -> Self {
        Self {
            event_id: Uuid::now_v7(),
            request_id: request.id,
            requested_by_user_id: request.requested_by_user_id,
            status,
            email: request.email.clone(),
            first_name: request.first_name.clone(),
            last_name: request.last_name.clone(),
            timestamp: Utc::now(),
        }
    }
}
