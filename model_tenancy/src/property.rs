use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A managed property, owned by the property domain.
///
/// `owner_name` and `tenant_count` are enrichment-only fields: the owning
/// service always leaves them unset, the dashboard fills them in at read
/// time by joining against the user and tenant sources.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub id: i64,
    /// The user who owns this property.
    pub user_id: i64,
    pub name: String,
    pub address: Option<String>,
    pub city: Option<String>,
    pub status: Option<String>,
    pub monthly_rent: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tenant_count: Option<i64>,
}
