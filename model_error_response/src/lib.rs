#![deny(missing_docs)]
//! This crate splits out the [ErrorResponse] struct so both HTTP surfaces
//! can share one error body without pulling in each other's models.

/// A plain old json error response for use with axum.
#[derive(serde::Serialize, serde::Deserialize, Debug, utoipa::ToSchema)]
pub struct ErrorResponse<'a> {
    /// Message to explain failure
    pub message: &'a str,
}
