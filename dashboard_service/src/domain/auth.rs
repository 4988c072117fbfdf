//! Explicit authorization checks, performed once at the top of every
//! operation against the passed-in caller identity.

use model_tenancy::Caller;

use crate::domain::error::DashboardError;

pub fn ensure_admin(caller: &Caller) -> Result<(), DashboardError> {
    if caller.is_admin() {
        return Ok(());
    }

    Err(DashboardError::PermissionDenied(
        "administrator role required".to_string(),
    ))
}

/// Members may only read their own data; administrators may read anyone's.
pub fn ensure_self_or_admin(caller: &Caller, user_id: i64) -> Result<(), DashboardError> {
    if caller.is_admin() || caller.user_id == user_id {
        return Ok(());
    }

    Err(DashboardError::PermissionDenied(format!(
        "caller {} may not read data for user {user_id}",
        caller.user_id
    )))
}
