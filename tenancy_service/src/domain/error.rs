//! Domain error types

use thiserror::Error;

/// Domain-level errors for tenant and tenant-request operations
#[derive(Debug, Error)]
pub enum TenancyError {
    /// Referenced tenant or request does not exist
    #[error("{0}")]
    NotFound(String),

    /// The email already belongs to an existing tenant
    #[error("email already exists as a tenant")]
    DuplicateEmail,

    /// A pending request for the email already exists
    #[error("a pending request already exists for this email")]
    ConflictingRequest,

    /// Approve/reject attempted on a request that is not pending
    #[error("only pending requests can be {action}")]
    InvalidTransition { action: &'static str },

    /// Field-level validation failure on input
    #[error("validation error: {0}")]
    Validation(String),

    /// Internal error (wraps storage errors)
    #[error("internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

/// Result type for domain operations
pub type Result<T> = std::result::Result<T, TenancyError>;
