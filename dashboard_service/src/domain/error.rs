//! Domain error types

use thiserror::Error;

/// A dependent entity source failed to respond. For enrichment sub-lookups
/// this is downgraded to a default value at the call site; it only reaches
/// the caller when the primary data of an operation is affected.
#[derive(Debug, Error)]
#[error("upstream {upstream} unavailable: {source}")]
pub struct UpstreamError {
    pub upstream: &'static str,
    #[source]
    pub source: anyhow::Error,
}

impl UpstreamError {
    pub fn new(upstream: &'static str, source: impl Into<anyhow::Error>) -> Self {
        Self {
            upstream,
            source: source.into(),
        }
    }
}

/// How the tenancy service rejected a forwarded mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectionKind {
    NotFound,
    Conflict,
    Invalid,
}

/// Failure of a forwarded mutation: either the upstream rejected it (a
/// user-correctable outcome surfaced verbatim) or it was unreachable.
#[derive(Debug, Error)]
pub enum PassthroughError {
    #[error("{message}")]
    Rejected {
        kind: RejectionKind,
        message: String,
    },
    #[error(transparent)]
    Upstream(#[from] UpstreamError),
}

/// Domain-level errors for dashboard operations
#[derive(Debug, Error)]
pub enum DashboardError {
    /// The caller lacks the role for the operation
    #[error("permission denied: {0}")]
    PermissionDenied(String),

    /// A primary upstream fetch failed
    #[error(transparent)]
    Upstream(#[from] UpstreamError),

    /// The tenancy service rejected a forwarded mutation
    #[error("{message}")]
    Rejected {
        kind: RejectionKind,
        message: String,
    },
}

impl From<PassthroughError> for DashboardError {
    fn from(err: PassthroughError) -> Self {
        match err {
            PassthroughError::Rejected { kind, message } => {
                DashboardError::Rejected { kind, message }
            }
            PassthroughError::Upstream(e) => DashboardError::Upstream(e),
        }
    }
}

/// Result type for domain operations
pub type Result<T> = std::result::Result<T, DashboardError>;
