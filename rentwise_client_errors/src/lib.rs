#[derive(thiserror::Error, Debug, serde::Serialize)]
#[serde(tag = "type")]
pub enum RentwiseClientError {
    #[error("unauthorized")]
    Unauthorized,
    #[error("not found: {details}")]
    NotFound { details: String },
    /// The upstream rejected the request as conflicting with existing state
    /// (duplicate tenant email, already-pending request).
    #[error("conflict: {details}")]
    Conflict { details: String },
    /// The upstream rejected the request as malformed or as an invalid
    /// state transition.
    #[error("invalid request: {details}")]
    InvalidRequest { details: String },
    #[error("internal server error: {details}")]
    InternalServerError { details: String },
    #[error("unable to build request: {details}")]
    RequestBuildError { details: String },
    #[error("an unknown error occurred")]
    Generic(GenericErrorResponse),
}

#[derive(serde::Serialize, Debug)]
pub struct GenericErrorResponse {
    pub message: String,
}

impl From<anyhow::Error> for GenericErrorResponse {
    fn from(err: anyhow::Error) -> Self {
        Self {
            message: err.to_string(),
        }
    }
}

impl From<anyhow::Error> for RentwiseClientError {
    fn from(err: anyhow::Error) -> Self {
        RentwiseClientError::Generic(GenericErrorResponse::from(err))
    }
}
