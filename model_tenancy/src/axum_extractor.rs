//! Extracts the caller identity from the signed gateway headers, so every
//! handler receives an explicit [Caller] value instead of reading ambient
//! session state.

use std::str::FromStr;

use axum::{
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
    response::IntoResponse,
};
use thiserror::Error;

use crate::{Caller, UserRole};

pub static RENTWISE_USER_ID_HEADER: &str = "x-rentwise-user-id";
pub static RENTWISE_ROLE_HEADER: &str = "x-rentwise-role";

#[derive(Debug, Error)]
pub enum CallerExtractorErr {
    #[error("missing caller identity header {0}")]
    MissingHeader(&'static str),
    #[error("invalid caller identity header {0}")]
    InvalidHeader(&'static str),
}

impl IntoResponse for CallerExtractorErr {
    fn into_response(self) -> axum::response::Response {
        let msg = self.to_string();
        (StatusCode::UNAUTHORIZED, msg).into_response()
    }
}

impl<S> FromRequestParts<S> for Caller
where
    S: Send + Sync,
{
    type Rejection = CallerExtractorErr;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user_id = header_value(parts, RENTWISE_USER_ID_HEADER)?
            .parse::<i64>()
            .map_err(|_| CallerExtractorErr::InvalidHeader(RENTWISE_USER_ID_HEADER))?;

        let role = UserRole::from_str(header_value(parts, RENTWISE_ROLE_HEADER)?)
            .map_err(|_| CallerExtractorErr::InvalidHeader(RENTWISE_ROLE_HEADER))?;

        Ok(Caller { user_id, role })
    }
}

fn header_value<'a>(
    parts: &'a Parts,
    name: &'static str,
) -> Result<&'a str, CallerExtractorErr> {
    parts
        .headers
        .get(name)
        .ok_or(CallerExtractorErr::MissingHeader(name))?
        .to_str()
        .map_err(|_| CallerExtractorErr::InvalidHeader(name))
}
