use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest};
use futures_util::future::{ready, Ready};

use crate::domain::lobby::ACCESS_CODE_LEN;
use crate::error::AppError;
use crate::errors::ErrorCode;

/// Lobby access code taken from the `{access_code}` path segment.
///
/// Access codes are the first six hex digits of the lobby id; uppercase
/// input is accepted and normalised. Existence is checked by the service,
/// not here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessCode(pub String);

impl AccessCode {
    pub fn parse(raw: &str) -> Result<Self, AppError> {
        let code = raw.trim().to_ascii_lowercase();
        if code.len() != ACCESS_CODE_LEN || !code.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(AppError::bad_request(
                ErrorCode::InvalidAccessCode,
                format!("Invalid access code: {raw}"),
            ));
        }
        Ok(Self(code))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromRequest for AccessCode {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let result = req
            .match_info()
            .get("access_code")
            .ok_or_else(|| {
                AppError::bad_request(ErrorCode::InvalidAccessCode, "Missing access_code parameter")
            })
            .and_then(AccessCode::parse);
        ready(result)
    }
}
