use std::future::{Ready, ready};

use actix_web::dev::Payload;
use actix_web::http::StatusCode;
use actix_web::{FromRequest, HttpRequest, HttpResponse, ResponseError, web};
use serde_json::json;
use thiserror::Error;

use crate::config::ServerConfig;

/// Header carrying the admin shared secret.
pub const ADMIN_PASSWORD_HEADER: &str = "x-admin-password";

#[derive(Debug, Error)]
pub enum AdminAccessError {
    #[error("Unauthorized")]
    Unauthorized,
}

impl ResponseError for AdminAccessError {
    fn status_code(&self) -> StatusCode {
        StatusCode::UNAUTHORIZED
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::Unauthorized().json(json!({ "error": "Unauthorized" }))
    }
}

/// Extractor proving that the request carried the admin shared secret.
///
/// Handlers guard themselves by taking an `AdminKey` parameter, requests
/// without the correct `x-admin-password` header never reach them.
pub struct AdminKey;

impl FromRequest for AdminKey {
    type Error = AdminAccessError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let config = req.app_data::<web::Data<ServerConfig>>();
        let supplied = req
            .headers()
            .get(ADMIN_PASSWORD_HEADER)
            .and_then(|value| value.to_str().ok());

        match (config, supplied) {
            (Some(config), Some(password)) if password == config.admin_password => {
                ready(Ok(AdminKey))
            }
            _ => ready(Err(AdminAccessError::Unauthorized)),
        }
    }
}
