//! The user-facing JSON web server. Routes, request/response types, and the
//! mapping of failures to HTTP responses.

use actix_cors::Cors;
use actix_web::error::JsonPayloadError;
use actix_web::http::header::ContentType;
use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse};
use protocol::ErrorResponse;
use tracing::error;

pub mod protocol;
pub mod routes;

/// Detail sent to clients for any internal failure
const INTERNAL_ERROR_DETAIL: &str = "An internal server error occurred";

/// Every failure a request can end in. Client errors carry their cause to the
/// client; internal errors are only logged.
#[derive(Debug)]
pub enum WebError {
    /// `image_base64` was empty
    EmptyPayload,

    /// `image_base64` was not valid base 64
    InvalidBase64(base64::DecodeError),

    /// The decoded bytes are not a valid image
    InvalidImage(String),

    /// The request body was over the configured limit, in bytes
    PayloadTooLarge(usize),

    /// The request body could not be parsed into the expected JSON
    MalformedBody(String),

    Internal(anyhow::Error),
}

impl std::fmt::Display for WebError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WebError::EmptyPayload => write!(f, "No image data provided"),
            WebError::InvalidBase64(e) => write!(f, "Invalid base64 string: {e}"),
            WebError::InvalidImage(reason) => write!(f, "Invalid image data: {reason}"),
            WebError::PayloadTooLarge(limit) => {
                write!(f, "Request body exceeds the {limit} byte limit")
            }
            WebError::MalformedBody(e) => write!(f, "Invalid request body: {e}"),
            WebError::Internal(_) => write!(f, "{INTERNAL_ERROR_DETAIL}"),
        }
    }
}

impl actix_web::error::ResponseError for WebError {
    fn error_response(&self) -> HttpResponse {
        if let WebError::Internal(err) = self {
            error!("unexpected error while serving request: {err:?}");
        }

        HttpResponse::build(self.status_code())
            .insert_header(ContentType::json())
            .json(ErrorResponse {
                detail: self.to_string(),
            })
    }

    fn status_code(&self) -> StatusCode {
        match self {
            WebError::EmptyPayload | WebError::InvalidBase64(_) | WebError::InvalidImage(_) => {
                StatusCode::BAD_REQUEST
            }
            WebError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            WebError::MalformedBody(_) => StatusCode::UNPROCESSABLE_ENTITY,
            WebError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<anyhow::Error> for WebError {
    fn from(err: anyhow::Error) -> WebError {
        WebError::Internal(err)
    }
}

impl From<base64::DecodeError> for WebError {
    fn from(err: base64::DecodeError) -> Self {
        WebError::InvalidBase64(err)
    }
}

/// JSON extractor settings: body size limit, and rejected bodies rendered as
/// `WebError`s
pub fn json_config(max_payload_bytes: usize) -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(max_payload_bytes)
        .error_handler(|err, _req| {
            let err = match err {
                JsonPayloadError::OverflowKnownLength { limit, .. }
                | JsonPayloadError::Overflow { limit } => WebError::PayloadTooLarge(limit),
                err => WebError::MalformedBody(err.to_string()),
            };
            err.into()
        })
}

/// Register the routes and the JSON extractor settings on an `App`
pub fn configure(max_payload_bytes: usize) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg| {
        cfg.app_data(json_config(max_payload_bytes))
            .service(routes::status)
            .service(routes::infer);
    }
}

/// Any origin, method and header; credentials allowed. The request's origin
/// is echoed back rather than a wildcard so credentialed requests pass.
pub fn cors() -> Cors {
    Cors::default()
        .allow_any_origin()
        .allow_any_method()
        .allow_any_header()
        .supports_credentials()
}
