//! HTTP routes. The inference route validates the uploaded image and answers
//! with a placeholder description; no model is run.

use super::protocol::{ImagePayload, InferenceResponse, StatusResponse};
use super::WebError;
use crate::config::{PLACEHOLDER_DESCRIPTION, STATUS_MESSAGE};
use crate::validator::{self, ImageValidation};
use actix_web::{get, post, web, Responder};
use anyhow::anyhow;
use base64::{engine::general_purpose, Engine as _};
use tracing::{error, info};

type Result<T> = std::result::Result<T, WebError>;

/// Liveness check
#[get("/")]
pub async fn status() -> impl Responder {
    info!("status route accessed");
    web::Json(StatusResponse {
        message: STATUS_MESSAGE.into(),
    })
}

#[post("/infer")]
pub async fn infer(req: web::Json<ImagePayload>) -> Result<impl Responder> {
    let payload = req.into_inner();
    info!("received request for inference: {payload:?}");

    if payload.image_base64.is_empty() {
        error!("received empty image_base64 string");
        return Err(WebError::EmptyPayload);
    }

    // Line-wrapped base 64 from camera encoders is accepted
    let encoded: String = payload
        .image_base64
        .chars()
        .filter(|c| !c.is_ascii_whitespace())
        .collect();
    let image = general_purpose::STANDARD
        .decode(&encoded)
        .map_err(|e| {
            error!("base64 decoding error: {e}");
            WebError::from(e)
        })?;
    info!("decoded base64 image data, size: {} bytes", image.len());

    // Decoding is CPU bound, keep it off the async workers
    let outcome = web::block(move || validator::validate(&image))
        .await
        .map_err(|e| anyhow!("image validation task failed: {e}"))?;

    match outcome {
        ImageValidation::Valid {
            format,
            width,
            height,
        } => info!("successfully opened image. format: {format}, size: {width}x{height}"),
        ImageValidation::Invalid { reason } => {
            error!("invalid image data: {reason}");
            return Err(WebError::InvalidImage(reason));
        }
    }

    info!("returning description: {PLACEHOLDER_DESCRIPTION}");
    Ok(web::Json(InferenceResponse {
        description: PLACEHOLDER_DESCRIPTION.into(),
    }))
}
