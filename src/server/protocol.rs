use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Body of an inference request: an image encoded as base 64
#[derive(Deserialize)]
pub struct ImagePayload {
    pub image_base64: String,
}

impl Debug for ImagePayload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "ImagePayload {{ image_base64: <{} chars> }}",
            self.image_base64.len()
        )
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct StatusResponse {
    pub message: String,
}

/// The result of inference on a valid image
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct InferenceResponse {
    pub description: String,
}

/// Body of every error response
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct ErrorResponse {
    pub detail: String,
}
