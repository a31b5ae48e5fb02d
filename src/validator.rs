//! Structural validation of image payloads. No pixel content is interpreted:
//! an image is valid when its container can be identified and fully decoded.

use image::io::Reader as ImageReader;
use image::{ImageError, ImageFormat};
use std::io::Cursor;
use tracing::debug;

/// Reason given for bytes whose container format cannot be sniffed
pub const UNIDENTIFIED_IMAGE: &str = "cannot identify image file";

/// The outcome of validating a byte buffer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageValidation {
    /// The bytes hold a well-formed image
    Valid {
        format: String,
        width: u32,
        height: u32,
    },

    /// The bytes are not a recognized or intact image container
    Invalid { reason: String },
}

/// Validate that `bytes` hold a complete image.
///
/// Runs in two phases. The container is sniffed and its header read for the
/// dimensions; reading the header consumes the reader, so a fresh reader is
/// then opened over the same bytes and the whole image is decoded. The full
/// decode catches truncated or corrupt data behind an intact header. Decoder
/// errors become `ImageValidation::Invalid` and never escape.
#[tracing::instrument(skip(bytes), fields(len = bytes.len()))]
pub fn validate(bytes: &[u8]) -> ImageValidation {
    let (format, width, height) = match open(bytes) {
        Ok(header) => header,
        Err(reason) => return ImageValidation::Invalid { reason },
    };
    debug!("opened {format:?} image, size {width}x{height}");

    if let Err(e) = verify(bytes, format) {
        return ImageValidation::Invalid {
            reason: e.to_string(),
        };
    }

    ImageValidation::Valid {
        format: format_name(format),
        width,
        height,
    }
}

/// Sniff the container format and read the dimensions from the header
fn open(bytes: &[u8]) -> Result<(ImageFormat, u32, u32), String> {
    let reader = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| e.to_string())?;
    let format = reader.format().ok_or_else(|| UNIDENTIFIED_IMAGE.to_string())?;
    let (width, height) = reader.into_dimensions().map_err(|e| e.to_string())?;
    Ok((format, width, height))
}

/// Decode the full image to check the integrity of the container
fn verify(bytes: &[u8], format: ImageFormat) -> Result<(), ImageError> {
    ImageReader::with_format(Cursor::new(bytes), format).decode()?;
    Ok(())
}

/// Upper-case container name, e.g. `PNG` or `JPEG`
fn format_name(format: ImageFormat) -> String {
    let name = match format {
        ImageFormat::Png => "PNG",
        ImageFormat::Jpeg => "JPEG",
        ImageFormat::Gif => "GIF",
        ImageFormat::WebP => "WEBP",
        ImageFormat::Bmp => "BMP",
        ImageFormat::Tiff => "TIFF",
        ImageFormat::Ico => "ICO",
        other => return format!("{other:?}").to_uppercase(),
    };
    name.into()
}
