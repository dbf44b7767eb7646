//! Image extraction and validation
//!
//! Normalizes the four wire encodings (base64 JSON field, multipart form
//! file, raw binary body, comma-delimited binary pair) into validated byte
//! buffers. Validation is format sniffing only - "does this look like a real
//! image" - the codec internals stay behind the `image` crate.

use axum::extract::Multipart;
use base64::{engine::general_purpose::STANDARD as BASE64, Engine};

use crate::error::ApiError;

/// A validated image payload
///
/// `size` is always the raw byte length of the exact slice handed to the
/// rest of the pipeline, not a decoded pixel count.
#[derive(Debug, Clone)]
pub struct ImagePayload {
    pub bytes: Vec<u8>,
    pub size: usize,
}

impl ImagePayload {
    fn new(bytes: Vec<u8>) -> Self {
        let size = bytes.len();
        Self { bytes, size }
    }
}

/// Decode and validate a base64-encoded image string
///
/// Tolerates a `data:...,` URI prefix and missing `=` padding.
pub fn decode_base64_image(image_data: &str) -> Result<ImagePayload, ApiError> {
    if image_data.is_empty() {
        return Err(ApiError::bad_request("Missing image data"));
    }

    // Remove data URI prefix if present
    let encoded = if image_data.starts_with("data:") {
        image_data
            .split_once(',')
            .map(|(_, rest)| rest)
            .unwrap_or(image_data)
    } else {
        image_data
    };

    // Add padding if needed
    let mut encoded = encoded.to_string();
    let remainder = encoded.len() % 4;
    if remainder != 0 {
        encoded.extend(std::iter::repeat('=').take(4 - remainder));
    }

    let bytes = BASE64
        .decode(encoded.as_bytes())
        .map_err(|e| ApiError::internal(format!("Failed to process image: {e}")))?;

    image::guess_format(&bytes)
        .map_err(|e| ApiError::bad_request(format!("Invalid image format: {e}")))?;

    Ok(ImagePayload::new(bytes))
}

/// Extract and validate the `image` file field from a multipart form
pub async fn form_image(multipart: &mut Multipart) -> Result<ImagePayload, ApiError> {
    let mut image: Option<Vec<u8>> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::internal(format!("Failed to process image: {e}")))?
    {
        if field.name() == Some("image") {
            let data = field
                .bytes()
                .await
                .map_err(|e| ApiError::internal(format!("Failed to process image: {e}")))?
                .to_vec();
            image = Some(data);
        }
    }

    let bytes = image.ok_or_else(|| ApiError::bad_request("Missing image in form data"))?;

    image::guess_format(&bytes)
        .map_err(|e| ApiError::bad_request(format!("Invalid image format: {e}")))?;

    Ok(ImagePayload::new(bytes))
}

/// Extract and validate the `image-1`/`image-2` file fields from a multipart form
///
/// Presence is checked for both fields before any bytes are validated, and
/// image-1 is validated before image-2 is inspected.
pub async fn form_image_pair(
    multipart: &mut Multipart,
) -> Result<(ImagePayload, ImagePayload), ApiError> {
    let mut first: Option<Vec<u8>> = None;
    let mut second: Option<Vec<u8>> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::internal(format!("Failed to process images: {e}")))?
    {
        match field.name() {
            Some("image-1") => {
                first = Some(
                    field
                        .bytes()
                        .await
                        .map_err(|e| {
                            ApiError::internal(format!("Failed to process images: {e}"))
                        })?
                        .to_vec(),
                );
            }
            Some("image-2") => {
                second = Some(
                    field
                        .bytes()
                        .await
                        .map_err(|e| {
                            ApiError::internal(format!("Failed to process images: {e}"))
                        })?
                        .to_vec(),
                );
            }
            _ => {}
        }
    }

    let first = first.ok_or_else(|| ApiError::bad_request("Missing image-1 in form data"))?;
    let second = second.ok_or_else(|| ApiError::bad_request("Missing image-2 in form data"))?;

    image::guess_format(&first)
        .map_err(|e| ApiError::bad_request(format!("Invalid format for image-1: {e}")))?;
    image::guess_format(&second)
        .map_err(|e| ApiError::bad_request(format!("Invalid format for image-2: {e}")))?;

    Ok((ImagePayload::new(first), ImagePayload::new(second)))
}

/// Validate a raw binary body as a single image
pub fn binary_image(body: &[u8]) -> Result<ImagePayload, ApiError> {
    if body.is_empty() {
        return Err(ApiError::bad_request("Missing binary data in request body"));
    }

    image::guess_format(body)
        .map_err(|e| ApiError::bad_request(format!("Invalid image format: {e}")))?;

    Ok(ImagePayload::new(body.to_vec()))
}

/// Split a raw binary body into two images at the first comma byte
///
/// Only the first 0x2C byte delimits - image content may legitimately
/// contain further comma bytes in its own encoding.
pub fn binary_image_pair(body: &[u8]) -> Result<(ImagePayload, ImagePayload), ApiError> {
    if body.is_empty() {
        return Err(ApiError::bad_request("Missing binary data in request body"));
    }

    let comma = body
        .iter()
        .position(|&b| b == b',')
        .ok_or_else(|| ApiError::bad_request("No comma separator found between images"))?;

    let first = &body[..comma];
    let second = &body[comma + 1..];

    for part in [first, second] {
        image::guess_format(part).map_err(|e| {
            ApiError::bad_request(format!("Invalid image format in one or both parts: {e}"))
        })?;
    }

    Ok((
        ImagePayload::new(first.to_vec()),
        ImagePayload::new(second.to_vec()),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    /// Minimal JPEG header - format sniffing only reads the magic bytes
    fn jpeg_bytes() -> Vec<u8> {
        vec![
            0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10, 0x4A, 0x46, 0x49, 0x46, 0x00, 0x01, 0x2C, 0x2C,
            0x2C, 0xFF, 0xD9,
        ]
    }

    /// Minimal PNG header, guaranteed to contain no comma bytes
    fn png_bytes() -> Vec<u8> {
        vec![
            0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00, 0x00, 0x0D, 0x49, 0x48,
            0x44, 0x52,
        ]
    }

    #[test]
    fn test_base64_decodes_to_exact_byte_length() {
        let image = jpeg_bytes();
        let encoded = BASE64.encode(&image);
        let payload = decode_base64_image(&encoded).unwrap();
        assert_eq!(payload.size, image.len());
        assert_eq!(payload.bytes, image);
    }

    #[test]
    fn test_base64_strips_data_uri_prefix() {
        let image = png_bytes();
        let encoded = format!("data:image/png;base64,{}", BASE64.encode(&image));
        let payload = decode_base64_image(&encoded).unwrap();
        assert_eq!(payload.bytes, image);
    }

    #[test]
    fn test_base64_tolerates_missing_padding() {
        let image = jpeg_bytes();
        let encoded = BASE64.encode(&image);
        let unpadded = encoded.trim_end_matches('=');
        let payload = decode_base64_image(unpadded).unwrap();
        assert_eq!(payload.bytes, image);
    }

    #[test]
    fn test_base64_empty_is_bad_request() {
        let err = decode_base64_image("").unwrap_err();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert!(err.to_string().contains("Missing image data"));
    }

    #[test]
    fn test_base64_malformed_is_internal_error() {
        let err = decode_base64_image("!!!not-base64!!!").unwrap_err();
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(err.to_string().contains("Failed to process image"));
    }

    #[test]
    fn test_base64_non_image_is_bad_request() {
        let encoded = BASE64.encode(b"definitely not an image");
        let err = decode_base64_image(&encoded).unwrap_err();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert!(err.to_string().contains("Invalid image format"));
    }

    #[test]
    fn test_binary_image_empty_body() {
        let err = binary_image(&[]).unwrap_err();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert!(err.to_string().contains("Missing binary data"));
    }

    #[test]
    fn test_binary_image_size_is_raw_byte_length() {
        let image = jpeg_bytes();
        let payload = binary_image(&image).unwrap();
        assert_eq!(payload.size, image.len());
    }

    #[test]
    fn test_pair_splits_at_first_comma_only() {
        // The second image deliberately contains comma bytes of its own
        let first = png_bytes();
        let second = jpeg_bytes();
        assert!(second.contains(&b','));
        assert!(!first.contains(&b','));

        let mut body = first.clone();
        body.push(b',');
        body.extend_from_slice(&second);

        let (left, right) = binary_image_pair(&body).unwrap();
        assert_eq!(left.bytes, first);
        assert_eq!(right.bytes, second);
    }

    #[test]
    fn test_pair_without_separator() {
        let err = binary_image_pair(&png_bytes()).unwrap_err();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert!(err.to_string().contains("No comma separator"));
    }

    #[test]
    fn test_pair_with_invalid_segment() {
        let mut body = png_bytes();
        body.push(b',');
        body.extend_from_slice(b"garbage");

        let err = binary_image_pair(&body).unwrap_err();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert!(err.to_string().contains("one or both parts"));
    }
}
