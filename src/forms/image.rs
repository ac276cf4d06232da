// src/forms/image.rs
use base64::Engine;

/// Selected files may not exceed 1 MiB. The picker script checks this
/// client-side too, but the server re-checks after decoding.
pub const MAX_IMAGE_BYTES: usize = 1_048_576;

/// An image the user selected in the browser, delivered to us as the
/// `data:` URL the file picker's preview already produced. We decode it,
/// gate the size, and pass the raw bytes through to the marketplace API
/// untouched (no processing pipeline here).
#[derive(Debug, Clone, PartialEq)]
pub struct ImageUpload {
    pub bytes: Vec<u8>,
    pub content_type: String,
    pub file_name: String,
}

impl ImageUpload {
    /// Parse a `data:image/...;base64,...` URL. Returns a field-level
    /// message on anything malformed, oversized, or not an image.
    pub fn from_data_url(data_url: &str) -> Result<Self, String> {
        let data_url = data_url.trim();
        if data_url.is_empty() {
            return Err("Image is required".to_string());
        }

        let rest = data_url
            .strip_prefix("data:")
            .ok_or("Selected file could not be read")?;
        let (header, payload) = rest.split_once(',').ok_or("Selected file could not be read")?;
        let content_type = header
            .strip_suffix(";base64")
            .ok_or("Selected file could not be read")?;

        let parsed: mime::Mime = content_type
            .parse()
            .map_err(|_| "Selected file could not be read".to_string())?;
        if parsed.type_() != mime::IMAGE {
            return Err("Selected file must be an image".to_string());
        }

        let bytes = base64::engine::general_purpose::STANDARD
            .decode(payload)
            .map_err(|_| "Selected file could not be read".to_string())?;

        if bytes.len() > MAX_IMAGE_BYTES {
            return Err("Image must not exceed 1MB".to_string());
        }

        let file_name = format!("upload.{}", parsed.subtype());

        Ok(Self {
            bytes,
            content_type: content_type.to_string(),
            file_name,
        })
    }
}
