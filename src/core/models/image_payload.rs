use std::path::Path;

use anyhow::{Context, Result};
use base64::Engine;

#[derive(Clone, PartialEq)]
pub struct ImagePayload {
    pub bytes: Vec<u8>,
    pub mime_type: String,
}

impl std::fmt::Debug for ImagePayload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImagePayload")
            .field("mime_type", &self.mime_type)
            .field("byte_count", &self.bytes.len())
            .finish()
    }
}

impl ImagePayload {
    /// Detects the encoding from the magic bytes, falling back to the file name's extension.
    pub fn from_bytes(bytes: Vec<u8>, file_name_hint: Option<&Path>) -> Result<Self> {
        if bytes.is_empty() {
            anyhow::bail!("Image data is empty");
        }

        let detected_format = image::guess_format(&bytes).ok().or_else(|| {
            file_name_hint.and_then(|path| image::ImageFormat::from_path(path).ok())
        });

        let format = detected_format
            .ok_or_else(|| anyhow::anyhow!("Selected file is not a supported image (PNG, JPG, or WEBP)"))?;

        log::debug!(
            "[IMAGE_PAYLOAD] detected {:?} ({} bytes)",
            format,
            bytes.len()
        );

        Ok(Self {
            bytes,
            mime_type: format.to_mime_type().to_string(),
        })
    }

    /// Accepts `data:<mime>;base64,<data>` or bare base64.
    pub fn from_data_url(data_url: &str) -> Result<Self> {
        let (header, encoded) = match data_url.split_once(',') {
            Some((header, encoded)) => (Some(header), encoded),
            None => (None, data_url),
        };

        let bytes = base64::engine::general_purpose::STANDARD
            .decode(encoded.trim())
            .context("Image data is not valid base64")?;

        let declared_mime_type = header
            .and_then(|header| header.strip_prefix("data:"))
            .and_then(|rest| rest.split(';').next())
            .filter(|mime_type| mime_type.starts_with("image/"));

        match declared_mime_type {
            Some(mime_type) if !bytes.is_empty() => Ok(Self {
                bytes,
                mime_type: mime_type.to_string(),
            }),
            _ => Self::from_bytes(bytes, None),
        }
    }

    pub fn to_base64(&self) -> String {
        base64::engine::general_purpose::STANDARD.encode(&self.bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

    fn png_bytes() -> Vec<u8> {
        let mut bytes = PNG_SIGNATURE.to_vec();
        bytes.extend_from_slice(&[0u8; 16]);
        bytes
    }

    #[test]
    fn test_from_bytes_detects_png_from_magic_bytes() {
        let payload = ImagePayload::from_bytes(png_bytes(), None).unwrap();

        assert_eq!(payload.mime_type, "image/png");
    }

    #[test]
    fn test_from_bytes_prefers_magic_bytes_over_misleading_extension() {
        let payload =
            ImagePayload::from_bytes(png_bytes(), Some(Path::new("scan.jpg"))).unwrap();

        assert_eq!(payload.mime_type, "image/png");
    }

    #[test]
    fn test_from_bytes_falls_back_to_extension() {
        let payload =
            ImagePayload::from_bytes(vec![1, 2, 3, 4], Some(Path::new("receipt.webp"))).unwrap();

        assert_eq!(payload.mime_type, "image/webp");
    }

    #[test]
    fn test_from_bytes_rejects_empty_data() {
        let result = ImagePayload::from_bytes(vec![], Some(Path::new("empty.png")));

        assert!(result.is_err());
    }

    #[test]
    fn test_from_bytes_rejects_unknown_content() {
        let result = ImagePayload::from_bytes(b"plain text".to_vec(), Some(Path::new("notes.txt")));

        assert!(result.is_err());
    }

    #[test]
    fn test_from_data_url_strips_prefix_and_keeps_declared_type() {
        let payload = ImagePayload::from_data_url("data:image/webp;base64,AQIDBA==").unwrap();

        assert_eq!(payload.bytes, vec![1, 2, 3, 4]);
        assert_eq!(payload.mime_type, "image/webp");
    }

    #[test]
    fn test_from_data_url_accepts_bare_base64() {
        let encoded = base64::engine::general_purpose::STANDARD.encode(png_bytes());

        let payload = ImagePayload::from_data_url(&encoded).unwrap();

        assert_eq!(payload.bytes, png_bytes());
        assert_eq!(payload.mime_type, "image/png");
    }

    #[test]
    fn test_from_data_url_rejects_invalid_base64() {
        assert!(ImagePayload::from_data_url("data:image/png;base64,@@@").is_err());
    }

    #[test]
    fn test_to_base64_encodes_raw_bytes() {
        let payload = ImagePayload {
            bytes: vec![1, 2, 3, 4],
            mime_type: "image/png".to_string(),
        };

        assert_eq!(payload.to_base64(), "AQIDBA==");
    }
}
