//! Signature Payload

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::error::ValidationError;

const PNG_MAGIC: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

/// Base64 payload of a canvas PNG data URL, checked to really be a PNG
pub fn signature_payload(data_url: &str) -> Result<String, ValidationError> {
    let payload = data_url
        .split_once(',')
        .map(|(_, data)| data)
        .unwrap_or(data_url)
        .trim();
    if payload.is_empty() {
        return Err(ValidationError::EmptySignature);
    }

    let bytes = STANDARD
        .decode(payload)
        .map_err(|_| ValidationError::InvalidSignature)?;
    if !bytes.starts_with(PNG_MAGIC) {
        return Err(ValidationError::InvalidSignature);
    }
    Ok(payload.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn png_url() -> String {
        let mut bytes = PNG_MAGIC.to_vec();
        bytes.extend_from_slice(b"\0\0\0\rIHDR");
        format!("data:image/png;base64,{}", STANDARD.encode(bytes))
    }

    #[test]
    fn test_prefix_is_stripped() {
        let url = png_url();
        let payload = signature_payload(&url).unwrap();
        assert!(!payload.contains(','));
        assert!(url.ends_with(&payload));
    }

    #[test]
    fn test_empty_data_url() {
        assert_eq!(signature_payload("data:,"), Err(ValidationError::EmptySignature));
    }

    #[test]
    fn test_non_png_rejected() {
        let url = format!("data:image/jpeg;base64,{}", STANDARD.encode(b"\xFF\xD8\xFF\xE0"));
        assert_eq!(signature_payload(&url), Err(ValidationError::InvalidSignature));
        assert_eq!(
            signature_payload("data:image/png;base64,@@@"),
            Err(ValidationError::InvalidSignature)
        );
    }
}
