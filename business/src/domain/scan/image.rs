use base64::Engine;
use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};

use super::errors::ScanError;

const DEFAULT_MIME_TYPE: &str = "image/jpeg";

const LENIENT: GeneralPurposeConfig =
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent);
const STANDARD_LENIENT: GeneralPurpose = GeneralPurpose::new(&alphabet::STANDARD, LENIENT);
const URL_SAFE_LENIENT: GeneralPurpose = GeneralPurpose::new(&alphabet::URL_SAFE, LENIENT);

/// Image submitted for a scan: a base64 payload, optionally carrying a
/// `data:<mime>[;param=value]*;base64,` header.
///
/// Padding is optional and the URL-safe alphabet is accepted; the payload is
/// forwarded as submitted.
#[derive(Debug, Clone, PartialEq)]
pub struct ScanImage {
    mime_type: String,
    payload: String,
}

impl ScanImage {
    pub fn new(raw: impl Into<String>) -> Result<Self, ScanError> {
        let raw = raw.into().trim().to_string();
        if raw.is_empty() {
            return Err(ScanError::ImageEmpty);
        }

        let (mime_type, body) = match split_data_uri(&raw) {
            Some((mime, body)) => (mime.to_string(), body),
            None => (DEFAULT_MIME_TYPE.to_string(), raw.as_str()),
        };

        let payload: String = body.chars().filter(|c| !c.is_whitespace()).collect();
        if payload.is_empty() {
            return Err(ScanError::ImageEmpty);
        }
        if STANDARD_LENIENT.decode(&payload).is_err()
            && URL_SAFE_LENIENT.decode(&payload).is_err()
        {
            return Err(ScanError::ImageInvalid);
        }

        Ok(Self { mime_type, payload })
    }

    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    /// Base64 payload without header or whitespace.
    pub fn payload(&self) -> &str {
        &self.payload
    }

    /// Displayable reference stored on the scan record.
    pub fn to_data_uri(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, self.payload)
    }
}

/// Splits a data URI into its media type, without parameters, and body.
fn split_data_uri(raw: &str) -> Option<(&str, &str)> {
    let rest = raw.strip_prefix("data:")?;
    let (header, body) = rest.split_once(";base64,")?;
    if header.contains(',') {
        return None;
    }
    let mime = header.split(';').next().unwrap_or_default().trim();
    if mime.is_empty() {
        return None;
    }
    Some((mime, body))
}
