//! Signature descriptor: the JSON artifact packaging a detached signature.

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::digest::{DigestAlgorithm, compute_digest};
use crate::error::{DescriptorError, Result};

/// Calendar date stamped into a descriptor.
///
/// Packaging takes the date as a parameter so callers (and tests) control
/// the clock; [`DescriptorDate::today`] is the production source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DescriptorDate {
    pub day: u8,
    pub month: u8,
    pub year: i32,
}

impl DescriptorDate {
    /// The current UTC calendar date.
    pub fn today() -> Self {
        OffsetDateTime::now_utc().date().into()
    }
}

impl From<time::Date> for DescriptorDate {
    fn from(date: time::Date) -> Self {
        DescriptorDate {
            day: date.day(),
            month: u8::from(date.month()),
            year: date.year(),
        }
    }
}

impl std::fmt::Display for DescriptorDate {
    /// Renders as `day/month/year` without zero padding, e.g. `3/2/2026`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}/{}", self.day, self.month, self.year)
    }
}

/// The signature descriptor artifact.
///
/// All three binary fields are standard base64 with padding. The struct is
/// write-once: it is assembled by [`package_signature`], serialized for the
/// user, and only ever re-read for inspection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignatureDescriptor {
    /// Name of the signed file (stem plus extension, no directories).
    pub filename: String,
    /// Packaging date as `day/month/year`.
    pub date: String,
    /// Detached signature bytes, base64-encoded.
    pub signature: String,
    /// Aggregate public key bytes, base64-encoded.
    #[serde(rename = "aggregate-key")]
    pub aggregate_key: String,
    /// Digest of the signed file bytes, base64-encoded.
    pub hash: String,
}

impl SignatureDescriptor {
    /// Serialize to the artifact's JSON form (5-space indent).
    pub fn to_json(&self) -> Result<String> {
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"     ");
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.serialize(&mut ser)?;
        Ok(String::from_utf8(buf).expect("serde_json emits UTF-8"))
    }

    /// Parse a descriptor from JSON text.
    pub fn from_json(text: &str) -> Result<Self> {
        let value = parse_json(text)?;
        Ok(serde_json::from_value(value)?)
    }

    /// Decoded signature bytes.
    pub fn signature_bytes(&self) -> Result<Vec<u8>> {
        decode_field("signature", &self.signature)
    }

    /// Decoded aggregate-key bytes.
    pub fn aggregate_key_bytes(&self) -> Result<Vec<u8>> {
        decode_field("aggregate-key", &self.aggregate_key)
    }

    /// Decoded file digest bytes.
    pub fn hash_bytes(&self) -> Result<Vec<u8>> {
        decode_field("hash", &self.hash)
    }
}

/// Parse JSON text into a generic value.
///
/// Parse failures surface as [`DescriptorError::Json`] rather than being
/// swallowed.
pub fn parse_json(text: &str) -> Result<serde_json::Value> {
    Ok(serde_json::from_str(text)?)
}

/// Assemble a descriptor for a signed file.
///
/// Computes the digest over the raw file bytes and base64-encodes the
/// signature, the aggregate key, and the digest.
#[tracing::instrument(
    skip(file_bytes, signature, aggregate_key),
    fields(file_len = file_bytes.len())
)]
pub fn package_signature(
    file_bytes: &[u8],
    filename: &str,
    signature: &[u8],
    aggregate_key: &[u8],
    algorithm: DigestAlgorithm,
    date: DescriptorDate,
) -> SignatureDescriptor {
    let digest = compute_digest(algorithm, file_bytes);

    SignatureDescriptor {
        filename: filename.to_string(),
        date: date.to_string(),
        signature: BASE64.encode(signature),
        aggregate_key: BASE64.encode(aggregate_key),
        hash: BASE64.encode(&digest),
    }
}

/// Name of the descriptor artifact for the given signed filename.
pub fn artifact_file_name(filename: &str) -> String {
    format!("signature_of_{filename}.json")
}

fn decode_field(field: &'static str, value: &str) -> Result<Vec<u8>> {
    BASE64
        .decode(value)
        .map_err(|source| DescriptorError::Base64 { field, source })
}
