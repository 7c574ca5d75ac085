//! Digest (hash) abstraction with algorithm agility.

use serde::{Deserialize, Serialize};
use sha2::{Digest as _, Sha256};

use crate::error::{DescriptorError, Result};

/// Supported digest algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[repr(u8)]
pub enum DigestAlgorithm {
    Sha256 = 1,
}

impl DigestAlgorithm {
    /// Returns the algorithm name in lowercase.
    pub fn name(&self) -> &'static str {
        match self {
            DigestAlgorithm::Sha256 => "sha256",
        }
    }

    /// Parse algorithm from name string.
    pub fn from_name(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "sha256" | "sha-256" => Ok(DigestAlgorithm::Sha256),
            _ => Err(DescriptorError::UnknownAlgorithm(s.to_string())),
        }
    }

    /// Output length in bytes for this algorithm.
    pub fn output_len(&self) -> usize {
        match self {
            DigestAlgorithm::Sha256 => 32,
        }
    }
}

impl TryFrom<u8> for DigestAlgorithm {
    type Error = DescriptorError;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            1 => Ok(DigestAlgorithm::Sha256),
            _ => Err(DescriptorError::UnknownAlgorithmTag(value)),
        }
    }
}

/// Compute digest of the given data using the specified algorithm.
#[tracing::instrument(skip(data), fields(data_len = data.len(), alg = ?algorithm))]
pub fn compute_digest(algorithm: DigestAlgorithm, data: &[u8]) -> Vec<u8> {
    match algorithm {
        DigestAlgorithm::Sha256 => {
            let mut hasher = Sha256::new();
            hasher.update(data);
            hasher.finalize().to_vec()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sha256_output_length() {
        let digest = compute_digest(DigestAlgorithm::Sha256, b"hello");
        assert_eq!(digest.len(), DigestAlgorithm::Sha256.output_len());
    }

    #[test]
    fn sha256_known_vector() {
        // FIPS 180-2 test vector for "abc"
        let digest = compute_digest(DigestAlgorithm::Sha256, b"abc");
        assert_eq!(
            digest[..4],
            [0xba, 0x78, 0x16, 0xbf],
            "unexpected digest prefix: {digest:02x?}"
        );
    }

    #[test]
    fn empty_input_digests() {
        let digest = compute_digest(DigestAlgorithm::Sha256, b"");
        // SHA-256 of the empty string starts with e3b0c442
        assert_eq!(digest[..4], [0xe3, 0xb0, 0xc4, 0x42]);
    }

    #[test]
    fn parses_both_name_spellings() {
        assert_eq!(
            DigestAlgorithm::from_name("SHA-256").unwrap(),
            DigestAlgorithm::Sha256
        );
        assert_eq!(
            DigestAlgorithm::from_name("sha256").unwrap(),
            DigestAlgorithm::Sha256
        );
    }

    #[test]
    fn rejects_unknown_name() {
        let err = DigestAlgorithm::from_name("md5").unwrap_err();
        assert!(matches!(err, DescriptorError::UnknownAlgorithm(_)));
    }

    #[test]
    fn tag_round_trip() {
        let alg = DigestAlgorithm::try_from(DigestAlgorithm::Sha256 as u8).unwrap();
        assert_eq!(alg, DigestAlgorithm::Sha256);
        assert!(DigestAlgorithm::try_from(0).is_err());
    }
}
