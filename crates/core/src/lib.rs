//! Core signature-descriptor primitives: digest abstraction, descriptor packaging, file reading, and path-string helpers.
//!
//! This crate provides the foundational building blocks for sigpack, with no CLI or UI dependencies.

pub mod descriptor;
pub mod digest;
pub mod error;
pub mod path;
pub mod read;

pub use descriptor::{
    DescriptorDate, SignatureDescriptor, artifact_file_name, package_signature, parse_json,
};
pub use digest::{DigestAlgorithm, compute_digest};
pub use error::{DescriptorError, Result};
pub use path::{extension_of, file_stem_of};
pub use read::{FileContents, ReadMode, read_file};
