//! File reading wrapper with binary and text decoding modes.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::error::{DescriptorError, Result};

/// How to decode the file contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadMode {
    /// Return the raw bytes.
    Binary,
    /// Decode the bytes as UTF-8 text.
    Text,
}

/// Contents of a file read via [`read_file`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileContents {
    Binary(Vec<u8>),
    Text(String),
}

impl FileContents {
    /// The contents as raw bytes, regardless of mode.
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            FileContents::Binary(bytes) => bytes,
            FileContents::Text(text) => text.as_bytes(),
        }
    }

    /// Consumes the contents, returning text when read in text mode.
    pub fn into_text(self) -> Option<String> {
        match self {
            FileContents::Text(text) => Some(text),
            FileContents::Binary(_) => None,
        }
    }

    /// Consumes the contents, returning the underlying byte buffer.
    pub fn into_bytes(self) -> Vec<u8> {
        match self {
            FileContents::Binary(bytes) => bytes,
            FileContents::Text(text) => text.into_bytes(),
        }
    }
}

/// Read a whole file, decoding per `mode`.
///
/// Read failures carry the offending path; text-mode reads of non-UTF-8
/// data fail rather than lossily converting.
#[tracing::instrument(skip(path), fields(path = %path.display()))]
pub fn read_file(path: &Path, mode: ReadMode) -> Result<FileContents> {
    let file = File::open(path).map_err(|source| DescriptorError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;

    let mut data = Vec::new();
    BufReader::new(file)
        .read_to_end(&mut data)
        .map_err(|source| DescriptorError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;

    match mode {
        ReadMode::Binary => Ok(FileContents::Binary(data)),
        ReadMode::Text => match String::from_utf8(data) {
            Ok(text) => Ok(FileContents::Text(text)),
            Err(_) => Err(DescriptorError::NotUtf8 {
                path: path.to_path_buf(),
            }),
        },
    }
}
