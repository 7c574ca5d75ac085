//! JSON output formats.

use serde::Serialize;

#[derive(Serialize)]
pub struct PackageJson<'a> {
    pub status: &'a str,
    pub command: &'a str,
    pub input: String,
    pub output: String,
    pub filename: String,
    pub date: String,
    pub digest_algorithm: &'a str,
}

#[derive(Serialize)]
pub struct InspectJson<'a> {
    pub status: &'a str,
    pub command: &'a str,
    pub input: String,
    pub filename: String,
    pub date: String,
    pub signature_len: usize,
    pub aggregate_key_len: usize,
    pub hash_len: usize,
}

#[derive(Serialize)]
pub struct ErrorJson<'a> {
    pub status: &'a str,
    pub error: String,
    pub causes: Vec<String>,
}
