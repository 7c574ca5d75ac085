use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "sigpack",
    about = "Package detached file signatures into JSON descriptors",
    long_about = "Package an externally produced detached signature and aggregate key, \
together with a digest of the signed file, into a signature descriptor JSON artifact."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output machine-readable JSON to stdout
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable verbose logging (sets RUST_LOG=debug if not already set)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Package a detached signature into a signature descriptor
    Package {
        /// Path to the signed file
        input: PathBuf,

        /// Path to the detached signature bytes
        #[arg(short, long)]
        signature: PathBuf,

        /// Path to the aggregate public key bytes
        #[arg(short, long)]
        aggregate_key: PathBuf,

        /// Directory for the descriptor (default: alongside the input)
        #[arg(short, long)]
        output_dir: Option<PathBuf>,

        /// Digest algorithm for the hash field
        #[arg(long, default_value = "sha256")]
        digest_algorithm: String,
    },

    /// Inspect a signature descriptor file
    Inspect {
        /// Path to the descriptor JSON file
        input: PathBuf,
    },
}
