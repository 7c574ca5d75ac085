//! Inspect command: parse and report a signature descriptor.

use anyhow::{Context, Result};
use console::style;
use sigpack_core::{ReadMode, SignatureDescriptor, read_file};
use std::path::PathBuf;

use crate::json::InspectJson;
use crate::util::format_bytes;

pub fn inspect_descriptor(input: PathBuf, json: bool) -> Result<()> {
    eprintln!(
        "{}",
        style("==> Inspecting signature descriptor").cyan().bold()
    );

    let text = read_file(&input, ReadMode::Text)?
        .into_text()
        .context("descriptor read did not produce text")?;

    let descriptor = SignatureDescriptor::from_json(&text)
        .with_context(|| format!("Failed to parse descriptor: {}", input.display()))?;

    let signature = descriptor.signature_bytes()?;
    let aggregate_key = descriptor.aggregate_key_bytes()?;
    let hash = descriptor.hash_bytes()?;

    eprintln!("    Filename: {}", style(&descriptor.filename).cyan());
    eprintln!("    Date: {}", style(&descriptor.date).cyan());
    eprintln!(
        "    Signature: {}",
        style(format_bytes(signature.len())).cyan()
    );
    eprintln!(
        "    Aggregate key: {}",
        style(format_bytes(aggregate_key.len())).cyan()
    );
    eprintln!("    Hash: {}", style(format_bytes(hash.len())).cyan());

    eprintln!(
        "\n{} {}",
        style("[OK]").green().bold(),
        style("Descriptor is well-formed").green()
    );

    if json {
        let payload = InspectJson {
            status: "ok",
            command: "inspect",
            input: input.display().to_string(),
            filename: descriptor.filename,
            date: descriptor.date,
            signature_len: signature.len(),
            aggregate_key_len: aggregate_key.len(),
            hash_len: hash.len(),
        };
        println!("{}", serde_json::to_string(&payload)?);
    } else {
        // Only print "OK" when stdout is piped (for pipeline composition)
        use std::io::IsTerminal;
        if !std::io::stdout().is_terminal() {
            println!("OK");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sigpack_core::{DescriptorDate, DigestAlgorithm, package_signature};

    #[test]
    fn inspects_a_packaged_descriptor() {
        let descriptor = package_signature(
            b"payload",
            "payload.bin",
            &[1u8; 64],
            &[2u8; 32],
            DigestAlgorithm::Sha256,
            DescriptorDate {
                day: 27,
                month: 8,
                year: 2026,
            },
        );

        let dir = tempfile::tempdir().unwrap();
        let artifact = dir.path().join("signature_of_payload.bin.json");
        std::fs::write(&artifact, descriptor.to_json().unwrap()).unwrap();

        inspect_descriptor(artifact, false).unwrap();
    }

    #[test]
    fn rejects_malformed_descriptor_json() {
        let dir = tempfile::tempdir().unwrap();
        let artifact = dir.path().join("broken.json");
        std::fs::write(&artifact, "{\"filename\": ").unwrap();

        let err = inspect_descriptor(artifact, false).unwrap_err();
        assert!(err.to_string().contains("Failed to parse descriptor"));
    }

    #[test]
    fn missing_descriptor_is_a_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = inspect_descriptor(dir.path().join("absent.json"), false).unwrap_err();
        assert!(err.to_string().contains("failed to read"));
    }
}
