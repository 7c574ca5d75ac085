//! Package command: assemble and write the signature descriptor.

use anyhow::{Context, Result};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use sigpack_core::{
    DescriptorDate, DigestAlgorithm, ReadMode, artifact_file_name, extension_of, file_stem_of,
    package_signature, read_file,
};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::json::PackageJson;
use crate::util::format_bytes;

fn spinner(msg: String) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg}")
            .unwrap(),
    );
    pb.enable_steady_tick(Duration::from_millis(80));
    pb.set_message(msg);
    pb
}

/// Filename recorded in the descriptor: stem plus extension, no directories.
fn signed_file_name(input: &Path) -> String {
    let path = input.to_string_lossy();
    let stem = file_stem_of(&path);
    let ext = extension_of(&path);
    if ext.is_empty() {
        stem.to_string()
    } else {
        format!("{stem}.{ext}")
    }
}

fn artifact_path(input: &Path, output_dir: Option<PathBuf>, filename: &str) -> PathBuf {
    let dir = match output_dir {
        Some(dir) => dir,
        None => input
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from(".")),
    };
    dir.join(artifact_file_name(filename))
}

pub fn package_file(
    input: PathBuf,
    signature: PathBuf,
    aggregate_key: PathBuf,
    output_dir: Option<PathBuf>,
    digest_algorithm: String,
    json: bool,
) -> Result<()> {
    eprintln!(
        "{}",
        style("==> Packaging signature descriptor").cyan().bold()
    );

    let algorithm = DigestAlgorithm::from_name(&digest_algorithm)?;

    let pb = spinner(format!(
        "Reading signed file {}",
        style(input.display()).cyan()
    ));
    let file_bytes = read_file(&input, ReadMode::Binary)?.into_bytes();
    pb.finish_with_message(format!(
        "[OK] Read signed file ({})",
        style(format_bytes(file_bytes.len())).cyan()
    ));

    let pb = spinner(format!(
        "Reading signature {}",
        style(signature.display()).cyan()
    ));
    let signature_bytes = read_file(&signature, ReadMode::Binary)?.into_bytes();
    let aggregate_key_bytes = read_file(&aggregate_key, ReadMode::Binary)?.into_bytes();
    pb.finish_with_message(format!(
        "[OK] Read signature ({}) and aggregate key ({})",
        style(format_bytes(signature_bytes.len())).cyan(),
        style(format_bytes(aggregate_key_bytes.len())).cyan()
    ));

    let filename = signed_file_name(&input);
    let descriptor = package_signature(
        &file_bytes,
        &filename,
        &signature_bytes,
        &aggregate_key_bytes,
        algorithm,
        DescriptorDate::today(),
    );

    let output_path = artifact_path(&input, output_dir, &filename);
    let pb = spinner(format!(
        "Writing descriptor to {}",
        style(output_path.display()).cyan()
    ));
    let mut out = BufWriter::new(File::create(&output_path).with_context(|| {
        format!(
            "Failed to create descriptor file: {}",
            output_path.display()
        )
    })?);
    writeln!(out, "{}", descriptor.to_json()?)?;
    out.flush()?;
    pb.finish_and_clear();

    eprintln!(
        "\n{} {}",
        style("[SUCCESS]").green().bold(),
        style("Descriptor written").cyan()
    );

    if json {
        let payload = PackageJson {
            status: "ok",
            command: "package",
            input: input.display().to_string(),
            output: output_path.display().to_string(),
            filename: descriptor.filename.clone(),
            date: descriptor.date.clone(),
            digest_algorithm: algorithm.name(),
        };
        println!("{}", serde_json::to_string(&payload)?);
    } else {
        println!("{}", output_path.display());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sigpack_core::SignatureDescriptor;

    #[test]
    fn descriptor_filename_keeps_stem_and_extension() {
        assert_eq!(
            signed_file_name(Path::new("/tmp/report.v2.txt")),
            "report.v2.txt"
        );
        assert_eq!(signed_file_name(Path::new("README")), "README");
    }

    #[test]
    fn artifact_lands_next_to_input_by_default() {
        let p = artifact_path(Path::new("/data/report.txt"), None, "report.txt");
        assert_eq!(p, PathBuf::from("/data/signature_of_report.txt.json"));
    }

    #[test]
    fn artifact_honors_output_dir() {
        let p = artifact_path(
            Path::new("/data/report.txt"),
            Some(PathBuf::from("/out")),
            "report.txt",
        );
        assert_eq!(p, PathBuf::from("/out/signature_of_report.txt.json"));
    }

    #[test]
    fn packages_a_parseable_descriptor() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("report.v2.txt");
        std::fs::write(&input, b"file under signature").unwrap();
        let sig = dir.path().join("detached.sig");
        std::fs::write(&sig, [9u8; 64]).unwrap();
        let key = dir.path().join("aggregate.key");
        std::fs::write(&key, [7u8; 32]).unwrap();

        package_file(input, sig, key, None, "sha256".to_string(), false).unwrap();

        let artifact = dir.path().join("signature_of_report.v2.txt.json");
        let text = std::fs::read_to_string(&artifact).unwrap();
        let descriptor = SignatureDescriptor::from_json(&text).unwrap();
        assert_eq!(descriptor.filename, "report.v2.txt");
        assert_eq!(descriptor.signature_bytes().unwrap(), vec![9u8; 64]);
        assert_eq!(descriptor.aggregate_key_bytes().unwrap(), vec![7u8; 32]);
        assert_eq!(descriptor.hash_bytes().unwrap().len(), 32);
    }

    #[test]
    fn unknown_algorithm_fails_before_reading() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.txt");
        let err = package_file(
            missing.clone(),
            missing.clone(),
            missing,
            None,
            "md5".to_string(),
            false,
        )
        .unwrap_err();
        assert!(err.to_string().contains("unsupported digest algorithm"));
    }
}
