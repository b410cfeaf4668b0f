use crate::discovery::FileEntry;
use crate::fs::FileReader;
use anyhow::{Context, Result};
use log::{debug, info, warn};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

pub const DEFAULT_OUTPUT_NAME: &str = "output.txt";

/// Output file name with a `.txt` suffix, falling back to `output.txt`.
pub fn output_file_name(requested: Option<&str>) -> String {
    match requested.map(str::trim).filter(|n| !n.is_empty()) {
        None => DEFAULT_OUTPUT_NAME.to_string(),
        Some(name) if name.ends_with(".txt") => name.to_string(),
        Some(name) => format!("{}.txt", name),
    }
}

/// One record of the artifact. Contents are copied verbatim, with no escaping.
pub fn format_record(path: &str, content: &str) -> String {
    let mut s = String::with_capacity(path.len() + content.len() + 10);
    s.push_str("// ");
    s.push_str(path);
    s.push_str(" :\n\n");
    s.push_str(content);
    s.push_str("\n\n");
    s
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedFile {
    pub path: String,
    pub reason: String,
}

#[derive(Debug, Default)]
pub struct Artifact {
    pub content: String,
    pub files: usize,
    pub lines: usize,
    pub skipped: Vec<SkippedFile>,
}

/// Concatenates the selected entries in selection order. Indices past the end
/// are ignored; unreadable files are recorded in `skipped` and left out.
pub fn build_artifact(entries: &[FileEntry], indices: &[usize], reader: &dyn FileReader) -> Artifact {
    let mut artifact = Artifact::default();
    for &index in indices {
        let Some(entry) = entries.get(index) else {
            debug!("Ignoring out-of-range index {}", index);
            continue;
        };
        match reader.read_to_string(entry.path()) {
            Ok(content) => {
                artifact.lines += content.lines().count();
                artifact.files += 1;
                artifact.content.push_str(&format_record(entry.display_path(), &content));
            }
            Err(err) => {
                warn!("Skipping {}: {:#}", entry.display_path(), err);
                artifact.skipped.push(SkippedFile {
                    path: entry.display_path().to_string(),
                    reason: format!("{:#}", err),
                });
            }
        }
    }
    artifact
}

pub fn write_artifact(path: &Path, artifact: &Artifact) -> Result<()> {
    let f = File::create(path).with_context(|| format!("Failed to create output file: {}", path.display()))?;
    let mut w = BufWriter::new(f);
    w.write_all(artifact.content.as_bytes()).context("Failed to write to output")?;
    w.flush().context("Failed to flush final output")?;
    info!("Wrote {} bytes to {}", artifact.content.len(), path.display());
    Ok(())
}

#[cfg(test)]
#[path = "emission_tests.rs"]
mod tests;
