use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::scanner::Acknowledgement;

pub const OUTPUT_FILE_NAME: &str = "acknowledgements.json";

/// Serialize the acknowledgements with 2-space indentation and write them to
/// `<output_dir>/acknowledgements.json`, overwriting any existing file.
/// Returns the written path.
pub fn write_acknowledgements(
    acknowledgements: &[Acknowledgement],
    output_dir: &Path,
) -> Result<PathBuf> {
    let json = serde_json::to_string_pretty(acknowledgements)?;

    let output_path = output_dir.join(OUTPUT_FILE_NAME);
    fs::write(&output_path, json)
        .with_context(|| format!("Failed to write {}", output_path.display()))?;

    Ok(output_path)
}
