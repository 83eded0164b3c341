use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Exact file name looked for in each package checkout. No extension
/// matching, case-sensitive.
const LICENSE_FILE_NAME: &str = "LICENSE";

/// One output entry summarizing a dependency's name, license text, and
/// source URL. Empty fields are omitted when serialized.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Acknowledgement {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub package_name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub content: String,
    /// Reserved, not populated yet.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub version: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub url: String,
    /// Reserved, not populated yet.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub author: String,
}

/// Scan the checkouts directory and build one acknowledgement per package
/// subdirectory, carrying its LICENSE text when one exists. Non-directory
/// entries at the top level are ignored.
pub fn scan_checkouts(checkouts_dir: &Path) -> Result<Vec<Acknowledgement>> {
    let entries = fs::read_dir(checkouts_dir).with_context(|| {
        format!(
            "Failed to read checkouts directory {}",
            checkouts_dir.display()
        )
    })?;

    let mut acknowledgements = Vec::new();

    for entry in entries {
        let entry = entry?;
        if !entry.file_type()?.is_dir() {
            continue;
        }

        let package_name = entry.file_name().to_string_lossy().into_owned();
        let content = read_license(&entry.path())?;

        acknowledgements.push(Acknowledgement {
            package_name,
            content,
            ..Default::default()
        });
    }

    // Directory listing order is platform dependent
    acknowledgements.sort_by(|a, b| a.package_name.cmp(&b.package_name));
    Ok(acknowledgements)
}

/// Find the package's LICENSE file and read it whole. Returns an empty
/// string when the package ships no such file.
fn read_license(package_dir: &Path) -> Result<String> {
    let entries = fs::read_dir(package_dir).with_context(|| {
        format!(
            "Failed to read package directory {}",
            package_dir.display()
        )
    })?;

    for entry in entries {
        let entry = entry?;
        if entry.file_name() == LICENSE_FILE_NAME {
            let license_path = entry.path();
            return fs::read_to_string(&license_path)
                .with_context(|| format!("Failed to read {}", license_path.display()));
        }
    }

    Ok(String::new())
}
