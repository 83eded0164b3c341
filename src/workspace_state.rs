use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

use crate::scanner::Acknowledgement;

#[derive(Debug, Clone, Deserialize)]
pub struct WorkspaceState {
    pub object: WorkspaceObject,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WorkspaceObject {
    pub dependencies: Vec<WorkspaceDependency>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WorkspaceDependency {
    #[serde(rename = "packageRef")]
    pub package_ref: PackageRef,
    pub state: Option<DependencyState>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PackageRef {
    pub name: String,
    pub path: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DependencyState {
    #[serde(rename = "checkoutState")]
    pub checkout_state: Option<CheckoutState>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CheckoutState {
    pub version: Option<String>,
}

pub struct WorkspaceStateParser;

impl WorkspaceStateParser {
    /// Parse a workspace-state.json manifest as written by SPM.
    pub fn parse<P: AsRef<Path>>(path: P) -> Result<WorkspaceState> {
        let path_ref = path.as_ref();

        if !path_ref.exists() {
            return Err(anyhow::anyhow!(
                "workspace-state manifest not found: {}",
                path_ref.display()
            ));
        }

        let content = std::fs::read_to_string(path_ref)
            .with_context(|| format!("Failed to read manifest: {}", path_ref.display()))?;

        let state: WorkspaceState = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse manifest as JSON: {}", path_ref.display()))?;

        if state.object.dependencies.is_empty() {
            eprintln!(
                "Warning: manifest lists no dependencies: {}",
                path_ref.display()
            );
        }

        Ok(state)
    }
}

/// Merge manifest source locations into the scanned acknowledgements by
/// exact package name. At most one manifest entry is applied per package;
/// descriptors matching no package are ignored.
pub fn apply_urls(acknowledgements: &mut [Acknowledgement], state: &WorkspaceState) {
    for dependency in &state.object.dependencies {
        if let Some(acknowledgement) = acknowledgements
            .iter_mut()
            .find(|a| a.package_name == dependency.package_ref.name)
        {
            if acknowledgement.url.is_empty() {
                acknowledgement.url = dependency.package_ref.path.clone();
            }
        }
    }
}
