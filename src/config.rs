use anyhow::{bail, Result};
use std::path::{Path, PathBuf};

/// Where Xcode keeps the SPM checkouts, relative to BUILD_DIR.
const CHECKOUTS_SUFFIX: &str = "../../SourcePackages/checkouts";

/// Name of the manifest SPM writes next to the checkouts directory.
const WORKSPACE_STATE_FILE: &str = "workspace-state.json";

/// Resolved run configuration, constructed once at startup and passed into
/// the pipeline functions.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory containing one subdirectory per package checkout.
    pub checkouts_dir: PathBuf,
    /// Directory acknowledgements.json is written into.
    pub output_dir: PathBuf,
}

impl Config {
    /// Resolve the checkouts directory from the BUILD_DIR convention or an
    /// explicit --spm path. BUILD_DIR takes precedence when set, so the tool
    /// works without flags as an Xcode build phase.
    pub fn resolve(
        spm_path: Option<PathBuf>,
        output_path: Option<PathBuf>,
        build_dir: Option<String>,
    ) -> Result<Self> {
        let checkouts_dir = match build_dir {
            Some(build_dir) => Path::new(&build_dir).join(CHECKOUTS_SUFFIX),
            None => match spm_path {
                Some(path) => path,
                None => bail!("please provide the SPM checkouts path with -s or --spm"),
            },
        };

        Ok(Self {
            checkouts_dir,
            output_dir: output_path.unwrap_or_else(|| PathBuf::from(".")),
        })
    }

    /// Resolve using the process environment. An empty BUILD_DIR counts as
    /// unset.
    pub fn from_env(spm_path: Option<PathBuf>, output_path: Option<PathBuf>) -> Result<Self> {
        let build_dir = std::env::var("BUILD_DIR").ok().filter(|v| !v.is_empty());
        Self::resolve(spm_path, output_path, build_dir)
    }

    /// Expected location of the workspace-state manifest, adjacent to the
    /// checkouts directory.
    pub fn workspace_state_path(&self) -> PathBuf {
        self.checkouts_dir.join("..").join(WORKSPACE_STATE_FILE)
    }
}
