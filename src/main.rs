use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use std::time::Instant;

// Import from our library
use spm_acknowledgements::config::Config;
use spm_acknowledgements::output::write_acknowledgements;
use spm_acknowledgements::scanner::scan_checkouts;
use spm_acknowledgements::workspace_state::{self, WorkspaceStateParser};

#[derive(Parser)]
#[command(name = "spm-acknowledgements")]
#[command(about = "Generate an acknowledgements file from SPM package checkouts")]
#[command(version)]
struct Cli {
    /// Path to the SPM checkouts directory (not needed when BUILD_DIR is set)
    #[arg(short = 's', long = "spm")]
    spm: Option<PathBuf>,

    /// Directory to write acknowledgements.json into (default: current directory)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    let started = Instant::now();
    let cli = Cli::parse();

    let config = Config::from_env(cli.spm, cli.output)?;

    let mut acknowledgements = scan_checkouts(&config.checkouts_dir)?;

    // Manifest correlation is an optional stage: skipped when no
    // workspace-state.json sits next to the checkouts directory.
    let manifest_path = config.workspace_state_path();
    if manifest_path.exists() {
        let state = WorkspaceStateParser::parse(&manifest_path)?;
        workspace_state::apply_urls(&mut acknowledgements, &state);
    }

    write_acknowledgements(&acknowledgements, &config.output_dir)?;

    println!(
        "Created acknowledgements file in {:?} ✨",
        started.elapsed()
    );

    Ok(())
}
