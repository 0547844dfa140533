//! Chrome Replay
//!
//! Drives the window chrome through a scripted sequence of pointer and
//! window events against the simulated host and prints the render snapshot
//! after every step.
//!
//! Usage: `chrome-replay [--final] <script.json>`

mod script;

use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use script::{ReplayError, Script};

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let mut final_only = false;
    let mut path = None;
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--final" => final_only = true,
            _ => path = Some(PathBuf::from(arg)),
        }
    }

    let path = match path {
        Some(path) => path,
        None => {
            eprintln!("usage: chrome-replay [--final] <script.json>");
            return ExitCode::from(2);
        }
    };

    match run(&path, final_only) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(path = %path.display(), "replay failed: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(path: &Path, final_only: bool) -> Result<(), ReplayError> {
    let script = Script::load(path)?;
    info!(path = %path.display(), steps = script.steps.len(), "replaying");

    let reports = script.run()?;
    if final_only {
        if let Some(report) = reports.last() {
            println!("{}", serde_json::to_string_pretty(&report.view)?);
        }
    } else {
        for report in &reports {
            println!("{}", serde_json::to_string(report)?);
        }
    }

    info!(steps = reports.len(), "replay finished");
    Ok(())
}
