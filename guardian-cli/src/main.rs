//! `guardian <input.csv>`: redact every record and write `redacted_output.csv`
//! to the working directory.

use std::path::Path;
use std::process::ExitCode;

use anyhow::{anyhow, Context};
use guardian_core::config::GuardianConfig;
use guardian_core::constants;
use guardian_core::errors::GuardianErrorCode;
use guardian_io::RunSummary;

const USAGE: &str = "Usage: guardian <input.csv>";

/// The single positional argument, or `None` on any other count.
fn input_arg(args: &[String]) -> Option<&str> {
    match args {
        [input] => Some(input.as_str()),
        _ => None,
    }
}

fn run(input: &Path) -> anyhow::Result<RunSummary> {
    let config = GuardianConfig::load_or_default(Path::new(constants::CONFIG_FILE_NAME))
        .with_context(|| format!("loading {}", constants::CONFIG_FILE_NAME))?;
    guardian_core::tracing::init_tracing(config.logging.effective_filter());
    tracing::debug!(version = constants::VERSION, ?config, "configuration loaded");

    guardian_io::run_batch(input, Path::new(constants::OUTPUT_FILE_NAME), &config)
        .map_err(|e| anyhow!(e.report_string()))
}

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some(input) = input_arg(&args) else {
        eprintln!("{USAGE}");
        return ExitCode::FAILURE;
    };

    match run(Path::new(input)) {
        Ok(_) => {
            println!("Done. Wrote: {}", constants::OUTPUT_FILE_NAME);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
