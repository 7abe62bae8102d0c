//! Prepare command
//!
//! Usage: phonespec prepare <INPUT> [--valid-out <FILE>] [--missing-out <FILE>]

use clap::Args;
use phonespec_store::prepare_dataset;
use std::path::PathBuf;

use crate::context::{init, print_json, CliResult, GlobalArgs};

const MISSING_FILE_NAME: &str = "phones_missing.json";

#[derive(Debug, Args)]
pub struct PrepareArgs {
    /// Raw scraped export
    pub input: PathBuf,

    /// Devices with specifications (default: the configured dataset path)
    #[arg(long)]
    pub valid_out: Option<PathBuf>,

    /// Devices without specifications (default: next to the valid output)
    #[arg(long)]
    pub missing_out: Option<PathBuf>,
}

/// Execute prepare command
pub fn execute(global: &GlobalArgs, args: PrepareArgs) -> CliResult {
    let config = init(global)?;
    let valid_out = args.valid_out.unwrap_or(config.dataset_path);
    let missing_out = args
        .missing_out
        .unwrap_or_else(|| valid_out.with_file_name(MISSING_FILE_NAME));

    if let Some(parent) = valid_out.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    let report = prepare_dataset(&args.input, &valid_out, &missing_out)?;

    if global.json {
        return print_json(&report);
    }
    println!(
        "Cleaned {} ({} unusual terminators)",
        args.input.display(),
        report.unusual_terminators
    );
    println!(
        "✓ {} devices in {} brands -> {}",
        report.valid_devices,
        report.valid_brands,
        valid_out.display()
    );
    println!(
        "✓ {} devices in {} brands -> {}",
        report.missing_devices,
        report.missing_brands,
        missing_out.display()
    );
    Ok(())
}
