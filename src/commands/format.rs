use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use required::config::{self, FormatConfig};
use required::imports::{FormatReport, Formatter};

pub fn execute(
    directory: &Path,
    package: Option<String>,
    config_path: Option<PathBuf>,
    dry_run: bool,
    json: bool,
) -> Result<()> {
    let file_config = match &config_path {
        Some(path) => config::load_from_path(path),
        None => config::load(directory),
    }
    .context("Failed to load formatter configuration")?;

    let format_config = FormatConfig::from(file_config.format)
        .with_local_package(package)
        .with_dry_run(dry_run);

    let formatter = Formatter::new(format_config).context("Invalid formatter settings")?;
    let report = formatter
        .format_dir(directory)
        .with_context(|| format!("Failed to format {}", directory.display()))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_summary(&report, dry_run);
        println!("Done");
    }

    if report.has_failures() {
        anyhow::bail!("{} file(s) could not be processed", report.failed.len());
    }
    Ok(())
}

fn print_summary(report: &FormatReport, dry_run: bool) {
    let verb = if dry_run { "Would rewrite" } else { "Rewrote" };
    for path in &report.rewritten {
        println!("✓ {} {}", verb, path.display());
    }

    println!(
        "Scanned {} file(s): {} rewritten, {} unchanged, {} without imports",
        report.scanned,
        report.rewritten.len(),
        report.unchanged,
        report.skipped
    );
}
