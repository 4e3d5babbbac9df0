use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

use super::matcher::Matcher;
use super::rewrite_source;
use crate::config::FormatConfig;
use crate::error::{Error, Result};
use crate::logging::log_debug;

/// What happened to a single file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOutcome {
    /// Imports were regrouped and the file was written (or would be, in dry-run)
    Rewritten,
    /// Imports were already grouped
    Unchanged,
    /// No import declaration, or an unterminated one
    Skipped,
}

/// Summary of a directory run
#[derive(Debug, Default, Serialize)]
pub struct FormatReport {
    pub scanned: usize,
    pub rewritten: Vec<PathBuf>,
    pub unchanged: usize,
    pub skipped: usize,
    pub failed: Vec<(PathBuf, String)>,
}

impl FormatReport {
    fn record(&mut self, path: &Path, outcome: FileOutcome) {
        match outcome {
            FileOutcome::Rewritten => self.rewritten.push(path.to_path_buf()),
            FileOutcome::Unchanged => self.unchanged += 1,
            FileOutcome::Skipped => self.skipped += 1,
        }
    }

    pub fn has_failures(&self) -> bool {
        !self.failed.is_empty()
    }
}

pub struct Formatter {
    matcher: Matcher,
    config: FormatConfig,
}

impl Formatter {
    pub fn new(config: FormatConfig) -> Result<Self> {
        crate::config::validate(&config)?;
        Ok(Self {
            matcher: Matcher::new(&config.local_package)?,
            config,
        })
    }

    /// Rewrite every matching file under `root`
    ///
    /// Per-file failures are collected in the report; only a missing root
    /// is an error.
    pub fn format_dir(&self, root: &Path) -> Result<FormatReport> {
        if !root.is_dir() {
            return Err(Error::io(
                root,
                std::io::Error::new(std::io::ErrorKind::NotFound, "not a directory"),
            ));
        }

        let mut report = FormatReport::default();

        for entry in WalkDir::new(root)
            .follow_links(false)
            .into_iter()
            .filter_entry(|e| !self.is_skipped_dir(e))
        {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    let path = e.path().map(Path::to_path_buf).unwrap_or_else(|| root.to_path_buf());
                    eprintln!("⚠️  {}: {}", path.display(), e);
                    report.failed.push((path, e.to_string()));
                    continue;
                }
            };

            if !entry.file_type().is_file() || !self.has_extension(entry.path()) {
                continue;
            }

            report.scanned += 1;
            match self.format_file(entry.path()) {
                Ok(outcome) => report.record(entry.path(), outcome),
                Err(e) => {
                    eprintln!("⚠️  Error processing {}: {}", entry.path().display(), e);
                    report.failed.push((entry.path().to_path_buf(), e.to_string()));
                }
            }
        }

        log_debug(
            "imports::formatter",
            &format!(
                "scanned={} rewritten={} unchanged={} skipped={} failed={}",
                report.scanned,
                report.rewritten.len(),
                report.unchanged,
                report.skipped,
                report.failed.len()
            ),
        );
        Ok(report)
    }

    /// Rewrite a single file in place
    pub fn format_file(&self, path: &Path) -> Result<FileOutcome> {
        let source = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;

        let Some(output) = rewrite_source(&source, &self.matcher) else {
            log_debug("imports::formatter", &format!("no imports: {}", path.display()));
            return Ok(FileOutcome::Skipped);
        };

        if output == source {
            return Ok(FileOutcome::Unchanged);
        }

        if self.config.dry_run {
            log_debug("imports::formatter", &format!("would rewrite {}", path.display()));
        } else {
            fs::write(path, output).map_err(|e| Error::io(path, e))?;
            log_debug("imports::formatter", &format!("rewrote {}", path.display()));
        }
        Ok(FileOutcome::Rewritten)
    }

    fn is_skipped_dir(&self, entry: &DirEntry) -> bool {
        if entry.depth() == 0 || !entry.file_type().is_dir() {
            return false;
        }
        entry
            .file_name()
            .to_str()
            .map(|name| self.config.skip_dirs.iter().any(|skip| skip == name))
            .unwrap_or(false)
    }

    fn has_extension(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext == self.config.extension)
            .unwrap_or(false)
    }
}
