//! Formatter configuration
//!
//! Optional `.goimpfmt.toml` in the project directory:
//!
//! ```toml
//! [format]
//! local_package = "github.com/Vivino/go-api"
//! extension = "go"
//! skip_dirs = ["vendor", ".git"]
//! ```
//!
//! All keys are optional. Command line values win over file values.

use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::error::{Error, Result};
use crate::logging::log_debug;

/// Config file name looked up in the project directory
pub const CONFIG_FILE_NAME: &str = ".goimpfmt.toml";

/// On-disk layout of `.goimpfmt.toml`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FileConfig {
    #[serde(default)]
    pub format: FormatSection,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FormatSection {
    /// Root package of the project; imports below it are grouped as local
    #[serde(default)]
    pub local_package: String,
    /// File extension to rewrite, without the dot
    #[serde(default = "default_extension")]
    pub extension: String,
    /// Directory names never descended into
    #[serde(default = "default_skip_dirs")]
    pub skip_dirs: Vec<String>,
}

fn default_extension() -> String {
    "go".to_string()
}
fn default_skip_dirs() -> Vec<String> {
    vec!["vendor".to_string(), ".git".to_string()]
}

impl Default for FormatSection {
    fn default() -> Self {
        Self {
            local_package: String::new(),
            extension: default_extension(),
            skip_dirs: default_skip_dirs(),
        }
    }
}

/// Resolved settings for one formatter run
#[derive(Debug, Clone)]
pub struct FormatConfig {
    pub local_package: String,
    pub extension: String,
    pub skip_dirs: Vec<String>,
    /// Report what would change without writing
    pub dry_run: bool,
}

impl FormatConfig {
    pub fn new(local_package: impl Into<String>) -> Self {
        Self {
            local_package: local_package.into(),
            ..Self::from(FormatSection::default())
        }
    }

    /// Override the file's package when one is given on the command line
    pub fn with_local_package(mut self, local_package: Option<String>) -> Self {
        if let Some(package) = local_package.filter(|p| !p.is_empty()) {
            self.local_package = package;
        }
        self
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}

impl From<FormatSection> for FormatConfig {
    fn from(section: FormatSection) -> Self {
        Self {
            local_package: section.local_package,
            extension: section.extension.trim_start_matches('.').to_string(),
            skip_dirs: section.skip_dirs,
            dry_run: false,
        }
    }
}

/// Load `.goimpfmt.toml` from a project directory
///
/// Returns defaults if the file doesn't exist.
pub fn load(project_dir: &Path) -> Result<FileConfig> {
    let path = project_dir.join(CONFIG_FILE_NAME);
    if !path.exists() {
        log_debug("config", &format!("no config at {}", path.display()));
        return Ok(FileConfig::default());
    }
    load_from_path(&path)
}

/// Load a config file from an explicit path
///
/// The file must exist.
pub fn load_from_path(path: &Path) -> Result<FileConfig> {
    let content = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    let config: FileConfig = toml::from_str(&content)
        .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))?;

    log_debug("config", &format!("loaded {}", path.display()));
    Ok(config)
}

/// Validate settings before a run
pub fn validate(config: &FormatConfig) -> Result<()> {
    if config.local_package.trim().is_empty() {
        return Err(Error::Config(
            "local package is empty; pass it on the command line or set format.local_package"
                .to_string(),
        ));
    }
    if config.extension.is_empty() {
        return Err(Error::Config("format.extension must not be empty".to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let temp = TempDir::new().unwrap();
        let config = load(temp.path()).unwrap();
        assert_eq!(config.format.extension, "go");
        assert_eq!(config.format.skip_dirs, vec!["vendor", ".git"]);
        assert!(config.format.local_package.is_empty());
    }

    #[test]
    fn test_explicit_missing_file_is_error() {
        let temp = TempDir::new().unwrap();
        let err = load_from_path(&temp.path().join("typo.toml")).unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
        assert!(err.to_string().contains("typo.toml"));
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join(CONFIG_FILE_NAME),
            "[format]\nlocal_package = \"github.com/acme/api\"\n",
        )
        .unwrap();

        let config = load(temp.path()).unwrap();
        assert_eq!(config.format.local_package, "github.com/acme/api");
        assert_eq!(config.format.extension, "go");
    }

    #[test]
    fn test_invalid_file_is_config_error() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(CONFIG_FILE_NAME), "[format\n").unwrap();

        assert!(matches!(load(temp.path()), Err(Error::Config(_))));
    }

    #[test]
    fn test_cli_package_overrides_file() {
        let section = FormatSection {
            local_package: "github.com/from/file".to_string(),
            ..Default::default()
        };
        let config = FormatConfig::from(section)
            .with_local_package(Some("github.com/from/cli".to_string()));
        assert_eq!(config.local_package, "github.com/from/cli");

        let config = FormatConfig::new("github.com/from/file").with_local_package(None);
        assert_eq!(config.local_package, "github.com/from/file");
    }

    #[test]
    fn test_extension_dot_is_stripped() {
        let section = FormatSection {
            extension: ".go".to_string(),
            ..Default::default()
        };
        assert_eq!(FormatConfig::from(section).extension, "go");
    }

    #[test]
    fn test_validate_rejects_empty_package() {
        assert!(validate(&FormatConfig::new("")).is_err());
        assert!(validate(&FormatConfig::new("github.com/acme/api")).is_ok());
    }
}
