//! Locating and bootstrapping the `brew` executable.

use crate::error::{Error, Result};
use regex::Regex;
use std::process::{Command, Stdio};
use std::sync::LazyLock;

/// URL of the official Homebrew install script.
const INSTALL_SCRIPT_URL: &str =
    "https://raw.githubusercontent.com/Homebrew/install/HEAD/install.sh";

static VERSION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Homebrew\s+([\d.]+)").expect("valid regex"));

/// A located Homebrew installation.
pub struct Brew {
    path: String,
}

impl Brew {
    /// Locate Homebrew, returning an error if it is not installed.
    pub fn locate() -> Result<Self> {
        find_brew().map(|path| Self { path })
    }

    /// Locate Homebrew, running the official install script when missing.
    ///
    /// The install script is interactive; its stdio is inherited so the user
    /// can answer prompts directly.
    pub fn ensure() -> Result<Self> {
        match Self::locate() {
            Ok(brew) => Ok(brew),
            Err(_) => {
                log::info!("Homebrew not found, running the official install script");
                install_homebrew()?;
                Self::locate()
            }
        }
    }

    /// Use a specific executable path. Intended for tests and fakes.
    pub fn at(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    /// Path to the brew executable.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// A [`Command`] prepared to run this brew executable.
    pub fn command(&self) -> Command {
        Command::new(&self.path)
    }

    /// Check that the executable answers a version query.
    pub fn is_available(&self) -> bool {
        self.command()
            .arg("--version")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map(|s| s.success())
            .unwrap_or(false)
    }

    /// The installed Homebrew version, if it can be determined.
    pub fn version(&self) -> Option<String> {
        let output = self.command().arg("--version").output().ok()?;
        if !output.status.success() {
            return None;
        }
        parse_version(&String::from_utf8_lossy(&output.stdout))
    }
}

/// Find the brew executable path.
fn find_brew() -> Result<String> {
    // Check common locations
    let paths = [
        "/opt/homebrew/bin/brew",              // Apple Silicon
        "/usr/local/bin/brew",                 // Intel
        "/home/linuxbrew/.linuxbrew/bin/brew", // Linux
    ];

    for path in &paths {
        if std::path::Path::new(path).exists() {
            return Ok((*path).to_string());
        }
    }

    // Try which
    let output = Command::new("which")
        .arg("brew")
        .output()
        .map_err(|_| Error::BrewNotFound)?;

    if output.status.success() {
        let path = String::from_utf8_lossy(&output.stdout).trim().to_string();
        if !path.is_empty() {
            return Ok(path);
        }
    }

    Err(Error::BrewNotFound)
}

/// Extract the version number from `brew --version` output.
fn parse_version(text: &str) -> Option<String> {
    VERSION_RE
        .captures(text)
        .map(|caps| caps[1].to_string())
}

/// Download and run the official Homebrew install script.
///
/// Requires user interaction, so the script runs with inherited stdio.
pub fn install_homebrew() -> Result<()> {
    let mut response = ureq::get(INSTALL_SCRIPT_URL)
        .call()
        .map_err(|e| Error::Download(e.to_string()))?;
    let script = response
        .body_mut()
        .read_to_string()
        .map_err(|e| Error::Download(e.to_string()))?;

    let script_path = std::env::temp_dir().join("brew-install.sh");
    std::fs::write(&script_path, script)?;

    let status = Command::new("/bin/bash")
        .arg(&script_path)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status();

    let _ = std::fs::remove_file(&script_path);

    let status = status?;
    if !status.success() {
        return Err(Error::CommandFailed {
            message: format!("Homebrew install script exited with {status}"),
            stderr: String::new(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_version() {
        let output = "Homebrew 4.2.21\nHomebrew/homebrew-core (git revision abc123)\n";
        assert_eq!(parse_version(output), Some("4.2.21".to_string()));
    }

    #[test]
    fn test_parse_version_no_match() {
        assert_eq!(parse_version(""), None);
        assert_eq!(parse_version("brew: command not found"), None);
    }

    #[test]
    fn test_brew_at_path() {
        let brew = Brew::at("/tmp/fake-brew");
        assert_eq!(brew.path(), "/tmp/fake-brew");
    }

    #[test]
    fn test_missing_executable_is_not_available() {
        let brew = Brew::at("/nonexistent/definitely-not-brew");
        assert!(!brew.is_available());
        assert_eq!(brew.version(), None);
    }
}
