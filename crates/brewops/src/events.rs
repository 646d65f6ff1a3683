//! Line-based event detection over brew output.
//!
//! Homebrew has no structured output for install progress, so the runner
//! watches for a few textual patterns: credential prompts, `==>` phase
//! headers, and download percentages/sizes. The matchers are independent
//! (a line can trigger several) and explicitly best-effort; they track the
//! current output format and nothing more.

use regex::Regex;
use std::sync::LazyLock;

static PERCENT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+\.?\d*)%").expect("valid regex"));
static SIZE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)([\d.]+)\s*(KB|MB|GB)").expect("valid regex"));

/// Everything the matchers found in a single output line.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LineScan {
    /// Line looks like a sudo/password prompt
    pub credential_prompt: bool,
    /// `==>` header text, with download lines excluded
    pub phase: Option<String>,
    /// Line mentions downloading
    pub downloading: bool,
    /// Percentage found in the line
    pub percent: Option<f64>,
    /// Size with unit found in the line (e.g. "150 MB")
    pub size: Option<String>,
}

impl LineScan {
    /// Whether no matcher fired.
    pub fn is_empty(&self) -> bool {
        !self.credential_prompt
            && self.phase.is_none()
            && !self.downloading
            && self.percent.is_none()
            && self.size.is_none()
    }
}

/// Run all matchers over one line of brew output.
pub fn scan_line(line: &str) -> LineScan {
    let line = line.trim();
    if line.is_empty() {
        return LineScan::default();
    }

    let lower = line.to_lowercase();
    let credential_prompt = ["password", "sudo", "administrator"]
        .iter()
        .any(|needle| lower.contains(needle));
    let downloading = lower.contains("downloading");

    let percent = PERCENT_RE
        .captures(line)
        .and_then(|caps| caps[1].parse().ok());
    let size = SIZE_RE
        .captures(line)
        .map(|caps| format!("{} {}", &caps[1], caps[2].to_uppercase()));

    // Download lines get their own progress treatment, not a phase update.
    let phase = if downloading {
        None
    } else {
        line.strip_prefix("==> ").map(ToOwned::to_owned)
    };

    LineScan {
        credential_prompt,
        phase,
        downloading,
        percent,
        size,
    }
}
