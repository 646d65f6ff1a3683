//! Core types for the tool catalog and installed-package inventory.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// How a tool is installed by Homebrew.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PackageKind {
    /// Homebrew formula (CLI tool)
    Formula,
    /// Homebrew cask (GUI application)
    Cask,
}

impl PackageKind {
    /// Human-readable label, as shown in checklists and summaries.
    pub fn label(&self) -> &'static str {
        match self {
            PackageKind::Formula => "formula",
            PackageKind::Cask => "cask",
        }
    }
}

impl std::fmt::Display for PackageKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A catalog entry: one installable tool.
///
/// `package` + `kind` identify the tool for inventory lookups; `name` is a
/// display key only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tool {
    /// Display name (e.g. "Visual Studio Code")
    pub name: String,
    /// Homebrew package identifier (e.g. "visual-studio-code")
    pub package: String,
    /// Install mechanism
    pub kind: PackageKind,
    /// Presentation category (e.g. "Development")
    pub category: String,
    /// Optional one-line description
    pub description: Option<String>,
}

impl Tool {
    /// Create a formula tool.
    pub fn formula(
        name: impl Into<String>,
        package: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            package: package.into(),
            kind: PackageKind::Formula,
            category: category.into(),
            description: None,
        }
    }

    /// Create a cask tool.
    pub fn cask(
        name: impl Into<String>,
        package: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            package: package.into(),
            kind: PackageKind::Cask,
            category: category.into(),
            description: None,
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Snapshot of installed package identifiers, partitioned by kind.
///
/// Captured once per session; deliberately never re-probed mid-session, so
/// it goes stale the moment an install or uninstall completes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inventory {
    /// Installed formula identifiers
    pub formulas: BTreeSet<String>,
    /// Installed cask identifiers
    pub casks: BTreeSet<String>,
}

impl Inventory {
    /// Whether the tool's `(package, kind)` pair is in the snapshot.
    pub fn contains(&self, tool: &Tool) -> bool {
        match tool.kind {
            PackageKind::Formula => self.formulas.contains(&tool.package),
            PackageKind::Cask => self.casks.contains(&tool.package),
        }
    }

    /// Total number of installed packages across both kinds.
    pub fn len(&self) -> usize {
        self.formulas.len() + self.casks.len()
    }

    /// Whether nothing was found installed.
    pub fn is_empty(&self) -> bool {
        self.formulas.is_empty() && self.casks.is_empty()
    }
}

/// Outcome of one install or uninstall attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpResult {
    /// The tool that was operated on
    pub tool: Tool,
    /// Whether the operation succeeded
    pub success: bool,
    /// Diagnostic text for failures
    pub error: Option<String>,
}

impl OpResult {
    /// A successful result.
    pub fn ok(tool: Tool) -> Self {
        Self {
            tool,
            success: true,
            error: None,
        }
    }

    /// A failed result with diagnostic text.
    pub fn failed(tool: Tool, error: impl Into<String>) -> Self {
        Self {
            tool,
            success: false,
            error: Some(error.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_label() {
        assert_eq!(PackageKind::Formula.label(), "formula");
        assert_eq!(PackageKind::Cask.label(), "cask");
        assert_eq!(PackageKind::Cask.to_string(), "cask");
    }

    #[test]
    fn test_tool_constructors() {
        let jq = Tool::formula("jq", "jq", "System & Utilities").with_description("JSON processor");
        assert_eq!(jq.kind, PackageKind::Formula);
        assert_eq!(jq.description.as_deref(), Some("JSON processor"));

        let code = Tool::cask("Visual Studio Code", "visual-studio-code", "Development");
        assert_eq!(code.kind, PackageKind::Cask);
        assert_eq!(code.package, "visual-studio-code");
    }

    #[test]
    fn test_inventory_contains_is_kind_aware() {
        let inventory = Inventory {
            formulas: ["wget".to_string()].into(),
            casks: ["firefox".to_string()].into(),
        };

        assert!(inventory.contains(&Tool::formula("wget", "wget", "c")));
        assert!(inventory.contains(&Tool::cask("Firefox", "firefox", "c")));
        // Same identifier, wrong namespace.
        assert!(!inventory.contains(&Tool::cask("wget", "wget", "c")));
        assert!(!inventory.contains(&Tool::formula("firefox", "firefox", "c")));
        assert_eq!(inventory.len(), 2);
        assert!(!inventory.is_empty());
    }

    #[test]
    fn test_op_result() {
        let tool = Tool::formula("jq", "jq", "c");
        let ok = OpResult::ok(tool.clone());
        assert!(ok.success);
        assert!(ok.error.is_none());

        let failed = OpResult::failed(tool, "exit code 1");
        assert!(!failed.success);
        assert_eq!(failed.error.as_deref(), Some("exit code 1"));
    }
}
