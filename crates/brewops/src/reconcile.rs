//! Desired-state reconciliation against the probed inventory.

use crate::types::{Inventory, Tool};
use std::collections::BTreeSet;

/// The three partitions a reconciliation produces.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Plan {
    /// Installed catalog tools the user deselected
    pub to_uninstall: Vec<Tool>,
    /// Selected tools that are not installed yet
    pub to_install: Vec<Tool>,
    /// Selected tools that are already installed
    pub already_satisfied: Vec<Tool>,
}

impl Plan {
    /// Whether anything actually needs to change.
    pub fn has_changes(&self) -> bool {
        !self.to_uninstall.is_empty() || !self.to_install.is_empty()
    }
}

/// Diff the desired selection against the installed inventory.
///
/// Pure function, deterministic: `to_uninstall` follows catalog order,
/// `to_install` and `already_satisfied` follow selection order. Duplicate
/// selections are de-duplicated by package identifier.
///
/// Installed-state membership is keyed by `(package, kind)` via
/// [`Inventory::contains`]. The deselection test for `to_uninstall` matches
/// by package identifier alone; the catalog maps each identifier to exactly
/// one kind, so the two keys agree there.
pub fn reconcile(selected: &[Tool], inventory: &Inventory, catalog: &[Tool]) -> Plan {
    let selected_packages: BTreeSet<&str> =
        selected.iter().map(|tool| tool.package.as_str()).collect();

    let to_uninstall = catalog
        .iter()
        .filter(|tool| inventory.contains(tool))
        .filter(|tool| !selected_packages.contains(tool.package.as_str()))
        .cloned()
        .collect();

    let mut seen = BTreeSet::new();
    let mut to_install = Vec::new();
    let mut already_satisfied = Vec::new();
    for tool in selected {
        if !seen.insert(tool.package.as_str()) {
            continue;
        }
        if inventory.contains(tool) {
            already_satisfied.push(tool.clone());
        } else {
            to_install.push(tool.clone());
        }
    }

    Plan {
        to_uninstall,
        to_install,
        already_satisfied,
    }
}
