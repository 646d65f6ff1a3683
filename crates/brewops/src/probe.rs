//! Best-effort probing of installed Homebrew packages.

use crate::brew::Brew;
use crate::types::Inventory;
use std::collections::BTreeSet;

/// Snapshot the installed formulas and casks.
///
/// Never fails: a query that cannot be run degrades to an empty set for
/// that kind. Worst case a tool is offered as "not installed" when it
/// really is, which only causes a redundant no-op attempt later. The two
/// queries run concurrently; the snapshot is only approximately current
/// at call time.
pub fn probe(brew: &Brew) -> Inventory {
    let (formulas, casks) = rayon::join(
        || list(brew, &["list", "--formula"]),
        || list(brew, &["list", "--cask"]),
    );
    Inventory { formulas, casks }
}

fn list(brew: &Brew, args: &[&str]) -> BTreeSet<String> {
    let output = match brew.command().args(args).output() {
        Ok(output) => output,
        Err(err) => {
            log::debug!("brew {args:?} failed to spawn: {err}");
            return BTreeSet::new();
        }
    };

    if !output.status.success() {
        log::debug!("brew {args:?} exited with {}", output.status);
        return BTreeSet::new();
    }

    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use std::io::Write;
    use std::os::unix::fs::PermissionsExt;

    // A fake brew that answers `list --formula` and fails `list --cask`.
    fn fake_brew(dir: &tempfile::TempDir) -> Brew {
        let path = dir.path().join("brew");
        let mut file = std::fs::File::create(&path).expect("create script");
        writeln!(
            file,
            "#!/bin/sh\nif [ \"$2\" = \"--formula\" ]; then\n  printf 'wget\\njq\\n\\n  \\n'\nelse\n  echo 'Error: no casks' >&2\n  exit 1\nfi"
        )
        .expect("write script");
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755))
            .expect("chmod script");
        Brew::at(path.display().to_string())
    }

    #[test]
    fn test_probe_collects_formulas_and_degrades_casks() {
        let dir = tempfile::tempdir().expect("tempdir");
        let inventory = probe(&fake_brew(&dir));

        assert_eq!(
            inventory.formulas,
            ["wget".to_string(), "jq".to_string()].into()
        );
        // Failed query degrades to empty, not an error.
        assert!(inventory.casks.is_empty());
    }

    #[test]
    fn test_probe_missing_executable_yields_empty_inventory() {
        let inventory = probe(&Brew::at("/nonexistent/definitely-not-brew"));
        assert!(inventory.is_empty());
    }
}
