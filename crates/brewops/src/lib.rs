//! # brewops
//!
//! Homebrew operations for the macsetup wizard.
//!
//! This crate provides functionality for:
//! - Locating (and bootstrapping) the `brew` executable
//! - Probing the set of installed formulas and casks
//! - Reconciling a desired selection against the installed inventory
//! - Running install/uninstall commands with live output parsing
//!
//! ## Example
//!
//! ```no_run
//! use brewops::{probe, reconcile, Brew, Mode, NullReporter, Runner, Tool};
//!
//! let brew = Brew::locate().expect("Homebrew not available");
//!
//! // Snapshot what is already installed (best effort, never fails).
//! let inventory = probe(&brew);
//!
//! // Decide what needs to change.
//! let catalog = vec![Tool::formula("jq", "jq", "System & Utilities")];
//! let selected = catalog.clone();
//! let plan = reconcile(&selected, &inventory, &catalog);
//!
//! // Apply, one tool at a time.
//! let runner = Runner::new(&brew);
//! let results = runner.run_all(&plan.to_install, Mode::Install, &mut NullReporter);
//! assert_eq!(results.len(), plan.to_install.len());
//! ```
//!
//! ## Output parsing
//!
//! Install and uninstall commands stream their output through a small set of
//! line-based heuristics (credential prompts, `==>` phase headers, download
//! progress) surfaced via the [`Reporter`] trait. The heuristics are
//! best-effort and coupled to Homebrew's current text output; see [`events`].

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod brew;
pub mod error;
pub mod events;
pub mod probe;
pub mod reconcile;
pub mod runner;
pub mod types;

pub use brew::Brew;
pub use error::{Error, Result};
pub use probe::probe;
pub use reconcile::{Plan, reconcile};
pub use runner::{Mode, NullReporter, Reporter, Runner};
pub use types::{Inventory, OpResult, PackageKind, Tool};
