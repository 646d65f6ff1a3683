//! Category-by-category tool selection with back navigation.
//!
//! [`Session`] is the state machine (cursor over non-empty categories plus
//! the per-category picks); [`run`] drives it with dialoguer checklists and
//! the raw-key navigation reader.

use crate::input::{self, Nav};
use crate::ui;
use anyhow::Result;
use brewops::{Inventory, Tool};
use colored::Colorize;
use console::Term;
use dialoguer::MultiSelect;
use dialoguer::theme::ColorfulTheme;
use std::collections::{BTreeSet, HashMap};

const TOOLS_PER_PAGE: usize = 8;

/// Wizard state: a cursor over the non-empty categories and the checklist
/// stored for each category visited so far.
pub struct Session {
    categories: Vec<(String, Vec<Tool>)>,
    cursor: usize,
    picks: HashMap<String, Vec<Tool>>,
}

impl Session {
    /// Build a session over the given category groups. Categories with no
    /// tools are skipped entirely, in both directions.
    pub fn new(categories: Vec<(String, Vec<Tool>)>) -> Self {
        let categories = categories
            .into_iter()
            .filter(|(_, tools)| !tools.is_empty())
            .collect();
        Self {
            categories,
            cursor: 0,
            picks: HashMap::new(),
        }
    }

    /// Number of categories the wizard will visit.
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    /// Whether every category has been traversed.
    pub fn is_done(&self) -> bool {
        self.cursor >= self.categories.len()
    }

    /// Zero-based index of the current category.
    pub fn position(&self) -> usize {
        self.cursor
    }

    /// The category currently being browsed.
    pub fn current(&self) -> Option<(&str, &[Tool])> {
        self.categories
            .get(self.cursor)
            .map(|(name, tools)| (name.as_str(), tools.as_slice()))
    }

    /// Back navigation is not offered on the first category.
    pub fn can_go_back(&self) -> bool {
        self.cursor > 0
    }

    /// Pre-check flags for the current category's tools: checked on the
    /// most recent visit, or reported installed by the inventory snapshot.
    pub fn preselected(&self, inventory: &Inventory) -> Vec<bool> {
        let Some((category, tools)) = self.current() else {
            return Vec::new();
        };
        let previous: BTreeSet<&str> = self
            .picks
            .get(category)
            .map(|picked| picked.iter().map(|t| t.package.as_str()).collect())
            .unwrap_or_default();
        tools
            .iter()
            .map(|tool| previous.contains(tool.package.as_str()) || inventory.contains(tool))
            .collect()
    }

    /// Store the checklist for the current category and advance.
    pub fn confirm(&mut self, picked: Vec<Tool>) {
        self.store(picked);
        if !self.is_done() {
            self.cursor += 1;
        }
    }

    /// Store the checklist as it stood at the back signal and step back.
    /// No-op movement on the first category.
    pub fn back(&mut self, picked: Vec<Tool>) {
        self.store(picked);
        self.cursor = self.cursor.saturating_sub(1);
    }

    fn store(&mut self, picked: Vec<Tool>) {
        if let Some(category) = self.categories.get(self.cursor).map(|(name, _)| name.clone()) {
            self.picks.insert(category, picked);
        }
    }

    /// Flatten the stored picks into one ordered selection: category order
    /// first, insertion order within each category.
    pub fn into_selection(self) -> Vec<Tool> {
        let mut selected = Vec::new();
        for (category, _) in &self.categories {
            if let Some(picked) = self.picks.get(category) {
                selected.extend(picked.iter().cloned());
            }
        }
        selected
    }
}

/// Run the interactive wizard and return the final ordered selection.
pub fn run(term: &Term, inventory: &Inventory, groups: Vec<(String, Vec<Tool>)>) -> Result<Vec<Tool>> {
    let mut session = Session::new(groups);
    let total = session.len();

    while !session.is_done() {
        let Some((category, tools)) = session.current() else {
            break;
        };
        let category = category.to_string();
        let tools = tools.to_vec();

        ui::clear_screen();
        println!();
        println!(
            "{}",
            format!("📦 {} ({}/{})", category, session.position() + 1, total).bold()
        );
        println!();

        let labels: Vec<String> = tools
            .iter()
            .map(|tool| choice_label(tool, inventory))
            .collect();
        let defaults = session.preselected(inventory);

        let picked_indices = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt(format!(
                "Select tools from {category} (space toggles, enter confirms)"
            ))
            .items(&labels)
            .defaults(&defaults)
            .max_length(TOOLS_PER_PAGE)
            .report(false)
            .interact()?;
        let picked: Vec<Tool> = picked_indices
            .into_iter()
            .filter_map(|index| tools.get(index).cloned())
            .collect();

        if session.can_go_back() {
            println!();
            println!(
                "{} {} {} {}",
                "Press".dimmed(),
                "<Enter>".bold(),
                "to continue or".dimmed(),
                "'b' to go back".bold()
            );
            match input::read_nav(term, true)? {
                Nav::Continue => session.confirm(picked),
                Nav::Back => session.back(picked),
            }
        } else {
            session.confirm(picked);
        }
    }

    Ok(session.into_selection())
}

fn choice_label(tool: &Tool, inventory: &Inventory) -> String {
    let installed = if inventory.contains(tool) {
        format!(" {}", "✓".green())
    } else {
        String::new()
    };
    let description = tool
        .description
        .as_deref()
        .map(|text| format!(" - {text}").dimmed().to_string())
        .unwrap_or_default();
    format!(
        "{} {}{installed}{description}",
        ui::kind_label(tool.kind),
        tool.name
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn groups() -> Vec<(String, Vec<Tool>)> {
        vec![
            (
                "Development".to_string(),
                vec![
                    Tool::formula("A", "a", "Development"),
                    Tool::cask("B", "b", "Development"),
                ],
            ),
            ("Empty".to_string(), Vec::new()),
            (
                "Productivity".to_string(),
                vec![Tool::cask("C", "c", "Productivity")],
            ),
        ]
    }

    fn pick(session: &Session, packages: &[&str]) -> Vec<Tool> {
        let Some((_, tools)) = session.current() else {
            return Vec::new();
        };
        tools
            .iter()
            .filter(|tool| packages.contains(&tool.package.as_str()))
            .cloned()
            .collect()
    }

    #[test]
    fn test_empty_categories_are_skipped() {
        let session = Session::new(groups());
        assert_eq!(session.len(), 2);
        let names: Vec<&str> = session
            .categories
            .iter()
            .map(|(name, _)| name.as_str())
            .collect();
        assert_eq!(names, vec!["Development", "Productivity"]);
    }

    #[test]
    fn test_empty_catalog_is_terminal_with_empty_selection() {
        let session = Session::new(Vec::new());
        assert!(session.is_done());
        assert!(session.into_selection().is_empty());

        let all_empty = Session::new(vec![("Empty".to_string(), Vec::new())]);
        assert!(all_empty.is_done());
    }

    #[test]
    fn test_forward_walk_reaches_terminal() {
        let mut session = Session::new(groups());
        assert_eq!(session.current().map(|(name, _)| name), Some("Development"));

        let picked = pick(&session, &["a"]);
        session.confirm(picked);
        assert_eq!(session.current().map(|(name, _)| name), Some("Productivity"));

        session.confirm(Vec::new());
        assert!(session.is_done());
        let selection: Vec<String> = session
            .into_selection()
            .into_iter()
            .map(|t| t.package)
            .collect();
        assert_eq!(selection, vec!["a"]);
    }

    #[test]
    fn test_back_navigation_round_trip_preserves_prechecks() {
        let inventory = Inventory::default();
        let mut session = Session::new(groups());

        // Check "a" in Development, move on, then come back.
        let picked = pick(&session, &["a"]);
        session.confirm(picked);
        session.back(Vec::new());

        assert_eq!(session.current().map(|(name, _)| name), Some("Development"));
        assert_eq!(session.preselected(&inventory), vec![true, false]);

        // Forward again without changes reproduces the same selection.
        let picked = pick(&session, &["a"]);
        session.confirm(picked);
        session.confirm(pick(&session, &["c"]));

        let selection: Vec<String> = session
            .into_selection()
            .into_iter()
            .map(|t| t.package)
            .collect();
        assert_eq!(selection, vec!["a", "c"]);
    }

    #[test]
    fn test_back_is_noop_at_first_category() {
        let mut session = Session::new(groups());
        assert!(!session.can_go_back());

        session.back(Vec::new());
        assert_eq!(session.position(), 0);
        assert_eq!(session.current().map(|(name, _)| name), Some("Development"));
    }

    #[test]
    fn test_back_stores_checks_at_the_back_signal() {
        let mut session = Session::new(groups());
        session.confirm(Vec::new());

        // Going back from Productivity stores whatever was checked there.
        let picked = pick(&session, &["c"]);
        session.back(picked);
        assert_eq!(session.current().map(|(name, _)| name), Some("Development"));

        session.confirm(Vec::new());
        // The stored Productivity picks pre-check on revisit.
        assert_eq!(session.preselected(&Inventory::default()), vec![true]);
        session.confirm(pick(&session, &["c"]));

        let selection: Vec<String> = session
            .into_selection()
            .into_iter()
            .map(|t| t.package)
            .collect();
        assert_eq!(selection, vec!["c"]);
    }

    #[test]
    fn test_installed_tools_are_prechecked() {
        let inventory = Inventory {
            formulas: ["a".to_string()].into(),
            casks: ["b".to_string()].into(),
        };
        let session = Session::new(groups());
        assert_eq!(session.preselected(&inventory), vec![true, true]);
    }

    #[test]
    fn test_revisit_overwrites_previous_picks() {
        let inventory = Inventory::default();
        let mut session = Session::new(groups());

        session.confirm(pick(&session, &["a", "b"]));
        session.back(Vec::new());
        // Uncheck everything this time.
        session.confirm(Vec::new());
        session.confirm(Vec::new());

        assert!(session.into_selection().is_empty());

        // And preselection reflects the latest (empty) visit.
        let mut session = Session::new(groups());
        session.confirm(pick(&session, &["a"]));
        session.back(Vec::new());
        session.store(Vec::new());
        assert_eq!(session.preselected(&inventory), vec![false, false]);
    }
}
