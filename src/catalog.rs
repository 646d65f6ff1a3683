//! The built-in tool catalog.
//!
//! A static, categorized list of formulas and casks the wizard offers.
//! Categories are derived from the entries; there is no separate category
//! registry.

use brewops::Tool;

/// All catalog tools, sorted by display name.
pub fn all() -> Vec<Tool> {
    let mut tools = vec![
        // Development - editors, IDEs, language managers, and dev utilities
        Tool::formula("AWS CLI", "awscli", "Development")
            .with_description("Amazon Web Services command-line interface"),
        Tool::cask("Cursor", "cursor", "Development").with_description("AI-powered code editor"),
        Tool::formula("gvm", "gvm", "Development").with_description("Go version manager"),
        Tool::cask("Insomnia", "insomnia", "Development")
            .with_description("API client and design platform"),
        Tool::cask("IntelliJ IDEA Community", "intellij-idea-ce", "Development")
            .with_description("Java IDE - Community Edition"),
        Tool::cask("iTerm2", "iterm2", "Development").with_description("Terminal emulator"),
        Tool::formula("jenv", "jenv", "Development").with_description("Java environment manager"),
        Tool::formula("k9s", "k9s", "Development")
            .with_description("Kubernetes CLI to manage clusters"),
        Tool::formula("kubectl", "kubectl", "Development")
            .with_description("Kubernetes command-line tool"),
        Tool::formula("Neovim", "neovim", "Development")
            .with_description("Hyperextensible Vim-based text editor"),
        Tool::formula("nvm", "nvm", "Development").with_description("Node Version Manager"),
        Tool::cask("OrbStack", "orbstack", "Development")
            .with_description("Docker Desktop alternative for macOS"),
        Tool::formula("rbenv", "rbenv", "Development").with_description("Ruby version management"),
        Tool::formula("rustup", "rustup-init", "Development")
            .with_description("Rust toolchain installer and version manager"),
        Tool::formula("Terraform", "terraform", "Development")
            .with_description("Infrastructure as code tool"),
        Tool::formula("uv", "uv", "Development")
            .with_description("Python package installer and resolver"),
        Tool::cask("Visual Studio Code", "visual-studio-code", "Development")
            .with_description("Code editor"),
        // Productivity - communication, browsers, and productivity applications
        Tool::cask("Arc", "arc", "Productivity")
            .with_description("Browser designed for productivity"),
        Tool::cask("Brave Browser", "brave-browser", "Productivity")
            .with_description("Privacy-focused browser"),
        Tool::cask("Discord", "discord", "Productivity").with_description("Voice and text chat"),
        Tool::cask("Firefox", "firefox", "Productivity").with_description("Web browser"),
        Tool::cask("Google Chrome", "google-chrome", "Productivity")
            .with_description("Web browser"),
        Tool::cask("Google Drive", "google-drive", "Productivity")
            .with_description("Cloud storage and file synchronization"),
        Tool::cask("Microsoft Teams", "microsoft-teams", "Productivity")
            .with_description("Team collaboration and video conferencing"),
        Tool::cask("Notion", "notion", "Productivity").with_description("All-in-one workspace"),
        Tool::cask("Slack", "slack", "Productivity")
            .with_description("Team collaboration platform"),
        Tool::cask("Spotify", "spotify", "Productivity")
            .with_description("Music streaming service"),
        Tool::cask("WhatsApp", "whatsapp", "Productivity")
            .with_description("Messaging application"),
        Tool::cask("Zoom", "zoom", "Productivity").with_description("Video conferencing"),
        // System & Utilities - system-level utilities and command-line tools
        Tool::formula("htop", "htop", "System & Utilities")
            .with_description("Interactive process viewer"),
        Tool::formula("jq", "jq", "System & Utilities").with_description("JSON processor"),
        Tool::formula("Tmux", "tmux", "System & Utilities")
            .with_description("Terminal multiplexer"),
        Tool::formula("tree", "tree", "System & Utilities")
            .with_description("Directory tree visualizer"),
        Tool::formula("wget", "wget", "System & Utilities")
            .with_description("File download utility"),
    ];
    tools.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
    tools
}

/// Distinct category names, lexicographic.
pub fn categories() -> Vec<String> {
    let mut categories: Vec<String> = Vec::new();
    for tool in all() {
        if !categories.contains(&tool.category) {
            categories.push(tool.category);
        }
    }
    categories.sort();
    categories
}

/// Tools grouped per category, categories lexicographic and tools sorted
/// by display name within each.
pub fn by_category() -> Vec<(String, Vec<Tool>)> {
    let tools = all();
    categories()
        .into_iter()
        .map(|category| {
            let members: Vec<Tool> = tools
                .iter()
                .filter(|tool| tool.category == category)
                .cloned()
                .collect();
            (category, members)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn test_packages_are_unique() {
        let tools = all();
        let packages: BTreeSet<&str> = tools.iter().map(|t| t.package.as_str()).collect();
        assert_eq!(packages.len(), tools.len());
    }

    #[test]
    fn test_names_unique_within_category() {
        for (category, tools) in by_category() {
            let names: BTreeSet<&str> = tools.iter().map(|t| t.name.as_str()).collect();
            assert_eq!(names.len(), tools.len(), "duplicate name in {category}");
        }
    }

    #[test]
    fn test_categories_sorted_and_nonempty() {
        let categories = categories();
        let mut sorted = categories.clone();
        sorted.sort();
        assert_eq!(categories, sorted);
        assert_eq!(
            categories,
            vec!["Development", "Productivity", "System & Utilities"]
        );
        for (_, tools) in by_category() {
            assert!(!tools.is_empty());
        }
    }

    #[test]
    fn test_tools_sorted_by_name_within_category() {
        for (_, tools) in by_category() {
            let names: Vec<String> = tools.iter().map(|t| t.name.to_lowercase()).collect();
            let mut sorted = names.clone();
            sorted.sort();
            assert_eq!(names, sorted);
        }
    }

    #[test]
    fn test_grouping_covers_all_tools() {
        let grouped: usize = by_category().iter().map(|(_, tools)| tools.len()).sum();
        assert_eq!(grouped, all().len());
    }
}
