//! Plan and batch-result display.

use crate::ui;
use brewops::{Mode, OpResult, Plan, Tool};
use colored::Colorize;

fn tool_line(tool: &Tool) -> String {
    format!(
        "  {} {} {}",
        ui::kind_label(tool.kind),
        tool.name,
        format!("({})", tool.category).dimmed()
    )
}

/// Show the three reconciliation partitions before asking to proceed.
pub fn display_plan(plan: &Plan) {
    if !plan.to_uninstall.is_empty() {
        println!();
        println!(
            "{}",
            format!("⚠ To uninstall ({}):", plan.to_uninstall.len()).red()
        );
        println!();
        for tool in &plan.to_uninstall {
            println!("{}", tool_line(tool));
        }
    }

    if !plan.already_satisfied.is_empty() {
        println!();
        println!(
            "{}",
            format!("✓ Already installed ({}):", plan.already_satisfied.len()).green()
        );
        println!();
        for tool in &plan.already_satisfied {
            println!("{}", tool_line(tool));
        }
    }

    if !plan.to_install.is_empty() {
        println!();
        println!(
            "{}",
            format!("To install ({}):", plan.to_install.len()).bold()
        );
        println!();
        for tool in &plan.to_install {
            println!("{}", tool_line(tool));
        }
    }

    if !plan.has_changes() {
        println!();
        println!(
            "{}",
            "✓ All selected tools are already installed. Nothing to do.".green()
        );
    }
}

/// Confirmation wording depends on which partitions are non-empty.
pub fn confirm_prompt(plan: &Plan) -> &'static str {
    match (!plan.to_uninstall.is_empty(), !plan.to_install.is_empty()) {
        (true, true) => "Proceed with uninstallation and installation?",
        (true, false) => "Proceed with uninstallation?",
        _ => "Proceed with installation?",
    }
}

/// Print the per-batch summary after all operations ran.
pub fn print_summary(mode: Mode, results: &[OpResult]) {
    let (title, done_verb, failed_verb) = match mode {
        Mode::Install => ("Installation Summary", "installed", "install"),
        Mode::Uninstall => ("Uninstallation Summary", "uninstalled", "uninstall"),
    };
    let successful: Vec<&OpResult> = results.iter().filter(|r| r.success).collect();
    let failed: Vec<&OpResult> = results.iter().filter(|r| !r.success).collect();

    println!();
    println!("{}", "=".repeat(50).bold());
    println!("{}", title.bold());
    println!("{}", "=".repeat(50).bold());

    if !successful.is_empty() {
        println!();
        println!(
            "{}",
            format!("✓ Successfully {} ({}):", done_verb, successful.len()).green()
        );
        for result in &successful {
            println!(
                "  {} {}",
                ui::kind_label(result.tool.kind),
                result.tool.name
            );
        }
    }

    if !failed.is_empty() {
        println!();
        println!(
            "{}",
            format!("✗ Failed to {} ({}):", failed_verb, failed.len()).red()
        );
        for result in &failed {
            println!(
                "  {} {}",
                ui::kind_label(result.tool.kind),
                result.tool.name
            );
            if let Some(error) = &result.error {
                println!("{}", format!("    Error: {error}").dimmed());
            }
        }
    }

    println!();
    println!("{}", "=".repeat(50).bold());
    println!();
}

/// Whether any operation in the batch failed.
pub fn has_failures(results: &[OpResult]) -> bool {
    results.iter().any(|result| !result.success)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confirm_prompt_wording() {
        let tool = Tool::formula("jq", "jq", "c");

        let both = Plan {
            to_uninstall: vec![tool.clone()],
            to_install: vec![tool.clone()],
            already_satisfied: Vec::new(),
        };
        assert_eq!(
            confirm_prompt(&both),
            "Proceed with uninstallation and installation?"
        );

        let uninstall_only = Plan {
            to_uninstall: vec![tool.clone()],
            ..Plan::default()
        };
        assert_eq!(confirm_prompt(&uninstall_only), "Proceed with uninstallation?");

        let install_only = Plan {
            to_install: vec![tool],
            ..Plan::default()
        };
        assert_eq!(confirm_prompt(&install_only), "Proceed with installation?");
    }

    #[test]
    fn test_has_failures() {
        let tool = Tool::formula("jq", "jq", "c");
        let ok = OpResult::ok(tool.clone());
        let failed = OpResult::failed(tool, "exit code 1");

        assert!(!has_failures(&[ok.clone()]));
        assert!(has_failures(&[ok, failed]));
        assert!(!has_failures(&[]));
    }
}
