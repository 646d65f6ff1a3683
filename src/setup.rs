//! The interactive setup flow: ensure Homebrew, pick tools, reconcile,
//! apply, summarize.

use crate::progress::SpinnerReporter;
use crate::{catalog, input, summary, ui, wizard};
use anyhow::Result;
use brewops::{Brew, Mode, Runner, probe, reconcile};
use colored::Colorize;
use console::Term;
use dialoguer::Confirm;
use dialoguer::theme::ColorfulTheme;

/// Run the full wizard flow. Returns the process exit code.
pub fn run(assume_yes: bool) -> Result<i32> {
    let term = Term::stdout();

    let brew = match Brew::locate() {
        Ok(brew) => brew,
        Err(_) => {
            ui::info("Homebrew is not installed. Installing now...");
            ui::dim("This may take a few minutes. Please follow the prompts if any appear.");
            match Brew::ensure() {
                Ok(brew) => {
                    ui::success("Homebrew installed successfully");
                    brew
                }
                Err(err) => {
                    ui::error(&format!("Failed to install Homebrew: {err}"));
                    println!();
                    ui::warn("Please install Homebrew manually and try again:");
                    ui::dim(
                        "/bin/bash -c \"$(curl -fsSL https://raw.githubusercontent.com/Homebrew/install/HEAD/install.sh)\"",
                    );
                    return Ok(1);
                }
            }
        }
    };

    let homebrew_status = match brew.version() {
        Some(version) => format!(
            "{} {}",
            "✓ Homebrew is installed".green(),
            format!("(version {version})").dimmed()
        ),
        None => "✓ Homebrew is installed".green().to_string(),
    };

    let groups = catalog::by_category();

    // Intro screen, then wait for Enter (or 'q' to bail out).
    ui::clear_screen();
    ui::banner();
    println!(
        "{}",
        "This tool will help you install development tools via Homebrew.".dimmed()
    );
    println!(
        "{}",
        "All tools are installed as Homebrew formulas and casks.".dimmed()
    );
    println!();
    println!("{homebrew_status}");
    println!();
    ui::warn("Some tools might require sudo privileges during installation.");
    ui::dim("If prompted for a password, you'll see a clear notification and can enter it directly.");
    println!();
    println!(
        "{}",
        format!(
            "You'll be shown {} categories. Select tools from each one.",
            groups.len()
        )
        .dimmed()
    );
    println!();
    print!(
        "{}{}{}{}{} ",
        "Press ".dimmed(),
        "<Enter>".bold(),
        " to continue or ".dimmed(),
        "'q'".bold(),
        " to exit:".dimmed()
    );
    use std::io::Write;
    std::io::stdout().flush()?;
    input::read_continue_or_quit(&term)?;

    println!();
    println!("{}", "Checking installed packages...".dimmed());
    let inventory = probe(&brew);
    log::debug!(
        "inventory snapshot: {} formulas, {} casks",
        inventory.formulas.len(),
        inventory.casks.len()
    );

    let selected = wizard::run(&term, &inventory, groups)?;
    if selected.is_empty() {
        println!();
        println!("{}", "No tools selected. Exiting.".yellow());
        return Ok(0);
    }

    ui::clear_screen();
    let plan = reconcile(&selected, &inventory, &catalog::all());
    summary::display_plan(&plan);
    if !plan.has_changes() {
        return Ok(0);
    }

    let proceed = assume_yes
        || Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(summary::confirm_prompt(&plan))
            .default(true)
            .interact()?;
    if !proceed {
        println!();
        println!("{}", "Operation cancelled.".yellow());
        return Ok(0);
    }

    let runner = Runner::new(&brew);
    let mut reporter = SpinnerReporter::new();
    let mut failed = false;

    // Uninstalls run first so a replacement install never races its removal.
    if !plan.to_uninstall.is_empty() {
        ui::clear_screen();
        println!();
        println!(
            "{}",
            format!("Uninstalling {} tool(s)...", plan.to_uninstall.len()).bold()
        );
        println!();
        let results = runner.run_all(&plan.to_uninstall, Mode::Uninstall, &mut reporter);
        summary::print_summary(Mode::Uninstall, &results);
        failed |= summary::has_failures(&results);
    }

    if !plan.to_install.is_empty() {
        println!();
        println!(
            "{}",
            format!("Installing {} tool(s)...", plan.to_install.len()).bold()
        );
        println!();
        let results = runner.run_all(&plan.to_install, Mode::Install, &mut reporter);
        summary::print_summary(Mode::Install, &results);
        failed |= summary::has_failures(&results);
    }

    Ok(i32::from(failed))
}

/// Print the catalog grouped by category.
pub fn list() {
    for (category, tools) in catalog::by_category() {
        ui::header(&category);
        for tool in tools {
            println!(
                "  {} {}{}",
                ui::kind_label(tool.kind),
                tool.name,
                tool.description
                    .as_deref()
                    .map(|text| format!(" - {text}").dimmed().to_string())
                    .unwrap_or_default()
            );
        }
    }
    println!();
}
