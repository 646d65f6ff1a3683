#![allow(dead_code)]

use brewops::PackageKind;
use colored::Colorize;

/// Print an info message
pub fn info(msg: &str) {
    println!("{} {}", "ℹ".blue(), msg);
}

/// Print a success message
pub fn success(msg: &str) {
    println!("{} {}", "✓".green(), msg);
}

/// Print a warning message
pub fn warn(msg: &str) {
    println!("{} {}", "⚠".yellow(), msg);
}

/// Print an error message
pub fn error(msg: &str) {
    eprintln!("{} {}", "✗".red(), msg);
}

/// Print a dim/muted message
pub fn dim(msg: &str) {
    println!("  {}", msg.dimmed());
}

/// Print a header/title
pub fn header(title: &str) {
    println!();
    println!("{}", title.bold());
    println!("{}", "─".repeat(title.len()).dimmed());
}

/// Colored bracket label for a package kind
pub fn kind_label(kind: PackageKind) -> String {
    match kind {
        PackageKind::Formula => "[formula]".blue().to_string(),
        PackageKind::Cask => "[cask]".yellow().to_string(),
    }
}

/// Clear the screen and move the cursor to the top-left
pub fn clear_screen() {
    let term = console::Term::stdout();
    let _ = term.clear_screen();
}

/// Print the macsetup banner
pub fn banner() {
    println!(
        "{}",
        r#"
  ███╗   ███╗ █████╗  ██████╗███████╗███████╗████████╗██╗   ██╗██████╗
  ████╗ ████║██╔══██╗██╔════╝██╔════╝██╔════╝╚══██╔══╝██║   ██║██╔══██╗
  ██╔████╔██║███████║██║     ███████╗█████╗     ██║   ██║   ██║██████╔╝
  ██║╚██╔╝██║██╔══██║██║     ╚════██║██╔══╝     ██║   ██║   ██║██╔═══╝
  ██║ ╚═╝ ██║██║  ██║╚██████╗███████║███████╗   ██║   ╚██████╔╝██║
  ╚═╝     ╚═╝╚═╝  ╚═╝ ╚═════╝╚══════╝╚══════╝   ╚═╝    ╚═════╝ ╚═╝
"#
        .cyan()
    );
}
