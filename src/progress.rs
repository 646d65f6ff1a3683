//! Spinner-backed rendering of runner events.
//!
//! One spinner per invocation. A credential prompt stops the ephemeral
//! display for the rest of the operation so brew's own prompt stays
//! readable on the terminal.

use brewops::{Mode, OpResult, Reporter, Tool};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

pub struct SpinnerReporter {
    spinner: Option<ProgressBar>,
    suppressed: bool,
}

impl SpinnerReporter {
    pub fn new() -> Self {
        Self {
            spinner: None,
            suppressed: false,
        }
    }

    fn set_message(&self, message: String) {
        match &self.spinner {
            Some(spinner) if !self.suppressed => spinner.set_message(message),
            _ => println!("{message}"),
        }
    }
}

fn spinner(message: String) -> ProgressBar {
    let style = ProgressStyle::with_template("{spinner:.cyan} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner());
    let spinner = ProgressBar::new_spinner().with_style(style);
    spinner.enable_steady_tick(Duration::from_millis(80));
    spinner.set_message(message);
    spinner
}

impl Reporter for SpinnerReporter {
    fn op_start(&mut self, tool: &Tool, mode: Mode) {
        self.suppressed = false;
        let verb = match mode {
            Mode::Install => "Installing",
            Mode::Uninstall => "Uninstalling",
        };
        self.spinner = Some(spinner(format!("{verb} {}...", tool.name.cyan())));
    }

    fn credential_prompt(&mut self, tool: &Tool) {
        self.suppressed = true;
        if let Some(spinner) = self.spinner.take() {
            spinner.finish_and_clear();
        }
        println!();
        println!(
            "{} {} requires sudo privileges. Please enter your password when prompted.",
            "⚠".yellow(),
            tool.name
        );
        println!();
    }

    fn phase(&mut self, message: &str) {
        self.set_message(message.cyan().to_string());
    }

    fn download(&mut self, tool: &Tool, percent: Option<f64>, size: Option<&str>) {
        let mut text = format!("Downloading {}...", tool.name);
        if let Some(percent) = percent {
            text.push_str(&format!(" {percent}%"));
        }
        match (percent, size) {
            (Some(_), Some(size)) => text.push_str(&format!(" ({size})")),
            (None, Some(size)) => text.push_str(&format!(" {size}")),
            _ => {}
        }
        self.set_message(text.cyan().to_string());
    }

    fn stderr_line(&mut self, line: &str) {
        // While the spinner owns the line, stderr is kept in the buffers
        // and only surfaces in the failure summary.
        if self.suppressed || self.spinner.is_none() {
            eprintln!("{line}");
        }
    }

    fn op_end(&mut self, result: &OpResult, mode: Mode) {
        if let Some(spinner) = self.spinner.take() {
            spinner.finish_and_clear();
        }
        self.suppressed = false;

        let (done, failed) = match mode {
            Mode::Install => ("Installed", "Failed to install"),
            Mode::Uninstall => ("Uninstalled", "Failed to uninstall"),
        };
        if result.success {
            println!("{} {} {}", "✓".green(), done, result.tool.name);
        } else {
            eprintln!("{} {} {}", "✗".red(), failed, result.tool.name);
        }
    }
}

impl Default for SpinnerReporter {
    fn default() -> Self {
        Self::new()
    }
}
