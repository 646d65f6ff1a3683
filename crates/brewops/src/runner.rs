//! Streaming execution of brew install/uninstall commands.
//!
//! One invocation runs at a time: Homebrew keeps its own lock, so a second
//! concurrent invocation would only contend with the first. Within an
//! invocation, stdout and stderr are drained concurrently by two reader
//! threads feeding a single reducer that accumulates diagnostic text and
//! drives [`events`](crate::events) detection. No timeout is enforced;
//! some operations legitimately block on interactive credential entry.

use crate::Brew;
use crate::error::{Error, Result};
use crate::events;
use crate::types::{OpResult, PackageKind, Tool};
use std::io::{BufRead, BufReader, Read};
use std::process::{Command, Stdio};
use std::sync::mpsc::{self, Sender};
use std::thread::{self, JoinHandle};

/// Which operation to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// `brew install`
    Install,
    /// `brew uninstall`
    Uninstall,
}

impl Mode {
    /// The brew subcommand.
    pub fn verb(&self) -> &'static str {
        match self {
            Mode::Install => "install",
            Mode::Uninstall => "uninstall",
        }
    }

    /// Build the argument list for a tool. Casks pass an extra flag.
    pub fn args<'a>(&self, tool: &'a Tool) -> Vec<&'a str> {
        match tool.kind {
            PackageKind::Cask => vec![self.verb(), "--cask", tool.package.as_str()],
            PackageKind::Formula => vec![self.verb(), tool.package.as_str()],
        }
    }
}

/// Receives progress events while an invocation streams its output.
///
/// Implementations decide how events are rendered; the runner only decides
/// when they fire. [`NullReporter`] ignores everything.
pub trait Reporter {
    /// An invocation is starting.
    fn op_start(&mut self, tool: &Tool, mode: Mode);
    /// The child appears to be asking for credentials. Fired at most once
    /// per invocation.
    fn credential_prompt(&mut self, tool: &Tool);
    /// A `==>` phase header was seen.
    fn phase(&mut self, message: &str);
    /// Download progress was seen. Only fired after the invocation has
    /// entered its download phase.
    fn download(&mut self, tool: &Tool, percent: Option<f64>, size: Option<&str>);
    /// A non-empty stderr line was seen.
    fn stderr_line(&mut self, line: &str);
    /// The invocation finished.
    fn op_end(&mut self, result: &OpResult, mode: Mode);
}

/// Reporter that ignores all events.
pub struct NullReporter;

impl Reporter for NullReporter {
    fn op_start(&mut self, _tool: &Tool, _mode: Mode) {}
    fn credential_prompt(&mut self, _tool: &Tool) {}
    fn phase(&mut self, _message: &str) {}
    fn download(&mut self, _tool: &Tool, _percent: Option<f64>, _size: Option<&str>) {}
    fn stderr_line(&mut self, _line: &str) {}
    fn op_end(&mut self, _result: &OpResult, _mode: Mode) {}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Source {
    Stdout,
    Stderr,
}

/// Runs install/uninstall commands against one executable.
pub struct Runner {
    program: String,
}

impl Runner {
    /// A runner for a located Homebrew installation.
    pub fn new(brew: &Brew) -> Self {
        Self {
            program: brew.path().to_string(),
        }
    }

    /// A runner for an arbitrary executable. Intended for tests and fakes.
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Run one operation. Never fails as a function: spawn errors, non-zero
    /// exits and stream errors all become a failed [`OpResult`].
    pub fn run(&self, tool: &Tool, mode: Mode, reporter: &mut dyn Reporter) -> OpResult {
        reporter.op_start(tool, mode);
        let result = match self.spawn_and_drain(tool, mode, reporter) {
            Ok(result) => result,
            Err(err) => OpResult::failed(tool.clone(), err.to_string()),
        };
        reporter.op_end(&result, mode);
        result
    }

    /// Run a batch strictly sequentially, preserving input order.
    ///
    /// One tool's failure never prevents attempting the rest.
    pub fn run_all(
        &self,
        tools: &[Tool],
        mode: Mode,
        reporter: &mut dyn Reporter,
    ) -> Vec<OpResult> {
        tools
            .iter()
            .map(|tool| self.run(tool, mode, reporter))
            .collect()
    }

    fn spawn_and_drain(
        &self,
        tool: &Tool,
        mode: Mode,
        reporter: &mut dyn Reporter,
    ) -> Result<OpResult> {
        let args = mode.args(tool);
        log::debug!("running {} {}", self.program, args.join(" "));

        // stdin stays on the terminal so sudo prompts reach the user.
        let mut child = Command::new(&self.program)
            .args(&args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()?;

        let stdout = child.stdout.take().ok_or_else(|| Error::CommandFailed {
            message: "child stdout was not captured".to_string(),
            stderr: String::new(),
        })?;
        let stderr = child.stderr.take().ok_or_else(|| Error::CommandFailed {
            message: "child stderr was not captured".to_string(),
            stderr: String::new(),
        })?;

        let (tx, rx) = mpsc::channel();
        let out_reader = spawn_line_reader(stdout, Source::Stdout, tx.clone());
        let err_reader = spawn_line_reader(stderr, Source::Stderr, tx);

        let mut stdout_buf = String::new();
        let mut stderr_buf = String::new();
        // Per-invocation detection state. The credential prompt fires at
        // most once; downloading latches on and is never reset.
        let mut credential_prompted = false;
        let mut downloading = false;

        for (source, line) in rx {
            let buf = match source {
                Source::Stdout => &mut stdout_buf,
                Source::Stderr => &mut stderr_buf,
            };
            buf.push_str(&line);
            buf.push('\n');

            let scan = events::scan_line(&line);

            if scan.credential_prompt && !credential_prompted {
                credential_prompted = true;
                reporter.credential_prompt(tool);
            }
            if scan.downloading {
                downloading = true;
            }
            if downloading && (scan.percent.is_some() || scan.size.is_some()) {
                reporter.download(tool, scan.percent, scan.size.as_deref());
            }
            if let Some(phase) = &scan.phase {
                reporter.phase(phase);
            }
            if source == Source::Stderr && !line.trim().is_empty() {
                reporter.stderr_line(&line);
            }
        }

        let _ = out_reader.join();
        let _ = err_reader.join();
        let status = child.wait()?;

        if status.success() {
            return Ok(OpResult::ok(tool.clone()));
        }

        let error = if !stderr_buf.trim().is_empty() {
            stderr_buf.trim_end().to_string()
        } else if !stdout_buf.trim().is_empty() {
            stdout_buf.trim_end().to_string()
        } else {
            match status.code() {
                Some(code) => format!("exit code {code}"),
                None => "terminated by signal".to_string(),
            }
        };
        Ok(OpResult::failed(tool.clone(), error))
    }
}

fn spawn_line_reader(
    stream: impl Read + Send + 'static,
    source: Source,
    tx: Sender<(Source, String)>,
) -> JoinHandle<()> {
    thread::spawn(move || {
        let reader = BufReader::new(stream);
        for line in reader.lines() {
            let Ok(line) = line else { break };
            if tx.send((source, line)).is_err() {
                break;
            }
        }
    })
}
