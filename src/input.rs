//! Raw keystroke navigation between wizard screens.
//!
//! dialoguer owns the terminal while a prompt is active, so the reserved
//! navigation keys ('b' to go back, 'q' to quit) are read between prompts
//! through console's raw key reader, layered on top of the prompts rather
//! than patched into a shared event source. The raw reader reports Ctrl-C
//! as [`Key::CtrlC`] instead of raising SIGINT, so the interrupt exit runs
//! our cleanup. Ctrl-C inside a dialoguer prompt still terminates the
//! process through SIGINT, which the shell reports as 130 as well.

use crate::ui;
use anyhow::Result;
use console::{Key, Term};

/// Exit code used when the user interrupts with Ctrl-C.
pub const INTERRUPT_EXIT_CODE: i32 = 130;

/// Where to go after a category checklist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Nav {
    /// Move on to the next category
    Continue,
    /// Revisit the previous category
    Back,
}

/// What a recognized keystroke means. Unrecognized keys map to `None` and
/// the read loops keep waiting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Signal {
    Continue,
    Back,
    Quit,
    Interrupt,
}

fn nav_signal(key: &Key, allow_back: bool) -> Option<Signal> {
    match key {
        Key::Enter => Some(Signal::Continue),
        Key::Char('b' | 'B') if allow_back => Some(Signal::Back),
        Key::CtrlC => Some(Signal::Interrupt),
        _ => None,
    }
}

fn intro_signal(key: &Key) -> Option<Signal> {
    match key {
        Key::Enter => Some(Signal::Continue),
        Key::Char('q' | 'Q') => Some(Signal::Quit),
        Key::CtrlC => Some(Signal::Interrupt),
        _ => None,
    }
}

/// Wait for Enter (continue) or, when allowed, 'b' (back).
///
/// Ctrl-C terminates the process immediately. All other keys are ignored.
pub fn read_nav(term: &Term, allow_back: bool) -> Result<Nav> {
    loop {
        match nav_signal(&term.read_key_raw()?, allow_back) {
            Some(Signal::Continue) => return Ok(Nav::Continue),
            Some(Signal::Back) => return Ok(Nav::Back),
            Some(Signal::Interrupt) => exit_interrupted(term),
            _ => {}
        }
    }
}

/// Wait for Enter on the intro screen; 'q' exits cleanly with code 0.
pub fn read_continue_or_quit(term: &Term) -> Result<()> {
    loop {
        match intro_signal(&term.read_key_raw()?) {
            Some(Signal::Continue) => return Ok(()),
            Some(Signal::Quit) => {
                println!();
                ui::warn("Exiting...");
                std::process::exit(0);
            }
            Some(Signal::Interrupt) => exit_interrupted(term),
            _ => {}
        }
    }
}

/// Terminate immediately on user interrupt, with no further side effects.
fn exit_interrupted(term: &Term) -> ! {
    let _ = term.show_cursor();
    println!();
    std::process::exit(INTERRUPT_EXIT_CODE);
}
