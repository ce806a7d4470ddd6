//! Centralized warning and status messages for CLI output.
//!
//! Everything except errors honours `--quiet`.

use std::sync::atomic::{AtomicBool, Ordering};

use crate::pass::Strength;
use crate::terminal::{RED, RESET, YELLOW};

static QUIET: AtomicBool = AtomicBool::new(false);

pub fn set_quiet(quiet: bool) {
    QUIET.store(quiet, Ordering::Relaxed);
}

fn quiet() -> bool {
    QUIET.load(Ordering::Relaxed)
}

/// Print a warning message to stderr (yellow)
pub fn warn(msg: &str) {
    if !quiet() {
        eprintln!("{YELLOW}{msg}{RESET}");
    }
}

/// Print an error message to stderr (red)
pub fn error(msg: &str) {
    eprintln!("{RED}{msg}{RESET}");
}

/// Print the strength of the last password to stderr
pub fn strength(strength: Strength, bits: f64) {
    if !quiet() {
        eprintln!("strength: {} ({:.1} bits)", strength.label, bits);
    }
}

/// Print clipboard copied confirmation
pub fn clipboard_copied() {
    if !quiet() {
        println!("*** -COPIED TO CLIPBOARD- ***");
    }
}

/// Print clipboard fallback warning
pub fn clipboard_unavailable() {
    warn("Clipboard unavailable, printing to terminal instead");
}

/// Print empty class set error
pub fn no_classes() {
    error("No character classes enabled: pass --lowercase, --uppercase, --digits or --symbols");
}
