//! Terminal output utilities.
//!
//! Box-drawing line builders and ANSI helpers. Builders return strings so the
//! caller can position each line.

use crossterm::terminal::disable_raw_mode;
use std::io::{self, IsTerminal, Write};

// ============================================================================
// ANSI Color/Style Constants
// ============================================================================

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const REVERSE: &str = "\x1b[7m";
pub const DIM: &str = "\x1b[90m";
pub const RED: &str = "\x1b[38;5;9m";
pub const GREEN: &str = "\x1b[38;5;10m";
pub const YELLOW: &str = "\x1b[38;5;11m";

// ============================================================================
// Terminal Control
// ============================================================================

/// Leave raw mode and clear attributes left over from a previous run.
///
/// Writes nothing when stdout is redirected.
pub fn reset_terminal() {
    let _ = disable_raw_mode();
    let mut out = io::stdout();
    if out.is_terminal() {
        let _ = write!(out, "{RESET}");
        let _ = out.flush();
    }
}

// ============================================================================
// Box Drawing
// ============================================================================

pub const BOX_WIDTH: usize = 48;

/// Columns available between `│ ` and ` │`.
pub const INNER_WIDTH: usize = BOX_WIDTH - 4;

/// Horizontal edge with an optional title: ┌─ Title ──────┐
fn edge(left: char, title: &str, right: char) -> String {
    let label = if title.is_empty() {
        String::new()
    } else {
        format!("─ {title} ")
    };
    let fill = (BOX_WIDTH - 2).saturating_sub(label.chars().count());
    format!("{left}{label}{}{right}", "─".repeat(fill))
}

/// Content row with `before` and `after` spaces around `content`.
fn row(before: usize, content: &str, after: usize) -> String {
    format!("│ {}{content}{} │", " ".repeat(before), " ".repeat(after))
}

fn slack(content_width: usize) -> usize {
    INNER_WIDTH.saturating_sub(content_width)
}

pub fn box_top(title: &str) -> String {
    edge('┌', title, '┐')
}

pub fn box_rule() -> String {
    edge('├', "", '┤')
}

pub fn box_bottom() -> String {
    edge('└', "", '┘')
}

/// Left-aligned content: │ content        │
pub fn box_line(content: &str) -> String {
    row(0, content, slack(console_width(content)))
}

/// Text pinned to both edges: │ left    right │
pub fn box_split(left: &str, right: &str) -> String {
    let gap = slack(console_width(left) + console_width(right));
    row(0, &format!("{left}{}{right}", " ".repeat(gap)), 0)
}

/// Centered content, extra space on the right: │   content    │
pub fn box_line_center(content: &str) -> String {
    let total = slack(console_width(content));
    row(total / 2, content, total - total / 2)
}

/// Display width ignoring ANSI escape codes.
pub fn console_width(s: &str) -> usize {
    let mut width = 0;
    let mut in_escape = false;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape {
            if c == 'm' {
                in_escape = false;
            }
        } else {
            width += 1;
        }
    }
    width
}

/// Wrap `text` in `style` when `on`.
pub fn styled(text: &str, style: &str, on: bool) -> String {
    if on {
        format!("{style}{text}{RESET}")
    } else {
        text.to_string()
    }
}
