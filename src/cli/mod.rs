//! One-shot command-line generation.

mod args;
pub mod prompts;

use std::io::Write;
use std::process::ExitCode;

use crate::clipboard::{Clipboard, SystemClipboard};
use crate::form::Form;
use crate::pass::{Sampler, Zxcvbn, charset};
use crate::settings::Settings;

pub use args::Args;

/// Generate through the same form the interactive mode uses.
pub fn run(args: &Args, settings: &Settings) -> anyhow::Result<ExitCode> {
    let config = args.generation_config(settings);

    let clipboard = if args.board {
        SystemClipboard::new()
    } else {
        SystemClipboard::disabled()
    };
    let to_clipboard = args.board && clipboard.is_available();
    if args.board && !to_clipboard {
        prompts::clipboard_unavailable();
    }

    let mut form = Form::new(config, Sampler::os(), Zxcvbn, clipboard);
    if !form.can_submit() {
        prompts::no_classes();
        return Ok(ExitCode::from(2));
    }

    let bits = charset::build(&config.classes).entropy_bits(config.length() as usize);
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    for _ in 0..args.number.unwrap_or(1) {
        form.submit();
        if !to_clipboard && let Some(password) = form.password() {
            writeln!(out, "{}", password.value())?;
            out.flush()?;
        }
        if let Some(strength) = form.strength() {
            prompts::strength(strength, bits);
        }
    }

    if to_clipboard && form.copy() {
        prompts::clipboard_copied();
    }

    Ok(ExitCode::SUCCESS)
}
