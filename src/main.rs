use std::process::ExitCode;

use clap::Parser;

mod cli;
mod clipboard;
mod error;
mod exits;
mod form;
mod logging;
mod pass;
mod settings;
mod terminal;
mod tui;

use cli::{Args, prompts};
use logging::Sink;
use settings::Settings;

fn main() -> ExitCode {
    terminal::reset_terminal();
    exits::install_handlers();
    exits::disable_core_dumps();

    let args = Args::parse();
    prompts::set_quiet(args.quiet);

    let interactive = !args.is_one_shot();
    let sink = match (&args.log, interactive) {
        (Some(path), _) => Sink::File(path.clone()),
        (None, true) => Sink::File(logging::default_path()),
        (None, false) => Sink::Stderr,
    };
    if let Some(msg) = logging::init(sink) {
        prompts::warn(&msg);
    }

    let settings = Settings::load(args.config.as_deref()).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "using default settings");
        prompts::warn(&format!("{e}; using defaults"));
        Settings::default()
    });

    let result = if interactive {
        tui::run(&settings)
            .map(|()| ExitCode::SUCCESS)
            .map_err(anyhow::Error::from)
    } else {
        cli::run(&args, &settings)
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(error = %e, "exiting");
            prompts::error(&format!("Error: {e:#}"));
            ExitCode::FAILURE
        }
    }
}
