//! deckicons CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use deckicons::cli::{Cli, CommandDispatcher};
use deckicons::ui::{create_ui, theme, OutputMode};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
///
/// Logs go to stderr; stdout carries rendered markup only.
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("deckicons=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("deckicons=info"))
    };

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("deckicons starting with args: {:?}", cli);

    if cli.no_color {
        theme::disable_colors();
    }

    let output_mode = OutputMode::from_flags(cli.quiet, cli.silent);
    let is_interactive = !cli.non_interactive && console::Term::stderr().is_term();
    let mut ui = create_ui(is_interactive, output_mode);

    let working_dir = std::env::current_dir().unwrap_or_default();
    let dispatcher = CommandDispatcher::new(working_dir);

    match dispatcher.dispatch(&cli, ui.as_mut()) {
        Ok(result) => ExitCode::from(result.exit_code as u8),
        Err(e) => {
            ui.error(&format!("Error: {}", e));
            if e.is_config_error() {
                ExitCode::from(2)
            } else {
                ExitCode::from(1)
            }
        }
    }
}
