//! cmdoc CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use cmdoc::cli::{Cli, CommandDispatcher, Session};
use cmdoc::config::load_settings;
use cmdoc::tools::{parse_system_path, Capabilities, SystemRunner};
use cmdoc::ui::{OutputMode, TerminalScreen, TerminalUI, UserInterface};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is WARN
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("cmdoc=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("cmdoc=warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("cmdoc starting with args: {:?}", cli);

    let output_mode = if cli.quiet {
        OutputMode::Quiet
    } else {
        OutputMode::Normal
    };
    let mut ui = TerminalUI::new(output_mode, cli.no_color);

    let settings = match load_settings(cli.config.as_deref()) {
        Ok(settings) => settings,
        Err(e) => {
            ui.error(&format!("Error: {}", e));
            return ExitCode::from(1);
        }
    };

    // Probed once; every component consults the same table.
    let path_entries = parse_system_path();
    let caps = Capabilities::probe(&path_entries);

    let mut screen = TerminalScreen::new(ui.theme().clone(), &settings.fuzzy.prompt);
    let dispatcher =
        CommandDispatcher::new(caps, settings, path_entries).prefer_builtin_filter(cli.no_fzf);

    let mut runner = SystemRunner::new();
    let mut session = Session {
        runner: &mut runner,
        ui: &mut ui,
        screen: &mut screen,
    };

    match dispatcher.dispatch(&cli, &mut session) {
        Ok(result) => ExitCode::from(result.exit_code),
        Err(e) => {
            ui.error(&format!("Error: {}", e));
            ExitCode::from(1)
        }
    }
}
