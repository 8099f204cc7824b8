//! Keypad calculator binary
//!
//! Without `--press` this opens the terminal keypad; with it, the key
//! script runs headless and the result is printed.

use std::io;
use std::process::ExitCode;

use clap::Parser;
use crossterm::event::{self, Event};
use keypad_calculator::cli::Cli;
use keypad_calculator::config::CalcConfig;
use keypad_calculator::error::AppResult;
use keypad_calculator::headless::{self, OutputFormat};
use keypad_calculator::logging::{self, LogTarget};
use keypad_calculator::tui::{self, CalculatorApp, InputHandler, TerminalGuard};
use ratatui::{backend::Backend, backend::CrosstermBackend, layout::Rect, Terminal};
use tracing::{debug, info};

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> AppResult<()> {
    let cli = Cli::parse();
    let config = cli.load_config()?;
    logging::init(
        LogTarget::select(cli.log_file.as_deref(), cli.is_headless()),
        &config.log_filter,
        config.log_json,
    )?;
    debug!(?config, "configuration loaded");

    match &cli.press {
        Some(script) => {
            let format = OutputFormat::from_flags(cli.steps, cli.json);
            headless::run(&config, script, format, &mut io::stdout().lock())
        }
        None => run_tui(&config),
    }
}

fn run_tui(config: &CalcConfig) -> AppResult<()> {
    info!("starting terminal keypad");

    // Restores raw mode and the main screen on drop, whatever fails below
    let guard = TerminalGuard::enter(io::stdout())?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

    let result = run_app(&mut terminal, CalculatorApp::with_config(config));

    drop(terminal);
    drop(guard);
    info!("terminal keypad closed");
    result
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, mut app: CalculatorApp) -> AppResult<()> {
    let input_handler = InputHandler::new();
    let mut dirty = true;

    while !app.should_quit() {
        if dirty {
            terminal.draw(|f| tui::render(&app, f))?;
        }

        let event = event::read()?;
        let action = input_handler.handle_event(&event);
        let size = terminal.size()?;
        let regions = tui::layout(Rect::new(0, 0, size.width, size.height));
        dirty = app.handle_action(action, regions.keypad) || matches!(event, Event::Resize(..));
    }

    Ok(())
}
