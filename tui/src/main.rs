//! Pipes Entry Point
//!
//! Draws a wandering box-drawing pipe until any key is pressed.
//!
//! Usage:
//!   pipes [OPTIONS]
//!
//! Options:
//!   -v, --variant <VARIANT>  classic (full grid) or rainbow (colored, incremental)
//!   -s, --seed <SEED>        Seed for a reproducible pipe
//!   -c, --config <FILE>      Configuration file path

use std::io::{self, IsTerminal};

use anyhow::Context;
use clap::Parser;
use crossterm::event::EventStream;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use pipes_tui::cli::{init_logging, Args};
use pipes_tui::sink::{RawSink, TerminalSink};
use pipes_tui::{terminal, App};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(&args)?;
    let config = args.resolve_config()?;

    if !io::stdin().is_terminal() || !io::stdout().is_terminal() {
        eprintln!("Error: pipes requires a terminal (TTY)");
        eprintln!();
        eprintln!("Stdin or stdout is piped or redirected.");
        std::process::exit(1);
    }

    let alternate_screen = config.variant.uses_alternate_screen();
    terminal::install_panic_hook(alternate_screen);

    let mut stdout = io::stdout();
    terminal::setup(&mut stdout, alternate_screen).context("Failed to set up terminal")?;

    let result = run_app(&config, alternate_screen).await;

    terminal::restore(&mut io::stdout(), alternate_screen)
        .context("Failed to restore terminal")?;

    result
}

async fn run_app(config: &pipes_engine::PipesConfig, alternate_screen: bool) -> anyhow::Result<()> {
    let size = crossterm::terminal::size().context("Failed to read terminal size")?;
    let mut events = EventStream::new();
    let mut app = App::new(config);

    if alternate_screen {
        let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
        terminal.clear()?;
        let mut sink = TerminalSink::new(terminal);
        app.run(&mut sink, &mut events, size).await
    } else {
        let mut sink = RawSink::new(io::stdout());
        app.run(&mut sink, &mut events, size).await
    }
}
