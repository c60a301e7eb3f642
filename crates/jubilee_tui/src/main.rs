//! Terminal tic-tac-toe for two players at one keyboard.

#![warn(missing_docs)]

mod app;
mod confetti;
mod cues;
mod input;
mod ui;

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::path::PathBuf;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;

use app::App;

/// Command-line options.
#[derive(Debug, Parser)]
#[command(name = "jubilee", about = "Two-player tic-tac-toe with confetti")]
struct Cli {
    /// Disable the terminal-bell sound cues.
    #[arg(long)]
    mute: bool,

    /// Number of confetti particles in the victory burst.
    #[arg(long, default_value_t = 120)]
    pieces: usize,

    /// Log file path (the TUI owns the screen, so logs go to a file).
    #[arg(long, default_value = "jubilee_tui.log")]
    log_file: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Log to a file to avoid interfering with the TUI.
    let log_file = std::fs::File::create(&cli.log_file)?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .init();

    info!(pieces = cli.pieces, mute = cli.mute, "starting jubilee tui");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(cli.pieces, !cli.mute);
    let res = run(&mut terminal, &mut app);
    app.shutdown();

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;

    res
}

/// Draw/input/tick loop. Returns when the user quits.
fn run<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|frame| app.draw(frame))?;

        if event::poll(Duration::from_millis(33))? {
            match event::read()? {
                Event::Key(key) if key.kind != KeyEventKind::Release => {
                    if !app.on_key(key.code) {
                        info!("user quit");
                        return Ok(());
                    }
                }
                Event::Mouse(mouse) => app.on_mouse(mouse),
                // The next draw reads the new frame area.
                Event::Resize(..) => {}
                _ => {}
            }
        }

        app.tick();
    }
}
