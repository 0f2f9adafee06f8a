//! natality-tui - terminal dashboard over regional monthly birth counts.

mod app;
mod event;
mod ui;
mod view;
mod widgets;

use std::io;
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use crossterm::{
    event::Event,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use dataset_facade::{CsvTableSource, DatasetConfig};

use app::App;
use event::{handle_key_event, poll_event};
use ui::draw_ui;

#[derive(Parser)]
#[command(
    name = "natality-tui",
    version,
    about = "Interactive dashboard over regional monthly birth counts"
)]
struct Args {
    /// Path to the source CSV file
    #[arg(short, long)]
    data: Option<PathBuf>,

    /// Event poll interval in milliseconds
    #[arg(long, default_value_t = 100)]
    tick_ms: u64,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing();

    // Load before touching the terminal so load errors print normally
    let config = args.data.map(DatasetConfig::new).unwrap_or_default();
    let source = CsvTableSource::new(config);
    let table = match dataset_facade::shared_table(&source) {
        Ok(table) => table,
        Err(err) => {
            eprintln!("Failed to load data: {err}");
            std::process::exit(1);
        }
    };

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app state
    let mut app = App::new(table);

    // Main loop
    let result = run_app(&mut terminal, &mut app, Duration::from_millis(args.tick_ms));

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = result {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }

    Ok(())
}

fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    tick_rate: Duration,
) -> anyhow::Result<()> {
    loop {
        // Draw UI
        terminal.draw(|frame| draw_ui(frame, app))?;

        // A requested fit runs after the draw, so the busy frame is visible
        // while the model trains
        app.run_pending_forecast();

        // Clear expired status messages
        app.clear_expired_status();

        // Handle events
        if let Some(event) = poll_event(tick_rate)? {
            match event {
                Event::Key(key) => handle_key_event(app, key),
                Event::Resize(_, _) => {} // Terminal will redraw automatically
                _ => {}
            }
        }

        // Check if we should quit
        if app.should_quit {
            break;
        }
    }

    Ok(())
}

fn init_tracing() {
    // Opt-in: a subscriber writing to stderr would fight the alternate screen
    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::registry()
            .with(EnvFilter::from_default_env())
            .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
            .init();
    }
}
