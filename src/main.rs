use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEvent},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{io, sync::Arc, time::Duration};
use tokio::sync::mpsc::UnboundedReceiver;
use tracing::{debug, info};

use waterfall::config::{self, Config};
use waterfall::model::UiModel;
use waterfall::{Coordinator, DataController, Settled, ViewEvent};

/// Waterfall feed browser
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable debug logging to the temp dir (waterfall-debug.log)
    #[arg(short, long)]
    debug: bool,

    /// Enable vim keybindings (j/k, ^D/U, gg/G)
    #[arg(long)]
    vim: bool,

    /// Path to config file (default: platform-specific, see docs)
    #[arg(short, long)]
    config: Option<String>,

    /// Override the number of columns from the config
    #[arg(long)]
    columns: Option<usize>,
}

mod app;
mod handlers;
mod ui;

use ui::grid::Grid;

pub struct App {
    pub coordinator: Coordinator,
    pub ui: UiModel,

    /// Grid laid out during the last frame
    pub grid: Grid,

    settled_rx: UnboundedReceiver<Settled>,
    end_reached_threshold: u16,

    /// Feed generation the end-of-content check last ran against
    checked_generation: u64,
    /// Set by input that moved the viewport
    viewport_moved: bool,
    /// Selection should be scrolled into view once the grid is known
    reveal_pending: bool,
    /// First pull at the top was seen; the next one releases
    pub pull_armed: bool,
}

impl App {
    fn new(config: Config, viewport_width: f32) -> Result<Self> {
        let params = config
            .layout
            .to_params()
            .context("Invalid layout section in config")?;
        let provider = config
            .source
            .build_provider()
            .context("Failed to set up feed source")?;

        let controller = Arc::new(DataController::new(provider));
        let (coordinator, settled_rx) =
            Coordinator::new(controller, params, config.labels, viewport_width);

        Ok(App {
            coordinator,
            ui: UiModel::new(config.vim_mode),
            grid: Grid::default(),
            settled_rx,
            end_reached_threshold: config.end_reached_threshold,
            checked_generation: 0,
            viewport_moved: false,
            reveal_pending: false,
            pull_armed: false,
        })
    }

    /// Handle keyboard input
    /// Delegated to handlers::keyboard module
    fn handle_key(&mut self, key: KeyEvent) {
        handlers::handle_key(self, key);
    }
}

fn load_config(args: &Args) -> Result<Config> {
    let mut config = match config::find_config_path(args.config.as_deref())? {
        Some(path) => {
            info!(path = %path.display(), "loading config");
            Config::load(&path)?
        }
        None => {
            info!("no config file found, using defaults");
            Config::default()
        }
    };

    // Override config with CLI flags
    if args.vim {
        config.vim_mode = true;
    }
    if let Some(columns) = args.columns {
        config.layout.columns = columns;
    }

    Ok(config)
}

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command-line arguments
    let args = Args::parse();

    // Guard flushes the log file on drop
    let _log_guard = waterfall::logging::init(args.debug);
    debug!("debug mode enabled");

    let config = load_config(&args)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app with error handler
    let width = terminal.size()?.width as f32;
    let result = match App::new(config, width) {
        Ok(mut app) => run_app(&mut terminal, &mut app).await,
        Err(e) => Err(e),
    };

    // Cleanup terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Return result after cleanup
    result
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()> {
    app.dispatch(ViewEvent::Mounted);

    loop {
        // Apply finished fetches (non-blocking)
        while let Ok(settled) = app.settled_rx.try_recv() {
            app.handle_settled(settled);
        }

        // Always render, then check the end against the fresh grid
        terminal.draw(|f| {
            ui::render(f, app);
        })?;

        if app.ui.should_quit {
            break;
        }

        app.request_more_if_near_end();

        // Short poll so spawned fetches show up promptly
        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) => app.handle_key(key),
                Event::Resize(..) => app.viewport_moved = true,
                _ => {}
            }
        }
    }

    Ok(())
}
