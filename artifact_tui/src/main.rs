//! artifact_tui - Terminal artifact comparator for Summoners War monsters

mod app;
mod config;
mod logging;
mod lookup;
mod swarfarm;
mod ui;

use anyhow::{Context, Result};
use app::App;
use artifact_core::catalog::{CreatureLookup, LocalCatalog};
use clap::Parser;
use config::AppConfig;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use swarfarm::SwarfarmClient;

/// Compare two artifact builds on a Summoners War monster
#[derive(Parser, Debug)]
#[command(name = "artifact_tui")]
#[command(about = "Compare two artifact builds on a Summoners War monster", long_about = None)]
#[command(version)]
struct Cli {
    /// TOML configuration file (bundled defaults when omitted)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Use the local JSON catalog instead of the Swarfarm API
    #[arg(long)]
    offline: bool,

    /// Local catalog file, overrides `data.monsters_file`
    #[arg(long)]
    data: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Flushes the log file on exit
    let _log_guard = logging::init().context("failed to set up logging")?;

    let config = AppConfig::load(cli.config.as_deref()).context("failed to load configuration")?;
    let lookup = build_lookup(&cli, &config)?;

    // Lookups run here; the terminal loop stays on the main thread
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .thread_name("lookup")
        .enable_all()
        .build()
        .context("failed to start async runtime")?;

    let mut app = App::new(config, lookup, runtime.handle().clone());
    let result = run(&mut app);

    runtime.shutdown_background();
    result
}

fn build_lookup(cli: &Cli, config: &AppConfig) -> Result<Arc<dyn CreatureLookup>> {
    if cli.offline {
        let path = cli.data.clone().unwrap_or_else(|| config.data.monsters_file.clone());
        let catalog = LocalCatalog::load(&path)
            .with_context(|| format!("failed to load catalog {}", path.display()))?;
        tracing::info!(path = %path.display(), "offline mode");
        Ok(Arc::new(catalog))
    } else {
        let client = SwarfarmClient::new(&config.swarfarm).context("failed to create HTTP client")?;
        tracing::info!(api_root = %config.swarfarm.api_root, "online mode");
        Ok(Arc::new(client))
    }
}

fn run(app: &mut App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = event_loop(&mut terminal, app);

    // Restore terminal even when the loop failed
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;

    result
}

fn event_loop(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    while !app.should_quit {
        terminal.draw(|f| ui::draw(f, app))?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                // Any key dismisses the last status message
                app.status_message = None;

                match (key.code, key.modifiers) {
                    (KeyCode::Char('c'), KeyModifiers::CONTROL)
                    | (KeyCode::Char('q'), KeyModifiers::CONTROL) => {
                        app.should_quit = true
                    }
                    (KeyCode::Tab, _) => app.next_tab(),
                    (KeyCode::BackTab, _) => app.prev_tab(),
                    (KeyCode::F(n @ 1..=5), _) => app.set_tab(n as usize - 1),
                    (KeyCode::Up, _) => app.on_up(),
                    (KeyCode::Down, _) => app.on_down(),
                    (KeyCode::Left, _) => app.on_left(),
                    (KeyCode::Right, _) => app.on_right(),
                    (KeyCode::Enter, _) => app.on_enter(),
                    (KeyCode::Esc, _) => app.on_escape(),
                    (KeyCode::Backspace, _) => app.on_backspace(),
                    (KeyCode::Char(c), KeyModifiers::NONE)
                    | (KeyCode::Char(c), KeyModifiers::SHIFT) => {
                        app.on_char(c)
                    }
                    _ => {}
                }
            }
        }

        app.poll_lookups();
    }

    tracing::info!("exiting");
    Ok(())
}
