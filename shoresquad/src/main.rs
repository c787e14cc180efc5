//! ShoreSquad - beach-cleanup events, map and weather in the terminal
//!
//! # Usage
//!
//! ```sh
//! # Defaults: Singapore map, NEA weather, refresh every 30 minutes
//! shoresquad
//!
//! # Custom config and a faster refresh
//! shoresquad --config ./shoresquad.toml --refresh-minutes 5
//!
//! # Verbose logs
//! RUST_LOG=shoresquad=debug shoresquad --log-file /tmp/shoresquad.log
//! ```

use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use shoresquad::action::Action;
use shoresquad::components::Dashboard;
use shoresquad::effect::handle_effect;
use shoresquad::runtime::Runtime;
use shoresquad::state::{AppState, ANIM_TICK_MS};
use shoresquad::subscriptions::SubKey;
use shoresquad_core::{Config, WeatherClient};
use tracing::info;
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "shoresquad=info,shoresquad_core=info";

/// Beach-cleanup events on a map, with local weather
#[derive(Parser, Debug)]
#[command(name = "shoresquad", version)]
#[command(about = "Beach-cleanup events on a map, with local weather")]
struct Args {
    /// Config file (defaults to <config_dir>/shoresquad/config.toml if present)
    #[arg(long, short)]
    config: Option<PathBuf>,

    /// Weather refresh interval in minutes
    #[arg(long)]
    refresh_minutes: Option<u64>,

    /// Log file (defaults to <data_local_dir>/shoresquad/shoresquad.log)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Override the current-conditions endpoint
    #[arg(long)]
    current_url: Option<String>,

    /// Override the multi-day forecast endpoint
    #[arg(long)]
    forecast_url: Option<String>,
}

impl Args {
    /// Command-line values take precedence over the config file.
    fn apply(&self, config: &mut Config) {
        if let Some(minutes) = self.refresh_minutes {
            config.weather.refresh_minutes = minutes;
        }
        if let Some(url) = &self.current_url {
            config.weather.current_url = Some(url.clone());
        }
        if let Some(url) = &self.forecast_url {
            config.weather.forecast_url = Some(url.clone());
        }
    }
}

fn default_log_path() -> Option<PathBuf> {
    dirs::data_local_dir().map(|dir| dir.join("shoresquad").join("shoresquad.log"))
}

/// Log to a file; the terminal belongs to the UI.
fn init_logging(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create log directory {}", parent.display()))?;
    }
    let file = File::create(path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .with_target(true)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    if let Some(path) = args.log_file.clone().or_else(default_log_path) {
        init_logging(&path)?;
    }

    let mut config = Config::load(args.config.as_deref()).context("failed to load config")?;
    args.apply(&mut config);
    config.validate().context("invalid configuration")?;

    let state = AppState::from_config(&config).context("failed to initialize map")?;
    let client = WeatherClient::new(config.weather.endpoints(), config.weather.timeout())
        .context("failed to build HTTP client")?;
    info!(
        events = state.events.len(),
        current = %client.endpoints().current,
        forecast = %client.endpoints().forecast,
        refresh_minutes = config.weather.refresh_minutes,
        "starting"
    );

    // ===== Terminal setup =====
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, state, client, config.weather.refresh_interval()).await;

    // ===== Cleanup =====
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result.context("terminal I/O failed")
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    state: AppState,
    client: WeatherClient,
    refresh_interval: Duration,
) -> io::Result<()> {
    let mut runtime = Runtime::new(state);

    runtime
        .subscriptions()
        .interval(SubKey::Tick, Duration::from_millis(ANIM_TICK_MS), || {
            Action::Tick
        })
        // Fetch at startup, then on every interval
        .interval_immediate(SubKey::Refresh, refresh_interval, || Action::WeatherRefresh);

    let mut dashboard = Dashboard::new();
    runtime
        .run(terminal, &mut dashboard, |effect, tasks| {
            handle_effect(effect, tasks, &client)
        })
        .await
}
