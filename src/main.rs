use std::path::{Path, PathBuf};

use clap::Parser;
use tokio::sync::mpsc::unbounded_channel;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use ebb::app::App;
use ebb::bindings::BindingRegistry;
use ebb::channel::{ControlChannelEndpoint, ControlListener};
use ebb::config::{BehaviorConfig, Config};
use ebb::error::{AppError, AppResult};
use ebb::event::DomainEvent;
use ebb::surface::{BrowserSurface, HeadlessSurface};

#[derive(Debug, Parser)]
#[command(
    name = "ebb",
    about = "Minimal browser shell driven over a named control channel"
)]
struct Cli {
    /// Uri to load on startup.
    #[arg(short, long)]
    uri: Option<String>,

    /// Be verbose.
    #[arg(short, long)]
    verbose: bool,

    /// Explicit config file path.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main(flavor = "multi_thread")]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(err) = run(cli).await {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(cli: Cli) -> AppResult<()> {
    let config = load_config(cli.config.as_deref());
    log_behavior(&config);

    let registry = match BindingRegistry::load(&config) {
        Ok(registry) => registry,
        // A misconfigured binding section degrades to no bindings; blowing
        // the capacity bound must be fixed by the user.
        Err(err @ AppError::CapacityExceeded { .. }) => return Err(err),
        Err(err) => {
            warn!("{err}; continuing without bindings");
            BindingRegistry::default()
        }
    };
    registry.log_summary();

    let (surface_tx, surface_rx) = unbounded_channel();
    let (control_tx, control_rx) = unbounded_channel();
    let surface = HeadlessSurface::new(surface_tx);
    let window_id = surface.window_id();
    info!(window_id, pid = std::process::id(), "starting");

    let endpoint = ControlChannelEndpoint::at(&config.fifo_dir(), window_id);
    let listener = ControlListener::spawn(endpoint, control_tx.clone());

    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            let _ = control_tx.send(DomainEvent::Shutdown);
        }
    });

    let mut app = App::new(&config, Box::new(surface), control_rx, surface_rx);
    if let Some(uri) = cli.uri.as_deref() {
        app.navigate(uri);
    }
    app.run().await?;

    listener.shutdown().await;
    Ok(())
}

fn load_config(path: Option<&Path>) -> Config {
    let loaded = match path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    };
    match loaded {
        Ok(config) => {
            info!("config loaded");
            config
        }
        Err(err) => {
            warn!("{err}; using defaults");
            Config::default()
        }
    }
}

fn log_behavior(config: &Config) {
    let behavior: &BehaviorConfig = &config.behavior;
    match &behavior.history_file {
        Some(path) => info!(path = %path.display(), "history logging enabled"),
        None => info!("history logging disabled"),
    }
    match &behavior.download_handler {
        Some(handler) => info!(handler = %handler, "download handler"),
        None => info!("download handler disabled"),
    }
    info!(dir = %config.fifo_dir().display(), "fifo directory");
    if behavior.always_insert_mode {
        info!("always insert mode enabled");
    } else {
        info!("always insert mode disabled");
    }
    match &behavior.modkey {
        Some(modkey) => info!(modkey = %modkey, "mod key"),
        None => info!("mod key disabled"),
    }
}
