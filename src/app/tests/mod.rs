mod serialization;

use std::path::PathBuf;
use std::process;
use std::time::{SystemTime, UNIX_EPOCH};

use tokio::sync::mpsc::{UnboundedSender, unbounded_channel};

use crate::app::App;
use crate::command::parse_line;
use crate::config::Config;
use crate::event::{DomainEvent, SurfaceEvent};
use crate::surface::HeadlessSurface;

fn unique_temp_path(suffix: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock should be after unix epoch")
        .as_nanos();
    let mut path = std::env::temp_dir();
    path.push(format!("ebb_app_{suffix}_{}_{}", process::id(), nanos));
    path
}

fn control_invocation(line: &str) -> DomainEvent {
    DomainEvent::Control(
        parse_line(line)
            .expect("line should parse")
            .expect("line should dispatch"),
    )
}

fn app_with_history(
    history: Option<PathBuf>,
) -> (
    App,
    UnboundedSender<DomainEvent>,
    UnboundedSender<SurfaceEvent>,
) {
    let (surface_tx, surface_rx) = unbounded_channel();
    let (control_tx, control_rx) = unbounded_channel();
    let mut config = Config::default();
    config.behavior.history_file = history;
    let surface = HeadlessSurface::new(surface_tx.clone());
    let app = App::new(&config, Box::new(surface), control_rx, surface_rx);
    (app, control_tx, surface_tx)
}
