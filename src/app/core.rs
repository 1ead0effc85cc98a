use tokio::sync::mpsc::UnboundedReceiver;

use crate::config::Config;
use crate::event::{DomainEvent, SurfaceEvent};
use crate::history::HistoryLog;
use crate::surface::BrowserSurface;

use super::state::SharedBrowserState;

/// The primary loop's world: the one live surface handle, the shared state
/// the GUI mutates, and the receive ends of both event channels.
pub struct App {
    pub(crate) state: SharedBrowserState,
    pub(crate) surface: Box<dyn BrowserSurface>,
    pub(crate) history: HistoryLog,
    pub(crate) control_rx: UnboundedReceiver<DomainEvent>,
    pub(crate) surface_rx: UnboundedReceiver<SurfaceEvent>,
}

impl App {
    pub fn new(
        config: &Config,
        surface: Box<dyn BrowserSurface>,
        control_rx: UnboundedReceiver<DomainEvent>,
        surface_rx: UnboundedReceiver<SurfaceEvent>,
    ) -> Self {
        Self {
            state: SharedBrowserState::default(),
            surface,
            history: HistoryLog::new(config.behavior.history_file.clone()),
            control_rx,
            surface_rx,
        }
    }

    pub fn state(&self) -> &SharedBrowserState {
        &self.state
    }

    /// Startup navigation for `--uri`; runs before the loop starts, on the
    /// same thread that will own the surface.
    pub fn navigate(&mut self, uri: &str) {
        self.surface.navigate(uri);
    }
}
