use tokio::sync::mpsc::UnboundedReceiver;
use tracing::{debug, info, warn};

use crate::command;
use crate::error::AppResult;
use crate::event::{DomainEvent, SurfaceEvent};

use super::core::App;

pub(crate) enum LoopControl {
    Continue,
    Break,
}

enum WaitEvent {
    Surface(SurfaceEvent),
    Domain(DomainEvent),
    Closed,
}

impl App {
    /// Single-consumer event loop and the serialization point for all
    /// browser state: control-channel invocations and surface callbacks are
    /// interleaved here, never applied concurrently.
    pub async fn run(&mut self) -> AppResult<()> {
        loop {
            let waited = wait_next_event(&mut self.surface_rx, &mut self.control_rx).await;
            match waited {
                WaitEvent::Surface(event) => self.handle_surface_event(event),
                WaitEvent::Domain(event) => {
                    if matches!(self.handle_domain_event(event), LoopControl::Break) {
                        break;
                    }
                }
                WaitEvent::Closed => break,
            }
        }
        Ok(())
    }

    pub(crate) fn handle_domain_event(&mut self, event: DomainEvent) -> LoopControl {
        match event {
            DomainEvent::Control(invocation) => {
                if let Err(err) = command::dispatch(&invocation, self.surface.as_mut()) {
                    warn!("{err}");
                }
                LoopControl::Continue
            }
            DomainEvent::Shutdown => {
                info!("shutdown requested");
                LoopControl::Break
            }
        }
    }

    pub(crate) fn handle_surface_event(&mut self, event: SurfaceEvent) {
        match event {
            SurfaceEvent::TitleChanged(title) => {
                self.state.title = title;
                self.refresh_window_title();
            }
            SurfaceEvent::ProgressChanged(progress) => {
                self.state.load_progress = progress.min(100);
                self.refresh_window_title();
            }
            SurfaceEvent::LoadCommitted(uri) => {
                self.history.record(&uri);
                info!(uri = %uri, "load committed");
                self.state.uri = Some(uri);
            }
        }
    }

    fn refresh_window_title(&self) {
        debug!(title = %self.state.window_title(), "window title updated");
    }
}

async fn wait_next_event(
    surface_rx: &mut UnboundedReceiver<SurfaceEvent>,
    control_rx: &mut UnboundedReceiver<DomainEvent>,
) -> WaitEvent {
    tokio::select! {
        // Surface callbacks produced by a dispatch are folded into state
        // before the next command is taken.
        biased;
        maybe = surface_rx.recv() => match maybe {
            Some(event) => WaitEvent::Surface(event),
            None => WaitEvent::Closed,
        },
        maybe = control_rx.recv() => match maybe {
            Some(event) => WaitEvent::Domain(event),
            None => WaitEvent::Closed,
        },
    }
}
