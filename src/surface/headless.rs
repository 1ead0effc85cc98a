use tokio::sync::mpsc::UnboundedSender;
use tracing::debug;

use crate::event::SurfaceEvent;

use super::traits::BrowserSurface;

const ZOOM_STEP: f32 = 0.1;
const ZOOM_MIN: f32 = 0.1;
const ZOOM_MAX: f32 = 5.0;

/// Engine-free surface used by the binary and the tests.
///
/// Keeps its own back/forward stacks so navigation commands have observable
/// semantics, and reports commits, titles, and progress through the same
/// event channel a real engine integration would.
pub struct HeadlessSurface {
    events: UnboundedSender<SurfaceEvent>,
    back_stack: Vec<String>,
    forward_stack: Vec<String>,
    current: Option<String>,
    zoom: f32,
    window_id: u64,
}

impl HeadlessSurface {
    pub fn new(events: UnboundedSender<SurfaceEvent>) -> Self {
        Self::with_window_id(events, u64::from(std::process::id()))
    }

    pub fn with_window_id(events: UnboundedSender<SurfaceEvent>, window_id: u64) -> Self {
        Self {
            events,
            back_stack: Vec::new(),
            forward_stack: Vec::new(),
            current: None,
            zoom: 1.0,
            window_id,
        }
    }

    pub fn current_uri(&self) -> Option<&str> {
        self.current.as_deref()
    }

    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    fn emit(&self, event: SurfaceEvent) {
        // The loop owning the receiver may already be gone during shutdown.
        let _ = self.events.send(event);
    }

    fn commit(&mut self, uri: String) {
        self.emit(SurfaceEvent::ProgressChanged(0));
        self.emit(SurfaceEvent::LoadCommitted(uri.clone()));
        self.emit(SurfaceEvent::TitleChanged(uri.clone()));
        self.current = Some(uri);
        self.emit(SurfaceEvent::ProgressChanged(100));
    }
}

impl BrowserSurface for HeadlessSurface {
    fn navigate(&mut self, uri: &str) {
        if let Some(previous) = self.current.take() {
            self.back_stack.push(previous);
        }
        self.forward_stack.clear();
        self.commit(uri.to_string());
    }

    fn back(&mut self) {
        let Some(target) = self.back_stack.pop() else {
            debug!("back: history is empty");
            return;
        };
        if let Some(current) = self.current.take() {
            self.forward_stack.push(current);
        }
        self.commit(target);
    }

    fn forward(&mut self) {
        let Some(target) = self.forward_stack.pop() else {
            debug!("forward: history is empty");
            return;
        };
        if let Some(current) = self.current.take() {
            self.back_stack.push(current);
        }
        self.commit(target);
    }

    fn reload(&mut self) {
        let Some(uri) = self.current.clone() else {
            debug!("refresh: nothing loaded");
            return;
        };
        self.commit(uri);
    }

    fn stop(&mut self) {
        self.emit(SurfaceEvent::ProgressChanged(100));
    }

    fn zoom_in(&mut self) {
        self.zoom = (self.zoom + ZOOM_STEP).min(ZOOM_MAX);
    }

    fn zoom_out(&mut self) {
        self.zoom = (self.zoom - ZOOM_STEP).max(ZOOM_MIN);
    }

    fn window_id(&self) -> u64 {
        self.window_id
    }
}
