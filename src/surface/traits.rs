/// Seam to the embedded browser engine.
///
/// The core never renders; it drives whatever implements this and observes
/// the results through `SurfaceEvent`s. All methods are called from the
/// primary event loop only.
pub trait BrowserSurface: Send {
    fn navigate(&mut self, uri: &str);
    fn back(&mut self);
    fn forward(&mut self);
    fn reload(&mut self);
    fn stop(&mut self);
    fn zoom_in(&mut self);
    fn zoom_out(&mut self);

    /// Stable identifier used to derive the control channel path.
    fn window_id(&self) -> u64;
}
