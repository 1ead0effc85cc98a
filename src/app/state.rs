use super::constants::APP_NAME;

/// Widget-visible browser state. Owned by the primary event loop; every
/// mutation funnels through it, including control-channel dispatches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SharedBrowserState {
    pub title: String,
    /// Load progress in percent, 0..=100.
    pub load_progress: u8,
    /// Last committed URI, reflected into any address display.
    pub uri: Option<String>,
}

impl Default for SharedBrowserState {
    fn default() -> Self {
        Self {
            title: String::new(),
            load_progress: 100,
            uri: None,
        }
    }
}

impl SharedBrowserState {
    /// Title bar text: `"<page title> - <app name>"`, with the load
    /// percentage appended while a load is still underway.
    pub fn window_title(&self) -> String {
        let mut title = format!("{} - {APP_NAME}", self.title);
        if self.load_progress < 100 {
            title.push_str(&format!(" ({}%)", self.load_progress));
        }
        title
    }
}
