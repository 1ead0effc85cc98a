mod constants;
mod core;
mod event_loop;
mod state;

#[cfg(test)]
mod tests;

pub use constants::APP_NAME;
pub use core::App;
pub use state::SharedBrowserState;
