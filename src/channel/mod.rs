mod endpoint;
mod listener;

pub use endpoint::ControlChannelEndpoint;
pub use listener::ControlListener;
