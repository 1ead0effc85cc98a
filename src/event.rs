use crate::command::Invocation;

/// Navigation and chrome callbacks emitted by the Browser Surface, consumed
/// only by the primary event loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceEvent {
    TitleChanged(String),
    /// Load progress in percent, 0..=100.
    ProgressChanged(u8),
    /// A navigation was committed to the given URI.
    LoadCommitted(String),
}

/// Everything that can wake the primary loop besides surface callbacks.
#[derive(Debug, PartialEq, Eq)]
pub enum DomainEvent {
    /// A validated control-channel invocation, ready to dispatch.
    Control(Invocation),
    Shutdown,
}
