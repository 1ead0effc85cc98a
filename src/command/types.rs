/// Browser Surface capability a command resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Back,
    Forward,
    Refresh,
    Stop,
    ZoomIn,
    ZoomOut,
    Go,
}

impl Action {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Back => "back",
            Self::Forward => "forward",
            Self::Refresh => "refresh",
            Self::Stop => "stop",
            Self::ZoomIn => "zoom_in",
            Self::ZoomOut => "zoom_out",
            Self::Go => "go",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandSpec {
    pub name: &'static str,
    pub action: Action,
    pub accepts_param: bool,
    /// Only meaningful when `accepts_param` is set.
    pub param_optional: bool,
}

/// One validated line from the control channel, consumed immediately by the
/// event loop. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub name: &'static str,
    pub action: Action,
    pub param: Option<String>,
}

impl Invocation {
    pub fn new(spec: &CommandSpec, param: Option<String>) -> Self {
        Self {
            name: spec.name,
            action: spec.action,
            param,
        }
    }
}
