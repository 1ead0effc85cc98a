use tracing::info;

use crate::error::{AppError, AppResult};
use crate::surface::BrowserSurface;

use super::types::{Action, Invocation};

/// Invokes the action an invocation resolved to against the live surface.
///
/// Runs only on the primary event loop; the listener task never touches the
/// surface directly. Every attempt is reported on the diagnostic stream.
pub fn dispatch(invocation: &Invocation, surface: &mut dyn BrowserSurface) -> AppResult<()> {
    match invocation.param.as_deref() {
        Some(param) => info!(command = invocation.name, param, "executing command"),
        None => info!(command = invocation.name, "executing command"),
    }

    match invocation.action {
        Action::Back => surface.back(),
        Action::Forward => surface.forward(),
        Action::Refresh => surface.reload(),
        Action::Stop => surface.stop(),
        Action::ZoomIn => surface.zoom_in(),
        Action::ZoomOut => surface.zoom_out(),
        Action::Go => {
            let uri = invocation
                .param
                .as_deref()
                .ok_or_else(|| AppError::missing_parameter(invocation.name))?;
            surface.navigate(uri);
        }
    }
    Ok(())
}
