use crate::error::{AppError, AppResult};

use super::table::lookup;
use super::types::Invocation;

/// Turns one line from the control channel into a validated invocation.
///
/// `Ok(None)` means the line was empty after stripping its terminator and is
/// ignored without a diagnostic. Unknown commands and missing required
/// parameters are reported as recoverable errors; the listener loop survives
/// both.
pub fn parse_line(line: &str) -> AppResult<Option<Invocation>> {
    let line = line.trim_end_matches(['\n', '\r']).trim_start();
    if line.is_empty() {
        return Ok(None);
    }

    let (name, rest) = match line.find(char::is_whitespace) {
        Some(index) => (&line[..index], &line[index..]),
        None => (line, ""),
    };

    let Some(spec) = lookup(name) else {
        return Err(AppError::unknown_command(name));
    };

    if !spec.accepts_param {
        // Extra tokens on a no-parameter command are silently ignored.
        return Ok(Some(Invocation::new(spec, None)));
    }

    // Only the first token after the command name is kept; the rest of the
    // line is discarded. Known limitation until commands grow an argv shape.
    let param = rest
        .split(|c: char| c.is_whitespace() || c == ',')
        .find(|token| !token.is_empty())
        .map(str::to_string);

    match param {
        Some(param) => Ok(Some(Invocation::new(spec, Some(param)))),
        None if spec.param_optional => Ok(Some(Invocation::new(spec, None))),
        None => Err(AppError::missing_parameter(name)),
    }
}
