use super::types::{Action, CommandSpec};

/// The fixed command table, built at compile time and immutable afterwards.
/// Every entry upholds `param_optional => accepts_param`.
const COMMANDS: [CommandSpec; 7] = [
    CommandSpec {
        name: "back",
        action: Action::Back,
        accepts_param: false,
        param_optional: false,
    },
    CommandSpec {
        name: "forward",
        action: Action::Forward,
        accepts_param: false,
        param_optional: false,
    },
    CommandSpec {
        name: "refresh",
        action: Action::Refresh,
        accepts_param: false,
        param_optional: false,
    },
    CommandSpec {
        name: "stop",
        action: Action::Stop,
        accepts_param: false,
        param_optional: false,
    },
    CommandSpec {
        name: "zoom_in",
        action: Action::ZoomIn,
        accepts_param: false,
        param_optional: false,
    },
    CommandSpec {
        name: "zoom_out",
        action: Action::ZoomOut,
        accepts_param: false,
        param_optional: false,
    },
    CommandSpec {
        name: "go",
        action: Action::Go,
        accepts_param: true,
        param_optional: false,
    },
];

pub fn command_table() -> &'static [CommandSpec] {
    &COMMANDS
}

/// Resolves a command name against the table.
///
/// Matching policy: an entry matches when its name is a prefix of the input
/// (so `"go https://x"` style typos like `"goX"` still resolve to `go`), the
/// scan covers the whole table, and the *last* matching entry wins. The
/// last-prefix-wins tie-break is kept deliberately as the documented,
/// deterministic policy; do not swap it for first- or longest-prefix without
/// updating the tests that pin it down.
pub fn lookup(name: &str) -> Option<&'static CommandSpec> {
    lookup_in(&COMMANDS, name)
}

pub fn lookup_in<'a>(table: &'a [CommandSpec], name: &str) -> Option<&'a CommandSpec> {
    let mut resolved = None;
    for spec in table {
        if name.starts_with(spec.name) {
            resolved = Some(spec);
        }
    }
    resolved
}
