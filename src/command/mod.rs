mod dispatch;
mod parse;
mod table;
mod types;

pub use dispatch::dispatch;
pub use parse::parse_line;
pub use table::{command_table, lookup, lookup_in};
pub use types::{Action, CommandSpec, Invocation};
