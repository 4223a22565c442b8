// One module per subcommand; main.rs parses arguments and dispatches here.

pub mod annotate;
pub mod classify;
pub mod route;
