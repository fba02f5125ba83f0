//! CLI subcommand implementations for the `gmaps-locate` binary.

pub mod console_host;
pub mod output;
pub mod parse_cmd;
pub mod resolve_cmd;
