// Library interface for tierbill-cli, shared by the binary and integration tests.

pub mod commands;

pub use commands::{exit_code, run, Command};
