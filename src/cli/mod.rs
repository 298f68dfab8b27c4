//! CLI module for Pals.
//!
//! Called first thing in `main`, before any terminal setup:
//!
//! ```ignore
//! use pals::cli::{parse_args, run_cli_command};
//!
//! run_cli_command(parse_args(std::env::args()));
//! // Still here: run the TUI.
//! ```

pub mod args;
pub mod version;

pub use args::{parse_args, CliCommand};
pub use version::{handle_help_command, handle_version_command, VERSION};

/// Handle informational flags. Returns only for [`CliCommand::Run`].
pub fn run_cli_command(command: CliCommand) {
    match command {
        CliCommand::Version => handle_version_command(),
        CliCommand::Help => handle_help_command(),
        CliCommand::Run => {}
    }
}
