//! Command-line argument parsing.
//!
//! Everything is configured through the environment, so the only flags are
//! informational. Unknown arguments start the client.

/// What the binary was asked to do.
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    /// Print the version and exit
    Version,
    /// Print usage and exit
    Help,
    /// Run the TUI client (default)
    Run,
}

/// Pick the command from the process arguments, program name first.
///
/// ```
/// use pals::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["pals".to_string(), "--help".to_string()];
/// assert_eq!(parse_args(args.into_iter()), CliCommand::Help);
/// ```
pub fn parse_args<I>(args: I) -> CliCommand
where
    I: Iterator<Item = String>,
{
    for arg in args.skip(1) {
        match arg.as_str() {
            "--version" | "-V" => return CliCommand::Version,
            "--help" | "-h" => return CliCommand::Help,
            _ => {}
        }
    }
    CliCommand::Run
}
