//! Command-line handling.
//!
//! jokecard is a TUI first; the only flags are `--version` and `--help`.
//! Call [`run_cli_command`] before touching the terminal:
//!
//! ```ignore
//! use jokecard::cli::{parse_args, run_cli_command};
//!
//! if run_cli_command(parse_args(std::env::args())).is_some() {
//!     return Ok(());
//! }
//! // continue to the TUI
//! ```

pub mod args;
pub mod version;

pub use args::{parse_args, CliCommand};
pub use version::{handle_help_command, handle_version_command, help_text, VERSION};

/// Run a non-TUI command.
///
/// Returns `None` for [`CliCommand::RunTui`]; every other command prints to
/// stdout and returns `Some(())`.
pub fn run_cli_command(command: CliCommand) -> Option<()> {
    match command {
        CliCommand::Version => {
            handle_version_command();
            Some(())
        }
        CliCommand::Help => {
            handle_help_command();
            Some(())
        }
        CliCommand::RunTui => None,
    }
}
