//! Command-line argument parsing.

#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    /// Print the version and exit.
    Version,
    /// Print usage and exit.
    Help,
    /// Run the TUI (default).
    RunTui,
}

/// Pick the command from `args` (program name first).
///
/// The first recognized flag wins; unknown arguments are ignored.
///
/// ```
/// use jokecard::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["jokecard".to_string(), "--version".to_string()];
/// assert_eq!(parse_args(args.into_iter()), CliCommand::Version);
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
    CliCommand::RunTui
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> CliCommand {
        parse_args(args.iter().map(|s| s.to_string()))
    }

    #[test]
    fn test_parse_version_flags() {
        assert_eq!(parse(&["jokecard", "--version"]), CliCommand::Version);
        assert_eq!(parse(&["jokecard", "-V"]), CliCommand::Version);
    }

    #[test]
    fn test_parse_help_flags() {
        assert_eq!(parse(&["jokecard", "--help"]), CliCommand::Help);
        assert_eq!(parse(&["jokecard", "-h"]), CliCommand::Help);
    }

    #[test]
    fn test_first_flag_wins() {
        assert_eq!(parse(&["jokecard", "-h", "-V"]), CliCommand::Help);
    }

    #[test]
    fn test_parse_no_args_or_unknown() {
        assert_eq!(parse(&["jokecard"]), CliCommand::RunTui);
        assert_eq!(parse(&["jokecard", "--unknown"]), CliCommand::RunTui);
    }
}
