//! CLI command definitions.

use clap::{Parser, Subcommand, ValueEnum};

/// Read-through cached user directory.
#[derive(Debug, Parser)]
#[command(name = "usercache")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format.
    #[arg(long, default_value = "pretty")]
    pub format: OutputFormat,

    /// Log line format.
    #[arg(long, env = "LOG_FORMAT", default_value = "text")]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Raw JSON output.
    Json,
    /// Human-readable output.
    #[default]
    Pretty,
}

/// Log format options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List all users, oldest first.
    List,
    /// Create a user.
    Add {
        /// User's name.
        #[arg(long)]
        name: String,
        /// User's email.
        #[arg(long)]
        email: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_list_defaults() {
        let cli = Cli::try_parse_from(["usercache", "--log-format", "text", "list"]).unwrap();

        assert_eq!(cli.format, OutputFormat::Pretty);
        assert!(matches!(cli.command, Commands::List));
    }

    #[test]
    fn test_parse_add_with_json_output() {
        let cli = Cli::try_parse_from([
            "usercache",
            "--format",
            "json",
            "--log-format",
            "json",
            "add",
            "--name",
            "Alice",
            "--email",
            "a@x.com",
        ])
        .unwrap();

        assert_eq!(cli.format, OutputFormat::Json);
        assert_eq!(cli.log_format, LogFormat::Json);
        match cli.command {
            Commands::Add { name, email } => {
                assert_eq!(name, "Alice");
                assert_eq!(email, "a@x.com");
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_add_requires_email() {
        let result = Cli::try_parse_from(["usercache", "add", "--name", "Alice"]);

        assert!(result.is_err());
    }
}
