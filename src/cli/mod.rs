pub mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "practice-feed")]
#[command(about = "Browse the practice-log feed from the terminal", long_about = None)]
pub struct Cli {
    /// Config file (default: ~/.config/practice-feed/config.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Bearer token for the practice-log API
    #[arg(short, long, env = "PRACTICE_FEED_TOKEN", global = true, hide_env_values = true)]
    pub token: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the feed, one page after another
    List {
        /// Number of pages to load
        #[arg(short, long, default_value_t = 1)]
        pages: u32,
    },
    /// Launch the interactive feed viewer
    Tui {
        /// Write logs to this file while the viewer is open
        #[arg(short, long)]
        log: Option<PathBuf>,
    },
    /// Run one of the display formatters
    Format {
        #[command(subcommand)]
        kind: FormatKind,
    },
}

#[derive(Subcommand)]
pub enum FormatKind {
    /// Seconds as MM:SS or H:MM:SS
    Duration { seconds: u64 },
    /// A count as 999, 1K or 2M
    Count { value: u64 },
    /// Time elapsed since an epoch timestamp in milliseconds
    Elapsed {
        #[arg(allow_hyphen_values = true)]
        epoch_millis: i64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_list_with_pages() {
        let cli = Cli::try_parse_from(["practice-feed", "--token", "abc", "list", "--pages", "3"])
            .unwrap();
        assert_eq!(cli.token.as_deref(), Some("abc"));
        assert!(matches!(cli.command, Commands::List { pages: 3 }));
    }

    #[test]
    fn test_parse_format_duration() {
        let cli = Cli::try_parse_from(["practice-feed", "format", "duration", "3661"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Format {
                kind: FormatKind::Duration { seconds: 3661 }
            }
        ));
    }

    #[test]
    fn test_global_config_after_subcommand() {
        let cli = Cli::try_parse_from(["practice-feed", "tui", "--config", "/tmp/c.toml"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/c.toml")));
    }
}
