use clap::{Parser, Subcommand};

/// Command-line interface definition for worklog.
/// Without a subcommand the interactive session starts.
#[derive(Parser)]
#[command(
    name = "worklog",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple work-log CLI: record what you worked on and search through it",
    long_about = None
)]
pub struct Cli {
    /// Override the log file path (useful for tests or a custom log)
    #[arg(global = true, long = "file")]
    pub file: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration and an empty log file
    Init,

    /// Print all logged entries as a table
    List,

    /// Export the log to another file
    Export {
        /// Export format
        #[arg(long = "format", default_value = "csv", help = "Export format: csv or json")]
        format: String,

        /// Destination file
        #[arg(long = "output", help = "Destination file path")]
        output: String,
    },

    /// Back up the log file
    Backup {
        /// Destination file path
        dest: String,

        /// Compress the backup into a .zip archive
        #[arg(long = "zip", help = "Compress the backup into a .zip archive")]
        zip: bool,
    },
}
