use clap::{Parser, Subcommand};

/// Command-line interface definition for rTimeclock
/// One-button work clock: toggle in/out and track today's worked time
#[derive(Parser)]
#[command(
    name = "rtimeclock",
    version = env!("CARGO_PKG_VERSION"),
    about = "A single-toggle work clock: clock in/out and track today's worked and remaining time",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    /// Freeze the clock at this RFC 3339 instant (used by tests)
    #[arg(global = true, long = "now", hide = true, value_name = "RFC3339")]
    pub now: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Clock in if clocked out, clock out if clocked in
    Toggle,

    /// Show today's worked time, remaining time and clock state
    Status {
        #[arg(long = "json", help = "Print the state as JSON")]
        json: bool,

        #[arg(long = "entries", short = 'e', help = "Also list today's IN/OUT entries")]
        entries: bool,
    },

    /// Live view: totals refresh every second while clocked in.
    /// Press Enter to toggle, `q` + Enter or Ctrl-C to quit.
    Watch,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },
}
