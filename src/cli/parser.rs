use crate::export::ExportFormat;
use crate::store::Collection;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rollcall
/// Attendance kiosk backed by CSV rosters and a SQLite document store
#[derive(Parser)]
#[command(
    name = "rollcall",
    version = env!("CARGO_PKG_VERSION"),
    about = "An attendance kiosk: look up IDs in CSV rosters, record check-ins and guests",
    long_about = None
)]
pub struct Cli {
    /// Override store path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Use this configuration file instead of the default one
    #[arg(global = true, long = "config-file", value_name = "FILE")]
    pub config_file: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the store and configuration
    Init,

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

    /// Run the interactive check-in kiosk
    Kiosk {
        #[arg(long = "dry-run", help = "Keep records in memory only")]
        dry_run: bool,
    },

    /// Mark a roster member present without the interactive kiosk
    Checkin {
        /// Identifier to check in
        id: String,
    },

    /// Register a guest that is not on the roster
    Guest {
        /// Identifier of the guest
        id: String,

        /// Guest display name
        #[arg(required = true, num_args = 1..)]
        name: Vec<String>,
    },

    /// Show the loaded roster
    Roster {
        #[arg(long = "lookup", help = "Resolve a single identifier")]
        lookup: Option<String>,
    },

    /// List stored check-in records
    List {
        #[arg(long, value_enum, default_value = "attendance")]
        collection: Collection,
    },

    /// Print or manage the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Manage the store (integrity checks, etc.)
    Db {
        #[arg(long = "check", help = "Check store integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the store using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show store information")]
        info: bool,
    },

    /// Create a backup copy of the store
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,
    },

    /// Export check-in records
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, value_enum, default_value = "attendance")]
        collection: Collection,

        #[arg(long, short = 'f')]
        force: bool,
    },
}
