use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for naturejournal
#[derive(Parser)]
#[command(
    name = "njournal",
    version = env!("CARGO_PKG_VERSION"),
    about = "Nature Counter journal: log time spent outdoors into a spreadsheet-style workbook",
    long_about = None
)]
pub struct Cli {
    /// Override workbook path (useful for tests or a custom workbook)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    /// Verbose diagnostics on stderr (same as NJOURNAL_LOG=debug)
    #[arg(global = true, short = 'v', long = "verbose")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the workbook and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        /// Print the current configuration file to stdout
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        /// Edit the configuration file with your preferred editor
        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        /// Specify the editor to use (overrides $EDITOR/$VISUAL).
        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Log in with an email listed in the identity directory
    Login {
        /// Email address (case and surrounding spaces are ignored)
        email: String,
    },

    /// Register a new email and log in
    Register {
        /// Email address to register
        email: String,

        /// Your name
        #[arg(long)]
        name: String,

        /// Preferred language (en, es, ko, hi)
        #[arg(long, default_value = "en")]
        lang: String,
    },

    /// Forget the current login
    Logout,

    /// Show who is logged in
    Whoami,

    /// List the places used in previous journal entries
    Places,

    /// Look up a 5-digit US ZIP code
    Zip {
        /// ZIP code (5 digits)
        code: String,
    },

    /// Add a journal entry
    #[command(group(
        clap::ArgGroup::new("where").required(true).args(["place", "new_place"])
    ))]
    Add {
        /// Date of the visit (YYYY-MM-DD), default today
        #[arg(long)]
        date: Option<String>,

        /// Start time (HH:MM, 24h), default now
        #[arg(long)]
        time: Option<String>,

        /// Duration in minutes (1-1440)
        #[arg(long, short = 'd')]
        duration: u32,

        /// A place already used in the journal (location is auto-filled)
        #[arg(long)]
        place: Option<String>,

        /// Name of a place never used before
        #[arg(long = "new-place")]
        new_place: Option<String>,

        /// ZIP code; for a new place it fills country, state and city
        #[arg(long)]
        zip: Option<String>,

        /// City (required when the ZIP code matches several cities)
        #[arg(long)]
        city: Option<String>,

        /// State
        #[arg(long)]
        state: Option<String>,

        /// Country
        #[arg(long)]
        country: Option<String>,

        /// Activity tag, repeat for several (order is kept)
        #[arg(long = "activity", short = 'a')]
        activities: Vec<String>,

        /// Free-text notes
        #[arg(long, default_value = "")]
        notes: String,
    },

    /// List journal entries
    List {
        /// Filter by period.
        ///
        /// Supported formats:
        /// - YYYY                  → entire year (e.g. "2025")
        /// - YYYY-MM              → entire month (e.g. "2025-06")
        /// - YYYY-MM-DD           → specific day (e.g. "2025-06-18")
        ///
        /// Ranges (start:end) in the same format, or "all".
        #[arg(long, short)]
        period: Option<String>,

        /// Only entries at this place
        #[arg(long)]
        place: Option<String>,

        /// Only entries of the logged-in user
        #[arg(long)]
        mine: bool,
    },

    /// Export journal entries
    Export {
        /// Export format
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        /// Output file path (absolute path required)
        #[arg(long, value_name = "FILE")]
        file: String,

        /// Date range to export (same syntax as `list --period`); all rows if omitted
        #[arg(long, value_name = "RANGE")]
        range: Option<String>,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Append the rows of a CSV file to a worksheet
    Import {
        /// Target worksheet name (e.g. Journal or Sheet1)
        #[arg(long)]
        sheet: String,

        /// CSV file whose first row is the header
        #[arg(long, value_name = "FILE")]
        file: String,
    },

    /// Print the internal log table
    Log {
        /// Print rows from the internal `log` table
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },
}
