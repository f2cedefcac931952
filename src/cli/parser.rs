use clap::{Args, Parser, Subcommand};

use crate::core::filter::RowFilter;
use crate::export::ExportFormat;
use crate::models::checkbox::Checkbox;

/// Command-line interface definition for rattendance
#[derive(Parser)]
#[command(
    name = "rattendance",
    version = env!("CARGO_PKG_VERSION"),
    about = "Attendance dashboard: derive event hours from time-in/time-out marks, filter students, export CSV",
    long_about = None
)]
pub struct Cli {
    /// Override the attendance sheet path (useful for tests or a second sheet)
    #[arg(global = true, long = "sheet")]
    pub sheet: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    /// Disable colours in the terminal output
    #[arg(global = true, long = "no-color")]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Row filters shared by `show` and `export`. All criteria combine with AND.
#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    /// Case-insensitive substring of the student name
    #[arg(long)]
    pub name: Option<String>,

    /// Exact year level (e.g. 1, 2, 10)
    #[arg(long = "year-level")]
    pub year_level: Option<String>,

    /// Only students having a cell for this event id
    #[arg(long = "event")]
    pub event: Option<i32>,

    /// Exact academic year (e.g. 2025-2026)
    #[arg(long = "academic-year")]
    pub academic_year: Option<String>,

    /// Exact semester id
    #[arg(long = "semester")]
    pub semester: Option<String>,
}

impl From<&FilterArgs> for RowFilter {
    fn from(a: &FilterArgs) -> Self {
        RowFilter {
            name: a.name.clone(),
            year_level: a.year_level.clone(),
            event_id: a.event,
            academic_year: a.academic_year.clone(),
            semester_id: a.semester.clone(),
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration and an empty attendance sheet
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        /// Print the current configuration file to stdout
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        /// Edit the configuration file with your preferred editor
        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        /// Specify the editor to use (overrides $EDITOR/$VISUAL)
        #[arg(long = "editor", help = "Specify the editor to use (vim, nano, or custom path)")]
        editor: Option<String>,
    },

    /// Show the dashboard: hours per event, totals and completion tiers
    Show {
        #[command(flatten)]
        filters: FilterArgs,
    },

    /// Toggle the time-in or time-out mark of a cell and save
    Toggle {
        /// Student id (first column)
        student: String,
        /// Event id
        event: i32,
        /// Which mark to toggle
        #[arg(value_enum)]
        mark: Checkbox,
        /// Set the mark to this state instead of flipping it
        #[arg(long, value_name = "CHECKED")]
        set: Option<bool>,
        /// Show the result without saving
        #[arg(long = "dry-run")]
        dry_run: bool,
    },

    /// Manually set the hours of a cell (capped at the required hours) and save
    Hours {
        /// Student id (first column)
        student: String,
        /// Event id
        event: i32,
        /// New value, as typed in the hours field
        #[arg(allow_hyphen_values = true)]
        value: String,
        /// Show the result without saving
        #[arg(long = "dry-run")]
        dry_run: bool,
    },

    /// Export the visible rows
    Export {
        /// Export format: csv, json, xlsx
        #[arg(long, value_enum, value_name = "FORMAT", default_value = "csv")]
        format: ExportFormat,

        /// Output file path (default: attendance_data_<date>.<ext> in the export dir)
        #[arg(long, value_name = "FILE")]
        file: Option<String>,

        #[command(flatten)]
        filters: FilterArgs,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Print the hour adjustment history
    History {
        /// Time window: all, today, week (7 days), month (30 days)
        #[arg(long, default_value = "all")]
        window: String,

        /// Match student or event name (case-insensitive)
        #[arg(long)]
        search: Option<String>,
    },
}
