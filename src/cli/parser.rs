use crate::export::ExportFormat;
use crate::models::period::Period;
use clap::{ArgGroup, Parser, Subcommand};

/// Command-line interface definition for rcorridas
/// CLI ledger of rideshare work sessions, costs and net earnings
#[derive(Parser)]
#[command(
    name = "rcorridas",
    version = env!("CARGO_PKG_VERSION"),
    about = "A rideshare driver ledger: record sessions and compute net earnings using SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view, check or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(long = "migrate", help = "Add missing fields with their default values")]
        migrate: bool,

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

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Record a work session
    Add {
        /// Date of the session (YYYY-MM-DD or RFC 3339)
        date: String,

        #[arg(long = "hours", help = "Hours worked")]
        hours: Option<String>,

        #[arg(long = "km", help = "Distance driven in km")]
        km: Option<String>,

        #[arg(long = "trips", help = "Number of trips")]
        trips: Option<String>,

        #[arg(long = "gross", help = "Gross earnings")]
        gross: Option<String>,
    },

    /// Edit a work session by ID (fuel cost is recomputed)
    Edit {
        id: String,

        #[arg(long = "date", help = "New date (YYYY-MM-DD or RFC 3339)")]
        date: Option<String>,

        #[arg(long = "hours", help = "Hours worked")]
        hours: Option<String>,

        #[arg(long = "km", help = "Distance driven in km")]
        km: Option<String>,

        #[arg(long = "trips", help = "Number of trips")]
        trips: Option<String>,

        #[arg(long = "gross", help = "Gross earnings")]
        gross: Option<String>,
    },

    /// Delete a work session by ID
    Del {
        id: String,

        #[arg(long = "yes", short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// List sessions
    #[command(group(ArgGroup::new("filter").args(["period", "range"])))]
    List {
        #[arg(long, short, value_enum, help = "Relative period (today, week, month, year)")]
        period: Option<Period>,

        #[arg(
            long,
            short,
            help = "Filter by year/month/day, a start:end range, or 'all'"
        )]
        range: Option<String>,
    },

    /// Show summary cards and charts for a period
    Dashboard {
        #[arg(long, short, value_enum, help = "Relative period (today, week, month, year)")]
        period: Option<Period>,
    },

    /// Show, set or clear the vehicle profile
    #[command(group(ArgGroup::new("action").args(["show", "set", "clear"]).required(true)))]
    Vehicle {
        #[arg(long)]
        show: bool,

        #[arg(long, requires_all = ["model", "year", "efficiency", "price"])]
        set: bool,

        #[arg(long)]
        clear: bool,

        #[arg(long)]
        model: Option<String>,

        #[arg(long)]
        year: Option<i32>,

        #[arg(long, help = "Average efficiency in km per liter")]
        efficiency: Option<f64>,

        #[arg(long, help = "Fuel price per liter")]
        price: Option<f64>,

        #[arg(long, default_value_t = 0.0, help = "Annual vehicle tax")]
        tax: f64,

        #[arg(long, default_value_t = 0.0, help = "Annual maintenance cost")]
        maintenance: f64,
    },

    /// Estimate the distance and trips needed to reach a daily goal
    Estimate {
        #[arg(long, help = "Fuel price per liter")]
        price: f64,

        #[arg(long, help = "Vehicle efficiency in km per liter")]
        efficiency: f64,

        #[arg(long, help = "Daily net earnings goal")]
        goal: f64,

        #[arg(long = "per-km", help = "Average earnings per km")]
        per_km: f64,

        #[arg(long, default_value_t = 1, help = "Working days in the period")]
        days: u32,
    },

    /// Scan stray keys for sessions and optionally restore them to a user
    Recover {
        #[arg(long, help = "Registered user email to restore the found sessions to")]
        email: Option<String>,
    },

    /// Create a backup copy of the database
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,

        #[arg(long, short = 'f', help = "Overwrite an existing file without asking")]
        force: bool,
    },

    /// Export work session data
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(
            long,
            value_name = "RANGE",
            help = "Filter export by year/month/day or a custom range"
        )]
        range: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },
}
