use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "appsize-stats", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Create the updates table in the database
    Init {
        #[command(flatten)]
        db: DbOpts,
        /// Drop an existing updates table first, discarding all records
        #[arg(long)]
        force: bool,
    },
    /// Record one app update
    #[command(allow_negative_numbers = true)]
    Update {
        #[command(flatten)]
        db: DbOpts,
        /// Name of the updated app
        name: String,
        /// Size of the update
        size: f64,
        /// Date of the update (YYYY-MM-DD); defaults to today
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Print summary statistics of the recorded updates
    Summary {
        #[command(flatten)]
        db: DbOpts,
        /// Print the report as JSON instead of plain text
        #[arg(long)]
        json: bool,
    },
    /// List every recorded update in insertion order
    List {
        #[command(flatten)]
        db: DbOpts,
    },
    /// Write all records as JSON next to the database file
    Export {
        #[command(flatten)]
        db: DbOpts,
    },
}

#[derive(Debug, Args)]
pub struct DbOpts {
    /// Path of the sqlite database file
    #[arg(long, default_value = "apps_sizes.db")]
    pub db_path: PathBuf,
}
