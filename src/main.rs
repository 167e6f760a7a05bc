use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;
mod error;
mod export_json;
mod store;
mod summary;

use cli::{Cli, Command};

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Command::Init { db, force } => commands::run_init(&db.db_path, force)?,
        Command::Update { db, name, size, date } => {
            commands::run_update(&db.db_path, &name, size, date)?
        }
        Command::Summary { db, json } => commands::run_summary(&db.db_path, json)?,
        Command::List { db } => commands::run_list(&db.db_path)?,
        Command::Export { db } => commands::run_export(&db.db_path)?,
    }
    Ok(())
}
