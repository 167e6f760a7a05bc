// src/commands.rs
use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use std::path::Path;

use crate::export_json;
use crate::store;
use crate::summary::{self, SummaryReport};

pub fn run_init(db_path: &Path, force: bool) -> Result<()> {
    store::initialize(db_path, force)
        .with_context(|| format!("initialize {}", db_path.display()))?;
    println!("Initialized updates table in {}", db_path.display());
    Ok(())
}

pub fn run_update(db_path: &Path, name: &str, size: f64, date: Option<NaiveDate>) -> Result<()> {
    let date = date.unwrap_or_else(|| Local::now().date_naive());
    store::insert(db_path, name, size, date)
        .with_context(|| format!("record update in {}", db_path.display()))?;
    println!("Recorded {} ({}) on {} into {}", name, size, date, db_path.display());
    Ok(())
}

fn fmt_stat(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{v:.2}"),
        None => "n/a".to_string(),
    }
}

fn print_report(report: &SummaryReport) {
    println!("Updates recorded:   {}", report.record_count);
    println!("Weekly total size:  {:.2}", report.weekly_total);
    println!("Monthly total size: {:.2}", report.monthly_total);
    println!("Yearly total size:  {:.2}", report.yearly_total);
    println!("Most updated app:   {}", report.most_updated_app.as_deref().unwrap_or("n/a"));
    println!("Mean update size:   {}", fmt_stat(report.mean_size));
    println!("Median update size: {}", fmt_stat(report.median_size));
}

pub fn run_summary(db_path: &Path, json: bool) -> Result<()> {
    let records =
        store::fetch_all(db_path).with_context(|| format!("read {}", db_path.display()))?;
    let report = summary::summarize(&records, Local::now().date_naive());
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }
    Ok(())
}

pub fn run_list(db_path: &Path) -> Result<()> {
    let records =
        store::fetch_all(db_path).with_context(|| format!("read {}", db_path.display()))?;
    if records.is_empty() {
        println!("No updates recorded in {}", db_path.display());
        return Ok(());
    }
    for r in &records {
        println!("{}  {:>10.2}  {}", r.update_time, r.app_size, r.app_name);
    }
    Ok(())
}

pub fn run_export(db_path: &Path) -> Result<()> {
    let json_path = export_json::export_records(db_path)?;
    println!("Exported records from {} to {}", db_path.display(), json_path.display());
    Ok(())
}
