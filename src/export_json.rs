use anyhow::{Context, Result};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::store::{self, UpdateRecord};

#[derive(Serialize)]
struct RowOut {
    name: String,
    size: f64,
    date: String,
}

impl From<UpdateRecord> for RowOut {
    fn from(r: UpdateRecord) -> Self {
        RowOut {
            name: r.app_name,
            size: r.app_size,
            date: r.update_time.to_string(),
        }
    }
}

fn to_json_path(db_path: &Path) -> PathBuf {
    db_path.with_extension("json")
}

/// Dump every record to a pretty-printed JSON file next to the database.
/// Returns the path written.
pub fn export_records(db_path: &Path) -> Result<PathBuf> {
    let records = store::fetch_all(db_path).with_context(|| format!("read {}", db_path.display()))?;
    let data: Vec<RowOut> = records.into_iter().map(RowOut::from).collect();
    let json_path = to_json_path(db_path);
    let json = serde_json::to_string_pretty(&data)?;
    fs::write(&json_path, json).with_context(|| format!("write {}", json_path.display()))?;
    Ok(json_path)
}
