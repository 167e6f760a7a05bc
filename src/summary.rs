// src/summary.rs
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::HashMap;

use crate::store::UpdateRecord;

const WEEK_DAYS: i64 = 7;
const MONTH_DAYS: i64 = 30; // trailing calendar window, not a month boundary
const YEAR_DAYS: i64 = 365;

/// Descriptive statistics over the full record set.
///
/// The windowed totals overlap in membership: a record inside the weekly
/// window also counts toward the monthly and yearly totals. The remaining
/// fields are `None` when there are no records at all.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryReport {
    pub record_count: usize,
    pub weekly_total: f64,
    pub monthly_total: f64,
    pub yearly_total: f64,
    pub most_updated_app: Option<String>,
    pub mean_size: Option<f64>,
    pub median_size: Option<f64>,
}

fn mean(sizes: &[f64]) -> Option<f64> {
    if sizes.is_empty() {
        return None;
    }
    Some(sizes.iter().sum::<f64>() / sizes.len() as f64)
}

fn median(sizes: &[f64]) -> Option<f64> {
    if sizes.is_empty() {
        return None;
    }
    let mut sorted = sizes.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        Some((sorted[mid - 1] + sorted[mid]) / 2.0)
    } else {
        Some(sorted[mid])
    }
}

/// App name with the most records. Ties go to the first name that reached
/// the winning count in input order.
fn most_updated(records: &[UpdateRecord]) -> Option<String> {
    let mut counts: HashMap<&str, u64> = HashMap::new();
    let mut best: Option<(&str, u64)> = None;
    for r in records {
        let count = counts
            .entry(r.app_name.as_str())
            .and_modify(|c| *c += 1)
            .or_insert(1);
        if best.map_or(true, |(_, b)| *count > b) {
            best = Some((r.app_name.as_str(), *count));
        }
    }
    best.map(|(name, _)| name.to_string())
}

/// Compute the summary over `records`, with trailing windows measured back
/// from `today` (the moment of invocation, not the latest record's date).
///
/// Pure function; no storage access. Records are assumed already validated
/// by the store.
pub fn summarize(records: &[UpdateRecord], today: NaiveDate) -> SummaryReport {
    let mut weekly_total = 0.0;
    let mut monthly_total = 0.0;
    let mut yearly_total = 0.0;

    for r in records {
        let age_days = (today - r.update_time).num_days();
        if age_days <= WEEK_DAYS {
            weekly_total += r.app_size;
        }
        if age_days <= MONTH_DAYS {
            monthly_total += r.app_size;
        }
        if age_days <= YEAR_DAYS {
            yearly_total += r.app_size;
        }
    }

    let sizes: Vec<f64> = records.iter().map(|r| r.app_size).collect();

    SummaryReport {
        record_count: records.len(),
        weekly_total,
        monthly_total,
        yearly_total,
        most_updated_app: most_updated(records),
        mean_size: mean(&sizes),
        median_size: median(&sizes),
    }
}
