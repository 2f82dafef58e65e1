use super::classify::Verdict;
use super::normalize::normalize;
use crate::config::NoiseRules;
use crate::model::{CommitRecord, DailyChangeSet, DateBlock};
use chrono::NaiveDate;
use std::collections::HashMap;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Group surviving subjects by date, newest date first, keeping at most `window` dates.
pub fn aggregate(records: &[CommitRecord], rules: &NoiseRules, window: Option<usize>) -> DailyChangeSet {
    let mut by_date: HashMap<&str, Vec<String>> = HashMap::new();
    let mut noise = 0usize;

    for record in records {
        if let Verdict::Noise(reason) = rules.classify(&record.subject) {
            tracing::debug!(date = %record.date, subject = %record.subject, %reason, "skipping noise");
            noise += 1;
            continue;
        }

        let normalized = normalize(&record.subject);
        let changes = by_date.entry(record.date.as_str()).or_default();
        if !changes.contains(&normalized) {
            changes.push(normalized);
        }
    }

    let mut dates: Vec<&str> = by_date.keys().copied().collect();
    dates.sort_by(|a, b| b.cmp(a));
    if let Some(n) = window {
        dates.truncate(n);
    }

    let blocks: Vec<DateBlock> = dates
        .into_iter()
        .filter(|date| {
            let valid = is_valid_date(date);
            if !valid {
                tracing::debug!(date, "dropping block with invalid date");
            }
            valid
        })
        .filter_map(|date| {
            let changes = by_date.remove(date)?;
            Some(DateBlock {
                date: date.to_string(),
                changes,
            })
        })
        .collect();

    tracing::info!(
        records = records.len(),
        noise,
        days = blocks.len(),
        "aggregated commit history"
    );

    DailyChangeSet { blocks }
}

/// Zero-padded `YYYY-MM-DD` naming a real calendar day.
pub fn is_valid_date(date: &str) -> bool {
    NaiveDate::parse_from_str(date, DATE_FORMAT)
        .map(|d| d.format(DATE_FORMAT).to_string() == date)
        .unwrap_or(false)
}
