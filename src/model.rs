use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const SCHEMA_VERSION: u32 = 1;

/// One `date|subject` line of the history log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitRecord {
    pub date: String,
    pub subject: String,
}

impl CommitRecord {
    pub fn new(date: impl Into<String>, subject: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            subject: subject.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateBlock {
    pub date: String,
    pub changes: Vec<String>,
}

/// Date blocks newest first, each holding de-duplicated subjects in log order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyChangeSet {
    pub blocks: Vec<DateBlock>,
}

impl DailyChangeSet {
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn dates(&self) -> impl Iterator<Item = &str> + '_ {
        self.blocks.iter().map(|b| b.date.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChangelogOutput {
    pub version: u32,
    pub generated_at: DateTime<Utc>,
    pub repository_path: String,
    pub max_days: Option<usize>,
    pub days: Vec<DateBlock>,
}
