use super::log::{LogSource, SEPARATOR};
use crate::error::{DaylogError, Result};
use chrono::{DateTime, FixedOffset, Offset, Utc};
use gix::{discover, ObjectId, Repository};
use indicatif::{ProgressBar, ProgressStyle};
use std::collections::{HashSet, VecDeque};
use std::path::{Path, PathBuf};

/// Reads history in-process instead of shelling out to `git`.
pub struct GixRepository {
    repo: Repository,
    path: PathBuf,
    progress: bool,
}

struct Entry {
    seconds: i64,
    date: String,
    subject: String,
}

impl GixRepository {
    /// Open a repository at `path`, or current dir if `None`
    pub fn open<P: AsRef<Path>>(path: Option<P>) -> Result<Self> {
        let repo_path = path
            .map(|p| p.as_ref().to_path_buf())
            .unwrap_or(std::env::current_dir()?);

        let repo = discover(&repo_path)?;
        let path = repo.workdir().unwrap_or_else(|| repo.path()).to_path_buf();

        Ok(Self {
            repo,
            path,
            progress: false,
        })
    }

    pub fn with_progress(mut self, progress: bool) -> Self {
        self.progress = progress;
        self
    }

    fn collect_entries(&self) -> Result<Vec<Entry>> {
        let mut head = self.repo.head()?;
        let head_commit = head.peel_to_commit_in_place()?;

        let mut entries = Vec::new();
        let mut seen: HashSet<ObjectId> = HashSet::new();
        let mut stack: VecDeque<ObjectId> = VecDeque::from([head_commit.id]);

        let pb = if self.progress {
            ProgressBar::new_spinner()
        } else {
            ProgressBar::hidden()
        };
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        pb.set_message("Reading history...");

        while let Some(commit_id) = stack.pop_back() {
            if !seen.insert(commit_id) {
                continue;
            }

            let commit = self.repo.find_commit(commit_id)?;
            let time = commit.time()?;
            // `git log --date=short %ad` reports the author date, not the commit time.
            let (author_secs, author_offset) = author_time(&commit.data).ok_or_else(|| {
                DaylogError::InvalidDate(format!("Missing author time in commit {commit_id}"))
            })?;
            let date = short_date(author_secs, author_offset)?;
            let subject = commit.message()?.summary().to_string();

            entries.push(Entry {
                seconds: time.seconds,
                date,
                subject,
            });

            for pid in commit.parent_ids() {
                stack.push_back(pid.detach());
            }
            pb.inc(1);
        }

        pb.finish_and_clear();
        // Newest first, like `git log`.
        entries.sort_by(|a, b| b.seconds.cmp(&a.seconds));
        Ok(entries)
    }
}

impl LogSource for GixRepository {
    fn read_lines(&self) -> Result<Vec<String>> {
        let lines: Vec<String> = self
            .collect_entries()?
            .into_iter()
            .map(|e| format!("{}{SEPARATOR}{}", e.date, e.subject.trim()))
            .collect();
        tracing::debug!(lines = lines.len(), path = %self.path.display(), "read history with gix");
        Ok(lines)
    }
}

/// Seconds and UTC offset from the `author` header of a raw commit object.
fn author_time(data: &[u8]) -> Option<(i64, i32)> {
    let headers = std::str::from_utf8(data).ok().or_else(|| {
        // Only the header block has to be valid UTF-8.
        let end = data.windows(2).position(|w| w == b"\n\n")?;
        std::str::from_utf8(&data[..end]).ok()
    })?;

    let line = headers
        .lines()
        .take_while(|l| !l.is_empty())
        .find_map(|l| l.strip_prefix("author "))?;

    let mut fields = line.rsplitn(3, ' ');
    let tz = fields.next()?;
    let seconds: i64 = fields.next()?.parse().ok()?;

    let (sign, digits) = match tz.as_bytes().first()? {
        b'+' => (1, &tz[1..]),
        b'-' => (-1, &tz[1..]),
        _ => return None,
    };
    if digits.len() != 4 {
        return None;
    }
    let hours: i32 = digits[..2].parse().ok()?;
    let minutes: i32 = digits[2..].parse().ok()?;
    Some((seconds, sign * (hours * 3600 + minutes * 60)))
}

/// `YYYY-MM-DD` of a timestamp in the author's own UTC offset.
fn short_date(seconds: i64, offset: i32) -> Result<String> {
    let utc = DateTime::<Utc>::from_timestamp(seconds, 0)
        .ok_or_else(|| DaylogError::InvalidDate(format!("Invalid timestamp: {seconds}")))?;
    let offset = FixedOffset::east_opt(offset).unwrap_or_else(|| Utc.fix());
    Ok(utc.with_timezone(&offset).format("%Y-%m-%d").to_string())
}
