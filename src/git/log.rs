use crate::error::{DaylogError, Result};
use crate::model::CommitRecord;
use std::borrow::Cow;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::Command;

pub const SEPARATOR: char = '|';

/// Something that yields raw `date|subject` lines, newest first.
pub trait LogSource {
    fn read_lines(&self) -> Result<Vec<String>>;

    fn records(&self) -> Result<Vec<CommitRecord>> {
        Ok(parse_lines(&self.read_lines()?))
    }
}

/// Split on the first separator. Lines without one are not records.
pub fn parse_line(line: &str) -> Option<CommitRecord> {
    let (date, subject) = line.split_once(SEPARATOR)?;
    Some(CommitRecord::new(date.trim(), subject.trim()))
}

pub fn parse_lines<S: AsRef<str>>(lines: &[S]) -> Vec<CommitRecord> {
    lines
        .iter()
        .filter_map(|line| {
            let line = line.as_ref();
            let record = parse_line(line);
            if record.is_none() {
                tracing::trace!(line, "skipping line without separator");
            }
            record
        })
        .collect()
}

/// Runs `git log` in the repository and reads its output.
pub struct GitCommand {
    workdir: PathBuf,
}

impl GitCommand {
    pub fn new<P: AsRef<Path>>(workdir: P) -> Self {
        Self {
            workdir: workdir.as_ref().to_path_buf(),
        }
    }
}

impl LogSource for GitCommand {
    fn read_lines(&self) -> Result<Vec<String>> {
        let output = Command::new("git")
            .args(["log", "--pretty=format:%ad|%s", "--date=short"])
            .current_dir(&self.workdir)
            .output()
            .map_err(|e| DaylogError::SourceUnavailable(format!("failed to run git: {e}")))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(DaylogError::SourceUnavailable(format!(
                "git log exited with {}: {}",
                output.status,
                stderr.trim()
            )));
        }

        let lines = decode_lines(&output.stdout);
        tracing::debug!(lines = lines.len(), "read git log output");
        Ok(lines)
    }
}

fn decode_lines(bytes: &[u8]) -> Vec<String> {
    let text = String::from_utf8_lossy(bytes);
    if matches!(text, Cow::Owned(_)) {
        tracing::debug!("git log output was not valid UTF-8, invalid bytes replaced");
    }
    text.lines().map(str::to_string).collect()
}

/// Pre-recorded log lines from a file, or stdin when the path is `-`.
pub struct LogFile {
    path: PathBuf,
}

impl LogFile {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    fn is_stdin(&self) -> bool {
        self.path.as_os_str() == "-"
    }
}

impl LogSource for LogFile {
    fn read_lines(&self) -> Result<Vec<String>> {
        let contents = if self.is_stdin() {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .map_err(|e| DaylogError::SourceUnavailable(format!("failed to read stdin: {e}")))?;
            buf
        } else {
            std::fs::read_to_string(&self.path).map_err(|e| {
                DaylogError::SourceUnavailable(format!("failed to read {}: {e}", self.path.display()))
            })?
        };
        Ok(contents.lines().map(str::to_string).collect())
    }
}
