use crate::error::Result;
use crate::model::{ChangelogOutput, DailyChangeSet, SCHEMA_VERSION};
use chrono::Utc;
use std::fs;
use std::path::{Path, PathBuf};

/// Write the report, creating parent directories. Existing content is replaced.
pub fn write_report(path: &Path, report: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, report)?;
    tracing::info!(path = %path.display(), bytes = report.len(), "wrote changelog");
    Ok(())
}

/// Copy `<root>/<marker>` into `dest_dir`. Returns the copied path, or `None`
/// when the marker does not exist.
pub fn copy_version_marker(root: &Path, marker: &str, dest_dir: &Path) -> Result<Option<PathBuf>> {
    let source = root.join(marker);
    if !source.is_file() {
        tracing::debug!(path = %source.display(), "version marker not found");
        return Ok(None);
    }

    let file_name = source.file_name().map(PathBuf::from).unwrap_or_else(|| PathBuf::from(marker));
    let dest = dest_dir.join(file_name);
    if dest != source {
        fs::create_dir_all(dest_dir)?;
        fs::copy(&source, &dest)?;
    }
    Ok(Some(dest))
}

pub fn output_text(report: &str) {
    print!("{report}");
}

pub fn output_json(changeset: &DailyChangeSet, root: &Path, max_days: Option<usize>) -> anyhow::Result<()> {
    let output = ChangelogOutput {
        version: SCHEMA_VERSION,
        generated_at: Utc::now(),
        repository_path: root.to_string_lossy().to_string(),
        max_days,
        days: changeset.blocks.clone(),
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
