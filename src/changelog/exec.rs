use super::classify::Verdict;
use super::output::{copy_version_marker, output_json, output_text, write_report};
use super::{aggregate, format_report, normalize};
use crate::cli::{Backend, CommonArgs};
use crate::config::Config;
use crate::git::{GitCommand, GixRepository, LogFile, LogSource};
use crate::model::DailyChangeSet;
use anyhow::Context;
use console::{style, Term};
use std::path::{Path, PathBuf};

pub fn generate(common: CommonArgs, output: Option<PathBuf>, version_marker: Option<String>) -> anyhow::Result<()> {
    let root = repo_root(&common)?;
    let config = load_config(&common, &root)?;

    // Nothing is written until the report is fully rendered.
    let changeset = build_changeset(&common, &root, &config)?;
    let report = format_report(&changeset);

    let relative = output.unwrap_or_else(|| config.output.clone());
    let out_path = root.join(&relative);
    write_report(&out_path, &report)
        .with_context(|| format!("Failed to write changelog to {}", out_path.display()))?;

    let out_dir = out_path.parent().unwrap_or(root.as_path());
    let marker = version_marker.unwrap_or_else(|| config.version_marker.clone());
    let copied = copy_version_marker(&root, &marker, out_dir)
        .with_context(|| format!("Failed to copy version marker '{marker}'"))?;
    if copied.is_none() {
        eprintln!(
            "{} {} not found in {}, skipping",
            style("warning:").yellow().bold(),
            marker,
            root.display()
        );
    }

    println!("{} {}", style("Generated").green().bold(), relative.display());
    Ok(())
}

pub fn preview(common: CommonArgs, json: bool) -> anyhow::Result<()> {
    let root = repo_root(&common)?;
    let config = load_config(&common, &root)?;
    let changeset = build_changeset(&common, &root, &config)?;

    if json {
        output_json(&changeset, &root, config.max_days)?;
    } else {
        output_text(&format_report(&changeset));
    }
    Ok(())
}

pub fn classify(common: CommonArgs, subjects: &[String]) -> anyhow::Result<()> {
    let root = repo_root(&common)?;
    let config = load_config(&common, &root)?;

    for subject in subjects {
        match config.noise.classify(subject) {
            Verdict::Keep => println!("{} {}", style("keep:").green(), normalize(subject)),
            Verdict::Noise(reason) => println!("{} ({reason})", style("noise").red()),
        }
    }
    Ok(())
}

fn repo_root(common: &CommonArgs) -> anyhow::Result<PathBuf> {
    match &common.repo {
        Some(path) => Ok(path.clone()),
        None => std::env::current_dir().context("Failed to determine current directory"),
    }
}

fn load_config(common: &CommonArgs, root: &Path) -> anyhow::Result<Config> {
    let config = Config::load(common.config.as_deref(), root).context("Failed to load configuration")?;
    Ok(config.with_overrides(common.max_days, common.no_limit))
}

fn open_source(common: &CommonArgs, root: &Path) -> anyhow::Result<Box<dyn LogSource>> {
    if let Some(path) = &common.log_file {
        return Ok(Box::new(LogFile::new(path)));
    }

    let source: Box<dyn LogSource> = match common.backend {
        Backend::Git => Box::new(GitCommand::new(root)),
        Backend::Gix => Box::new(
            GixRepository::open(Some(root))
                .context("Failed to open git repository")?
                .with_progress(Term::stderr().is_term()),
        ),
    };
    Ok(source)
}

fn build_changeset(common: &CommonArgs, root: &Path, config: &Config) -> anyhow::Result<DailyChangeSet> {
    let source = open_source(common, root)?;
    let records = source.records().context("Failed to read commit history")?;
    let changeset = aggregate(&records, &config.noise, config.max_days);
    if changeset.is_empty() {
        tracing::info!(records = records.len(), "no reportable changes");
    } else {
        tracing::debug!(newest = changeset.dates().next(), oldest = changeset.dates().last(), "changelog range");
    }
    Ok(changeset)
}
