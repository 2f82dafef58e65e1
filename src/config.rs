use crate::error::{DaylogError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_MAX_DAYS: usize = 30;
pub const DEFAULT_OUTPUT: &str = "docs/changelog.txt";
pub const DEFAULT_VERSION_MARKER: &str = "VERSION";
pub const CONFIG_FILE_NAME: &str = "daylog.toml";

/// Rules deciding which commit subjects are left out of the changelog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NoiseRules {
    /// Subjects dropped when they match exactly (after trimming).
    pub exact: Vec<String>,
    /// Case-sensitive prefixes.
    pub prefixes: Vec<String>,
    /// Case-insensitive substrings.
    pub contains: Vec<String>,
    /// Case-insensitive commit type marking housekeeping commits, matched when
    /// followed by `:`, `(`, `!` or nothing.
    pub chore_marker: String,
    /// Case-insensitive token an author adds to keep a commit out of the log.
    pub no_log_marker: String,
}

impl Default for NoiseRules {
    fn default() -> Self {
        Self {
            exact: ["asd", "123", "test", "13213"].map(String::from).to_vec(),
            prefixes: ["Merge ", "Create CNAME", "Delete CNAME"]
                .map(String::from)
                .to_vec(),
            contains: vec!["CNAME".to_string()],
            chore_marker: "chore".to_string(),
            no_log_marker: "-nolog".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// `None` disables truncation.
    pub max_days: Option<usize>,
    pub output: PathBuf,
    pub version_marker: String,
    pub noise: NoiseRules,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_days: Some(DEFAULT_MAX_DAYS),
            output: PathBuf::from(DEFAULT_OUTPUT),
            version_marker: DEFAULT_VERSION_MARKER.to_string(),
            noise: NoiseRules::default(),
        }
    }
}

impl Config {
    pub fn from_toml_str(input: &str) -> Result<Self> {
        let config: Config = toml::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    /// Load `explicit` if given (it must exist), otherwise `<repo>/daylog.toml`
    /// when present, otherwise the built-in defaults.
    pub fn load(explicit: Option<&Path>, repo_root: &Path) -> Result<Self> {
        let path = match explicit {
            Some(path) => {
                if !path.is_file() {
                    return Err(DaylogError::Config(format!(
                        "config file not found: {}",
                        path.display()
                    )));
                }
                path.to_path_buf()
            }
            None => {
                let implicit = repo_root.join(CONFIG_FILE_NAME);
                if !implicit.is_file() {
                    tracing::debug!("no {} in {}, using defaults", CONFIG_FILE_NAME, repo_root.display());
                    return Ok(Self::default());
                }
                implicit
            }
        };

        tracing::debug!(path = %path.display(), "loading config");
        let contents = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&contents)
            .map_err(|e| DaylogError::Config(format!("{}: {e}", path.display())))
    }

    fn validate(&self) -> Result<()> {
        if self.max_days == Some(0) {
            return Err(DaylogError::Config("max_days must be at least 1".to_string()));
        }
        Ok(())
    }

    /// Apply command-line overrides on top of the file values.
    pub fn with_overrides(mut self, max_days: Option<u32>, no_limit: bool) -> Self {
        if let Some(n) = max_days {
            self.max_days = Some(n as usize);
        }
        if no_limit {
            self.max_days = None;
        }
        self
    }
}
