use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "daylog")]
#[command(about = "Daily changelog generator for git repositories")]
#[command(version)]
pub struct Cli {
    #[clap(flatten)]
    pub common: CommonArgs,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Backend {
    /// Run the `git` executable
    Git,
    /// Read the repository in-process
    Gix,
}

#[derive(Args, Clone)]
pub struct CommonArgs {
    #[arg(long, global = true, help = "Path to git repository")]
    pub repo: Option<PathBuf>,

    #[arg(long, global = true, help = "Path to config file (defaults to <repo>/daylog.toml)")]
    pub config: Option<PathBuf>,

    #[arg(
        long,
        global = true,
        help = "Number of most recent days to keep",
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub max_days: Option<u32>,

    #[arg(long, global = true, help = "Keep every day", conflicts_with = "max_days")]
    pub no_limit: bool,

    #[arg(long, global = true, value_enum, default_value_t = Backend::Git, help = "How history is read")]
    pub backend: Backend,

    #[arg(long, global = true, help = "Read `date|subject` lines from a file instead of git ('-' for stdin)")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write the changelog file
    Generate {
        #[arg(long, help = "Output file, relative to the repository")]
        output: Option<PathBuf>,

        #[arg(long, help = "Version marker file copied next to the changelog")]
        version_marker: Option<String>,
    },
    /// Print the changelog without writing anything
    Preview {
        #[arg(long, help = "Output as JSON")]
        json: bool,
    },
    /// Show how commit subjects would be treated
    Classify {
        #[arg(required = true, help = "Commit subjects to check")]
        subjects: Vec<String>,
    },
}

impl Cli {
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    pub fn execute(self) -> Result<()> {
        match self.command {
            Commands::Generate { output, version_marker } => {
                crate::changelog::exec::generate(self.common, output, version_marker)
            }
            Commands::Preview { json } => crate::changelog::exec::preview(self.common, json),
            Commands::Classify { subjects } => crate::changelog::exec::classify(self.common, &subjects),
        }
    }
}
