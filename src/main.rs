use anyhow::Result;
use daylog::cli::Cli;

fn main() -> Result<()> {
    daylog::logging::init();
    let cli = Cli::parse();
    cli.execute()
}
