use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

mod commands;

#[derive(Parser)]
#[command(
    name = "goimpfmt",
    author,
    version = env!("CARGO_PKG_VERSION"),
    about = "Group Go imports into standard library, project and third-party blocks",
    after_help = "sample: goimpfmt ~/projects/goimpfmt github.com/Pungyeon/goimpfmt"
)]
struct Cli {
    /// Project directory, formatted recursively
    project_directory: PathBuf,

    /// Root package of the project (falls back to format.local_package in .goimpfmt.toml)
    project_root_package: Option<String>,

    /// Report files that would change without writing them
    #[arg(long)]
    dry_run: bool,

    /// Config file to use instead of <project_directory>/.goimpfmt.toml
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output the report as JSON
    #[arg(short, long)]
    json: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    commands::format::execute(
        &cli.project_directory,
        cli.project_root_package,
        cli.config,
        cli.dry_run,
        cli.json,
    )
}
