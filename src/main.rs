use anyhow::Result;
use clap::Parser;
use std::path::{Path, PathBuf};
use topolog::areas::repository::Repository;
use topolog::artifacts::core::{PagerWriter, pager_enabled};
use topolog::errors::RepoError;

#[derive(Parser)]
#[command(
    name = "topolog",
    version = "0.1.0",
    about = "Topologically ordered commit listing",
    long_about = "Reads a Git repository directly from disk and prints every commit \
    reachable from a local branch, children before parents. Branch tips carry their \
    branch names, and unrelated neighboring commits are separated by marker lines.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[arg(
        short = 'C',
        value_name = "path",
        help = "Run as if started in <path> instead of the current working directory"
    )]
    directory: Option<PathBuf>,

    #[arg(long, help = "Write the listing straight to stdout, without the pager")]
    no_pager: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let start_dir = match &cli.directory {
        Some(directory) => directory.clone(),
        None => std::env::current_dir()?,
    };

    let root = match Repository::discover_root(&start_dir) {
        Ok(root) => root,
        Err(error) if is_not_a_repository(&error) => {
            // Not an error for this tool: report and finish cleanly
            println!("{error}");
            return Ok(());
        }
        Err(error) => return Err(error),
    };

    if !cli.no_pager && pager_enabled() {
        run_paged(&root)
    } else {
        Repository::new(&root, Box::new(std::io::stdout())).topo_order()
    }
}

fn run_paged(root: &Path) -> Result<()> {
    let pager = minus::Pager::new();
    Repository::new(root, Box::new(PagerWriter::new(pager.clone()))).topo_order()?;
    minus::page_all(pager)?;

    Ok(())
}

fn is_not_a_repository(error: &anyhow::Error) -> bool {
    matches!(
        error.downcast_ref::<RepoError>(),
        Some(RepoError::RepositoryNotFound)
    )
}
