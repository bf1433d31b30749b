use std::path::PathBuf;

use booktool::AppError;
use clap::{Parser, Subcommand};

/// Base URL the book's index page is hosted at.
const BOOK_BASE_URL: &str = "https://stepanzh.github.io/computational_thermodynamics/";

/// Book checkout location inside the build container.
const BOOK_ROOT: &str = "/root/book";

/// Jupyter kernelspec the book's documents execute under.
const DEFAULT_KERNEL: &str = "julia-1.10";

#[derive(Parser)]
#[command(name = "booktool")]
#[command(version)]
#[command(
    about = "Maintenance helpers for the book build pipeline",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rewrite the jupytext kernelspec in the book's MyST markdown sources
    #[clap(visible_alias = "ck")]
    ChangeKernel {
        /// Jupyter kernelspec name to write into each document
        #[arg(short, long, default_value = DEFAULT_KERNEL)]
        kernel: String,
        /// Root of the book checkout to scan
        #[arg(long, default_value = BOOK_ROOT)]
        root: PathBuf,
        /// Container marker file checked before any mutation
        #[arg(long, default_value = booktool::services::CONTAINER_MARKER)]
        container_marker: PathBuf,
        /// Program performing the rewrite
        #[arg(long, default_value = booktool::services::JUPYTER_BOOK_PROGRAM)]
        tool: String,
    },
    /// Print sitemap.xml for the book's table of contents to stdout
    #[clap(visible_alias = "sm")]
    Sitemap {
        /// Path to the book's _toc.yml
        #[arg(long, default_value = "_toc.yml")]
        toc: PathBuf,
        /// URL the book's index page is hosted at
        #[arg(long, default_value = BOOK_BASE_URL)]
        base_url: String,
    },
}

fn main() {
    let cli = Cli::parse();

    let result: Result<(), AppError> = match cli.command {
        Commands::ChangeKernel { kernel, root, container_marker, tool } => {
            booktool::change_kernel(&kernel, &root, &container_marker, &tool).map(|_| ())
        }
        Commands::Sitemap { toc, base_url } => booktool::sitemap(&toc, &base_url),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
