use clap::{Parser, Subcommand};
use kicad_lib_git::commands::*;
use kicad_lib_git::core::{error::LibGitError, print_error, Result};
use std::env;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "kicad-lib-git")]
#[command(about = "Git status overlay and background sync for KiCad library directories")]
#[command(version = "0.1.0")]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    /// Library directory (defaults to the current directory)
    #[arg(long, global = true, value_name = "PATH")]
    library: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the library tree with per-entry git status markers
    Tree,
    /// Show branch information and changed library entries
    Status,
    /// Fetch and fast-forward the library from its remote
    Pull,
    /// Push local library commits to the remote
    Push,
    /// Stage all changes and commit them
    Commit {
        /// Commit message
        #[arg(short, long)]
        message: String,
    },
    /// Fetch immediately and refresh tree and status
    Refresh,
    /// Run the background sync loop in the foreground
    Watch {
        /// Stop after this many timer cycles (runs until interrupted otherwise)
        #[arg(long)]
        cycles: Option<u64>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Configure logging based on --debug flag
    if cli.debug {
        env::set_var("RUST_LOG", "debug");
    } else {
        env::set_var("RUST_LOG", "info");
    }
    env_logger::init();

    let library = cli.library;
    let result = match cli.command {
        Commands::Tree => execute_tree(library),
        Commands::Status => execute_status(library),
        Commands::Pull => execute_pull(library),
        Commands::Push => execute_push(library),
        Commands::Commit { message } => execute_commit(library, message),
        Commands::Refresh => execute_refresh(library),
        Commands::Watch { cycles } => execute_watch(library, cycles),
    };

    if let Err(e) = result {
        match &e {
            LibGitError::NoRepository => print_error("No git repository in library path"),
            _ => print_error(&e.user_message()),
        }
        std::process::exit(1);
    }

    Ok(())
}
