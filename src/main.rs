use anyhow::{Context, Result};
use clap::{ArgAction, CommandFactory, Parser, Subcommand};
use fool::areas::repository::Repository;
use fool::artifacts::core::PagerWriter;
use is_terminal::IsTerminal;
use minus::Pager;
use std::io::Write;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "fool",
    version,
    author = "Sami Barbut-Dica",
    about = "A minimal local version-control tool",
    long_about = "fool keeps a staging area, full-copy commit snapshots and an \
    append-only commit log inside a .fool directory. \
    It tracks files in a single working directory, with no branches and no remotes.",
    disable_version_flag = true,
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

COMMANDS:
{subcommands}

OPTIONS:
    {options}
",
)]
struct Cli {
    #[arg(short = 'V', long, action = ArgAction::SetTrue, help = "Print the version")]
    version: bool,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "init",
        about = "Initialize a new repository",
        long_about = "This command creates the .fool directory, with an empty staging area, \
        in the current directory or at the specified path."
    )]
    Init {
        #[arg(index = 1, help = "The path to the repository")]
        path: Option<PathBuf>,
    },
    #[command(
        name = "add",
        about = "Add files to the staging area",
        long_about = "This command stages files for the next commit. \
        Directories are expanded to every file below them."
    )]
    Add {
        #[arg(index = 1, num_args = 0.., help = "The files or directories to stage")]
        paths: Vec<String>,
    },
    #[command(
        name = "commit",
        about = "Commit the staged files",
        long_about = "This command snapshots every staged file, appends an entry to the log \
        and clears the staging area."
    )]
    Commit {
        #[arg(short, long, help = "The commit message")]
        message: Option<String>,
    },
    #[command(
        name = "log",
        about = "Show the commit history",
        long_about = "This command prints every commit, newest first."
    )]
    Log,
    #[command(
        name = "status",
        about = "Show the working tree status",
        long_about = "This command lists staged files, untracked files \
        and committed files modified since the last commit."
    )]
    Status,
    #[command(name = "version", about = "Print the version")]
    Version,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    if !std::io::stdout().is_terminal() {
        colored::control::set_override(false);
    }

    let cli = Cli::parse();

    if cli.version {
        return print_version();
    }

    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    match command {
        Commands::Init { path } => {
            let path = match path {
                Some(path) => path,
                None => std::env::current_dir()?,
            };
            let mut repository = Repository::new(&path, Box::new(std::io::stdout()))
                .with_context(|| format!("Failed to open repository at {}", path.display()))?;

            repository.init()?
        }
        Commands::Add { paths } => {
            let mut repository = open_repository(Box::new(std::io::stdout()))?;

            repository.add(&paths)?
        }
        Commands::Commit { message } => {
            let mut repository = open_repository(Box::new(std::io::stdout()))?;

            repository.commit(message.as_deref().unwrap_or_default())?
        }
        Commands::Log => {
            if should_page() {
                let pager = Pager::new();
                let repository = open_repository(Box::new(PagerWriter::new(pager.clone())))?;

                repository.log()?;
                minus::page_all(pager)?;
            } else {
                let repository = open_repository(Box::new(std::io::stdout()))?;

                repository.log()?
            }
        }
        Commands::Status => {
            let repository = open_repository(Box::new(std::io::stdout()))?;

            repository.status()?
        }
        Commands::Version => print_version()?,
    }

    Ok(())
}

fn open_repository(writer: Box<dyn Write>) -> Result<Repository> {
    let pwd = std::env::current_dir()?;

    Repository::new(&pwd, writer)
}

fn should_page() -> bool {
    std::io::stdout().is_terminal() && std::env::var_os("NO_PAGER").is_none()
}

fn print_version() -> Result<()> {
    writeln!(std::io::stdout(), "fool version {}", env!("CARGO_PKG_VERSION"))?;

    Ok(())
}
