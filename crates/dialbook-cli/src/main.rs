mod commands;
mod error;
mod util;

use anyhow::{Context as _, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;

use crate::commands::{completions, contacts, Context};
use crate::error::{exit_code_for, report_error};
use dialbook_config as config;
use dialbook_store::{paths, ContactStore};

#[derive(Debug, Parser)]
#[command(name = "dialbook", version, about = "dialbook contact book")]
struct Cli {
    #[arg(long, global = true)]
    data_path: Option<PathBuf>,
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[arg(long, global = true)]
    json: bool,
    #[arg(long, short, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Add a contact with a name and phone number
    Add(contacts::AddArgs),
    /// List every contact in insertion order
    List(contacts::ListArgs),
    /// Find contacts by name or phone digits
    Search(contacts::SearchArgs),
    /// Delete by phone, or every contact with a given name
    Delete(contacts::DeleteArgs),
    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let verbose = cli.verbose;
    init_logging(verbose);
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report_error(&err, verbose);
            exit_code_for(&err)
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let Cli {
        data_path,
        config: config_path,
        json,
        verbose,
        command,
    } = cli;

    if let Command::Completions(args) = command {
        return completions::emit(args);
    }

    let app_config = config::load(config_path.clone()).with_context(|| "load config")?;
    if verbose {
        match config::resolve_config_path(config_path) {
            Ok(path) if path.exists() => debug!(path = %path.display(), "config resolved"),
            Ok(path) => debug!(path = %path.display(), "config missing, using defaults"),
            Err(err) => debug!(error = %err, "config unavailable"),
        }
    }

    let data_path = paths::resolve_data_path(data_path.or(app_config.data_path))
        .with_context(|| "resolve data path")?;
    debug!(path = %data_path.display(), "data path resolved");

    let mut store = ContactStore::load(&data_path);
    let mut ctx = Context {
        store: &mut store,
        data_path: &data_path,
        json: json || app_config.output.json,
    };

    match command {
        Command::Add(args) => contacts::add_contact(&mut ctx, args),
        Command::List(args) => contacts::list_contacts(&ctx, args),
        Command::Search(args) => contacts::search_contacts(&ctx, args),
        Command::Delete(args) => contacts::delete_contact(&mut ctx, args),
        Command::Completions(_) => {
            unreachable!("completions command handled before store initialization")
        }
    }
}

fn init_logging(verbose: bool) {
    use tracing_subscriber::{fmt, EnvFilter};
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .try_init();
}
