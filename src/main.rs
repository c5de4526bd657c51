//! Snippets CLI - store and retrieve named snippets of text

mod commands;

use clap::builder::NonEmptyStringValueParser;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use snippets::config;
use snippets::output::OutputMode;
use snippets::storage::SqliteStore;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "snippets")]
#[command(version)]
#[command(about = "Store and retrieve snippets of text")]
#[command(long_about = r#"
Snippets keeps named fragments of text in a local SQLite database.

The first snippet stored under a name wins; storing again under the
same name leaves the original untouched.

Example usage:
  snippets put greeting "hello world"
  snippets get greeting
  snippets catalog
  snippets search "world"
"#)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Path to the database file (overrides SNIPPETS_DB and the config file)
    #[arg(short, long, global = true)]
    database: Option<PathBuf>,

    /// Path to the config file
    #[arg(short, long, global = true, default_value = "snippets.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Store a snippet
    Put {
        /// Name of the snippet
        #[arg(value_parser = NonEmptyStringValueParser::new())]
        name: String,

        /// Snippet text
        snippet: String,
    },

    /// Retrieve a snippet
    Get {
        /// Name of the snippet
        #[arg(value_parser = NonEmptyStringValueParser::new())]
        name: String,
    },

    /// List the names of all stored snippets
    Catalog,

    /// Find snippets whose text contains a fragment
    Search {
        /// Text to look for (`%` and `_` match any run / any single character)
        snippet: String,
    },

    /// Write a config file and create the database
    Init {
        /// Overwrite an existing config file
        #[arg(short, long)]
        force: bool,
    },
}

fn init_logging(verbose: bool, log_file: Option<&Path>) -> anyhow::Result<()> {
    let default_level = if verbose || log_file.is_some() { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    match log_file {
        Some(path) => {
            let file = std::fs::OpenOptions::new().create(true).append(true).open(path)?;
            tracing_subscriber::registry()
                .with(fmt::layer().with_writer(Mutex::new(file)).with_ansi(false))
                .with(filter)
                .init();
        }
        None => {
            tracing_subscriber::registry()
                .with(fmt::layer().with_writer(std::io::stderr))
                .with(filter)
                .init();
        }
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let output_mode = OutputMode::from_json_flag(cli.json);

    let file_config = config::load_config(Some(&cli.config))?;
    let log_file = file_config
        .as_ref()
        .and_then(|c| c.log_file.as_deref())
        .filter(|s| !s.is_empty())
        .map(PathBuf::from);
    init_logging(cli.verbose, log_file.as_deref())?;

    let database = config::resolve_database_path(
        cli.database.as_deref(),
        std::env::var(config::DATABASE_ENV).ok(),
        file_config.as_ref(),
    );
    tracing::debug!("Using database {}", database.display());

    match cli.command {
        Commands::Init { force } => commands::run_init(output_mode, &cli.config, &database, force),
        Commands::Put { name, snippet } => with_store(&database, |store| {
            commands::run_put(store, output_mode, &name, &snippet)
        }),
        Commands::Get { name } => with_store(&database, |store| {
            commands::run_get(store, output_mode, &name)
        }),
        Commands::Catalog => with_store(&database, |store| {
            commands::run_catalog(store, output_mode)
        }),
        Commands::Search { snippet } => with_store(&database, |store| {
            commands::run_search(store, output_mode, &snippet)
        }),
    }
}

/// Open the store once, run one command against it, then close it
fn with_store(
    database: &Path,
    run: impl FnOnce(&mut SqliteStore) -> anyhow::Result<()>,
) -> anyhow::Result<()> {
    config::ensure_db_dir(database)?;
    let mut store = SqliteStore::open(database)?;
    run(&mut store)?;
    store.close()?;
    Ok(())
}
