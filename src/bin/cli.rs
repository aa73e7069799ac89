//! TallyKV Shell Binary
//!
//! Runs commands from a script file or stdin against a fresh database.

use std::io::{self, BufWriter};
use std::path::PathBuf;

use clap::Parser;
use tallykv::shell::Shell;
use tallykv::{Config, Database};
use tracing_subscriber::{fmt, EnvFilter};

/// TallyKV Shell
#[derive(Parser, Debug)]
#[command(name = "tallykv")]
#[command(about = "In-memory key-value store with undo-log transactions and value counts")]
#[command(version)]
struct Args {
    /// Script file to run instead of reading stdin
    #[arg(short, long)]
    script: Option<PathBuf>,

    /// Echo each command before its response
    #[arg(short, long)]
    echo: bool,

    /// Keep value counts across CLEAR
    #[arg(long)]
    keep_index_on_clear: bool,

    /// Remove committed deletes from the table instead of leaving tombstones
    #[arg(long)]
    purge_tombstones: bool,
}

fn main() {
    // Initialize tracing/logging on stderr; stdout carries responses only
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,tallykv=info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    tracing::info!("TallyKV v{}", tallykv::VERSION);

    // Build config from args
    let config = Config::builder()
        .reset_index_on_clear(!args.keep_index_on_clear)
        .purge_tombstones_on_commit(args.purge_tombstones)
        .echo_commands(args.echo)
        .build();

    let stdout = io::stdout();
    let mut shell = Shell::new(Database::with_config(config), BufWriter::new(stdout.lock()));

    let result = match &args.script {
        Some(path) => {
            tracing::info!("Script: {}", path.display());
            shell.run_file(path)
        }
        None => shell.run(io::stdin().lock()),
    };

    match result {
        Ok(stats) => {
            tracing::info!(
                "Session finished: {} commands, {} errors",
                stats.commands_executed,
                stats.errors
            );
        }
        Err(e) => {
            tracing::error!("Shell error: {}", e);
            std::process::exit(1);
        }
    }
}
