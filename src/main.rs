//! Todo Printer - Main Entry Point
//!
//! Loads a grouped todo snapshot and renders it to standard output.
//! The actual implementation is in the `todo_printer` library.

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use std::fs;
use std::path::PathBuf;
use todo_printer::{ColorChoice, GroupBy, GroupedTodos, RenderConfig, ScreenPrinter, regroup};
use tracing_subscriber::EnvFilter;

/// Todo Printer - grouped, color-coded todo lists in the terminal
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the grouped todo snapshot (TOML)
    snapshot: PathBuf,

    /// Print notes below each todo
    #[arg(long)]
    notes: bool,

    /// When to use colors: auto, always, never (overrides the config file)
    #[arg(long)]
    color: Option<ColorChoice>,

    /// Path to the rendering config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Regroup todos: keep, none, project, context
    #[arg(long, default_value = "keep")]
    group_by: GroupBy,
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    // Check if no arguments were provided (except the program name)
    if std::env::args().len() == 1 {
        // No arguments provided, show help and exit with error code
        let mut cmd = Args::command();
        cmd.print_help().ok();
        println!(); // Add a newline after help
        std::process::exit(2);
    }

    let args = Args::parse();
    if let Err(err) = run(&args) {
        eprintln!("{:#}", err);
        let code = err
            .downcast_ref::<todo_printer::RenderError>()
            .map(|e| e.exit_code())
            .unwrap_or(1);
        std::process::exit(code);
    }
}

fn run(args: &Args) -> Result<()> {
    let mut config = match &args.config {
        Some(path) => RenderConfig::load(path)?,
        None => RenderConfig::default(),
    };
    if let Some(color) = args.color {
        config.color = color;
    }

    let content = fs::read_to_string(&args.snapshot)
        .with_context(|| format!("failed to read snapshot {}", args.snapshot.display()))?;
    let grouped: GroupedTodos = toml::from_str(&content)
        .with_context(|| format!("failed to parse snapshot {}", args.snapshot.display()))?;
    let grouped = regroup(&grouped, args.group_by);

    let mut printer = ScreenPrinter::stdout(&config);
    printer.print_today(&grouped, args.notes)?;
    Ok(())
}
