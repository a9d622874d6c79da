//! mathops - interactive calculator.
//!
//! # Usage
//!
//! ```bash
//! # Start the interactive menu
//! mathops
//!
//! # Print the demo calculations and exit
//! mathops demo
//!
//! # Show every operation as it is called
//! mathops --verbose
//! ```

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::debug;

use mathops::calculator::MathService;
use mathops::config::Config;
use mathops::logging::init_tracing;
use mathops::shell::{MenuItem, Shell};

#[derive(Parser, Debug)]
#[command(name = "mathops", version)]
#[command(about = "Interactive calculator for basic, advanced and trigonometric math")]
struct Cli {
    /// Path to the config file (defaults to $XDG_CONFIG_HOME/mathops/config.toml).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug-level logging.
    #[arg(long, short, global = true)]
    verbose: bool,

    /// Suppress all logging output.
    #[arg(long, short, global = true, conflicts_with = "verbose")]
    quiet: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the demo calculations and exit.
    Demo,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::load(cli.config.as_deref())?;
    init_tracing(cli.quiet, cli.verbose, &config.logging.level);
    debug!(?config, "loaded configuration");

    let stdin = io::stdin();
    let mut shell = Shell::new(
        MathService::new(),
        config.display,
        stdin.lock(),
        io::stdout().lock(),
    );

    match cli.command {
        Some(Command::Demo) => shell
            .run_section(MenuItem::Demo)
            .context("Demo calculations failed")?,
        None => shell.run().context("Calculator shell failed")?,
    }

    Ok(())
}
