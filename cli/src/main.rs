//! Port Randomizer CLI - pick a random free port or list ports in use
//!
//! A command-line tool for selecting available ports, listing ports that
//! are currently bound, and sampling well-known ports.

mod commands;
mod logging;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use port_randomizer_core::{ConfigStore, Protocol};

use commands::{list::ListMode, Context};

#[derive(Parser)]
#[command(name = "port-randomizer")]
#[command(author, version, about = "Pick a random free port or list ports in use")]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Silence gamified output
    #[arg(short, long, global = true)]
    silent: bool,

    /// Output in JSON format
    #[arg(long, global = true)]
    json: bool,

    /// Path to the config file (default: ~/.port-randomizer/config.json)
    #[arg(short, long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Log debug details to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Randomly generates a free port (TCP by default)
    Randomize {
        /// Pick a UDP port instead of a TCP port
        #[arg(short, long)]
        udp: bool,
    },

    /// List used ports
    #[command(alias = "ls")]
    ListActive {
        /// List used TCP ports
        #[arg(short, long)]
        tcp: bool,

        /// List used UDP ports
        #[arg(short, long)]
        udp: bool,

        /// List all used ports (TCP and UDP)
        #[arg(short, long)]
        all: bool,
    },

    /// Check a well-known port
    CheckWellKnown,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::setup_tracing(cli.verbose)?;

    let store = match cli.config {
        Some(path) => ConfigStore::with_path(path),
        None => ConfigStore::new()?,
    };
    let ctx = Context {
        config: store.load().await?,
        silent: cli.silent,
        json: cli.json,
    };

    match cli.command {
        Commands::Randomize { udp } => {
            let protocol = if udp { Protocol::Udp } else { Protocol::Tcp };
            commands::randomize::run(&ctx, protocol).await?;
        }
        Commands::ListActive { tcp, udp, all } => {
            let mode = match (tcp, udp, all) {
                (true, false, false) => Some(ListMode::Single(Protocol::Tcp)),
                (false, true, false) => Some(ListMode::Single(Protocol::Udp)),
                (false, false, true) => Some(ListMode::All),
                _ => None,
            };
            commands::list::run(&ctx, mode).await?;
        }
        Commands::CheckWellKnown => {
            commands::well_known::run(&ctx)?;
        }
    }

    Ok(())
}
