mod commands;
mod inventory;
mod report;

use anyhow::Result;
use clap::{Parser, Subcommand};
use report::Format;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "macctl")]
#[command(author, version, about = "MAC address parsing and inventory checks", long_about = None)]
struct Cli {
    /// Output format
    #[arg(long, short = 'f', global = true, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse colon-separated addresses (e.g., AA:BB:CC:DD:EE:FF)
    Parse {
        /// Addresses to parse
        #[arg(required = true)]
        addresses: Vec<String>,
    },
    /// Build addresses from integers (decimal, 0x-prefixed hex)
    FromInt {
        /// Integers to convert
        #[arg(required = true, allow_negative_numbers = true)]
        integers: Vec<String>,
    },
    /// Validate a list of addresses, one per line
    ///
    /// Leading and trailing whitespace on each line is ignored before
    /// validation, as are blank lines and `#` comments. `parse` applies the
    /// strict grammar to its arguments as given.
    Check {
        /// File to read (standard input if omitted)
        file: Option<String>,
    },
    /// Work with a YAML host inventory
    Inventory {
        #[command(subcommand)]
        action: InventoryCommands,
    },
}

#[derive(Subcommand)]
enum InventoryCommands {
    /// Report addresses claimed by more than one host
    Check {
        /// Inventory file
        file: String,
    },
    /// List the hosts owning an address
    Lookup {
        /// Inventory file
        file: String,
        /// Address to look up (any case)
        address: String,
    },
    /// Rewrite an inventory with canonical addresses
    Normalize {
        /// Inventory file
        file: String,
        /// Destination (defaults to rewriting the input file)
        #[arg(long, short = 'o')]
        output: Option<String>,
    },
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "macctl=debug" } else { "macctl=info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let ok = match cli.command {
        Commands::Parse { addresses } => commands::convert::parse(&addresses, cli.format)?,
        Commands::FromInt { integers } => commands::convert::from_int(&integers, cli.format)?,
        Commands::Check { file } => commands::check::handle(file.as_deref(), cli.format)?,
        Commands::Inventory { action } => commands::inventory::handle(action, cli.format)?,
    };

    Ok(if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}
