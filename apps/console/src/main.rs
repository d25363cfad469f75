//! # Car Rental Desk Entry Point
//!
//! ```bash
//! car-rental                        # sample fleet, default config location
//! car-rental --config ./desk.toml   # explicit config file
//! car-rental --no-seed              # start with an empty fleet
//! RUST_LOG=debug car-rental         # verbose logs on stderr
//! ```

use std::io;
use std::path::PathBuf;

use clap::Parser;
use tracing::{error, info};

use rental_console::{build_manager, init_tracing, Console, ConsoleConfig};

#[derive(Parser)]
#[command(
    name = "car-rental",
    about = "Car Rental Desk - rent, return and track cars from the terminal"
)]
struct Cli {
    /// Path to a TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Start without the built-in sample fleet and customers
    #[arg(long)]
    no_seed: bool,

    /// Log filter, e.g. "debug" or "rental_core=trace" (overrides RUST_LOG)
    #[arg(long)]
    log_level: Option<String>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_tracing(cli.log_level.as_deref());

    info!("Starting Car Rental Desk");

    let mut config = ConsoleConfig::load(cli.config).map_err(|e| {
        error!("Failed to load config: {}", e);
        e
    })?;
    if cli.no_seed {
        config.seed.sample_data = false;
    }

    let mut manager = build_manager(&config);

    let stdin = io::stdin();
    let mut console = Console::new(
        &mut manager,
        stdin.lock(),
        io::stdout(),
        config.display.currency_symbol.clone(),
    );
    console.run()?;

    info!("Car Rental Desk closed");
    Ok(())
}
