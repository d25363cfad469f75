//! # Car Rental Console Library
//!
//! Everything behind the `car-rental` binary, kept in a library so the menu
//! can be driven from tests with in-memory input.
//!
//! ## Module Organization
//! ```text
//! rental_console/
//! ├── lib.rs       ◄─── You are here (startup helpers)
//! ├── config.rs    ◄─── TOML config + env overrides
//! ├── seed.rs      ◄─── Sample fleet and fixture loading
//! ├── console.rs   ◄─── Menu loop and actions
//! ├── prompt.rs    ◄─── Line input/output helpers
//! ├── render.rs    ◄─── Text formatting of cars, customers, history
//! └── error.rs     ◄─── ConsoleError
//! ```
//!
//! ## Startup Sequence
//! 1. Parse CLI flags
//! 2. Initialize tracing (stderr)
//! 3. Load configuration
//! 4. Build and seed the RentalManager
//! 5. Run the menu on stdin/stdout

pub mod config;
pub mod console;
pub mod error;
pub mod prompt;
pub mod render;
pub mod seed;

use rental_core::RentalManager;
use tracing::info;
use tracing_subscriber::EnvFilter;

pub use config::ConsoleConfig;
pub use console::Console;
pub use error::{ConsoleError, ConsoleResult};

/// Default log filter when neither `--log-level` nor `RUST_LOG` is set.
const DEFAULT_LOG_FILTER: &str = "warn,rental_core=info,rental_console=info";

/// Initializes tracing on stderr, keeping stdout for the menu.
///
/// An explicit `level` wins over `RUST_LOG`.
pub fn init_tracing(level: Option<&str>) {
    let filter = match level {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Builds a manager seeded according to `config`.
pub fn build_manager(config: &ConsoleConfig) -> RentalManager {
    let mut manager = RentalManager::new();
    seed::seed(&mut manager, &config.seed);
    info!(
        currency = %config.display.currency_symbol,
        "Rental desk ready"
    );
    manager
}
