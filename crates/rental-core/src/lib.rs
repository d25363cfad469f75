//! # rental-core: Pure Rental Logic for the Car Rental Desk
//!
//! This crate holds the fleet, customers, rentals and pricing rules as plain
//! in-memory data with zero I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Car Rental Desk Architecture                        │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 apps/console (car-rental binary)                │   │
//! │  │     Menu loop ──► prompts ──► RentalManager calls ──► render    │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              ★ rental-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │  pricing  │  │  manager  │  │ validation│  │   │
//! │  │   │   Car     │  │ surcharge │  │ rent      │  │   rules   │  │   │
//! │  │   │  Rental   │  │ discount  │  │ return    │  │   checks  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO GLOBAL STATE • EXPLICIT ERRORS                   │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Car, Customer, Rental, CompletedRental)
//! - [`pricing`] - Price rules and itemised quotes
//! - [`manager`] - `RentalManager`, the owner of all state
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation
//!
//! ## Example Usage
//!
//! ```rust
//! use rental_core::{Car, CarType, Customer, RentalManager};
//!
//! let mut manager = RentalManager::new();
//! manager.add_car(Car::new("C001", "Maruti Suzuki", "Swift", 2500.0, CarType::Hatchback));
//! manager.add_customer(Customer::new("CUS001", "Priya Sharma", "9876543210"));
//!
//! manager.rent_car("C001", "CUS001", 10).unwrap();
//! let record = manager.return_car("C001").unwrap();
//!
//! // 2500 × 10 days, less 10% for renting more than a week
//! assert_eq!(record.final_price, 22500.0);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod manager;
pub mod pricing;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ValidationError};
pub use manager::RentalManager;
pub use pricing::PriceBreakdown;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Longest rental the desk accepts, in days.
pub const MAX_RENTAL_DAYS: u32 = 365;
