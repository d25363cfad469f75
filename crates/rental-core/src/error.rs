//! # Error Types
//!
//! Domain-specific error types for rental-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  rental-core errors (this file)                                        │
//! │  ├── CoreError        - Rent/return/lookup failures                    │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  console errors (apps/console)                                         │
//! │  └── ConsoleError     - I/O, config and wrapped CoreError              │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ConsoleError → printed message    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every failure is recoverable: the console prints the message and returns
//! to the menu.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Rental desk errors.
///
/// Returned by [`RentalManager`](crate::manager::RentalManager) operations
/// so callers can branch on the exact condition.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A car or customer id does not exist.
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },

    /// Attempt to rent a car that already has an active rental.
    ///
    /// ## User Workflow
    /// ```text
    /// Rent C002 (already out)
    ///      │
    ///      ▼
    /// active rental exists for C002
    ///      │
    ///      ▼
    /// NotAvailable { car_id: "C002" }
    ///      │
    ///      ▼
    /// Console: "Car C002 is not available for rent"
    /// ```
    #[error("Car {car_id} is not available for rent")]
    NotAvailable { car_id: String },

    /// Desk state does not support the request: a return for a car with no
    /// active rental, or an active rental whose customer is not registered.
    #[error("Car {car_id} {reason}")]
    InconsistentState { car_id: String, reason: String },

    /// An argument is outside the accepted domain (e.g. zero rental days).
    #[error("Invalid input: {reason}")]
    InvalidInput { reason: String },

    /// An entity with the same id is already registered.
    #[error("{entity} with id {id} already exists")]
    AlreadyExists { entity: &'static str, id: String },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl CoreError {
    pub(crate) fn no_active_rental(car_id: &str) -> Self {
        CoreError::InconsistentState {
            car_id: car_id.to_string(),
            reason: "has no active rental to return".to_string(),
        }
    }

    pub(crate) fn car_not_found(id: &str) -> Self {
        CoreError::NotFound {
            entity: "Car",
            id: id.to_string(),
        }
    }

    pub(crate) fn customer_not_found(id: &str) -> Self {
        CoreError::NotFound {
            entity: "Customer",
            id: id.to_string(),
        }
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These occur when typed-in values don't meet requirements, before any
/// manager operation runs.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Invalid format (e.g. whitespace inside an id).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
