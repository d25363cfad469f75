//! # Validation Module
//!
//! Input validation for values typed in at the console or read from
//! fixture files.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Console prompt                                               │
//! │  ├── Parses text into numbers (re-prompts on garbage)                  │
//! │  └── THIS MODULE: range and format rules                               │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: RentalManager                                                │
//! │  ├── Existence checks (NotFound)                                       │
//! │  └── State checks (NotAvailable, InconsistentState)                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use rental_core::validation::{validate_rental_days, validate_type_selection};
//! use rental_core::CarType;
//!
//! assert_eq!(validate_rental_days(10).unwrap(), 10);
//! assert_eq!(validate_type_selection(2).unwrap(), CarType::Suv);
//! ```

use crate::error::ValidationError;
use crate::types::{Car, CarType, Customer};
use crate::MAX_RENTAL_DAYS;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates that a free-text field is present.
pub fn validate_required(field: &str, value: &str) -> ValidationResult<()> {
    if value.trim().is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    Ok(())
}

/// Validates a car id (e.g. "C008").
///
/// ## Rules
/// - Must not be empty
/// - At most 20 characters
/// - No whitespace
pub fn validate_car_id(id: &str) -> ValidationResult<()> {
    let id = id.trim();
    validate_required("car id", id)?;

    if id.len() > 20 {
        return Err(ValidationError::TooLong {
            field: "car id".to_string(),
            max: 20,
        });
    }

    if id.chars().any(char::is_whitespace) {
        return Err(ValidationError::InvalidFormat {
            field: "car id".to_string(),
            reason: "must not contain spaces".to_string(),
        });
    }

    Ok(())
}

/// Validates a search query.
///
/// ## Rules
/// - Can be empty (lists every available car)
/// - Maximum 100 characters
///
/// ## Returns
/// The trimmed query string.
pub fn validate_search_query(query: &str) -> ValidationResult<String> {
    let query = query.trim();

    if query.len() > 100 {
        return Err(ValidationError::TooLong {
            field: "query".to_string(),
            max: 100,
        });
    }

    Ok(query.to_string())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a daily rate. Must be finite and strictly positive.
pub fn validate_price_per_day(price: f64) -> ValidationResult<()> {
    if !price.is_finite() || price <= 0.0 {
        return Err(ValidationError::MustBePositive {
            field: "price per day".to_string(),
        });
    }

    Ok(())
}

/// Validates a rental duration typed in by the user.
///
/// ## Rules
/// - Must be positive (> 0)
/// - Must not exceed MAX_RENTAL_DAYS (365)
pub fn validate_rental_days(days: i64) -> ValidationResult<u32> {
    if days <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "rental days".to_string(),
        });
    }

    if days > i64::from(MAX_RENTAL_DAYS) {
        return Err(ValidationError::OutOfRange {
            field: "rental days".to_string(),
            min: 1,
            max: i64::from(MAX_RENTAL_DAYS),
        });
    }

    // In range by the checks above.
    Ok(days as u32)
}

/// Maps a 1-based menu selection onto a [`CarType`].
pub fn validate_type_selection(selection: i64) -> ValidationResult<CarType> {
    let max = CarType::ALL.len() as i64;

    if !(1..=max).contains(&selection) {
        return Err(ValidationError::OutOfRange {
            field: "type selection".to_string(),
            min: 1,
            max,
        });
    }

    Ok(CarType::ALL[(selection - 1) as usize])
}

// =============================================================================
// Entity Validators
// =============================================================================

/// Validates a car before it joins the fleet.
pub fn validate_car(car: &Car) -> ValidationResult<()> {
    validate_car_id(&car.id)?;
    validate_required("brand", &car.brand)?;
    validate_required("model", &car.model)?;
    validate_price_per_day(car.price_per_day)
}

/// Validates a customer record.
pub fn validate_customer(customer: &Customer) -> ValidationResult<()> {
    validate_required("customer id", &customer.id)?;
    validate_required("name", &customer.name)
}

// =============================================================================
// Unit Tests
// =============================================================================
