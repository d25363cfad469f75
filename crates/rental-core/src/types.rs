//! # Domain Types
//!
//! Core domain types used throughout the rental desk.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │      Car        │   │    Customer     │   │     Rental      │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (C001)      │   │  id (CUS001)    │   │  car_id         │       │
//! │  │  brand, model   │   │  name           │   │  customer_id    │       │
//! │  │  price_per_day  │   │  phone          │   │  days           │       │
//! │  │  car_type       │   └─────────────────┘   │  start_date     │       │
//! │  │  available      │                         └────────┬────────┘       │
//! │  └─────────────────┘                                  │ return         │
//! │                                                       ▼                │
//! │  ┌─────────────────┐                         ┌─────────────────┐       │
//! │  │    CarType      │                         │ CompletedRental │       │
//! │  │  ─────────────  │                         │  ─────────────  │       │
//! │  │  Sedan          │                         │  car snapshot   │       │
//! │  │  Suv            │                         │  customer snap  │       │
//! │  │  Hatchback      │                         │  dates, days    │       │
//! │  │  Sports         │                         │  final_price    │       │
//! │  └─────────────────┘                         └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Reference vs. Snapshot
//! An active [`Rental`] refers to its car and customer by id; the manager
//! resolves them, so availability is always read from one place. A
//! [`CompletedRental`] freezes copies of both at return time.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::pricing;

// =============================================================================
// Car Type
// =============================================================================

/// Body style of a car. Drives the sports surcharge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CarType {
    Sedan,
    Suv,
    Hatchback,
    Sports,
}

impl CarType {
    /// All types in menu order (selection 1..=4).
    pub const ALL: [CarType; 4] = [
        CarType::Sedan,
        CarType::Suv,
        CarType::Hatchback,
        CarType::Sports,
    ];

    /// Upper-case name, as shown in listings and matched by search.
    pub const fn name(&self) -> &'static str {
        match self {
            CarType::Sedan => "SEDAN",
            CarType::Suv => "SUV",
            CarType::Hatchback => "HATCHBACK",
            CarType::Sports => "SPORTS",
        }
    }

    #[inline]
    pub const fn is_sports(&self) -> bool {
        matches!(self, CarType::Sports)
    }
}

impl fmt::Display for CarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // pad() so width specifiers like {:<10} apply
        f.pad(self.name())
    }
}

impl FromStr for CarType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "sedan" => Ok(CarType::Sedan),
            "suv" => Ok(CarType::Suv),
            "hatchback" => Ok(CarType::Hatchback),
            "sports" | "sport" => Ok(CarType::Sports),
            other => Err(ValidationError::InvalidFormat {
                field: "car type".to_string(),
                reason: format!(
                    "unknown type '{}', expected one of: sedan, suv, hatchback, sports",
                    other
                ),
            }),
        }
    }
}

// =============================================================================
// Car
// =============================================================================

/// A car in the rental fleet.
///
/// ## Invariant
/// `available` is false iff the manager holds exactly one active rental for
/// this car. Only [`RentalManager`](crate::manager::RentalManager) flips it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Car {
    /// Business identifier (e.g. "C001").
    pub id: String,

    pub brand: String,

    pub model: String,

    /// Base daily rate before surcharges and discounts.
    pub price_per_day: f64,

    pub car_type: CarType,

    /// New cars are always available; not read from fixtures.
    #[serde(skip, default = "available_by_default")]
    available: bool,
}

fn available_by_default() -> bool {
    true
}

impl Car {
    /// Creates a new, available car.
    pub fn new(
        id: impl Into<String>,
        brand: impl Into<String>,
        model: impl Into<String>,
        price_per_day: f64,
        car_type: CarType,
    ) -> Self {
        Car {
            id: id.into(),
            brand: brand.into(),
            model: model.into(),
            price_per_day,
            car_type,
            available: true,
        }
    }

    #[inline]
    pub fn is_available(&self) -> bool {
        self.available
    }

    /// Total price for renting this car for `days` days.
    ///
    /// See [`pricing::rental_price`] for the rules. `days` must be positive;
    /// the manager rejects zero before pricing.
    pub fn price(&self, days: u32) -> f64 {
        pricing::rental_price(self.price_per_day, self.car_type, days)
    }

    /// Lower-cased "brand model TYPE" used by fleet search.
    pub fn search_text(&self) -> String {
        format!("{} {} {}", self.brand, self.model, self.car_type.name()).to_lowercase()
    }

    pub(crate) fn mark_rented(&mut self) {
        self.available = false;
    }

    pub(crate) fn mark_returned(&mut self) {
        self.available = true;
    }
}

// =============================================================================
// Customer
// =============================================================================

/// A registered customer. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    /// Business identifier (e.g. "CUS001").
    pub id: String,
    pub name: String,
    pub phone: String,
}

impl Customer {
    pub fn new(id: impl Into<String>, name: impl Into<String>, phone: impl Into<String>) -> Self {
        Customer {
            id: id.into(),
            name: name.into(),
            phone: phone.into(),
        }
    }
}

// =============================================================================
// Rental
// =============================================================================

/// An active rental: a car checked out to a customer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rental {
    pub car_id: String,
    pub customer_id: String,
    /// Agreed duration, always > 0.
    pub days: u32,
    pub start_date: DateTime<Utc>,
}

// =============================================================================
// Completed Rental
// =============================================================================

/// A historical record created when a car is returned.
/// Uses snapshot pattern to freeze car and customer data at return time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletedRental {
    /// Car as it was at return time (frozen).
    pub car: Car,
    /// Customer as it was at return time (frozen).
    pub customer: Customer,
    pub start_date: DateTime<Utc>,
    pub return_date: DateTime<Utc>,
    pub days: u32,
    /// `car.price(days)` at return time.
    pub final_price: f64,
}

impl CompletedRental {
    /// Builds the history record for `rental`, priced from `car`.
    pub(crate) fn from_rental(
        rental: Rental,
        car: Car,
        customer: Customer,
        return_date: DateTime<Utc>,
    ) -> Self {
        let final_price = car.price(rental.days);
        CompletedRental {
            car,
            customer,
            start_date: rental.start_date,
            return_date,
            days: rental.days,
            final_price,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_car_is_available() {
        let car = Car::new("C001", "Maruti Suzuki", "Swift", 2500.0, CarType::Hatchback);
        assert!(car.is_available());
    }

    #[test]
    fn test_car_type_display_pads() {
        assert_eq!(CarType::Suv.to_string(), "SUV");
        assert_eq!(format!("{:<6}|", CarType::Suv), "SUV   |");
    }

    #[test]
    fn test_car_type_from_str() {
        assert_eq!("SUV".parse::<CarType>().unwrap(), CarType::Suv);
        assert_eq!(" hatchback ".parse::<CarType>().unwrap(), CarType::Hatchback);
        assert_eq!("sport".parse::<CarType>().unwrap(), CarType::Sports);
        assert!("truck".parse::<CarType>().is_err());
    }

    #[test]
    fn test_search_text() {
        let car = Car::new("C007", "Toyota", "Innova Crysta", 6000.0, CarType::Suv);
        assert_eq!(car.search_text(), "toyota innova crysta suv");
    }

    #[test]
    fn test_car_fixture_deserializes_available() {
        let json = r#"{
            "id": "C008",
            "brand": "Maruti Suzuki",
            "model": "Baleno",
            "price_per_day": 2800.0,
            "car_type": "hatchback"
        }"#;
        let car: Car = serde_json::from_str(json).unwrap();
        assert_eq!(car.car_type, CarType::Hatchback);
        assert!(car.is_available());
    }

    #[test]
    fn test_completed_rental_prices_from_car() {
        let car = Car::new("C004", "Mahindra", "Thar", 5500.0, CarType::Suv);
        let customer = Customer::new("CUS001", "Priya Sharma", "9876543210");
        let started = Utc::now();
        let rental = Rental {
            car_id: car.id.clone(),
            customer_id: customer.id.clone(),
            days: 3,
            start_date: started,
        };

        let done = CompletedRental::from_rental(rental, car, customer, started);
        assert_eq!(done.final_price, 16500.0);
        assert_eq!(done.days, 3);
    }
}
