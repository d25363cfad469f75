//! # Pricing Module
//!
//! Rental price rules and the itemised quote shown before a rental is
//! confirmed.
//!
//! ## Rules
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  PRICE = base/day × surcharge × days × discount                        │
//! │                                                                         │
//! │  surcharge: 1.20 for SPORTS cars, otherwise 1.0                        │
//! │  discount:  0.90 when days > 7, otherwise 1.0                          │
//! │                                                                         │
//! │  Example: Honda City (SEDAN, 3500/day) for 10 days                     │
//! │    3500 × 1.0 × 10 = 35000  → × 0.90 = 31500                           │
//! │                                                                         │
//! │  Example: SPORTS car (5000/day) for 8 days                             │
//! │    5000 × 1.20 × 8 = 48000  → × 0.90 = 43200                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Amounts are plain `f64` currency units; rounding to two decimals happens
//! only when displayed.

use serde::Serialize;

use crate::types::{Car, CarType};

/// Multiplier applied to the daily rate of sports cars (20% surcharge).
pub const SPORTS_SURCHARGE_MULTIPLIER: f64 = 1.20;

/// Multiplier applied to the total of long rentals (10% discount).
pub const LONG_TERM_DISCOUNT_MULTIPLIER: f64 = 0.90;

/// Rentals strictly longer than this many days get the long-term discount.
pub const LONG_TERM_THRESHOLD_DAYS: u32 = 7;

/// Daily rate after the type surcharge.
#[inline]
pub fn effective_daily_rate(base_per_day: f64, car_type: CarType) -> f64 {
    if car_type.is_sports() {
        base_per_day * SPORTS_SURCHARGE_MULTIPLIER
    } else {
        base_per_day
    }
}

/// Whether `days` qualifies for the long-term discount.
#[inline]
pub const fn is_long_term(days: u32) -> bool {
    days > LONG_TERM_THRESHOLD_DAYS
}

/// Computes the total price of a rental.
///
/// Surcharge and discount are independent: a sports car rented for more
/// than a week gets both.
///
/// ## Example
/// ```rust
/// use rental_core::pricing::rental_price;
/// use rental_core::CarType;
///
/// assert_eq!(rental_price(2500.0, CarType::Hatchback, 3), 7500.0);
/// assert_eq!(rental_price(2500.0, CarType::Hatchback, 10), 22500.0);
/// ```
pub fn rental_price(base_per_day: f64, car_type: CarType, days: u32) -> f64 {
    let total = effective_daily_rate(base_per_day, car_type) * f64::from(days);

    if is_long_term(days) {
        total * LONG_TERM_DISCOUNT_MULTIPLIER
    } else {
        total
    }
}

// =============================================================================
// Price Breakdown
// =============================================================================

/// Itemised quote for renting one car for a number of days.
///
/// ## Where It's Used
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  Rent flow: pick car → pick customer → enter days                      │
/// │                                  │                                      │
/// │                                  ▼                                      │
/// │            PriceBreakdown::quote(car, days)  ← THIS TYPE                │
/// │                                  │                                      │
/// │                                  ▼                                      │
/// │          "== Price Breakdown ==" printed, then Y/N confirm             │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PriceBreakdown {
    pub days: u32,
    pub base_per_day: f64,
    /// Extra per day for sports cars, `None` otherwise.
    pub surcharge_per_day: Option<f64>,
    /// Total before the long-term discount.
    pub subtotal: f64,
    /// Amount taken off by the long-term discount, `None` for short rentals.
    pub discount: Option<f64>,
    /// Always equal to `car.price(days)`.
    pub total: f64,
}

impl PriceBreakdown {
    pub fn quote(car: &Car, days: u32) -> Self {
        let per_day = effective_daily_rate(car.price_per_day, car.car_type);
        let subtotal = per_day * f64::from(days);
        let total = rental_price(car.price_per_day, car.car_type, days);

        PriceBreakdown {
            days,
            base_per_day: car.price_per_day,
            surcharge_per_day: car
                .car_type
                .is_sports()
                .then(|| per_day - car.price_per_day),
            subtotal,
            discount: is_long_term(days).then(|| subtotal - total),
            total,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
