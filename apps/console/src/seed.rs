//! # Seed Data
//!
//! Populates a fresh [`RentalManager`] before the menu starts.
//!
//! ## Sources
//! - Built-in sample fleet of popular Indian cars and three customers
//!   (disable with `--no-seed`, `CAR_RENTAL_SEED=false` or
//!   `seed.sample_data = false`)
//! - `[[seed.cars]]` / `[[seed.customers]]` from the config file, applied
//!   afterwards so they can replace sample entries by id

use rental_core::{Car, CarType, Customer, RentalManager};
use tracing::info;

use crate::config::SeedSettings;

/// Built-in fleet: (id, brand, model, price per day, type).
const SAMPLE_CARS: &[(&str, &str, &str, f64, CarType)] = &[
    ("C001", "Maruti Suzuki", "Swift", 2500.0, CarType::Hatchback),
    ("C002", "Hyundai", "Creta", 4000.0, CarType::Suv),
    ("C003", "Tata", "Nexon", 3800.0, CarType::Suv),
    ("C004", "Mahindra", "Thar", 5500.0, CarType::Suv),
    ("C005", "Honda", "City", 3500.0, CarType::Sedan),
    ("C006", "Kia", "Seltos", 4200.0, CarType::Suv),
    ("C007", "Toyota", "Innova Crysta", 6000.0, CarType::Suv),
];

/// Built-in customers: (id, name, phone).
const SAMPLE_CUSTOMERS: &[(&str, &str, &str)] = &[
    ("CUS001", "Priya Sharma", "9876543210"),
    ("CUS002", "Rohan Kumar", "9988776655"),
    ("CUS003", "Anjali Singh", "9123456789"),
];

/// Adds the built-in sample fleet and customers.
pub fn load_sample_data(manager: &mut RentalManager) {
    for &(id, brand, model, price, car_type) in SAMPLE_CARS {
        manager.add_car(Car::new(id, brand, model, price, car_type));
    }
    for &(id, name, phone) in SAMPLE_CUSTOMERS {
        manager.add_customer(Customer::new(id, name, phone));
    }
}

/// Seeds `manager` according to the config.
pub fn seed(manager: &mut RentalManager, settings: &SeedSettings) {
    if settings.sample_data {
        load_sample_data(manager);
    }

    for car in &settings.cars {
        manager.add_car(car.clone());
    }
    for customer in &settings.customers {
        manager.add_customer(customer.clone());
    }

    info!(
        cars = manager.get_all_available_cars().len(),
        customers = manager.get_all_customers().len(),
        "Rental desk seeded"
    );
}
