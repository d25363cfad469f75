//! End-to-end rental lifecycle through the public API.

use pretty_assertions::assert_eq;
use rental_core::pricing::{LONG_TERM_DISCOUNT_MULTIPLIER, SPORTS_SURCHARGE_MULTIPLIER};
use rental_core::{Car, CarType, CoreError, Customer, RentalManager};

fn seeded() -> RentalManager {
    let mut manager = RentalManager::new();
    for car in [
        Car::new("C001", "Maruti Suzuki", "Swift", 2500.0, CarType::Hatchback),
        Car::new("C002", "Hyundai", "Creta", 4000.0, CarType::Suv),
        Car::new("C003", "Tata", "Nexon", 3800.0, CarType::Suv),
        Car::new("C004", "Mahindra", "Thar", 5500.0, CarType::Suv),
        Car::new("C005", "Honda", "City", 3500.0, CarType::Sedan),
        Car::new("C009", "Tata", "Altroz", 2600.0, CarType::Hatchback),
    ] {
        manager.add_car(car);
    }
    manager.add_customer(Customer::new("CUS001", "Priya Sharma", "9876543210"));
    manager
}

#[test]
fn rent_to_new_customer_and_return() {
    let mut manager = RentalManager::new();
    manager.add_car(Car::new("C001", "Maruti Suzuki", "Swift", 2500.0, CarType::Hatchback));

    let customer = manager.register_customer("Arjun Mehta", "9000011111");
    let quote = manager.find_car_by_id("C001").unwrap().price(10);
    assert_eq!(quote, 22500.0);

    manager.rent_car("C001", &customer.id, 10).unwrap();
    assert!(!manager.find_car_by_id("C001").unwrap().is_available());

    manager.return_car("C001").unwrap();

    let history = manager.get_customer_rental_history(&customer.id);
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].final_price, 22500.0);
    assert_eq!(history[0].car.id, "C001");
    assert!(manager.find_car_by_id("C001").unwrap().is_available());
}

#[test]
fn failed_operations_leave_state_untouched() {
    let mut manager = seeded();
    manager.rent_car("C004", "CUS001", 4).unwrap();

    let before_available = manager.get_all_available_cars().len();
    assert!(matches!(
        manager.rent_car("C004", "CUS001", 2),
        Err(CoreError::NotAvailable { .. })
    ));
    assert!(matches!(
        manager.return_car("C005"),
        Err(CoreError::InconsistentState { .. })
    ));

    assert_eq!(manager.get_all_available_cars().len(), before_available);
    assert_eq!(manager.active_rental("C004").unwrap().days, 4);
    assert!(manager.rental_history().is_empty());
}

#[test]
fn search_combines_terms() {
    let manager = seeded();

    let suvs: Vec<&str> = manager
        .search_available_cars("suv")
        .iter()
        .map(|car| car.id.as_str())
        .collect();
    assert_eq!(suvs, vec!["C002", "C003", "C004"]);

    let tata_suv: Vec<&str> = manager
        .search_available_cars("tata suv")
        .iter()
        .map(|car| car.id.as_str())
        .collect();
    assert_eq!(tata_suv, vec!["C003"]);
}

#[test]
fn pricing_properties_hold_across_fleet() {
    let mut manager = seeded();
    manager.add_car(Car::new("S001", "BMW", "Z4", 9000.0, CarType::Sports));

    for car in manager.get_all_available_cars() {
        let multiplier = if car.car_type == CarType::Sports {
            SPORTS_SURCHARGE_MULTIPLIER
        } else {
            1.0
        };

        for days in 1..=30u32 {
            let expected = if days > 7 {
                car.price_per_day * multiplier * f64::from(days) * LONG_TERM_DISCOUNT_MULTIPLIER
            } else {
                car.price_per_day * multiplier * f64::from(days)
            };
            assert!(
                (car.price(days) - expected).abs() < 1e-6,
                "{} for {} days",
                car.id,
                days
            );
            if car.car_type != CarType::Sports && days <= 7 {
                assert_eq!(car.price(days), car.price_per_day * f64::from(days));
            }
        }
    }
}

#[test]
fn customers_listing_is_idempotent() {
    let manager = seeded();
    assert_eq!(manager.get_all_customers(), manager.get_all_customers());
}

fn availability_matches_active_rentals(manager: &RentalManager) {
    for car in manager
        .get_all_available_cars()
        .into_iter()
        .chain(manager.get_all_rented_cars())
    {
        assert_eq!(
            car.is_available(),
            manager.active_rental(&car.id).is_none(),
            "{}",
            car.id
        );
    }
}

#[test]
fn overwriting_ids_in_use_keeps_rentals_consistent() {
    let mut manager = seeded();
    manager.rent_car("C001", "CUS001", 10).unwrap();

    manager.add_car(Car::new("C001", "Maruti Suzuki", "Swift Sport", 9000.0, CarType::Sports));
    manager.add_customer(Customer::new("CUS001", "Priya S. Sharma", "9876500000"));
    availability_matches_active_rentals(&manager);

    assert!(!manager.find_car_by_id("C001").unwrap().is_available());
    assert!(manager.search_available_cars("swift").is_empty());
    assert!(matches!(
        manager.rent_car("C001", "CUS001", 2),
        Err(CoreError::NotAvailable { .. })
    ));

    let record = manager.return_car("C001").unwrap();
    let expected = 9000.0 * SPORTS_SURCHARGE_MULTIPLIER * 10.0 * LONG_TERM_DISCOUNT_MULTIPLIER;
    assert!((record.final_price - expected).abs() < 1e-6);
    assert_eq!(record.customer.name, "Priya S. Sharma");
    availability_matches_active_rentals(&manager);
    assert!(manager.find_car_by_id("C001").unwrap().is_available());
}
