//! # Rental Manager
//!
//! Owns the fleet, the customer register, active rentals and rental
//! history, and performs every state transition between them.
//!
//! ## State Transitions
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Car Lifecycle                                       │
//! │                                                                         │
//! │   add_car()                                                             │
//! │      │                                                                  │
//! │      ▼                  rent_car()                                      │
//! │  ┌──────────┐  ───────────────────────────►  ┌──────────┐              │
//! │  │AVAILABLE │                                │  RENTED  │              │
//! │  │          │  ◄───────────────────────────  │          │              │
//! │  └──────────┘          return_car()          └──────────┘              │
//! │                             │                                           │
//! │                             ▼                                           │
//! │                 CompletedRental appended to history                     │
//! │                                                                         │
//! │  rent_car on RENTED      → NotAvailable       (no mutation)             │
//! │  return_car on AVAILABLE → InconsistentState  (no mutation)             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Ordering
//! Cars and customers are kept in `BTreeMap`s, so every listing comes back
//! in ascending id order. History is kept in return order.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};

use crate::error::{CoreError, CoreResult};
use crate::types::{Car, CompletedRental, Customer, Rental};

/// Characters removed from a search query before it is split into terms.
const SEARCH_STRIP_CHARS: [char; 3] = ['(', ')', ','];

/// In-memory rental desk state.
///
/// Constructed explicitly and passed to whatever drives it; there is no
/// process-wide instance.
#[derive(Debug)]
pub struct RentalManager {
    cars: BTreeMap<String, Car>,
    customers: BTreeMap<String, Customer>,
    /// Active rentals indexed by car id (at most one per car).
    active_rentals: BTreeMap<String, Rental>,
    history: Vec<CompletedRental>,
    /// Next candidate for generated customer ids; only ever grows.
    next_customer_seq: u32,
}

impl Default for RentalManager {
    fn default() -> Self {
        RentalManager::new()
    }
}

impl RentalManager {
    pub fn new() -> Self {
        RentalManager {
            cars: BTreeMap::new(),
            customers: BTreeMap::new(),
            active_rentals: BTreeMap::new(),
            history: Vec::new(),
            next_customer_seq: 1,
        }
    }

    // =========================================================================
    // Registration
    // =========================================================================

    /// Inserts a car, replacing any car with the same id.
    ///
    /// Returns the replaced car. Callers that need uniqueness check with
    /// [`ensure_car_id_available`](Self::ensure_car_id_available) first.
    ///
    /// A replacement for a car that is out stays rented, and the eventual
    /// return is priced from the replacement record.
    pub fn add_car(&mut self, mut car: Car) -> Option<Car> {
        info!(car_id = %car.id, brand = %car.brand, model = %car.model, "Car added to fleet");
        if self.active_rentals.contains_key(&car.id) {
            warn!(car_id = %car.id, "Replacing a car that is currently rented");
            car.mark_rented();
        }
        let replaced = self.cars.insert(car.id.clone(), car);
        if let Some(old) = &replaced {
            warn!(car_id = %old.id, "Existing car overwritten");
        }
        replaced
    }

    /// Inserts a customer, replacing any customer with the same id.
    pub fn add_customer(&mut self, customer: Customer) -> Option<Customer> {
        info!(customer_id = %customer.id, "Customer registered");
        let replaced = self.customers.insert(customer.id.clone(), customer);
        if let Some(old) = &replaced {
            warn!(customer_id = %old.id, "Existing customer overwritten");
        }
        replaced
    }

    /// Fails with `AlreadyExists` if a car with this id is in the fleet.
    pub fn ensure_car_id_available(&self, car_id: &str) -> CoreResult<()> {
        if self.cars.contains_key(car_id) {
            return Err(CoreError::AlreadyExists {
                entity: "Car",
                id: car_id.to_string(),
            });
        }
        Ok(())
    }

    /// Generates a fresh customer id of the form `CUS001`.
    ///
    /// Ids come from a counter that never goes backwards and skips ids that
    /// are already taken, so a generated id is never handed out twice.
    pub fn next_customer_id(&mut self) -> String {
        loop {
            let candidate = format!("CUS{:03}", self.next_customer_seq);
            self.next_customer_seq += 1;
            if !self.customers.contains_key(&candidate) {
                return candidate;
            }
        }
    }

    /// Creates a customer under a generated id and registers it.
    pub fn register_customer(
        &mut self,
        name: impl Into<String>,
        phone: impl Into<String>,
    ) -> Customer {
        let customer = Customer::new(self.next_customer_id(), name, phone);
        self.add_customer(customer.clone());
        customer
    }

    // =========================================================================
    // Lookup
    // =========================================================================

    pub fn find_car_by_id(&self, car_id: &str) -> Option<&Car> {
        self.cars.get(car_id)
    }

    pub fn find_customer_by_id(&self, customer_id: &str) -> Option<&Customer> {
        self.customers.get(customer_id)
    }

    /// The active rental for a car, if it is out.
    pub fn active_rental(&self, car_id: &str) -> Option<&Rental> {
        self.active_rentals.get(car_id)
    }

    /// All active rentals, ordered by car id.
    pub fn active_rentals(&self) -> impl Iterator<Item = &Rental> {
        self.active_rentals.values()
    }

    /// Every completed rental, in return order.
    pub fn rental_history(&self) -> &[CompletedRental] {
        &self.history
    }

    pub fn get_all_available_cars(&self) -> Vec<&Car> {
        self.cars.values().filter(|car| car.is_available()).collect()
    }

    pub fn get_all_rented_cars(&self) -> Vec<&Car> {
        self.cars.values().filter(|car| !car.is_available()).collect()
    }

    pub fn get_all_customers(&self) -> Vec<&Customer> {
        self.customers.values().collect()
    }

    /// Searches available cars by brand, model or type.
    ///
    /// The query is lower-cased, stripped of `(`, `)` and `,`, and split on
    /// whitespace. A car matches when every term is a substring of its
    /// [`search_text`](Car::search_text). A blank query lists every
    /// available car.
    ///
    /// ## Example
    /// ```rust
    /// use rental_core::{Car, CarType, RentalManager};
    ///
    /// let mut manager = RentalManager::new();
    /// manager.add_car(Car::new("C002", "Hyundai", "Creta", 4000.0, CarType::Suv));
    /// manager.add_car(Car::new("C003", "Tata", "Nexon", 3800.0, CarType::Suv));
    ///
    /// let hits = manager.search_available_cars("Tata (SUV)");
    /// assert_eq!(hits.len(), 1);
    /// assert_eq!(hits[0].id, "C003");
    /// ```
    pub fn search_available_cars(&self, query: &str) -> Vec<&Car> {
        if query.trim().is_empty() {
            return self.get_all_available_cars();
        }

        let cleaned: String = query
            .to_lowercase()
            .chars()
            .filter(|c| !SEARCH_STRIP_CHARS.contains(c))
            .collect();
        let terms: Vec<&str> = cleaned.split_whitespace().collect();
        debug!(?terms, "Searching available cars");

        self.cars
            .values()
            .filter(|car| car.is_available())
            .filter(|car| {
                let text = car.search_text();
                terms.iter().all(|term| text.contains(term))
            })
            .collect()
    }

    /// Completed rentals of one customer, in return order.
    pub fn get_customer_rental_history(&self, customer_id: &str) -> Vec<&CompletedRental> {
        self.history
            .iter()
            .filter(|record| record.customer.id == customer_id)
            .collect()
    }

    // =========================================================================
    // Rent / Return
    // =========================================================================

    /// Rents a car to a customer starting now.
    ///
    /// ## Errors
    /// - `NotFound` if the car or customer id is unknown
    /// - `InvalidInput` if `days` is zero
    /// - `NotAvailable` if the car is already out
    ///
    /// Nothing is modified when an error is returned.
    pub fn rent_car(&mut self, car_id: &str, customer_id: &str, days: u32) -> CoreResult<&Rental> {
        self.rent_car_at(car_id, customer_id, days, Utc::now())
    }

    /// [`rent_car`](Self::rent_car) with an explicit start time.
    pub fn rent_car_at(
        &mut self,
        car_id: &str,
        customer_id: &str,
        days: u32,
        start_date: DateTime<Utc>,
    ) -> CoreResult<&Rental> {
        if days == 0 {
            warn!(car_id, "Rejected rental with zero days");
            return Err(CoreError::InvalidInput {
                reason: "rental days must be positive".to_string(),
            });
        }

        if !self.customers.contains_key(customer_id) {
            warn!(customer_id, "Rejected rental for unknown customer");
            return Err(CoreError::customer_not_found(customer_id));
        }

        let car = self
            .cars
            .get_mut(car_id)
            .ok_or_else(|| CoreError::car_not_found(car_id))?;

        if !car.is_available() || self.active_rentals.contains_key(car_id) {
            warn!(car_id, "Rejected rental of unavailable car");
            return Err(CoreError::NotAvailable {
                car_id: car_id.to_string(),
            });
        }

        car.mark_rented();
        info!(car_id, customer_id, days, "Car rented");

        let rental = Rental {
            car_id: car_id.to_string(),
            customer_id: customer_id.to_string(),
            days,
            start_date,
        };
        let rental: &Rental = self
            .active_rentals
            .entry(car_id.to_string())
            .or_insert(rental);
        Ok(rental)
    }

    /// Returns a rented car and records the completed rental.
    ///
    /// ## Errors
    /// - `NotFound` if the car id is unknown
    /// - `InconsistentState` if the car has no active rental, or its renter
    ///   is not a registered customer
    ///
    /// Nothing is modified when an error is returned.
    pub fn return_car(&mut self, car_id: &str) -> CoreResult<&CompletedRental> {
        self.return_car_at(car_id, Utc::now())
    }

    /// [`return_car`](Self::return_car) with an explicit return time.
    pub fn return_car_at(
        &mut self,
        car_id: &str,
        return_date: DateTime<Utc>,
    ) -> CoreResult<&CompletedRental> {
        if !self.cars.contains_key(car_id) {
            return Err(CoreError::car_not_found(car_id));
        }

        let customer_id = match self.active_rentals.get(car_id) {
            Some(rental) => rental.customer_id.clone(),
            None => {
                warn!(car_id, "Return requested for car without an active rental");
                return Err(CoreError::no_active_rental(car_id));
            }
        };

        let customer = match self.customers.get(&customer_id) {
            Some(customer) => customer.clone(),
            None => {
                warn!(car_id, %customer_id, "Active rental refers to an unregistered customer");
                return Err(CoreError::InconsistentState {
                    car_id: car_id.to_string(),
                    reason: format!("is rented to unregistered customer {}", customer_id),
                });
            }
        };

        let rental = self
            .active_rentals
            .remove(car_id)
            .ok_or_else(|| CoreError::no_active_rental(car_id))?;

        let car = self
            .cars
            .get_mut(car_id)
            .ok_or_else(|| CoreError::car_not_found(car_id))?;
        car.mark_returned();
        let car = car.clone();

        let record = CompletedRental::from_rental(rental, car, customer, return_date);
        info!(
            car_id,
            customer_id = %record.customer.id,
            final_price = record.final_price,
            "Car returned"
        );

        let index = self.history.len();
        self.history.push(record);
        Ok(&self.history[index])
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CarType;
    use chrono::Duration;
    use pretty_assertions::assert_eq;

    fn manager_with_fleet() -> RentalManager {
        let mut manager = RentalManager::new();
        manager.add_car(Car::new("C001", "Maruti Suzuki", "Swift", 2500.0, CarType::Hatchback));
        manager.add_car(Car::new("C002", "Hyundai", "Creta", 4000.0, CarType::Suv));
        manager.add_car(Car::new("C003", "Tata", "Nexon", 3800.0, CarType::Suv));
        manager.add_car(Car::new("C005", "Honda", "City", 3500.0, CarType::Sedan));
        manager.add_customer(Customer::new("CUS001", "Priya Sharma", "9876543210"));
        manager.add_customer(Customer::new("CUS002", "Rohan Kumar", "9988776655"));
        manager
    }

    fn ids(cars: &[&Car]) -> Vec<String> {
        cars.iter().map(|car| car.id.clone()).collect()
    }

    #[test]
    fn test_add_car_overwrites_by_id() {
        let mut manager = RentalManager::new();
        assert!(manager
            .add_car(Car::new("C001", "Maruti Suzuki", "Swift", 2500.0, CarType::Hatchback))
            .is_none());

        let replaced = manager.add_car(Car::new("C001", "Maruti Suzuki", "Dzire", 2700.0, CarType::Sedan));
        assert_eq!(replaced.map(|car| car.model), Some("Swift".to_string()));
        assert_eq!(manager.find_car_by_id("C001").unwrap().model, "Dzire");
    }

    #[test]
    fn test_replacing_rented_car_keeps_it_rented() {
        let mut manager = manager_with_fleet();
        manager.rent_car("C001", "CUS001", 10).unwrap();

        let replacement = Car::new("C001", "Maruti Suzuki", "Swift ZXi", 3000.0, CarType::Hatchback);
        let expected = replacement.price(10);
        let replaced = manager.add_car(replacement);
        assert_eq!(replaced.map(|car| car.model), Some("Swift".to_string()));

        let car = manager.find_car_by_id("C001").unwrap();
        assert!(!car.is_available());
        assert_eq!(car.is_available(), manager.active_rental("C001").is_none());
        assert!(!ids(&manager.get_all_available_cars()).contains(&"C001".to_string()));
        assert!(manager.search_available_cars("swift").is_empty());
        assert_eq!(ids(&manager.get_all_rented_cars()), vec!["C001"]);

        let record = manager.return_car("C001").unwrap();
        assert_eq!(record.final_price, expected);
        assert_eq!(record.final_price, 27000.0);
        assert!(manager.find_car_by_id("C001").unwrap().is_available());
    }

    #[test]
    fn test_return_with_unregistered_renter_is_inconsistent() {
        let mut manager = manager_with_fleet();
        manager.rent_car("C002", "CUS002", 3).unwrap();
        manager.customers.remove("CUS002");

        let err = manager.return_car("C002").unwrap_err();
        assert!(matches!(err, CoreError::InconsistentState { ref car_id, .. } if car_id == "C002"));
        assert_eq!(err.to_string(), "Car C002 is rented to unregistered customer CUS002");

        assert!(manager.active_rental("C002").is_some());
        assert!(!manager.find_car_by_id("C002").unwrap().is_available());
        assert!(manager.rental_history().is_empty());
    }

    #[test]
    fn test_find_missing_returns_none() {
        let manager = manager_with_fleet();
        assert!(manager.find_car_by_id("C999").is_none());
        assert!(manager.find_customer_by_id("CUS999").is_none());
    }

    #[test]
    fn test_ensure_car_id_available() {
        let manager = manager_with_fleet();
        assert!(manager.ensure_car_id_available("C008").is_ok());
        assert!(matches!(
            manager.ensure_car_id_available("C001"),
            Err(CoreError::AlreadyExists { .. })
        ));
    }

    #[test]
    fn test_rent_and_return_toggle_availability() {
        let mut manager = manager_with_fleet();

        let rental = manager.rent_car("C002", "CUS001", 3).unwrap();
        assert_eq!(rental.customer_id, "CUS001");
        assert!(!manager.find_car_by_id("C002").unwrap().is_available());
        assert!(manager.active_rental("C002").is_some());

        let record = manager.return_car("C002").unwrap();
        assert_eq!(record.final_price, 12000.0);
        assert!(manager.find_car_by_id("C002").unwrap().is_available());
        assert!(manager.active_rental("C002").is_none());
        assert_eq!(manager.rental_history().len(), 1);
    }

    #[test]
    fn test_rent_unavailable_car_fails_without_mutation() {
        let mut manager = manager_with_fleet();
        manager.rent_car("C002", "CUS001", 3).unwrap();

        let err = manager.rent_car("C002", "CUS002", 5).unwrap_err();
        assert!(matches!(err, CoreError::NotAvailable { ref car_id } if car_id == "C002"));

        let rental = manager.active_rental("C002").unwrap();
        assert_eq!(rental.customer_id, "CUS001");
        assert_eq!(rental.days, 3);
        assert_eq!(manager.active_rentals().count(), 1);
    }

    #[test]
    fn test_rent_rejects_unknown_ids_and_zero_days() {
        let mut manager = manager_with_fleet();

        assert!(matches!(
            manager.rent_car("C999", "CUS001", 2),
            Err(CoreError::NotFound { entity: "Car", .. })
        ));
        assert!(matches!(
            manager.rent_car("C001", "CUS999", 2),
            Err(CoreError::NotFound { entity: "Customer", .. })
        ));
        assert!(matches!(
            manager.rent_car("C001", "CUS001", 0),
            Err(CoreError::InvalidInput { .. })
        ));
        assert!(manager.find_car_by_id("C001").unwrap().is_available());
        assert_eq!(manager.active_rentals().count(), 0);
    }

    #[test]
    fn test_return_without_active_rental_is_inconsistent() {
        let mut manager = manager_with_fleet();

        assert!(matches!(
            manager.return_car("C001"),
            Err(CoreError::InconsistentState { .. })
        ));
        assert!(matches!(
            manager.return_car("C999"),
            Err(CoreError::NotFound { .. })
        ));
        assert!(manager.rental_history().is_empty());
    }

    #[test]
    fn test_completed_rental_keeps_dates() {
        let mut manager = manager_with_fleet();
        let start = Utc::now() - Duration::days(10);
        let end = Utc::now();

        manager.rent_car_at("C001", "CUS002", 10, start).unwrap();
        let record = manager.return_car_at("C001", end).unwrap();

        assert_eq!(record.start_date, start);
        assert_eq!(record.return_date, end);
        assert_eq!(record.days, 10);
        assert_eq!(record.final_price, 22500.0);
    }

    #[test]
    fn test_available_and_rented_listings() {
        let mut manager = manager_with_fleet();
        manager.rent_car("C003", "CUS001", 2).unwrap();

        assert_eq!(ids(&manager.get_all_available_cars()), vec!["C001", "C002", "C005"]);
        assert_eq!(ids(&manager.get_all_rented_cars()), vec!["C003"]);
    }

    #[test]
    fn test_search_blank_lists_available() {
        let mut manager = manager_with_fleet();
        manager.rent_car("C001", "CUS001", 2).unwrap();

        assert_eq!(ids(&manager.search_available_cars("")), vec!["C002", "C003", "C005"]);
        assert_eq!(ids(&manager.search_available_cars("   ")), vec!["C002", "C003", "C005"]);
    }

    #[test]
    fn test_search_by_type_is_case_insensitive() {
        let manager = manager_with_fleet();
        assert_eq!(ids(&manager.search_available_cars("suv")), vec!["C002", "C003"]);
        assert_eq!(ids(&manager.search_available_cars("SuV")), vec!["C002", "C003"]);
    }

    #[test]
    fn test_search_requires_every_term() {
        let manager = manager_with_fleet();
        assert_eq!(ids(&manager.search_available_cars("tata suv")), vec!["C003"]);
        assert_eq!(ids(&manager.search_available_cars("Tata  (SUV),")), vec!["C003"]);
        assert!(manager.search_available_cars("tata sedan").is_empty());
    }

    #[test]
    fn test_search_matches_substrings_and_skips_rented() {
        let mut manager = manager_with_fleet();
        assert_eq!(ids(&manager.search_available_cars("hyun")), vec!["C002"]);

        manager.rent_car("C002", "CUS001", 1).unwrap();
        assert!(manager.search_available_cars("hyun").is_empty());
    }

    #[test]
    fn test_customer_history_in_return_order() {
        let mut manager = manager_with_fleet();
        manager.rent_car("C001", "CUS001", 2).unwrap();
        manager.rent_car("C002", "CUS002", 2).unwrap();
        manager.rent_car("C005", "CUS001", 9).unwrap();

        manager.return_car("C005").unwrap();
        manager.return_car("C002").unwrap();
        manager.return_car("C001").unwrap();

        let history: Vec<String> = manager
            .get_customer_rental_history("CUS001")
            .iter()
            .map(|record| record.car.id.clone())
            .collect();
        assert_eq!(history, vec!["C005", "C001"]);
        assert!(manager.get_customer_rental_history("CUS999").is_empty());
    }

    #[test]
    fn test_generated_customer_ids_skip_taken_and_never_repeat() {
        let mut manager = manager_with_fleet();

        let first = manager.register_customer("Anjali Singh", "9123456789");
        assert_eq!(first.id, "CUS003");
        assert_eq!(manager.next_customer_id(), "CUS004");
        assert_eq!(manager.next_customer_id(), "CUS005");
        assert_eq!(manager.get_all_customers().len(), 3);
    }

    #[test]
    fn test_get_all_customers_is_stable() {
        let manager = manager_with_fleet();
        let first: Vec<&Customer> = manager.get_all_customers();
        let second: Vec<&Customer> = manager.get_all_customers();
        assert_eq!(first, second);
    }
}
