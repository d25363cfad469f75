//! # Menu Loop
//!
//! The interactive front desk: shows the menu, collects input, calls
//! [`RentalManager`] and renders the outcome.
//!
//! ## Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │   show menu ──► read choice ──► handler ──► pause ──► show menu ...    │
//! │                                    │                                    │
//! │                                    ├── Ok                               │
//! │                                    ├── Core/Validation error → "Error:" │
//! │                                    └── end of input → leave loop        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::io::{BufRead, Write};

use rental_core::validation::{
    validate_car, validate_car_id, validate_rental_days, validate_required,
    validate_search_query, validate_type_selection,
};
use rental_core::{Car, CarType, CoreError, Customer, PriceBreakdown, RentalManager};
use tracing::debug;

use crate::error::{ConsoleError, ConsoleResult};
use crate::prompt::Prompter;
use crate::render;

const MENU: &str = "\n===== Car Rental System Menu =====
1. Rent a Car
2. Return a Car
3. Search & List Available Cars
4. List Rented Cars
5. View Customer Rental History
6. List All Customers
7. Add a New Car
8. Add a New Customer
9. Exit
==================================";

/// One entry of the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    RentCar,
    ReturnCar,
    SearchAvailable,
    ListRented,
    CustomerHistory,
    ListCustomers,
    AddCar,
    AddCustomer,
    Exit,
}

impl MenuChoice {
    pub fn from_number(n: i64) -> Option<Self> {
        Some(match n {
            1 => MenuChoice::RentCar,
            2 => MenuChoice::ReturnCar,
            3 => MenuChoice::SearchAvailable,
            4 => MenuChoice::ListRented,
            5 => MenuChoice::CustomerHistory,
            6 => MenuChoice::ListCustomers,
            7 => MenuChoice::AddCar,
            8 => MenuChoice::AddCustomer,
            9 => MenuChoice::Exit,
            _ => return None,
        })
    }
}

pub struct Console<'a, R, W> {
    manager: &'a mut RentalManager,
    io: Prompter<R, W>,
    currency: String,
}

impl<'a, R: BufRead, W: Write> Console<'a, R, W> {
    pub fn new(
        manager: &'a mut RentalManager,
        input: R,
        output: W,
        currency: impl Into<String>,
    ) -> Self {
        Console {
            manager,
            io: Prompter::new(input, output),
            currency: currency.into(),
        }
    }

    /// Gives back the output sink.
    pub fn into_output(self) -> W {
        self.io.into_output()
    }

    /// Runs the menu until Exit is chosen or input ends.
    pub fn run(&mut self) -> ConsoleResult<()> {
        match self.menu_loop() {
            Err(ConsoleError::InputClosed) => {
                debug!("Input closed, leaving menu");
                Ok(())
            }
            other => other,
        }
    }

    fn menu_loop(&mut self) -> ConsoleResult<()> {
        loop {
            self.io.say(MENU)?;
            let choice = self.io.ask_int("Enter your choice: ")?;

            let result = match MenuChoice::from_number(choice) {
                Some(MenuChoice::RentCar) => self.rent_car(),
                Some(MenuChoice::ReturnCar) => self.return_car(),
                Some(MenuChoice::SearchAvailable) => self.search_available_cars(),
                Some(MenuChoice::ListRented) => self.show_rented_cars(),
                Some(MenuChoice::CustomerHistory) => self.customer_history(),
                Some(MenuChoice::ListCustomers) => self.show_customers(),
                Some(MenuChoice::AddCar) => self.add_car(),
                Some(MenuChoice::AddCustomer) => self.add_customer(),
                Some(MenuChoice::Exit) => {
                    self.io.say("\nThank you for using the Car Rental System!")?;
                    return Ok(());
                }
                None => self
                    .io
                    .say("Invalid choice. Please enter a number between 1 and 9."),
            };

            match result {
                Err(e) if e.is_recoverable() => self.io.say(&format!("Error: {}", e))?,
                other => other?,
            }

            self.io.pause()?;
        }
    }

    // =========================================================================
    // Actions
    // =========================================================================

    fn rent_car(&mut self) -> ConsoleResult<()> {
        self.io.say("\n== Rent a Car ==")?;
        self.show_available_cars()?;

        let car_id = self.io.ask("Enter the car ID you want to rent: ")?;
        let car = self
            .manager
            .find_car_by_id(&car_id)
            .cloned()
            .ok_or_else(|| CoreError::NotFound {
                entity: "Car",
                id: car_id.clone(),
            })?;
        if !car.is_available() {
            return Err(CoreError::NotAvailable { car_id }.into());
        }

        let customer = self.customer_for_rental()?;

        let days = self.io.ask_int("Enter the number of days for rental: ")?;
        let days = validate_rental_days(days)?;

        let quote = PriceBreakdown::quote(&car, days);
        self.io.say(&render::price_breakdown(&car, &quote, &self.currency))?;

        if self.io.confirm("\nConfirm rental (Y/N): ")? {
            self.manager.rent_car(&car_id, &customer.id, days)?;
            self.io.say("\nCar rented successfully!")
        } else {
            self.io.say("\nRental canceled.")
        }
    }

    /// Picks an existing customer or registers a new one.
    fn customer_for_rental(&mut self) -> ConsoleResult<Customer> {
        let choice = self.io.ask("Are you a (N)ew or (E)xisting customer? ")?;

        if choice.eq_ignore_ascii_case("e") {
            self.show_customers()?;
            let customer_id = self.io.ask("Enter your Customer ID: ")?;
            let customer = self
                .manager
                .find_customer_by_id(&customer_id)
                .cloned()
                .ok_or(CoreError::NotFound {
                    entity: "Customer",
                    id: customer_id,
                })?;
            return Ok(customer);
        }

        let name = self.io.ask("Enter your name: ")?;
        validate_required("name", &name)?;
        let phone = self.io.ask("Enter your phone number: ")?;

        let customer = self.manager.register_customer(name, phone);
        self.io
            .say(&format!("New customer created with ID: {}", customer.id))?;
        Ok(customer)
    }

    fn return_car(&mut self) -> ConsoleResult<()> {
        self.io.say("\n== Return a Car ==")?;
        self.show_rented_cars()?;

        if self.manager.get_all_rented_cars().is_empty() {
            return Ok(());
        }

        let car_id = self.io.ask("Enter the car ID you want to return: ")?;
        let record = self.manager.return_car(&car_id)?;
        let line = format!(
            "Car returned successfully! Total charged: {}",
            render::money(&self.currency, record.final_price)
        );
        self.io.say(&line)
    }

    fn search_available_cars(&mut self) -> ConsoleResult<()> {
        let query = self
            .io
            .ask("Enter search term (brand, model, type) or leave blank to list all: ")?;
        let query = validate_search_query(&query)?;

        let lines: Vec<String> = self
            .manager
            .search_available_cars(&query)
            .into_iter()
            .map(|car| render::car_line(car, &self.currency))
            .collect();

        self.io.say("\n-- Available Cars --")?;
        self.io.list(lines, "No cars found matching your criteria.")
    }

    fn customer_history(&mut self) -> ConsoleResult<()> {
        self.io.say("\n== View Rental History ==")?;
        self.show_customers()?;

        let customer_id = self.io.ask("Enter Customer ID to view history: ")?;
        let name = self
            .manager
            .find_customer_by_id(&customer_id)
            .map(|customer| customer.name.clone())
            .ok_or_else(|| CoreError::NotFound {
                entity: "Customer",
                id: customer_id.clone(),
            })?;

        let lines: Vec<String> = self
            .manager
            .get_customer_rental_history(&customer_id)
            .into_iter()
            .map(|record| render::history_line(record, &self.currency))
            .collect();

        self.io.say(&format!("\n-- Rental History for {} --", name))?;
        self.io
            .list(lines, "No rental history found for this customer.")
    }

    fn add_car(&mut self) -> ConsoleResult<()> {
        self.io.say("\n== Add a New Car ==")?;

        let car_id = self.io.ask("Enter new Car ID (e.g., C008): ")?;
        validate_car_id(&car_id)?;
        self.manager.ensure_car_id_available(&car_id)?;

        let brand = self.io.ask("Enter car brand: ")?;
        let model = self.io.ask("Enter car model: ")?;
        let price = self.io.ask_f64("Enter base price per day: ")?;

        self.io.say("Select Car Type:")?;
        for (n, car_type) in CarType::ALL.iter().enumerate() {
            self.io.say(&format!("{}. {}", n + 1, car_type))?;
        }
        let selection = self.io.ask_int("Enter type number: ")?;
        let car_type = validate_type_selection(selection)?;

        let car = Car::new(car_id, brand, model, price, car_type);
        validate_car(&car)?;
        self.manager.add_car(car);
        self.io.say("Car added successfully!")
    }

    fn add_customer(&mut self) -> ConsoleResult<()> {
        self.io.say("\n== Add a New Customer ==")?;

        let name = self.io.ask("Enter customer name: ")?;
        validate_required("name", &name)?;
        let phone = self.io.ask("Enter customer phone: ")?;

        let customer = self.manager.register_customer(name, phone);
        self.io.say(&format!(
            "Customer {} added with ID: {}",
            customer.name, customer.id
        ))
    }

    // =========================================================================
    // Listings
    // =========================================================================

    fn show_available_cars(&mut self) -> ConsoleResult<()> {
        let lines: Vec<String> = self
            .manager
            .get_all_available_cars()
            .into_iter()
            .map(|car| render::car_line(car, &self.currency))
            .collect();

        self.io.say("\n-- Available Cars --")?;
        self.io.list(lines, "No cars are currently available.")
    }

    fn show_rented_cars(&mut self) -> ConsoleResult<()> {
        let lines: Vec<String> = self
            .manager
            .get_all_rented_cars()
            .into_iter()
            .map(|car| render::car_line(car, &self.currency))
            .collect();

        self.io.say("\n-- Rented Cars --")?;
        self.io.list(lines, "No cars are currently rented.")
    }

    fn show_customers(&mut self) -> ConsoleResult<()> {
        let lines: Vec<String> = self
            .manager
            .get_all_customers()
            .into_iter()
            .map(render::customer_line)
            .collect();

        self.io.say("\n-- All Customers --")?;
        self.io.list(lines, "No customers registered yet.")
    }
}
