//! Text rendering of cars, customers, history records and price quotes.

use std::fmt::Write;

use rental_core::{Car, CompletedRental, Customer, PriceBreakdown};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Formats an amount with two decimals, e.g. `₹22500.00`.
pub fn money(symbol: &str, amount: f64) -> String {
    format!("{}{:.2}", symbol, amount)
}

pub fn car_line(car: &Car, symbol: &str) -> String {
    format!(
        "ID: {:<5} | {:<12} {:<15} | Type: {:<10} | Price/Day: {}",
        car.id,
        car.brand,
        car.model,
        car.car_type,
        money(symbol, car.price_per_day)
    )
}

pub fn customer_line(customer: &Customer) -> String {
    format!(
        "ID: {:<8} | Name: {:<20} | Phone: {}",
        customer.id, customer.name, customer.phone
    )
}

pub fn history_line(record: &CompletedRental, symbol: &str) -> String {
    format!(
        "Car: {:<25} | Rented by: {:<15} | Rented: {} | Returned: {} | Days: {:<3} | Total: {}",
        format!("{} {}", record.car.brand, record.car.model),
        record.customer.name,
        record.start_date.format(DATE_FORMAT),
        record.return_date.format(DATE_FORMAT),
        record.days,
        money(symbol, record.final_price)
    )
}

/// Multi-line quote printed before the rental is confirmed.
pub fn price_breakdown(car: &Car, quote: &PriceBreakdown, symbol: &str) -> String {
    let mut out = String::new();
    // Writing to a String cannot fail.
    let _ = writeln!(out, "\n== Price Breakdown ==");
    let _ = writeln!(out, "Car: {} {} ({})", car.brand, car.model, car.car_type);
    let _ = writeln!(out, "Base Price per Day: {}", money(symbol, quote.base_per_day));

    if let Some(surcharge) = quote.surcharge_per_day {
        let _ = writeln!(
            out,
            "Sports Car Surcharge (20%): +{}/day",
            money(symbol, surcharge)
        );
    }

    if let Some(discount) = quote.discount {
        let _ = writeln!(
            out,
            "Subtotal for {} days: {}",
            quote.days,
            money(symbol, quote.subtotal)
        );
        let _ = writeln!(out, "Long-Term Discount (10%): -{}", money(symbol, discount));
    }

    let _ = writeln!(out, "--------------------------");
    let _ = write!(
        out,
        "Total Price for {} days: {}",
        quote.days,
        money(symbol, quote.total)
    );
    out
}
