//! # Customer
//!
//! A customer and the ordered list of their rentals.
//!
//! ## Statement Flow
//! ```text
//! Customer.rentals ──► Rental.charge() ──► SharedMovie ──► PricingStrategy
//!        │
//!        ▼
//! StatementSummary ──► render_text / render_html / render_json
//! ```

use crate::error::CoreResult;
use crate::money::Money;
use crate::rental::Rental;
use crate::statement::{render_html, render_text, StatementFormat, StatementSummary};

/// A customer with rentals in the order they were added.
#[derive(Debug, Clone, Default)]
pub struct Customer {
    name: String,
    rentals: Vec<Rental>,
}

impl Customer {
    pub fn new(name: impl Into<String>) -> Self {
        Customer {
            name: name.into(),
            rentals: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Appends a rental. Duplicates are kept.
    pub fn add_rental(&mut self, rental: Rental) {
        self.rentals.push(rental);
    }

    /// Rentals in insertion order.
    pub fn rentals(&self) -> &[Rental] {
        &self.rentals
    }

    pub fn rental_count(&self) -> usize {
        self.rentals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rentals.is_empty()
    }

    /// Sum of all rental charges.
    pub fn total_charge(&self) -> Money {
        self.rentals.iter().map(Rental::charge).sum()
    }

    /// Sum of all frequent renter points.
    pub fn total_frequent_renter_points(&self) -> u32 {
        self.rentals.iter().map(Rental::frequent_renter_points).sum()
    }

    /// Snapshot of the statement figures at the current prices.
    pub fn summary(&self) -> StatementSummary {
        StatementSummary::new(&self.name, &self.rentals)
    }

    /// Plain-text statement.
    ///
    /// ## Example
    /// ```rust
    /// use rental_core::{Customer, Movie, PriceCategory, Rental};
    ///
    /// let mut customer = Customer::new("A");
    /// let movie = Movie::new("regular1", PriceCategory::Regular).into_shared();
    /// customer.add_rental(Rental::new(movie, 3).unwrap());
    ///
    /// assert_eq!(
    ///     customer.statement(),
    ///     "Rental Record for A\n\tregular1\t3.5\n\
    ///      Amount owed is 3.5\nYou earned 1 frequent renter points"
    /// );
    /// ```
    pub fn statement(&self) -> String {
        render_text(&self.summary())
    }

    /// HTML statement fragment.
    pub fn html_statement(&self) -> String {
        render_html(&self.summary())
    }

    /// Renders the statement in any supported format.
    pub fn render(&self, format: StatementFormat) -> CoreResult<String> {
        self.summary().render(format)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
