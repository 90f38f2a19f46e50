//! # rental-core: Pure Business Logic for Rental Statements
//!
//! Pricing, loyalty points and statement rendering for a video-rental
//! customer, as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                statement-cli (rental-statement)                 │   │
//! │  │    sheet file ──► Customer ──► statement on stdout              │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ rental-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │  pricing  │  │   movie   │  │  customer │  │ statement │  │   │
//! │  │   │ Category  │  │   Movie   │  │  Customer │  │ text/html │  │   │
//! │  │   │ Strategy  │  │  Rental   │  │  totals   │  │   json    │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`pricing`] - Price categories and their pricing strategies
//! - [`movie`] - Movie and the shared movie handle
//! - [`rental`] - A movie rented for some days
//! - [`customer`] - Customer totals and statements
//! - [`statement`] - Statement formats and renderers
//! - [`money`] - Money type with integer arithmetic
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation
//!
//! ## Example Usage
//!
//! ```rust
//! use rental_core::{Customer, Movie, PriceCategory, Rental};
//!
//! let regular = Movie::new("regular1", PriceCategory::Regular).into_shared();
//! let new_release = Movie::new("new_release1", PriceCategory::NewRelease).into_shared();
//! let children = Movie::new("children1", PriceCategory::Children).into_shared();
//!
//! let mut customer = Customer::new("A");
//! customer.add_rental(Rental::new(regular, 3).unwrap());
//! customer.add_rental(Rental::new(new_release, 2).unwrap());
//! customer.add_rental(Rental::new(children, 5).unwrap());
//!
//! assert_eq!(customer.total_charge().to_string(), "14.0");
//! assert_eq!(customer.total_frequent_renter_points(), 4);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod customer;
pub mod error;
pub mod money;
pub mod movie;
pub mod pricing;
pub mod rental;
pub mod statement;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use customer::Customer;
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use movie::{Movie, SharedMovie};
pub use pricing::{PriceCategory, PricingStrategy};
pub use rental::Rental;
pub use statement::{StatementFormat, StatementLine, StatementSummary};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum length of a movie title, in characters.
pub const MAX_TITLE_LENGTH: usize = 200;

/// Maximum length of a customer name, in characters.
pub const MAX_CUSTOMER_NAME_LENGTH: usize = 100;
