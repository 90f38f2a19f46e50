//! # Movie
//!
//! A rentable title bound to the pricing strategy of its category.
//!
//! ## Sharing
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │   Rental(3 days) ──┐                                                    │
//! │                    ├──► SharedMovie ──► Movie { "Alien", Regular }      │
//! │   Rental(5 days) ──┘         │                                          │
//! │                              ▼                                          │
//! │              set_category(NewRelease)                                   │
//! │                                                                         │
//! │   Both rentals now price as NewRelease on their next charge().          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Rentals alias one movie instead of copying it, so a re-categorized movie
//! is re-priced everywhere. The handle is single-threaded (`Rc<RefCell<_>>`).

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::error::CoreResult;
use crate::money::Money;
use crate::pricing::{PriceCategory, PricingStrategy};

// =============================================================================
// Movie
// =============================================================================

/// A titled movie and the strategy pricing it.
///
/// The category is read from the bound strategy, so the two can never
/// disagree.
#[derive(Clone)]
pub struct Movie {
    title: String,
    strategy: &'static dyn PricingStrategy,
}

impl Movie {
    /// Creates a movie priced under `category`.
    ///
    /// ## Example
    /// ```rust
    /// use rental_core::{Movie, PriceCategory};
    ///
    /// let movie = Movie::new("Alien", PriceCategory::Regular);
    /// assert_eq!(movie.charge(3).to_string(), "3.5");
    /// ```
    pub fn new(title: impl Into<String>, category: PriceCategory) -> Self {
        Movie {
            title: title.into(),
            strategy: category.strategy(),
        }
    }

    /// Creates a movie from a legacy numeric price code.
    ///
    /// Fails with `CoreError::InvalidCategory` for unknown codes.
    pub fn from_code(title: impl Into<String>, code: i64) -> CoreResult<Self> {
        let category = PriceCategory::from_code(code)?;
        Ok(Movie::new(title, category))
    }

    /// Creates a movie from a category name such as `"new_release"`.
    pub fn from_name(title: impl Into<String>, name: &str) -> CoreResult<Self> {
        let category = name.parse::<PriceCategory>()?;
        Ok(Movie::new(title, category))
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn category(&self) -> PriceCategory {
        self.strategy.category()
    }

    /// Re-binds the pricing strategy.
    pub fn set_category(&mut self, category: PriceCategory) {
        self.strategy = category.strategy();
    }

    /// Re-binds the pricing strategy from a legacy numeric code.
    ///
    /// On an unknown code the current category is left untouched.
    pub fn set_category_code(&mut self, code: i64) -> CoreResult<()> {
        let category = PriceCategory::from_code(code)?;
        self.set_category(category);
        Ok(())
    }

    /// Charge for renting this movie for `days_rented` days.
    pub fn charge(&self, days_rented: u32) -> Money {
        self.strategy.charge(days_rented)
    }

    /// Frequent renter points for renting this movie for `days_rented` days.
    pub fn frequent_renter_points(&self, days_rented: u32) -> u32 {
        self.strategy.frequent_renter_points(days_rented)
    }

    /// Wraps the movie in a handle rentals can share.
    pub fn into_shared(self) -> SharedMovie {
        SharedMovie::new(self)
    }
}

impl fmt::Debug for Movie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Movie")
            .field("title", &self.title)
            .field("category", &self.category())
            .finish()
    }
}

// =============================================================================
// Shared Movie Handle
// =============================================================================

/// Aliased, mutable handle to a [`Movie`].
///
/// Cloning the handle shares the movie; it never copies it.
#[derive(Clone)]
pub struct SharedMovie(Rc<RefCell<Movie>>);

impl SharedMovie {
    pub fn new(movie: Movie) -> Self {
        SharedMovie(Rc::new(RefCell::new(movie)))
    }

    /// Copy of the movie as it is right now.
    ///
    /// Later re-categorizations through the handle do not affect the copy.
    pub fn snapshot(&self) -> Movie {
        self.0.borrow().clone()
    }

    pub fn title(&self) -> String {
        self.0.borrow().title().to_string()
    }

    pub fn category(&self) -> PriceCategory {
        self.0.borrow().category()
    }

    /// Re-categorizes the movie for every holder of this handle.
    pub fn set_category(&self, category: PriceCategory) {
        self.0.borrow_mut().set_category(category);
    }

    /// Re-categorizes the movie from a legacy numeric code.
    pub fn set_category_code(&self, code: i64) -> CoreResult<()> {
        self.0.borrow_mut().set_category_code(code)
    }

    pub fn charge(&self, days_rented: u32) -> Money {
        self.0.borrow().charge(days_rented)
    }

    pub fn frequent_renter_points(&self, days_rented: u32) -> u32 {
        self.0.borrow().frequent_renter_points(days_rented)
    }

    /// Returns true if both handles point at the same movie.
    pub fn ptr_eq(&self, other: &SharedMovie) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl From<Movie> for SharedMovie {
    fn from(movie: Movie) -> Self {
        SharedMovie::new(movie)
    }
}

impl fmt::Debug for SharedMovie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.0.borrow(), f)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
