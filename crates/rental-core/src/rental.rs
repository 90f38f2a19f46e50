//! # Rental
//!
//! One movie rented for a number of days.

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::movie::SharedMovie;
use crate::validation::validate_days_rented;

/// A movie rented for a validated, positive number of days.
///
/// The rental holds a handle to the movie, not a copy: re-categorizing the
/// movie changes what this rental charges next time it is asked.
#[derive(Debug, Clone)]
pub struct Rental {
    movie: SharedMovie,
    days_rented: u32,
}

impl Rental {
    /// Creates a rental.
    ///
    /// Fails with `CoreError::InvalidDuration` when `days_rented <= 0`.
    ///
    /// ## Example
    /// ```rust
    /// use rental_core::{Movie, PriceCategory, Rental};
    ///
    /// let movie = Movie::new("Heat", PriceCategory::NewRelease).into_shared();
    /// let rental = Rental::new(movie.clone(), 2).unwrap();
    /// assert_eq!(rental.charge().to_string(), "6.0");
    ///
    /// assert!(Rental::new(movie, 0).is_err());
    /// ```
    pub fn new(movie: SharedMovie, days_rented: i64) -> CoreResult<Self> {
        let days_rented = validate_days_rented(days_rented).map_err(CoreError::InvalidDuration)?;
        Ok(Rental { movie, days_rented })
    }

    pub fn movie(&self) -> &SharedMovie {
        &self.movie
    }

    pub fn days_rented(&self) -> u32 {
        self.days_rented
    }

    /// Title of the rented movie.
    pub fn title(&self) -> String {
        self.movie.title()
    }

    pub fn charge(&self) -> Money {
        self.movie.charge(self.days_rented)
    }

    pub fn frequent_renter_points(&self) -> u32 {
        self.movie.frequent_renter_points(self.days_rented)
    }
}
