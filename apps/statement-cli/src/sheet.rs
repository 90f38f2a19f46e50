//! # Rental Sheets
//!
//! File format describing a customer, the movies on offer and the rentals
//! to bill.
//!
//! ```toml
//! customer = "A"
//!
//! [[movies]]
//! title = "regular1"
//! category = "regular"        # or a legacy price code: 0, 1, 2
//!
//! [[rentals]]
//! movie = "regular1"
//! days = 3
//!
//! [[recategorize]]            # optional, applied after all rentals
//! movie = "regular1"
//! category = "new_release"
//! ```
//!
//! Rentals of the same title share one movie handle, so a `recategorize`
//! entry re-prices all of them.

use rental_core::validation::{validate_customer_name, validate_title};
use rental_core::{CoreError, CoreResult, Customer, Movie, PriceCategory, Rental, SharedMovie};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, info};

use crate::error::{CliError, CliResult};

// =============================================================================
// Sheet Entries
// =============================================================================

/// A category written either as a name or as a legacy numeric code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CategoryValue {
    Code(i64),
    Name(String),
}

impl CategoryValue {
    pub fn resolve(&self) -> CoreResult<PriceCategory> {
        match self {
            CategoryValue::Code(code) => PriceCategory::from_code(*code),
            CategoryValue::Name(name) => name.parse(),
        }
    }
}

impl From<PriceCategory> for CategoryValue {
    fn from(category: PriceCategory) -> Self {
        CategoryValue::Name(category.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieEntry {
    pub title: String,
    pub category: CategoryValue,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RentalEntry {
    /// Title of a movie from `movies`.
    pub movie: String,
    pub days: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecategorizeEntry {
    pub movie: String,
    pub category: CategoryValue,
}

// =============================================================================
// Rental Sheet
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RentalSheet {
    pub customer: String,
    #[serde(default)]
    pub movies: Vec<MovieEntry>,
    #[serde(default)]
    pub rentals: Vec<RentalEntry>,
    #[serde(default)]
    pub recategorize: Vec<RecategorizeEntry>,
}

impl RentalSheet {
    /// Customer "A" renting one title of each category.
    pub fn reference() -> Self {
        let movie = |title: &str, category: PriceCategory| MovieEntry {
            title: title.to_string(),
            category: category.into(),
        };
        let rental = |title: &str, days: i64| RentalEntry {
            movie: title.to_string(),
            days,
        };

        RentalSheet {
            customer: "A".to_string(),
            movies: vec![
                movie("regular1", PriceCategory::Regular),
                movie("new_release1", PriceCategory::NewRelease),
                movie("children1", PriceCategory::Children),
            ],
            rentals: vec![
                rental("regular1", 3),
                rental("new_release1", 2),
                rental("children1", 5),
            ],
            recategorize: Vec::new(),
        }
    }

    /// Reads a sheet; `.json` files are parsed as JSON, anything else as TOML.
    pub fn load(path: &Path) -> CliResult<Self> {
        info!(?path, "Loading rental sheet");
        let contents = std::fs::read_to_string(path)
            .map_err(|e| CliError::SheetLoadFailed(format!("{}: {}", path.display(), e)))?;

        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        if is_json {
            Self::from_json_str(&contents)
        } else {
            Self::from_toml_str(&contents)
        }
    }

    pub fn from_toml_str(contents: &str) -> CliResult<Self> {
        Ok(toml::from_str(contents)?)
    }

    pub fn from_json_str(contents: &str) -> CliResult<Self> {
        Ok(serde_json::from_str(contents)?)
    }

    /// Builds the customer described by the sheet.
    pub fn build(&self) -> CliResult<Customer> {
        validate_customer_name(&self.customer).map_err(|e| CliError::InvalidEntry {
            entry: "customer".to_string(),
            source: e.into(),
        })?;

        let movies = self.build_movies()?;
        let mut customer = Customer::new(self.customer.trim());

        for (index, entry) in self.rentals.iter().enumerate() {
            let label = format!("rental #{}", index + 1);
            let movie = lookup(&movies, &label, &entry.movie)?;
            let rental = Rental::new(movie.clone(), entry.days).map_err(|source| {
                CliError::InvalidEntry {
                    entry: format!("{} ('{}')", label, entry.movie),
                    source,
                }
            })?;
            customer.add_rental(rental);
        }

        for (index, entry) in self.recategorize.iter().enumerate() {
            let label = format!("recategorize #{}", index + 1);
            let movie = lookup(&movies, &label, &entry.movie)?;
            let category = entry
                .category
                .resolve()
                .map_err(|source| CliError::InvalidEntry {
                    entry: format!("{} ('{}')", label, entry.movie),
                    source,
                })?;
            debug!(
                movie = %entry.movie,
                from = %movie.category(),
                to = %category,
                "Recategorizing movie"
            );
            movie.set_category(category);
        }

        debug!(
            customer = %customer.name(),
            rentals = customer.rental_count(),
            "Rental sheet built"
        );
        Ok(customer)
    }

    fn build_movies(&self) -> CliResult<HashMap<&str, SharedMovie>> {
        let mut movies = HashMap::with_capacity(self.movies.len());

        for entry in &self.movies {
            let label = || format!("movie '{}'", entry.title);
            validate_title(&entry.title).map_err(|e| CliError::InvalidEntry {
                entry: label(),
                source: CoreError::from(e),
            })?;
            let category = entry
                .category
                .resolve()
                .map_err(|source| CliError::InvalidEntry {
                    entry: label(),
                    source,
                })?;

            let movie = Movie::new(entry.title.as_str(), category).into_shared();
            if movies.insert(entry.title.as_str(), movie).is_some() {
                return Err(CliError::DuplicateMovie(entry.title.clone()));
            }
        }

        Ok(movies)
    }
}

fn lookup<'a>(
    movies: &'a HashMap<&str, SharedMovie>,
    entry: &str,
    title: &str,
) -> CliResult<&'a SharedMovie> {
    movies.get(title).ok_or_else(|| CliError::UnknownMovie {
        entry: entry.to_string(),
        title: title.to_string(),
    })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rental_core::ValidationError;

    const SHEET: &str = r#"
customer = "Dana"

[[movies]]
title = "Alien"
category = "regular"

[[movies]]
title = "Heat"
category = 1

[[rentals]]
movie = "Alien"
days = 4

[[rentals]]
movie = "Heat"
days = 1

[[rentals]]
movie = "Alien"
days = 1
"#;

    #[test]
    fn test_reference_sheet() {
        let customer = RentalSheet::reference().build().unwrap();
        assert_eq!(customer.name(), "A");
        assert_eq!(customer.total_charge().to_string(), "14.0");
        assert_eq!(customer.total_frequent_renter_points(), 4);
    }

    #[test]
    fn test_toml_sheet() {
        let sheet = RentalSheet::from_toml_str(SHEET).unwrap();
        assert_eq!(sheet.movies[1].category, CategoryValue::Code(1));

        let customer = sheet.build().unwrap();
        let titles: Vec<String> = customer.rentals().iter().map(Rental::title).collect();
        assert_eq!(titles, vec!["Alien", "Heat", "Alien"]);
        // 5.0 + 3.0 + 2.0
        assert_eq!(customer.total_charge().cents(), 1000);
        assert!(customer.rentals()[0]
            .movie()
            .ptr_eq(customer.rentals()[2].movie()));
    }

    #[test]
    fn test_json_sheet() {
        let json = r#"{
            "customer": "Eve",
            "movies": [{ "title": "Bambi", "category": "childrens" }],
            "rentals": [{ "movie": "Bambi", "days": 4 }]
        }"#;
        let customer = RentalSheet::from_json_str(json).unwrap().build().unwrap();
        assert_eq!(customer.total_charge().cents(), 300);
    }

    #[test]
    fn test_recategorize_reprices_all_rentals() {
        let sheet = format!(
            "{}\n[[recategorize]]\nmovie = \"Alien\"\ncategory = \"new_release\"\n",
            SHEET
        );
        let customer = RentalSheet::from_toml_str(&sheet).unwrap().build().unwrap();
        // 12.0 + 3.0 + 3.0
        assert_eq!(customer.total_charge().cents(), 1800);
        assert_eq!(customer.total_frequent_renter_points(), 4);
    }

    #[test]
    fn test_unknown_movie() {
        let mut sheet = RentalSheet::reference();
        sheet.rentals[1].movie = "missing".to_string();
        let err = sheet.build().unwrap_err();
        assert!(matches!(
            err,
            CliError::UnknownMovie { ref entry, ref title }
                if entry == "rental #2" && title == "missing"
        ));
    }

    #[test]
    fn test_invalid_category() {
        let mut sheet = RentalSheet::reference();
        sheet.movies[0].category = CategoryValue::Code(5);
        let err = sheet.build().unwrap_err();
        assert!(matches!(
            err,
            CliError::InvalidEntry {
                source: CoreError::InvalidCategory(_),
                ..
            }
        ));
        assert!(err.to_string().starts_with("movie 'regular1'"));
    }

    #[test]
    fn test_invalid_duration() {
        let mut sheet = RentalSheet::reference();
        sheet.rentals[2].days = 0;
        let err = sheet.build().unwrap_err();
        assert!(matches!(
            err,
            CliError::InvalidEntry {
                source: CoreError::InvalidDuration(ValidationError::MustBePositive { .. }),
                ..
            }
        ));
    }

    #[test]
    fn test_duplicate_movie() {
        let mut sheet = RentalSheet::reference();
        let duplicate = sheet.movies[0].clone();
        sheet.movies.push(duplicate);
        assert!(matches!(sheet.build(), Err(CliError::DuplicateMovie(t)) if t == "regular1"));
    }

    #[test]
    fn test_blank_customer_rejected() {
        let mut sheet = RentalSheet::reference();
        sheet.customer = "  ".to_string();
        assert!(matches!(
            sheet.build(),
            Err(CliError::InvalidEntry { ref entry, .. }) if entry == "customer"
        ));
    }

    #[test]
    fn test_malformed_sheet() {
        assert!(matches!(
            RentalSheet::from_toml_str("customer = 3"),
            Err(CliError::SheetParseFailed(_))
        ));
    }
}
