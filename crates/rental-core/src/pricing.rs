//! # Pricing Module
//!
//! Price categories and the pricing strategy bound to each of them.
//!
//! ## Price Table
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Category     Code   Charge                          Points            │
//! │  ──────────   ────   ─────────────────────────────   ───────────────   │
//! │  Regular       0     2.0 + 1.5 per day after day 2   1                 │
//! │  NewRelease    1     3.0 per day                     2 if days > 1     │
//! │  Children      2     1.5 + 1.5 per day after day 3   1                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Day counts reaching this module are already validated (see
//! [`crate::validation::validate_days_rented`]), so strategies take `u32`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;

// =============================================================================
// Price Constants
// =============================================================================

/// Flat charge covering the first two days of a regular rental.
pub const REGULAR_BASE: Money = Money::from_cents(200);

/// Days covered by [`REGULAR_BASE`].
pub const REGULAR_INCLUDED_DAYS: u32 = 2;

/// Per-day charge for a new release.
pub const NEW_RELEASE_DAILY: Money = Money::from_cents(300);

/// Flat charge covering the first three days of a children's rental.
pub const CHILDREN_BASE: Money = Money::from_cents(150);

/// Days covered by [`CHILDREN_BASE`].
pub const CHILDREN_INCLUDED_DAYS: u32 = 3;

/// Charge for every day past the included days (regular and children's).
pub const EXTRA_DAY: Money = Money::from_cents(150);

// =============================================================================
// Price Category
// =============================================================================

/// The price category a movie is rented under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriceCategory {
    /// Back-catalogue titles.
    Regular,
    /// Recently released titles, charged per day.
    #[serde(alias = "new-release")]
    NewRelease,
    /// Children's titles.
    #[serde(alias = "childrens")]
    Children,
}

impl PriceCategory {
    /// All categories, in code order.
    pub const ALL: [PriceCategory; 3] = [
        PriceCategory::Regular,
        PriceCategory::NewRelease,
        PriceCategory::Children,
    ];

    /// Returns the legacy numeric price code.
    pub const fn code(&self) -> i64 {
        match self {
            PriceCategory::Regular => 0,
            PriceCategory::NewRelease => 1,
            PriceCategory::Children => 2,
        }
    }

    /// Resolves a legacy numeric price code.
    ///
    /// ## Example
    /// ```rust
    /// use rental_core::pricing::PriceCategory;
    ///
    /// assert_eq!(PriceCategory::from_code(1).unwrap(), PriceCategory::NewRelease);
    /// assert!(PriceCategory::from_code(3).is_err());
    /// ```
    pub fn from_code(code: i64) -> CoreResult<Self> {
        Self::ALL
            .into_iter()
            .find(|category| category.code() == code)
            .ok_or_else(|| CoreError::InvalidCategory(code.to_string()))
    }

    /// Returns the pricing strategy for this category.
    pub fn strategy(&self) -> &'static dyn PricingStrategy {
        match self {
            PriceCategory::Regular => &RegularPrice,
            PriceCategory::NewRelease => &NewReleasePrice,
            PriceCategory::Children => &ChildrenPrice,
        }
    }
}

impl fmt::Display for PriceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PriceCategory::Regular => write!(f, "regular"),
            PriceCategory::NewRelease => write!(f, "new_release"),
            PriceCategory::Children => write!(f, "children"),
        }
    }
}

impl FromStr for PriceCategory {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "regular" => Ok(PriceCategory::Regular),
            "new_release" | "new-release" | "newrelease" => Ok(PriceCategory::NewRelease),
            "children" | "childrens" => Ok(PriceCategory::Children),
            other => Err(CoreError::InvalidCategory(format!(
                "'{}'. Valid options: regular, new_release, children",
                other
            ))),
        }
    }
}

impl TryFrom<i64> for PriceCategory {
    type Error = CoreError;

    fn try_from(code: i64) -> Result<Self, Self::Error> {
        Self::from_code(code)
    }
}

// =============================================================================
// Pricing Strategy
// =============================================================================

/// Charge and loyalty rules for one price category.
pub trait PricingStrategy: fmt::Debug + Sync {
    /// The category this strategy prices.
    fn category(&self) -> PriceCategory;

    /// Charge for renting a title for `days_rented` days.
    fn charge(&self, days_rented: u32) -> Money;

    /// Frequent renter points earned for the rental.
    fn frequent_renter_points(&self, _days_rented: u32) -> u32 {
        1
    }
}

/// Regular pricing: flat base, then a charge per extra day.
#[derive(Debug, Clone, Copy, Default)]
pub struct RegularPrice;

impl PricingStrategy for RegularPrice {
    fn category(&self) -> PriceCategory {
        PriceCategory::Regular
    }

    fn charge(&self, days_rented: u32) -> Money {
        REGULAR_BASE + EXTRA_DAY.times(days_rented.saturating_sub(REGULAR_INCLUDED_DAYS))
    }
}

/// New release pricing: per day, bonus point for multi-day rentals.
#[derive(Debug, Clone, Copy, Default)]
pub struct NewReleasePrice;

impl PricingStrategy for NewReleasePrice {
    fn category(&self) -> PriceCategory {
        PriceCategory::NewRelease
    }

    fn charge(&self, days_rented: u32) -> Money {
        NEW_RELEASE_DAILY.times(days_rented)
    }

    fn frequent_renter_points(&self, days_rented: u32) -> u32 {
        if days_rented > 1 {
            2
        } else {
            1
        }
    }
}

/// Children's pricing: cheaper base covering three days.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChildrenPrice;

impl PricingStrategy for ChildrenPrice {
    fn category(&self) -> PriceCategory {
        PriceCategory::Children
    }

    fn charge(&self, days_rented: u32) -> Money {
        CHILDREN_BASE + EXTRA_DAY.times(days_rented.saturating_sub(CHILDREN_INCLUDED_DAYS))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
