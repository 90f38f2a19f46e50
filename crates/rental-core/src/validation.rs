//! # Validation Module
//!
//! Input validation for rental data.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Rental sheet loader (statement-cli)                          │
//! │  ├── Deserialization (types, required keys)                            │
//! │  └── Titles and customer names via this module                         │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Domain constructors (this crate)                             │
//! │  ├── Rental::new → validate_days_rented                                │
//! │  └── Movie::from_code → PriceCategory::from_code                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use rental_core::validation::{validate_days_rented, validate_title};
//!
//! assert_eq!(validate_days_rented(3).unwrap(), 3);
//! assert!(validate_title("Casablanca").is_ok());
//! ```

use crate::error::ValidationError;
use crate::{MAX_CUSTOMER_NAME_LENGTH, MAX_TITLE_LENGTH};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a rental duration and narrows it to `u32`.
///
/// ## Rules
/// - Must be positive (> 0)
/// - Must fit in `u32`
///
/// ## Example
/// ```rust
/// use rental_core::validation::validate_days_rented;
///
/// assert_eq!(validate_days_rented(5).unwrap(), 5);
/// assert!(validate_days_rented(0).is_err());
/// assert!(validate_days_rented(-2).is_err());
/// ```
pub fn validate_days_rented(days: i64) -> ValidationResult<u32> {
    if days <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "days_rented".to_string(),
        });
    }

    u32::try_from(days).map_err(|_| ValidationError::OutOfRange {
        field: "days_rented".to_string(),
        min: 1,
        max: u32::MAX as i64,
    })
}

// =============================================================================
// String Validators
// =============================================================================

/// Validates a movie title.
///
/// ## Rules
/// - Must not be empty
/// - At most 200 characters
pub fn validate_title(title: &str) -> ValidationResult<()> {
    validate_text("title", title, MAX_TITLE_LENGTH)
}

/// Validates a customer name.
///
/// ## Rules
/// - Must not be empty
/// - At most 100 characters
pub fn validate_customer_name(name: &str) -> ValidationResult<()> {
    validate_text("customer", name, MAX_CUSTOMER_NAME_LENGTH)
}

fn validate_text(field: &str, value: &str, max: usize) -> ValidationResult<()> {
    let value = value.trim();

    if value.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if value.chars().count() > max {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_days_rented() {
        assert_eq!(validate_days_rented(1), Ok(1));
        assert_eq!(validate_days_rented(100), Ok(100));

        assert!(matches!(
            validate_days_rented(0),
            Err(ValidationError::MustBePositive { .. })
        ));
        assert!(validate_days_rented(-1).is_err());
        assert!(matches!(
            validate_days_rented(u32::MAX as i64 + 1),
            Err(ValidationError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_validate_title() {
        assert!(validate_title("The Third Man").is_ok());
        assert!(validate_title("").is_err());
        assert!(validate_title("   ").is_err());
        assert!(validate_title(&"A".repeat(201)).is_err());
        assert!(validate_title(&"A".repeat(200)).is_ok());
    }

    #[test]
    fn test_validate_customer_name() {
        assert!(validate_customer_name("A").is_ok());
        assert_eq!(
            validate_customer_name(""),
            Err(ValidationError::Required {
                field: "customer".to_string()
            })
        );
        assert!(validate_customer_name(&"é".repeat(100)).is_ok());
        assert!(validate_customer_name(&"é".repeat(101)).is_err());
    }
}
