//! # Validation Module
//!
//! Input validation for billing inputs.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Frontend                                                      │
//! │  └── Basic format checks, immediate user feedback                       │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                   │
//! │  └── Business rule validation before billing math runs                  │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Storage constraints (calling layer's concern)                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The bill calculator re-validates quantities, prices, and discounts on
//! every run. The original system never defined what a negative quantity or
//! price means on a bill, so nothing here lets one through.

use crate::error::ValidationError;
use crate::types::CouponKind;
use crate::MAX_LINE_QUANTITY;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates an entity id (product, customer, coupon, tenant).
///
/// Ids are opaque strings assigned by the catalog layer ("prod_001",
/// "cust_01"); the core only requires that they are present and sane.
///
/// ```rust
/// use orderdesk_core::validation::validate_id;
///
/// assert!(validate_id("prod_001").is_ok());
/// assert!(validate_id("").is_err());
/// ```
pub fn validate_id(id: &str) -> ValidationResult<()> {
    let id = id.trim();

    if id.is_empty() {
        return Err(ValidationError::Required {
            field: "id".to_string(),
        });
    }

    if id.len() > 64 {
        return Err(ValidationError::TooLong {
            field: "id".to_string(),
            max: 64,
        });
    }

    Ok(())
}

/// Validates a product name.
///
/// ## Rules
/// - Must not be empty
/// - Must be at most 200 characters
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.len() > 200 {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: 200,
        });
    }

    Ok(())
}

/// Validates a coupon code as entered by the customer.
///
/// ## Rules
/// - May be empty (an empty code means "no coupon", never an error)
/// - Must be at most 50 characters
pub fn validate_coupon_code(code: &str) -> ValidationResult<()> {
    if code.len() > 50 {
        return Err(ValidationError::TooLong {
            field: "coupon code".to_string(),
            max: 50,
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a cart line quantity.
///
/// ## Rules
/// - Must be positive (> 0)
/// - Must not exceed MAX_LINE_QUANTITY (999)
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    if qty > MAX_LINE_QUANTITY {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 1,
            max: MAX_LINE_QUANTITY,
        });
    }

    Ok(())
}

/// Validates a price in cents.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (free items)
///
/// ```rust
/// use orderdesk_core::validation::validate_price_cents;
///
/// assert!(validate_price_cents(9999).is_ok());  // $99.99
/// assert!(validate_price_cents(0).is_ok());     // Free item
/// assert!(validate_price_cents(-100).is_err()); // Invalid
/// ```
pub fn validate_price_cents(cents: i64) -> ValidationResult<()> {
    if cents < 0 {
        return Err(ValidationError::NegativeAmount {
            field: "price".to_string(),
            cents,
        });
    }

    Ok(())
}

/// Validates a coupon's discount value.
///
/// ## Rules
/// - Must be non-negative
/// - Percentage coupons must not exceed 10000 bps (100%)
pub fn validate_discount(kind: CouponKind, discount: i64) -> ValidationResult<()> {
    if discount < 0 {
        return Err(ValidationError::NegativeAmount {
            field: "discount".to_string(),
            cents: discount,
        });
    }

    if kind == CouponKind::Percentage && discount > 10000 {
        return Err(ValidationError::OutOfRange {
            field: "discount".to_string(),
            min: 0,
            max: 10000,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
