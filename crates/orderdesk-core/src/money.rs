//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  The web tier this core replaces did all billing math in doubles:       │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │    99.99 × 2 × 0.09 = 17.998199999... on a customer's invoice           │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    9999 cents × 2 = 19998 cents, tax in whole cents, rounded once.      │
//! │    Every rounding decision is explicit and happens in exactly one       │
//! │    formula.                                                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use orderdesk_core::money::Money;
//!
//! // Create from cents (preferred)
//! let price = Money::from_cents(9999); // $99.99
//!
//! // Arithmetic operations
//! let line_total = price * 2;                     // $199.98
//! let with_fee = price + Money::from_cents(500);  // $104.99
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};
use ts_rs::TS;

use crate::types::TaxRate;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit (cents).
///
/// ## Design Decisions
/// - **i64 (signed)**: room for refunds and adjustments in calling layers,
///   even though bills themselves never go negative
/// - **Single-field tuple struct**: zero-cost abstraction over i64
/// - **Serde + TS derives**: serializes as a bare number for the frontend
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ```rust
    /// use orderdesk_core::money::Money;
    ///
    /// let price = Money::from_cents(9999); // $99.99
    /// assert_eq!(price.cents(), 9999);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from major and minor units (dollars and cents).
    ///
    /// For negative amounts only the major unit carries the sign:
    /// `from_major_minor(-5, 50)` is -$5.50, not -$4.50.
    #[inline]
    pub const fn from_major_minor(major: i64, minor: i64) -> Self {
        if major < 0 {
            Money(major * 100 - minor)
        } else {
            Money(major * 100 + minor)
        }
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (dollars) portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (cents) portion, always 0-99.
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Returns the absolute value.
    #[inline]
    pub const fn abs(&self) -> Self {
        Money(self.0.abs())
    }

    /// One tax component on this amount.
    ///
    /// Bills carry two equal components (CGST and SGST); each is computed
    /// independently from the taxable amount with this function, so the two
    /// always agree to the cent.
    ///
    /// ## Rounding
    /// Integer half-up rounding: `(cents × bps + 5000) / 10000`, in i128 so
    /// large invoices cannot overflow.
    ///
    /// ```rust
    /// use orderdesk_core::money::Money;
    /// use orderdesk_core::types::TaxRate;
    ///
    /// let taxable = Money::from_cents(19998); // $199.98
    /// let cgst = taxable.tax_part(TaxRate::from_bps(900)); // 9%
    /// assert_eq!(cgst.cents(), 1800); // $17.9982 → $18.00
    /// ```
    pub fn tax_part(&self, rate: TaxRate) -> Money {
        let tax_cents = (self.0 as i128 * rate.bps() as i128 + 5000) / 10000;
        Money::from_cents(tax_cents as i64)
    }

    /// A percentage of this amount, in basis points (2000 = 20%).
    ///
    /// Used for PERCENTAGE coupons. Same half-up rounding as [`tax_part`].
    ///
    /// ```rust
    /// use orderdesk_core::money::Money;
    ///
    /// let subtotal = Money::from_cents(19998);
    /// assert_eq!(subtotal.percentage(2000).cents(), 4000); // 20% of $199.98
    /// ```
    ///
    /// [`tax_part`]: Money::tax_part
    pub fn percentage(&self, bps: u32) -> Money {
        let part = (self.0 as i128 * bps as i128 + 5000) / 10000;
        Money::from_cents(part as i64)
    }

    /// Multiplies by a quantity (line total = unit price × quantity).
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0 * qty)
    }

    /// Subtracts `other`, never going below zero.
    ///
    /// Discounts are clamped with this so a coupon larger than the subtotal
    /// yields a zero taxable amount rather than a negative bill.
    #[inline]
    pub fn sub_clamped(&self, other: Money) -> Money {
        Money((self.0 - other.0).max(0))
    }

    /// The smaller of two amounts.
    #[inline]
    pub fn min(self, other: Money) -> Money {
        Money(self.0.min(other.0))
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Human-readable format for debugging and receipts.
/// Frontend display goes through its own locale-aware formatter.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}${}.{:02}",
            sign,
            self.dollars().abs(),
            self.cents_part()
        )
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

/// Multiplication by integer quantity.
impl Mul<i32> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i32) -> Self {
        Money(self.0 * qty as i64)
    }
}

impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

/// Summing line totals into a subtotal.
impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
