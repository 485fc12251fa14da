//! # Domain Types
//!
//! Core domain types used throughout OrderDesk.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │    Customer     │   │     Coupon      │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id             │   │  id             │   │  id             │       │
//! │  │  tenant_id      │   │  tenant_id      │   │  code           │       │
//! │  │  name           │   │  address        │   │  kind           │       │
//! │  │  default_price  │   │  specific_prices│   │  discount       │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐                             │
//! │  │    TaxRate      │   │   TaxConfig     │                             │
//! │  │  ─────────────  │   │  ─────────────  │                             │
//! │  │  bps (u32)      │   │  per_component  │                             │
//! │  │  900 = 9%       │   │  components: 2  │                             │
//! │  └─────────────────┘   └─────────────────┘                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Tenant Scoping
//! Every catalog entity carries a `tenant_id`. The core trusts the calling
//! layer to hand it collections already scoped to one tenant; it never
//! filters across tenants itself.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Tax Rate
// =============================================================================

/// Tax rate represented in basis points (bps).
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000
/// 900 bps = 9% (one GST component)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TaxRate(u32);

impl TaxRate {
    /// Creates a tax rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        TaxRate(bps)
    }

    /// Creates a tax rate from a percentage (for convenience).
    pub fn from_percentage(pct: f64) -> Self {
        TaxRate((pct * 100.0).round() as u32)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as a percentage (for display only).
    #[inline]
    pub fn percentage(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Zero tax rate.
    #[inline]
    pub const fn zero() -> Self {
        TaxRate(0)
    }

    /// Checks if tax rate is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl Default for TaxRate {
    fn default() -> Self {
        TaxRate::zero()
    }
}

// =============================================================================
// Tax Configuration
// =============================================================================

/// How tax is split on a bill.
///
/// GST jurisdictions levy two equal components (CGST paid to the central
/// government, SGST to the state) on the taxable amount. The configuration
/// is fixed per deployment, never user-supplied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TaxConfig {
    /// Rate of a single component (900 bps = 9%).
    pub per_component: TaxRate,
    /// Number of equal components. 2 for CGST + SGST.
    pub components: u32,
}

impl TaxConfig {
    /// Standard GST split: 9% CGST + 9% SGST = 18% total.
    pub const fn gst_18() -> Self {
        TaxConfig {
            per_component: TaxRate::from_bps(900),
            components: 2,
        }
    }

    /// Total rate across all components.
    pub fn total_rate(&self) -> TaxRate {
        TaxRate::from_bps(self.per_component.bps() * self.components)
    }
}

impl Default for TaxConfig {
    fn default() -> Self {
        TaxConfig::gst_18()
    }
}

// =============================================================================
// Address
// =============================================================================

/// A postal address (customer billing/delivery).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Address {
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip: String,
}

// =============================================================================
// Product
// =============================================================================

/// A product in a tenant's catalog.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Product {
    /// Unique identifier, opaque string (e.g. "prod_001").
    pub id: String,

    /// Tenant this product belongs to.
    pub tenant_id: String,

    /// Display name shown in the catalog and on the bill.
    pub name: String,

    /// Optional description for product details.
    pub description: Option<String>,

    /// Catalog image URL, frontend-only concern.
    pub image_url: Option<String>,

    /// List price in cents, charged unless the customer has an override.
    pub default_price_cents: i64,

    /// Whether product is active (soft delete).
    pub is_active: bool,
}

impl Product {
    /// Returns the default price as Money.
    #[inline]
    pub fn default_price(&self) -> Money {
        Money::from_cents(self.default_price_cents)
    }
}

// =============================================================================
// Customer
// =============================================================================

/// A customer of a tenant, with optional negotiated prices.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Customer {
    /// Unique identifier, opaque string (e.g. "cust_01").
    pub id: String,

    /// Tenant this customer belongs to.
    pub tenant_id: String,

    /// Customer / organization name.
    pub name: String,

    /// Billing and delivery address.
    pub address: Address,

    /// Per-product price overrides in cents, keyed by product id.
    /// At most one override per product.
    pub specific_prices: HashMap<String, i64>,
}

impl Customer {
    /// The customer's negotiated price for a product, if any.
    pub fn specific_price(&self, product_id: &str) -> Option<Money> {
        self.specific_prices
            .get(product_id)
            .map(|&cents| Money::from_cents(cents))
    }

    /// The price this customer pays for a product:
    /// their specific price if present, else the catalog default.
    pub fn unit_price(&self, product: &Product) -> Money {
        self.specific_price(&product.id)
            .unwrap_or_else(|| product.default_price())
    }
}

// =============================================================================
// Coupon
// =============================================================================

/// How a coupon's `discount` value is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum CouponKind {
    /// `discount` is a flat amount in cents.
    Fixed,
    /// `discount` is in basis points (2000 = 20% off).
    Percentage,
}

/// A discount coupon in a tenant's catalog.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Coupon {
    /// Unique identifier, opaque string (e.g. "coupon_01").
    pub id: String,

    /// Tenant this coupon belongs to.
    pub tenant_id: String,

    /// Redemption code entered by the customer. Matched case-insensitively.
    pub code: String,

    /// Fixed amount or percentage.
    pub kind: CouponKind,

    /// Cents for [`CouponKind::Fixed`], basis points for
    /// [`CouponKind::Percentage`].
    pub discount: i64,

    /// Inactive coupons never apply, even with a matching code.
    pub is_active: bool,
}

impl Coupon {
    /// Case-insensitive code match.
    pub fn matches_code(&self, code: &str) -> bool {
        self.code.eq_ignore_ascii_case(code)
    }

    /// Discount amount on a subtotal, clamped to `[0, subtotal]` so a
    /// coupon can neither inflate a bill nor drive it negative.
    pub fn discount_on(&self, subtotal: Money) -> Money {
        let raw = match self.kind {
            CouponKind::Fixed => Money::from_cents(self.discount.max(0)),
            CouponKind::Percentage => subtotal.percentage(self.discount.max(0) as u32),
        };
        raw.min(subtotal)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: &str, price_cents: i64) -> Product {
        Product {
            id: id.to_string(),
            tenant_id: "tenant_01".to_string(),
            name: format!("Product {id}"),
            description: None,
            image_url: None,
            default_price_cents: price_cents,
            is_active: true,
        }
    }

    fn customer(overrides: &[(&str, i64)]) -> Customer {
        Customer {
            id: "cust_01".to_string(),
            tenant_id: "tenant_01".to_string(),
            name: "Innovate Corp".to_string(),
            address: Address {
                street: "123 Tech Avenue".to_string(),
                city: "Silicon Valley".to_string(),
                state: "CA".to_string(),
                zip: "94043".to_string(),
            },
            specific_prices: overrides
                .iter()
                .map(|&(id, cents)| (id.to_string(), cents))
                .collect(),
        }
    }

    #[test]
    fn test_tax_rate_from_bps() {
        let rate = TaxRate::from_bps(900);
        assert_eq!(rate.bps(), 900);
        assert!((rate.percentage() - 9.0).abs() < 0.001);
    }

    #[test]
    fn test_tax_rate_from_percentage() {
        assert_eq!(TaxRate::from_percentage(9.0).bps(), 900);
        assert_eq!(TaxRate::from_percentage(8.25).bps(), 825);
    }

    #[test]
    fn test_tax_config_default_is_gst_18() {
        let config = TaxConfig::default();
        assert_eq!(config.per_component.bps(), 900);
        assert_eq!(config.components, 2);
        assert_eq!(config.total_rate().bps(), 1800);
    }

    #[test]
    fn test_unit_price_prefers_override() {
        let prod = product("prod_001", 9999);
        let with_override = customer(&[("prod_001", 8999)]);
        let without = customer(&[]);

        assert_eq!(with_override.unit_price(&prod).cents(), 8999);
        assert_eq!(without.unit_price(&prod).cents(), 9999);
    }

    #[test]
    fn test_specific_price_other_product() {
        let prod = product("prod_002", 49999);
        let cust = customer(&[("prod_001", 8999)]);
        assert_eq!(cust.specific_price("prod_002"), None);
        assert_eq!(cust.unit_price(&prod).cents(), 49999);
    }

    #[test]
    fn test_coupon_matches_code_case_insensitive() {
        let coupon = Coupon {
            id: "coupon_01".to_string(),
            tenant_id: "tenant_01".to_string(),
            code: "SAVE10".to_string(),
            kind: CouponKind::Percentage,
            discount: 1000,
            is_active: true,
        };
        assert!(coupon.matches_code("save10"));
        assert!(coupon.matches_code("Save10"));
        assert!(coupon.matches_code("SAVE10"));
        assert!(!coupon.matches_code("SAVE20"));
        assert!(!coupon.matches_code(""));
    }

    #[test]
    fn test_fixed_coupon_discount_clamped() {
        let coupon = Coupon {
            id: "coupon_02".to_string(),
            tenant_id: "tenant_01".to_string(),
            code: "50OFF".to_string(),
            kind: CouponKind::Fixed,
            discount: 5000,
            is_active: true,
        };
        assert_eq!(coupon.discount_on(Money::from_cents(19998)).cents(), 5000);
        // Coupon larger than the subtotal takes the whole subtotal, no more.
        assert_eq!(coupon.discount_on(Money::from_cents(3000)).cents(), 3000);
        assert_eq!(coupon.discount_on(Money::zero()).cents(), 0);
    }

    #[test]
    fn test_percentage_coupon_discount() {
        let coupon = Coupon {
            id: "coupon_03".to_string(),
            tenant_id: "tenant_01".to_string(),
            code: "SUMMER20".to_string(),
            kind: CouponKind::Percentage,
            discount: 2000,
            is_active: true,
        };
        assert_eq!(coupon.discount_on(Money::from_cents(19998)).cents(), 4000);
    }
}
