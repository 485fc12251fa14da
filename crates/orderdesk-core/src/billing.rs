//! # Billing Module
//!
//! Turns a cart, a customer's negotiated prices, and an optional coupon into
//! a priced, taxed [`Bill`].
//!
//! ## Calculation Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        calculate_bill                                   │
//! │                                                                         │
//! │  Cart lines ──► resolve unit prices ──► OrderItems ──► subtotal         │
//! │                 (customer override,                        │            │
//! │                  else catalog default)                     ▼            │
//! │  Coupon code ──► case-insensitive lookup ──► discount (clamped)         │
//! │                  (active coupons only)                     │            │
//! │                                                            ▼            │
//! │                     taxable = subtotal − discount                       │
//! │                     cgst = sgst = taxable × 9%                          │
//! │                     grand total = taxable + cgst + sgst                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Fail-Open Rules
//! A cart line whose product is missing (or soft-deleted) from the catalog
//! is dropped from the bill, and a coupon code with no active match simply
//! applies no discount. Neither is an error here: the calling layer decides
//! whether to surface "invalid coupon" to the user, and [`find_coupon`] is
//! the same predicate the calculator uses, so the two can never disagree.
//!
//! ## What the Calculator Does NOT Do
//! - mutate its inputs, or perform any I/O
//! - mint order numbers or any other identifier (the caller assigns one
//!   when it actually places an order)
//! - persist anything; the Bill is recomputed fresh on every change

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::cart::Cart;
use crate::error::CoreResult;
use crate::money::Money;
use crate::types::{Coupon, Customer, Product, TaxConfig};
use crate::validation::{validate_discount, validate_price_cents, validate_quantity};

// =============================================================================
// Output Types
// =============================================================================

/// A priced line on a bill.
///
/// Snapshot pattern: the name and unit price are frozen into the item, so a
/// bill stays meaningful even after the catalog changes underneath it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct OrderItem {
    pub product_id: String,
    /// Product name at calculation time.
    pub name: String,
    /// Price actually charged per unit: customer override if present,
    /// else the catalog default.
    pub unit_price: Money,
    pub quantity: i64,
    /// `unit_price × quantity`.
    pub line_total: Money,
}

/// The coupon applied to a bill: canonical code plus the amount taken off.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CouponDiscount {
    /// The coupon's stored code (not the customer's casing).
    pub code: String,
    pub amount: Money,
}

/// A fully priced order summary.
///
/// Derived value with no stored identity; the caller attaches an order
/// number if and when the order is placed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Bill {
    /// Priced lines, in cart insertion order.
    pub items: Vec<OrderItem>,
    /// Sum of all line totals.
    pub subtotal: Money,
    /// Present only when an active coupon matched.
    pub coupon_discount: Option<CouponDiscount>,
    /// `subtotal − coupon discount`, never negative.
    pub taxable_amount: Money,
    /// Central GST component on the taxable amount.
    pub cgst: Money,
    /// State GST component, always equal to `cgst`.
    pub sgst: Money,
    /// `cgst + sgst`.
    pub total_tax: Money,
    /// `taxable_amount + total_tax`.
    pub grand_total: Money,
}

// =============================================================================
// Coupon Lookup
// =============================================================================

/// Finds the coupon a code redeems, if any.
///
/// Matching is case-insensitive and only active coupons count; an inactive
/// coupon is treated exactly like one that doesn't exist. An empty code
/// means "no coupon" and always yields `None`.
///
/// The cart UI calls this to decide between "coupon applied" and "invalid
/// coupon" feedback; [`calculate_bill`] calls it for the discount itself.
pub fn find_coupon<'a>(coupons: &'a [Coupon], code: &str) -> Option<&'a Coupon> {
    if code.is_empty() {
        return None;
    }
    coupons
        .iter()
        .find(|c| c.is_active && c.matches_code(code))
}

// =============================================================================
// Bill Calculation
// =============================================================================

/// Calculates a bill with the standard GST split (9% CGST + 9% SGST).
///
/// See [`calculate_bill_with_tax`] for the full contract.
pub fn calculate_bill(
    cart: &Cart,
    customer: &Customer,
    all_products: &[Product],
    coupon_code: &str,
    all_coupons: &[Coupon],
) -> CoreResult<Bill> {
    calculate_bill_with_tax(
        cart,
        customer,
        all_products,
        coupon_code,
        all_coupons,
        TaxConfig::default(),
    )
}

/// Calculates a bill under an explicit tax configuration.
///
/// Pure function: same inputs, same bill; inputs are untouched.
///
/// ## Arguments
/// * `cart` - the customer's cart lines
/// * `customer` - supplies per-product price overrides
/// * `all_products` - the tenant's product catalog; lines referencing an id
///   absent from (or soft-deleted in) the catalog are silently dropped
/// * `coupon_code` - free text, may be empty
/// * `all_coupons` - the tenant's coupon catalog
/// * `tax` - per-component rate and component count
///
/// ## Errors
/// Returns a validation error if a quantity is negative or over the line
/// limit, or if a price or coupon discount is negative. Everything else
/// degrades gracefully (line dropped, discount omitted) rather than
/// failing.
pub fn calculate_bill_with_tax(
    cart: &Cart,
    customer: &Customer,
    all_products: &[Product],
    coupon_code: &str,
    all_coupons: &[Coupon],
    tax: TaxConfig,
) -> CoreResult<Bill> {
    // Step 1: price each cart line against the catalog.
    let mut items = Vec::with_capacity(cart.len());
    for line in cart.iter() {
        if line.quantity == 0 {
            continue;
        }
        // Carts built through the Cart API already hold valid quantities,
        // but a cart deserialized from stored JSON can hold anything.
        // Re-check here so a negative or over-limit quantity can never
        // reach the line-total multiply.
        validate_quantity(line.quantity)?;

        // Soft-deleted products have left the catalog as far as billing
        // is concerned.
        let Some(product) = all_products
            .iter()
            .find(|p| p.is_active && p.id == line.product_id)
        else {
            continue;
        };

        validate_price_cents(product.default_price_cents)?;
        if let Some(override_price) = customer.specific_price(&product.id) {
            validate_price_cents(override_price.cents())?;
        }

        let unit_price = customer.unit_price(product);
        items.push(OrderItem {
            product_id: product.id.clone(),
            name: product.name.clone(),
            unit_price,
            quantity: line.quantity,
            line_total: unit_price.multiply_quantity(line.quantity),
        });
    }

    // Step 2: subtotal.
    let subtotal: Money = items.iter().map(|item| item.line_total).sum();

    // Step 3: coupon, if one matches.
    let coupon_discount = match find_coupon(all_coupons, coupon_code) {
        Some(coupon) => {
            validate_discount(coupon.kind, coupon.discount)?;
            Some(CouponDiscount {
                code: coupon.code.clone(),
                amount: coupon.discount_on(subtotal),
            })
        }
        None => None,
    };
    let discount = coupon_discount
        .as_ref()
        .map_or(Money::zero(), |d| d.amount);

    // Steps 4-6: taxable amount, equal tax components, grand total.
    let taxable_amount = subtotal.sub_clamped(discount);
    let component = taxable_amount.tax_part(tax.per_component);
    let total_tax = component.multiply_quantity(tax.components as i64);

    Ok(Bill {
        items,
        subtotal,
        coupon_discount,
        taxable_amount,
        cgst: component,
        sgst: component,
        total_tax,
        grand_total: taxable_amount + total_tax,
    })
}

// =============================================================================
// Unit Tests
// =============================================================================
