//! # Cart Module
//!
//! Explicit cart state: which products a customer wants, and how many.
//!
//! ## Design
//! The cart is a plain value the caller owns and passes into
//! [`calculate_bill`]. It holds no product data, only `(product_id,
//! quantity)` pairs; pricing happens at bill time against the live catalog,
//! so a price change or product removal is reflected on the next
//! calculation without touching the cart.
//!
//! Lines keep insertion order, and the bill lists items in the same order
//! the customer added them.
//!
//! ## User Workflow
//! ```text
//! Browse catalog ──► cart.add("prod_001")        (quantity 1, or +1)
//!                ──► cart.set_quantity(id, 3)    (direct edit)
//!                ──► cart.set_quantity(id, 0)    (removes the line)
//!                ──► calculate_bill(&cart, ...)  (fresh Bill every change)
//! ```
//!
//! [`calculate_bill`]: crate::billing::calculate_bill

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::validation::validate_quantity;
use crate::{MAX_CART_LINES, MAX_LINE_QUANTITY};

// =============================================================================
// Cart Line
// =============================================================================

/// One line of a cart: a product id and a positive quantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CartLine {
    pub product_id: String,
    pub quantity: i64,
}

// =============================================================================
// Cart
// =============================================================================

/// A customer's cart. Insertion-ordered, at most [`MAX_CART_LINES`] lines.
///
/// Invariant: every stored line has `0 < quantity <= MAX_LINE_QUANTITY`.
/// Mutations that would break this either remove the line (zero or negative
/// quantity) or fail with a [`CoreError`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Creates an empty cart.
    pub fn new() -> Self {
        Cart::default()
    }

    /// Adds one unit of a product (the catalog page's "add to cart" button).
    ///
    /// Increments the existing line if the product is already in the cart,
    /// otherwise appends a new line with quantity 1.
    pub fn add(&mut self, product_id: &str) -> CoreResult<()> {
        self.add_quantity(product_id, 1)
    }

    /// Adds `qty` units of a product.
    ///
    /// ## Errors
    /// - `qty` must be positive
    /// - the resulting line quantity must not exceed [`MAX_LINE_QUANTITY`]
    /// - a new line must not push the cart past [`MAX_CART_LINES`]
    pub fn add_quantity(&mut self, product_id: &str, qty: i64) -> CoreResult<()> {
        validate_quantity(qty)?;

        if let Some(line) = self.line_mut(product_id) {
            let new_qty = line.quantity + qty;
            if new_qty > MAX_LINE_QUANTITY {
                return Err(CoreError::QuantityTooLarge {
                    requested: new_qty,
                    max: MAX_LINE_QUANTITY,
                });
            }
            line.quantity = new_qty;
            return Ok(());
        }

        if self.lines.len() >= MAX_CART_LINES {
            return Err(CoreError::CartTooLarge {
                max: MAX_CART_LINES,
            });
        }

        self.lines.push(CartLine {
            product_id: product_id.to_string(),
            quantity: qty,
        });
        Ok(())
    }

    /// Sets a line's quantity directly (the cart page's quantity field).
    ///
    /// A quantity of zero or less removes the line; that is how the cart UI
    /// deletes items, so it is not an error.
    pub fn set_quantity(&mut self, product_id: &str, qty: i64) -> CoreResult<()> {
        if qty <= 0 {
            self.remove(product_id);
            return Ok(());
        }

        if qty > MAX_LINE_QUANTITY {
            return Err(CoreError::QuantityTooLarge {
                requested: qty,
                max: MAX_LINE_QUANTITY,
            });
        }

        if let Some(line) = self.line_mut(product_id) {
            line.quantity = qty;
            return Ok(());
        }

        if self.lines.len() >= MAX_CART_LINES {
            return Err(CoreError::CartTooLarge {
                max: MAX_CART_LINES,
            });
        }

        self.lines.push(CartLine {
            product_id: product_id.to_string(),
            quantity: qty,
        });
        Ok(())
    }

    /// Removes a line. Removing an absent product is a no-op.
    pub fn remove(&mut self, product_id: &str) {
        self.lines.retain(|line| line.product_id != product_id);
    }

    /// Empties the cart (after an order is placed).
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Quantity of a product in the cart, 0 if absent.
    pub fn quantity_of(&self, product_id: &str) -> i64 {
        self.lines
            .iter()
            .find(|line| line.product_id == product_id)
            .map_or(0, |line| line.quantity)
    }

    /// Number of distinct lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether the cart has no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Iterates over lines in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &CartLine> {
        self.lines.iter()
    }

    fn line_mut(&mut self, product_id: &str) -> Option<&mut CartLine> {
        self.lines
            .iter_mut()
            .find(|line| line.product_id == product_id)
    }
}

impl FromIterator<(String, i64)> for Cart {
    /// Builds a cart from `(product_id, quantity)` pairs, keeping order.
    /// Pairs with non-positive quantities are skipped, over-limit
    /// quantities are capped; use the mutating API when errors matter.
    fn from_iter<I: IntoIterator<Item = (String, i64)>>(iter: I) -> Self {
        let mut cart = Cart::new();
        for (product_id, qty) in iter {
            if qty > 0 {
                let _ = cart.set_quantity(&product_id, qty.min(MAX_LINE_QUANTITY));
            }
        }
        cart
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_new_and_increment() {
        let mut cart = Cart::new();
        cart.add("prod_001").unwrap();
        cart.add("prod_001").unwrap();
        cart.add("prod_002").unwrap();

        assert_eq!(cart.len(), 2);
        assert_eq!(cart.quantity_of("prod_001"), 2);
        assert_eq!(cart.quantity_of("prod_002"), 1);
    }

    #[test]
    fn test_set_quantity() {
        let mut cart = Cart::new();
        cart.set_quantity("prod_001", 5).unwrap();
        assert_eq!(cart.quantity_of("prod_001"), 5);

        cart.set_quantity("prod_001", 2).unwrap();
        assert_eq!(cart.quantity_of("prod_001"), 2);
    }

    #[test]
    fn test_set_quantity_zero_removes_line() {
        let mut cart = Cart::new();
        cart.set_quantity("prod_001", 3).unwrap();
        cart.set_quantity("prod_001", 0).unwrap();

        assert!(cart.is_empty());
        assert_eq!(cart.quantity_of("prod_001"), 0);

        // Negative behaves the same as zero.
        cart.set_quantity("prod_002", 3).unwrap();
        cart.set_quantity("prod_002", -1).unwrap();
        assert!(cart.is_empty());
    }

    #[test]
    fn test_add_rejects_bad_quantities() {
        let mut cart = Cart::new();
        assert!(cart.add_quantity("prod_001", 0).is_err());
        assert!(cart.add_quantity("prod_001", -5).is_err());
        assert!(cart.add_quantity("prod_001", 1000).is_err());
        assert!(cart.is_empty());
    }

    #[test]
    fn test_quantity_cap_on_increment() {
        let mut cart = Cart::new();
        cart.add_quantity("prod_001", 999).unwrap();
        let err = cart.add("prod_001").unwrap_err();
        assert!(matches!(err, CoreError::QuantityTooLarge { .. }));
        assert_eq!(cart.quantity_of("prod_001"), 999);
    }

    #[test]
    fn test_cart_line_limit() {
        let mut cart = Cart::new();
        for i in 0..MAX_CART_LINES {
            cart.add(&format!("prod_{i:03}")).unwrap();
        }
        let err = cart.add("prod_overflow").unwrap_err();
        assert!(matches!(err, CoreError::CartTooLarge { .. }));
        assert_eq!(cart.len(), MAX_CART_LINES);
    }

    #[test]
    fn test_remove_and_clear() {
        let mut cart = Cart::new();
        cart.add("prod_001").unwrap();
        cart.add("prod_002").unwrap();

        cart.remove("prod_001");
        assert_eq!(cart.len(), 1);

        // Removing something absent is fine.
        cart.remove("prod_404");
        assert_eq!(cart.len(), 1);

        cart.clear();
        assert!(cart.is_empty());
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut cart = Cart::new();
        cart.add("prod_003").unwrap();
        cart.add("prod_001").unwrap();
        cart.add("prod_002").unwrap();
        // Bumping an existing line must not move it.
        cart.add("prod_001").unwrap();

        let order: Vec<&str> = cart.iter().map(|l| l.product_id.as_str()).collect();
        assert_eq!(order, vec!["prod_003", "prod_001", "prod_002"]);
    }

    #[test]
    fn test_from_iter_skips_nonpositive() {
        let cart: Cart = vec![
            ("prod_001".to_string(), 2),
            ("prod_002".to_string(), 0),
            ("prod_003".to_string(), -4),
        ]
        .into_iter()
        .collect();

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.quantity_of("prod_001"), 2);
    }
}
