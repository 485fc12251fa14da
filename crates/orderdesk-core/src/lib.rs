//! # orderdesk-core: Pure Business Logic for OrderDesk
//!
//! This crate is the **heart** of OrderDesk's billing. It contains all
//! pricing logic as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      OrderDesk Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                   Web Frontend (TypeScript)                     │   │
//! │  │     Catalog UI ──► Cart UI ──► Order Summary ──► Checkout       │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ JSON (types generated via ts-rs)       │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                API layer (tenant-scoped lookups)                │   │
//! │  │     products, customers, coupons per tenant                     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ orderdesk-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐ ┌───────────┐ ┌───────────┐ ┌───────────┐     │   │
//! │  │   │   types   │ │   money   │ │   cart    │ │  billing  │     │   │
//! │  │   │  Product  │ │   Money   │ │   Cart    │ │   Bill    │     │   │
//! │  │   │  Coupon   │ │  TaxRate  │ │ CartLine  │ │ OrderItem │     │   │
//! │  │   └───────────┘ └───────────┘ └───────────┘ └───────────┘     │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, Customer, Coupon, tax config)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`cart`] - Explicit cart state owned by the caller
//! - [`billing`] - The bill calculator: cart + customer + coupon → Bill
//! - [`error`] - Domain error types
//! - [`validation`] - Business rule validation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: same inputs, same bill - every time
//! 2. **No I/O**: database, network, file system access is FORBIDDEN here
//! 3. **Integer Money**: all monetary values are in cents (i64)
//! 4. **Explicit Errors**: all errors are typed, never strings or panics
//! 5. **Fail Open on Lookups**: an unknown product drops off the bill and an
//!    unknown coupon applies no discount; only negative inputs are errors
//!
//! ## Example Usage
//!
//! ```rust
//! use orderdesk_core::{calculate_bill, Cart, Customer, Product, Address};
//!
//! let products = vec![Product {
//!     id: "prod_001".into(),
//!     tenant_id: "tenant_01".into(),
//!     name: "Pro Plan".into(),
//!     description: None,
//!     image_url: None,
//!     default_price_cents: 9999,
//!     is_active: true,
//! }];
//! let customer = Customer {
//!     id: "cust_01".into(),
//!     tenant_id: "tenant_01".into(),
//!     name: "Innovate Corp".into(),
//!     address: Address {
//!         street: "123 Tech Avenue".into(),
//!         city: "Silicon Valley".into(),
//!         state: "CA".into(),
//!         zip: "94043".into(),
//!     },
//!     specific_prices: Default::default(),
//! };
//!
//! let mut cart = Cart::new();
//! cart.add("prod_001").unwrap();
//! cart.add("prod_001").unwrap();
//!
//! let bill = calculate_bill(&cart, &customer, &products, "", &[]).unwrap();
//! assert_eq!(bill.subtotal.cents(), 19998);
//! assert_eq!(bill.grand_total.cents(), 23598); // + 9% CGST + 9% SGST
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod billing;
pub mod cart;
pub mod error;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use orderdesk_core::Money` instead of
// `use orderdesk_core::money::Money`

pub use billing::{calculate_bill, calculate_bill_with_tax, find_coupon};
pub use billing::{Bill, CouponDiscount, OrderItem};
pub use cart::{Cart, CartLine};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum distinct lines allowed in a single cart.
///
/// ## Business Reason
/// Prevents runaway carts and ensures reasonable order sizes.
/// Can be made configurable per-tenant in future versions.
pub const MAX_CART_LINES: usize = 100;

/// Maximum quantity of a single line in a cart.
///
/// ## Business Reason
/// Prevents accidental over-ordering (e.g., typing 1000 instead of 10).
/// Configurable per-tenant in future versions.
pub const MAX_LINE_QUANTITY: i64 = 999;
