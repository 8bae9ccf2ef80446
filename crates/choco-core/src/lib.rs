//! # choco-core: Pure Business Logic for Choco Checkout
//!
//! This crate is the **heart** of the chocolate shop. It contains all
//! business logic as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Choco Checkout Architecture                         │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    UI Layer (external)                          │   │
//! │  │    Catalog list ──► Cart view ──► Billing form ──► Done        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ raw strings in, DTOs out               │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ choco-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │   cart    │  │   card    │  │   │
//! │  │   │ Chocolate │  │   Money   │  │CartLedger │  │ CardBrand │  │   │
//! │  │   │  Catalog  │  │  (cents)  │  │ Snapshot  │  │  rules    │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │   ┌──────────────────────────┐  ┌──────────────────────────┐  │   │
//! │  │   │        validation        │  │         checkout         │  │   │
//! │  │   │  Luhn, expiration, CVV   │  │  form state, submit gate │  │   │
//! │  │   └──────────────────────────┘  └──────────────────────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - The chocolate catalog (Chocolate, Catalog)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`card`] - Card brand inference and per-brand rules
//! - [`validation`] - Card number, expiration, and CVV validators
//! - [`cart`] - The cart ledger and its aggregate views
//! - [`checkout`] - Per-attempt billing form state
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: same input = same output, on every keystroke
//! 2. **No I/O**: database, network, file system access is FORBIDDEN here
//! 3. **Integer Money**: all monetary values are in cents (i64)
//! 4. **Failure is a value**: invalid input means `is_valid = false`, never
//!    a panic; cart misses are typed, recoverable errors
//!
//! ## Example Usage
//!
//! ```rust
//! use choco_core::cart::CartLedger;
//! use choco_core::types::Catalog;
//! use choco_core::validation::validate_card_number;
//!
//! // Shopping
//! let mut cart = CartLedger::new(Catalog::of_europe());
//! cart.add("Belgium").unwrap();
//! cart.add("Switzerland").unwrap();
//! assert_eq!(cart.total_cost().to_string(), "$18.00");
//!
//! // Checkout
//! let card = validate_card_number("4242 4242 4242 4242");
//! assert!(card.is_valid);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod card;
pub mod cart;
pub mod checkout;
pub mod error;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use choco_core::Money` instead of
// `use choco_core::money::Money`

pub use card::CardBrand;
pub use cart::{CartHandle, CartLedger, CartSnapshot, ItemCount};
pub use checkout::{CardInputState, CheckoutForm, FieldUpdate, FocusHint};
pub use error::{CoreError, CoreResult};
pub use money::Money;
pub use types::{Catalog, Chocolate};
pub use validation::{
    luhn_valid, validate_card_number, validate_cvv, validate_expiration, validate_expiration_at,
    CardNumberValidation, ExpirationValidation,
};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Digit count of a complete expiration entry (MMYYYY).
///
/// The billing form advances focus to the CVV field exactly when the
/// cleaned expiration input reaches this length.
pub const EXPIRATION_DIGITS: usize = 6;

/// Label the cart shows in place of counts when it holds nothing.
pub const EMPTY_CART_LABEL: &str = "🚫🍫";
