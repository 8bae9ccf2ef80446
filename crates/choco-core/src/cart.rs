//! # Cart Ledger
//!
//! The in-memory collection representing the current cart contents.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Ledger Operations                               │
//! │                                                                         │
//! │  UI Action                 Ledger Call             Sequence Change      │
//! │  ─────────────             ───────────             ───────────────      │
//! │                                                                         │
//! │  Tap catalog row ────────► add(origin) ──────────► items.push(item)    │
//! │                                                                         │
//! │  Tap cart row ───────────► remove(origin) ───────► items.remove(i)     │
//! │                                                                         │
//! │  Checkout done ──────────► clear() ──────────────► items.clear()       │
//! │                                                                         │
//! │  Re-render ──────────────► snapshot() ───────────► (read only)         │
//! │                                                                         │
//! │  NOTE: Every aggregate read recomputes from the live sequence.         │
//! │        There is no cache, so there is no invalidation to get wrong.    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - Insertion order = selection order; duplicates represent multiple units
//! - The sequence contents fully determine all derived views
//! - Mutations are append / remove-one-at-a-time / clear, nothing else

use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};
use tracing::debug;
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::{Catalog, Chocolate};
use crate::EMPTY_CART_LABEL;

// =============================================================================
// Aggregate DTOs
// =============================================================================

/// One distinct chocolate and how many units of it the cart holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ItemCount {
    /// Display label combining glyph and count, e.g. `🇧🇪🍫: 2`.
    pub label: String,

    /// Origin name of the counted chocolate.
    pub origin: String,

    /// Number of units in the cart.
    pub count: usize,
}

/// Recomputed aggregate view of the cart, emitted after every mutation.
///
/// This is the pull-model boundary: the UI re-renders from a fresh snapshot
/// instead of observing individual fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CartSnapshot {
    /// Total cost of all units, in cents.
    pub total_cents: i64,

    /// Per-distinct-item counts, sorted alphabetically by origin.
    pub item_counts: Vec<ItemCount>,

    /// Unique origin names, sorted alphabetically - drives the
    /// "items available to remove" list.
    pub distinct_origins: Vec<String>,

    /// The counts joined into one multi-line label; `🚫🍫` when empty.
    pub count_label: String,
}

// =============================================================================
// Cart Ledger
// =============================================================================

/// Ordered sequence of purchased chocolates plus the catalog it draws from.
///
/// One long-lived instance per session, constructed explicitly and handed to
/// whoever needs it - there is deliberately no global singleton.
///
/// ## Example
/// ```rust
/// use choco_core::cart::CartLedger;
/// use choco_core::types::Catalog;
///
/// let mut cart = CartLedger::new(Catalog::of_europe());
/// cart.add("Belgium").unwrap();
/// cart.add("Belgium").unwrap();
/// cart.add("Switzerland").unwrap();
///
/// assert_eq!(cart.total_cost().cents(), 2600);
/// assert_eq!(cart.item_counts().len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct CartLedger {
    catalog: Catalog,
    items: Vec<Chocolate>,
}

impl CartLedger {
    /// Creates an empty cart drawing from the given catalog.
    pub fn new(catalog: Catalog) -> Self {
        CartLedger {
            catalog,
            items: Vec::new(),
        }
    }

    /// Appends one unit of the chocolate with this origin name.
    ///
    /// An origin the catalog does not contain is a recoverable
    /// [`CoreError::ItemNotFound`], never a panic.
    pub fn add(&mut self, origin: &str) -> CoreResult<()> {
        let item = self
            .catalog
            .find(origin)
            .ok_or_else(|| CoreError::ItemNotFound {
                origin: origin.to_string(),
            })?
            .clone();

        self.items.push(item);
        debug!(origin, units = self.items.len(), "added chocolate to cart");
        Ok(())
    }

    /// Removes the FIRST unit matching this origin name, by value equality.
    ///
    /// An origin missing from the catalog is [`CoreError::ItemNotFound`];
    /// one present in the catalog but not in the cart is
    /// [`CoreError::NotInCart`].
    pub fn remove(&mut self, origin: &str) -> CoreResult<()> {
        let target = self
            .catalog
            .find(origin)
            .ok_or_else(|| CoreError::ItemNotFound {
                origin: origin.to_string(),
            })?;

        let position = self
            .items
            .iter()
            .position(|item| item == target)
            .ok_or_else(|| CoreError::NotInCart {
                origin: origin.to_string(),
            })?;

        self.items.remove(position);
        debug!(origin, units = self.items.len(), "removed chocolate from cart");
        Ok(())
    }

    /// Empties the cart.
    pub fn clear(&mut self) {
        self.items.clear();
        debug!("cleared cart");
    }

    /// Number of units in the cart (duplicates counted).
    pub fn unit_count(&self) -> usize {
        self.items.len()
    }

    /// Whether the cart holds no units.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of all contained items' prices; zero for an empty cart.
    ///
    /// Recomputed from the live sequence on every call.
    pub fn total_cost(&self) -> Money {
        self.items.iter().map(Chocolate::price).sum()
    }

    /// Unique origin names among contained items, sorted alphabetically.
    pub fn distinct_origins(&self) -> Vec<String> {
        self.distinct().into_iter().map(|c| c.origin.clone()).collect()
    }

    /// Per-distinct-item unit counts, sorted alphabetically by origin.
    ///
    /// Distinctness is full value equality, so a hypothetical second entry
    /// with the same origin but a different price would count separately.
    pub fn item_counts(&self) -> Vec<ItemCount> {
        self.distinct()
            .into_iter()
            .map(|chocolate| {
                let count = self.items.iter().filter(|i| *i == chocolate).count();
                ItemCount {
                    label: format!("{}🍫: {}", chocolate.glyph, count),
                    origin: chocolate.origin.clone(),
                    count,
                }
            })
            .collect()
    }

    /// The item counts joined into one multi-line label.
    /// An empty cart shows the `🚫🍫` placeholder.
    pub fn count_label(&self) -> String {
        if self.items.is_empty() {
            return EMPTY_CART_LABEL.to_string();
        }

        self.item_counts()
            .into_iter()
            .map(|ic| ic.label)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// All aggregate views in one value, for the UI to re-render from.
    pub fn snapshot(&self) -> CartSnapshot {
        CartSnapshot {
            total_cents: self.total_cost().cents(),
            item_counts: self.item_counts(),
            distinct_origins: self.distinct_origins(),
            count_label: self.count_label(),
        }
    }

    /// Unique chocolates in the cart, sorted alphabetically by origin.
    fn distinct(&self) -> Vec<&Chocolate> {
        let mut unique: Vec<&Chocolate> = self
            .items
            .iter()
            .collect::<HashSet<_>>()
            .into_iter()
            .collect();
        unique.sort_by(|a, b| a.origin.cmp(&b.origin));
        unique
    }
}

// =============================================================================
// Shared Handle
// =============================================================================

/// Thread-safe handle around a [`CartLedger`].
///
/// ## Thread Safety
/// The ledger itself assumes single-threaded mutation (the original host was
/// a single UI thread). A host with genuine multi-threaded access must go
/// through this handle:
/// - `Arc`: shared ownership across threads
/// - `Mutex`: one mutation at a time
///
/// ## Why Not RwLock?
/// Cart operations are quick and most of them mutate. A RwLock would add
/// complexity with minimal benefit.
#[derive(Debug, Clone)]
pub struct CartHandle {
    cart: Arc<Mutex<CartLedger>>,
}

impl CartHandle {
    /// Creates a handle over a fresh cart for the given catalog.
    pub fn new(catalog: Catalog) -> Self {
        CartHandle {
            cart: Arc::new(Mutex::new(CartLedger::new(catalog))),
        }
    }

    /// Executes a function with read access to the cart.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let snapshot = handle.with_cart(|cart| cart.snapshot());
    /// ```
    pub fn with_cart<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&CartLedger) -> R,
    {
        let cart = self.cart.lock().expect("Cart mutex poisoned");
        f(&cart)
    }

    /// Executes a function with write access to the cart.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// handle.with_cart_mut(|cart| cart.add("Belgium"))?;
    /// ```
    pub fn with_cart_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut CartLedger) -> R,
    {
        let mut cart = self.cart.lock().expect("Cart mutex poisoned");
        f(&mut cart)
    }

    /// Convenience read of the current aggregate view.
    pub fn snapshot(&self) -> CartSnapshot {
        self.with_cart(|cart| cart.snapshot())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
