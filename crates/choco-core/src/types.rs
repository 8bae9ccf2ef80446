//! # Domain Types
//!
//! The chocolate catalog: what the shop sells.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐        ┌─────────────────────────────────┐        │
//! │  │   Chocolate     │        │           Catalog               │        │
//! │  │  ─────────────  │  5 ×   │  ─────────────────────────────  │        │
//! │  │  price_cents    │ ◄───── │  fixed item list at startup     │        │
//! │  │  origin         │        │  lookup by origin name          │        │
//! │  │  glyph          │        │  read-only, never mutated       │        │
//! │  └─────────────────┘        └─────────────────────────────────┘        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identity
//! A `Chocolate` has no surrogate ID. Equality and hashing cover ALL fields,
//! so two catalog entries with identical price/origin/glyph are fully
//! interchangeable - the cart counts units by value, not by reference.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Chocolate
// =============================================================================

/// A chocolate bar available for sale.
///
/// Immutable value type. The origin name doubles as the catalog key and is
/// globally unique per catalog.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Chocolate {
    /// Price in cents (smallest currency unit).
    pub price_cents: i64,

    /// Country of origin - the catalog key.
    pub origin: String,

    /// Display glyph (flag emoji) shown next to the item.
    pub glyph: String,
}

impl Chocolate {
    /// Creates a catalog entry.
    pub fn new(price_cents: i64, origin: &str, glyph: &str) -> Self {
        Chocolate {
            price_cents,
            origin: origin.to_string(),
            glyph: glyph.to_string(),
        }
    }

    /// Returns the price as a Money type.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }
}

// =============================================================================
// Catalog
// =============================================================================

/// The fixed list of chocolates the shop sells.
///
/// Supplied once at startup and treated as read-only data, not as
/// configuration requiring validation.
///
/// ## Example
/// ```rust
/// use choco_core::types::Catalog;
///
/// let catalog = Catalog::of_europe();
/// assert_eq!(catalog.len(), 5);
/// assert_eq!(catalog.find("Belgium").unwrap().price_cents, 800);
/// assert!(catalog.find("Atlantis").is_none());
/// ```
#[derive(Debug, Clone)]
pub struct Catalog {
    items: Vec<Chocolate>,
}

impl Catalog {
    /// Builds a catalog from an arbitrary item list.
    pub fn new(items: Vec<Chocolate>) -> Self {
        Catalog { items }
    }

    /// The chocolates of Europe - the shop's standard line-up.
    pub fn of_europe() -> Self {
        Catalog::new(vec![
            Chocolate::new(800, "Belgium", "🇧🇪"),
            Chocolate::new(700, "Germany", "🇩🇪"),
            Chocolate::new(700, "Great Britain", "🇬🇧"),
            Chocolate::new(1000, "Switzerland", "🇨🇭"),
            Chocolate::new(800, "The Netherlands", "🇳🇱"),
        ])
    }

    /// Looks up an item by its origin name.
    pub fn find(&self, origin: &str) -> Option<&Chocolate> {
        self.items.iter().find(|c| c.origin == origin)
    }

    /// All items, in definition order.
    pub fn items(&self) -> &[Chocolate] {
        &self.items
    }

    /// Number of items in the catalog.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Catalog::of_europe()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_of_europe() {
        let catalog = Catalog::of_europe();
        assert_eq!(catalog.len(), 5);

        let swiss = catalog.find("Switzerland").unwrap();
        assert_eq!(swiss.price().cents(), 1000);
        assert_eq!(swiss.glyph, "🇨🇭");
    }

    #[test]
    fn test_catalog_miss() {
        let catalog = Catalog::of_europe();
        assert!(catalog.find("Atlantis").is_none());
        // Lookup is exact, not case-insensitive
        assert!(catalog.find("belgium").is_none());
    }

    #[test]
    fn test_value_equality_makes_entries_interchangeable() {
        let a = Chocolate::new(800, "Belgium", "🇧🇪");
        let b = Chocolate::new(800, "Belgium", "🇧🇪");
        assert_eq!(a, b);

        let mut set = HashSet::new();
        set.insert(a);
        set.insert(b);
        assert_eq!(set.len(), 1);

        // Any differing field breaks equality
        let pricier = Chocolate::new(900, "Belgium", "🇧🇪");
        assert_ne!(Chocolate::new(800, "Belgium", "🇧🇪"), pricier);
    }
}
