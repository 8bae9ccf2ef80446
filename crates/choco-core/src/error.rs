//! # Error Types
//!
//! Domain-specific error types for choco-core.
//!
//! ## Error Taxonomy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Channels                                  │
//! │                                                                         │
//! │  Validation failure (expected, frequent)                               │
//! │  └── NOT an error: validators return `is_valid = false` and the        │
//! │      field simply stays invalid until the shopper corrects it          │
//! │                                                                         │
//! │  Cart operation failure (rare, recoverable)                            │
//! │  └── CoreError - typed enum below                                      │
//! │      The original app asserted on a catalog miss; a shopping cart      │
//! │      must not crash on bad input, so these are explicit results        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (the origin name involved)
//! 3. Errors are enum variants, never String

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Errors returned by cart operations.
///
/// These should be caught by the host and translated to user-facing
/// messages; none of them are fatal.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// The origin name does not exist in the catalog.
    ///
    /// ## When This Occurs
    /// - A selection event names an origin the catalog never contained
    /// - The host wired a stale or misspelled origin string into add/remove
    #[error("No chocolate in the catalog for origin: {origin}")]
    ItemNotFound { origin: String },

    /// The origin exists in the catalog but the cart holds no unit of it.
    ///
    /// ## When This Occurs
    /// - Remove is requested for an item whose last unit was already removed
    /// - Two rapid-fire remove events race past the rendered list
    #[error("No {origin} chocolate in the cart to remove")]
    NotInCart { origin: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::ItemNotFound {
            origin: "Atlantis".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "No chocolate in the catalog for origin: Atlantis"
        );

        let err = CoreError::NotInCart {
            origin: "Belgium".to_string(),
        };
        assert_eq!(err.to_string(), "No Belgium chocolate in the cart to remove");
    }
}
