//! # Card Brands
//!
//! Payment-card brand inference and per-brand rules.
//!
//! ## Brand Table
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │   brand        prefixes              digits   cvv   grouping            │
//! │   ──────────   ──────────────────    ──────   ───   ─────────           │
//! │   Visa         4                     16       3     4-4-4-4             │
//! │   Mastercard   51-55                 16       3     4-4-4-4             │
//! │   Amex         34, 37                15       4     4-6-5               │
//! │   Discover     601, 622, 644-649     16       3     4-4-4-4             │
//! │   DinersClub   30, 36, 38, 39        14       3     4-4-4-4             │
//! │   Unknown      everything else      (16)     (3)    4-4-4-4             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Inference runs on the cleaned digit string of an in-progress number and
//! is cheap enough to re-run on every keystroke. Longest matching prefix
//! wins: a leading "3" alone is still `Unknown` because Amex and DinersClub
//! need the second digit to tell apart.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// =============================================================================
// Card Brand
// =============================================================================

/// The category of payment card, inferred from leading digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum CardBrand {
    /// No known brand matches the digits typed so far.
    Unknown,
    Visa,
    Mastercard,
    Amex,
    Discover,
    DinersClub,
}

impl Default for CardBrand {
    fn default() -> Self {
        CardBrand::Unknown
    }
}

impl CardBrand {
    /// Infers the brand from a cleaned (whitespace-free) digit string.
    ///
    /// Any non-digit character anywhere in the input, or a prefix no brand
    /// claims, yields `Unknown`. Never panics.
    ///
    /// ## Example
    /// ```rust
    /// use choco_core::card::CardBrand;
    ///
    /// assert_eq!(CardBrand::from_digits("4242"), CardBrand::Visa);
    /// assert_eq!(CardBrand::from_digits("37"), CardBrand::Amex);
    /// assert_eq!(CardBrand::from_digits("3"), CardBrand::Unknown);
    /// ```
    pub fn from_digits(digits: &str) -> CardBrand {
        if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
            return CardBrand::Unknown;
        }

        match leading_number(digits, 1) {
            Some(3) => match leading_number(digits, 2) {
                Some(34) | Some(37) => CardBrand::Amex,
                Some(30) | Some(36) | Some(38) | Some(39) => CardBrand::DinersClub,
                _ => CardBrand::Unknown,
            },
            Some(4) => CardBrand::Visa,
            Some(5) => match leading_number(digits, 2) {
                Some(51..=55) => CardBrand::Mastercard,
                _ => CardBrand::Unknown,
            },
            Some(6) => match leading_number(digits, 3) {
                Some(601) | Some(622) | Some(644..=649) => CardBrand::Discover,
                _ => CardBrand::Unknown,
            },
            _ => CardBrand::Unknown,
        }
    }

    /// The full card-number length this brand expects.
    ///
    /// `Unknown` shares the most common length so an unrecognized number
    /// still formats and length-checks sensibly while being typed.
    pub const fn expected_digits(&self) -> usize {
        match self {
            CardBrand::Amex => 15,
            CardBrand::DinersClub => 14,
            _ => 16,
        }
    }

    /// The CVV length this brand expects (Amex prints 4 digits, the rest 3).
    pub const fn cvv_digits(&self) -> usize {
        match self {
            CardBrand::Amex => 4,
            _ => 3,
        }
    }

    /// Regroups a cleaned digit string into this brand's display form.
    ///
    /// Formatting applies regardless of validity - a half-typed number is
    /// grouped too. Input longer than the brand's groups keeps the overflow
    /// in a trailing group rather than dropping it.
    ///
    /// ## Example
    /// ```rust
    /// use choco_core::card::CardBrand;
    ///
    /// assert_eq!(
    ///     CardBrand::Visa.format("4242424242424242"),
    ///     "4242 4242 4242 4242"
    /// );
    /// assert_eq!(CardBrand::Amex.format("378282246310005"), "3782 822463 10005");
    /// assert_eq!(CardBrand::Visa.format("42"), "42");
    /// ```
    pub fn format(&self, digits: &str) -> String {
        let groups: &[usize] = match self {
            CardBrand::Amex => &[4, 6, 5],
            _ => &[4, 4, 4, 4],
        };

        let chars: Vec<char> = digits.chars().collect();
        let mut out = String::with_capacity(digits.len() + groups.len());
        let mut taken = 0;

        for &size in groups {
            if taken >= chars.len() {
                break;
            }
            if taken > 0 {
                out.push(' ');
            }
            let end = (taken + size).min(chars.len());
            out.extend(&chars[taken..end]);
            taken = end;
        }

        // Overflow beyond the brand's nominal length
        if taken < chars.len() {
            out.push(' ');
            out.extend(&chars[taken..]);
        }

        out
    }
}

/// Parses the first `count` characters of `digits` as a number.
/// `None` when the string is shorter than `count`.
fn leading_number(digits: &str, count: usize) -> Option<u32> {
    if digits.chars().count() < count {
        return None;
    }
    digits.chars().take(count).collect::<String>().parse().ok()
}

// =============================================================================
// Unit Tests
// =============================================================================
