//! # Validation Module
//!
//! Credit-card input validation for the checkout form.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Flow                                    │
//! │                                                                         │
//! │  UI layer (external)                                                   │
//! │  ├── feeds the raw text of each field on every edit (debounced)        │
//! │  └── recolors the field from the returned validity flag                │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  THIS MODULE: pure, stateless validators                               │
//! │  ├── card number: strip → infer brand → regroup → length → Luhn        │
//! │  ├── expiration:  strip slash → reinsert → 6 digits, not in the past   │
//! │  └── CVV:         digits only, brand-dependent length                  │
//! │                                                                         │
//! │  Validation failure is a VALUE (is_valid = false), never an error      │
//! │  channel. Empty, too short, wrong checksum - all collapse to false.    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! All validators are safe to call synchronously and repeatedly: same input,
//! same output, no hidden state.

use chrono::{Datelike, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::card::CardBrand;
use crate::EXPIRATION_DIGITS;

// =============================================================================
// Luhn Checksum
// =============================================================================

/// Luhn mod-10 test over a digit string.
///
/// Iterates digits from the rightmost. Digits at odd zero-based index from
/// the right are doubled with their digit-sum reduced; the reduction is
/// `(digit * 2) % 9`, which agrees with summing the two digits of the
/// doubled value for 0-8. Doubling 9 gives 18 → 9, which the mod-9 shortcut
/// would map to 0, hence the special case. Digits at even index count as
/// themselves. Valid iff the total is divisible by 10.
///
/// Any non-digit character makes the whole string invalid. Never panics.
///
/// ## Example
/// ```rust
/// use choco_core::validation::luhn_valid;
///
/// assert!(luhn_valid("4242424242424242"));
/// assert!(!luhn_valid("4242424242424241"));
/// assert!(!luhn_valid("4242x42424242424"));
/// ```
pub fn luhn_valid(digits: &str) -> bool {
    let mut sum: u32 = 0;
    for (index, ch) in digits.chars().rev().enumerate() {
        let digit = match ch.to_digit(10) {
            Some(d) => d,
            // Not a number - definitely not valid
            None => return false,
        };
        if index % 2 == 1 {
            sum += match digit {
                9 => 9,
                other => (other * 2) % 9,
            };
        } else {
            sum += digit;
        }
    }

    sum % 10 == 0
}

// =============================================================================
// Card Number
// =============================================================================

/// Outcome of validating one card-number edit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CardNumberValidation {
    /// The cleaned digits regrouped into the brand's display form,
    /// produced regardless of validity.
    pub normalized: String,

    /// Brand inferred from the leading digits (re-inferred on every edit).
    pub brand: CardBrand,

    /// True iff the brand is known, the digit count matches the brand, and
    /// the Luhn checksum passes.
    pub is_valid: bool,
}

/// Validates a raw card-number string as typed.
///
/// Strips ALL whitespace first, then infers the brand, regroups the digits
/// for display, and checks length + Luhn.
///
/// ## Example
/// ```rust
/// use choco_core::card::CardBrand;
/// use choco_core::validation::validate_card_number;
///
/// let v = validate_card_number("4242 4242 4242 4242");
/// assert!(v.is_valid);
/// assert_eq!(v.brand, CardBrand::Visa);
/// assert_eq!(v.normalized, "4242 4242 4242 4242");
/// ```
pub fn validate_card_number(raw: &str) -> CardNumberValidation {
    let cleaned: String = raw.chars().filter(|c| !c.is_whitespace()).collect();

    let brand = CardBrand::from_digits(&cleaned);
    let normalized = brand.format(&cleaned);

    let is_valid = brand != CardBrand::Unknown
        && cleaned.chars().count() == brand.expected_digits()
        && luhn_valid(&cleaned);

    CardNumberValidation {
        normalized,
        brand,
        is_valid,
    }
}

// =============================================================================
// Expiration Date
// =============================================================================

/// Outcome of validating one expiration-date edit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ExpirationValidation {
    /// The cleaned input with the slash reinserted after the month digits,
    /// produced regardless of validity.
    pub normalized: String,

    /// True iff the input is exactly MMYYYY, the month exists, and the date
    /// is not strictly before the current month/year.
    pub is_valid: bool,
}

/// Validates a raw expiration string as typed, against the current clock.
///
/// The expected shape is MMYYYY, with or without a separating slash.
pub fn validate_expiration(raw: &str) -> ExpirationValidation {
    let today = Utc::now();
    validate_expiration_at(raw, today.year(), today.month())
}

/// Clock-injected variant of [`validate_expiration`] for deterministic tests.
pub fn validate_expiration_at(raw: &str, today_year: i32, today_month: u32) -> ExpirationValidation {
    let cleaned: String = raw.chars().filter(|c| *c != '/').collect();

    ExpirationValidation {
        normalized: insert_slash(&cleaned),
        is_valid: expiration_in_future(&cleaned, today_year, today_month),
    }
}

/// Reinserts the display slash after the two month digits.
/// Two or fewer characters stay untouched.
fn insert_slash(cleaned: &str) -> String {
    if cleaned.chars().count() <= 2 {
        return cleaned.to_string();
    }

    let mut out = String::with_capacity(cleaned.len() + 1);
    for (i, ch) in cleaned.chars().enumerate() {
        if i == 2 {
            out.push('/');
        }
        out.push(ch);
    }
    out
}

fn expiration_in_future(cleaned: &str, today_year: i32, today_month: u32) -> bool {
    if cleaned.chars().count() != EXPIRATION_DIGITS || !cleaned.chars().all(|c| c.is_ascii_digit())
    {
        return false;
    }

    // All-ASCII at this point, so byte slicing is safe
    let month: u32 = match cleaned[..2].parse() {
        Ok(m) => m,
        Err(_) => return false,
    };
    let year: i32 = match cleaned[2..].parse() {
        Ok(y) => y,
        Err(_) => return false,
    };

    (1..=12).contains(&month) && (year, month) >= (today_year, today_month)
}

// =============================================================================
// CVV
// =============================================================================

/// Validates a CVV against the brand inferred from the card number.
///
/// True iff every character is a digit and the digit count equals the
/// brand's CVV length (Amex 4, everything else 3).
///
/// ## Example
/// ```rust
/// use choco_core::card::CardBrand;
/// use choco_core::validation::validate_cvv;
///
/// assert!(validate_cvv("123", CardBrand::Visa));
/// assert!(!validate_cvv("12", CardBrand::Visa));
/// assert!(!validate_cvv("12a", CardBrand::Visa));
/// assert!(validate_cvv("1234", CardBrand::Amex));
/// ```
pub fn validate_cvv(raw: &str, brand: CardBrand) -> bool {
    raw.chars().all(|c| c.is_ascii_digit()) && raw.chars().count() == brand.cvv_digits()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // Luhn
    // -------------------------------------------------------------------------

    #[test]
    fn test_luhn_canonical_fixtures() {
        // Published test numbers for each brand
        assert!(luhn_valid("4242424242424242"));
        assert!(luhn_valid("4111111111111111"));
        assert!(luhn_valid("5555555555554444"));
        assert!(luhn_valid("378282246310005"));
        assert!(luhn_valid("6011111111111117"));
        assert!(luhn_valid("30569309025904"));
    }

    #[test]
    fn test_luhn_rejects_single_digit_flip() {
        assert!(!luhn_valid("4242424242424241"));
        assert!(!luhn_valid("4242424242424252"));
        assert!(!luhn_valid("4111111111111112"));
    }

    #[test]
    fn test_luhn_rejects_non_digits() {
        assert!(!luhn_valid("4242x42424242424"));
        assert!(!luhn_valid("4242 4242"));
    }

    #[test]
    fn test_luhn_nine_special_case() {
        // A doubled 9 contributes 9 (18 → 1 + 8), where the mod-9 shortcut
        // would wrongly contribute 0. "91" reversed is 1 + 9 = 10 → valid;
        // the buggy shortcut would compute 1 + 0 = 1 → invalid.
        assert!(luhn_valid("91"));
        // 59: 9 + (5*2)%9 = 10 → valid; 95: 5 + 9 = 14 → invalid
        assert!(luhn_valid("59"));
        assert!(!luhn_valid("95"));
    }

    // -------------------------------------------------------------------------
    // Card number
    // -------------------------------------------------------------------------

    #[test]
    fn test_card_number_valid_visa() {
        let v = validate_card_number("4242424242424242");
        assert!(v.is_valid);
        assert_eq!(v.brand, CardBrand::Visa);
        assert_eq!(v.normalized, "4242 4242 4242 4242");
    }

    #[test]
    fn test_card_number_normalization_round_trip() {
        // Already well-formed input strips and regroups to itself
        let v = validate_card_number("4242 4242 4242 4242");
        assert!(v.is_valid);
        assert_eq!(v.normalized, "4242 4242 4242 4242");
    }

    #[test]
    fn test_card_number_amex() {
        let v = validate_card_number("378282246310005");
        assert!(v.is_valid);
        assert_eq!(v.brand, CardBrand::Amex);
        assert_eq!(v.normalized, "3782 822463 10005");
    }

    #[test]
    fn test_card_number_wrong_length_for_brand() {
        // Luhn-valid but only 13 digits, and a Visa needs 16
        let short = validate_card_number("4222222222222");
        assert_eq!(short.brand, CardBrand::Visa);
        assert!(!short.is_valid);
    }

    #[test]
    fn test_card_number_unknown_brand_never_valid() {
        // 16 digits, Luhn-valid, but prefix 1 belongs to nobody
        let v = validate_card_number("1234567812345670");
        assert_eq!(v.brand, CardBrand::Unknown);
        assert!(!v.is_valid);
        // Still grouped for display
        assert_eq!(v.normalized, "1234 5678 1234 5670");
    }

    #[test]
    fn test_card_number_formats_partial_input() {
        let v = validate_card_number("42424");
        assert!(!v.is_valid);
        assert_eq!(v.normalized, "4242 4");
    }

    #[test]
    fn test_card_number_idempotent() {
        let first = validate_card_number("5555 5555 5555 4444");
        let second = validate_card_number("5555 5555 5555 4444");
        assert_eq!(first, second);
        assert!(first.is_valid);
        assert_eq!(first.brand, CardBrand::Mastercard);
    }

    // -------------------------------------------------------------------------
    // Expiration
    // -------------------------------------------------------------------------

    #[test]
    fn test_expiration_far_future_via_real_clock() {
        let v = validate_expiration("012099");
        assert!(v.is_valid);
        assert_eq!(v.normalized, "01/2099");
    }

    #[test]
    fn test_expiration_month_must_exist() {
        let v = validate_expiration_at("133099", 2026, 8);
        assert!(!v.is_valid);
        assert_eq!(v.normalized, "13/3099");

        assert!(!validate_expiration_at("003099", 2026, 8).is_valid);
    }

    #[test]
    fn test_expiration_not_in_the_past() {
        // Past year
        assert!(!validate_expiration_at("012020", 2026, 8).is_valid);
        // Same year, previous month
        assert!(!validate_expiration_at("072026", 2026, 8).is_valid);
        // Current month is still acceptable
        assert!(validate_expiration_at("082026", 2026, 8).is_valid);
        // Next month
        assert!(validate_expiration_at("092026", 2026, 8).is_valid);
    }

    #[test]
    fn test_expiration_shape() {
        // Too short, too long, non-digit
        assert!(!validate_expiration_at("1220", 2026, 8).is_valid);
        assert!(!validate_expiration_at("0120266", 2026, 8).is_valid);
        assert!(!validate_expiration_at("01a099", 2026, 8).is_valid);
    }

    #[test]
    fn test_expiration_slash_round_trip() {
        // Stripping and reinserting the slash is stable
        let v = validate_expiration_at("01/2099", 2026, 8);
        assert!(v.is_valid);
        assert_eq!(v.normalized, "01/2099");

        // Partial input gains the slash as soon as the month is complete
        assert_eq!(validate_expiration_at("012", 2026, 8).normalized, "01/2");
        assert_eq!(validate_expiration_at("01", 2026, 8).normalized, "01");
    }

    // -------------------------------------------------------------------------
    // CVV
    // -------------------------------------------------------------------------

    #[test]
    fn test_cvv_lengths() {
        assert!(!validate_cvv("12", CardBrand::Visa));
        assert!(validate_cvv("123", CardBrand::Visa));
        assert!(!validate_cvv("1234", CardBrand::Visa));

        assert!(!validate_cvv("123", CardBrand::Amex));
        assert!(validate_cvv("1234", CardBrand::Amex));
    }

    #[test]
    fn test_cvv_rejects_non_digits() {
        assert!(!validate_cvv("12a", CardBrand::Visa));
        assert!(!validate_cvv("", CardBrand::Visa));
        assert!(!validate_cvv(" 123", CardBrand::Visa));
    }
}
