//! # Checkout Form
//!
//! Per-attempt state for the billing form: three raw input fields, the
//! inferred card brand, and the combined submit gate.
//!
//! ## Data Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Checkout Form Flow                                 │
//! │                                                                         │
//! │  UI field edit (debounced by the caller)                               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  card_number_changed / expiration_changed / cvv_changed                │
//! │       │                                                                 │
//! │       ├──► FieldUpdate { normalized, is_valid, focus }                 │
//! │       │         │                                                       │
//! │       │         ├── normalized ──► rewrite the field text              │
//! │       │         ├── is_valid ────► recolor the field                   │
//! │       │         └── focus ───────► move the cursor (caller policy)     │
//! │       │                                                                 │
//! │       └──► is_everything_valid() ──► enable/disable the submit button  │
//! │                                                                         │
//! │  The form never touches UI state; focus hints are outputs only.        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Validity is recomputed from the stored raw strings on every read, so a
//! brand change (retyping the number from Visa to Amex) immediately
//! re-judges the CVV - there is no stale cached flag to invalidate.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::card::CardBrand;
use crate::validation::{validate_card_number, validate_cvv, validate_expiration};

// =============================================================================
// Focus Hints
// =============================================================================

/// Where the caller should move input focus after an edit.
///
/// These are signals driven off validator output, not actions: the original
/// app advanced its text fields at exactly these boundaries, and the policy
/// stays with the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum FocusHint {
    /// Keep focus where it is.
    Stay,
    /// Card number reached its brand's full length - move to expiration.
    AdvanceToExpiration,
    /// Expiration reached six digits - move to CVV.
    AdvanceToCvv,
    /// CVV reached its brand's full length - input can be dismissed.
    Dismiss,
}

/// Result of applying one field edit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FieldUpdate {
    /// Display form of the field after the edit.
    pub normalized: String,

    /// Whether the field alone is valid.
    pub is_valid: bool,

    /// Focus-advance signal for the caller.
    pub focus: FocusHint,
}

// =============================================================================
// Card Input State
// =============================================================================

/// The raw field contents of one checkout attempt.
///
/// Transient: discarded after submission or cancellation, never persisted.
/// Stored strings are the cleaned forms (whitespace/slash stripped) so the
/// validators can re-run against them at any time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardInputState {
    /// Card number digits, whitespace stripped.
    pub card_number: String,

    /// Expiration digits (MMYYYY), slash stripped.
    pub expiration: String,

    /// CVV exactly as typed.
    pub cvv: String,

    /// Brand inferred from the card number, re-inferred on every edit.
    pub brand: CardBrand,
}

// =============================================================================
// Checkout Form
// =============================================================================

/// Applies field edits and answers the submit-gate question.
///
/// ## Example
/// ```rust
/// use choco_core::checkout::CheckoutForm;
///
/// let mut form = CheckoutForm::new();
/// form.card_number_changed("4242 4242 4242 4242");
/// form.expiration_changed("012099");
/// form.cvv_changed("123");
///
/// assert!(form.is_everything_valid());
/// ```
#[derive(Debug, Clone, Default)]
pub struct CheckoutForm {
    state: CardInputState,
}

impl CheckoutForm {
    /// A fresh attempt: all fields empty, brand unknown, nothing valid.
    pub fn new() -> Self {
        CheckoutForm::default()
    }

    /// Applies a card-number edit.
    ///
    /// Re-infers the brand, regroups the digits, and reports whether the
    /// field is complete enough to advance focus.
    pub fn card_number_changed(&mut self, raw: &str) -> FieldUpdate {
        let validation = validate_card_number(raw);

        self.state.card_number = raw.chars().filter(|c| !c.is_whitespace()).collect();
        self.state.brand = validation.brand;

        let complete = self.state.card_number.chars().count() == validation.brand.expected_digits();
        FieldUpdate {
            normalized: validation.normalized,
            is_valid: validation.is_valid,
            focus: if complete {
                FocusHint::AdvanceToExpiration
            } else {
                FocusHint::Stay
            },
        }
    }

    /// Applies an expiration edit.
    pub fn expiration_changed(&mut self, raw: &str) -> FieldUpdate {
        let validation = validate_expiration(raw);

        self.state.expiration = raw.chars().filter(|c| *c != '/').collect();

        let complete = self.state.expiration.chars().count() == crate::EXPIRATION_DIGITS;
        FieldUpdate {
            normalized: validation.normalized,
            is_valid: validation.is_valid,
            focus: if complete {
                FocusHint::AdvanceToCvv
            } else {
                FocusHint::Stay
            },
        }
    }

    /// Applies a CVV edit.
    ///
    /// The CVV is judged against the brand currently inferred from the card
    /// number field.
    pub fn cvv_changed(&mut self, raw: &str) -> FieldUpdate {
        self.state.cvv = raw.to_string();

        let is_valid = validate_cvv(raw, self.state.brand);
        FieldUpdate {
            normalized: raw.to_string(),
            is_valid,
            focus: if is_valid {
                FocusHint::Dismiss
            } else {
                FocusHint::Stay
            },
        }
    }

    /// The brand currently inferred from the card number field.
    pub fn brand(&self) -> CardBrand {
        self.state.brand
    }

    /// Read access to the raw attempt state.
    pub fn state(&self) -> &CardInputState {
        &self.state
    }

    /// Logical AND of the three field validities - the submit gate.
    ///
    /// Recomputed from the stored raw strings, so it can never disagree
    /// with what the individual validators would say right now.
    pub fn is_everything_valid(&self) -> bool {
        validate_card_number(&self.state.card_number).is_valid
            && validate_expiration(&self.state.expiration).is_valid
            && validate_cvv(&self.state.cvv, self.state.brand)
    }

    /// Discards the attempt.
    pub fn reset(&mut self) {
        self.state = CardInputState::default();
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_form_is_not_submittable() {
        let form = CheckoutForm::new();
        assert!(!form.is_everything_valid());
        assert_eq!(form.brand(), CardBrand::Unknown);
    }

    #[test]
    fn test_submit_gate_requires_all_three_fields() {
        let mut form = CheckoutForm::new();

        form.card_number_changed("4242 4242 4242 4242");
        assert!(!form.is_everything_valid());

        form.expiration_changed("01/2099");
        assert!(!form.is_everything_valid());

        form.cvv_changed("123");
        assert!(form.is_everything_valid());
    }

    #[test]
    fn test_card_number_update_reports_brand_and_format() {
        let mut form = CheckoutForm::new();
        let update = form.card_number_changed("55555555");

        assert_eq!(update.normalized, "5555 5555");
        assert!(!update.is_valid);
        assert_eq!(update.focus, FocusHint::Stay);
        assert_eq!(form.brand(), CardBrand::Mastercard);
    }

    #[test]
    fn test_focus_advances_at_full_card_number() {
        let mut form = CheckoutForm::new();

        let partial = form.card_number_changed("4242 4242 4242 424");
        assert_eq!(partial.focus, FocusHint::Stay);

        let full = form.card_number_changed("4242 4242 4242 4242");
        assert_eq!(full.focus, FocusHint::AdvanceToExpiration);

        // Amex advances at 15 digits
        let amex = form.card_number_changed("378282246310005");
        assert_eq!(amex.focus, FocusHint::AdvanceToExpiration);
    }

    #[test]
    fn test_focus_advances_at_six_expiration_digits() {
        let mut form = CheckoutForm::new();

        assert_eq!(form.expiration_changed("0120").focus, FocusHint::Stay);
        assert_eq!(
            form.expiration_changed("012099").focus,
            FocusHint::AdvanceToCvv
        );
        // Even an invalid month is complete at six digits; the field just
        // stays marked invalid
        let bad_month = form.expiration_changed("139999");
        assert_eq!(bad_month.focus, FocusHint::AdvanceToCvv);
        assert!(!bad_month.is_valid);
    }

    #[test]
    fn test_cvv_dismisses_only_when_valid() {
        let mut form = CheckoutForm::new();
        form.card_number_changed("4242424242424242");

        assert_eq!(form.cvv_changed("12").focus, FocusHint::Stay);
        assert_eq!(form.cvv_changed("12a").focus, FocusHint::Stay);
        assert_eq!(form.cvv_changed("123").focus, FocusHint::Dismiss);
    }

    #[test]
    fn test_brand_change_rejudges_cvv() {
        let mut form = CheckoutForm::new();
        form.card_number_changed("4242424242424242");
        form.expiration_changed("012099");
        form.cvv_changed("123");
        assert!(form.is_everything_valid());

        // Retyping the number as an Amex demands a 4-digit CVV
        form.card_number_changed("378282246310005");
        assert!(!form.is_everything_valid());

        form.cvv_changed("1234");
        assert!(form.is_everything_valid());
    }

    #[test]
    fn test_reset_discards_the_attempt() {
        let mut form = CheckoutForm::new();
        form.card_number_changed("4242424242424242");
        form.expiration_changed("012099");
        form.cvv_changed("123");

        form.reset();

        assert!(!form.is_everything_valid());
        assert_eq!(form.brand(), CardBrand::Unknown);
        assert_eq!(form.state().card_number, "");
    }

    #[test]
    fn test_edits_are_idempotent() {
        let mut form = CheckoutForm::new();
        let first = form.card_number_changed("4242 4242 4242 4242");
        let second = form.card_number_changed("4242 4242 4242 4242");
        assert_eq!(first, second);
    }
}
