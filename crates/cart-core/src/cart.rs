//! # Shopping Cart
//!
//! The checkout context: holds at most one currently selected payment
//! method and delegates checkout to it.
//!
//! Selecting a method replaces the previous one unconditionally. Checking
//! out with nothing selected is the one reported condition in the system;
//! it is an outcome, not an error.

use crate::method::{Confirmation, PaymentChannel, PaymentMethod, SharedPaymentMethod};
use crate::money::Amount;
use serde::Serialize;
use std::sync::Arc;
use tracing::info;

/// Result of a checkout attempt
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum CheckoutOutcome {
    /// The selected method settled the amount
    Completed(Confirmation),

    /// No payment method was selected when checkout ran
    NoMethodSelected,
}

impl CheckoutOutcome {
    /// Check whether the amount was settled
    pub fn is_completed(&self) -> bool {
        matches!(self, CheckoutOutcome::Completed(_))
    }

    /// The confirmation, if the checkout completed
    pub fn confirmation(&self) -> Option<&Confirmation> {
        match self {
            CheckoutOutcome::Completed(confirmation) => Some(confirmation),
            CheckoutOutcome::NoMethodSelected => None,
        }
    }
}

impl std::fmt::Display for CheckoutOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CheckoutOutcome::Completed(confirmation) => confirmation.fmt(f),
            CheckoutOutcome::NoMethodSelected => f.write_str("No payment method selected!"),
        }
    }
}

/// Shopping cart: selects one payment method at a time and checks out
/// through it.
#[derive(Clone, Default)]
pub struct ShoppingCart {
    selected: Option<SharedPaymentMethod>,
}

impl ShoppingCart {
    /// Create a cart with no payment method selected
    pub fn new() -> Self {
        Self { selected: None }
    }

    /// Replace the currently selected payment method unconditionally
    pub fn set_payment_method(&mut self, method: SharedPaymentMethod) {
        info!(channel = %method.channel(), "payment method selected");
        self.selected = Some(method);
    }

    /// Select a concrete payment method without wrapping it first
    pub fn select(&mut self, method: impl PaymentMethod + 'static) {
        self.set_payment_method(Arc::new(method));
    }

    /// Builder: select a payment method
    pub fn with_payment_method(mut self, method: SharedPaymentMethod) -> Self {
        self.set_payment_method(method);
        self
    }

    /// Check whether a payment method is currently selected
    pub fn has_payment_method(&self) -> bool {
        self.selected.is_some()
    }

    /// Channel of the currently selected method, if any
    pub fn selected_channel(&self) -> Option<PaymentChannel> {
        self.selected.as_ref().map(|method| method.channel())
    }

    /// Check out `amount` with the selected method, if any.
    ///
    /// The selected method is never invoked when absent: the unset slot is
    /// reported as [`CheckoutOutcome::NoMethodSelected`].
    pub fn checkout(&self, amount: Amount) -> CheckoutOutcome {
        match &self.selected {
            Some(method) => {
                let confirmation = method.pay(amount);
                info!(channel = %confirmation.channel, %amount, "checkout completed");
                CheckoutOutcome::Completed(confirmation)
            }
            None => {
                info!(%amount, "checkout attempted with no payment method selected");
                CheckoutOutcome::NoMethodSelected
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::method::{BankTransferPayment, CardPayment, WalletPayment};
    use crate::money::Currency;

    fn eur(value: f64) -> Amount {
        Amount::new(value, Currency::Eur)
    }

    #[test]
    fn test_checkout_with_card() {
        let mut cart = ShoppingCart::new();
        cart.select(CardPayment::new("1234-5678-9012-3456", "Mario Rossi"));

        let outcome = cart.checkout(eur(100.0));
        assert!(outcome.is_completed());

        let line = outcome.to_string();
        assert!(line.contains("100.0"));
        assert!(line.contains("1234-5678-9012-3456"));
    }

    #[test]
    fn test_checkout_with_wallet() {
        let mut cart = ShoppingCart::new();
        cart.select(WalletPayment::new("mario.rossi@email.com"));

        let line = cart.checkout(eur(50.0)).to_string();
        assert!(line.contains("50.0"));
        assert!(line.contains("mario.rossi@email.com"));
    }

    #[test]
    fn test_checkout_with_bank_transfer() {
        let mut cart = ShoppingCart::new();
        cart.select(BankTransferPayment::new("IT60X0542811101000000123456"));

        let line = cart.checkout(eur(200.0)).to_string();
        assert!(line.contains("200.0"));
        assert!(line.contains("IT60X0542811101000000123456"));
    }

    #[test]
    fn test_checkout_without_method() {
        let cart = ShoppingCart::new();
        assert!(!cart.has_payment_method());

        let outcome = cart.checkout(eur(100.0));
        assert_eq!(outcome, CheckoutOutcome::NoMethodSelected);
        assert!(outcome.confirmation().is_none());

        // The report carries no amount and no identifying attribute
        let line = outcome.to_string();
        assert_eq!(line, "No payment method selected!");
        assert!(!line.contains("100"));
    }

    #[test]
    fn test_reselecting_replaces_method() {
        let mut cart = ShoppingCart::new();
        cart.select(CardPayment::new("1234-5678-9012-3456", "Mario Rossi"));
        assert_eq!(cart.selected_channel(), Some(PaymentChannel::Card));

        let first = cart.checkout(eur(100.0));

        cart.select(WalletPayment::new("mario.rossi@email.com"));
        assert_eq!(cart.selected_channel(), Some(PaymentChannel::Wallet));

        let second = cart.checkout(eur(50.0));

        // The earlier outcome is unaffected by the re-selection
        assert!(first.to_string().contains("1234-5678-9012-3456"));
        assert!(second.to_string().contains("mario.rossi@email.com"));
    }

    #[test]
    fn test_repeated_checkout_is_identical() {
        let mut cart = ShoppingCart::new();
        cart.select(WalletPayment::new("mario.rossi@email.com"));

        let first = cart.checkout(eur(50.0));
        let second = cart.checkout(eur(50.0));
        assert_eq!(first, second);
        assert_eq!(first.to_string(), second.to_string());
    }

    #[test]
    fn test_shared_method_handle() {
        let method: SharedPaymentMethod =
            Arc::new(BankTransferPayment::new("IT60X0542811101000000123456"));

        // The caller keeps a handle to the same instance the cart uses
        let cart = ShoppingCart::new().with_payment_method(Arc::clone(&method));

        let outcome = cart.checkout(eur(200.0));
        assert_eq!(
            outcome.confirmation().map(|c| c.reference.as_str()),
            Some("IT60X0542811101000000123456")
        );
        assert_eq!(method.channel(), PaymentChannel::BankTransfer);
    }

    #[test]
    fn test_builder_and_default() {
        let cart = ShoppingCart::default();
        assert!(cart.selected_channel().is_none());

        let cart = cart.with_payment_method(Arc::new(CardPayment::new("4111", "Ada")));
        assert!(cart.has_payment_method());
    }
}
