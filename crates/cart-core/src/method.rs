//! # Payment Methods
//!
//! The `PaymentMethod` trait and its built-in implementations.
//!
//! ## Design
//!
//! Payment methods are interchangeable at runtime: the cart delegates to
//! whichever method is currently selected without knowing its concrete type.
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │            PaymentMethod (trait)            │
//! │  ├── pay()                                  │
//! │  └── channel()                              │
//! └─────────────────────────────────────────────┘
//!                       ▲
//!        ┌──────────────┼──────────────────┐
//!        │              │                  │
//! ┌──────┴──────┐ ┌─────┴───────┐ ┌────────┴──────────┐
//! │ CardPayment │ │WalletPayment│ │BankTransferPayment│
//! └─────────────┘ └─────────────┘ └───────────────────┘
//! ```
//!
//! Settlement is simulated end to end: `pay` performs no I/O, applies no
//! validation, and cannot fail.

use crate::money::Amount;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

/// Payment channel identifier (for logging and display)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentChannel {
    Card,
    Wallet,
    BankTransfer,
}

impl PaymentChannel {
    /// Returns the channel identifier
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentChannel::Card => "card",
            PaymentChannel::Wallet => "wallet",
            PaymentChannel::BankTransfer => "bank_transfer",
        }
    }

    /// Human-readable channel wording used in confirmations
    pub fn label(&self) -> &'static str {
        match self {
            PaymentChannel::Card => "credit card",
            PaymentChannel::Wallet => "wallet account",
            PaymentChannel::BankTransfer => "bank transfer",
        }
    }
}

impl std::fmt::Display for PaymentChannel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Confirmation of a completed (simulated) payment.
///
/// `Display` renders the human-readable confirmation line: the amount, the
/// channel wording, and the identifying attribute of the method that
/// settled it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Confirmation {
    /// Channel that settled the amount
    pub channel: PaymentChannel,

    /// Amount settled
    pub amount: Amount,

    /// Identifying attribute of the method (card number, account id, IBAN)
    pub reference: String,
}

impl std::fmt::Display for Confirmation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.channel {
            PaymentChannel::BankTransfer => write!(
                f,
                "Payment of {} completed by {} from {}",
                self.amount,
                self.channel.label(),
                self.reference
            ),
            _ => write!(
                f,
                "Payment of {} completed with {} {}",
                self.amount,
                self.channel.label(),
                self.reference
            ),
        }
    }
}

/// One interchangeable way to settle a checkout amount.
///
/// Implementations carry their own identifying data and produce a
/// [`Confirmation`] embedding it together with the amount.
pub trait PaymentMethod: Send + Sync {
    /// Settle `amount` and return the confirmation for it.
    ///
    /// Cannot fail: settlement is simulated and no validation is applied
    /// to the amount or to the method's identifying data.
    fn pay(&self, amount: Amount) -> Confirmation;

    /// The channel this method settles through (for logging and display)
    fn channel(&self) -> PaymentChannel;
}

/// Shared handle to a payment method (dynamic dispatch).
///
/// The cart does not own the method exclusively; the caller may keep a
/// clone of the same handle.
pub type SharedPaymentMethod = Arc<dyn PaymentMethod>;

/// Card payment details. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardPayment {
    card_number: String,
    holder_name: String,
}

impl CardPayment {
    /// Create a card payment method
    pub fn new(card_number: impl Into<String>, holder_name: impl Into<String>) -> Self {
        Self {
            card_number: card_number.into(),
            holder_name: holder_name.into(),
        }
    }

    /// The card number (no checksum validation is performed)
    pub fn card_number(&self) -> &str {
        &self.card_number
    }

    /// The card holder's name
    pub fn holder_name(&self) -> &str {
        &self.holder_name
    }
}

impl PaymentMethod for CardPayment {
    fn pay(&self, amount: Amount) -> Confirmation {
        debug!(card = %self.card_number, holder = %self.holder_name, %amount, "settling via card");
        Confirmation {
            channel: PaymentChannel::Card,
            amount,
            reference: self.card_number.clone(),
        }
    }

    fn channel(&self) -> PaymentChannel {
        PaymentChannel::Card
    }
}

/// Wallet payment details (account identified by e.g. an email address).
/// Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalletPayment {
    account_id: String,
}

impl WalletPayment {
    /// Create a wallet payment method
    pub fn new(account_id: impl Into<String>) -> Self {
        Self {
            account_id: account_id.into(),
        }
    }

    /// The wallet account identifier
    pub fn account_id(&self) -> &str {
        &self.account_id
    }
}

impl PaymentMethod for WalletPayment {
    fn pay(&self, amount: Amount) -> Confirmation {
        debug!(account = %self.account_id, %amount, "settling via wallet");
        Confirmation {
            channel: PaymentChannel::Wallet,
            amount,
            reference: self.account_id.clone(),
        }
    }

    fn channel(&self) -> PaymentChannel {
        PaymentChannel::Wallet
    }
}

/// Bank transfer payment details. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BankTransferPayment {
    iban: String,
}

impl BankTransferPayment {
    /// Create a bank transfer payment method
    pub fn new(iban: impl Into<String>) -> Self {
        Self { iban: iban.into() }
    }

    /// The IBAN or account number (no checksum validation is performed)
    pub fn iban(&self) -> &str {
        &self.iban
    }
}

impl PaymentMethod for BankTransferPayment {
    fn pay(&self, amount: Amount) -> Confirmation {
        debug!(iban = %self.iban, %amount, "settling via bank transfer");
        Confirmation {
            channel: PaymentChannel::BankTransfer,
            amount,
            reference: self.iban.clone(),
        }
    }

    fn channel(&self) -> PaymentChannel {
        PaymentChannel::BankTransfer
    }
}
