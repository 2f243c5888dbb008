//! # cart-core
//!
//! Core types for the checkout-cart demo engine.
//!
//! This crate provides:
//! - `PaymentMethod` trait with card, wallet, and bank transfer
//!   implementations
//! - `ShoppingCart` checkout context that delegates to the selected method
//! - `Amount` and `Currency` money types
//! - `CheckoutError` for the configuration layer
//!
//! ## Example
//!
//! ```rust
//! use cart_core::{Amount, CardPayment, Currency, ShoppingCart};
//!
//! let mut cart = ShoppingCart::new();
//! cart.select(CardPayment::new("1234-5678-9012-3456", "Mario Rossi"));
//!
//! let outcome = cart.checkout(Amount::new(100.0, Currency::Eur));
//! println!("{outcome}");
//! ```

pub mod cart;
pub mod error;
pub mod method;
pub mod money;

// Re-exports for convenience
pub use cart::{CheckoutOutcome, ShoppingCart};
pub use error::{CheckoutError, CheckoutResult};
pub use method::{
    BankTransferPayment, CardPayment, Confirmation, PaymentChannel, PaymentMethod,
    SharedPaymentMethod, WalletPayment,
};
pub use money::{Amount, Currency};
