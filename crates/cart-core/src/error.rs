//! # Checkout Error Types
//!
//! Typed errors for the configuration layer of checkout-cart-rs.
//!
//! Checkout itself never fails: attempting to check out with no payment
//! method selected is a reported outcome (`CheckoutOutcome::NoMethodSelected`),
//! not an error. The variants here only surface while loading a demo plan.

use thiserror::Error;

/// Error type for plan and configuration loading
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// Configuration errors (unreadable plan file, bad env var)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A plan file could not be parsed
    #[error("Plan parse error: {0}")]
    PlanParse(String),
}

/// Result type alias for checkout configuration operations
pub type CheckoutResult<T> = Result<T, CheckoutError>;
