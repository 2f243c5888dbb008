//! # Checkout Plans
//!
//! A checkout plan is the scripted sequence the demo binary walks through:
//! select a payment method, check out an amount, repeat. Plans load from
//! TOML; a built-in plan is used when no file is configured.

use cart_core::{
    BankTransferPayment, CardPayment, CheckoutError, CheckoutResult, Currency,
    SharedPaymentMethod, WalletPayment,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Declarative payment method, as it appears in a plan file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MethodSpec {
    /// Card payment
    Card {
        card_number: String,
        holder_name: String,
    },
    /// Wallet account payment
    Wallet { account_id: String },
    /// Bank transfer payment
    BankTransfer { iban: String },
}

impl MethodSpec {
    /// Instantiate the concrete payment method this spec describes
    pub fn into_method(self) -> SharedPaymentMethod {
        match self {
            MethodSpec::Card {
                card_number,
                holder_name,
            } => Arc::new(CardPayment::new(card_number, holder_name)),
            MethodSpec::Wallet { account_id } => Arc::new(WalletPayment::new(account_id)),
            MethodSpec::BankTransfer { iban } => Arc::new(BankTransferPayment::new(iban)),
        }
    }
}

/// One step of the demo: optionally select a method, then check out
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckoutStep {
    /// Method to select before checking out; `None` keeps the current
    /// selection (or leaves the cart without one)
    #[serde(default)]
    pub method: Option<MethodSpec>,

    /// Amount to check out
    pub amount: f64,
}

/// The full scripted checkout run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckoutPlan {
    /// Currency used for every step
    #[serde(default)]
    pub currency: Currency,

    /// Steps, executed in order against a single cart
    pub steps: Vec<CheckoutStep>,
}

impl CheckoutPlan {
    /// Load a plan from a TOML string
    pub fn from_toml(toml_str: &str) -> CheckoutResult<Self> {
        toml::from_str(toml_str).map_err(|e| CheckoutError::PlanParse(e.to_string()))
    }

    /// The built-in plan: one checkout per payment channel
    pub fn builtin() -> Self {
        Self {
            currency: Currency::Eur,
            steps: vec![
                CheckoutStep {
                    method: Some(MethodSpec::Card {
                        card_number: "1234-5678-9012-3456".to_string(),
                        holder_name: "Mario Rossi".to_string(),
                    }),
                    amount: 100.0,
                },
                CheckoutStep {
                    method: Some(MethodSpec::Wallet {
                        account_id: "mario.rossi@email.com".to_string(),
                    }),
                    amount: 50.0,
                },
                CheckoutStep {
                    method: Some(MethodSpec::BankTransfer {
                        iban: "IT60X0542811101000000123456".to_string(),
                    }),
                    amount: 200.0,
                },
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cart_core::PaymentChannel;

    #[test]
    fn test_builtin_plan() {
        let plan = CheckoutPlan::builtin();

        assert_eq!(plan.currency, Currency::Eur);
        assert_eq!(plan.steps.len(), 3);
        assert!(plan.steps.iter().all(|step| step.method.is_some()));
    }

    #[test]
    fn test_plan_from_toml() {
        let plan = CheckoutPlan::from_toml(
            r#"
            currency = "eur"

            [[steps]]
            amount = 100.0

            [steps.method]
            kind = "card"
            card_number = "1234-5678-9012-3456"
            holder_name = "Mario Rossi"

            [[steps]]
            amount = 50.0

            [steps.method]
            kind = "wallet"
            account_id = "mario.rossi@email.com"
            "#,
        )
        .expect("valid plan");

        assert_eq!(plan.steps.len(), 2);
        assert_eq!(
            plan.steps[0].method,
            Some(MethodSpec::Card {
                card_number: "1234-5678-9012-3456".to_string(),
                holder_name: "Mario Rossi".to_string(),
            })
        );
        assert_eq!(plan.steps[1].amount, 50.0);
    }

    #[test]
    fn test_step_without_method() {
        let plan = CheckoutPlan::from_toml(
            r#"
            [[steps]]
            amount = 100.0
            "#,
        )
        .expect("valid plan");

        assert_eq!(plan.steps[0].method, None);
        assert_eq!(plan.currency, Currency::Eur);
    }

    #[test]
    fn test_unknown_kind_is_rejected() {
        let result = CheckoutPlan::from_toml(
            r#"
            [[steps]]
            amount = 10.0

            [steps.method]
            kind = "cheque"
            "#,
        );

        assert!(matches!(result, Err(CheckoutError::PlanParse(_))));
    }

    #[test]
    fn test_method_spec_instantiation() {
        let method = MethodSpec::Wallet {
            account_id: "mario.rossi@email.com".to_string(),
        }
        .into_method();

        assert_eq!(method.channel(), PaymentChannel::Wallet);
    }
}
