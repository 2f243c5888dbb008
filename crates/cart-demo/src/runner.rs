//! # Demo Runner
//!
//! Walks a checkout plan through a single shopping cart and collects the
//! output line for each checkout.

use crate::plan::CheckoutPlan;
use cart_core::{Amount, ShoppingCart};

/// Run `plan` against a fresh cart and return one line per checkout step
pub fn run_plan(plan: CheckoutPlan) -> Vec<String> {
    let currency = plan.currency;
    let mut cart = ShoppingCart::new();
    let mut lines = Vec::with_capacity(plan.steps.len());

    for step in plan.steps {
        if let Some(spec) = step.method {
            cart.set_payment_method(spec.into_method());
        }
        let outcome = cart.checkout(Amount::new(step.amount, currency));
        lines.push(outcome.to_string());
    }

    lines
}
