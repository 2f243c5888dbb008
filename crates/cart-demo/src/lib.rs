//! # cart-demo
//!
//! Demonstration driver for checkout-cart-rs.
//!
//! This crate provides:
//! - `CheckoutPlan` — a scripted sequence of method selections and checkouts
//! - plan discovery from `CART_PLAN` / `config/demo.toml`
//! - a runner that walks a plan through a single `ShoppingCart`

pub mod config;
pub mod plan;
pub mod runner;

pub use plan::{CheckoutPlan, CheckoutStep, MethodSpec};
pub use runner::run_plan;
