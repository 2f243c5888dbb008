//! # Checkout-Cart RS
//!
//! Demonstrates interchangeable payment methods on a shopping cart: each
//! plan step selects a method and checks out an amount through it.
//!
//! ## Usage
//!
//! ```bash
//! # Optional: point at a custom plan file
//! export CART_PLAN=config/demo.toml
//!
//! checkout-cart
//! ```

use cart_demo::{config, runner};
use tracing::{info, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> anyhow::Result<()> {
    // Diagnostics go to stderr; stdout carries exactly one line per checkout
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(
            EnvFilter::builder()
                .with_default_directive(Level::INFO.into())
                .from_env_lossy(),
        )
        .init();

    let plan = config::load_plan()?;
    info!("Running {} checkout steps", plan.steps.len());

    for line in runner::run_plan(plan) {
        println!("{line}");
    }

    Ok(())
}
