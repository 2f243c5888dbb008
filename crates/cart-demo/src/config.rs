//! # Demo Configuration
//!
//! Plan discovery for the demo binary. An explicit plan file can be named
//! with the `CART_PLAN` environment variable; otherwise well-known relative
//! paths are probed and the built-in plan is the fallback.

use crate::plan::CheckoutPlan;
use cart_core::{CheckoutError, CheckoutResult};
use tracing::info;

/// Environment variable naming an explicit plan file
pub const PLAN_PATH_VAR: &str = "CART_PLAN";

/// Paths probed when `CART_PLAN` is not set
const DEFAULT_PLAN_PATHS: [&str; 3] = [
    "config/demo.toml",
    "../config/demo.toml",
    "../../config/demo.toml",
];

/// Load the checkout plan to run.
///
/// An explicitly configured file that cannot be read or parsed is a hard
/// error; a missing default file just falls through to the built-in plan.
pub fn load_plan() -> CheckoutResult<CheckoutPlan> {
    dotenvy::dotenv().ok();

    if let Ok(path) = std::env::var(PLAN_PATH_VAR) {
        let content = std::fs::read_to_string(&path)
            .map_err(|e| CheckoutError::Configuration(format!("cannot read {path}: {e}")))?;
        let plan = CheckoutPlan::from_toml(&content)?;
        info!("Loaded {} checkout steps from {}", plan.steps.len(), path);
        return Ok(plan);
    }

    for path in DEFAULT_PLAN_PATHS {
        if let Ok(content) = std::fs::read_to_string(path) {
            let plan = CheckoutPlan::from_toml(&content)?;
            info!("Loaded {} checkout steps from {}", plan.steps.len(), path);
            return Ok(plan);
        }
    }

    info!("No plan file found, using the built-in demo plan");
    Ok(CheckoutPlan::builtin())
}
