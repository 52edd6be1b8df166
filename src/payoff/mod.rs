//! Payoff calculation module.
//!
//! This module computes the profit/loss at expiry of single-leg vanilla
//! option positions:
//!
//! ## Formulas
//!
//! ```text
//! intrinsic (call) = max(0, S - K)
//! intrinsic (put)  = max(0, K - S)
//! P/L (buy)        = intrinsic - P
//! P/L (sell)       = P - intrinsic
//! breakeven        = K + P (call), K - P (put)
//! ```
//!
//! ## Components
//!
//! - [`compute_payoff`]: P/L for a single spot price
//! - [`compute_payoffs`]: P/L for a sequence of spot prices
//! - [`Position`]: Buy or sell side of the contract
//! - [`Scenario`]: One of the four charted strategies, see [`SCENARIOS`]

mod calculator;
mod position;
mod scenario;

// Re-export all public types
pub use calculator::{compute_payoff, compute_payoffs, intrinsic_value};
pub use position::{Position, parse_option_style, style_name};
pub use scenario::{SCENARIOS, Scenario};
