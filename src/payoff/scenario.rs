//! The four vanilla option strategies charted side by side.

use super::calculator::compute_payoffs;
use super::position::{Position, style_name};
use optionstratlib::OptionStyle;
use rust_decimal::Decimal;

/// A single-leg strategy: one option style held on one side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scenario {
    /// Call or put.
    pub option_style: OptionStyle,
    /// Buy or sell.
    pub position: Position,
    /// Panel title shown above the payoff curve.
    pub title: &'static str,
}

/// Long call, short call, long put, short put, in chart order.
pub const SCENARIOS: [Scenario; 4] = [
    Scenario::new(OptionStyle::Call, Position::Buy, "Long Call (Bullish)"),
    Scenario::new(OptionStyle::Call, Position::Sell, "Short Call (Bearish)"),
    Scenario::new(OptionStyle::Put, Position::Buy, "Long Put (Bearish)"),
    Scenario::new(OptionStyle::Put, Position::Sell, "Short Put (Bullish)"),
];

impl Scenario {
    /// Creates a new scenario.
    #[must_use]
    pub const fn new(option_style: OptionStyle, position: Position, title: &'static str) -> Self {
        Self {
            option_style,
            position,
            title,
        }
    }

    /// Returns the series label, e.g. `"Buy Call"`.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{} {}", self.position, style_name(self.option_style))
    }

    /// Spot price at expiry where the strategy neither gains nor loses.
    ///
    /// Call: `strike + premium`. Put: `strike - premium`. The zero crossing
    /// does not depend on the side since a sale is the negated purchase.
    #[must_use]
    pub fn breakeven(&self, strike: Decimal, premium: Decimal) -> Decimal {
        match self.option_style {
            OptionStyle::Call => strike + premium,
            OptionStyle::Put => strike - premium,
        }
    }

    /// Profit/loss curve over the given spot prices.
    #[must_use]
    pub fn payoffs(&self, spots: &[Decimal], strike: Decimal, premium: Decimal) -> Vec<Decimal> {
        compute_payoffs(spots, strike, premium, self.option_style, self.position)
    }
}
