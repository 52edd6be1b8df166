//! Expiry profit/loss of a single vanilla option.

use super::position::Position;
use optionstratlib::OptionStyle;
use rust_decimal::Decimal;

/// Value of exercising the option at `spot`, before the premium.
///
/// Call: `max(0, spot - strike)`. Put: `max(0, strike - spot)`.
#[must_use]
pub fn intrinsic_value(spot: Decimal, strike: Decimal, option_style: OptionStyle) -> Decimal {
    match option_style {
        OptionStyle::Call => (spot - strike).max(Decimal::ZERO),
        OptionStyle::Put => (strike - spot).max(Decimal::ZERO),
    }
}

/// Profit or loss at expiry for one option held on the given side.
///
/// A buyer earns the intrinsic value less the premium paid; a seller keeps
/// the premium less the intrinsic value owed.
///
/// # Examples
///
/// ```rust
/// use option_payoff_chart::payoff::{Position, compute_payoff};
/// use optionstratlib::OptionStyle;
/// use rust_decimal_macros::dec;
///
/// let pl = compute_payoff(dec!(110), dec!(100), dec!(5), OptionStyle::Call, Position::Buy);
/// assert_eq!(pl, dec!(5));
/// ```
#[must_use]
pub fn compute_payoff(
    spot: Decimal,
    strike: Decimal,
    premium: Decimal,
    option_style: OptionStyle,
    position: Position,
) -> Decimal {
    let intrinsic = intrinsic_value(spot, strike, option_style);
    match position {
        Position::Buy => intrinsic - premium,
        Position::Sell => premium - intrinsic,
    }
}

/// Applies [`compute_payoff`] to each spot price, preserving order and length.
#[must_use]
pub fn compute_payoffs(
    spots: &[Decimal],
    strike: Decimal,
    premium: Decimal,
    option_style: OptionStyle,
    position: Position,
) -> Vec<Decimal> {
    spots
        .iter()
        .map(|&spot| compute_payoff(spot, strike, premium, option_style, position))
        .collect()
}
