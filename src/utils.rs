//! Utility functions for the option payoff chart library.

use crate::error::{Error, Result};
use rust_decimal::Decimal;

/// Default distance, in price units, between the strike and either end of the
/// generated spot range.
pub const DEFAULT_SPOT_BUFFER: u32 = 50;

/// Largest accepted spot buffer; the range holds `2 * buffer` points.
pub const MAX_SPOT_BUFFER: u32 = 100_000;

/// Checks that a chart over these inputs stays within `Decimal` range.
///
/// Every spot price, breakeven and payoff of the chart is bounded by the sums
/// checked here, so a chart passing this check cannot overflow.
///
/// # Errors
///
/// Returns `Error::InvalidConfig` if the buffer is zero or above
/// [`MAX_SPOT_BUFFER`], or if the spot range or a breakeven is not
/// representable.
pub fn check_chart_bounds(strike: Decimal, premium: Decimal, buffer: u32) -> Result<()> {
    if buffer == 0 {
        return Err(Error::invalid_config("buffer must be at least 1"));
    }
    if buffer > MAX_SPOT_BUFFER {
        return Err(Error::invalid_config(format!(
            "buffer must be at most {MAX_SPOT_BUFFER}, got {buffer}"
        )));
    }
    let buffer = Decimal::from(buffer);
    let representable = strike.checked_add(buffer).is_some()
        && strike.checked_sub(buffer).is_some()
        && strike.checked_add(premium).is_some()
        && strike.checked_sub(premium).is_some()
        && buffer.checked_add(premium.abs()).is_some();
    if !representable {
        return Err(Error::invalid_config(format!(
            "strike {strike} and premium {premium} are out of range for buffer {buffer}"
        )));
    }
    Ok(())
}

/// Generates the spot prices charted around a strike.
///
/// The range starts at `strike - buffer` and advances in unit steps, stopping
/// before `strike + buffer`, so it always holds `2 * buffer` points.
///
/// # Examples
///
/// ```rust
/// use option_payoff_chart::utils::spot_range;
/// use rust_decimal_macros::dec;
///
/// let spots = spot_range(dec!(100), 50);
/// assert_eq!(spots.len(), 100);
/// assert_eq!(spots[0], dec!(50));
/// assert_eq!(spots[99], dec!(149));
/// ```
#[must_use]
pub fn spot_range(strike: Decimal, buffer: u32) -> Vec<Decimal> {
    let start = strike - Decimal::from(buffer);
    let points = u64::from(buffer) * 2;
    (0..points).map(|step| start + Decimal::from(step)).collect()
}

/// Formats a price for chart titles and labels without trailing zeros.
///
/// # Examples
///
/// ```rust
/// use option_payoff_chart::utils::format_price;
/// use rust_decimal_macros::dec;
///
/// assert_eq!(format_price(dec!(105.00)), "105");
/// assert_eq!(format_price(dec!(97.50)), "97.5");
/// ```
#[must_use]
pub fn format_price(price: Decimal) -> String {
    price.normalize().to_string()
}
