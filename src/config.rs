//! Chart configuration.

use crate::error::{Error, Result};
use crate::utils::{DEFAULT_SPOT_BUFFER, check_chart_bounds};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default file the HTML chart is written to.
pub const DEFAULT_OUTPUT: &str = "payoff_chart.html";

/// Validated inputs for one chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    /// Strike price shared by all four scenarios.
    strike: Decimal,
    /// Premium paid by the buyer and received by the seller.
    premium: Decimal,
    /// Distance from the strike to either end of the spot range.
    buffer: u32,
    /// Destination of the rendered chart.
    output: PathBuf,
}

impl ChartConfig {
    /// Creates a configuration with the default buffer and output path.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidConfig` if the strike is not positive, the
    /// premium is negative, or the chart would leave the `Decimal` range.
    pub fn new(strike: Decimal, premium: Decimal) -> Result<Self> {
        if strike <= Decimal::ZERO {
            return Err(Error::invalid_config(format!(
                "strike must be positive, got {strike}"
            )));
        }
        if premium < Decimal::ZERO {
            return Err(Error::invalid_config(format!(
                "premium must not be negative, got {premium}"
            )));
        }
        check_chart_bounds(strike, premium, DEFAULT_SPOT_BUFFER)?;
        Ok(Self {
            strike,
            premium,
            buffer: DEFAULT_SPOT_BUFFER,
            output: PathBuf::from(DEFAULT_OUTPUT),
        })
    }

    /// Sets the spot range buffer.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidConfig` if the buffer is zero, above
    /// [`MAX_SPOT_BUFFER`](crate::utils::MAX_SPOT_BUFFER), or pushes the spot
    /// range out of the `Decimal` range.
    pub fn with_buffer(mut self, buffer: u32) -> Result<Self> {
        check_chart_bounds(self.strike, self.premium, buffer)?;
        self.buffer = buffer;
        Ok(self)
    }

    /// Sets the output path.
    #[must_use]
    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = output.into();
        self
    }

    /// Returns the strike price.
    #[must_use]
    pub const fn strike(&self) -> Decimal {
        self.strike
    }

    /// Returns the premium.
    #[must_use]
    pub const fn premium(&self) -> Decimal {
        self.premium
    }

    /// Returns the spot range buffer.
    #[must_use]
    pub const fn buffer(&self) -> u32 {
        self.buffer
    }

    /// Returns the output path.
    #[must_use]
    pub fn output(&self) -> &PathBuf {
        &self.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_config_defaults() {
        let config = ChartConfig::new(dec!(100), dec!(5)).unwrap();
        assert_eq!(config.strike(), dec!(100));
        assert_eq!(config.premium(), dec!(5));
        assert_eq!(config.buffer(), 50);
        assert_eq!(config.output(), &PathBuf::from("payoff_chart.html"));
    }

    #[test]
    fn test_config_zero_premium_allowed() {
        assert!(ChartConfig::new(dec!(100), dec!(0)).is_ok());
    }

    #[test]
    fn test_config_rejects_bad_strike() {
        assert!(matches!(
            ChartConfig::new(dec!(0), dec!(5)),
            Err(Error::InvalidConfig(_))
        ));
        assert!(ChartConfig::new(dec!(-10), dec!(5)).is_err());
    }

    #[test]
    fn test_config_rejects_negative_premium() {
        assert!(matches!(
            ChartConfig::new(dec!(100), dec!(-1)),
            Err(Error::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_config_buffer_and_output() {
        let config = ChartConfig::new(dec!(100), dec!(5))
            .unwrap()
            .with_buffer(20)
            .unwrap()
            .with_output("out/chart.html");
        assert_eq!(config.buffer(), 20);
        assert_eq!(config.output(), &PathBuf::from("out/chart.html"));
    }

    #[test]
    fn test_config_rejects_unrepresentable_strike() {
        assert!(matches!(
            ChartConfig::new(Decimal::MAX, dec!(5)),
            Err(Error::InvalidConfig(_))
        ));
        assert!(ChartConfig::new(dec!(100), Decimal::MAX).is_err());
    }

    #[test]
    fn test_config_rejects_oversized_buffer() {
        let config = ChartConfig::new(dec!(100), dec!(5)).unwrap();
        assert!(matches!(
            config.with_buffer(u32::MAX),
            Err(Error::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_config_rejects_zero_buffer() {
        let config = ChartConfig::new(dec!(100), dec!(5)).unwrap();
        assert!(config.with_buffer(0).is_err());
    }
}
