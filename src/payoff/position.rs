//! Trade direction and option style parsing.

use crate::error::{Error, Result};
use optionstratlib::OptionStyle;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Side of the option contract held.
///
/// A buyer pays the premium and holds the right; a seller (writer) receives
/// the premium and carries the obligation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Position {
    /// Long the option.
    Buy,
    /// Short the option.
    Sell,
}

impl Position {
    /// Returns the display name of the position.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Buy => "Buy",
            Self::Sell => "Sell",
        }
    }

    /// Returns the opposite side of the trade.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Buy => Self::Sell,
            Self::Sell => Self::Buy,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Position {
    type Err = Error;

    /// Parses `buy`/`long` and `sell`/`short`, ignoring case and surrounding
    /// whitespace.
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "buy" | "long" => Ok(Self::Buy),
            "sell" | "short" => Ok(Self::Sell),
            _ => Err(Error::invalid_position(s)),
        }
    }
}

/// Parses an option style from text, ignoring case and surrounding whitespace.
///
/// # Errors
///
/// Returns `Error::InvalidOptionType` for anything other than `call` or `put`.
///
/// # Examples
///
/// ```rust
/// use option_payoff_chart::payoff::parse_option_style;
/// use optionstratlib::OptionStyle;
///
/// assert_eq!(parse_option_style("Call").unwrap(), OptionStyle::Call);
/// assert!(parse_option_style("Straddle").is_err());
/// ```
pub fn parse_option_style(s: &str) -> Result<OptionStyle> {
    match s.trim().to_ascii_lowercase().as_str() {
        "call" => Ok(OptionStyle::Call),
        "put" => Ok(OptionStyle::Put),
        _ => Err(Error::invalid_option_type(s)),
    }
}

/// Returns the display name of an option style.
#[must_use]
pub const fn style_name(style: OptionStyle) -> &'static str {
    match style {
        OptionStyle::Call => "Call",
        OptionStyle::Put => "Put",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_from_str() {
        assert_eq!("Buy".parse::<Position>().unwrap(), Position::Buy);
        assert_eq!(" sell ".parse::<Position>().unwrap(), Position::Sell);
        assert_eq!("LONG".parse::<Position>().unwrap(), Position::Buy);
        assert_eq!("short".parse::<Position>().unwrap(), Position::Sell);
    }

    #[test]
    fn test_position_from_str_invalid() {
        let err = "Hold".parse::<Position>().unwrap_err();
        assert!(matches!(err, Error::InvalidPosition(ref v) if v == "Hold"));
    }

    #[test]
    fn test_position_display_and_opposite() {
        assert_eq!(Position::Buy.to_string(), "Buy");
        assert_eq!(Position::Sell.to_string(), "Sell");
        assert_eq!(Position::Buy.opposite(), Position::Sell);
        assert_eq!(Position::Sell.opposite(), Position::Buy);
    }

    #[test]
    fn test_parse_option_style() {
        assert_eq!(parse_option_style("call").unwrap(), OptionStyle::Call);
        assert_eq!(parse_option_style("PUT").unwrap(), OptionStyle::Put);
    }

    #[test]
    fn test_parse_option_style_invalid() {
        let err = parse_option_style("Straddle").unwrap_err();
        assert!(matches!(err, Error::InvalidOptionType(ref v) if v == "Straddle"));
    }

    #[test]
    fn test_style_name() {
        assert_eq!(style_name(OptionStyle::Call), "Call");
        assert_eq!(style_name(OptionStyle::Put), "Put");
    }
}
