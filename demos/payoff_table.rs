//! Payoff Table Example
//!
//! This example demonstrates the payoff calculator without any chart:
//! - Parsing option style and position from text
//! - Evaluating the four scenarios at a handful of spot prices
//! - Reading breakevens from the scenario table
//!
//! Run with: `cargo run --example payoff_table`

use option_payoff_chart::payoff::{Position, SCENARIOS, compute_payoff, parse_option_style};
use option_payoff_chart::utils::format_price;
use rust_decimal_macros::dec;
use tracing::{info, warn};

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    info!("=== Payoff Table Example ===");

    let strike = dec!(100);
    let premium = dec!(5);
    let spots = [dec!(80), dec!(95), dec!(100), dec!(105), dec!(120)];
    info!("Strike: {strike}, Premium: {premium}");

    for scenario in SCENARIOS {
        info!("\n{}", scenario.title);
        info!(
            "  Breakeven: {}",
            format_price(scenario.breakeven(strike, premium))
        );
        for (spot, pl) in spots.iter().zip(scenario.payoffs(&spots, strike, premium)) {
            info!("  S={spot:>4}  P/L={pl:>4}");
        }
    }

    // Textual input is parsed once, then the typed API cannot fail
    info!("\nParsing user input:");
    for (style, side) in [("call", "buy"), ("Put", "short"), ("Straddle", "Buy"), ("Call", "Hold")] {
        let parsed = parse_option_style(style)
            .and_then(|style| side.parse::<Position>().map(|position| (style, position)));
        match parsed {
            Ok((style, position)) => {
                let pl = compute_payoff(dec!(110), strike, premium, style, position);
                info!("  {side} {style:?} at S=110: {pl}");
            }
            Err(err) => warn!("  rejected: {err}"),
        }
    }
}
