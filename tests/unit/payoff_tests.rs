//! Integration tests for the payoff module.

use option_payoff_chart::Error;
use option_payoff_chart::payoff::{
    Position, SCENARIOS, compute_payoff, compute_payoffs, parse_option_style,
};
use option_payoff_chart::utils::spot_range;
use optionstratlib::OptionStyle;
use rust_decimal_macros::dec;

#[test]
fn test_sell_mirrors_buy_over_range() {
    let spots = spot_range(dec!(100), 50);
    for scenario in SCENARIOS {
        let held = scenario.payoffs(&spots, dec!(100), dec!(5));
        let mirrored = compute_payoffs(
            &spots,
            dec!(100),
            dec!(5),
            scenario.option_style,
            scenario.position.opposite(),
        );
        assert_eq!(held.len(), spots.len());
        for (h, m) in held.iter().zip(&mirrored) {
            assert_eq!(*h, -*m);
        }
    }
}

#[test]
fn test_breakeven_is_exact_zero() {
    assert!(compute_payoff(dec!(105), dec!(100), dec!(5), OptionStyle::Call, Position::Buy).is_zero());
    assert!(compute_payoff(dec!(95), dec!(100), dec!(5), OptionStyle::Put, Position::Buy).is_zero());

    for scenario in SCENARIOS {
        let be = scenario.breakeven(dec!(101.37), dec!(2.19));
        assert!(scenario.payoffs(&[be], dec!(101.37), dec!(2.19))[0].is_zero());
    }
}

#[test]
fn test_textual_input_parsing() {
    // parse first, then compute with the typed values
    let style = parse_option_style("Put").unwrap();
    let position: Position = "Sell".parse().unwrap();
    let pl = compute_payoff(dec!(90), dec!(100), dec!(5), style, position);
    assert_eq!(pl, dec!(-5));

    assert!(matches!(
        parse_option_style("Straddle"),
        Err(Error::InvalidOptionType(_))
    ));
    assert!(matches!(
        "Hold".parse::<Position>(),
        Err(Error::InvalidPosition(_))
    ));
}
