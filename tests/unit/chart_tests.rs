//! Integration tests for the chart module.

use option_payoff_chart::chart::{
    ChartRenderer, PayoffChart, PayoffChartBuilder, PlotlyHtmlRenderer, build_chart,
};
use option_payoff_chart::config::ChartConfig;
use option_payoff_chart::{Error, Result};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::cell::RefCell;

/// Records the titles of every chart it is asked to render.
#[derive(Default)]
struct RecordingRenderer {
    titles: RefCell<Vec<String>>,
}

impl ChartRenderer for RecordingRenderer {
    fn render(&self, chart: &PayoffChart) -> Result<()> {
        self.titles.borrow_mut().push(chart.title.clone());
        Ok(())
    }
}

fn payoff_at(chart: &PayoffChart, title: &str, spot: Decimal) -> Decimal {
    let index = chart.spots.iter().position(|&s| s == spot).unwrap();
    chart.panel_by_title(title).unwrap().payoffs[index]
}

#[test]
fn test_end_to_end_strike_100_premium_5() {
    let chart = build_chart(dec!(100), dec!(5), 50).unwrap();

    let expected: Vec<Decimal> = (50..150).map(Decimal::from).collect();
    assert_eq!(chart.spots, expected);

    assert_eq!(payoff_at(&chart, "Long Call (Bullish)", dec!(110)), dec!(5));
    assert_eq!(payoff_at(&chart, "Short Put (Bullish)", dec!(90)), dec!(-5));
    assert_eq!(chart.panel_by_title("Long Call (Bullish)").unwrap().breakeven, dec!(105));
    assert_eq!(chart.panel_by_title("Long Put (Bearish)").unwrap().breakeven, dec!(95));
}

#[test]
fn test_build_is_idempotent() {
    let builder = PayoffChartBuilder::new(dec!(250), dec!(12.5)).buffer(25);
    assert_eq!(builder.build().unwrap(), builder.build().unwrap());
}

#[test]
fn test_custom_renderer() {
    let config = ChartConfig::new(dec!(100), dec!(5)).unwrap();
    let chart = PayoffChartBuilder::from_config(&config).build().unwrap();
    let renderer = RecordingRenderer::default();

    renderer.render(&chart).unwrap();

    assert_eq!(
        *renderer.titles.borrow(),
        vec!["Vanilla Option Payoffs (Strike K=100, Premium P=5)".to_string()]
    );
}

#[test]
fn test_plotly_renderer_end_to_end() {
    let path = std::env::temp_dir().join("option_payoff_chart_integration.html");
    let config = ChartConfig::new(dec!(100), dec!(5))
        .unwrap()
        .with_output(&path);
    let chart = PayoffChartBuilder::from_config(&config).build().unwrap();

    PlotlyHtmlRenderer::new(config.output()).render(&chart).unwrap();

    let html = std::fs::read_to_string(&path).unwrap();
    assert!(html.contains("Long Call (Bullish)"));
    assert!(html.contains("Short Put (Bullish)"));
    assert!(html.contains("Breakeven (95)"));
    std::fs::remove_file(&path).unwrap();
}

#[test]
fn test_zero_buffer_fails_without_chart() {
    assert!(matches!(
        build_chart(dec!(100), dec!(5), 0),
        Err(Error::InvalidConfig(_))
    ));
}

#[test]
fn test_out_of_range_config_fails_without_chart() {
    assert!(matches!(
        ChartConfig::new(Decimal::MAX, dec!(5)),
        Err(Error::InvalidConfig(_))
    ));
    assert!(matches!(
        build_chart(Decimal::MAX, dec!(5), 50),
        Err(Error::InvalidConfig(_))
    ));
    assert!(matches!(
        build_chart(dec!(100), dec!(5), u32::MAX),
        Err(Error::InvalidConfig(_))
    ));
}

#[test]
fn test_premium_above_buffer_extremes() {
    let chart = build_chart(dec!(100), dec!(60), 50).unwrap();
    let long_call = chart.panel_by_title("Long Call (Bullish)").unwrap();
    assert_eq!(long_call.max_profit, Decimal::ZERO);
    assert_eq!(long_call.max_loss, dec!(-60));
}
