//! Payoff chart builder module.
//!
//! This module provides the [`PayoffChartBuilder`] which evaluates every
//! scenario over a spot range and assembles the renderer-agnostic
//! [`PayoffChart`] model.

use crate::config::ChartConfig;
use crate::error::Result;
use crate::payoff::{Position, SCENARIOS, Scenario};
use crate::utils::{DEFAULT_SPOT_BUFFER, check_chart_bounds, format_price, spot_range};
use rust_decimal::Decimal;
use tracing::{debug, info};

/// X axis label shared by all panels.
pub const X_AXIS_LABEL: &str = "Spot Price (S) at Expiry";
/// Y axis label shared by all panels.
pub const Y_AXIS_LABEL: &str = "Profit / Loss";
/// Panels per row and per column of the grid.
pub const GRID_SIZE: usize = 2;

/// One cell of the payoff grid.
#[derive(Debug, Clone, PartialEq)]
pub struct PayoffPanel {
    /// Strategy plotted in this panel.
    pub scenario: Scenario,
    /// Zero-based grid row.
    pub row: usize,
    /// Zero-based grid column.
    pub col: usize,
    /// Legend label of the payoff curve, e.g. `"Buy Call"`.
    pub label: String,
    /// Curve color: green for long positions, red for short ones.
    pub color: &'static str,
    /// Profit/loss aligned with [`PayoffChart::spots`].
    pub payoffs: Vec<Decimal>,
    /// Spot price where profit/loss is zero.
    pub breakeven: Decimal,
    /// Largest profit over the charted range, as a non-negative number.
    pub max_profit: Decimal,
    /// Largest loss over the charted range, as a non-positive number.
    pub max_loss: Decimal,
}

impl PayoffPanel {
    /// Returns the panel title.
    #[must_use]
    pub const fn title(&self) -> &'static str {
        self.scenario.title
    }

    /// Returns the legend label of the breakeven marker.
    #[must_use]
    pub fn breakeven_label(&self) -> String {
        format!("Breakeven ({})", format_price(self.breakeven))
    }
}

/// A 2x2 grid of payoff diagrams sharing one strike, premium and spot range.
#[derive(Debug, Clone, PartialEq)]
pub struct PayoffChart {
    /// Figure title, including strike and premium.
    pub title: String,
    /// Strike price drawn as a vertical line in every panel.
    pub strike: Decimal,
    /// Premium of every scenario.
    pub premium: Decimal,
    /// Spot prices at expiry, ascending.
    pub spots: Vec<Decimal>,
    /// Panels in row-major order.
    pub panels: Vec<PayoffPanel>,
}

impl PayoffChart {
    /// Returns the panel at the given grid cell.
    #[must_use]
    pub fn panel(&self, row: usize, col: usize) -> Option<&PayoffPanel> {
        self.panels.iter().find(|p| p.row == row && p.col == col)
    }

    /// Returns the panel plotting the given scenario title.
    #[must_use]
    pub fn panel_by_title(&self, title: &str) -> Option<&PayoffPanel> {
        self.panels.iter().find(|p| p.title() == title)
    }
}

/// Builds a [`PayoffChart`] for the four vanilla scenarios.
#[derive(Debug, Clone, Copy)]
pub struct PayoffChartBuilder {
    strike: Decimal,
    premium: Decimal,
    buffer: u32,
}

impl PayoffChartBuilder {
    /// Creates a builder with the default spot buffer.
    #[must_use]
    pub const fn new(strike: Decimal, premium: Decimal) -> Self {
        Self {
            strike,
            premium,
            buffer: DEFAULT_SPOT_BUFFER,
        }
    }

    /// Creates a builder from a validated configuration.
    #[must_use]
    pub const fn from_config(config: &ChartConfig) -> Self {
        Self {
            strike: config.strike(),
            premium: config.premium(),
            buffer: config.buffer(),
        }
    }

    /// Sets the distance from the strike to either end of the spot range.
    #[must_use]
    pub const fn buffer(mut self, buffer: u32) -> Self {
        self.buffer = buffer;
        self
    }

    /// Evaluates every scenario and assembles the chart.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidConfig` if the buffer is zero or too large, or
    /// if the spot range or a breakeven would overflow `Decimal`.
    pub fn build(&self) -> Result<PayoffChart> {
        check_chart_bounds(self.strike, self.premium, self.buffer)?;

        let spots = spot_range(self.strike, self.buffer);
        let panels = SCENARIOS
            .iter()
            .enumerate()
            .map(|(index, scenario)| self.build_panel(index, scenario, &spots))
            .collect();

        let title = format!(
            "Vanilla Option Payoffs (Strike K={}, Premium P={})",
            format_price(self.strike),
            format_price(self.premium)
        );
        info!(
            strike = %self.strike,
            premium = %self.premium,
            points = spots.len(),
            "built payoff chart"
        );

        Ok(PayoffChart {
            title,
            strike: self.strike,
            premium: self.premium,
            spots,
            panels,
        })
    }

    fn build_panel(&self, index: usize, scenario: &Scenario, spots: &[Decimal]) -> PayoffPanel {
        let payoffs = scenario.payoffs(spots, self.strike, self.premium);
        let breakeven = scenario.breakeven(self.strike, self.premium);
        let max_profit = payoffs
            .iter()
            .copied()
            .max()
            .unwrap_or_default()
            .max(Decimal::ZERO);
        let max_loss = payoffs
            .iter()
            .copied()
            .min()
            .unwrap_or_default()
            .min(Decimal::ZERO);
        debug!(
            scenario = scenario.title,
            %breakeven,
            %max_profit,
            %max_loss,
            "evaluated scenario"
        );

        PayoffPanel {
            scenario: *scenario,
            row: index / GRID_SIZE,
            col: index % GRID_SIZE,
            label: scenario.label(),
            color: match scenario.position {
                Position::Buy => "green",
                Position::Sell => "red",
            },
            payoffs,
            breakeven,
            max_profit,
            max_loss,
        }
    }
}

/// Builds the four-scenario payoff chart for a strike and premium.
///
/// # Errors
///
/// Returns `Error::InvalidConfig` if `buffer` is zero or too large, or if the
/// chart would overflow `Decimal`.
///
/// # Examples
///
/// ```rust
/// use option_payoff_chart::chart::build_chart;
/// use rust_decimal_macros::dec;
///
/// let chart = build_chart(dec!(100), dec!(5), 50).unwrap();
/// assert_eq!(chart.spots.len(), 100);
/// assert_eq!(chart.panels.len(), 4);
/// assert_eq!(chart.panels[0].breakeven, dec!(105));
/// ```
pub fn build_chart(strike: Decimal, premium: Decimal, buffer: u32) -> Result<PayoffChart> {
    PayoffChartBuilder::new(strike, premium).buffer(buffer).build()
}
