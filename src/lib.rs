//! # Option Payoff Chart - Vanilla Option Payoff Diagrams
//!
//! A small Rust library for computing and charting the profit/loss at expiry
//! of the four single-leg vanilla option strategies, built on
//! [OptionStratLib](https://crates.io/crates/optionstratlib) types.
//!
//! ## Key Features
//!
//! - **Exact Arithmetic**: Prices and payoffs use `rust_decimal::Decimal`, so
//!   the payoff at the breakeven price is exactly zero.
//!
//! - **Closed Enumerations**: Option style (`OptionStyle` from OptionStratLib)
//!   and [`payoff::Position`] are enums; textual input is parsed once at the
//!   edge and rejected with [`Error::InvalidOptionType`] or
//!   [`Error::InvalidPosition`].
//!
//! - **Renderer-Agnostic Charts**: [`chart::PayoffChartBuilder`] produces a plain
//!   data model; [`chart::ChartRenderer`] implementations decide how to draw it.
//!
//! - **Result-Based Error Handling**: All fallible operations return `Result<T, Error>`
//!   with descriptive error types.
//!
//! ## Module Structure
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`payoff`] | Payoff formulas, positions and the four scenarios |
//! | [`chart`] | Chart model, builder and Plotly renderer |
//! | [`config`] | Validated chart configuration |
//! | [`error`] | Error types and `Result` type alias |
//! | [`utils`] | Spot range generation and price formatting |
//!
//! ## Scenarios
//!
//! | Panel | Style | Position | Breakeven |
//! |-------|-------|----------|-----------|
//! | Long Call (Bullish) | Call | Buy | K + P |
//! | Short Call (Bearish) | Call | Sell | K + P |
//! | Long Put (Bearish) | Put | Buy | K - P |
//! | Short Put (Bullish) | Put | Sell | K - P |
//!
//! ## Example Usage
//!
//! ### Computing a Payoff
//!
//! ```rust
//! use option_payoff_chart::payoff::{Position, compute_payoff};
//! use optionstratlib::OptionStyle;
//! use rust_decimal_macros::dec;
//!
//! let pl = compute_payoff(dec!(90), dec!(100), dec!(5), OptionStyle::Put, Position::Sell);
//! assert_eq!(pl, dec!(-5));
//! ```
//!
//! ### Building and Rendering a Chart
//!
//! ```rust,no_run
//! use option_payoff_chart::chart::{ChartRenderer, PayoffChartBuilder, PlotlyHtmlRenderer};
//! use rust_decimal_macros::dec;
//!
//! let chart = PayoffChartBuilder::new(dec!(100), dec!(5))
//!     .buffer(50)
//!     .build()
//!     .unwrap();
//!
//! PlotlyHtmlRenderer::new("payoff_chart.html")
//!     .render(&chart)
//!     .unwrap();
//! ```
//!
//! ## Binary
//!
//! The `payoff-chart` binary wraps the library:
//!
//! ```bash
//! payoff-chart --strike 100 --premium 5
//! payoff-chart --strike 100 --premium 5 --buffer 30 --output chart.html --verbose
//! ```
//!
//! Strike and premium are prompted for on stdin when omitted.
//!
//! ## Dependencies
//!
//! - **optionstratlib** (0.13): `OptionStyle` option type
//! - **rust_decimal** (1.39): Precise decimal arithmetic
//! - **serde_json** (1.0): Plotly trace and layout encoding
//! - **thiserror** (2.0): Error handling
//! - **tracing** (0.1): Structured logging

pub mod chart;
pub mod config;
pub mod error;
pub mod payoff;
pub mod utils;

pub use error::{Error, Result};
