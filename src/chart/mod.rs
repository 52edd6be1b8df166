//! Payoff chart module.
//!
//! Arranges the four vanilla scenarios into a 2x2 grid:
//!
//! ```text
//! ┌──────────────────────┬──────────────────────┐
//! │ Long Call (Bullish)  │ Short Call (Bearish) │
//! ├──────────────────────┼──────────────────────┤
//! │ Long Put (Bearish)   │ Short Put (Bullish)  │
//! └──────────────────────┴──────────────────────┘
//! ```
//!
//! Every panel shows the payoff curve, a dashed zero line, a dotted strike
//! line and a marker at the breakeven price.
//!
//! ## Components
//!
//! - [`PayoffChartBuilder`]: Evaluates the scenarios over the spot range
//! - [`PayoffChart`]: Renderer-agnostic chart model
//! - [`PayoffPanel`]: A single grid cell
//! - [`ChartRenderer`]: Rendering seam
//! - [`PlotlyHtmlRenderer`]: Writes the chart as a Plotly HTML page

mod builder;
mod render;

// Re-export all public types
pub use builder::{
    GRID_SIZE, PayoffChart, PayoffChartBuilder, PayoffPanel, X_AXIS_LABEL, Y_AXIS_LABEL,
    build_chart,
};
pub use render::{ChartRenderer, PlotlyHtmlRenderer, render_html};
