//! Chart rendering.
//!
//! [`PlotlyHtmlRenderer`] writes a standalone HTML page which draws the chart
//! with Plotly.js in the browser.

use super::builder::{GRID_SIZE, PayoffChart, PayoffPanel, X_AXIS_LABEL, Y_AXIS_LABEL};
use crate::error::Result;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde_json::{Map, Value, json};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

const PLOTLY_CDN: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";

/// Turns a [`PayoffChart`] into something a person can look at.
pub trait ChartRenderer {
    /// Renders the chart.
    ///
    /// # Errors
    ///
    /// Returns an error if the chart cannot be serialized or written.
    fn render(&self, chart: &PayoffChart) -> Result<()>;
}

/// Renders charts as a Plotly HTML document on disk.
#[derive(Debug, Clone)]
pub struct PlotlyHtmlRenderer {
    output: PathBuf,
}

impl PlotlyHtmlRenderer {
    /// Creates a renderer writing to `output`.
    #[must_use]
    pub fn new(output: impl Into<PathBuf>) -> Self {
        Self {
            output: output.into(),
        }
    }

    /// Returns the output path.
    #[must_use]
    pub fn output(&self) -> &Path {
        &self.output
    }
}

impl ChartRenderer for PlotlyHtmlRenderer {
    fn render(&self, chart: &PayoffChart) -> Result<()> {
        let html = render_html(chart)?;
        fs::write(&self.output, html)?;
        info!(path = %self.output.display(), "wrote payoff chart");
        Ok(())
    }
}

/// Suffix Plotly uses for the axes and legend of the n-th subplot.
fn subplot_suffix(index: usize) -> String {
    if index == 0 {
        String::new()
    } else {
        (index + 1).to_string()
    }
}

/// Plotly takes plain JSON numbers.
fn plot_value(value: Decimal) -> f64 {
    value.to_f64().unwrap_or(f64::NAN)
}

fn plot_values(values: &[Decimal]) -> Vec<f64> {
    values.iter().copied().map(plot_value).collect()
}

fn panel_traces(chart: &PayoffChart, index: usize, panel: &PayoffPanel) -> Vec<Value> {
    let suffix = subplot_suffix(index);
    let xaxis = format!("x{suffix}");
    let yaxis = format!("y{suffix}");
    let legend = format!("legend{suffix}");

    let strike = plot_value(chart.strike);
    let low = plot_value(panel.max_loss);
    let high = plot_value(panel.max_profit);

    vec![
        json!({
            "x": plot_values(&chart.spots),
            "y": plot_values(&panel.payoffs),
            "type": "scatter",
            "mode": "lines",
            "name": panel.label,
            "line": {"color": panel.color, "width": 2},
            "xaxis": xaxis,
            "yaxis": yaxis,
            "legend": legend,
        }),
        json!({
            "x": [strike, strike],
            "y": [low, high],
            "type": "scatter",
            "mode": "lines",
            "name": "Strike Price",
            "line": {"color": "gray", "dash": "dot"},
            "xaxis": xaxis,
            "yaxis": yaxis,
            "legend": legend,
        }),
        json!({
            "x": [plot_value(panel.breakeven)],
            "y": [0],
            "type": "scatter",
            "mode": "markers",
            "name": panel.breakeven_label(),
            "marker": {"color": "blue", "size": 9},
            "xaxis": xaxis,
            "yaxis": yaxis,
            "legend": legend,
        }),
    ]
}

fn build_layout(chart: &PayoffChart) -> Value {
    let mut layout = Map::new();
    let mut shapes = Vec::new();
    let mut annotations = Vec::new();
    let cell = 1.0 / GRID_SIZE as f64;

    for (index, panel) in chart.panels.iter().enumerate() {
        let suffix = subplot_suffix(index);
        layout.insert(
            format!("xaxis{suffix}"),
            json!({
                "title": {"text": X_AXIS_LABEL},
                "showgrid": true,
                "gridcolor": "rgba(0,0,0,0.1)",
            }),
        );
        layout.insert(
            format!("yaxis{suffix}"),
            json!({
                "title": {"text": Y_AXIS_LABEL},
                "showgrid": true,
                "gridcolor": "rgba(0,0,0,0.1)",
            }),
        );

        // zero line across the full subplot width
        shapes.push(json!({
            "type": "line",
            "xref": format!("x{suffix} domain"),
            "yref": format!("y{suffix}"),
            "x0": 0,
            "x1": 1,
            "y0": 0,
            "y1": 0,
            "line": {"color": "black", "width": 1, "dash": "dash"},
        }));

        annotations.push(json!({
            "text": panel.title(),
            "xref": format!("x{suffix} domain"),
            "yref": format!("y{suffix} domain"),
            "x": 0.5,
            "y": 1.0,
            "xanchor": "center",
            "yanchor": "bottom",
            "showarrow": false,
            "font": {"size": 14},
        }));

        layout.insert(
            format!("legend{suffix}"),
            json!({
                "x": panel.col as f64 * cell + 0.01,
                "y": 1.0 - panel.row as f64 * cell - 0.02,
                "xanchor": "left",
                "yanchor": "top",
                "bgcolor": "rgba(255,255,255,0.8)",
            }),
        );
    }

    layout.insert(
        "title".to_string(),
        json!({"text": chart.title, "font": {"size": 16}}),
    );
    layout.insert(
        "grid".to_string(),
        json!({
            "rows": GRID_SIZE,
            "columns": GRID_SIZE,
            "pattern": "independent",
            "roworder": "top to bottom",
            "ygap": 0.3,
        }),
    );
    layout.insert("shapes".to_string(), Value::Array(shapes));
    layout.insert("annotations".to_string(), Value::Array(annotations));
    layout.insert("width".to_string(), json!(1400));
    layout.insert("height".to_string(), json!(1000));
    Value::Object(layout)
}

/// Renders the chart as a self-contained Plotly HTML document.
///
/// # Errors
///
/// Returns `Error::Serialization` if the chart data cannot be encoded.
pub fn render_html(chart: &PayoffChart) -> Result<String> {
    let traces: Vec<Value> = chart
        .panels
        .iter()
        .enumerate()
        .flat_map(|(index, panel)| panel_traces(chart, index, panel))
        .collect();

    let html = format!(
        r#"<!doctype html>
<html>
<head>
  <meta charset="utf-8" />
  <title>{title}</title>
  <script src="{cdn}"></script>
</head>
<body>
  <div id="payoffs"></div>
  <script>
    Plotly.newPlot('payoffs', {traces}, {layout}, {{responsive: true}});
  </script>
</body>
</html>
"#,
        title = chart.title,
        cdn = PLOTLY_CDN,
        traces = serde_json::to_string(&traces)?,
        layout = serde_json::to_string(&build_layout(chart))?,
    );
    Ok(html)
}
