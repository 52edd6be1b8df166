//! Command-line entry point for drawing vanilla option payoff charts.

use clap::Parser;
use option_payoff_chart::chart::{ChartRenderer, PayoffChart, PayoffChartBuilder, PlotlyHtmlRenderer};
use option_payoff_chart::config::{ChartConfig, DEFAULT_OUTPUT};
use option_payoff_chart::utils::{DEFAULT_SPOT_BUFFER, format_price};
use option_payoff_chart::{Error, Result};
use rust_decimal::Decimal;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "payoff-chart",
    about = "Plot profit/loss at expiry for long/short calls and puts",
    version
)]
struct Cli {
    /// Strike price (prompted for when omitted)
    #[arg(short, long)]
    strike: Option<Decimal>,

    /// Option premium (prompted for when omitted)
    #[arg(short, long)]
    premium: Option<Decimal>,

    /// Distance from the strike to either end of the spot range
    #[arg(short, long, default_value_t = DEFAULT_SPOT_BUFFER)]
    buffer: u32,

    /// HTML file the chart is written to
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn prompt_decimal(label: &str) -> Result<Decimal> {
    let mut stdout = io::stdout();
    write!(stdout, "Enter {label}: ")?;
    stdout.flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    line.trim()
        .parse::<Decimal>()
        .map_err(|e| Error::invalid_config(format!("{label} '{}': {e}", line.trim())))
}

fn print_summary(chart: &PayoffChart) {
    println!("{}", chart.title);
    println!(
        "{:<22} {:>10} {:>12} {:>12}",
        "Scenario", "Breakeven", "Max Profit", "Max Loss"
    );
    for panel in &chart.panels {
        println!(
            "{:<22} {:>10} {:>12} {:>12}",
            panel.title(),
            format_price(panel.breakeven),
            format_price(panel.max_profit),
            format_price(panel.max_loss)
        );
    }
}

fn run(cli: Cli) -> Result<()> {
    let strike = match cli.strike {
        Some(strike) => strike,
        None => prompt_decimal("Strike Price")?,
    };
    let premium = match cli.premium {
        Some(premium) => premium,
        None => prompt_decimal("Premium")?,
    };

    let config = ChartConfig::new(strike, premium)?
        .with_buffer(cli.buffer)?
        .with_output(cli.output);
    info!(
        strike = %config.strike(),
        premium = %config.premium(),
        buffer = config.buffer(),
        "generating payoff chart"
    );

    let chart = PayoffChartBuilder::from_config(&config).build()?;
    PlotlyHtmlRenderer::new(config.output()).render(&chart)?;

    print_summary(&chart);
    println!("wrote {}", config.output().display());
    Ok(())
}

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    if let Err(err) = run(cli) {
        eprintln!("payoff-chart failed: {err}");
        std::process::exit(1);
    }
}
