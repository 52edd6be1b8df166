//! Benchmarks for option-payoff-chart library.
//!
//! - **payoff_bench**: Single and vectorised payoff evaluation
//! - **chart_bench**: Chart assembly and HTML rendering


use criterion::{criterion_group, criterion_main};

// Payoff calculator benchmarks
criterion_group!(
    payoff_benches,
    payoff_bench::payoff_operations,
    payoff_bench::payoff_scaling,
);

// Chart benchmarks
criterion_group!(
    chart_benches,
    chart_bench::chart_operations,
    chart_bench::chart_scaling,
);

criterion_main!(payoff_benches, chart_benches);
