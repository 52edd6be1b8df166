//! Integration tests for the option payoff chart library.

mod chart_tests;
mod payoff_tests;
