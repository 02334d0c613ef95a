//! Domain layer: pure data and rules, no browser APIs.

pub mod balance;
pub mod chart;
pub mod errors;
pub mod logging;
