//! Daily report fixture.
//!
//! Runs the update engine over a fixed stock for a number of days and writes
//! the state of every item after each day.

pub mod config;
pub mod report;
pub mod stock;

pub use config::{ConfigError, FixtureConfig, OutputFormat};
pub use report::{render_day, run};
pub use stock::default_stock;
