//! Core library for the `weatherviz` CLI.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - The forecast provider abstraction and its WeatherAPI.com implementation
//! - Shared domain models (requests, results)
//! - The five chart renderers
//!
//! It is used by `weatherviz-cli`, but can also be reused by other binaries or services.

pub mod chart;
pub mod config;
pub mod model;
pub mod provider;
pub mod timefmt;

pub use chart::{ChartError, render_all};
pub use config::Config;
pub use model::{CurrentConditions, ForecastDay, ForecastRequest, ForecastResult};
pub use provider::{FetchError, ForecastProvider, WeatherApiClient};
