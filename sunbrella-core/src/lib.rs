//! Core library for the `sunbrella` CLI.
//!
//! This crate defines:
//! - Configuration (API key, endpoints, timeout)
//! - Geolocation and forecast lookups behind small traits
//! - The threshold rules deciding between sunblock and umbrella
//!
//! It is used by `sunbrella-cli`, but can also be reused by other binaries.

pub mod advise;
pub mod config;
pub mod error;
pub mod evaluator;
pub mod forecaster;
mod http;
pub mod locator;
pub mod model;

pub use advise::advise;
pub use config::Config;
pub use error::{Service, SunbrellaError};
pub use evaluator::{PRECIP_PROB_THRESHOLD, UV_INDEX_THRESHOLD, evaluate};
pub use forecaster::{Forecaster, OpenWeatherForecaster};
pub use locator::{IfconfigLocator, Locator};
pub use model::{Check, Location, UnknownCheck, Verdict, WeatherConditions};
