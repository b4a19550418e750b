#![allow(clippy::must_use_candidate)]

mod env;
pub mod grammar;
mod loader;
pub mod telemetry;

use serde::Deserialize;

pub use grammar::*;
pub use telemetry::TelemetryConfig;

/// Top-level Parley configuration
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Grammar checking service configuration
    #[serde(default)]
    pub grammar: GrammarConfig,
    /// Telemetry configuration
    #[serde(default)]
    pub telemetry: Option<TelemetryConfig>,
}
