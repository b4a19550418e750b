//! Metric names and recording helpers

use std::time::Instant;

use opentelemetry::{
    KeyValue,
    metrics::{Histogram, Meter},
};

/// Instrumentation scope shared by every Parley crate
pub const METER_NAME: &str = "parley";

// Grammar service metric names
pub const GRAMMAR_CHECK_COUNT: &str = "grammar.check.count";
pub const GRAMMAR_CHECK_DURATION: &str = "grammar.check.duration";
pub const GRAMMAR_CHECK_FINDINGS: &str = "grammar.check.findings";

// Report metric names
pub const REPORT_GENERATED_COUNT: &str = "report.generated.count";

/// Outcome attribute values
pub const OUTCOME_SUCCESS: &str = "success";
pub const OUTCOME_FAILURE: &str = "failure";

/// Meter from the globally installed provider
///
/// Falls back to a no-op meter when telemetry export is not configured.
pub fn meter() -> Meter {
    opentelemetry::global::meter(METER_NAME)
}

/// Attribute tagging a measurement with its outcome
pub fn outcome(success: bool) -> KeyValue {
    KeyValue::new("outcome", if success { OUTCOME_SUCCESS } else { OUTCOME_FAILURE })
}

/// Record a duration measurement on a histogram
pub fn record_duration(histogram: &Histogram<f64>, start: Instant, attributes: &[KeyValue]) {
    let duration = start.elapsed().as_secs_f64();
    histogram.record(duration, attributes);
}
