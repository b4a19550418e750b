use std::time::Instant;

use parley_telemetry::{Counter, Histogram, Meter, metrics};

/// Instruments recorded around every grammar check
pub struct GrammarMetrics {
    checks: Counter<u64>,
    duration: Histogram<f64>,
    findings: Counter<u64>,
}

impl GrammarMetrics {
    pub fn new(meter: &Meter) -> Self {
        Self {
            checks: meter.u64_counter(metrics::GRAMMAR_CHECK_COUNT).build(),
            duration: meter
                .f64_histogram(metrics::GRAMMAR_CHECK_DURATION)
                .with_unit("s")
                .build(),
            findings: meter.u64_counter(metrics::GRAMMAR_CHECK_FINDINGS).build(),
        }
    }

    /// Instruments on the globally installed meter provider
    pub fn global() -> Self {
        Self::new(&metrics::meter())
    }

    /// One finished call to the service
    pub fn record_check(&self, start: Instant, success: bool) {
        let outcome = [metrics::outcome(success)];
        metrics::record_duration(&self.duration, start, &outcome);
        self.checks.add(1, &outcome);
    }

    /// Findings that made it into the summary
    pub fn record_findings(&self, reported: usize) {
        self.findings.add(reported as u64, &[]);
    }
}
