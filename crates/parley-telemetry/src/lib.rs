//! Telemetry for Parley
//!
//! Structured logging via the `tracing` ecosystem, with optional
//! OpenTelemetry metrics export

mod metadata;
pub mod metrics;

use std::time::Duration;

use opentelemetry::global;
use opentelemetry_otlp::{MetricExporter, WithExportConfig};
use opentelemetry_sdk::metrics::{PeriodicReader, SdkMeterProvider};
use parley_config::TelemetryConfig;
use parley_config::telemetry::exporters::{ExportProtocol, ExporterConfig};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

pub use opentelemetry::{
    KeyValue,
    metrics::{Counter, Histogram, Meter},
};

/// Keeps the metrics pipeline alive; pending metrics are pushed on drop
///
/// A short CLI run usually ends before the first export interval, so the
/// final push happens here.
pub struct TelemetryGuard {
    meter_provider: Option<SdkMeterProvider>,
}

impl Drop for TelemetryGuard {
    fn drop(&mut self) {
        if let Some(provider) = self.meter_provider.take()
            && let Err(e) = provider.shutdown()
        {
            eprintln!("failed to shutdown meter provider: {e}");
        }
    }
}

/// Initialize logging and, when an exporter is configured, metrics export
///
/// Logs go to stderr so stdout stays free for the report. The returned
/// guard must be held until exit.
///
/// # Errors
///
/// Returns an error if the OTLP metrics exporter cannot be built
pub fn init(config: Option<&TelemetryConfig>, log_filter: &str) -> anyhow::Result<TelemetryGuard> {
    let filter = EnvFilter::try_new(log_filter).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true),
        )
        .init();

    let meter_provider = match config {
        Some(telemetry) => match &telemetry.exporter {
            Some(exporter) => {
                let provider = meter_provider(telemetry, exporter)?;
                global::set_meter_provider(provider.clone());
                tracing::debug!(endpoint = %exporter.endpoint, "Metrics export enabled");
                Some(provider)
            }
            None => None,
        },
        None => None,
    };

    Ok(TelemetryGuard { meter_provider })
}

fn meter_provider(config: &TelemetryConfig, exporter: &ExporterConfig) -> anyhow::Result<SdkMeterProvider> {
    let builder = MetricExporter::builder();
    let metric_exporter = match exporter.protocol {
        ExportProtocol::Grpc => builder
            .with_tonic()
            .with_endpoint(exporter.endpoint.as_str())
            .build(),
        ExportProtocol::HttpProto => builder
            .with_http()
            .with_endpoint(exporter.endpoint.as_str())
            .build(),
    }
    .map_err(|e| anyhow::anyhow!("failed to build {:?} metrics exporter: {e}", exporter.protocol))?;

    let reader = PeriodicReader::builder(metric_exporter)
        .with_interval(Duration::from_secs(exporter.export_interval))
        .build();

    Ok(SdkMeterProvider::builder()
        .with_resource(metadata::build_resource(config))
        .with_reader(reader)
        .build())
}
