//! Telemetry logic.
//! Support logging and metrics.
use std::time::Duration;

use axum::http::StatusCode;
use metrics::Unit;
use metrics_exporter_prometheus::{
    BuildError, Matcher, PrometheusBuilder, PrometheusHandle,
    PrometheusRecorder,
};
use tracing_subscriber::EnvFilter;

use crate::config::Configuration;
use crate::error::{Error, Result};

const REQUESTS_TOTAL: &str = "signup_requests_total";
const DURATION_SECONDS: &str = "signup_duration_seconds";

/// Install a global `fmt` subscriber.
///
/// `RUST_LOG` takes precedence over the `log` entry of the configuration.
pub fn init(config: &Configuration) -> Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&config.log).map_err(|err| {
            Error::InvalidConfiguration(format!("`log` entry, {err}"))
        })?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init()
        .map_err(Error::Internal)
}

fn metrics_builder() -> std::result::Result<PrometheusBuilder, BuildError> {
    const EXPONENTIAL_SECONDS: &[f64] = &[
        0.0005, 0.001, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5,
    ];

    metrics::describe_counter!(
        REQUESTS_TOTAL,
        Unit::Count,
        "Sign up requests handled, by response status."
    );
    metrics::describe_histogram!(
        DURATION_SECONDS,
        Unit::Seconds,
        "Time spent handling a sign up request."
    );

    PrometheusBuilder::new().set_buckets_for_metric(
        Matcher::Full(DURATION_SECONDS.to_string()),
        EXPONENTIAL_SECONDS,
    )
}

/// Create a Prometheus recorder without installing it.
pub fn build_metrics_recorder()
-> std::result::Result<PrometheusRecorder, BuildError> {
    Ok(metrics_builder()?.build_recorder())
}

/// Create and install the global recorder for Prometheus metrics.
///
/// The returned handle renders the scrape payload.
pub fn setup_metrics_recorder()
-> std::result::Result<PrometheusHandle, BuildError> {
    metrics_builder()?.install_recorder()
}

/// Record the outcome of one sign up request.
pub fn record_signup(status: StatusCode, latency: Duration) {
    let labels = [("status", status.as_u16().to_string())];
    metrics::counter!(REQUESTS_TOTAL, &labels).increment(1);
    metrics::histogram!(DURATION_SECONDS, &labels)
        .record(latency.as_secs_f64());
}
