//! Prometheus metrics for recorded results and request latency.
//!
//! This module provides:
//! - Counters for accepted and ignored game results
//! - HTTP request latency per endpoint
//! - Installation of the Prometheus recorder backing `/metrics`
//! - Periodic recorder upkeep so histogram samples are drained between scrapes

use std::time::{Duration, Instant};

use metrics::{counter, describe_counter, describe_histogram, histogram};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::debug;

use crate::error::Result;
use crate::record::Winner;

// === Metric Name Constants ===

/// Accepted results counter metric name (labelled by winner).
pub const METRIC_RESULTS_RECORDED: &str = "results_recorded_total";
/// Ignored results counter metric name.
pub const METRIC_RESULTS_IGNORED: &str = "results_ignored_total";
/// HTTP request latency metric name.
pub const METRIC_HTTP_REQUEST_LATENCY: &str = "http_request_latency_ms";

/// How often the Prometheus recorder is upkept.
pub const UPKEEP_INTERVAL: Duration = Duration::from_secs(5);

/// Install the global Prometheus recorder and return its render handle.
///
/// Can only succeed once per process.
pub fn install_prometheus() -> Result<PrometheusHandle> {
    let handle = PrometheusBuilder::new().install_recorder()?;
    init_metrics();
    Ok(handle)
}

/// Run `handle.run_upkeep()` every `period` until the task is aborted.
///
/// The recorder buffers histogram samples until upkeep or a scrape drains
/// them; without this task memory grows with every request.
pub fn spawn_upkeep(handle: PrometheusHandle, period: Duration) -> JoinHandle<()> {
    spawn_periodic(period, move || handle.run_upkeep())
}

fn spawn_periodic<F>(period: Duration, mut task: F) -> JoinHandle<()>
where
    F: FnMut() + Send + 'static,
{
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        loop {
            ticker.tick().await;
            task();
        }
    })
}

/// Initialize all metric descriptions.
///
/// Per-winner counters are registered at zero so every series is exported
/// before the first game is recorded.
pub fn init_metrics() {
    describe_counter!(
        METRIC_RESULTS_RECORDED,
        "Total number of game results recorded, by winner"
    );
    describe_counter!(
        METRIC_RESULTS_IGNORED,
        "Total number of update requests without a recognized winner"
    );
    describe_histogram!(
        METRIC_HTTP_REQUEST_LATENCY,
        "HTTP request latency in milliseconds"
    );

    for winner in Winner::ALL {
        counter!(METRIC_RESULTS_RECORDED, "winner" => winner.to_string()).absolute(0);
    }

    debug!("Metrics initialized");
}

/// Increment the recorded results counter for `winner`.
pub fn inc_results_recorded(winner: Winner) {
    counter!(METRIC_RESULTS_RECORDED, "winner" => winner.to_string()).increment(1);
}

/// Increment the ignored results counter.
pub fn inc_results_ignored() {
    counter!(METRIC_RESULTS_IGNORED).increment(1);
}

/// Record HTTP request latency.
pub fn record_http_latency(latency_ms: f64, endpoint: &'static str) {
    histogram!(METRIC_HTTP_REQUEST_LATENCY, "endpoint" => endpoint).record(latency_ms);
}

/// RAII guard for timing a request handler.
/// Records latency for its endpoint when dropped.
pub struct LatencyTimer {
    start: Instant,
    endpoint: &'static str,
}

impl LatencyTimer {
    /// Start timing `endpoint`.
    pub fn new(endpoint: &'static str) -> Self {
        Self {
            start: Instant::now(),
            endpoint,
        }
    }

    /// Get elapsed time in milliseconds (without recording).
    pub fn elapsed_ms(&self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1000.0
    }
}

impl Drop for LatencyTimer {
    fn drop(&mut self) {
        record_http_latency(self.elapsed_ms(), self.endpoint);
    }
}
