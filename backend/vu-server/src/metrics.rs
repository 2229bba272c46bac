use std::time::Duration;

use metrics::{counter, histogram};

/// Counters and histograms for lookups, verifications and gate decisions.
///
/// Recording is a no-op until a recorder is installed.
#[derive(Clone)]
pub struct Metrics {
    prefix: &'static str,
}

impl Metrics {
    pub fn new() -> Self {
        Self { prefix: "vu" }
    }

    /// `kind` is ign / uuid / discord, `outcome` ok / failed
    pub fn lookup(&self, kind: &str, outcome: &str) {
        counter!(format!("{}.lookups.total", self.prefix)).increment(1);
        counter!(format!("{}.lookups.{}.{}", self.prefix, kind, outcome)).increment(1);
    }

    /// `outcome` is linked / rejected / failed
    pub fn verification(&self, outcome: &str) {
        counter!(format!("{}.verifications.total", self.prefix)).increment(1);
        counter!(format!("{}.verifications.{}", self.prefix, outcome)).increment(1);
    }

    pub fn gate_rejected(&self, gate: &str) {
        counter!(format!("{}.gate.rejected.{}", self.prefix, gate)).increment(1);
    }

    pub fn upstream_error(&self, provider: &str) {
        counter!(format!("{}.upstream.errors.{}", self.prefix, provider)).increment(1);
    }

    pub fn request_latency(&self, duration: Duration) {
        histogram!(format!("{}.requests.latency_ms", self.prefix))
            .record(duration.as_millis() as f64);
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}
