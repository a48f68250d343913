//! Counters for section extraction runs
//!
//! Only the extraction driver records here; context selection and token
//! merging stay free of side effects.

use once_cell::sync::Lazy;
use prometheus::{
    register_counter_vec_with_registry, register_counter_with_registry,
    register_histogram_with_registry, Counter, CounterVec, Histogram, Opts, Registry,
};
use std::sync::Arc;
use std::time::Duration;

/// Global metrics registry
pub static METRICS: Lazy<Arc<Metrics>> =
    Lazy::new(|| Arc::new(Metrics::new().expect("Failed to initialize metrics")));

/// Metrics collector
pub struct Metrics {
    registry: Registry,

    /// Extraction calls by outcome (`success` / `error`)
    pub section_requests: CounterVec,
    /// Sections dropped because the per-run cap was reached
    pub sections_discarded: Counter,
    pub extraction_duration: Histogram,
}

impl Metrics {
    /// Create a new metrics collector with its own registry
    pub fn new() -> Result<Self, prometheus::Error> {
        let registry = Registry::new();

        let section_requests = register_counter_vec_with_registry!(
            Opts::new(
                "design_section_requests_total",
                "Section extraction calls by outcome"
            ),
            &["status"],
            registry
        )?;

        let sections_discarded = register_counter_with_registry!(
            Opts::new(
                "design_sections_discarded_total",
                "Sections skipped because the per-run cap was reached"
            ),
            registry
        )?;

        let extraction_duration = register_histogram_with_registry!(
            "design_extraction_duration_seconds",
            "Duration of a single section extraction call",
            registry
        )?;

        Ok(Self {
            registry,
            section_requests,
            sections_discarded,
            extraction_duration,
        })
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Record the outcome and duration of one extraction call
    pub fn record_section(&self, success: bool, elapsed: Duration) {
        let status = if success { "success" } else { "error" };
        self.section_requests.with_label_values(&[status]).inc();
        self.extraction_duration.observe(elapsed.as_secs_f64());
    }

    pub fn record_discarded(&self, count: usize) {
        self.sections_discarded.inc_by(count as f64);
    }

    /// Export this registry in Prometheus text format
    pub fn gather_text(&self) -> String {
        use prometheus::Encoder;

        let encoder = prometheus::TextEncoder::new();
        let metric_families = self.registry.gather();

        let mut buffer = Vec::new();
        if encoder.encode(&metric_families, &mut buffer).is_err() {
            return String::new();
        }

        String::from_utf8(buffer).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_initialization() {
        assert!(Metrics::new().is_ok());
    }

    #[test]
    fn test_record_section_outcomes() {
        let metrics = Metrics::new().unwrap();
        metrics.record_section(true, Duration::from_millis(120));
        metrics.record_section(false, Duration::from_millis(30));
        metrics.record_section(false, Duration::from_millis(30));

        assert_eq!(
            metrics.section_requests.with_label_values(&["success"]).get(),
            1.0
        );
        assert_eq!(
            metrics.section_requests.with_label_values(&["error"]).get(),
            2.0
        );
        assert_eq!(metrics.extraction_duration.get_sample_count(), 3);
    }

    #[test]
    fn test_gather_text_contains_counters() {
        let metrics = Metrics::new().unwrap();
        metrics.record_discarded(2);
        let text = metrics.gather_text();
        assert!(text.contains("design_sections_discarded_total 2"));
    }
}
