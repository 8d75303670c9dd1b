//! Prometheus metrics collection for chatrelay
//!
//! Tracks completion calls per component and outcome, plus call latency.
//! Metrics are exposed via the `/metrics` endpoint in Prometheus text format.

use prometheus::{Encoder, HistogramOpts, HistogramVec, IntCounterVec, Opts, Registry, TextEncoder};
use std::sync::Arc;

/// Which component made a completion call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Component {
    /// In-process `CompletionClient`
    Client,
    /// `POST /api/chat-completion`
    Endpoint,
}

impl Component {
    /// Convert component to Prometheus label string
    pub fn as_str(&self) -> &'static str {
        match self {
            Component::Client => "client",
            Component::Endpoint => "endpoint",
        }
    }
}

/// How a completion call ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    Error,
}

impl Outcome {
    /// Convert outcome to Prometheus label string
    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Success => "success",
            Outcome::Error => "error",
        }
    }
}

/// Metrics collector for chatrelay
#[derive(Clone)]
pub struct Metrics {
    pub registry: Arc<Registry>,
    completions_total: IntCounterVec,
    completion_duration: HistogramVec,
}

impl Metrics {
    /// Create a new Metrics instance
    ///
    /// Registers all metrics with a new Prometheus registry.
    ///
    /// # Errors
    ///
    /// Returns an error if metric registration fails (e.g., duplicate names).
    pub fn new() -> Result<Self, prometheus::Error> {
        let registry = Registry::new();

        // Cardinality: 2 components × 2 outcomes = 4 time series
        let completions_total = IntCounterVec::new(
            Opts::new(
                "chatrelay_completions_total",
                "Total number of chat completion calls by component and outcome",
            ),
            &["component", "outcome"],
        )?;

        let completion_duration = HistogramVec::new(
            HistogramOpts::new(
                "chatrelay_completion_duration_ms",
                "Chat completion call latency in milliseconds",
            )
            .buckets(vec![
                50.0, 100.0, 250.0, 500.0, 1000.0, 2500.0, 5000.0, 10000.0, 30000.0, 60000.0,
            ]),
            &["component"],
        )?;

        registry.register(Box::new(completions_total.clone()))?;
        registry.register(Box::new(completion_duration.clone()))?;

        Ok(Self {
            registry: Arc::new(registry),
            completions_total,
            completion_duration,
        })
    }

    /// Record one finished completion call
    ///
    /// # Errors
    ///
    /// Returns an error if `duration_ms` is NaN, infinite, or negative, or if
    /// the metric is not registered.
    pub fn record_completion(
        &self,
        component: Component,
        outcome: Outcome,
        duration_ms: f64,
    ) -> Result<(), prometheus::Error> {
        if !duration_ms.is_finite() || duration_ms < 0.0 {
            return Err(prometheus::Error::Msg(format!(
                "Histogram value must be finite and non-negative, got: {}",
                duration_ms
            )));
        }

        self.completions_total
            .get_metric_with_label_values(&[component.as_str(), outcome.as_str()])?
            .inc();
        self.completion_duration
            .get_metric_with_label_values(&[component.as_str()])?
            .observe(duration_ms);
        Ok(())
    }

    /// Current count for one component/outcome pair
    pub fn completions_count(&self, component: Component, outcome: Outcome) -> u64 {
        self.completions_total
            .with_label_values(&[component.as_str(), outcome.as_str()])
            .get()
    }

    /// Gather all metrics in Prometheus text format
    ///
    /// # Errors
    ///
    /// Returns an error if metric encoding fails.
    pub fn gather(&self) -> Result<String, prometheus::Error> {
        let metric_families = self.registry.gather();

        let mut buffer = Vec::new();
        let encoder = TextEncoder::new();
        encoder.encode(&metric_families, &mut buffer).map_err(|e| {
            tracing::error!(
                error = %e,
                metric_family_count = metric_families.len(),
                "Prometheus text encoder failed"
            );
            e
        })?;

        String::from_utf8(buffer).map_err(|e| {
            prometheus::Error::Msg(format!(
                "Prometheus encoder produced invalid UTF-8 at byte {}",
                e.utf8_error().valid_up_to()
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_new_registers_families() {
        let metrics = Metrics::new().expect("Failed to create metrics");
        metrics
            .record_completion(Component::Client, Outcome::Success, 12.0)
            .expect("Test operation should succeed");

        let names: Vec<String> = metrics
            .registry
            .gather()
            .iter()
            .map(|m| m.name().to_string())
            .collect();
        assert!(names.contains(&"chatrelay_completions_total".to_string()));
        assert!(names.contains(&"chatrelay_completion_duration_ms".to_string()));
    }

    #[test]
    fn test_record_completion_increments_counter() {
        let metrics = Metrics::new().expect("Failed to create test metrics");

        metrics
            .record_completion(Component::Endpoint, Outcome::Error, 5.0)
            .unwrap();
        metrics
            .record_completion(Component::Endpoint, Outcome::Error, 7.0)
            .unwrap();

        assert_eq!(metrics.completions_count(Component::Endpoint, Outcome::Error), 2);
        assert_eq!(metrics.completions_count(Component::Endpoint, Outcome::Success), 0);
        assert_eq!(metrics.completions_count(Component::Client, Outcome::Error), 0);
    }

    #[test]
    fn test_histogram_rejects_invalid_durations() {
        let metrics = Metrics::new().expect("Failed to create test metrics");

        for value in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY, -1.0] {
            assert!(
                metrics
                    .record_completion(Component::Client, Outcome::Success, value)
                    .is_err(),
                "{} should be rejected",
                value
            );
        }
        assert_eq!(metrics.completions_count(Component::Client, Outcome::Success), 0);
    }

    #[test]
    fn test_gather_produces_prometheus_text_format() {
        let metrics = Metrics::new().expect("Failed to create test metrics");
        metrics
            .record_completion(Component::Client, Outcome::Success, 100.0)
            .unwrap();

        let output = metrics.gather().expect("Failed to gather test metrics");
        assert!(output.contains("# HELP chatrelay_completions_total"));
        assert!(output.contains("component=\"client\""));
        assert!(output.contains("outcome=\"success\""));
    }

    #[test]
    fn test_concurrent_metric_recording() {
        use std::thread;

        let metrics = Arc::new(Metrics::new().expect("Failed to create test metrics"));
        let handles: Vec<_> = (0..10)
            .map(|i| {
                let m = Arc::clone(&metrics);
                thread::spawn(move || {
                    m.record_completion(Component::Endpoint, Outcome::Success, i as f64)
                        .expect("Test operation should succeed");
                })
            })
            .collect();

        for handle in handles {
            handle.join().expect("Test operation should succeed");
        }

        assert_eq!(
            metrics.completions_count(Component::Endpoint, Outcome::Success),
            10
        );
    }
}
