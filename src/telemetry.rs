//! Telemetry and observability utilities
//!
//! Each [`Client`](crate::Client) owns its own [`Metrics`], registered on a
//! meter named after its [`TelemetryConfig::service_name`].

#[cfg(feature = "metrics")]
use opentelemetry::{
    metrics::{Counter, Histogram},
    KeyValue,
};

/// Telemetry configuration
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    /// Whether telemetry is enabled
    pub enabled: bool,
    /// Service name for metrics
    pub service_name: String,
    /// Service version for metrics
    pub service_version: String,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            service_name: "tiktok-shop-sdk".to_string(),
            service_version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// SDK metrics collector
#[derive(Clone)]
#[cfg_attr(not(feature = "metrics"), allow(dead_code))]
pub struct Metrics {
    service_name: String,

    #[cfg(feature = "metrics")]
    pub(crate) requests_total: Counter<u64>,

    #[cfg(feature = "metrics")]
    pub(crate) request_duration: Histogram<f64>,

    #[cfg(feature = "metrics")]
    pub(crate) errors_total: Counter<u64>,
}

impl Metrics {
    /// Create new metrics instance
    #[cfg(feature = "metrics")]
    pub fn new(config: &TelemetryConfig) -> Self {
        use opentelemetry::global;

        let meter = global::meter(config.service_name.clone());

        let requests_total = meter
            .u64_counter("tiktok_shop_sdk.requests_total")
            .with_description("Total number of requests made")
            .init();

        let request_duration = meter
            .f64_histogram("tiktok_shop_sdk.request_duration_seconds")
            .with_description("Request duration in seconds")
            .init();

        let errors_total = meter
            .u64_counter("tiktok_shop_sdk.errors_total")
            .with_description("Total number of failed requests")
            .init();

        Self {
            service_name: config.service_name.clone(),
            requests_total,
            request_duration,
            errors_total,
        }
    }

    /// Create a no-op metrics instance when feature is disabled
    #[cfg(not(feature = "metrics"))]
    #[allow(dead_code)]
    pub fn new(config: &TelemetryConfig) -> Self {
        Self {
            service_name: config.service_name.clone(),
        }
    }

    /// Name of the meter these instruments are registered on
    #[allow(dead_code)]
    pub fn service_name(&self) -> &str {
        &self.service_name
    }

    /// Record a completed request
    #[cfg(feature = "metrics")]
    pub fn record_request(&self, operation: &str, status: u16, duration_secs: f64) {
        let labels = &[
            KeyValue::new("operation", operation.to_string()),
            KeyValue::new("status", status.to_string()),
        ];

        self.requests_total.add(1, labels);
        self.request_duration.record(duration_secs, labels);
    }

    /// Record a completed request (no-op when metrics disabled)
    #[cfg(not(feature = "metrics"))]
    #[allow(dead_code)]
    pub fn record_request(&self, _operation: &str, _status: u16, _duration_secs: f64) {}

    /// Record a failed request by error kind
    #[cfg(feature = "metrics")]
    pub fn record_error(&self, operation: &str, kind: &crate::ErrorKind) {
        self.errors_total.add(
            1,
            &[
                KeyValue::new("operation", operation.to_string()),
                KeyValue::new("kind", format!("{:?}", kind)),
            ],
        );
    }

    /// Record a failed request (no-op)
    #[cfg(not(feature = "metrics"))]
    #[allow(dead_code)]
    pub fn record_error(&self, _operation: &str, _kind: &crate::ErrorKind) {}
}

impl std::fmt::Debug for Metrics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Metrics")
            .field("service_name", &self.service_name)
            .field("enabled", &cfg!(feature = "metrics"))
            .finish()
    }
}
