//! Per-call request metrics.
//!
//! Every call owns a fresh [`RequestMetrics`] on its own stack; the finished
//! value is handed to the client's [`MetricsCollector`].

use std::collections::BTreeMap;
use std::fmt;
use std::time::{Duration, Instant};

/// Timed phases of a call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    ClientExecuteTime,
    RequestMarshallTime,
    CredentialsRequestTime,
    RequestSigningTime,
    HttpRequestTime,
    ResponseProcessingTime,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::ClientExecuteTime => "ClientExecuteTime",
            Self::RequestMarshallTime => "RequestMarshallTime",
            Self::CredentialsRequestTime => "CredentialsRequestTime",
            Self::RequestSigningTime => "RequestSigningTime",
            Self::HttpRequestTime => "HttpRequestTime",
            Self::ResponseProcessingTime => "ResponseProcessingTime",
        };
        f.write_str(name)
    }
}

/// Timings and outcome of one call.
#[derive(Debug, Clone)]
pub struct RequestMetrics {
    pub service: &'static str,
    pub operation: &'static str,
    pub invocation_id: String,
    pub status_code: Option<u16>,
    /// Error code of a failed call.
    pub error_code: Option<String>,
    started: BTreeMap<Field, Instant>,
    timings: BTreeMap<Field, Duration>,
}

impl RequestMetrics {
    pub fn new(service: &'static str, operation: &'static str) -> Self {
        Self {
            service,
            operation,
            invocation_id: uuid::Uuid::new_v4().to_string(),
            status_code: None,
            error_code: None,
            started: BTreeMap::new(),
            timings: BTreeMap::new(),
        }
    }

    pub fn start_event(&mut self, field: Field) {
        self.started.insert(field, Instant::now());
    }

    /// Close a started event. Ending an event that never started is a no-op.
    pub fn end_event(&mut self, field: Field) {
        if let Some(start) = self.started.remove(&field) {
            self.timings.insert(field, start.elapsed());
        }
    }

    /// Run `f` as the given event.
    pub fn time<T>(&mut self, field: Field, f: impl FnOnce() -> T) -> T {
        self.start_event(field);
        let out = f();
        self.end_event(field);
        out
    }

    pub fn timing(&self, field: Field) -> Option<Duration> {
        self.timings.get(&field).copied()
    }

    pub fn timings(&self) -> impl Iterator<Item = (Field, Duration)> + '_ {
        self.timings.iter().map(|(f, d)| (*f, *d))
    }
}

/// Receives the metrics of every finished call.
pub trait MetricsCollector: Send + Sync + fmt::Debug {
    fn collect(&self, metrics: &RequestMetrics);
}

/// Drops everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopMetricsCollector;

impl MetricsCollector for NoopMetricsCollector {
    fn collect(&self, _metrics: &RequestMetrics) {}
}

/// Logs per-field timings at debug level.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingMetricsCollector;

impl MetricsCollector for LoggingMetricsCollector {
    fn collect(&self, metrics: &RequestMetrics) {
        let fields = metrics
            .timings()
            .map(|(f, d)| format!("{}={}ms", f, d.as_millis()))
            .collect::<Vec<_>>()
            .join(" ");
        log::debug!(
            "{}.{} [{}] status={:?} {}",
            metrics.service,
            metrics.operation,
            metrics.invocation_id,
            metrics.status_code,
            fields
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn time_records_field() {
        let mut m = RequestMetrics::new("ecs", "ListClusters");
        let v = m.time(Field::RequestMarshallTime, || 7);
        assert_eq!(v, 7);
        assert!(m.timing(Field::RequestMarshallTime).is_some());
        assert!(m.timing(Field::HttpRequestTime).is_none());
    }

    #[test]
    fn end_without_start_is_noop() {
        let mut m = RequestMetrics::new("ecs", "ListClusters");
        m.end_event(Field::ClientExecuteTime);
        assert_eq!(m.timings().count(), 0);
    }

    #[test]
    fn invocation_ids_unique() {
        let a = RequestMetrics::new("ecs", "A");
        let b = RequestMetrics::new("ecs", "A");
        assert_ne!(a.invocation_id, b.invocation_id);
    }

    #[test]
    fn logging_collector_accepts_partial_timings() {
        let mut m = RequestMetrics::new("quicksight", "ListUsers");
        m.time(Field::HttpRequestTime, || ());
        m.status_code = Some(200);
        LoggingMetricsCollector.collect(&m);
        assert_eq!(m.timings().count(), 1);
    }

    #[test]
    fn field_display() {
        assert_eq!(Field::CredentialsRequestTime.to_string(), "CredentialsRequestTime");
    }
}
