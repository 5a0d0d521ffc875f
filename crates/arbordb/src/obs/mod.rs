//! Observability: runtime telemetry (metrics) and sink abstractions.
//!
//! This module does not access storage internals directly; the store
//! reports what it did through `MetricsEvent`s.

pub(crate) mod metrics;
pub(crate) mod sink;

// re-exports
pub use metrics::{EntityCounters, EventOps, EventState};
pub use sink::{
    ExecKind, MetricsEvent, MetricsSink, metrics_reset_all, metrics_snapshot, with_metrics_sink,
};
