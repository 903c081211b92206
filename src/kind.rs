//! Display tags for decoded records.
//!
//! [`KindVisitor`] is the reference "second consumer": the binary combines
//! it with [`LogFormatter`](crate::formatter::LogFormatter) via
//! [`combine_with`](crate::visitor::LogVisitor::combine_with) so one decode
//! yields a `(text, kind)` pair, and the host can filter or style lines by
//! kind without re-parsing.

use owo_colors::Style;

use crate::records::{EventLog, LogLevel, MetricLog, RequestLog, ServiceLog, TraceLog};
use crate::visitor::LogVisitor;

/// Which family of structured record a line decoded into, or [`Plain`](Self::Plain)
/// for pass-through text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Service(LogLevel),
    Request,
    Event,
    Metric,
    Trace,
    Plain,
}

impl RecordKind {
    /// Terminal style for this kind when colors are enabled.
    ///
    /// Service lines are styled by severity; metric lines are dimmed so they
    /// fade behind application output; everything else stays plain.
    pub const fn style(self) -> Style {
        match self {
            Self::Service(LogLevel::Fatal | LogLevel::Error) => Style::new().red(),
            Self::Service(LogLevel::Warn) => Style::new().yellow(),
            Self::Service(LogLevel::Debug | LogLevel::Trace) => Style::new().cyan(),
            Self::Metric => Style::new().bright_black(),
            Self::Service(LogLevel::Info)
            | Self::Request
            | Self::Event
            | Self::Trace
            | Self::Plain => Style::new(),
        }
    }
}

/// Maps every renderable variant to its [`RecordKind`].
///
/// Audit and diagnostic records are left to the default empty result, the
/// same surface the formatting visitor covers.
#[derive(Debug, Clone, Copy, Default)]
pub struct KindVisitor;

impl LogVisitor for KindVisitor {
    type Output = RecordKind;

    fn service_v1(&self, record: &ServiceLog) -> Option<RecordKind> {
        Some(RecordKind::Service(record.level))
    }

    fn request_v2(&self, _record: &RequestLog) -> Option<RecordKind> {
        Some(RecordKind::Request)
    }

    fn event_v2(&self, _record: &EventLog) -> Option<RecordKind> {
        Some(RecordKind::Event)
    }

    fn metric_v1(&self, _record: &MetricLog) -> Option<RecordKind> {
        Some(RecordKind::Metric)
    }

    fn trace_v1(&self, _record: &TraceLog) -> Option<RecordKind> {
        Some(RecordKind::Trace)
    }
}
