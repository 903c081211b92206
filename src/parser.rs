//! Line classification and decoding.
//!
//! A structured record is exactly one JSON object occupying an entire line.
//! [`may_contain_record`] gives a cheap answer for whole blocks of console
//! text so callers can skip per-line work in the common all-plain-text case;
//! [`LogParser::try_parse`] does the anchored match, decodes the line into
//! the schema named by its discriminator, and dispatches the record into the
//! caller-supplied visitor. Every failure past the pattern match degrades to
//! `None` — a malformed or evolving record format never breaks the stream.

use std::sync::LazyLock;

use regex::Regex;
use serde::de::DeserializeOwned;

use crate::records::{WrappedLog, WrappedPayload};
use crate::visitor::LogVisitor;

const SERVICE_V1: &str = "service.1";
const REQUEST_V2: &str = "request.2";
const EVENT_V2: &str = "event.2";
const METRIC_V1: &str = "metric.1";
const TRACE_V1: &str = "trace.1";
const AUDIT_V2: &str = "audit.2";
const DIAGNOSTIC_V1: &str = "diagnostic.1";
const WRAPPED_V1: &str = "wrapped.1";

/// The discriminator alphabet, single source of truth for both the fast-path
/// pattern and the dispatch table below. An unsupported version of a known
/// name (`metric.5`) is outside the alphabet and fails the fast path.
pub const LOG_TYPES: [&str; 8] = [
    SERVICE_V1,
    REQUEST_V2,
    EVENT_V2,
    METRIC_V1,
    TRACE_V1,
    AUDIT_V2,
    DIAGNOSTIC_V1,
    WRAPPED_V1,
];

fn record_pattern() -> String {
    let alternation = LOG_TYPES.map(|log_type| regex::escape(log_type)).join("|");
    // `.` does not match `\n`, so a candidate broken across lines never
    // matches: records are defined to contain no literal newline.
    format!(r#"\{{.*?"type"\s*?:\s*?"({alternation})".*?\}}"#)
}

static SEARCH_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&record_pattern()).expect("record pattern is valid"));

static LINE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!("^{}$", record_pattern())).expect("record pattern is valid")
});

/// Cheap membership test: could this block of text contain a structured
/// record anywhere? False-negative-free with respect to [`LogParser::try_parse`].
pub fn may_contain_record(text: &str) -> bool {
    SEARCH_PATTERN.is_match(text)
}

/// Classifies and decodes single lines, dispatching decoded records into a
/// caller-supplied visitor. Construction is cheap; the compiled patterns are
/// process-wide statics.
pub struct LogParser<V> {
    visitor: V,
}

impl<V: LogVisitor> LogParser<V> {
    pub fn new(visitor: V) -> Self {
        Self { visitor }
    }

    /// Decode a full line and dispatch it, returning whatever the visitor
    /// produced. `None` means "treat this line as plain text": the line did
    /// not match, failed to decode, or the visitor had no interest in it.
    pub fn try_parse(&self, line: &str) -> Option<V::Output> {
        let captures = LINE_PATTERN.captures(line)?;
        let log_type = captures.get(1)?.as_str();

        match log_type {
            SERVICE_V1 => decode(line, "ServiceLog").and_then(|r| self.visitor.service_v1(&r)),
            REQUEST_V2 => decode(line, "RequestLog").and_then(|r| self.visitor.request_v2(&r)),
            EVENT_V2 => decode(line, "EventLog").and_then(|r| self.visitor.event_v2(&r)),
            METRIC_V1 => decode(line, "MetricLog").and_then(|r| self.visitor.metric_v1(&r)),
            TRACE_V1 => decode(line, "TraceLog").and_then(|r| self.visitor.trace_v1(&r)),
            AUDIT_V2 => decode(line, "AuditLog").and_then(|r| self.visitor.audit_v2(&r)),
            DIAGNOSTIC_V1 => {
                decode(line, "DiagnosticLog").and_then(|r| self.visitor.diagnostic_v1(&r))
            }
            WRAPPED_V1 => decode::<WrappedLog>(line, "WrappedLog")
                .and_then(|wrapped| self.dispatch_payload(&wrapped.payload)),
            _ => None,
        }
    }

    /// The wrapper is transparent: its payload dispatches into the same
    /// visitor, recursing through nested envelopes.
    fn dispatch_payload(&self, payload: &WrappedPayload) -> Option<V::Output> {
        match payload {
            WrappedPayload::ServiceV1 { log } => self.visitor.service_v1(log),
            WrappedPayload::RequestV2 { log } => self.visitor.request_v2(log),
            WrappedPayload::EventV2 { log } => self.visitor.event_v2(log),
            WrappedPayload::MetricV1 { log } => self.visitor.metric_v1(log),
            WrappedPayload::TraceV1 { log } => self.visitor.trace_v1(log),
            WrappedPayload::AuditV2 { log } => self.visitor.audit_v2(log),
            WrappedPayload::DiagnosticV1 { log } => self.visitor.diagnostic_v1(log),
            WrappedPayload::WrappedV1 { log } => self.dispatch_payload(&log.payload),
            WrappedPayload::Unknown => None,
        }
    }
}

/// Tolerant decode: unknown fields are ignored; structural or type errors
/// are reported to the diagnostic channel and degrade to `None`.
fn decode<L: DeserializeOwned>(line: &str, schema: &str) -> Option<L> {
    match serde_json::from_str(line) {
        Ok(record) => Some(record),
        Err(error) => {
            tracing::warn!(%error, schema, line, "failed to decode structured record");
            None
        }
    }
}
