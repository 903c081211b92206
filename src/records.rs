//! The closed set of structured record variants and their wire schemas.
//!
//! Each record is one JSON object on a single line, discriminated by a
//! `"type"` field of the form `name.version` (e.g. `service.1`). Decoding is
//! deliberately tolerant: unknown fields are ignored and absent optional
//! fields deserialize as empty, so a record produced by a newer emitter still
//! decodes as long as its required fields are intact.

use std::fmt;

use serde::Deserialize;

/// Named parameter mapping attached to most record variants.
///
/// `serde_json`'s `preserve_order` feature keeps wire insertion order, which
/// the renderers rely on for deterministic output.
pub type Params = serde_json::Map<String, serde_json::Value>;

/// Severity of a [`ServiceLog`] record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogLevel {
    Fatal,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// Uppercase wire name, also used for display.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Fatal => "FATAL",
            Self::Error => "ERROR",
            Self::Warn => "WARN",
            Self::Info => "INFO",
            Self::Debug => "DEBUG",
            Self::Trace => "TRACE",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Application log line (`service.1`).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceLog {
    pub level: LogLevel,
    pub time: jiff::Timestamp,
    #[serde(default)]
    pub origin: Option<String>,
    #[serde(default)]
    pub thread: Option<String>,
    /// Message template; may contain `{}` placeholders substituted from
    /// numeric-string keys in [`unsafe_params`](Self::unsafe_params).
    pub message: String,
    #[serde(default)]
    pub params: Params,
    #[serde(default)]
    pub unsafe_params: Params,
    #[serde(default)]
    pub tags: Params,
    #[serde(default)]
    pub stacktrace: Option<String>,
}

/// HTTP request log line (`request.2`).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestLog {
    pub time: jiff::Timestamp,
    #[serde(default)]
    pub method: Option<String>,
    pub protocol: String,
    /// Path template; `{name}` tokens are substituted from `params`, falling
    /// back to `unsafe_params`.
    pub path: String,
    #[serde(default)]
    pub params: Params,
    pub status: u16,
    #[serde(default)]
    pub request_size: u64,
    pub response_size: u64,
    /// Request duration in milliseconds.
    pub duration: u64,
    #[serde(default)]
    pub trace_id: Option<String>,
    #[serde(default)]
    pub unsafe_params: Params,
}

/// Application event log line (`event.2`).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventLog {
    pub time: jiff::Timestamp,
    pub event_name: String,
    #[serde(default)]
    pub values: Params,
    #[serde(default)]
    pub tags: Params,
    #[serde(default)]
    pub unsafe_params: Params,
}

/// Metric sample log line (`metric.1`).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricLog {
    pub time: jiff::Timestamp,
    pub metric_name: String,
    pub metric_type: String,
    #[serde(default)]
    pub values: Params,
    #[serde(default)]
    pub tags: Params,
    #[serde(default)]
    pub unsafe_params: Params,
}

/// Distributed-tracing span log line (`trace.1`).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TraceLog {
    pub time: jiff::Timestamp,
    pub span: Span,
    #[serde(default)]
    pub unsafe_params: Params,
}

/// Span payload of a [`TraceLog`].
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Span {
    pub trace_id: String,
    pub id: String,
    pub name: String,
    /// Span start, epoch microseconds.
    #[serde(default)]
    pub timestamp: u64,
    /// Span duration in microseconds.
    pub duration: u64,
    /// Decoded but never rendered.
    #[serde(default)]
    pub annotations: Vec<Annotation>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Annotation {
    #[serde(default)]
    pub timestamp: u64,
    pub value: String,
    #[serde(default)]
    pub endpoint: Option<Endpoint>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Endpoint {
    pub service_name: String,
    #[serde(default)]
    pub ipv4: Option<String>,
    #[serde(default)]
    pub ipv6: Option<String>,
}

/// Audit log line (`audit.2`). Decoded and dispatched like the other
/// variants but has no built-in renderer.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditLog {
    pub time: jiff::Timestamp,
    pub name: String,
    pub result: String,
    #[serde(default)]
    pub unsafe_params: Params,
}

/// Diagnostic log line (`diagnostic.1`). Decoded and dispatched like the
/// other variants but has no built-in renderer.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagnosticLog {
    pub time: jiff::Timestamp,
    /// Opaque diagnostic payload, preserved as raw JSON.
    pub diagnostic: serde_json::Value,
    #[serde(default)]
    pub unsafe_params: Params,
}

/// Envelope record (`wrapped.1`) carrying any other record as its payload.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WrappedLog {
    pub entity_name: String,
    pub entity_version: String,
    pub payload: WrappedPayload,
}

/// Tagged union payload of a [`WrappedLog`].
///
/// On the wire the content sits under a field named identically to the tag:
/// `{"type":"serviceLogV1","serviceLogV1":{...}}`. Unrecognized tags decode
/// as [`Unknown`](Self::Unknown) so a newer emitter never breaks decoding of
/// the envelope itself.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type")]
pub enum WrappedPayload {
    #[serde(rename = "serviceLogV1")]
    ServiceV1 {
        #[serde(rename = "serviceLogV1")]
        log: ServiceLog,
    },
    #[serde(rename = "requestLogV2")]
    RequestV2 {
        #[serde(rename = "requestLogV2")]
        log: RequestLog,
    },
    #[serde(rename = "eventLogV2")]
    EventV2 {
        #[serde(rename = "eventLogV2")]
        log: EventLog,
    },
    #[serde(rename = "metricLogV1")]
    MetricV1 {
        #[serde(rename = "metricLogV1")]
        log: MetricLog,
    },
    #[serde(rename = "traceLogV1")]
    TraceV1 {
        #[serde(rename = "traceLogV1")]
        log: TraceLog,
    },
    #[serde(rename = "auditLogV2")]
    AuditV2 {
        #[serde(rename = "auditLogV2")]
        log: AuditLog,
    },
    #[serde(rename = "diagnosticLogV1")]
    DiagnosticV1 {
        #[serde(rename = "diagnosticLogV1")]
        log: DiagnosticLog,
    },
    #[serde(rename = "wrappedLogV1")]
    WrappedV1 {
        #[serde(rename = "wrappedLogV1")]
        log: Box<WrappedLog>,
    },
    #[serde(other)]
    Unknown,
}
