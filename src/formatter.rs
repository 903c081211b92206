//! Per-variant renderers producing the canonical human-readable text form.
//!
//! Each renderer is a pure `record → String` function over the shared
//! scratch buffer. [`LogFormatter`] bundles them into a visitor so a parser
//! can turn matching lines directly into rendered text; audit and diagnostic
//! records have no built-in rendering and fall through to the default empty
//! result.

use std::fmt::Write;
use std::sync::LazyLock;

use regex::Regex;

use crate::formatting;
use crate::records::{EventLog, MetricLog, RequestLog, ServiceLog, TraceLog};
use crate::visitor::LogVisitor;

/// The reference rendering visitor.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogFormatter;

impl LogVisitor for LogFormatter {
    type Output = String;

    fn service_v1(&self, record: &ServiceLog) -> Option<String> {
        Some(format_service(record))
    }

    fn request_v2(&self, record: &RequestLog) -> Option<String> {
        Some(format_request(record))
    }

    fn event_v2(&self, record: &EventLog) -> Option<String> {
        Some(format_event(record))
    }

    fn metric_v1(&self, record: &MetricLog) -> Option<String> {
        Some(format_metric(record))
    }

    fn trace_v1(&self, record: &TraceLog) -> Option<String> {
        Some(format_trace(record))
    }
}

/// `LEVEL [time] origin: message (params)` plus an optional trailing
/// stack trace on its own line.
pub fn format_service(service: &ServiceLog) -> String {
    formatting::with_scratch_buffer(|buffer| {
        buffer.push_str(service.level.name());
        while buffer.len() < 6 {
            buffer.push(' ');
        }
        buffer.push('[');
        formatting::format_instant(&service.time, buffer);
        buffer.push_str("] ");
        buffer.push_str(service.origin.as_deref().unwrap_or("<nil>"));
        buffer.push_str(": ");
        render_message(service, buffer);
        if !service.params.is_empty() || !service.unsafe_params.is_empty() {
            buffer.push_str(" (");
            formatting::format_params_to(&service.params, buffer);
            formatting::format_params_to(&service.unsafe_params, buffer);
            // Reset trailing separator
            buffer.truncate(buffer.len() - 2);
            buffer.push(')');
        }
        if let Some(stacktrace) = service.stacktrace.as_deref() {
            let trimmed = formatting::trim_newlines(stacktrace);
            if !trimmed.is_empty() {
                buffer.push('\n');
                buffer.push_str(trimmed);
            }
        }
    })
}

/// slf4j-style interpolation: `{}` tokens are replaced left-to-right with
/// unsafe params keyed `"0"`, `"1"`, …; a missing index keeps the literal
/// token so partially-annotated messages degrade gracefully. `\{}` is an
/// escaped literal placeholder and `\\{}` a literal backslash followed by a
/// live one, as in slf4j's `MessageFormatter`.
fn render_message(service: &ServiceLog, buffer: &mut String) {
    let template = service.message.as_str();
    if !template.contains("{}") {
        buffer.push_str(template);
        return;
    }
    let mut index = 0_usize;
    let mut rest = template;
    while let Some(position) = rest.find("{}") {
        let leading = &rest[..position];
        rest = &rest[position + 2..];
        if leading.ends_with("\\\\") {
            // Escaped escape: one literal backslash, then a live placeholder.
            buffer.push_str(&leading[..leading.len() - 1]);
        } else if leading.ends_with('\\') {
            // Escaped placeholder stays literal and consumes no argument.
            buffer.push_str(&leading[..leading.len() - 1]);
            buffer.push_str("{}");
            continue;
        } else {
            buffer.push_str(leading);
        }
        match service.unsafe_params.get(index.to_string().as_str()) {
            Some(value) => formatting::safe_string(value, buffer),
            None => buffer.push_str("{}"),
        }
        index += 1;
    }
    buffer.push_str(rest);
}

static PATH_PARAMETER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{(\S+?)\}").expect("path parameter pattern is valid"));

/// `[time] "METHOD path protocol" status response_size duration`.
pub fn format_request(request: &RequestLog) -> String {
    formatting::with_scratch_buffer(|buffer| {
        buffer.push('[');
        formatting::format_instant(&request.time, buffer);
        buffer.push_str("] \"");
        if let Some(method) = request.method.as_deref() {
            buffer.push_str(method);
            buffer.push(' ');
        }
        render_path(request, buffer);
        buffer.push(' ');
        buffer.push_str(&request.protocol);
        buffer.push_str("\" ");
        let _ = write!(
            buffer,
            "{} {} {}",
            request.status, request.response_size, request.duration
        );
    })
}

/// Substitute `{name}` path tokens from safe params, falling back to unsafe
/// params; unmatched tokens stay verbatim.
fn render_path(request: &RequestLog, buffer: &mut String) {
    let path = request.path.as_str();
    let mut copied_up_to = 0;
    for captures in PATH_PARAMETER_PATTERN.captures_iter(path) {
        let (Some(token), Some(name)) = (captures.get(0), captures.get(1)) else {
            continue;
        };
        let value = request
            .params
            .get(name.as_str())
            .or_else(|| request.unsafe_params.get(name.as_str()));
        if let Some(value) = value {
            buffer.push_str(&path[copied_up_to..token.start()]);
            formatting::safe_string(value, buffer);
            copied_up_to = token.end();
        }
    }
    buffer.push_str(&path[copied_up_to..]);
}

/// `[time] event_name (values)`.
pub fn format_event(event: &EventLog) -> String {
    formatting::with_scratch_buffer(|buffer| {
        buffer.push('[');
        formatting::format_instant(&event.time, buffer);
        buffer.push_str("] ");
        buffer.push_str(&event.event_name);
        buffer.push(' ');
        formatting::nice_map(&event.values, buffer);
    })
}

/// `[time] METRIC name type (values) (tags) (unsafe_params)` with one
/// parenthesized group per non-empty map, in that fixed order.
pub fn format_metric(metric: &MetricLog) -> String {
    formatting::with_scratch_buffer(|buffer| {
        buffer.push('[');
        formatting::format_instant(&metric.time, buffer);
        buffer.push_str("] METRIC ");
        buffer.push_str(&metric.metric_name);
        buffer.push(' ');
        buffer.push_str(&metric.metric_type);
        for group in [&metric.values, &metric.tags, &metric.unsafe_params] {
            if !group.is_empty() {
                buffer.push(' ');
                formatting::nice_map(group, buffer);
            }
        }
    })
}

/// `[time] traceId: T id: I name: N duration: D microseconds`; annotations
/// and unsafe params are decoded but never rendered.
pub fn format_trace(trace: &TraceLog) -> String {
    formatting::with_scratch_buffer(|buffer| {
        buffer.push('[');
        formatting::format_instant(&trace.time, buffer);
        let span = &trace.span;
        let _ = write!(
            buffer,
            "] traceId: {} id: {} name: {} duration: {} microseconds",
            span.trace_id, span.id, span.name, span.duration
        );
    })
}
