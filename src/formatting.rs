//! Text utilities shared between the per-variant renderers.

use std::cell::RefCell;
use std::fmt::Write;

use serde_json::Value;

use crate::records::Params;

/// A single formatted line never reasonably exceeds this; a buffer that does
/// is handed to the caller instead of being retained for the thread.
const SCRATCH_RETAIN_LIMIT: usize = 16 * 1024;

thread_local! {
    static SCRATCH: RefCell<String> = RefCell::new(String::with_capacity(1024));
}

/// Run `f` against a per-thread scratch buffer and return its contents.
///
/// The buffer is cleared before and after use; it is never shared across
/// threads, so no locking is involved.
pub(crate) fn with_scratch_buffer<F>(f: F) -> String
where
    F: FnOnce(&mut String),
{
    SCRATCH.with(|cell| {
        let mut buffer = cell.borrow_mut();
        buffer.clear();
        f(&mut buffer);
        if buffer.len() > SCRATCH_RETAIN_LIMIT {
            // One abnormally large record must not pin memory for the
            // thread's lifetime: give the allocation away.
            std::mem::take(&mut *buffer)
        } else {
            let result = buffer.clone();
            buffer.clear();
            result
        }
    })
}

/// Append the display form of a JSON value; never fails.
///
/// Strings are unquoted, scalars render as-is, arrays and objects as compact
/// JSON. If serialization itself errors the deterministic fallback
/// `<kind>@<identity>` is appended instead.
pub(crate) fn safe_string(value: &Value, buffer: &mut String) {
    match value {
        Value::String(s) => buffer.push_str(s),
        Value::Null => buffer.push_str("null"),
        Value::Bool(b) => {
            let _ = write!(buffer, "{b}");
        }
        Value::Number(n) => {
            let _ = write!(buffer, "{n}");
        }
        composite => match serde_json::to_string(composite) {
            Ok(json) => buffer.push_str(&json),
            Err(_) => {
                let kind = if composite.is_array() { "array" } else { "object" };
                let _ = write!(buffer, "{kind}@{:x}", std::ptr::from_ref(composite) as usize);
            }
        },
    }
}

/// Append `(k: v, k: v)` for a parameter map, in insertion order.
pub(crate) fn nice_map(params: &Params, buffer: &mut String) {
    buffer.push('(');
    format_params_to(params, buffer);
    if !params.is_empty() {
        buffer.truncate(buffer.len() - 2);
    }
    buffer.push(')');
}

/// Append `k: v, ` for every entry, leaving the trailing separator for the
/// caller to trim once all groups are written.
pub(crate) fn format_params_to(params: &Params, buffer: &mut String) {
    for (key, value) in params {
        buffer.push_str(key);
        buffer.push_str(": ");
        safe_string(value, buffer);
        buffer.push_str(", ");
    }
}

/// Append an ISO-8601 UTC instant. Fractional seconds render in groups of
/// three digits (`.950`, never `.95`) and are omitted entirely when zero.
pub(crate) fn format_instant(time: &jiff::Timestamp, buffer: &mut String) {
    let nanos = time.subsec_nanosecond();
    let precision: usize = if nanos == 0 {
        0
    } else if nanos % 1_000_000 == 0 {
        3
    } else if nanos % 1_000 == 0 {
        6
    } else {
        9
    };
    let _ = write!(buffer, "{time:.precision$}");
}

/// Strip leading and trailing newline characters.
pub(crate) fn trim_newlines(text: &str) -> &str {
    text.trim_matches('\n')
}
