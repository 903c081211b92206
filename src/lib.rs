//! `sift` — render structured JSON log records interleaved in console streams.
//!
//! A family of structured record types (service, request, event, metric,
//! trace, audit, diagnostic, wrapped) appears as single-line JSON objects
//! mixed with arbitrary text in a live console stream. This library cheaply
//! classifies candidate lines, decodes them into typed records, dispatches
//! each record to a caller-supplied [`LogVisitor`], and — for the reference
//! [`LogFormatter`] — renders it into a stable human-readable form. Lines
//! that fail any step degrade to plain text; nothing in the pipeline panics
//! or returns an error to the caller.
//!
//! # Example
//!
//! ```
//! use sift::{LogFormatter, LogParser};
//!
//! let parser = LogParser::new(LogFormatter);
//! let line = r#"{"type":"event.2","time":"2019-12-25T01:02:03Z","eventName":"deploy","values":{"node":"a1"}}"#;
//! let rendered = parser.try_parse(line).unwrap();
//! assert_eq!(rendered, "[2019-12-25T01:02:03Z] deploy (node: a1)");
//!
//! assert!(sift::may_contain_record(line));
//! assert!(!sift::may_contain_record("plain console output"));
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod formatter;
mod formatting;
pub mod kind;
pub mod parser;
pub mod records;
pub mod visitor;

// Re-export primary API types for convenience.
pub use config::Config;
pub use error::SiftError;
pub use formatter::LogFormatter;
pub use kind::{KindVisitor, RecordKind};
pub use parser::{LogParser, may_contain_record};
pub use records::LogLevel;
pub use visitor::LogVisitor;
