//! Command-line argument definitions for `sift`.
//!
//! Uses [`clap`] derive macros for argument parsing.

use clap::{Parser, ValueEnum};

/// Render structured JSON log records interleaved in a console stream.
///
/// Reads lines from stdin; lines holding a structured record are decoded and
/// rendered as human-readable text, everything else passes through unchanged.
#[derive(Debug, Parser)]
#[command(name = "sift", version, about, long_about = None)]
pub struct Cli {
    /// Control color output.
    ///
    /// `auto` enables colors only when stdout is a TTY and `NO_COLOR` is unset.
    /// Defaults to `auto` unless overridden by the config file.
    #[arg(short = 'c', long, value_enum)]
    pub color: Option<ColorMode>,

    /// Hide these record kinds (comma-separated).
    ///
    /// Hidden records are dropped from the output entirely; plain text always
    /// passes through.
    #[arg(short = 'H', long, value_delimiter = ',', value_parser = parse_kind_arg)]
    pub hide: Option<Vec<String>>,

    /// Path to configuration file.
    #[arg(long)]
    pub config: Option<std::path::PathBuf>,

    /// Report lines that look like structured records but fail to decode.
    ///
    /// Diagnostics go to stderr; `SIFT_LOG` overrides the verbosity.
    #[arg(short = 'v', long)]
    pub verbose: bool,
}

/// Color output mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    /// Enable colors only when stdout is a TTY.
    Auto,
    /// Always enable colors.
    Always,
    /// Never enable colors.
    Never,
}

/// Parse a record kind argument as a case-insensitive name.
fn parse_kind_arg(s: &str) -> Result<String, String> {
    let lower = s.to_lowercase();
    match lower.as_str() {
        "service" | "request" | "event" | "metric" | "trace" => Ok(lower),
        _ => Err(format!(
            "invalid record kind '{s}': expected one of service, request, event, metric, trace"
        )),
    }
}
