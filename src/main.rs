use std::io::{self, BufRead, BufWriter, IsTerminal, Write};
use std::process::ExitCode;

use clap::Parser;
use owo_colors::OwoColorize;

use sift::cli::{Cli, ColorMode};
use sift::config::Config;
use sift::formatter::LogFormatter;
use sift::kind::KindVisitor;
use sift::parser::LogParser;
use sift::visitor::LogVisitor;

fn main() -> ExitCode {
    // Reset SIGPIPE to default behavior so upstream writers get a clean
    // SIGPIPE signal instead of a BrokenPipeError when sift exits early.
    reset_sigpipe();

    let cli = Cli::parse();
    init_diagnostics(cli.verbose);

    let config = match Config::from_cli(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("sift: {e}");
            return ExitCode::from(1);
        }
    };

    let use_color = resolve_color_mode(config.color_mode);

    // One decode per line yields both the rendered text and the display tag.
    let parser = LogParser::new(LogFormatter.combine_with(KindVisitor, |text, kind| (text, kind)));

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut writer = BufWriter::new(stdout.lock());

    let reader = stdin.lock();
    for line_result in reader.lines() {
        let line = match line_result {
            Ok(l) => l,
            Err(e) if e.kind() == io::ErrorKind::InvalidData => continue,
            Err(e) => {
                eprintln!("sift: read error: {e}");
                return ExitCode::from(2);
            }
        };

        let parsed = if sift::may_contain_record(&line) {
            parser.try_parse(&line)
        } else {
            None
        };

        let written = match parsed {
            Some((text, kind)) => {
                if !config.show.shows(kind) {
                    continue;
                }
                if use_color {
                    writeln!(writer, "{}", text.style(kind.style()))
                } else {
                    writeln!(writer, "{text}")
                }
            }
            None => writeln!(writer, "{line}"),
        };

        if let Err(e) = written {
            if e.kind() == io::ErrorKind::BrokenPipe {
                return ExitCode::SUCCESS;
            }
            eprintln!("sift: write error: {e}");
            return ExitCode::from(2);
        }
    }

    if let Err(e) = writer.flush() {
        if e.kind() == io::ErrorKind::BrokenPipe {
            return ExitCode::SUCCESS;
        }
        eprintln!("sift: flush error: {e}");
        return ExitCode::from(2);
    }

    ExitCode::SUCCESS
}

/// Decode-failure diagnostics go to stderr, silenced unless `--verbose` is
/// given or `SIFT_LOG` selects a level.
fn init_diagnostics(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let default_filter = if verbose { "sift=warn" } else { "off" };
    let filter =
        EnvFilter::try_from_env("SIFT_LOG").unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn resolve_color_mode(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            let stdout = io::stdout();
            if !stdout.is_terminal() {
                return false;
            }
            if std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty()) {
                return false;
            }
            if std::env::var("TERM").is_ok_and(|v| v == "dumb") {
                return false;
            }
            true
        }
    }
}

/// Reset SIGPIPE to the default (terminate) behavior.
///
/// By default, Rust ignores SIGPIPE to surface `BrokenPipe` I/O errors.
/// For a CLI filter like `sift`, this causes the *upstream* writer (e.g. a
/// Python process) to receive a `BrokenPipeError` when `sift` exits.
/// Restoring `SIG_DFL` lets the OS handle the signal normally.
#[cfg(unix)]
fn reset_sigpipe() {
    unsafe {
        libc::signal(libc::SIGPIPE, libc::SIG_DFL);
    }
}

#[cfg(not(unix))]
fn reset_sigpipe() {}
