//! Configuration management with TOML file support.
//!
//! Merges settings from three sources (highest precedence first):
//! 1. CLI flags
//! 2. Config file (`~/.config/sift/config.toml` or `$XDG_CONFIG_HOME/sift/config.toml`)
//! 3. Built-in defaults (everything shown)
//!
//! The core pipeline never sees any of this: the binary consumes the show
//! table purely as a per-kind boolean predicate over decoded record tags.

use std::path::PathBuf;

use serde::Deserialize;

use crate::cli::{Cli, ColorMode};
use crate::error::SiftError;
use crate::kind::RecordKind;

/// Runtime configuration merged from defaults, config file, and CLI arguments.
///
/// Use [`Config::from_cli`] to build from parsed CLI arguments, or
/// [`Config::default`] for built-in defaults (useful in tests and benchmarks).
#[derive(Debug, Clone)]
pub struct Config {
    /// Color output mode (auto/always/never).
    pub color_mode: ColorMode,
    /// Per-kind display predicate for structured records.
    pub show: ShowKinds,
}

/// Which record kinds the host displays; plain text always passes.
#[derive(Debug, Clone, Copy)]
pub struct ShowKinds {
    pub service: bool,
    pub request: bool,
    pub event: bool,
    pub metric: bool,
    pub trace: bool,
}

impl Default for ShowKinds {
    fn default() -> Self {
        Self {
            service: true,
            request: true,
            event: true,
            metric: true,
            trace: true,
        }
    }
}

impl ShowKinds {
    /// Whether a line tagged with `kind` should be written.
    pub fn shows(&self, kind: RecordKind) -> bool {
        match kind {
            RecordKind::Service(_) => self.service,
            RecordKind::Request => self.request,
            RecordKind::Event => self.event,
            RecordKind::Metric => self.metric,
            RecordKind::Trace => self.trace,
            RecordKind::Plain => true,
        }
    }

    fn hide(&mut self, kind_name: &str) {
        match kind_name {
            "service" => self.service = false,
            "request" => self.request = false,
            "event" => self.event = false,
            "metric" => self.metric = false,
            "trace" => self.trace = false,
            _ => {}
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            color_mode: ColorMode::Auto,
            show: ShowKinds::default(),
        }
    }
}

impl Config {
    /// Build a [`Config`] from CLI arguments, loading the config file if present.
    ///
    /// Merge precedence: CLI flags > config file > defaults.
    pub fn from_cli(cli: &Cli) -> Result<Self, SiftError> {
        let mut config = Self::default();

        let config_path = cli.config.clone().unwrap_or_else(Self::default_config_path);
        if config_path.exists() {
            let file_config = FileConfig::load(&config_path)?;
            config.apply_file_config(&file_config);
        }

        if let Some(color) = cli.color {
            config.color_mode = color;
        }

        if let Some(ref hidden) = cli.hide {
            for kind_name in hidden {
                config.show.hide(kind_name);
            }
        }

        Ok(config)
    }

    /// Default config file path: `$XDG_CONFIG_HOME/sift/config.toml` or
    /// `~/.config/sift/config.toml`.
    fn default_config_path() -> PathBuf {
        if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME") {
            PathBuf::from(xdg).join("sift").join("config.toml")
        } else if let Some(home) = std::env::var_os("HOME") {
            PathBuf::from(home)
                .join(".config")
                .join("sift")
                .join("config.toml")
        } else {
            PathBuf::from(".config/sift/config.toml")
        }
    }

    /// Apply settings from a parsed config file.
    fn apply_file_config(&mut self, file: &FileConfig) {
        if let Some(ref color) = file.color {
            self.color_mode = match color.as_str() {
                "always" => ColorMode::Always,
                "never" => ColorMode::Never,
                _ => ColorMode::Auto,
            };
        }

        if let Some(ref show) = file.show {
            if let Some(service) = show.service {
                self.show.service = service;
            }
            if let Some(request) = show.request {
                self.show.request = request;
            }
            if let Some(event) = show.event {
                self.show.event = event;
            }
            if let Some(metric) = show.metric {
                self.show.metric = metric;
            }
            if let Some(trace) = show.trace {
                self.show.trace = trace;
            }
        }
    }
}

/// Config file structure (TOML deserialization).
#[derive(Debug, Deserialize)]
struct FileConfig {
    color: Option<String>,
    show: Option<ShowConfig>,
}

#[derive(Debug, Deserialize)]
struct ShowConfig {
    service: Option<bool>,
    request: Option<bool>,
    event: Option<bool>,
    metric: Option<bool>,
    trace: Option<bool>,
}

impl FileConfig {
    fn load(path: &PathBuf) -> Result<Self, SiftError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            SiftError::Config(format!("cannot read config file {}: {e}", path.display()))
        })?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }
}
