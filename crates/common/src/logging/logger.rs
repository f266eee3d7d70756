// -------------------------------------------------------------------------------------------------
//  Copyright (C) 2015-2026 Nautech Systems Pty Ltd. All rights reserved.
//  https://nautechsystems.io
//
//  Licensed under the GNU Lesser General Public License Version 3.0 (the "License");
//  You may not use this file except in compliance with the License.
//  You may obtain a copy of the License at https://www.gnu.org/licenses/lgpl-3.0.en.html
//
//  Unless required by applicable law or agreed to in writing, software
//  distributed under the License is distributed on an "AS IS" BASIS,
//  WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//  See the License for the specific language governing permissions and
//  limitations under the License.
// -------------------------------------------------------------------------------------------------

use std::{
    fmt::Display,
    sync::{Mutex, atomic::Ordering},
};

use ahash::AHashMap;
use chrono::{DateTime, SecondsFormat, Utc};
use indexmap::IndexMap;
use log::{
    Level, LevelFilter, Log, STATIC_MAX_LEVEL,
    kv::{ToValue, Value},
    set_boxed_logger, set_max_level,
};
use serde::{Deserialize, Serialize, Serializer};
use ustr::Ustr;

pub use super::config::LoggerConfig;
use super::{LOGGING_COLORED, LOGGING_INITIALIZED};
use crate::{
    enums::LogColor,
    logging::writer::{LogWriter, StderrWriter, StdoutWriter},
};

const KV_COLOR: &str = "color";
const KV_COMPONENT: &str = "component";

/// A synchronous logger writing to stdout and stderr.
///
/// Edit processing is a short computation on the UI thread, so lines are written in place
/// rather than handed to a background thread.
#[derive(Debug)]
pub struct Logger {
    /// Configuration for logging levels and behavior.
    pub config: LoggerConfig,
    module_filters_sorted: Vec<(Ustr, LevelFilter)>,
    writers: Mutex<(StdoutWriter, StderrWriter)>,
}

/// Represents a log event which includes a message.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LogLine {
    /// The timestamp for the event.
    pub timestamp: DateTime<Utc>,
    /// The log level for the event.
    pub level: Level,
    /// The color for the log message content.
    pub color: LogColor,
    /// The component the log event originated from.
    pub component: Ustr,
    /// The log message content.
    pub message: String,
}

impl Display for LogLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}: {}", self.level, self.component, self.message)
    }
}

/// A wrapper around a log line that provides formatted and cached representations.
#[derive(Clone, Debug)]
pub struct LogLineWrapper {
    /// The underlying log line that contains the log data.
    line: LogLine,
    /// Cached plain string representation of the log line.
    cache: Option<String>,
    /// Cached colored string representation of the log line.
    colored: Option<String>,
}

impl LogLineWrapper {
    /// Creates a new [`LogLineWrapper`] instance.
    #[must_use]
    pub const fn new(line: LogLine) -> Self {
        Self {
            line,
            cache: None,
            colored: None,
        }
    }

    #[must_use]
    pub const fn line(&self) -> &LogLine {
        &self.line
    }

    /// Returns the plain log message string, caching the result.
    pub fn get_string(&mut self) -> &str {
        self.cache.get_or_insert_with(|| {
            format!(
                "{} [{}] {}: {}\n",
                format_timestamp(self.line.timestamp),
                self.line.level,
                &self.line.component,
                &self.line.message,
            )
        })
    }

    /// Returns the colored log message string, caching the result.
    pub fn get_colored(&mut self) -> &str {
        self.colored.get_or_insert_with(|| {
            format!(
                "\x1b[1m{}\x1b[0m {}[{}] {}: {}\x1b[0m\n",
                format_timestamp(self.line.timestamp),
                &self.line.color.as_ansi(),
                self.line.level,
                &self.line.component,
                &self.line.message,
            )
        })
    }

    /// Returns the log message as a JSON line.
    #[must_use]
    pub fn get_json(&self) -> String {
        match serde_json::to_string(&self) {
            Ok(json_string) => format!("{json_string}\n"),
            Err(e) => format!("{{\"error\":\"{e}\"}}\n"),
        }
    }
}

impl Serialize for LogLineWrapper {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut json_obj = IndexMap::new();
        json_obj.insert("timestamp", format_timestamp(self.line.timestamp));
        json_obj.insert("level", self.line.level.to_string());
        json_obj.insert("color", self.line.color.to_string());
        json_obj.insert("component", self.line.component.to_string());
        json_obj.insert("message", self.line.message.clone());

        json_obj.serialize(serializer)
    }
}

fn format_timestamp(timestamp: DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Nanos, true)
}

impl Log for Logger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        metadata.level() == Level::Error || metadata.level() <= self.config.stdout_level
    }

    fn log(&self, record: &log::Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let level = record.level();
        let key_values = record.key_values();
        let color: LogColor = key_values
            .get(KV_COLOR.into())
            .and_then(|v| v.to_u64().map(|v| (v as u8).into()))
            .unwrap_or(level.into());
        let component = key_values.get(KV_COMPONENT.into()).map_or_else(
            || Ustr::from(record.metadata().target()),
            |v| Ustr::from(&v.to_string()),
        );

        if should_filter_log(
            &component,
            level,
            &self.module_filters_sorted,
            &self.config.component_level,
            self.config.log_components_only,
        ) {
            return;
        }

        let mut wrapper = LogLineWrapper::new(LogLine {
            timestamp: Utc::now(),
            level,
            color,
            component,
            message: format!("{}", record.args()),
        });

        let Ok(mut writers) = self.writers.lock() else {
            eprintln!("Logger writers poisoned, dropping: {}", wrapper.line());
            return;
        };
        let (stdout_writer, stderr_writer) = &mut *writers;

        let text = if self.config.is_json {
            wrapper.get_json()
        } else if self.config.is_colored {
            wrapper.get_colored().to_string()
        } else {
            wrapper.get_string().to_string()
        };

        if stderr_writer.enabled(wrapper.line()) {
            stderr_writer.write(&text);
        }
        if stdout_writer.enabled(wrapper.line()) {
            stdout_writer.write(&text);
        }
    }

    fn flush(&self) {
        if let Ok(mut writers) = self.writers.lock() {
            writers.0.flush();
            writers.1.flush();
        }
    }
}

impl Logger {
    /// Creates a new [`Logger`] instance without registering it.
    #[must_use]
    pub fn new(config: LoggerConfig) -> Self {
        let writers = (
            StdoutWriter::new(config.stdout_level, config.is_colored),
            StderrWriter::new(config.is_colored),
        );
        Self {
            module_filters_sorted: config.module_filters_sorted(),
            config,
            writers: Mutex::new(writers),
        }
    }

    /// Initializes the logger based on the `CURRENCY_FIELD_LOG` environment variable.
    ///
    /// # Errors
    ///
    /// Returns an error if reading the environment variable or parsing the configuration fails.
    pub fn init_with_env() -> anyhow::Result<()> {
        let config = LoggerConfig::from_env()?;
        Self::init_with_config(config)
    }

    /// Initializes the logger with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if another `log` implementation is already registered.
    pub fn init_with_config(config: LoggerConfig) -> anyhow::Result<()> {
        if LOGGING_INITIALIZED.load(Ordering::SeqCst) {
            return Ok(());
        }

        let is_colored = config.is_colored;
        let print_config = config.print_config;
        if print_config {
            println!("STATIC_MAX_LEVEL={STATIC_MAX_LEVEL}");
            println!("Logger initialized with {config:?}");
        }

        #[cfg(feature = "tracing-bridge")]
        if config.use_tracing && !super::bridge::tracing_is_initialized() {
            super::bridge::init_tracing()?;
        }

        set_boxed_logger(Box::new(Self::new(config)))?;

        let max_level = LevelFilter::Trace;
        set_max_level(max_level);

        if print_config {
            println!("Logger set as `log` implementation with max level {max_level}");
        }

        LOGGING_INITIALIZED.store(true, Ordering::SeqCst);
        LOGGING_COLORED.store(is_colored, Ordering::SeqCst);
        Ok(())
    }
}

/// Determines if a log line should be filtered out based on module and component filters.
///
/// Returns `true` if the line should be skipped (filtered out), `false` if it should be logged.
///
/// The `module_filters_sorted` slice must be pre-sorted by descending path length so the
/// first `starts_with` match is the longest prefix.
#[must_use]
pub fn should_filter_log(
    component: &Ustr,
    line_level: Level,
    module_filters_sorted: &[(Ustr, LevelFilter)],
    component_level: &AHashMap<Ustr, LevelFilter>,
    log_components_only: bool,
) -> bool {
    if module_filters_sorted.is_empty() && component_level.is_empty() {
        return log_components_only;
    }

    let module_filter = module_filters_sorted
        .iter()
        .find(|(path, _)| component.starts_with(path.as_str()))
        .map(|(_, level)| *level);

    let component_filter = component_level.get(component).copied();

    if log_components_only && module_filter.is_none() && component_filter.is_none() {
        return true;
    }

    // Module filter takes precedence over component filter
    if let Some(filter_level) = module_filter.or(component_filter)
        && line_level > filter_level
    {
        return true;
    }

    false
}

/// Logs `message` at `level` on behalf of `component`, with an explicit `color`.
pub fn log<T: AsRef<str>>(level: Level, color: LogColor, component: Ustr, message: T) {
    let color = Value::from(color as u8);

    match level {
        Level::Trace => {
            log::trace!(component = component.to_value(), color = color; "{}", message.as_ref());
        }
        Level::Debug => {
            log::debug!(component = component.to_value(), color = color; "{}", message.as_ref());
        }
        Level::Info => {
            log::info!(component = component.to_value(), color = color; "{}", message.as_ref());
        }
        Level::Warn => {
            log::warn!(component = component.to_value(), color = color; "{}", message.as_ref());
        }
        Level::Error => {
            log::error!(component = component.to_value(), color = color; "{}", message.as_ref());
        }
    }
}
