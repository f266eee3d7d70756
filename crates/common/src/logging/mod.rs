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

//! The logging framework for currency fields.
//!
//! Library code logs through the `log` facade, tagging records with a `component` key (and
//! optionally a `color`). The [`Logger`](logger::Logger) implementation installed here writes
//! those records synchronously to stdout/stderr as plain, colored or JSON lines.
//!
//! Nothing is written until a logger is installed, either explicitly via [`init_logging`] or
//! lazily via [`ensure_logging_initialized`].

pub mod config;
pub mod logger;
pub mod writer;

#[cfg(feature = "tracing-bridge")]
pub mod bridge;

use std::{
    env,
    str::FromStr,
    sync::{
        OnceLock,
        atomic::{AtomicBool, Ordering},
    },
};

use log::LevelFilter;

use self::logger::{Logger, LoggerConfig};

/// The environment variable holding the logger spec string.
pub const LOG_ENV_VAR: &str = "CURRENCY_FIELD_LOG";

static LOGGING_INITIALIZED: AtomicBool = AtomicBool::new(false);
static LOGGING_COLORED: AtomicBool = AtomicBool::new(true);
static LAZY_INIT: OnceLock<bool> = OnceLock::new();

/// Returns whether the logger has been installed.
pub fn logging_is_initialized() -> bool {
    LOGGING_INITIALIZED.load(Ordering::Relaxed)
}

/// Ensures logging is initialized on first use.
///
/// If `CURRENCY_FIELD_LOG` is set and valid, initializes the logger with that config.
/// Otherwise, initializes with INFO level to stdout.
///
/// Returns `true` if logging is available, `false` if another `log` implementation
/// already owns the facade.
pub fn ensure_logging_initialized() -> bool {
    if LOGGING_INITIALIZED.load(Ordering::SeqCst) {
        return true;
    }

    LAZY_INIT.get_or_init(|| {
        let config = env::var(LOG_ENV_VAR)
            .ok()
            .and_then(|spec| LoggerConfig::from_spec(&spec).ok())
            .unwrap_or_default();

        Logger::init_with_config(config).is_ok()
    });

    LOGGING_INITIALIZED.load(Ordering::SeqCst)
}

/// Returns whether the logger is using ANSI colors.
pub fn logging_is_colored() -> bool {
    LOGGING_COLORED.load(Ordering::Relaxed)
}

/// Initializes logging with the given configuration.
///
/// Calling this after the logger is installed is a no-op.
///
/// # Errors
///
/// Returns an error if another `log` implementation is already registered.
pub fn init_logging(config: LoggerConfig) -> anyhow::Result<()> {
    Logger::init_with_config(config)
}

/// Parses a string into a [`LevelFilter`].
///
/// Accepts `WARNING` as an alias of `WARN`, case-insensitively.
///
/// # Errors
///
/// Returns an error if the provided string is not a valid `LevelFilter`.
pub fn parse_level_filter_str(s: &str) -> anyhow::Result<LevelFilter> {
    let mut log_level_str = s.to_uppercase();
    if log_level_str == "WARNING" {
        log_level_str = "WARN".to_string();
    }
    LevelFilter::from_str(&log_level_str)
        .map_err(|_| anyhow::anyhow!("Invalid log level string: '{s}'"))
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("trace", LevelFilter::Trace)]
    #[case("DEBUG", LevelFilter::Debug)]
    #[case("Info", LevelFilter::Info)]
    #[case("warning", LevelFilter::Warn)]
    #[case("WARN", LevelFilter::Warn)]
    #[case("error", LevelFilter::Error)]
    #[case("off", LevelFilter::Off)]
    fn test_parse_level_filter_str(#[case] input: &str, #[case] expected: LevelFilter) {
        assert_eq!(parse_level_filter_str(input).unwrap(), expected);
    }

    #[rstest]
    fn test_parse_level_filter_str_invalid() {
        let err = parse_level_filter_str("verbose").unwrap_err();
        assert!(err.to_string().contains("'verbose'"));
    }

    #[rstest]
    fn test_ensure_logging_initialized_is_idempotent() {
        let first = ensure_logging_initialized();
        let second = ensure_logging_initialized();

        assert_eq!(first, second);
        assert_eq!(logging_is_initialized(), first);
    }
}
