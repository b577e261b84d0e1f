//! Stderr logging for genpath front ends.
//!
//! Three verbosity modes are supported: `quiet` prints nothing, `normal`
//! prints errors and warnings, `verbose` adds informational and debug lines.
//! The mode comes from CLI flags first, then from `GENPATH_LOG_MODE`.
//!
//! [`init_logger`] also installs the logger behind the [`log`] facade, so
//! diagnostics emitted with `log::debug!` inside the library (for instance
//! by the configuration loader) follow the same mode. The path value type
//! itself never logs.

use std::env;
use std::fmt;

use once_cell::sync::OnceCell;

/// Environment variable consulted by [`init_logger`].
pub const LOG_MODE_ENV: &str = "GENPATH_LOG_MODE";

static INSTALLED: OnceCell<Logger> = OnceCell::new();

/// Verbosity mode, ordered from least to most output.
///
/// ```
/// use genpath::LogLevel;
///
/// assert!(LogLevel::Quiet < LogLevel::Normal);
/// assert!(LogLevel::Normal < LogLevel::Verbose);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    /// No output at all.
    Quiet,
    /// Errors and warnings.
    Normal,
    /// Everything, debug lines included.
    Verbose,
}

impl LogLevel {
    /// Parse a mode name, ignoring case.
    ///
    /// # Errors
    ///
    /// Returns a message naming the value when it is not `quiet`, `normal`
    /// or `verbose`.
    ///
    /// ```
    /// use genpath::LogLevel;
    ///
    /// assert_eq!(LogLevel::parse("VERBOSE").unwrap(), LogLevel::Verbose);
    /// assert!(LogLevel::parse("trace").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "quiet" => Ok(Self::Quiet),
            "normal" => Ok(Self::Normal),
            "verbose" => Ok(Self::Verbose),
            _ => Err(format!("invalid log mode '{s}', expected quiet, normal or verbose")),
        }
    }

    /// Mode needed to show a record of the given `log` level.
    fn required_for(level: log::Level) -> Self {
        match level {
            log::Level::Error | log::Level::Warn => Self::Normal,
            log::Level::Info | log::Level::Debug | log::Level::Trace => Self::Verbose,
        }
    }

    fn max_level_filter(self) -> log::LevelFilter {
        match self {
            Self::Quiet => log::LevelFilter::Off,
            Self::Normal => log::LevelFilter::Warn,
            Self::Verbose => log::LevelFilter::Debug,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Quiet => "quiet",
            Self::Normal => "normal",
            Self::Verbose => "verbose",
        };
        f.write_str(name)
    }
}

/// Writes prefixed diagnostic lines to stderr.
///
/// ```
/// use genpath::{Logger, LogLevel};
///
/// let logger = Logger::new(LogLevel::Normal);
/// assert!(logger.accepts(LogLevel::Normal));
/// assert!(!logger.accepts(LogLevel::Verbose));
/// logger.warn("unknown scheme 'ftp'");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Logger {
    level: LogLevel,
}

impl Logger {
    /// Creates a logger for the given mode.
    #[must_use]
    pub const fn new(level: LogLevel) -> Self {
        Self { level }
    }

    /// Returns the mode of this logger.
    #[must_use]
    pub const fn level(&self) -> LogLevel {
        self.level
    }

    /// Returns `true` if lines needing `required` are written.
    #[must_use]
    pub fn accepts(&self, required: LogLevel) -> bool {
        self.level >= required
    }

    fn write(&self, required: LogLevel, prefix: &str, message: fmt::Arguments<'_>) {
        if self.accepts(required) {
            eprintln!("{prefix}: {message}");
        }
    }

    /// Writes an `ERROR:` line unless quiet.
    pub fn error(&self, message: &str) {
        self.write(LogLevel::Normal, "ERROR", format_args!("{message}"));
    }

    /// Writes a `WARN:` line unless quiet.
    pub fn warn(&self, message: &str) {
        self.write(LogLevel::Normal, "WARN", format_args!("{message}"));
    }

    /// Writes an `INFO:` line in verbose mode.
    pub fn info(&self, message: &str) {
        self.write(LogLevel::Verbose, "INFO", format_args!("{message}"));
    }

    /// Writes a `DEBUG:` line in verbose mode.
    pub fn debug(&self, message: &str) {
        self.write(LogLevel::Verbose, "DEBUG", format_args!("{message}"));
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(LogLevel::Normal)
    }
}

impl log::Log for Logger {
    fn enabled(&self, metadata: &log::Metadata<'_>) -> bool {
        self.accepts(LogLevel::required_for(metadata.level()))
    }

    fn log(&self, record: &log::Record<'_>) {
        let prefix = match record.level() {
            log::Level::Error => "ERROR",
            log::Level::Warn => "WARN",
            log::Level::Info => "INFO",
            log::Level::Debug | log::Level::Trace => "DEBUG",
        };
        self.write(
            LogLevel::required_for(record.level()),
            prefix,
            *record.args(),
        );
    }

    fn flush(&self) {}
}

fn level_from_env() -> Option<LogLevel> {
    env::var(LOG_MODE_ENV)
        .ok()
        .and_then(|value| LogLevel::parse(&value).ok())
}

/// Resolves the logging mode and installs the logger.
///
/// `verbose` wins over `quiet`; with neither flag, `GENPATH_LOG_MODE` is
/// used when it holds a valid mode, and `normal` otherwise.
///
/// The first call in a process also registers the logger with the [`log`]
/// facade. Later calls only return a logger for the resolved mode.
///
/// ```
/// use genpath::{init_logger, LogLevel};
///
/// assert_eq!(init_logger(true, true).level(), LogLevel::Verbose);
/// ```
#[must_use]
pub fn init_logger(verbose: bool, quiet: bool) -> Logger {
    let level = if verbose {
        LogLevel::Verbose
    } else if quiet {
        LogLevel::Quiet
    } else {
        level_from_env().unwrap_or(LogLevel::Normal)
    };
    let logger = Logger::new(level);

    if INSTALLED.set(logger).is_ok() {
        if let Some(installed) = INSTALLED.get() {
            if log::set_logger(installed).is_ok() {
                log::set_max_level(level.max_level_filter());
            }
        }
    }

    logger
}
