//! Module implementing logging for the application.
//!
//! This includes setting up log filtering given a verbosity value,
//! as well as defining how the logs are being formatted to stderr.

use std::env;
use std::io;

use log::SetLoggerError;
use slog::{self, Drain, Level, o};
use slog_scope::GlobalLoggerGuard;


/// Environment variable that overrides the verbosity flags when set.
const LOG_ENV_VAR: &str = "RUST_LOG";

/// Default logging level, used when no verbosity flags have been passed.
const DEFAULT_LEVEL: Level = Level::Info;


/// Initialize logging with given verbosity.
/// The verbosity value has the same meaning as in args::Options::verbosity.
///
/// The returned guard must be kept alive for as long as the program logs anything.
pub fn init(verbosity: isize) -> Result<GlobalLoggerGuard, SetLoggerError> {
    let decorator = slog_term::PlainSyncDecorator::new(io::stderr());
    let drain = slog_term::FullFormat::new(decorator).build().fuse();

    // RUST_LOG, if present, takes precedence over the command line flags.
    let (logger, level) = if env::var_os(LOG_ENV_VAR).is_some() {
        let drain = slog_envlogger::new(drain).fuse();
        (slog::Logger::root(drain, o!()), Level::Trace)
    } else {
        let level = level_for_verbosity(verbosity);
        let drain = slog::LevelFilter::new(drain, level).fuse();
        (slog::Logger::root(drain, o!()), level)
    };

    let guard = slog_scope::set_global_logger(logger);
    slog_stdlog::init_with_level(log_level(level))?;
    Ok(guard)
}


/// Map the verbosity (number of -v flags minus the number of -q flags)
/// to the minimum level of messages that are logged.
fn level_for_verbosity(verbosity: isize) -> Level {
    let index = DEFAULT_LEVEL.as_usize() as isize + verbosity;
    let index = index.max(Level::Critical.as_usize() as isize)
        .min(Level::Trace.as_usize() as isize);
    Level::from_usize(index as usize).unwrap_or(DEFAULT_LEVEL)
}

/// Convert slog's logging level to the one used by the log crate.
fn log_level(level: Level) -> log::Level {
    match level {
        Level::Critical | Level::Error => log::Level::Error,
        Level::Warning => log::Level::Warn,
        Level::Info => log::Level::Info,
        Level::Debug => log::Level::Debug,
        Level::Trace => log::Level::Trace,
    }
}


#[cfg(test)]
mod tests {
    use slog::Level;
    use spectral::prelude::*;
    use super::level_for_verbosity;

    #[test]
    fn default_verbosity() {
        assert_that!(level_for_verbosity(0)).is_equal_to(Level::Info);
    }

    #[test]
    fn verbose() {
        assert_that!(level_for_verbosity(1)).is_equal_to(Level::Debug);
        assert_that!(level_for_verbosity(2)).is_equal_to(Level::Trace);
        assert_that!(level_for_verbosity(10)).is_equal_to(Level::Trace);
    }

    #[test]
    fn quiet() {
        assert_that!(level_for_verbosity(-1)).is_equal_to(Level::Warning);
        assert_that!(level_for_verbosity(-2)).is_equal_to(Level::Error);
        assert_that!(level_for_verbosity(-3)).is_equal_to(Level::Critical);
        assert_that!(level_for_verbosity(-10)).is_equal_to(Level::Critical);
    }
}
