use std::io::Write;

use chrono::Local;
use colored::{ColoredString, Colorize};
use log::{Level, LevelFilter};

trait ColoredLevel {
    fn colored(&self) -> ColoredString;
}

impl ColoredLevel for Level {
    fn colored(&self) -> ColoredString {
        match self {
            Self::Error => Self::Error.as_str().red(),
            Self::Warn => Self::Warn.as_str().yellow(),
            Self::Info => Self::Info.as_str().green(),
            Self::Debug => Self::Debug.as_str().blue(),
            Self::Trace => Self::Trace.as_str().cyan(),
        }
    }
}

/// Initializes stderr logging. The more verbose the log level,
/// the more info is displayed in each log header.
pub fn init(log_level: LevelFilter) {
    env_logger::Builder::new()
        .filter_level(log_level)
        .format(move |buf, record| match log_level {
            LevelFilter::Error | LevelFilter::Warn | LevelFilter::Info => writeln!(
                buf,
                "{level:width$} {sep} {args}",
                level = record.level().colored(),
                width = 5,
                sep = "=>".bold(),
                args = record.args(),
            ),
            LevelFilter::Debug | LevelFilter::Trace => writeln!(
                buf,
                "[{time} {level:width$} {module}] {sep} {args}",
                time = Local::now().format("%H:%M:%S"),
                level = record.level().colored(),
                module = record.module_path().unwrap_or("").bright_yellow(),
                sep = "=>".bold(),
                args = record.args(),
                width = 5,
            ),
            LevelFilter::Off => Ok(()),
        })
        .init();
}
