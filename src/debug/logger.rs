use colored::*;
use log::{Level, LevelFilter, Metadata, Record, SetLoggerError};

/* Records go to stderr so that stdout only carries the listing */
struct StderrLogger;

fn level_tag(level: Level) -> ColoredString {
    match level {
        Level::Error => "[E]".red(),
        Level::Warn => "[W]".bright_yellow(),
        Level::Info => "[I]".blue(),
        Level::Debug => "[D]".green(),
        Level::Trace => "[T]".bright_black(),
    }
}

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("{}>[{}, {}:{}] {}",
                      level_tag(record.level()),
                      record.target(),
                      record.file().unwrap_or("Unknown File"),
                      record.line().unwrap_or(0),
                      record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

/// Level for a given number of `-v` flags.
pub fn verbosity_to_level(verbosity: u64) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Install the global logger. Fails if a logger is already set.
pub fn logger_init(verbosity: u64) -> Result<(), SetLoggerError> {
    log::set_logger(&LOGGER)
        .map(|()| log::set_max_level(verbosity_to_level(verbosity)))
}
