/// cli/src/logger.rs
/// description: stderr backend for the `log` facade used by mt22_core.
/// Each record is prefixed with its level, styled with `console`.
use console::Style;
use log::{Level, LevelFilter, Log, Metadata, Record};

struct ConsoleLogger {
    max: LevelFilter,
}

impl ConsoleLogger {
    fn style_for(level: Level) -> Style {
        match level {
            Level::Error => Style::new().red().bold(),
            Level::Warn => Style::new().yellow(),
            Level::Info => Style::new().cyan(),
            Level::Debug | Level::Trace => Style::new().dim(),
        }
    }
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.max
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let tag = format!("[{:<5}]", record.level());
        eprintln!(
            "{} {}",
            Self::style_for(record.level()).apply_to(tag),
            record.args()
        );
    }

    fn flush(&self) {}
}

/// Maps `-v` repetitions to a level: none = warnings, -v = info, -vv = debug, more = trace.
pub fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

pub fn init(verbosity: u8) {
    let max = level_for(verbosity);
    if log::set_boxed_logger(Box::new(ConsoleLogger { max })).is_ok() {
        log::set_max_level(max);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_raises_the_level() {
        assert_eq!(level_for(0), LevelFilter::Warn);
        assert_eq!(level_for(1), LevelFilter::Info);
        assert_eq!(level_for(2), LevelFilter::Debug);
        assert_eq!(level_for(7), LevelFilter::Trace);
    }
}
