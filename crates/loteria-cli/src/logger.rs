use chrono::Local;
use log::{Level, LevelFilter, Metadata, Record};

/// Writes timestamped log lines to stderr
pub struct StderrLogger {
    level: LevelFilter,
}

impl StderrLogger {
    pub fn new(level: LevelFilter) -> Self {
        Self { level }
    }

    pub fn init(self) -> Result<(), log::SetLoggerError> {
        let level = self.level;
        log::set_boxed_logger(Box::new(self))?;
        log::set_max_level(level);
        Ok(())
    }
}

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let tag = match record.level() {
                Level::Error => "ERROR",
                Level::Warn => "WARN",
                Level::Info => "INFO",
                Level::Debug => "DEBUG",
                Level::Trace => "TRACE",
            };
            eprintln!(
                "{} [{}] {}",
                Local::now().format("%H:%M:%S%.3f"),
                tag,
                record.args()
            );
        }
    }

    fn flush(&self) {}
}
