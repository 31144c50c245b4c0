use gloo::console;
use log::{Level, LevelFilter, Log, Metadata, Record};

/// Forwards `log` records from the backend crate to the browser console
struct ConsoleLogger;

static CONSOLE_LOGGER: ConsoleLogger = ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format!("[{}] {}", record.target(), record.args());
        match record.level() {
            Level::Error => console::error!(line),
            Level::Warn => console::warn!(line),
            Level::Info => console::info!(line),
            Level::Debug | Level::Trace => console::debug!(line),
        }
    }

    fn flush(&self) {}
}

/// Install the console logger. Safe to call more than once.
pub fn init(level: LevelFilter) {
    if log::set_logger(&CONSOLE_LOGGER).is_ok() {
        log::set_max_level(level);
    }
}

pub struct Logger;

impl Logger {
    pub fn debug_with_component(component: &str, message: &str) {
        log::debug!(target: component, "{}", message);
    }

    pub fn info_with_component(component: &str, message: &str) {
        log::info!(target: component, "{}", message);
    }

    pub fn warn_with_component(component: &str, message: &str) {
        log::warn!(target: component, "{}", message);
    }

    pub fn error_with_component(component: &str, message: &str) {
        log::error!(target: component, "{}", message);
    }
}
