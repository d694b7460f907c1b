use crate::config;
use log::{LevelFilter, Record};
#[cfg(not(target_os = "android"))]
use log::{Log, Metadata};

// Diagnostics go through the `log` facade. Applications with their own
// logger can ignore this module entirely; init() only exists so that a
// bare program still sees missing-symbol warnings somewhere.

#[cfg(target_os = "android")]
pub fn init_with_level(level: LevelFilter) {
    android_logger::init_once(
        android_logger::Config::default()
            .with_tag("glcaps")
            .with_min_level(level.to_level().unwrap_or(log::Level::Error)),
    );
    log::set_max_level(level);
}

#[cfg(not(target_os = "android"))]
pub fn init_with_level(level: LevelFilter) {
    // Somebody else already installed a logger, leave it alone.
    if log::set_logger(&STDERR_LOGGER).is_ok() {
        log::set_max_level(level);
    }
}

pub fn init() {
    let cfg = config::get();
    init_with_level(cfg.log_level);
    cfg.report_rejected();
}

#[cfg(not(target_os = "android"))]
static STDERR_LOGGER: StderrLogger = StderrLogger;

#[cfg(not(target_os = "android"))]
struct StderrLogger;

#[cfg(not(target_os = "android"))]
impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        return metadata.level() <= log::max_level();
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("{}", format_record(record));
        }
    }

    fn flush(&self) {}
}

fn format_record(record: &Record) -> String {
    return format!("[glcaps] {:<5} {}", record.level(), record.args());
}
