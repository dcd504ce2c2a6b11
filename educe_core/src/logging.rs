// educe_core/src/logging.rs
use crate::storage::paths::log_dir;
use flexi_logger::{Cleanup, Criterion, DeferredNow, FileSpec, Logger, Naming, WriteMode};
use log::Record;
use once_cell::sync::Lazy;
use std::io::Write;
use std::sync::Mutex;

/// Most recent message, for on-screen status lines.
pub static LAST_LOG: Lazy<Mutex<String>> = Lazy::new(|| Mutex::new(String::new()));

/// Log and remember the message so the UI layer can display it.
#[macro_export]
macro_rules! onscreen_log {
    ($lvl:expr, $($arg:tt)*) => {{
        log::log!($lvl, $($arg)*);
        if let Ok(mut buf) = $crate::logging::LAST_LOG.lock() {
            *buf = format!($($arg)*);
        }
    }};
}

#[macro_export]
macro_rules! onscreen_info  { ($($arg:tt)*) => { $crate::onscreen_log!(log::Level::Info,  $($arg)*) }; }

#[macro_export]
macro_rules! onscreen_warn  { ($($arg:tt)*) => { $crate::onscreen_log!(log::Level::Warn,  $($arg)*) }; }

#[macro_export]
macro_rules! onscreen_error { ($($arg:tt)*) => { $crate::onscreen_log!(log::Level::Error, $($arg)*) }; }

#[macro_export]
macro_rules! onscreen_debug { ($($arg:tt)*) => { $crate::onscreen_log!(log::Level::Debug, $($arg)*) }; }

/// Take a copy of the most recent message.
pub fn last_message() -> String {
    LAST_LOG.lock().map(|buf| buf.clone()).unwrap_or_default()
}

fn formatter(
    write: &mut dyn Write,
    now: &mut DeferredNow,
    record: &Record,
) -> Result<(), std::io::Error> {
    write!(
        write,
        "{} {:5} [{}] {}",
        now.format("%Y-%m-%d %H:%M:%S%.3f"),
        record.level(),
        record.module_path().unwrap_or("<unknown>"),
        &record.args()
    )
}

/// Start the rotating file logger. Binaries call this once at startup;
/// library code only uses the `log` facade.
pub fn init_file_logger(spec: &str) -> Result<(), flexi_logger::FlexiLoggerError> {
    let dir = log_dir();

    let file_spec = FileSpec::default()
        .directory(&dir)
        .basename("educe")
        .suffix("log");

    Logger::try_with_str(spec)?
        .log_to_file(file_spec)
        .format(formatter)
        .rotate(
            Criterion::Size(5_000_000),
            Naming::Numbers,
            Cleanup::KeepLogFiles(5),
        )
        .write_mode(WriteMode::BufferAndFlush)
        .start()?;

    onscreen_info!("Log dir: {}.", dir.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    #[test]
    fn onscreen_macros_remember_the_last_message() {
        onscreen_info!("hello {}", 42);
        assert_eq!(super::last_message(), "hello 42");
        onscreen_warn!("replaced");
        assert_eq!(super::last_message(), "replaced");
    }
}
