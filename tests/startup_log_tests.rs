// =====================================================
// FILE: tests/startup_log_tests.rs - STARTUP LOGGING
// =====================================================

use chatcmd_plugins::Config;
use log::{Level, LevelFilter, Log, Metadata, Record};
use std::sync::Mutex;

struct CaptureLogger {
    lines: Mutex<Vec<String>>,
}

impl Log for CaptureLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= Level::Debug
    }

    fn log(&self, record: &Record) {
        if let Ok(mut lines) = self.lines.lock() {
            lines.push(record.args().to_string());
        }
    }

    fn flush(&self) {}
}

static LOGGER: CaptureLogger = CaptureLogger {
    lines: Mutex::new(Vec::new()),
};

#[tokio::test]
async fn test_startup_lines_emitted_after_logger_init() {
    log::set_logger(&LOGGER).unwrap();
    log::set_max_level(LevelFilter::Debug);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("chatcmd.toml");
    tokio::fs::write(&path, "[general]\nbot_name = \"Filed\"\nprefix = \"!\"\n")
        .await
        .unwrap();

    // Loading stays silent; the binary logs once its logger is up
    let config = Config::from_file(&path).await.unwrap();
    assert!(LOGGER.lines.lock().unwrap().is_empty());

    config.log_startup();
    Config::default().log_startup();

    let lines = LOGGER.lines.lock().unwrap();
    assert!(lines.iter().any(|l| l.starts_with("Filed v")));
    assert!(lines
        .iter()
        .any(|l| l.contains("chatcmd.toml (prefix '!', 0 tag labels)")));
    assert!(lines.iter().any(|l| l == "No config file found, using defaults"));
    assert!(lines.iter().any(|l| l.starts_with("Config: <defaults>")));
}
