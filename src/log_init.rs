use log::{LevelFilter, Metadata, Record};
use std::fs::OpenOptions;
use std::io::Write;

use crate::error::Result;

struct FileLogger {
    file_path: String,
    level: LevelFilter,
}

impl log::Log for FileLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            if let Ok(mut file) = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&self.file_path)
            {
                let _ = writeln!(
                    file,
                    "[{}] {}: {}",
                    record.level(),
                    record.target(),
                    record.args()
                );
            }
        }
    }

    fn flush(&self) {}
}

/// Append log records up to `level` to the file at `path`.
///
/// Scanning, guard rejections and edits log at `trace` and `debug`.
pub fn init_logger(path: &str, level: LevelFilter) -> Result<()> {
    let logger = FileLogger {
        file_path: path.to_string(),
        level,
    };
    log::set_boxed_logger(Box::new(logger))?;
    log::set_max_level(level);
    Ok(())
}
