//! Log bridge for the shortcut-bridge binary.
//!
//! Routes `log::info!()` and friends from all workspace crates to stderr.
//! Level precedence: the `--log-level` flag, then `RUST_LOG`, then `warn`.
//! Library users install their own logger instead.

use log::{LevelFilter, Log, Metadata, Record};
use parking_lot::Mutex;
use std::io::Write;
use std::time::{SystemTime, UNIX_EPOCH};

struct StderrLogger {
    level: LevelFilter,
    // Serialises writes so lines from different threads do not interleave.
    lock: Mutex<()>,
}

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let _guard = self.lock.lock();
        let _ = writeln!(
            std::io::stderr(),
            "[{}] [{:<5}] [{}] {}",
            get_timestamp(),
            record.level(),
            record.target(),
            record.args()
        );
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

fn get_timestamp() -> String {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    format!("{}.{:06}", now.as_secs(), now.subsec_micros())
}

/// Resolve the effective level from the CLI flag and `RUST_LOG`.
pub fn resolve_level(cli_level: Option<LevelFilter>) -> LevelFilter {
    level_from(cli_level, std::env::var("RUST_LOG").ok().as_deref())
}

/// Pick the CLI level, then a parsable `env_value`, then `Warn`.
fn level_from(cli_level: Option<LevelFilter>, env_value: Option<&str>) -> LevelFilter {
    cli_level
        .or_else(|| env_value.and_then(|value| value.trim().parse::<LevelFilter>().ok()))
        .unwrap_or(LevelFilter::Warn)
}

/// Install the stderr logger. Later calls are no-ops.
pub fn init_log_bridge(cli_level: Option<LevelFilter>) {
    let level = resolve_level(cli_level);
    let logger = StderrLogger {
        level,
        lock: Mutex::new(()),
    };
    if log::set_boxed_logger(Box::new(logger)).is_ok() {
        log::set_max_level(level);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_level_wins() {
        assert_eq!(resolve_level(Some(LevelFilter::Trace)), LevelFilter::Trace);
        assert_eq!(
            level_from(Some(LevelFilter::Error), Some("debug")),
            LevelFilter::Error
        );
    }

    #[test]
    fn test_env_value_fallback() {
        assert_eq!(level_from(None, Some("debug")), LevelFilter::Debug);
        assert_eq!(level_from(None, Some(" INFO ")), LevelFilter::Info);
    }

    #[test]
    fn test_default_is_warn() {
        assert_eq!(level_from(None, None), LevelFilter::Warn);
        assert_eq!(level_from(None, Some("shortcut_bridge=trace")), LevelFilter::Warn);
    }
}
