use std::env;
use std::io::IsTerminal;
use tracing::debug;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

/// Logs go to stderr because stdout carries the generated script. A file
/// layer is added when `LOG_FILE_PATH` is set; keep the returned guard alive
/// until exit so it gets flushed.
pub fn init_logger(verbosity: u8) -> Option<WorkerGuard> {
    let filter = match verbosity {
        0 => env::var("TRACING_LEVEL").unwrap_or_else(|_| "warn".to_string()),
        1 => "debug".to_string(),
        _ => "trace".to_string(),
    };
    let filter_layer = EnvFilter::new(filter);

    let (file_layer, guard) = match env::var("LOG_FILE_PATH") {
        Ok(log_file_path) => {
            let file_appender = tracing_appender::rolling::never(".", log_file_path);
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            let layer = fmt::layer().with_writer(non_blocking).with_ansi(false);
            (Some(layer), Some(guard))
        }
        Err(_) => (None, None),
    };

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_file(false)
                .without_time()
                .with_ansi(ansi_enabled(
                    std::io::stderr().is_terminal(),
                    env::var_os("NO_COLOR").is_some(),
                )),
        )
        .with(file_layer)
        .with(filter_layer)
        .init();

    debug!("Tracing is configured (file logging: {})", guard.is_some());

    guard
}

/// Escape codes only reach a terminal, and never when `NO_COLOR` is set.
fn ansi_enabled(is_terminal: bool, no_color: bool) -> bool {
    is_terminal && !no_color
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ansi_only_on_terminal() {
        assert!(ansi_enabled(true, false));
        assert!(!ansi_enabled(false, false));
        assert!(!ansi_enabled(true, true));
    }
}
