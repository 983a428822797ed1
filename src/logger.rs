use flexi_logger::{style, DeferredNow, FlexiLoggerError, Logger, LoggerHandle};
use log::{debug, Record};

/// Starts logging to stderr at `level`, unless `RUST_LOG` says otherwise.
///
/// The returned handle must be kept alive for as long as log output is wanted.
pub fn configure(level: &str) -> Result<LoggerHandle, FlexiLoggerError> {
    let handle = Logger::try_with_env_or_str(level)?
        .log_to_stderr()
        .format(colour_format)
        .start()?;
    debug!("Logging to stderr at level: {}", level);
    Ok(handle)
}

fn colour_format(
    out: &mut dyn std::io::Write,
    now: &mut DeferredNow,
    rec: &Record,
) -> Result<(), std::io::Error> {
    let level = rec.level();
    write!(
        out,
        "[{}] {} {}:{}: {}",
        now.format("%Y-%m-%d %H:%M:%S%.3f"),
        style(level).paint(level.to_string()),
        rec.module_path().unwrap_or("<unknown>"),
        rec.line().unwrap_or(0),
        rec.args()
    )
}
