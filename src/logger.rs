use flexi_logger::{
    style, Age, Cleanup, Criterion, DeferredNow, Duplicate, FileSpec, Logger,
    LoggerHandle, Naming, WriteMode,
};
use log::{debug, Level, Record};
use std::path::Path;

/**
 *  Starts the global logger at the given level (e.g., "info", or a full
 *  flexi_logger spec such as "info, online_colouring::cbip=debug").
 *
 *  With a log directory, records go to daily-rotated files there and warnings
 *  (or everything, when 'verbose') are duplicated to stdout. Without one,
 *  records go to stderr only.
 *
 *  Note: the returned handle must be kept alive until the program ends, so
 *    that buffered records get flushed.
 */
pub fn configure(
    level: &str,
    verbose: bool,
    directory: Option<&Path>,
) -> Result<LoggerHandle, Box<dyn std::error::Error>> {
    let logger = Logger::try_with_str(level)?.format(colour_format);

    let handle = match directory {
        Some(dir) => {
            let dup = if verbose { Duplicate::All } else { Duplicate::Warn };
            let handle = logger
                .log_to_file(FileSpec::default().directory(dir))
                .duplicate_to_stdout(dup)
                .write_mode(WriteMode::BufferAndFlush)
                .rotate(
                    Criterion::Age(Age::Day),
                    Naming::Timestamps,
                    Cleanup::KeepLogFiles(7),
                )
                .start()?;
            debug!("Logging to directory: {}", dir.display());
            handle
        }
        None => logger.log_to_stderr().start()?,
    };

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
        "[{}] {} {}: {}",
        style(Level::Debug).paint(now.format("%Y-%m-%d %H:%M:%S%.3f").to_string()),
        style(level).paint(level.to_string()),
        rec.module_path().unwrap_or("<unknown>"),
        style(level).paint(rec.args().to_string())
    )
}
