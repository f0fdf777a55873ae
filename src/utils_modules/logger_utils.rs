use crate::common::*;

#[doc = "Log line format shared by the file and stdout writers."]
fn log_format(
    w: &mut dyn Write,
    now: &mut DeferredNow,
    record: &Record,
) -> Result<(), std::io::Error> {
    write!(
        w,
        "[{}] [{}] T[{}] {} - {}",
        now.format("%Y-%m-%d %H:%M:%S%.3f"),
        record.level(),
        std::thread::current().name().unwrap_or("<unnamed>"),
        record.module_path().unwrap_or("<unknown>"),
        record.args()
    )
}

#[doc = "Function that installs the global logger"]
/// Logs go to `logs/es_oper_*.log`, rotated daily, and are duplicated to stdout.
/// The level comes from `RUST_LOG` and falls back to `info`.
///
/// # Returns
/// * LoggerHandle - must be kept alive for as long as the program logs
pub fn set_global_logger() -> LoggerHandle {
    let log_directory: &str = "logs";

    Logger::try_with_env_or_str("info")
        .unwrap_or_else(|e| panic!("[set_global_logger] invalid log spec: {:?}", e))
        .log_to_file(
            FileSpec::default()
                .directory(log_directory)
                .basename("es_oper"),
        )
        .rotate(
            Criterion::Age(Age::Day),
            Naming::Timestamps,
            Cleanup::KeepLogFiles(10),
        )
        .format_for_files(log_format)
        .format_for_stdout(log_format)
        .duplicate_to_stdout(Duplicate::Info)
        .start()
        .unwrap_or_else(|e| panic!("[set_global_logger] failed to start logger: {:?}", e))
}
