use std::path::Path;

use flexi_logger::{FileSpec, Logger, LoggerHandle};

/*
The terminal is busy displaying menus, so logging goes nowhere unless explicitly
asked for. The returned handle must stay alive for the duration of the program,
or the file writer stops flushing.
 */
pub fn logger_setup(stderr_log: bool, file_log: Option<&Path>) -> Option<LoggerHandle> {
    let spec = if stderr_log || file_log.is_some() { "debug" } else { "off" };

    let logger = match Logger::try_with_env_or_str(spec) {
        Ok(logger) => logger,
        Err(e) => {
            eprintln!("failed parsing log spec: {}", e);
            return None;
        }
    };

    let logger = match file_log {
        Some(path) => match FileSpec::try_from(path) {
            Ok(file_spec) => logger.log_to_file(file_spec),
            Err(e) => {
                eprintln!("bad log file path {:?}: {}", path, e);
                return None;
            }
        },
        None => logger.log_to_stderr(),
    };

    match logger.start() {
        Ok(handle) => Some(handle),
        Err(e) => {
            eprintln!("failed initializing log: {}", e);
            None
        }
    }
}
