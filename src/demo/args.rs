use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
pub struct Args {
    /// When turned on, logs are written to stderr.
    #[clap(short = 'e', long = "log_to_stderr", default_value = "false")]
    pub stderr_log: bool,

    /// When set, logs are written to FILE
    #[clap(short = 'f', long = "log_to_file", default_value = None, value_name = "FILE")]
    pub file_log: Option<PathBuf>,

    /// When set, config is read from FILE instead of the default location
    #[clap(short = 'c', long = "config", default_value = None, value_name = "FILE")]
    pub config_file: Option<PathBuf>,
}

impl Args {
    pub fn config_path(&self) -> PathBuf {
        if let Some(path) = &self.config_file {
            return path.clone();
        }

        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("textmenu")
            .join("config.ron")
    }
}
