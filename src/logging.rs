//! Logger setup: terminal at the configured level, optional debug file.

use std::fs::File;

use simplelog::{
    ColorChoice, CombinedLogger, Config as LogConfig, LevelFilter, SharedLogger, TermLogger,
    TerminalMode, WriteLogger,
};

use crate::core::config::Config;
use crate::core::error::{Result, SoundscapeError};

/// The terminal logger is always built; a file that cannot be created is
/// returned as an error alongside it instead of dropping both.
fn build_loggers(config: &Config) -> (Vec<Box<dyn SharedLogger>>, Option<SoundscapeError>) {
    let mut loggers: Vec<Box<dyn SharedLogger>> = vec![TermLogger::new(
        config.level_filter(),
        LogConfig::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )];

    let mut file_error = None;
    if let Some(path) = &config.log_file {
        match File::create(path) {
            Ok(file) => loggers.push(WriteLogger::new(
                LevelFilter::Debug,
                LogConfig::default(),
                file,
            )),
            Err(e) => file_error = Some(SoundscapeError::io(path, e)),
        }
    }

    (loggers, file_error)
}

pub(crate) fn init(config: &Config) -> Result<()> {
    let (loggers, file_error) = build_loggers(config);

    CombinedLogger::init(loggers)?;

    if let Some(e) = file_error {
        log::warn!("Log file disabled: {e}");
    }
    Ok(())
}
