// src/logging/mod.rs
use std::fs::{self, OpenOptions};
use std::io;
use std::path::Path;

use log::LevelFilter;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoggingError {
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("Logger already initialised: {0}")]
    AlreadyInitialised(#[from] log::SetLoggerError),
}

pub type Result<T> = std::result::Result<T, LoggingError>;

/// Build the env_logger configuration used by the binary.
///
/// `RUST_LOG` still refines the filter on top of `level`. When `log_file` is
/// set, records are appended there instead of going to stderr.
pub fn builder(level: LevelFilter, log_file: Option<&Path>) -> Result<env_logger::Builder> {
    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(level)
        .parse_default_env()
        .format_timestamp_secs()
        .format_module_path(true)
        .format_target(true);

    if let Some(path) = log_file {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    } else {
        builder.target(env_logger::Target::Stderr);
    }

    Ok(builder)
}

pub fn init(level: LevelFilter, log_file: Option<&Path>) -> Result<()> {
    builder(level, log_file)?.try_init()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_file_and_parent_directory_are_created() {
        let dir = std::env::temp_dir().join(format!("passgen-logging-{}", std::process::id()));
        let path = dir.join("nested").join("passgen.log");

        builder(LevelFilter::Debug, Some(&path)).unwrap();
        assert!(path.exists());

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn stderr_builder_needs_no_filesystem() {
        assert!(builder(LevelFilter::Warn, None).is_ok());
    }
}
