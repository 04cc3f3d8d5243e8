use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use folio_core::config::LoggingConfig;
use folio_core::FolioError;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

pub const LOG_ENV_VAR: &str = "FOLIO_LOG";
pub const LOG_FILE_NAME: &str = "folio.log";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    Quiet,
    Normal,
    Verbose,
}

impl Verbosity {
    pub fn from_flags(verbose: bool, quiet: bool) -> Self {
        if verbose {
            Self::Verbose
        } else if quiet {
            Self::Quiet
        } else {
            Self::Normal
        }
    }
}

pub fn default_log_path() -> Option<PathBuf> {
    dirs::data_dir()
        .or_else(dirs::data_local_dir)
        .map(|dir| dir.join("folio").join(LOG_FILE_NAME))
}

/// Installs the global subscriber writing to the log file. The terminal
/// belongs to the UI, so nothing is ever written to stderr from here.
///
/// Returns the log path, or `None` when no data directory exists.
pub fn init(config: &LoggingConfig, verbosity: Verbosity) -> Result<Option<PathBuf>, FolioError> {
    let Some(path) = config.file.clone().or_else(default_log_path) else {
        return Ok(None);
    };
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|err| FolioError::io(parent, err))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .map_err(|err| FolioError::io(&path, err))?;

    let layer = fmt::layer()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true);
    // A subscriber may already be installed (tests); keep the existing one.
    let _ = tracing_subscriber::registry()
        .with(build_env_filter(verbosity, &config.level))
        .with(layer)
        .try_init();

    Ok(Some(path))
}

/// `FOLIO_LOG` > `RUST_LOG` > flags > configured level.
fn build_env_filter(verbosity: Verbosity, configured: &str) -> EnvFilter {
    if let Ok(directives) = std::env::var(LOG_ENV_VAR) {
        if let Ok(filter) = EnvFilter::try_new(&directives) {
            return filter;
        }
    }
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }
    let directive = filter_directive(verbosity, configured);
    EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new("info"))
}

pub fn filter_directive(verbosity: Verbosity, configured: &str) -> String {
    match verbosity {
        Verbosity::Quiet => "error".to_string(),
        Verbosity::Verbose => "debug".to_string(),
        Verbosity::Normal => {
            let configured = configured.trim();
            if configured.is_empty() {
                "info".to_string()
            } else {
                configured.to_string()
            }
        }
    }
}
