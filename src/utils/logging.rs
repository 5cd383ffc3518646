use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

/// Environment variable holding an `EnvFilter` directive, e.g. `beacon=debug`.
pub const LOG_ENV_VAR: &str = "BEACON_LOG";
pub const DEFAULT_DIRECTIVE: &str = "beacon=info";

/// Where diagnostics go for this run. The terminal belongs to the UI, so
/// tracing output is only ever written to a file.
pub struct LoggingState {
    file_path: Option<PathBuf>,
}

impl LoggingState {
    pub fn disabled() -> Self {
        Self { file_path: None }
    }

    pub fn is_active(&self) -> bool {
        self.file_path.is_some()
    }

    pub fn get_status_string(&self) -> String {
        match &self.file_path {
            None => "disabled".to_string(),
            Some(path) => format!(
                "active ({})",
                path.file_name().unwrap_or_default().to_string_lossy()
            ),
        }
    }
}

fn open_log_file(path: &Path) -> Result<File, Box<dyn std::error::Error>> {
    if let Some(parent) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    Ok(file)
}

pub fn filter_from_directive(directive: Option<&str>) -> EnvFilter {
    directive
        .and_then(|value| EnvFilter::try_new(value).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_DIRECTIVE))
}

/// Install the global subscriber when a log file was requested.
pub fn init_tracing(log_file: Option<&Path>) -> Result<LoggingState, Box<dyn std::error::Error>> {
    let Some(path) = log_file else {
        return Ok(LoggingState::disabled());
    };

    let file = open_log_file(path)?;
    let directive = std::env::var(LOG_ENV_VAR).ok();
    let filter = filter_from_directive(directive.as_deref());

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .map_err(|err| -> Box<dyn std::error::Error> { err })?;

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "beacon logging started");
    Ok(LoggingState {
        file_path: Some(path.to_path_buf()),
    })
}
